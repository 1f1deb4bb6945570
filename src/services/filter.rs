// src/services/filter.rs

use crate::models::place::{Categoria, ConsultaCategoria, FiltroRegiao};

// Traduz a seleção da interface (botão de categoria + select de região)
// na consulta que o PlaceApi entende, e lembra qual está ativa.
#[derive(Debug, Default)]
pub struct FiltroCategorias {
    ativa: Option<ConsultaCategoria>,
}

impl FiltroCategorias {
    pub fn novo() -> Self {
        Self::default()
    }

    // Mapeamento puro; o único efeito é atualizar a consulta ativa,
    // que os consumidores observam.
    pub fn selecionar(&mut self, categoria: Categoria, regiao: FiltroRegiao) -> ConsultaCategoria {
        let consulta = ConsultaCategoria { categoria, regiao };
        self.ativa = Some(consulta.clone());
        consulta
    }

    pub fn consulta_ativa(&self) -> Option<&ConsultaCategoria> {
        self.ativa.as_ref()
    }

    pub fn limpar(&mut self) {
        self.ativa = None;
    }
}

// Rótulo dos botões da lista lateral
pub fn rotulo_botao(categoria: &Categoria) -> String {
    match categoria {
        Categoria::Hotel => "Hotéis".into(),
        Categoria::Pousada => "Pousadas".into(),
        Categoria::Bar => "Bares".into(),
        Categoria::Restaurante => "Restaurantes".into(),
        Categoria::Petiscaria => "Petiscarias".into(),
        Categoria::PontoTuristico => "Pontos Turísticos".into(),
        Categoria::Outra(valor) => valor.clone(),
    }
}
