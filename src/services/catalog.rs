// src/services/catalog.rs

use crate::{
    api::place_api::PlaceApi,
    common::error::AppError,
    models::place::{ConsultaCategoria, Local},
};

// Identifica uma busca emitida. Seleções de filtro podem trocar mais
// rápido que a rede responde; o token decide quem pode escrever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenConsulta(u64);

// Dono da lista de locais visível no mapa e na lista lateral.
// Garantia de ordem: só o resultado da busca emitida por último é
// aplicado; respostas atrasadas de buscas antigas são descartadas
// (cancelamento lógico, sem abortar a requisição).
#[derive(Debug, Default)]
pub struct CatalogoLocais {
    locais: Vec<Local>,
    erro: Option<String>,
    ultima_emitida: u64,
    ultima_aplicada: u64,
}

impl CatalogoLocais {
    pub fn novo() -> Self {
        Self::default()
    }

    // Registra uma nova busca em andamento e devolve o token dela.
    pub fn iniciar_consulta(&mut self) -> TokenConsulta {
        self.ultima_emitida += 1;
        TokenConsulta(self.ultima_emitida)
    }

    // Aplica o resultado de uma busca. Devolve false quando o resultado
    // chegou obsoleto (uma busca mais nova já foi emitida) e nada muda.
    //
    // Falha aplicada não é fatal: a lista esvazia (mapa sem marcadores)
    // e fica um aviso legível em `erro()` para o shell exibir.
    pub fn aplicar(
        &mut self,
        token: TokenConsulta,
        resultado: Result<Vec<Local>, AppError>,
    ) -> bool {
        if token.0 != self.ultima_emitida {
            tracing::debug!(
                "Descartando resposta obsoleta (token {}, atual {})",
                token.0,
                self.ultima_emitida
            );
            return false;
        }
        self.ultima_aplicada = token.0;

        match resultado {
            Ok(locais) => {
                tracing::debug!("Lista visível atualizada com {} locais", locais.len());
                self.locais = locais;
                self.erro = None;
            }
            Err(erro) => {
                tracing::warn!("Falha ao carregar os locais: {erro}");
                self.locais.clear();
                self.erro = Some(erro.to_string());
            }
        }
        true
    }

    pub async fn carregar_todos(&mut self, api: &(impl PlaceApi + ?Sized)) -> bool {
        let token = self.iniciar_consulta();
        let resultado = api.buscar_todos().await;
        self.aplicar(token, resultado)
    }

    pub async fn carregar_consulta(
        &mut self,
        api: &(impl PlaceApi + ?Sized),
        consulta: &ConsultaCategoria,
    ) -> bool {
        let token = self.iniciar_consulta();
        let resultado = api.buscar_por_consulta(consulta).await;
        self.aplicar(token, resultado)
    }

    pub fn locais(&self) -> &[Local] {
        &self.locais
    }

    // Aviso não-bloqueante da última falha aplicada, se houver
    pub fn erro(&self) -> Option<&str> {
        self.erro.as_deref()
    }

    pub fn carregando(&self) -> bool {
        self.ultima_aplicada < self.ultima_emitida
    }
}
