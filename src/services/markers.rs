// src/services/markers.rs

use serde::Serialize;

use crate::models::{
    auth::ContextoSessao,
    place::{Categoria, Coordenadas, Local},
    tide::ANCORA_MARE,
};

// Definição visual de um marcador, no formato que a camada de mapa
// consome (mesmas medidas dos ícones Leaflet: 35x35, âncora no pé).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefIcone {
    pub url: &'static str,
    pub tamanho: (u32, u32),
    pub ancora: (i32, i32),
    pub ancora_popup: (i32, i32),
}

const fn icone(url: &'static str) -> RefIcone {
    RefIcone {
        url,
        tamanho: (35, 35),
        ancora: (17, 35),
        ancora_popup: (0, -35),
    }
}

pub const ICONE_HOTEL: RefIcone = icone("/location.svg");
pub const ICONE_POUSADA: RefIcone = icone("/pin-map.svg");
pub const ICONE_BAR: RefIcone = icone("/pub.svg");
pub const ICONE_RESTAURANTE: RefIcone = icone("/restaurant.svg");
pub const ICONE_TURISTICO: RefIcone = icone("/destination.svg");
pub const ICONE_PETISCARIA: RefIcone = icone("/food.svg");
pub const ICONE_MARE: RefIcone = icone("/waves.svg");

// Categoria que o servidor inventar degrada para o ícone genérico;
// nunca é erro.
pub const ICONE_PADRAO: RefIcone =
    icone("https://cdn-icons-png.flaticon.com/512/684/684908.png");

// Função total sobre Categoria, inclusive o fallback Outra.
pub fn icone_para(categoria: &Categoria) -> &'static RefIcone {
    match categoria {
        Categoria::Hotel => &ICONE_HOTEL,
        Categoria::Pousada => &ICONE_POUSADA,
        Categoria::Bar => &ICONE_BAR,
        Categoria::Restaurante => &ICONE_RESTAURANTE,
        Categoria::PontoTuristico => &ICONE_TURISTICO,
        Categoria::Petiscaria => &ICONE_PETISCARIA,
        Categoria::Outra(_) => &ICONE_PADRAO,
    }
}

// Um marcador pronto para a camada de mapa posicionar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marcador {
    pub posicao: Coordenadas,
    pub icone: &'static RefIcone,
}

pub fn marcador_para(local: &Local) -> Marcador {
    Marcador {
        posicao: local.coordinates,
        icone: icone_para(&local.tipo),
    }
}

// Marcador fixo da tábua de marés na orla
pub fn marcador_mare() -> Marcador {
    Marcador {
        posicao: ANCORA_MARE,
        icone: &ICONE_MARE,
    }
}

// Conteúdo do popup de um local: só repasse de campos para exibição.
// O e-mail cru do contato só aparece para sessão de admin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConteudoPopup {
    pub nome: String,
    pub rotulo_tipo: String,
    pub descricao: String,
    pub telefone: Option<String>,
    pub instagram_url: Option<String>,
    pub email: Option<String>,
    pub logo_url: Option<String>,
    pub imagens: Vec<String>,
}

pub fn conteudo_popup(local: &Local, sessao: &ContextoSessao) -> ConteudoPopup {
    ConteudoPopup {
        nome: local.name.clone(),
        rotulo_tipo: local.tipo.rotulo().to_owned(),
        descricao: local.description.clone(),
        telefone: local.contacts.telefone.clone(),
        instagram_url: local.contacts.site.clone(),
        email: if sessao.eh_admin() {
            local.contacts.email.clone()
        } else {
            None
        },
        logo_url: local.logo.as_ref().map(|imagem| imagem.url.clone()),
        imagens: local.images.iter().map(|imagem| imagem.url.clone()).collect(),
    }
}
