// src/services/viewport.rs

use serde::Serialize;

use crate::models::place::Coordenadas;

// Quem pede o foco diz se quer inspecionar um local ou enquadrar uma
// região; o controlador não tenta adivinhar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NivelFoco {
    Local,
    Regiao,
}

impl NivelFoco {
    pub fn zoom(&self) -> f64 {
        match self {
            NivelFoco::Local => 18.0,
            NivelFoco::Regiao => 16.0,
        }
    }

    pub fn duracao_s(&self) -> f64 {
        match self {
            NivelFoco::Local => 1.5,
            NivelFoco::Regiao => 1.0,
        }
    }
}

// Destino de animação do mapa. No máximo um em voo por vez.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlvoFoco {
    pub coords: Coordenadas,
    pub nivel: NivelFoco,
}

// Ordem de animação entregue à camada de mapa (fire-and-forget;
// uma nova ordem interrompe a anterior).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComandoVoo {
    pub destino: Coordenadas,
    pub zoom: f64,
    pub duracao_s: f64,
}

// Dono único do AlvoFoco. O foco é um comando explícito, emitido por
// quem clicou (busca, botão de região, item da lista) — não um efeito
// reativo de re-render.
#[derive(Debug, Default)]
pub struct ControladorViewport {
    foco: Option<AlvoFoco>,
}

impl ControladorViewport {
    pub fn novo() -> Self {
        Self::default()
    }

    // Sobrescreve qualquer alvo em voo (a última escrita vence, nada é
    // enfileirado) e devolve a ordem de animação. Pedido repetido para o
    // alvo já corrente não dispara animação nova.
    pub fn solicitar_foco(
        &mut self,
        coords: Coordenadas,
        nivel: NivelFoco,
    ) -> Option<ComandoVoo> {
        let alvo = AlvoFoco { coords, nivel };
        if self.foco == Some(alvo) {
            return None;
        }
        self.foco = Some(alvo);
        Some(ComandoVoo {
            destino: coords,
            zoom: nivel.zoom(),
            duracao_s: nivel.duracao_s(),
        })
    }

    // A camada de mapa avisa que a animação assentou
    pub fn concluir_voo(&mut self) {
        self.foco = None;
    }

    // Reset explícito para suprimir re-disparos indesejados
    pub fn limpar_foco(&mut self) {
        self.foco = None;
    }

    pub fn foco_atual(&self) -> Option<AlvoFoco> {
        self.foco
    }
}

// Enquadramento inicial do mapa na orla
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfigMapa {
    pub centro: Coordenadas,
    pub zoom_inicial: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
}

impl Default for ConfigMapa {
    fn default() -> Self {
        Self {
            centro: Coordenadas::nova(-3.0274694, -39.6503127),
            zoom_inicial: 15.0,
            zoom_min: 13.5,
            zoom_max: 18.0,
        }
    }
}
