// src/models/tide.rs

use chrono::{Local as DataLocal, NaiveDate};
use serde::{Deserialize, Serialize};

use super::place::Coordenadas;

// Uma leitura da tábua de marés ("hora" vem como HH:MM do servidor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeituraMare {
    pub hora: String,
    pub altura: f64,
}

// Resposta de GET /mares/{AAAA-MM-DD}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuaMare {
    pub data: String,
    pub dados: Vec<LeituraMare>,
}

// Âncora fixa do marcador de marés na orla
pub const ANCORA_MARE: Coordenadas = Coordenadas {
    lat: -3.0206125094,
    lng: -39.6507740021,
};

pub fn hoje() -> NaiveDate {
    DataLocal::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabua_desserializa_a_resposta_do_servidor() {
        let corpo = r#"{
            "data": "2026-08-07",
            "dados": [
                { "hora": "04:12", "altura": 0.3 },
                { "hora": "10:26", "altura": 2.8 }
            ]
        }"#;
        let tabua: TabuaMare = serde_json::from_str(corpo).unwrap();
        assert_eq!(tabua.data, "2026-08-07");
        assert_eq!(tabua.dados.len(), 2);
        assert_eq!(tabua.dados[1].altura, 2.8);
    }

    #[test]
    fn ancora_da_mare_esta_dentro_do_intervalo() {
        assert!(ANCORA_MARE.eh_valida());
    }

    #[test]
    fn hoje_formata_no_padrao_da_rota() {
        // a rota é /mares/AAAA-MM-DD
        let dia = hoje().format("%Y-%m-%d").to_string();
        assert_eq!(dia.len(), 10);
        assert_eq!(dia.matches('-').count(), 2);
    }
}
