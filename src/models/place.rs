// src/models/place.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Par latitude/longitude como o servidor serve: `{lat, lng}`.
// Esse é o formato canônico em TODAS as chamadas, inclusive no cadastro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordenadas {
    pub lat: f64,
    pub lng: f64,
}

impl Coordenadas {
    pub fn nova(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    // Invariante: lat ∈ [-90, 90], lng ∈ [-180, 180]
    pub fn eh_valida(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    // Cliques crus do mapa carregam ruído de ponto flutuante;
    // o rascunho guarda 10 casas decimais.
    pub fn arredondada(&self) -> Self {
        const FATOR: f64 = 1e10;
        Self {
            lat: (self.lat * FATOR).round() / FATOR,
            lng: (self.lng * FATOR).round() / FATOR,
        }
    }
}

// Categoria de um ponto de interesse. O conjunto é fechado, mas o servidor
// pode passar a emitir tipos novos: `Outra` absorve qualquer valor
// desconhecido em vez de derrubar a desserialização.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Categoria {
    Hotel,
    Pousada,
    Bar,
    Restaurante,
    Petiscaria,
    PontoTuristico,
    Outra(String),
}

impl From<String> for Categoria {
    fn from(valor: String) -> Self {
        match valor.trim().to_uppercase().as_str() {
            "HOTEL" => Categoria::Hotel,
            "POUSADA" => Categoria::Pousada,
            "BAR" => Categoria::Bar,
            "RESTAURANTE" => Categoria::Restaurante,
            "PETISCARIA" => Categoria::Petiscaria,
            "TURISTICO" | "TURÍSTICO" | "PONTO TURISTICO" | "PONTO TURÍSTICO" => {
                Categoria::PontoTuristico
            }
            _ => Categoria::Outra(valor),
        }
    }
}

impl From<Categoria> for String {
    fn from(categoria: Categoria) -> Self {
        categoria.como_maiusculas()
    }
}

impl Categoria {
    // Forma que o servidor emite nas listagens ("HOTEL", "TURISTICO", ...)
    pub fn como_maiusculas(&self) -> String {
        match self {
            Categoria::Hotel => "HOTEL".into(),
            Categoria::Pousada => "POUSADA".into(),
            Categoria::Bar => "BAR".into(),
            Categoria::Restaurante => "RESTAURANTE".into(),
            Categoria::Petiscaria => "PETISCARIA".into(),
            Categoria::PontoTuristico => "TURISTICO".into(),
            Categoria::Outra(valor) => valor.clone(),
        }
    }

    // Forma aceita no parâmetro `type` e no formulário de cadastro
    pub fn como_consulta(&self) -> String {
        match self {
            Categoria::Hotel => "Hotel".into(),
            Categoria::Pousada => "Pousada".into(),
            Categoria::Bar => "Bar".into(),
            Categoria::Restaurante => "Restaurante".into(),
            Categoria::Petiscaria => "Petiscaria".into(),
            Categoria::PontoTuristico => "Turistico".into(),
            Categoria::Outra(valor) => valor.clone(),
        }
    }

    // Nome de exibição
    pub fn rotulo(&self) -> &str {
        match self {
            Categoria::Hotel => "Hotel",
            Categoria::Pousada => "Pousada",
            Categoria::Bar => "Bar",
            Categoria::Restaurante => "Restaurante",
            Categoria::Petiscaria => "Petiscaria",
            Categoria::PontoTuristico => "Ponto Turístico",
            Categoria::Outra(valor) => valor,
        }
    }
}

// Zonas nomeadas do litoral. Mesma política da Categoria: valor que o
// servidor inventar cai em `Outra`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Regiao {
    Icarai,
    Moitas,
    Caetanos,
    Flecheiras,
    Outra(String),
}

impl From<String> for Regiao {
    fn from(valor: String) -> Self {
        match valor.trim().to_uppercase().as_str() {
            "ICARAÍ" | "ICARAI" => Regiao::Icarai,
            "MOITAS" => Regiao::Moitas,
            "CAETANOS" => Regiao::Caetanos,
            "FLECHEIRAS" => Regiao::Flecheiras,
            _ => Regiao::Outra(valor),
        }
    }
}

impl From<Regiao> for String {
    fn from(regiao: Regiao) -> Self {
        regiao.nome().to_owned()
    }
}

impl Regiao {
    pub const NOMEADAS: [Regiao; 4] = [
        Regiao::Icarai,
        Regiao::Moitas,
        Regiao::Caetanos,
        Regiao::Flecheiras,
    ];

    pub fn nome(&self) -> &str {
        match self {
            Regiao::Icarai => "Icaraí",
            Regiao::Moitas => "Moitas",
            Regiao::Caetanos => "Caetanos",
            Regiao::Flecheiras => "Flecheiras",
            Regiao::Outra(valor) => valor,
        }
    }

    // Âncora dos botões "voar até a região"; regiões desconhecidas não têm
    pub fn coordenadas(&self) -> Option<Coordenadas> {
        match self {
            Regiao::Icarai => Some(Coordenadas::nova(-3.027, -39.65)),
            Regiao::Moitas => Some(Coordenadas::nova(-3.006, -39.694)),
            Regiao::Caetanos => Some(Coordenadas::nova(-3.078, -39.561)),
            Regiao::Flecheiras => Some(Coordenadas::nova(-3.065, -39.651)),
            Regiao::Outra(_) => None,
        }
    }
}

// "Todas" é sentinela de interface: nunca vira parâmetro de filtro
// na chamada ao servidor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FiltroRegiao {
    Todas,
    Uma(Regiao),
}

impl FiltroRegiao {
    pub fn como_parametro(&self) -> Option<String> {
        match self {
            FiltroRegiao::Todas => None,
            FiltroRegiao::Uma(regiao) => Some(regiao.nome().to_owned()),
        }
    }
}

// Filtro de categoria + região que o usuário selecionou; vive só durante
// um ciclo de busca-e-renderização.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultaCategoria {
    pub categoria: Categoria,
    pub regiao: FiltroRegiao,
}

// Contatos do local. Todos opcionais, validados um a um na edição.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Contatos {
    #[validate(email(message = "E-mail inválido."))]
    pub email: Option<String>,
    #[validate(regex(
        path = *TELEFONE_RE,
        message = "Formato de telefone inválido. Ex: (99) 99999-9999"
    ))]
    pub telefone: Option<String>,
    #[validate(url(message = "Insira uma url válida."))]
    pub site: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imagem {
    pub url: String,
}

// Um ponto de interesse como chega do servidor. O cliente só lê:
// criação/edição/remoção acontecem no servidor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Local {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tipo: Categoria,
    #[serde(default)]
    pub localization: Option<Regiao>,
    pub coordinates: Coordenadas,
    #[serde(default)]
    pub contacts: Contatos,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<Imagem>,
    #[serde(default)]
    pub images: Vec<Imagem>,
}

// Arquivo anexado pelo formulário (logo ou foto da galeria)
#[derive(Debug, Clone, Serialize)]
pub struct Arquivo {
    pub nome: String,
    pub mime: String,
    pub dados: Vec<u8>,
}

static TELEFONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?\d{2}\)?[\s-]?\d{4,5}-?\d{4}$").unwrap());

// Dados de um local ainda não cadastrado. As coordenadas vêm do rascunho
// capturado no clique, o resto do formulário.
#[derive(Debug, Clone, Validate)]
pub struct NovoLocal {
    #[validate(length(min = 5, message = "O nome é muito curto."))]
    pub name: String,
    pub tipo: Categoria,
    #[validate(length(min = 10, message = "Descrição muito curta."))]
    pub description: String,
    #[validate(custom(function = validar_coordenadas))]
    pub coordinates: Coordenadas,
    #[validate(email(message = "E-mail inválido."))]
    pub email: String,
    #[validate(regex(
        path = *TELEFONE_RE,
        message = "Formato de telefone inválido. Ex: (99) 99999-9999"
    ))]
    pub telefone: String,
    #[validate(url(message = "Insira uma url válida."))]
    pub site: String,
    pub logo: Arquivo,
    #[validate(custom(function = validar_fotos))]
    pub fotos: Vec<Arquivo>,
}

fn validar_coordenadas(coords: &Coordenadas) -> Result<(), ValidationError> {
    if coords.eh_valida() {
        Ok(())
    } else {
        Err(ValidationError::new("coordenadas")
            .with_message("Coordenadas fora do intervalo válido.".into()))
    }
}

fn validar_fotos(fotos: &Vec<Arquivo>) -> Result<(), ValidationError> {
    if fotos.is_empty() {
        return Err(ValidationError::new("fotos")
            .with_message("Você precisa adicionar pelo menos uma foto.".into()));
    }
    if fotos.len() > 3 {
        return Err(ValidationError::new("fotos")
            .with_message("Você só pode adicionar no máximo 3 fotos.".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arquivo() -> Arquivo {
        Arquivo {
            nome: "logo.png".into(),
            mime: "image/png".into(),
            dados: vec![0u8; 4],
        }
    }

    fn novo_local_valido() -> NovoLocal {
        NovoLocal {
            name: "Pousada da Duna".into(),
            tipo: Categoria::Pousada,
            description: "Vista para o mar e café da manhã.".into(),
            coordinates: Coordenadas::nova(-3.02, -39.65),
            email: "contato@duna.com.br".into(),
            telefone: "(88) 99999-9999".into(),
            site: "https://www.instagram.com/pousadadaduna".into(),
            logo: arquivo(),
            fotos: vec![arquivo()],
        }
    }

    #[test]
    fn categoria_desconhecida_cai_em_outra() {
        assert_eq!(Categoria::from("HOTEL".to_string()), Categoria::Hotel);
        assert_eq!(Categoria::from("hotel".to_string()), Categoria::Hotel);
        assert_eq!(
            Categoria::from("turistico".to_string()),
            Categoria::PontoTuristico
        );
        assert_eq!(
            Categoria::from("CAFETERIA".to_string()),
            Categoria::Outra("CAFETERIA".into())
        );
        assert_eq!(
            Categoria::from(String::new()),
            Categoria::Outra(String::new())
        );
    }

    #[test]
    fn categoria_tem_forma_de_consulta_e_rotulo_para_todo_valor() {
        for categoria in [
            Categoria::Hotel,
            Categoria::Pousada,
            Categoria::Bar,
            Categoria::Restaurante,
            Categoria::Petiscaria,
            Categoria::PontoTuristico,
            Categoria::Outra("CAFETERIA".into()),
        ] {
            assert!(!categoria.como_consulta().is_empty());
            assert!(!categoria.rotulo().is_empty());
        }
        // valor vazio segue total: só devolve string vazia, não quebra
        assert_eq!(Categoria::Outra(String::new()).como_consulta(), "");
    }

    #[test]
    fn regiao_aceita_com_e_sem_acento() {
        assert_eq!(Regiao::from("Icaraí".to_string()), Regiao::Icarai);
        assert_eq!(Regiao::from("icarai".to_string()), Regiao::Icarai);
        assert_eq!(
            Regiao::from("Centro".to_string()),
            Regiao::Outra("Centro".into())
        );
    }

    #[test]
    fn filtro_todas_nao_vira_parametro() {
        assert_eq!(FiltroRegiao::Todas.como_parametro(), None);
        assert_eq!(
            FiltroRegiao::Uma(Regiao::Moitas).como_parametro(),
            Some("Moitas".to_string())
        );
    }

    #[test]
    fn arredondamento_trunca_ruido_de_clique() {
        let cru = Coordenadas::nova(-3.0274694123456789, -39.650312734567891);
        let arredondado = cru.arredondada();
        assert_eq!(arredondado.lat, -3.0274694123);
        assert_eq!(arredondado.lng, -39.6503127346);
        // valores já curtos não mudam
        let curto = Coordenadas::nova(-3.02, -39.65);
        assert_eq!(curto.arredondada(), curto);
    }

    #[test]
    fn coordenadas_fora_do_intervalo_sao_invalidas() {
        assert!(Coordenadas::nova(-3.02, -39.65).eh_valida());
        assert!(!Coordenadas::nova(-91.0, 0.0).eh_valida());
        assert!(!Coordenadas::nova(0.0, 180.5).eh_valida());
    }

    #[test]
    fn local_desserializa_o_formato_do_servidor() {
        let corpo = r#"{
            "id": "abc123",
            "name": "Barraca do Zé",
            "type": "BAR",
            "localization": "Icaraí",
            "coordinates": { "lat": -3.03, "lng": -39.66 },
            "contacts": { "email": "ze@bar.com", "telefone": "(88) 99999-0000", "site": "https://instagram.com/ze" },
            "description": "Petiscos na beira da praia",
            "logo": { "url": "https://cdn/logo.png" },
            "images": [ { "url": "https://cdn/1.png" } ]
        }"#;
        let local: Local = serde_json::from_str(corpo).unwrap();
        assert_eq!(local.tipo, Categoria::Bar);
        assert_eq!(local.localization, Some(Regiao::Icarai));
        assert_eq!(local.coordinates, Coordenadas::nova(-3.03, -39.66));
        assert_eq!(local.images.len(), 1);
    }

    #[test]
    fn local_tolera_campos_opcionais_ausentes() {
        let corpo = r#"{
            "id": "abc123",
            "name": "Mirante",
            "type": "TURISTICO",
            "coordinates": { "lat": -3.01, "lng": -39.64 }
        }"#;
        let local: Local = serde_json::from_str(corpo).unwrap();
        assert_eq!(local.tipo, Categoria::PontoTuristico);
        assert!(local.logo.is_none());
        assert!(local.images.is_empty());
        assert!(local.contacts.email.is_none());
    }

    #[test]
    fn novo_local_valido_passa() {
        assert!(novo_local_valido().validate().is_ok());
    }

    #[test]
    fn novo_local_rejeita_nome_curto() {
        let mut novo = novo_local_valido();
        novo.name = "Bar".into();
        assert!(novo.validate().is_err());
    }

    #[test]
    fn novo_local_rejeita_telefone_fora_do_padrao() {
        let mut novo = novo_local_valido();
        novo.telefone = "99999".into();
        assert!(novo.validate().is_err());
        novo.telefone = "88 99999-9999".into();
        assert!(novo.validate().is_ok());
    }

    #[test]
    fn novo_local_exige_de_uma_a_tres_fotos() {
        let mut novo = novo_local_valido();
        novo.fotos = vec![];
        assert!(novo.validate().is_err());
        novo.fotos = vec![arquivo(); 4];
        assert!(novo.validate().is_err());
        novo.fotos = vec![arquivo(); 3];
        assert!(novo.validate().is_ok());
    }

    #[test]
    fn novo_local_rejeita_coordenadas_invalidas() {
        let mut novo = novo_local_valido();
        novo.coordinates = Coordenadas::nova(-3.02, -200.0);
        assert!(novo.validate().is_err());
    }
}
