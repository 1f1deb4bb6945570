// src/api/place_api.rs

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::{
    common::error::AppError,
    models::place::{Arquivo, ConsultaCategoria, Local, NovoLocal},
};

// Acesso remoto aos locais. Trait para os serviços dependerem da
// interface, não do HTTP — os testes usam uma implementação em memória.
#[async_trait]
pub trait PlaceApi: Send + Sync {
    // GET /place/all — conjunto completo para o mapa
    async fn buscar_todos(&self) -> Result<Vec<Local>, AppError>;

    // GET /place?type=..&region=.. — subconjunto para a lista lateral
    async fn buscar_por_consulta(
        &self,
        consulta: &ConsultaCategoria,
    ) -> Result<Vec<Local>, AppError>;

    // POST /place (multipart) — requer token de portador
    async fn cadastrar(&self, novo: &NovoLocal, token: &str) -> Result<(), AppError>;
}

// Implementação HTTP de verdade, sobre o cliente compartilhado do AppState
#[derive(Clone)]
pub struct ApiLocais {
    http: reqwest::Client,
    base_url: String,
}

impl ApiLocais {
    pub fn nova(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    // Lê o corpo inteiro antes de decodificar: status de falha carrega o
    // corpo no erro, e corpo malformado vira Decodificacao, não Rede.
    async fn decodificar<T: DeserializeOwned>(
        resposta: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = resposta.status();
        let corpo = resposta.text().await?;
        if !status.is_success() {
            return Err(AppError::de_status(status.as_u16(), corpo));
        }
        Ok(serde_json::from_str(&corpo)?)
    }

    fn parte_de_arquivo(arquivo: &Arquivo) -> Result<Part, AppError> {
        Part::bytes(arquivo.dados.clone())
            .file_name(arquivo.nome.clone())
            .mime_str(&arquivo.mime)
            .map_err(|erro| anyhow::anyhow!("MIME inválido '{}': {erro}", arquivo.mime).into())
    }
}

#[async_trait]
impl PlaceApi for ApiLocais {
    async fn buscar_todos(&self) -> Result<Vec<Local>, AppError> {
        let resposta = self
            .http
            .get(format!("{}/place/all", self.base_url))
            .send()
            .await?;
        let locais: Vec<Local> = Self::decodificar(resposta).await?;
        tracing::debug!("Recebidos {} locais do servidor", locais.len());
        Ok(locais)
    }

    async fn buscar_por_consulta(
        &self,
        consulta: &ConsultaCategoria,
    ) -> Result<Vec<Local>, AppError> {
        let mut requisicao = self
            .http
            .get(format!("{}/place", self.base_url))
            .query(&[("type", consulta.categoria.como_consulta())]);

        // "Todas" fica de fora da URL; o servidor não conhece o sentinela
        if let Some(regiao) = consulta.regiao.como_parametro() {
            requisicao = requisicao.query(&[("region", regiao)]);
        }

        let resposta = requisicao.send().await?;
        Self::decodificar(resposta).await
    }

    async fn cadastrar(&self, novo: &NovoLocal, token: &str) -> Result<(), AppError> {
        // coordinates e contacts viajam como strings JSON dentro do multipart
        let coordinates = serde_json::to_string(&novo.coordinates)?;
        let contacts = serde_json::to_string(&serde_json::json!({
            "telefone": novo.telefone,
            "email": novo.email,
            "site": novo.site,
        }))?;

        let mut formulario = Form::new()
            .text("name", novo.name.clone())
            .text("type", novo.tipo.como_consulta())
            .text("description", novo.description.clone())
            .text("coordinates", coordinates)
            .text("contacts", contacts)
            .part("logo", Self::parte_de_arquivo(&novo.logo)?);

        for foto in &novo.fotos {
            formulario = formulario.part("photos", Self::parte_de_arquivo(foto)?);
        }

        let resposta = self
            .http
            .post(format!("{}/place", self.base_url))
            .bearer_auth(token)
            .multipart(formulario)
            .send()
            .await?;

        let status = resposta.status();
        if !status.is_success() {
            let corpo = resposta.text().await.unwrap_or_default();
            return Err(AppError::de_status(status.as_u16(), corpo));
        }

        tracing::info!("📍 Local '{}' cadastrado no servidor", novo.name);
        Ok(())
    }
}
