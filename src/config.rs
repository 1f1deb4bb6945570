// src/config.rs

use std::{env, time::Duration};

use anyhow::Context;

use crate::{
    api::{place_api::ApiLocais, tide_api::ApiMares},
    models::auth::ContextoSessao,
};

// O estado compartilhado que o shell da interface distribui para os
// serviços do mapa.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_base_url: String,
    pub sessao: ContextoSessao,
}

impl AppState {
    // Carrega as configurações e monta o cliente HTTP compartilhado.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_URL").context("API_URL deve ser definida")?;

        let timeout_segundos: u64 = env::var("HTTP_TIMEOUT_SEGUNDOS")
            .ok()
            .and_then(|valor| valor.parse().ok())
            .unwrap_or(30);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_segundos))
            .build()
            .context("Falha ao montar o cliente HTTP")?;

        tracing::info!("✅ Cliente HTTP pronto, servidor em {api_base_url}");

        // Sessão vem do token guardado pelo fluxo de login (fora do núcleo)
        let sessao = match env::var("AUTH_TOKEN") {
            Ok(token) => ContextoSessao::com_token(&token),
            Err(_) => ContextoSessao::anonimo(),
        };

        Ok(Self {
            http,
            api_base_url,
            sessao,
        })
    }

    // --- Monta o gráfico de dependências ---

    pub fn api_locais(&self) -> ApiLocais {
        ApiLocais::nova(self.http.clone(), self.api_base_url.clone())
    }

    pub fn api_mares(&self) -> ApiMares {
        ApiMares::nova(self.http.clone(), self.api_base_url.clone())
    }
}
