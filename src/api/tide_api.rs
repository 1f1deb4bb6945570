// src/api/tide_api.rs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{common::error::AppError, models::tide::TabuaMare};

#[async_trait]
pub trait TideApi: Send + Sync {
    // GET /mares/{AAAA-MM-DD} — rota autenticada
    async fn tabua_do_dia(&self, data: NaiveDate, token: &str) -> Result<TabuaMare, AppError>;
}

#[derive(Clone)]
pub struct ApiMares {
    http: reqwest::Client,
    base_url: String,
}

impl ApiMares {
    pub fn nova(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TideApi for ApiMares {
    async fn tabua_do_dia(&self, data: NaiveDate, token: &str) -> Result<TabuaMare, AppError> {
        let dia = data.format("%Y-%m-%d");
        let resposta = self
            .http
            .get(format!("{}/mares/{dia}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        let status = resposta.status();
        let corpo = resposta.text().await?;
        if !status.is_success() {
            return Err(AppError::de_status(status.as_u16(), corpo));
        }
        Ok(serde_json::from_str(&corpo)?)
    }
}
