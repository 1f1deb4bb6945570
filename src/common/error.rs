use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Falhas de busca nunca são fatais: o mapa renderiza vazio e o shell
// mostra um aviso não-bloqueante.
#[derive(Debug, Error)]
pub enum AppError {
    // Servidor inacessível ou requisição estourou o timeout.
    // Timeout é tratado igual a falha de rede.
    #[error("Falha de rede ao comunicar com o servidor")]
    Rede(#[source] reqwest::Error),

    #[error("Resposta do servidor em formato inesperado")]
    Decodificacao(#[from] serde_json::Error),

    #[error("Erro de validação")]
    Validacao(#[from] validator::ValidationErrors),

    // 401/403 do servidor, ou ação privilegiada sem token
    #[error("Acesso negado. Faça login novamente.")]
    AcessoNegado,

    #[error("Token de autenticação inválido ou ausente")]
    TokenInvalido(#[from] jsonwebtoken::errors::Error),

    #[error("O servidor respondeu com status {status}")]
    Servidor { status: u16, corpo: String },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno inesperado")]
    Interno(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(erro: reqwest::Error) -> Self {
        // Corpo malformado chega como erro de decode do reqwest;
        // o resto (conexão, DNS, timeout) é falha de rede.
        if erro.is_decode() {
            return AppError::Servidor {
                status: erro.status().map(|s| s.as_u16()).unwrap_or(0),
                corpo: erro.to_string(),
            };
        }
        AppError::Rede(erro)
    }
}

impl AppError {
    // Erros transitórios viram toast/banner; os demais pedem ação do usuário.
    pub fn eh_transitorio(&self) -> bool {
        matches!(
            self,
            AppError::Rede(_) | AppError::Decodificacao(_) | AppError::Servidor { .. }
        )
    }

    // Converte um status HTTP de falha na variante certa.
    pub fn de_status(status: u16, corpo: String) -> Self {
        match status {
            401 | 403 => AppError::AcessoNegado,
            _ => AppError::Servidor { status, corpo },
        }
    }
}
