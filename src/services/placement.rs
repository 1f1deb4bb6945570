// src/services/placement.rs

use validator::Validate;

use crate::{
    api::place_api::PlaceApi,
    common::error::AppError,
    models::{
        auth::ContextoSessao,
        place::{Coordenadas, NovoLocal},
    },
};

// Estado da interação "clicar no mapa para cadastrar um local".
// Ocioso é o estado inicial e também o terminal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EstadoCadastro {
    #[default]
    Ocioso,
    Rascunho {
        coords: Coordenadas,
    },
}

// Dona do rascunho de coordenada pendente. Só ela transiciona o estado;
// o resto da interface lê por `rascunho()`/`esta_ocioso()`.
#[derive(Debug, Default)]
pub struct SessaoCadastro {
    estado: EstadoCadastro,
}

impl SessaoCadastro {
    pub fn nova() -> Self {
        Self::default()
    }

    // Clique cru no mapa. Visitante sem papel de admin não transiciona
    // estado nem vê erro (decisão de produto: no-op silencioso).
    // Clique com rascunho já aberto substitui a coordenada pendente —
    // nunca existe mais de um rascunho.
    pub fn clique_no_mapa(&mut self, sessao: &ContextoSessao, coords: Coordenadas) -> bool {
        if !sessao.eh_admin() {
            return false;
        }
        self.estado = EstadoCadastro::Rascunho {
            coords: coords.arredondada(),
        };
        true
    }

    // Cancelamento explícito descarta o rascunho
    pub fn cancelar(&mut self) {
        self.estado = EstadoCadastro::Ocioso;
    }

    pub fn rascunho(&self) -> Option<Coordenadas> {
        match self.estado {
            EstadoCadastro::Rascunho { coords } => Some(coords),
            EstadoCadastro::Ocioso => None,
        }
    }

    pub fn esta_ocioso(&self) -> bool {
        self.estado == EstadoCadastro::Ocioso
    }

    // Envia o formulário preenchido para o servidor. As coordenadas do
    // rascunho mandam: o formulário as exibe somente-leitura.
    //
    // Em caso de falha (validação, rede, 401/403) o rascunho fica onde
    // está, para o usuário tentar de novo sem clicar no mapa outra vez;
    // quem chama decide como exibir o erro. Só o envio aceito volta o
    // estado para Ocioso.
    pub async fn enviar(
        &mut self,
        api: &(impl PlaceApi + ?Sized),
        sessao: &ContextoSessao,
        mut novo: NovoLocal,
    ) -> Result<(), AppError> {
        let coords = match self.estado {
            EstadoCadastro::Rascunho { coords } => coords,
            EstadoCadastro::Ocioso => {
                return Err(anyhow::anyhow!("não há rascunho de local para enviar").into());
            }
        };
        novo.coordinates = coords;

        // Erros de campo ficam na borda do formulário; nada parte
        // para a rede sem passar aqui.
        novo.validate()?;

        let token = sessao.token_portador().ok_or(AppError::AcessoNegado)?;
        api.cadastrar(&novo, token).await?;

        tracing::info!("✅ Cadastro aceito, rascunho liberado");
        self.estado = EstadoCadastro::Ocioso;
        Ok(())
    }
}
