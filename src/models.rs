pub mod place;
pub use place::{
    Arquivo, Categoria, ConsultaCategoria, Contatos, Coordenadas, FiltroRegiao, Imagem, Local,
    NovoLocal, Regiao,
};
pub mod auth;
pub use auth::{Claims, ContextoSessao, Papel};
pub mod tide;
pub use tide::{LeituraMare, TabuaMare};
