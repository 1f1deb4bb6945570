pub mod catalog;
pub use catalog::{CatalogoLocais, TokenConsulta};
pub mod filter;
pub use filter::FiltroCategorias;
pub mod markers;
pub use markers::{
    conteudo_popup, icone_para, marcador_mare, marcador_para, ConteudoPopup, Marcador, RefIcone,
};
pub mod viewport;
pub use viewport::{AlvoFoco, ComandoVoo, ConfigMapa, ControladorViewport, NivelFoco};
pub mod placement;
pub use placement::{EstadoCadastro, SessaoCadastro};
