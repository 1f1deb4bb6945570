pub mod place_api;
pub use place_api::{ApiLocais, PlaceApi};
pub mod tide_api;
pub use tide_api::{ApiMares, TideApi};
