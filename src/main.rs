//src/main.rs

use std::collections::BTreeMap;

use mapa_core::{
    config::AppState,
    services::{catalog::CatalogoLocais, viewport::ConfigMapa},
};

// Binário de fumaça: sobe o estado, busca os locais e loga um resumo.
// A interface de verdade consome a biblioteca; aqui só conferimos que
// o caminho servidor → catálogo → marcadores está vivo.
#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, nada mais funciona.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let api = app_state.api_locais();
    let mut catalogo = CatalogoLocais::novo();
    catalogo.carregar_todos(&api).await;

    match catalogo.erro() {
        Some(aviso) => {
            // Falha de busca não derruba nada: mapa vazio + aviso
            tracing::warn!("Mapa sem marcadores: {aviso}");
        }
        None => {
            tracing::info!("✅ {} locais carregados", catalogo.locais().len());

            let mut por_categoria: BTreeMap<String, usize> = BTreeMap::new();
            for local in catalogo.locais() {
                *por_categoria
                    .entry(local.tipo.rotulo().to_owned())
                    .or_default() += 1;
            }
            for (categoria, quantidade) in por_categoria {
                tracing::info!("   {categoria}: {quantidade}");
            }
        }
    }

    let config = ConfigMapa::default();
    tracing::info!(
        "🗺️ Mapa centrado em ({}, {}), zoom {}",
        config.centro.lat,
        config.centro.lng,
        config.zoom_inicial
    );
}
