use std::net::SocketAddr;

use tracing::{Level, info};

use server::config::AppConfig;
use server::database;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    let db = database::init_db(&config.database.url).await?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState { db, config };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
