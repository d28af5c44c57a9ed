use std::io;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use activities_api::config::Config;
use activities_api::database::ActivityStore;
use activities_api::web;

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    let store = ActivityStore::seeded();
    let app = web::router(store, &config.static_dir);

    let listener = bind_with_fallback(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!("Serving activities on http://{}", bound_addr);
    info!("Frontend at http://{}/static/index.html", bound_addr);

    axum::serve(listener, app).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("activities_api=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

async fn bind_with_fallback(config: &Config) -> io::Result<TcpListener> {
    let host = config.host.as_str();
    match TcpListener::bind((host, config.port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config.port.saturating_add(1);
            warn!(
                "Could not bind {}:{}: {}. Trying fallback {}:{}",
                host, config.port, e, host, fallback
            );
            TcpListener::bind((host, fallback)).await
        }
    }
}
