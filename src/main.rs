use crate::config::AppConfig;
use crate::listings::SupabaseSource;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod listings;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tanah_bali=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration, read once
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if config.backend.url.is_empty() || config.backend.anon_key.is_empty() {
        tracing::warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set, listings will fail to load");
    }

    // 2️⃣ Backend adapter
    let source = match SupabaseSource::new(&config.backend) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("❌ Backend client init failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    tracing::info!(table = %config.backend.table, "Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &source) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
