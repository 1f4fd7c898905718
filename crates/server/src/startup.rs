use std::{env, net::SocketAddr, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;
use service::{file::user_store::UserStore, runtime};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Everything `run` needs, resolved from config.toml with env fallbacks.
struct Settings {
    addr: SocketAddr,
    request_timeout: Duration,
    store_path: String,
}

fn load_settings() -> anyhow::Result<Settings> {
    let (host, port, timeout_secs, store_path) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (
            cfg.server.host,
            cfg.server.port,
            cfg.server.request_timeout_secs,
            cfg.store.path,
        ),
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3333);
            let timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            let store_path =
                env::var("STORE_PATH").unwrap_or_else(|_| "data/users.json".to_string());
            (host, port, timeout_secs, store_path)
        }
    };
    Ok(Settings {
        addr: format!("{}:{}", host, port).parse()?,
        request_timeout: Duration::from_secs(timeout_secs),
        store_path,
    })
}

/// Public entry: open the store, build the app, and run the HTTP server.
///
/// A missing or malformed table file makes this return an error instead of
/// serving — starting with an empty table would silently discard whatever the
/// operator expected to be there.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let settings = load_settings()?;

    runtime::ensure_store_dir(&settings.store_path).await?;

    let users = UserStore::open(&settings.store_path)
        .map_err(|e| anyhow::anyhow!("cannot open user store at {}: {e}", settings.store_path))?;
    let state = ServerState { users };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, settings.request_timeout, state);

    let addr = settings.addr;
    info!(%addr, store = %settings.store_path, "starting user api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
