use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use train_booking::config::ServerConfig;
use train_booking::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "train_booking=info,tower_http=info";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let state = AppState::default();
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Train booking service listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                        - Health check");
    info!("  POST /trains                        - Add a train");
    info!("  POST /trains/:id/tickets            - Book a ticket");
    info!("  GET  /trains/:id/seats?from=&to=    - Seat availability");
    info!("  GET  /trains/:id/boarding?station=  - Passengers boarding at a station");
    info!("  GET  /trains/:id/oldest             - Oldest passenger");
    info!("  GET  /trains/passing?station=&start=&end= - Trains passing a station");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
