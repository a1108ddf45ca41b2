use smdpro_backend::{app, AppState, Config};
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smdpro_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    // One lazy connection, shared by every request. Queries serialize on it,
    // and a dead database surfaces per-request as a 500 rather than at boot.
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_lazy_with(config.connect_options());

    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => tracing::info!("connected to the MySQL database"),
        Err(e) => tracing::error!(error = %e, "error connecting to the database"),
    }

    let state = AppState { pool };
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("server is running on port {}", config.port);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
