//! Entry point for the Salary Engine server.
//!
//! The policy directory is read from `SALARY_ENGINE_CONFIG_DIR` (default
//! `config/standard`) and the bind address from `SALARY_ENGINE_BIND_ADDR`
//! (default `127.0.0.1:3000`). Log filtering follows `RUST_LOG`.

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salary_engine=info".into()),
        )
        .init();

    let config_dir =
        std::env::var("SALARY_ENGINE_CONFIG_DIR").unwrap_or_else(|_| "config/standard".to_string());
    let addr =
        std::env::var("SALARY_ENGINE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        policy = %config.policy().code,
        version = %config.policy().version,
        schedules = config.config().schedules().len(),
        "Loaded salary policy from {config_dir}"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Salary engine listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
