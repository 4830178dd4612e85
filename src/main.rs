use dispatch::server::{config::Config, error::AppError, startup, state::AppState};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).with_target(true).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_catalog(&db).await?;

    let state = AppState::new(db, config.driver_share);

    tracing::info!(
        "Store migrated and catalog seeded, driver share {:.2}",
        state.driver_share.as_fraction()
    );

    Ok(())
}
