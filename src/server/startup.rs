use crate::server::{config::Config, error::AppError, service::catalog::CatalogService};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations to ensure the schema is up-to-date. This must
/// complete successfully before any manager can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the default service categories and their options exist.
///
/// Safe to run on every startup; existing rows are left untouched.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Catalog is present
/// - `Err(AppError)` - Database error while seeding
pub async fn seed_catalog(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let seeded = CatalogService::new(db).ensure_default_catalog().await?;

    tracing::info!("Service catalog ready ({} categories)", seeded);

    Ok(())
}
