use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, media::MediaClient};

/// Build the client for the external image host
pub fn build_media_client(config: &Config) -> MediaClient {
    MediaClient::new(&config.media_url, &config.media_api_key)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
