use sea_orm::DatabaseConnection;

use crate::server::media::MediaClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media: MediaClient,
}

impl From<(DatabaseConnection, MediaClient)> for AppState {
    fn from((db, media): (DatabaseConnection, MediaClient)) -> Self {
        Self { db, media }
    }
}
