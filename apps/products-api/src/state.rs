use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Handed to every route that needs the pool or settings
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
