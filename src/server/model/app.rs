use sea_orm::DatabaseConnection;

use crate::server::integration::{PushClient, RealtimeClient, SfuClient};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub realtime: RealtimeClient,
    pub sfu: SfuClient,
    pub push: PushClient,
}

/// Build state from a database handle plus one base URL and API key shared
/// by every provider client. Integration tests use this to point all three
/// providers at a single mock server without a circular crate dependency.
impl From<(DatabaseConnection, String, String)> for AppState {
    fn from((db, base_url, api_key): (DatabaseConnection, String, String)) -> Self {
        AppState {
            db,
            realtime: RealtimeClient::new(&base_url, &api_key),
            sfu: SfuClient::new(&base_url, &api_key),
            push: PushClient::new(&base_url, &api_key),
        }
    }
}
