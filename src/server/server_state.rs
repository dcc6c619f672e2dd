mod status;

pub use self::status::Status;
use crate::api::Api;
use std::sync::Arc;

pub struct ServerState {
    pub api: Arc<Api>,
    /// Version of the API server.
    version: String,
}

impl ServerState {
    pub fn new(api: Arc<Api>) -> Self {
        Self {
            api,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Gets the status of the server.
    pub fn status(&self) -> Status {
        Status {
            version: self.version.clone(),
        }
    }
}
