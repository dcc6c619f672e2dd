use crate::{config::Config, database::Database};

pub struct Api {
    pub db: Database,
    pub config: Config,
}

impl Api {
    /// Instantiates APIs collection with the specified config and datastore.
    pub fn new(config: Config, database: Database) -> Self {
        Self {
            config,
            db: database,
        }
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
