use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const APP_NAME: &str = "quizrush-server";
const MONGO_TIMEOUT: Duration = Duration::from_secs(5);

/// The only store is the daily trivia cache, so a small pool is enough.
fn apply_defaults(options: &mut ClientOptions) {
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some(APP_NAME.to_string());
    options.max_pool_size = Some(10);
    options.connect_timeout = Some(MONGO_TIMEOUT);
    options.server_selection_timeout = Some(MONGO_TIMEOUT);
}

#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects and pings the configured database so a bad connection string
    /// fails startup instead of the first trivia request.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        apply_defaults(&mut options);

        let inner = Client::with_options(options)?.database(&config.mongo_db_name);
        inner
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "MongoDB database {} is unreachable: {}",
                    config.mongo_db_name, e
                ))
            })?;

        log::info!("Connected to MongoDB database {}", config.mongo_db_name);
        Ok(Self { inner })
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(collection_name)
    }
}
