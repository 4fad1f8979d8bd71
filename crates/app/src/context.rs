//! App Context

use std::sync::Arc;

use sqlx::{migrate::MigrateError, postgres::PgConnectOptions};
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to bootstrap database schema")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context from database connection options.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or bootstrapping the schema fails.
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(options, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        info!(max_connections, "database ready");

        Ok(Self::new(Arc::new(PgProductsService::new(Db::new(pool)))))
    }
}
