//! Database Config

use std::str::FromStr;

use clap::Args;
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Reasons the database settings cannot produce connection options.
#[derive(Debug, Error)]
pub enum DatabaseConfigError {
    /// `DATABASE_URL` is not a valid `PostgreSQL` connection string.
    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    /// Neither a URL nor a user to assemble one with was supplied.
    #[error("either DATABASE_URL or DB_USER must be set")]
    MissingUser,
}

/// Database settings.
///
/// A full `DATABASE_URL` wins; otherwise the connection is assembled from the
/// individual parts.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database (schema) name
    #[arg(long, env = "DB_NAME", default_value = "inventory")]
    pub db_name: String,

    /// Upper bound on pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,
}

impl DatabaseConfig {
    /// Build connection options from the configured URL or parts.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL does not parse, or when no URL is given
    /// and the user is missing.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DatabaseConfigError> {
        if let Some(url) = self.database_url.as_deref() {
            return PgConnectOptions::from_str(url).map_err(DatabaseConfigError::InvalidUrl);
        }

        let user = self
            .db_user
            .as_deref()
            .ok_or(DatabaseConfigError::MissingUser)?;

        let options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(user)
            .database(&self.db_name);

        Ok(match self.db_password.as_deref() {
            Some(password) => options.password(password),
            None => options,
        })
    }
}
