//! Database test utilities and shared infrastructure

use std::sync::atomic::{AtomicU32, Ordering};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

use crate::database;

const TEST_USER: &str = "inventory_test";
const TEST_PASSWORD: &str = "inventory_test_password";

/// Running container plus the base URL (without database name) to reach it.
struct SharedServer {
    _container: ContainerAsync<PostgresImage>,
    base_url: String,
}

/// Started on first use and shared by every test in the binary.
static SHARED_SERVER: Lazy<OnceCell<SharedServer>> = Lazy::new(OnceCell::new);

static NEXT_DATABASE: AtomicU32 = AtomicU32::new(0);

async fn start_server() -> SharedServer {
    let container = PostgresImage::default()
        .with_user(TEST_USER)
        .with_password(TEST_PASSWORD)
        .with_db_name("inventory_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
        .unwrap_or_else(|_| "localhost".to_string());

    SharedServer {
        _container: container,
        base_url: format!("postgresql://{TEST_USER}:{TEST_PASSWORD}@{host}:{port}"),
    }
}

/// Only generated names reach `CREATE`/`DROP DATABASE`, which cannot take bind
/// parameters.
fn is_safe_database_name(name: &str) -> bool {
    (1..=63).contains(&name.len())
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// One database per test inside the shared container, with migrations
/// applied. Tests never see each other's rows.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
    base_url: String,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        let server = SHARED_SERVER.get_or_init(start_server).await;

        let name = format!(
            "inventory_test_{}_{}",
            std::process::id(),
            NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
        );

        assert!(is_safe_database_name(&name), "unsafe database name {name}");

        let mut admin = PgConnection::connect(&format!("{}/postgres", server.base_url))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&format!("{}/{name}", server.base_url))
            .await
            .expect("Failed to create pool for database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self {
            pool,
            name,
            base_url: server.base_url.clone(),
        }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Drop the database. Optional; the container is discarded with the test
    /// process anyway.
    pub(crate) async fn cleanup(self) {
        self.pool.close().await;

        if let Ok(mut admin) = PgConnection::connect(&format!("{}/postgres", self.base_url)).await
        {
            let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{}\"", self.name))
                .execute(&mut admin)
                .await;

            let _ = admin.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[test]
    fn test_safe_database_names() {
        assert!(is_safe_database_name("inventory_test_1_0"));
        assert!(is_safe_database_name("a"));
    }

    #[test]
    fn test_unsafe_database_names() {
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name(&"a".repeat(64)));
        assert!(!is_safe_database_name("1_starts_with_digit"));
        assert!(!is_safe_database_name("has-hyphen"));
        assert!(!is_safe_database_name("quote\"d"));
        assert!(!is_safe_database_name("Upper"));
    }

    #[tokio::test]
    async fn test_products_table_is_bootstrapped() -> TestResult {
        let ctx = TestContext::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(count, 0);

        ctx.db.cleanup().await;

        Ok(())
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() -> TestResult {
        let test_db = TestDb::new().await;

        database::migrate(test_db.pool()).await?;

        test_db.cleanup().await;

        Ok(())
    }
}
