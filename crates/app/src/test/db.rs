//! Database test utilities.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

/// Shared PostgreSQL container, started once and reused by every test.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> =
    Lazy::new(OnceCell::new);

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user("nearsell_test")
        .with_password("nearsell_test_password")
        .with_db_name("nearsell_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// An isolated, migrated database inside the shared container.
///
/// Isolation is database-level: every test gets its own freshly created
/// database with migrations applied, so state never leaks between tests and
/// no rollback discipline is needed. The databases live until the shared
/// container is torn down at the end of the run.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
}

impl TestDb {
    /// Create an isolated test database with a unique generated name.
    pub(crate) async fn new() -> Self {
        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let db_name = generate_database_name();

        let admin_url =
            format!("postgresql://nearsell_test:nearsell_test_password@{host}:{port}/postgres");

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let database_url = format!(
            "postgresql://nearsell_test:nearsell_test_password@{host}:{port}/{db_name}"
        );

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create pool for test database");

        crate::database::MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool }
    }

    /// Returns the connection pool for this test database.
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Generated names carry a timestamp and thread id so parallel tests never
/// collide; the replace strips characters Postgres identifiers cannot hold.
fn generate_database_name() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("System clock before Unix epoch")
        .as_nanos();

    let thread_id = std::thread::current().id();

    format!("nearsell_test_{nanos}_{thread_id:?}").replace([':', ' ', '(', ')'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_names_are_valid_identifiers() {
        let name = generate_database_name();

        assert!(name.starts_with("nearsell_test_"), "unexpected prefix: {name}");
        assert!(
            name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "invalid identifier characters in: {name}"
        );
        assert!(name.len() <= 63, "name exceeds Postgres limit: {name}");
    }

    #[tokio::test]
    async fn test_container_startup_and_migrations() {
        let db = TestDb::new().await;

        let migrated: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(db.pool())
            .await
            .expect("listings table must exist after migrations");

        assert_eq!(migrated, 0);
    }
}
