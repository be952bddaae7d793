use moviebase_backend::{startup, storage};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::net::TcpListener;
use std::path::PathBuf;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    let db_path = std::env::temp_dir().join(format!("moviebase-test-{}.db", Uuid::new_v4()));
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .foreign_keys(false);
    let connection_pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to open the test database");
    storage::init_schema(&connection_pool)
        .await
        .expect("Failed to create the database schema");

    let server = startup::run_server(listener, connection_pool.clone())
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        db_pool: connection_pool,
        db_path,
    }
}

#[actix_rt::test]
async fn schema_bootstrap_is_idempotent() {
    let app = spawn_app().await;

    storage::init_schema(&app.db_pool)
        .await
        .expect("Re-running the schema bootstrap failed");
}
