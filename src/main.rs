use moviebase_backend::configuration::get_configuration;
use moviebase_backend::telemetry::{get_subscriber, init_subscriber};
use moviebase_backend::{startup, storage};
use sqlx::SqlitePool;
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("info", std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration("configuration").expect(
        "Failed to read `configuration.json`. Please make sure it exists and is valid JSON.",
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", configuration.application_port))
        .expect("Failed to bind");
    let connection_pool = SqlitePool::connect_with(configuration.database.connect_options())
        .await
        .expect("Failed to connect to database");
    storage::init_schema(&connection_pool)
        .await
        .expect("Failed to create the database schema");
    startup::run_server(listener, connection_pool)?.await
}
