use std::sync::Arc;

use auth_service::credentials::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::SqliteCredentialRepository;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::NamedTempFile;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    // Held so the database file outlives the server and is removed on drop
    _db_file: NamedTempFile,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let db_file = NamedTempFile::new().expect("Failed to create temp database file");
        let pool = test_pool(db_file.path()).await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let credential_repository = Arc::new(SqliteCredentialRepository::new(pool));
        credential_repository
            .init()
            .await
            .expect("Failed to initialize schema");

        let auth_service = Arc::new(AuthService::new(credential_repository));
        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            _db_file: db_file,
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

async fn test_pool(path: &std::path::Path) -> SqlitePool {
    let options = SqliteConnectOptions::new().filename(path);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to test database")
}
