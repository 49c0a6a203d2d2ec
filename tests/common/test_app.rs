//! In-process test application
//!
//! Starts a wiremock backend, points a fresh configuration at it, uses a
//! temporary static root and serves the router through axum-test.

use axum_test::TestServer;
use spotbook::backend::server::create_app;
use spotbook::shared::config::{AppConfig, AppConfigBuilder};
use tempfile::TempDir;
use wiremock::MockServer;

pub struct TestApp {
    pub server: TestServer,
    pub backend: MockServer,
    pub static_root: TempDir,
}

impl TestApp {
    /// App with default configuration (plain grants, development mode)
    pub async fn start() -> Self {
        Self::start_with(|builder| builder).await
    }

    /// App with extra configuration applied on top of the test defaults
    pub async fn start_with<F>(configure: F) -> Self
    where
        F: FnOnce(AppConfigBuilder) -> AppConfigBuilder,
    {
        let backend = MockServer::start().await;
        let static_root = TempDir::new().expect("Failed to create static root");

        let builder = AppConfig::builder()
            .api_endpoint(backend.uri())
            .static_root(static_root.path());
        let config = configure(builder).build().expect("Invalid test configuration");

        let app = create_app(config).await.expect("Failed to create app");
        let server = TestServer::new(app).expect("Failed to start test server");

        Self {
            server,
            backend,
            static_root,
        }
    }

    /// Directory uploaded artworks are written to
    pub fn artworks_dir(&self) -> std::path::PathBuf {
        self.static_root.path().join("artworks")
    }
}
