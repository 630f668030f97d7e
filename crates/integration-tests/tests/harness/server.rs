//! Test server wrapper that serves the fixture app on a random port

use std::net::SocketAddr;

use api_error::HandlerConfig;
use tokio_util::sync::CancellationToken;

use super::app;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start the fixture app with the default handler configuration
    pub async fn start() -> anyhow::Result<Self> {
        Self::with_config(HandlerConfig::default()).await
    }

    /// Start the fixture app with the given handler configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn with_config(config: HandlerConfig) -> anyhow::Result<Self> {
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app::router(&config))
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
