//! Favorites HTTP server.
//!
//! Binds a TCP listener, serves the favorites router and stops when
//! [`FavoritesServer::shutdown`] is called.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use favdir_protocol::constants::FAVORITES_ROUTE;
use favdir_store::FavoritesReader;

use crate::ServerError;
use crate::handler::{router, url_path_join};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: IpAddr,
    /// TCP port to listen on (0 = OS-assigned).
    pub port: u16,
    /// Base URL the favorites route is mounted beneath.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            base_url: "/".into(),
        }
    }
}

/// The favorites HTTP server.
pub struct FavoritesServer {
    config: ServerConfig,
    reader: Arc<FavoritesReader>,
    cancel: CancellationToken,
    local_addr: Mutex<Option<SocketAddr>>,
    running: AtomicBool,
}

impl FavoritesServer {
    pub fn new(config: ServerConfig, reader: FavoritesReader) -> Arc<Self> {
        Arc::new(Self {
            config,
            reader: Arc::new(reader),
            cancel: CancellationToken::new(),
            local_addr: Mutex::new(None),
            running: AtomicBool::new(false),
        })
    }

    /// Full path of the favorites route, e.g. `/user/alice/favorites`.
    pub fn route(&self) -> String {
        url_path_join(&self.config.base_url, FAVORITES_ROUTE)
    }

    /// Returns the local address the server is listening on.
    ///
    /// Only available after [`run`](Self::run) binds the socket.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        *self.local_addr.lock().await
    }

    /// Returns the listening port (0 if not yet bound).
    pub async fn port(&self) -> u16 {
        self.local_addr.lock().await.map(|a| a.port()).unwrap_or(0)
    }

    /// Gracefully shuts down the server.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Runs the server until [`shutdown`](Self::shutdown).
    pub async fn run(self: &Arc<Self>) -> Result<(), ServerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(ServerError::AlreadyRunning);
        }

        let result = self.serve().await;
        self.running.store(false, Ordering::SeqCst);
        result
    }

    async fn serve(&self) -> Result<(), ServerError> {
        let addr = SocketAddr::new(self.config.bind, self.config.port);
        let listener = TcpListener::bind(addr).await?;

        let local_addr = listener.local_addr()?;
        *self.local_addr.lock().await = Some(local_addr);
        tracing::info!(
            route = %self.route(),
            settings = %self.reader.settings_path().display(),
            "favorites server listening on {local_addr}"
        );

        let app = router(&self.config.base_url, Arc::clone(&self.reader));
        let cancel = self.cancel.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await?;

        tracing::info!("server shutting down");
        Ok(())
    }
}
