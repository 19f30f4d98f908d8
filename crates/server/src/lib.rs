//! HTTP server for the favorites endpoint.
//!
//! Mounts `GET <base_url>/favorites` and answers every request with the
//! merged default/valid/invalid favorites from a [`FavoritesReader`].
//!
//! [`FavoritesReader`]: favdir_store::FavoritesReader

mod handler;
mod server;

pub use handler::{router, url_path_join};
pub use server::{FavoritesServer, ServerConfig};

/// Errors produced by the favorites server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server already running")]
    AlreadyRunning,
}
