//! Wire and on-disk types for the favdir favorites service.
//!
//! The settings file and the HTTP response share [`FavoriteEntry`]; the
//! file wraps entries in a [`FavoritesDocument`] and the `/favorites`
//! endpoint answers with a [`FavoritesResponse`].

pub mod constants;
pub mod types;

pub use types::{FavoriteEntry, FavoritesDocument, FavoritesResponse};
