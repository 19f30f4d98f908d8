//! Route table and the `/favorites` request handler.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

use favdir_protocol::FavoritesResponse;
use favdir_protocol::constants::FAVORITES_ROUTE;
use favdir_store::FavoritesReader;

/// Joins URL path segments with exactly one `/` between them.
///
/// The result always starts with `/`.
pub fn url_path_join(base: &str, suffix: &str) -> String {
    let base = base.trim_end_matches('/');
    let suffix = suffix.trim_start_matches('/');
    match (base.is_empty(), suffix.is_empty()) {
        (true, true) => "/".into(),
        (true, false) => format!("/{suffix}"),
        (false, true) if base.starts_with('/') => base.into(),
        (false, true) => format!("/{base}"),
        (false, false) if base.starts_with('/') => format!("{base}/{suffix}"),
        (false, false) => format!("/{base}/{suffix}"),
    }
}

/// Builds the router serving `GET <base_url>/favorites`.
pub fn router(base_url: &str, reader: Arc<FavoritesReader>) -> Router {
    Router::new()
        .route(&url_path_join(base_url, FAVORITES_ROUTE), get(get_favorites))
        .with_state(reader)
}

async fn get_favorites(State(reader): State<Arc<FavoritesReader>>) -> Json<FavoritesResponse> {
    let task_reader = Arc::clone(&reader);
    let response = match tokio::task::spawn_blocking(move || task_reader.read()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("favorites read task failed: {e}");
            FavoritesResponse::with_defaults(reader.default_favorites())
        }
    };

    tracing::debug!(
        default = response.defaults.len(),
        valid = response.valid.len(),
        invalid = response.invalid.len(),
        "served favorites"
    );

    Json(response)
}
