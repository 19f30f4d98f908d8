mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use favdir_server::FavoritesServer;
use favdir_store::FavoritesReader;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,favdir=debug")),
        )
        .init();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    let reader = FavoritesReader::new(cfg.reader_config());
    let server = FavoritesServer::new(cfg.server_config(), reader);

    let runner = Arc::clone(&server);
    let mut handle = tokio::spawn(async move { runner.run().await });

    tokio::select! {
        result = &mut handle => {
            result??;
            return Ok(());
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received");
            server.shutdown();
        }
    }

    handle.await??;
    Ok(())
}
