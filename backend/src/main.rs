//! Backend entry-point: loads settings, prepares the store, and serves the
//! booking API.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_pending_migrations};
use ortho_config::OrthoConfig;
use server::{AppSettings, ServerConfig, create_server};

fn load_settings() -> io::Result<AppSettings> {
    AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))
}

async fn build_server_config(settings: &AppSettings) -> io::Result<ServerConfig> {
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, format!("bind address: {err}")))?;
    let config = ServerConfig::new(bind_addr);

    let Some(pool_config) = settings.pool_config() else {
        warn!("no database configured; serving fixture data, writes are not persisted");
        return Ok(config);
    };

    if settings.run_migrations {
        run_pending_migrations(pool_config.database_url().to_owned())
            .await
            .map_err(io::Error::other)?;
    }
    let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings()?;
    let config = build_server_config(&settings).await?;
    let store = config.store_mode();
    info!(bind_addr = %config.bind_addr, ?store, "starting booking backend");

    let health_state = web::Data::new(HealthState::new(store));
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
