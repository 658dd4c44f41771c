//! Server: loads settings from env (and `.env`), creates the `user` table, serves all routes.

use sqlite_admin::{app, AppState, Settings, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sqlite_admin=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.policy.raw_identifiers {
        tracing::warn!("ALLOW_RAW_IDENTIFIERS is set: table names are interpolated into SQL unchecked");
    }
    if settings.policy.generic_insert {
        tracing::info!("generic insert enabled for tables other than user");
    }

    let store = Store::from_url(&settings.database_url)?;
    store.ensure_user_table().await?;
    tracing::info!(database = %settings.database_url, "store ready");

    let state = AppState {
        store,
        policy: settings.policy,
    };
    let router = app(state, settings.max_body_bytes);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
