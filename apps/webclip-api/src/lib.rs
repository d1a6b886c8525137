pub mod auth;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

pub async fn run() -> color_eyre::Result<()> {
	init_tracing();

	let config = webclip_config::load()?;

	if config.storage.postgres.dsn == webclip_config::DEV_DEFAULT_DSN {
		tracing::warn!("POSTGRES_URI not set; using the development default.");
	}

	let addr = SocketAddr::from(([0, 0, 0, 0], config.service.port));
	let state = AppState::new(config).await?;
	let app = routes::router(state);

	let listener = TcpListener::bind(addr).await?;

	tracing::info!(%addr, "HTTP server listening.");

	axum::serve(listener, app).await?;

	Ok(())
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
