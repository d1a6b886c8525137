use std::sync::Arc;

use webclip_service::WebclipService;
use webclip_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<WebclipService>,
	pub jwt_secret: Option<String>,
}
impl AppState {
	pub async fn new(config: webclip_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = WebclipService::new(db);

		Ok(Self { service: Arc::new(service), jwt_secret: config.security.jwt_secret })
	}
}
