use std::sync::Arc;

use margin_service::MarginService;
use margin_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MarginService>,
}
impl AppState {
	pub async fn new(config: margin_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = MarginService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
