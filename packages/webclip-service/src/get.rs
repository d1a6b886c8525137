use uuid::Uuid;

use crate::{MemoryView, Result, WebclipService};
use webclip_storage::queries;

impl WebclipService {
	pub async fn get_memory(&self, id: Uuid) -> Result<MemoryView> {
		let row = queries::fetch_memory(&self.db, id).await?;
		let links = queries::fetch_links(&self.db, id).await?;

		Ok(MemoryView::from_row(row).with_links(links))
	}
}
