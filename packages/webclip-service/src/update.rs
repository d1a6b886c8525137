use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{MemoryView, Result, WebclipService};
use webclip_domain::tags;
use webclip_storage::{models::MemoryPatch, queries};

/// Only `title`, `tags`, and `notes` are mutable after capture. Blank fields
/// are left untouched; `updated_at` moves on every call.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub notes: String,
}

impl WebclipService {
	pub async fn update_memory(&self, id: Uuid, req: UpdateRequest) -> Result<MemoryView> {
		let patch = MemoryPatch {
			title: tags::optional(req.title),
			tags: tags::join(&req.tags),
			notes: tags::optional(req.notes),
		};
		let now = OffsetDateTime::now_utc();

		queries::update_memory(&self.db, id, &patch, now).await?;

		let row = queries::fetch_memory(&self.db, id).await?;
		let links = queries::fetch_links(&self.db, id).await?;

		Ok(MemoryView::from_row(row).with_links(links))
	}
}
