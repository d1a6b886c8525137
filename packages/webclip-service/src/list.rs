use serde::{Deserialize, Serialize};

use crate::{MemoryView, Result, WebclipService, present};
use webclip_storage::filter::{self, ListFilter};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ListRequest {
	pub content_type: Option<String>,
	pub platform: Option<String>,
	pub tags: Option<String>,
	pub search: Option<String>,
	pub limit: Option<i64>,
	pub offset: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListResponse {
	pub memories: Vec<MemoryView>,
	pub count: usize,
	pub limit: i64,
	pub offset: i64,
}

impl WebclipService {
	pub async fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let filter = ListFilter {
			content_type: present(req.content_type),
			platform: present(req.platform),
			tags: present(req.tags),
			search: present(req.search),
			limit: req.limit,
			offset: req.offset,
		};
		let (rows, page) = filter::list_memories(&self.db, &filter).await?;
		let memories = rows.into_iter().map(MemoryView::from_row).collect::<Vec<_>>();

		Ok(ListResponse { count: memories.len(), memories, limit: page.limit, offset: page.offset })
	}
}
