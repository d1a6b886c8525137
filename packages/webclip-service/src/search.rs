use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Error, ListResponse, MemoryView, Result, WebclipService, present};
use webclip_storage::filter::{self, SearchCriteria};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SearchRequest {
	#[serde(default)]
	pub query: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub content_type: String,
	#[serde(default)]
	pub platform: String,
	#[serde(default)]
	pub start_date: String,
	#[serde(default)]
	pub end_date: String,
	#[serde(default)]
	pub limit: Option<i64>,
	#[serde(default)]
	pub offset: Option<i64>,
}

impl WebclipService {
	/// Full-text search over `title || content || selected_text || tags`,
	/// AND-combined with the optional equality, tag, and date filters.
	pub async fn search(&self, req: SearchRequest) -> Result<ListResponse> {
		let criteria = SearchCriteria {
			query: present(Some(req.query)),
			content_type: present(Some(req.content_type)),
			platform: present(Some(req.platform)),
			tags: req.tags.into_iter().filter(|tag| !tag.is_empty()).collect(),
			start_date: parse_date(&req.start_date, "start_date")?,
			end_date: parse_date(&req.end_date, "end_date")?,
			limit: req.limit,
			offset: req.offset,
		};
		let (rows, page) = filter::search_memories(&self.db, &criteria).await?;
		let memories = rows.into_iter().map(MemoryView::from_row).collect::<Vec<_>>();

		Ok(ListResponse { count: memories.len(), memories, limit: page.limit, offset: page.offset })
	}
}

fn parse_date(raw: &str, field: &str) -> Result<Option<OffsetDateTime>> {
	if raw.is_empty() {
		return Ok(None);
	}

	OffsetDateTime::parse(raw, &Rfc3339).map(Some).map_err(|_| Error::InvalidRequest {
		message: format!("{field} must be an RFC 3339 timestamp."),
	})
}
