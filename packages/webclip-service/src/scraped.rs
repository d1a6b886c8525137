use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::{Error, Result, WebclipService, present};
use webclip_domain::capture;
use webclip_storage::{
	filter::DEFAULT_LIMIT,
	models::{NewScrapedData, ScrapedDataPatch, ScrapedDataRow},
	scraped,
};

const MAX_TITLE_CHARS: usize = 500;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateScrapedDataRequest {
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub metadata: Map<String, Value>,
	#[serde(default)]
	pub tags: Vec<String>,
}

/// Absent fields are left untouched; `tags`/`metadata` distinguish "absent"
/// from "set to empty" so both can be cleared.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateScrapedDataRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub metadata: Option<Map<String, Value>>,
	#[serde(default)]
	pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ScrapedDataFilter {
	pub url: Option<String>,
	pub tag: Option<String>,
	pub limit: Option<i64>,
	pub page: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScrapedDataView {
	pub id: i64,
	pub user_id: String,
	pub url: String,
	pub title: String,
	pub content: String,
	pub metadata: Value,
	pub tags: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}
impl ScrapedDataView {
	fn from_row(row: ScrapedDataRow) -> Self {
		Self {
			id: row.id,
			user_id: row.user_id,
			url: row.url,
			title: row.title,
			content: row.content,
			metadata: row.metadata,
			tags: row.tags,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScrapedDataListResponse {
	pub data: Vec<ScrapedDataView>,
	pub page: i64,
	pub limit: i64,
}

impl WebclipService {
	pub async fn create_scraped(
		&self,
		user_id: &str,
		req: CreateScrapedDataRequest,
	) -> Result<ScrapedDataView> {
		validate_scraped_create(&req)?;

		let data = NewScrapedData {
			user_id: user_id.to_string(),
			url: req.url,
			title: req.title,
			content: req.content,
			metadata: Value::Object(req.metadata),
			tags: req.tags.join(","),
		};
		let row = scraped::insert_scraped(&self.db, &data, OffsetDateTime::now_utc()).await?;

		Ok(ScrapedDataView::from_row(row))
	}

	pub async fn list_scraped(
		&self,
		user_id: &str,
		filter: ScrapedDataFilter,
	) -> Result<ScrapedDataListResponse> {
		let limit = filter.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LIMIT);
		let page = filter.page.filter(|page| *page > 0).unwrap_or(1);
		let offset = (page - 1) * limit;
		let url = present(filter.url);
		let tag = present(filter.tag);
		let rows =
			scraped::list_scraped(&self.db, user_id, url.as_deref(), tag.as_deref(), limit, offset)
				.await?;

		Ok(ScrapedDataListResponse {
			data: rows.into_iter().map(ScrapedDataView::from_row).collect(),
			page,
			limit,
		})
	}

	pub async fn get_scraped(&self, user_id: &str, id: i64) -> Result<ScrapedDataView> {
		let row = scraped::fetch_scraped(&self.db, id, user_id).await?;

		Ok(ScrapedDataView::from_row(row))
	}

	pub async fn update_scraped(
		&self,
		user_id: &str,
		id: i64,
		req: UpdateScrapedDataRequest,
	) -> Result<()> {
		if req.title.chars().count() > MAX_TITLE_CHARS {
			return Err(Error::InvalidRequest {
				message: "title must be at most 500 characters.".to_string(),
			});
		}

		let patch = ScrapedDataPatch {
			title: present(Some(req.title)),
			content: present(Some(req.content)),
			metadata: req.metadata.map(Value::Object),
			tags: req.tags.map(|tags| tags.join(",")),
		};

		if patch.title.is_none()
			&& patch.content.is_none()
			&& patch.metadata.is_none()
			&& patch.tags.is_none()
		{
			return Err(Error::InvalidRequest { message: "No fields to update.".to_string() });
		}

		scraped::update_scraped(&self.db, id, user_id, &patch, OffsetDateTime::now_utc()).await?;

		Ok(())
	}

	pub async fn delete_scraped(&self, user_id: &str, id: i64) -> Result<()> {
		scraped::delete_scraped(&self.db, id, user_id).await?;

		Ok(())
	}
}

fn validate_scraped_create(req: &CreateScrapedDataRequest) -> Result<()> {
	if req.url.is_empty() || !capture::is_absolute_url(&req.url) {
		return Err(Error::InvalidRequest { message: "url must be a valid URL.".to_string() });
	}
	if req.title.is_empty() {
		return Err(Error::InvalidRequest { message: "title is required.".to_string() });
	}
	if req.title.chars().count() > MAX_TITLE_CHARS {
		return Err(Error::InvalidRequest {
			message: "title must be at most 500 characters.".to_string(),
		});
	}
	if req.content.is_empty() {
		return Err(Error::InvalidRequest { message: "content is required.".to_string() });
	}

	Ok(())
}
