use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, Result, WebclipService, present};
use webclip_storage::{
	items,
	models::{ItemPatch, ItemRow, NewItem},
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateItemRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub priority: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateItemRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub priority: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ItemFilter {
	pub status: Option<String>,
	pub priority: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ItemView {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub status: String,
	pub priority: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}
impl ItemView {
	fn from_row(row: ItemRow) -> Self {
		Self {
			id: row.id,
			title: row.title,
			description: row.description,
			status: row.status,
			priority: row.priority,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}

impl WebclipService {
	pub async fn create_item(&self, req: CreateItemRequest) -> Result<ItemView> {
		if req.title.is_empty() || req.status.is_empty() || req.priority.is_empty() {
			return Err(Error::InvalidRequest {
				message: "title, status, and priority are required.".to_string(),
			});
		}

		let item = NewItem {
			title: req.title,
			description: req.description,
			status: req.status,
			priority: req.priority,
		};
		let row = items::insert_item(&self.db, &item, OffsetDateTime::now_utc()).await?;

		Ok(ItemView::from_row(row))
	}

	pub async fn list_items(&self, filter: ItemFilter) -> Result<Vec<ItemView>> {
		let status = present(filter.status);
		let priority = present(filter.priority);
		let rows = items::list_items(&self.db, status.as_deref(), priority.as_deref()).await?;

		Ok(rows.into_iter().map(ItemView::from_row).collect())
	}

	pub async fn get_item(&self, id: i64) -> Result<ItemView> {
		let row = items::fetch_item(&self.db, id).await?;

		Ok(ItemView::from_row(row))
	}

	pub async fn update_item(&self, id: i64, req: UpdateItemRequest) -> Result<ItemView> {
		let patch = ItemPatch {
			title: present(Some(req.title)),
			description: present(Some(req.description)),
			status: present(Some(req.status)),
			priority: present(Some(req.priority)),
		};

		items::update_item(&self.db, id, &patch, OffsetDateTime::now_utc()).await?;

		let row = items::fetch_item(&self.db, id).await?;

		Ok(ItemView::from_row(row))
	}

	pub async fn delete_item(&self, id: i64) -> Result<()> {
		items::delete_item(&self.db, id).await?;

		Ok(())
	}
}
