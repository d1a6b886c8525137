use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemoryRow {
	pub id: Uuid,
	pub url: String,
	pub title: String,
	pub content_type: String,
	pub content: Option<String>,
	pub selected_text: Option<String>,
	pub context_before: Option<String>,
	pub context_after: Option<String>,
	pub full_context: Option<String>,
	pub element_type: Option<String>,
	pub page_section: Option<String>,
	pub xpath: Option<String>,
	pub tags: Option<String>,
	pub notes: Option<String>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
	pub scraped_at: OffsetDateTime,
	pub video_platform: Option<String>,
	pub video_timestamp: Option<i64>,
	pub video_duration: Option<i64>,
	pub video_title: Option<String>,
	pub video_url: Option<String>,
	pub thumbnail_url: Option<String>,
	pub formatted_timestamp: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LinkRow {
	pub id: i64,
	pub memory_id: Uuid,
	pub text: Option<String>,
	pub href: String,
	pub link_title: Option<String>,
	pub created_at: OffsetDateTime,
}

/// Insert form of a link; `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewLink {
	pub text: Option<String>,
	pub href: String,
	pub link_title: Option<String>,
}

/// The mutable slice of a memory. Unset fields are left untouched;
/// `updated_at` always moves.
#[derive(Debug, Clone, Default)]
pub struct MemoryPatch {
	pub title: Option<String>,
	pub tags: Option<String>,
	pub notes: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub status: String,
	pub priority: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewItem {
	pub title: String,
	pub description: String,
	pub status: String,
	pub priority: String,
}

#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
	pub title: Option<String>,
	pub description: Option<String>,
	pub status: Option<String>,
	pub priority: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScrapedDataRow {
	pub id: i64,
	pub user_id: String,
	pub url: String,
	pub title: String,
	pub content: String,
	pub metadata: Value,
	pub tags: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewScrapedData {
	pub user_id: String,
	pub url: String,
	pub title: String,
	pub content: String,
	pub metadata: Value,
	pub tags: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScrapedDataPatch {
	pub title: Option<String>,
	pub content: Option<String>,
	pub metadata: Option<Value>,
	pub tags: Option<String>,
}
