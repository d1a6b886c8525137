use time::OffsetDateTime;

use crate::{Result, db::Db, models::MemoryRow, queries::MEMORY_COLUMNS};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 100;

/// Options recognized by the listing endpoint. Absent fields add no
/// predicate; predicates are always AND-combined.
#[derive(Clone, Debug, Default)]
pub struct ListFilter {
	pub content_type: Option<String>,
	pub platform: Option<String>,
	pub tags: Option<String>,
	pub search: Option<String>,
	pub limit: Option<i64>,
	pub offset: Option<i64>,
}

/// Options recognized by the full-text search endpoint.
#[derive(Clone, Debug, Default)]
pub struct SearchCriteria {
	pub query: Option<String>,
	pub content_type: Option<String>,
	pub platform: Option<String>,
	pub tags: Vec<String>,
	pub start_date: Option<OffsetDateTime>,
	pub end_date: Option<OffsetDateTime>,
	pub limit: Option<i64>,
	pub offset: Option<i64>,
}

#[derive(Clone, Copy, Debug)]
pub struct Page {
	pub limit: i64,
	pub offset: i64,
}

pub fn clamp_page(limit: Option<i64>, offset: Option<i64>) -> Page {
	Page {
		limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
		offset: offset.unwrap_or(0).max(0),
	}
}

pub async fn list_memories(db: &Db, filter: &ListFilter) -> Result<(Vec<MemoryRow>, Page)> {
	let page = clamp_page(filter.limit, filter.offset);
	let mut builder =
		sqlx::QueryBuilder::new(format!("SELECT {MEMORY_COLUMNS} FROM memories WHERE 1=1"));

	if let Some(content_type) = &filter.content_type {
		builder.push(" AND content_type = ");
		builder.push_bind(content_type);
	}
	if let Some(platform) = &filter.platform {
		builder.push(" AND video_platform = ");
		builder.push_bind(platform);
	}
	if let Some(tags) = &filter.tags {
		// Infix match on the joined string; a tag that is a substring of
		// another tag matches both.
		builder.push(" AND tags LIKE ");
		builder.push_bind(format!("%{tags}%"));
	}
	if let Some(search) = &filter.search {
		let needle = format!("%{search}%");

		builder.push(" AND (title ILIKE ");
		builder.push_bind(needle.clone());
		builder.push(" OR content ILIKE ");
		builder.push_bind(needle.clone());
		builder.push(" OR selected_text ILIKE ");
		builder.push_bind(needle);
		builder.push(")");
	}

	push_page(&mut builder, page);

	let rows: Vec<MemoryRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok((rows, page))
}

pub async fn search_memories(db: &Db, criteria: &SearchCriteria) -> Result<(Vec<MemoryRow>, Page)> {
	let page = clamp_page(criteria.limit, criteria.offset);
	let mut builder =
		sqlx::QueryBuilder::new(format!("SELECT {MEMORY_COLUMNS} FROM memories WHERE 1=1"));

	if let Some(query) = &criteria.query {
		builder.push(
			" AND to_tsvector('english', COALESCE(title, '') || ' ' || COALESCE(content, '') || ' ' || \
             COALESCE(selected_text, '') || ' ' || COALESCE(tags, '')) @@ plainto_tsquery('english', ",
		);
		builder.push_bind(query);
		builder.push(")");
	}
	if let Some(content_type) = &criteria.content_type {
		builder.push(" AND content_type = ");
		builder.push_bind(content_type);
	}
	if let Some(platform) = &criteria.platform {
		builder.push(" AND video_platform = ");
		builder.push_bind(platform);
	}

	for tag in &criteria.tags {
		builder.push(" AND tags LIKE ");
		builder.push_bind(format!("%{tag}%"));
	}

	if let Some(start_date) = criteria.start_date {
		builder.push(" AND created_at >= ");
		builder.push_bind(start_date);
	}
	if let Some(end_date) = criteria.end_date {
		builder.push(" AND created_at <= ");
		builder.push_bind(end_date);
	}

	push_page(&mut builder, page);

	let rows: Vec<MemoryRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok((rows, page))
}

// Ordering is not user-selectable; newest first, always.
fn push_page(builder: &mut sqlx::QueryBuilder<'_, sqlx::Postgres>, page: Page) {
	builder.push(" ORDER BY created_at DESC LIMIT ");
	builder.push_bind(page.limit);
	builder.push(" OFFSET ");
	builder.push_bind(page.offset);
}
