use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::{
	Error, Result,
	db::Db,
	models::{LinkRow, MemoryPatch, MemoryRow, NewLink},
};

pub(crate) const MEMORY_COLUMNS: &str = "\
id, url, title, content_type, content, selected_text, \
context_before, context_after, full_context, \
element_type, page_section, xpath, tags, notes, \
created_at, updated_at, scraped_at, \
video_platform, video_timestamp, video_duration, \
video_title, video_url, thumbnail_url, formatted_timestamp";

/// Inserts a memory and its extracted links in one transaction. On any error
/// the transaction rolls back and no partial state is visible.
pub async fn insert_memory(db: &Db, memory: &MemoryRow, links: &[NewLink]) -> Result<()> {
	let mut tx = db.pool.begin().await?;

	sqlx::query(
		"\
INSERT INTO memories (
	id,
	url,
	title,
	content_type,
	content,
	selected_text,
	context_before,
	context_after,
	full_context,
	element_type,
	page_section,
	xpath,
	tags,
	notes,
	created_at,
	updated_at,
	scraped_at,
	video_platform,
	video_timestamp,
	video_duration,
	video_title,
	video_url,
	thumbnail_url,
	formatted_timestamp
)
VALUES (
	$1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
	$13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24
)",
	)
	.bind(memory.id)
	.bind(memory.url.as_str())
	.bind(memory.title.as_str())
	.bind(memory.content_type.as_str())
	.bind(memory.content.as_deref())
	.bind(memory.selected_text.as_deref())
	.bind(memory.context_before.as_deref())
	.bind(memory.context_after.as_deref())
	.bind(memory.full_context.as_deref())
	.bind(memory.element_type.as_deref())
	.bind(memory.page_section.as_deref())
	.bind(memory.xpath.as_deref())
	.bind(memory.tags.as_deref())
	.bind(memory.notes.as_deref())
	.bind(memory.created_at)
	.bind(memory.updated_at)
	.bind(memory.scraped_at)
	.bind(memory.video_platform.as_deref())
	.bind(memory.video_timestamp)
	.bind(memory.video_duration)
	.bind(memory.video_title.as_deref())
	.bind(memory.video_url.as_deref())
	.bind(memory.thumbnail_url.as_deref())
	.bind(memory.formatted_timestamp.as_deref())
	.execute(&mut *tx)
	.await?;

	for link in links {
		sqlx::query("INSERT INTO links (memory_id, text, href, link_title) VALUES ($1, $2, $3, $4)")
			.bind(memory.id)
			.bind(link.text.as_deref())
			.bind(link.href.as_str())
			.bind(link.link_title.as_deref())
			.execute(&mut *tx)
			.await?;
	}

	tx.commit().await?;

	Ok(())
}

pub async fn fetch_memory(db: &Db, id: Uuid) -> Result<MemoryRow> {
	sqlx::query_as::<_, MemoryRow>("SELECT * FROM memories WHERE id = $1")
		.bind(id)
		.fetch_optional(&db.pool)
		.await?
		.ok_or_else(|| Error::NotFound("Memory not found.".to_string()))
}

pub async fn fetch_links(db: &Db, memory_id: Uuid) -> Result<Vec<LinkRow>> {
	let links = sqlx::query_as::<_, LinkRow>(
		"\
SELECT id, memory_id, text, href, link_title, created_at
FROM links
WHERE memory_id = $1
ORDER BY id",
	)
	.bind(memory_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(links)
}

/// Applies the mutable fields of `patch` and refreshes `updated_at`. An
/// empty patch still moves `updated_at`.
pub async fn update_memory(
	db: &Db,
	id: Uuid,
	patch: &MemoryPatch,
	now: OffsetDateTime,
) -> Result<()> {
	let mut builder = sqlx::QueryBuilder::new("UPDATE memories SET ");

	{
		let mut set = builder.separated(", ");

		if let Some(title) = &patch.title {
			set.push("title = ");
			set.push_bind_unseparated(title);
		}
		if let Some(tags) = &patch.tags {
			set.push("tags = ");
			set.push_bind_unseparated(tags);
		}
		if let Some(notes) = &patch.notes {
			set.push("notes = ");
			set.push_bind_unseparated(notes);
		}

		set.push("updated_at = ");
		set.push_bind_unseparated(now);
	}

	builder.push(" WHERE id = ");
	builder.push_bind(id);

	let result = builder.build().execute(&db.pool).await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Memory not found.".to_string()));
	}

	Ok(())
}

/// Links cascade via `ON DELETE CASCADE`, so a single statement is atomic.
pub async fn delete_memory(db: &Db, id: Uuid) -> Result<()> {
	let result = sqlx::query("DELETE FROM memories WHERE id = $1").bind(id).execute(&db.pool).await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Memory not found.".to_string()));
	}

	Ok(())
}

pub async fn total_count(db: &Db) -> Result<i64> {
	let count = sqlx::query_scalar("SELECT COUNT(*) FROM memories").fetch_one(&db.pool).await?;

	Ok(count)
}

pub async fn count_by_content_type(db: &Db) -> Result<Vec<(String, i64)>> {
	let rows = sqlx::query_as(
		"SELECT content_type, COUNT(*) FROM memories GROUP BY content_type",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn count_by_platform(db: &Db) -> Result<Vec<(String, i64)>> {
	let rows = sqlx::query_as(
		"\
SELECT video_platform, COUNT(*)
FROM memories
WHERE video_platform IS NOT NULL
GROUP BY video_platform",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn recent_count(db: &Db, window: Duration) -> Result<i64> {
	let cutoff = OffsetDateTime::now_utc() - window;
	let count = sqlx::query_scalar("SELECT COUNT(*) FROM memories WHERE created_at > $1")
		.bind(cutoff)
		.fetch_one(&db.pool)
		.await?;

	Ok(count)
}
