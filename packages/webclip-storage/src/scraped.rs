use time::OffsetDateTime;

use crate::{
	Error, Result,
	db::Db,
	models::{NewScrapedData, ScrapedDataPatch, ScrapedDataRow},
};

/// Every scraped-data statement is additionally scoped by `user_id`; rows
/// belonging to other users behave exactly like missing rows.
pub async fn insert_scraped(
	db: &Db,
	data: &NewScrapedData,
	now: OffsetDateTime,
) -> Result<ScrapedDataRow> {
	let row = sqlx::query_as::<_, ScrapedDataRow>(
		"\
INSERT INTO scraped_data (user_id, url, title, content, metadata, tags, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
RETURNING *",
	)
	.bind(data.user_id.as_str())
	.bind(data.url.as_str())
	.bind(data.title.as_str())
	.bind(data.content.as_str())
	.bind(&data.metadata)
	.bind(data.tags.as_str())
	.bind(now)
	.bind(now)
	.fetch_one(&db.pool)
	.await?;

	Ok(row)
}

pub async fn list_scraped(
	db: &Db,
	user_id: &str,
	url: Option<&str>,
	tag: Option<&str>,
	limit: i64,
	offset: i64,
) -> Result<Vec<ScrapedDataRow>> {
	let mut builder = sqlx::QueryBuilder::new("SELECT * FROM scraped_data WHERE user_id = ");

	builder.push_bind(user_id);

	if let Some(url) = url {
		builder.push(" AND url ILIKE ");
		builder.push_bind(format!("%{url}%"));
	}
	if let Some(tag) = tag {
		builder.push(" AND tags ILIKE ");
		builder.push_bind(format!("%{tag}%"));
	}

	builder.push(" ORDER BY created_at DESC LIMIT ");
	builder.push_bind(limit);
	builder.push(" OFFSET ");
	builder.push_bind(offset);

	let rows: Vec<ScrapedDataRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn fetch_scraped(db: &Db, id: i64, user_id: &str) -> Result<ScrapedDataRow> {
	sqlx::query_as::<_, ScrapedDataRow>("SELECT * FROM scraped_data WHERE id = $1 AND user_id = $2")
		.bind(id)
		.bind(user_id)
		.fetch_optional(&db.pool)
		.await?
		.ok_or_else(|| Error::NotFound("Scraped data not found.".to_string()))
}

pub async fn update_scraped(
	db: &Db,
	id: i64,
	user_id: &str,
	patch: &ScrapedDataPatch,
	now: OffsetDateTime,
) -> Result<()> {
	let mut builder = sqlx::QueryBuilder::new("UPDATE scraped_data SET ");

	{
		let mut set = builder.separated(", ");

		if let Some(title) = &patch.title {
			set.push("title = ");
			set.push_bind_unseparated(title);
		}
		if let Some(content) = &patch.content {
			set.push("content = ");
			set.push_bind_unseparated(content);
		}
		if let Some(metadata) = &patch.metadata {
			set.push("metadata = ");
			set.push_bind_unseparated(metadata);
		}
		if let Some(tags) = &patch.tags {
			set.push("tags = ");
			set.push_bind_unseparated(tags);
		}

		set.push("updated_at = ");
		set.push_bind_unseparated(now);
	}

	builder.push(" WHERE id = ");
	builder.push_bind(id);
	builder.push(" AND user_id = ");
	builder.push_bind(user_id);

	let result = builder.build().execute(&db.pool).await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Scraped data not found.".to_string()));
	}

	Ok(())
}

pub async fn delete_scraped(db: &Db, id: i64, user_id: &str) -> Result<()> {
	let result = sqlx::query("DELETE FROM scraped_data WHERE id = $1 AND user_id = $2")
		.bind(id)
		.bind(user_id)
		.execute(&db.pool)
		.await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Scraped data not found.".to_string()));
	}

	Ok(())
}
