use time::OffsetDateTime;

use crate::{
	Error, Result,
	db::Db,
	models::{ItemPatch, ItemRow, NewItem},
};

pub async fn insert_item(db: &Db, item: &NewItem, now: OffsetDateTime) -> Result<ItemRow> {
	let row = sqlx::query_as::<_, ItemRow>(
		"\
INSERT INTO items (title, description, status, priority, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING *",
	)
	.bind(item.title.as_str())
	.bind(item.description.as_str())
	.bind(item.status.as_str())
	.bind(item.priority.as_str())
	.bind(now)
	.bind(now)
	.fetch_one(&db.pool)
	.await?;

	Ok(row)
}

pub async fn list_items(
	db: &Db,
	status: Option<&str>,
	priority: Option<&str>,
) -> Result<Vec<ItemRow>> {
	let mut builder = sqlx::QueryBuilder::new("SELECT * FROM items WHERE 1=1");

	if let Some(status) = status {
		builder.push(" AND status = ");
		builder.push_bind(status);
	}
	if let Some(priority) = priority {
		builder.push(" AND priority = ");
		builder.push_bind(priority);
	}

	builder.push(" ORDER BY created_at DESC");

	let rows: Vec<ItemRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn fetch_item(db: &Db, id: i64) -> Result<ItemRow> {
	sqlx::query_as::<_, ItemRow>("SELECT * FROM items WHERE id = $1")
		.bind(id)
		.fetch_optional(&db.pool)
		.await?
		.ok_or_else(|| Error::NotFound("Item not found.".to_string()))
}

pub async fn update_item(
	db: &Db,
	id: i64,
	patch: &ItemPatch,
	now: OffsetDateTime,
) -> Result<()> {
	let mut builder = sqlx::QueryBuilder::new("UPDATE items SET ");

	{
		let mut set = builder.separated(", ");

		if let Some(title) = &patch.title {
			set.push("title = ");
			set.push_bind_unseparated(title);
		}
		if let Some(description) = &patch.description {
			set.push("description = ");
			set.push_bind_unseparated(description);
		}
		if let Some(status) = &patch.status {
			set.push("status = ");
			set.push_bind_unseparated(status);
		}
		if let Some(priority) = &patch.priority {
			set.push("priority = ");
			set.push_bind_unseparated(priority);
		}

		set.push("updated_at = ");
		set.push_bind_unseparated(now);
	}

	builder.push(" WHERE id = ");
	builder.push_bind(id);

	let result = builder.build().execute(&db.pool).await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Item not found.".to_string()));
	}

	Ok(())
}

pub async fn delete_item(db: &Db, id: i64) -> Result<()> {
	let result = sqlx::query("DELETE FROM items WHERE id = $1").bind(id).execute(&db.pool).await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Item not found.".to_string()));
	}

	Ok(())
}
