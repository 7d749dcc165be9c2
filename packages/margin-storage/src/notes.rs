use sqlx::PgPool;
use uuid::Uuid;

use crate::{Result, models::NoteRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
	Inserted,
	Updated,
}

#[derive(Debug)]
pub struct UpsertNote<'a> {
	pub title: &'a str,
	pub content: &'a str,
	pub keywords: &'a [String],
}

/// Full corpus snapshot, ordered by title for stable listings.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<NoteRecord>> {
	let records = sqlx::query_as::<_, NoteRecord>(
		"\
SELECT note_id, title, content, keywords, created_at, updated_at
FROM notes
ORDER BY title",
	)
	.fetch_all(pool)
	.await?;

	Ok(records)
}

pub async fn fetch_by_id(pool: &PgPool, note_id: Uuid) -> Result<Option<NoteRecord>> {
	let record = sqlx::query_as::<_, NoteRecord>(
		"\
SELECT note_id, title, content, keywords, created_at, updated_at
FROM notes
WHERE note_id = $1",
	)
	.bind(note_id)
	.fetch_optional(pool)
	.await?;

	Ok(record)
}

pub async fn count(pool: &PgPool) -> Result<i64> {
	let count: i64 =
		sqlx::query_scalar("SELECT COUNT(*) FROM notes").fetch_one(pool).await?;

	Ok(count)
}

pub async fn upsert(pool: &PgPool, note: UpsertNote<'_>) -> Result<UpsertOutcome> {
	// xmax = 0 only for freshly inserted rows, which distinguishes the two
	// conflict outcomes without a second round trip.
	let inserted: bool = sqlx::query_scalar(
		"\
INSERT INTO notes (note_id, title, content, keywords)
VALUES ($1, $2, $3, $4)
ON CONFLICT (title) DO UPDATE
SET content = EXCLUDED.content,
	keywords = EXCLUDED.keywords,
	updated_at = now()
RETURNING (xmax = 0) AS inserted",
	)
	.bind(Uuid::new_v4())
	.bind(note.title)
	.bind(note.content)
	.bind(note.keywords)
	.fetch_one(pool)
	.await?;

	if inserted { Ok(UpsertOutcome::Inserted) } else { Ok(UpsertOutcome::Updated) }
}
