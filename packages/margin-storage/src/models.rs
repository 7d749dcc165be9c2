use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NoteRecord {
	pub note_id: Uuid,
	pub title: String,
	pub content: String,
	pub keywords: Vec<String>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
