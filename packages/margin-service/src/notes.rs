use rand::seq::SliceRandom;

use margin_storage::notes;

use crate::{MarginService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GetNoteRequest {
	pub word: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteBody {
	pub title: String,
	pub content: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteListItem {
	pub note_id: uuid::Uuid,
	pub title: String,
	pub content: String,
	pub keywords: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListNotesResponse {
	pub notes: Vec<NoteListItem>,
}

impl MarginService {
	/// Uniformly random stored note. The hovered word is accepted for wire
	/// compatibility with the overlay client but does not bias the choice.
	pub async fn get_note(&self, req: GetNoteRequest) -> ServiceResult<NoteBody> {
		if let Some(word) = req.word.as_deref() {
			tracing::debug!(word, "Note requested for hovered word.");
		}

		let records = notes::fetch_all(&self.db.pool).await?;
		let Some(note) = records.choose(&mut rand::thread_rng()) else {
			return Err(ServiceError::NotFound { message: "No notes are stored.".to_string() });
		};

		Ok(NoteBody { title: note.title.clone(), content: note.content.clone() })
	}

	pub async fn list_notes(&self) -> ServiceResult<ListNotesResponse> {
		let records = notes::fetch_all(&self.db.pool).await?;
		let notes = records
			.into_iter()
			.map(|note| NoteListItem {
				note_id: note.note_id,
				title: note.title,
				content: note.content,
				keywords: note.keywords,
			})
			.collect();

		Ok(ListNotesResponse { notes })
	}
}
