use crate::{MarginService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckWordRequest {
	pub word: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckWordResponse {
	pub is_relevant: bool,
}

impl MarginService {
	/// Toy relevance gate: lower-cased membership against the configured
	/// allow-list, unrelated to the retrieval index.
	pub fn check_word(&self, req: CheckWordRequest) -> ServiceResult<CheckWordResponse> {
		let Some(word) = req.word else {
			return Err(ServiceError::InvalidRequest { message: "word is required.".to_string() });
		};
		let is_relevant =
			margin_domain::relevance::is_relevant(&word, &self.cfg.relevance.allowed_words);

		Ok(CheckWordResponse { is_relevant })
	}
}
