use crate::{MarginService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FilterTextRequest {
	pub text: Option<String>,
}

impl MarginService {
	pub fn filter_text(&self, req: FilterTextRequest) -> ServiceResult<Vec<String>> {
		let Some(text) = req.text else {
			return Err(ServiceError::InvalidRequest { message: "text is required.".to_string() });
		};

		Ok(margin_domain::filter::filter_tokens(&text))
	}
}
