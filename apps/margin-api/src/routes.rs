use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use margin_service::{
	CheckWordRequest, CheckWordResponse, FilterTextRequest, GetNoteRequest, InitializeResponse,
	ListNotesResponse, NoteBody, SearchRequest, SearchResponse, SeedReport, ServiceError,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/get_note", post(get_note))
		.route("/check_word", post(check_word))
		.route("/initialize", post(initialize))
		.route("/search", post(search))
		.route("/filter_text", post(filter_text))
		.route("/api/notes", get(list_notes))
		.route("/get_notes", get(list_notes))
		.with_state(state)
}

pub fn admin_router(state: AppState) -> Router {
	Router::new().route("/v1/admin/seed", post(seed)).with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn get_note(
	State(state): State<AppState>,
	Json(payload): Json<GetNoteRequest>,
) -> Result<Json<NoteBody>, ApiError> {
	let response = state.service.get_note(payload).await?;
	Ok(Json(response))
}

async fn check_word(
	State(state): State<AppState>,
	Json(payload): Json<CheckWordRequest>,
) -> Result<Json<CheckWordResponse>, ApiError> {
	let response = state.service.check_word(payload)?;
	Ok(Json(response))
}

async fn initialize(State(state): State<AppState>) -> Result<Json<InitializeResponse>, ApiError> {
	let response = state.service.initialize().await?;
	Ok(Json(response))
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;
	Ok(Json(response))
}

async fn filter_text(
	State(state): State<AppState>,
	Json(payload): Json<FilterTextRequest>,
) -> Result<Json<Vec<String>>, ApiError> {
	let response = state.service.filter_text(payload)?;
	Ok(Json(response))
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<ListNotesResponse>, ApiError> {
	let response = state.service.list_notes().await?;
	Ok(Json(response))
}

async fn seed(State(state): State<AppState>) -> Result<Json<SeedReport>, ApiError> {
	let response = state.service.seed().await?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let status = match &err {
			ServiceError::InvalidRequest { .. } | ServiceError::NotInitialized =>
				StatusCode::BAD_REQUEST,
			ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
			ServiceError::Provider { .. } => StatusCode::BAD_GATEWAY,
			ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		};

		if status.is_server_error() {
			tracing::error!(error = %err, "Request failed.");
		}

		Self { status, message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.message };

		(self.status, Json(body)).into_response()
	}
}
