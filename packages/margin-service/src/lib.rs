pub mod admin;
pub mod check_word;
pub mod filter_text;
pub mod initialize;
pub mod notes;
pub mod search;

use std::{
	future::Future,
	pin::Pin,
	sync::{Arc, RwLock},
};

pub use admin::SeedReport;
pub use check_word::{CheckWordRequest, CheckWordResponse};
pub use filter_text::FilterTextRequest;
pub use initialize::InitializeResponse;
pub use notes::{GetNoteRequest, ListNotesResponse, NoteBody, NoteListItem};
pub use search::{RelatedNote, SearchRequest, SearchResponse};

use margin_config::{Config, EmbeddingProviderConfig, LlmProviderConfig};
use margin_index::VectorIndex;
use margin_providers::{embedding, keywords};
use margin_storage::db::Db;

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>>;
}

pub trait KeywordProvider
where
	Self: Send + Sync,
{
	fn extract<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		title: &'a str,
		content: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<String>>>;
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	NotInitialized,
	NotFound { message: String },
	Provider { message: String },
	Storage { message: String },
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub keywords: Arc<dyn KeywordProvider>,
}

/// Relevance service over the note store. The retrieval index starts out
/// absent (`Uninitialized`); `initialize` builds a fresh index from the full
/// corpus and swaps it in wholesale. Readers clone the `Arc` out of the lock,
/// so an in-flight query keeps whichever index it started with.
pub struct MarginService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
	index: RwLock<Option<Arc<VectorIndex>>>,
}

struct DefaultProviders;

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::NotInitialized => {
				write!(f, "Index is not initialized; call /initialize first.")
			},
			Self::NotFound { message } => write!(f, "Not found: {message}"),
			Self::Provider { message } => write!(f, "Provider error: {message}"),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<margin_storage::Error> for ServiceError {
	fn from(err: margin_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<margin_index::Error> for ServiceError {
	fn from(err: margin_index::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

impl From<color_eyre::Report> for ServiceError {
	fn from(err: color_eyre::Report) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts))
	}
}

impl KeywordProvider for DefaultProviders {
	fn extract<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		title: &'a str,
		content: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<String>>> {
		Box::pin(keywords::extract(cfg, title, content))
	}
}

impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>, keywords: Arc<dyn KeywordProvider>) -> Self {
		Self { embedding, keywords }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { embedding: provider.clone(), keywords: provider }
	}
}

impl MarginService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self::with_providers(cfg, db, Providers::default())
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers, index: RwLock::new(None) }
	}

	pub fn is_ready(&self) -> bool {
		self.current_index().is_some()
	}

	pub(crate) fn current_index(&self) -> Option<Arc<VectorIndex>> {
		self.index.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub(crate) fn install_index(&self, index: Arc<VectorIndex>) {
		*self.index.write().unwrap_or_else(|err| err.into_inner()) = Some(index);
	}
}
