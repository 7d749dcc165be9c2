use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	pub retrieval: Retrieval,
	#[serde(default)]
	pub relevance: Relevance,
	#[serde(default)]
	pub corpus: Corpus,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub admin_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	#[serde(default = "default_acquire_timeout_ms")]
	pub acquire_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub keyword_extractor: Option<LlmProviderConfig>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Retrieval {
	/// Minimum cosine score a candidate must reach to be returned. Deployed
	/// values have ranged between 0.70 and 0.75.
	#[serde(default = "default_similarity_threshold")]
	pub similarity_threshold: f32,
	/// Candidate pool bound applied by the index before threshold filtering.
	#[serde(default = "default_top_k")]
	pub top_k: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Relevance {
	pub allowed_words: Vec<String>,
}
impl Default for Relevance {
	fn default() -> Self {
		Self { allowed_words: default_allowed_words() }
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Corpus {
	pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}

fn default_acquire_timeout_ms() -> u64 {
	5_000
}

fn default_similarity_threshold() -> f32 {
	0.70
}

fn default_top_k() -> u32 {
	10
}

fn default_allowed_words() -> Vec<String> {
	["flask", "button", "text", "database", "chatgpt", "logic", "swift", "python", "backend"]
		.into_iter()
		.map(str::to_string)
		.collect()
}
