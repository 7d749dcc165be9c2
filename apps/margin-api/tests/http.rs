use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::Map;
use tower::util::ServiceExt;

use margin_api::{routes, state::AppState};
use margin_config::{
	Config, Corpus, EmbeddingProviderConfig, Postgres, Providers, Relevance, Retrieval, Security,
	Service, Storage,
};
use margin_testkit::TestDatabase;

fn test_config(dsn: String) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			admin_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		storage: Storage {
			postgres: Postgres { dsn, pool_max_conns: 1, acquire_timeout_ms: 5_000 },
		},
		providers: Providers {
			embedding: dummy_embedding_provider(),
			keyword_extractor: None,
		},
		retrieval: Retrieval { similarity_threshold: 0.70, top_k: 10 },
		relevance: Relevance::default(),
		corpus: Corpus { seed_path: None },
		security: Security { bind_localhost_only: true },
	}
}

fn dummy_embedding_provider() -> EmbeddingProviderConfig {
	EmbeddingProviderConfig {
		provider_id: "test".to_string(),
		api_base: "http://127.0.0.1:1".to_string(),
		api_key: "test-key".to_string(),
		path: "/".to_string(),
		model: "test".to_string(),
		dimensions: 8,
		timeout_ms: 1_000,
		default_headers: Map::new(),
	}
}

async fn test_env() -> Option<TestDatabase> {
	let base_dsn = match margin_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("Skipping HTTP tests; set MARGIN_PG_DSN to run this test.");

			return None;
		},
	};

	Some(TestDatabase::new(&base_dsn).await.expect("Failed to create test database."))
}

fn json_request(uri: &str, payload: serde_json::Value) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header("content-type", "application/json")
		.body(Body::from(payload.to_string()))
		.expect("Failed to build request.")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");

	serde_json::from_slice(&bytes).expect("Failed to parse response.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn health_ok() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state.clone());
	let _ = routes::admin_router(state);
	let response = app
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn filter_text_returns_ordered_tokens() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let payload = serde_json::json!({ "text": "The the quick Quick fox jumps 123" });
	let response = app
		.oneshot(json_request("/filter_text", payload))
		.await
		.expect("Failed to call /filter_text.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = response_json(response).await;

	assert_eq!(json, serde_json::json!(["quick", "fox", "jumps"]));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn filter_text_requires_a_text_field() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.oneshot(json_request("/filter_text", serde_json::json!({})))
		.await
		.expect("Failed to call /filter_text.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = response_json(response).await;

	assert!(json["error"].as_str().expect("Expected an error payload.").contains("text"));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn check_word_answers_the_allow_list() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.clone()
		.oneshot(json_request("/check_word", serde_json::json!({ "word": "Flask" })))
		.await
		.expect("Failed to call /check_word.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(response_json(response).await, serde_json::json!({ "is_relevant": true }));

	let response = app
		.oneshot(json_request("/check_word", serde_json::json!({ "word": "banana" })))
		.await
		.expect("Failed to call /check_word.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(response_json(response).await, serde_json::json!({ "is_relevant": false }));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn search_before_initialize_is_a_bad_request() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.oneshot(json_request("/search", serde_json::json!({ "query": "baking" })))
		.await
		.expect("Failed to call /search.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = response_json(response).await;

	assert!(
		json["error"]
			.as_str()
			.expect("Expected an error payload.")
			.contains("not initialized")
	);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn get_note_on_an_empty_store_is_not_found() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);
	let response = app
		.oneshot(json_request("/get_note", serde_json::json!({ "word": "flask" })))
		.await
		.expect("Failed to call /get_note.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MARGIN_PG_DSN to run."]
async fn note_listing_routes_are_aliases() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");
	let app = routes::router(state);

	for uri in ["/api/notes", "/get_notes"] {
		let response = app
			.clone()
			.oneshot(
				Request::builder()
					.uri(uri)
					.body(Body::empty())
					.expect("Failed to build request."),
			)
			.await
			.expect("Failed to call note listing.");

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(response_json(response).await, serde_json::json!({ "notes": [] }));
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
