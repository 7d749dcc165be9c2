use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

const SYSTEM_PROMPT: &str = "Extract the most salient keywords from the note. Respond with JSON \
                             only, shaped as {\"keywords\": [\"...\"]}.";

/// Asks the configured chat-completions provider for note keywords. The
/// provider is given three attempts to answer with parseable JSON.
pub async fn extract(
	cfg: &margin_config::LlmProviderConfig,
	title: &str,
	content: &str,
) -> Result<Vec<String>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let messages = serde_json::json!([
		{ "role": "system", "content": SYSTEM_PROMPT },
		{ "role": "user", "content": format!("{title}\n{content}") },
	]);

	for _ in 0..3 {
		let body = serde_json::json!({
			"model": cfg.model,
			"temperature": cfg.temperature,
			"messages": messages,
		});
		let res = client
			.post(&url)
			.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
			.json(&body)
			.send()
			.await?;
		let json: Value = res.error_for_status()?.json().await?;
		if let Ok(keywords) = parse_keywords_json(json) {
			return Ok(keywords);
		}
	}

	Err(eyre::eyre!("Keyword extractor response is not valid JSON."))
}

fn parse_keywords_json(json: Value) -> Result<Vec<String>> {
	let payload = if let Some(content) = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
	{
		serde_json::from_str(content)
			.map_err(|_| eyre::eyre!("Keyword extractor content is not valid JSON."))?
	} else {
		json
	};
	let keywords = payload
		.get("keywords")
		.and_then(|v| v.as_array())
		.ok_or_else(|| eyre::eyre!("Keyword extractor response is missing keywords array."))?;
	let mut out = Vec::with_capacity(keywords.len());

	for keyword in keywords {
		let Some(word) = keyword.as_str() else {
			return Err(eyre::eyre!("Keyword entries must be strings."));
		};
		let trimmed = word.trim();

		if !trimmed.is_empty() {
			out.push(trimmed.to_string());
		}
	}

	Ok(out)
}
