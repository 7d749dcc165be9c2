use margin_index::ScoredCandidate;

use crate::{MarginService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RelatedNote {
	pub title: String,
	pub content: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub query: String,
	pub related_notes: Vec<RelatedNote>,
}

impl MarginService {
	pub async fn search(&self, req: SearchRequest) -> ServiceResult<SearchResponse> {
		let Some(query) = req.query else {
			return Err(ServiceError::InvalidRequest { message: "query is required.".to_string() });
		};
		let query = query.trim().to_string();

		if query.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "query must not be empty.".to_string(),
			});
		}

		let Some(index) = self.current_index() else {
			return Err(ServiceError::NotInitialized);
		};
		let embeddings = self
			.providers
			.embedding
			.embed(&self.cfg.providers.embedding, std::slice::from_ref(&query))
			.await?;
		let Some(vector) = embeddings.into_iter().next() else {
			return Err(ServiceError::Provider {
				message: "Embedding provider returned no vectors.".to_string(),
			});
		};
		let candidates = index.query(&vector, self.cfg.retrieval.top_k as usize)?;
		let survivors = retain_above_threshold(candidates, self.cfg.retrieval.similarity_threshold);

		tracing::debug!(query = query.as_str(), results = survivors.len(), "Search completed.");

		let related_notes = survivors
			.into_iter()
			.map(|candidate| RelatedNote { title: candidate.title, content: candidate.content })
			.collect();

		Ok(SearchResponse { query, related_notes })
	}
}

/// Drops candidates below `threshold`, keeping the index's descending-score
/// order. Filtering never adds candidates back.
pub(crate) fn retain_above_threshold(
	candidates: Vec<ScoredCandidate>,
	threshold: f32,
) -> Vec<ScoredCandidate> {
	candidates.into_iter().filter(|candidate| candidate.score >= threshold).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn candidate(title: &str, score: f32) -> ScoredCandidate {
		ScoredCandidate {
			note_id: uuid::Uuid::new_v4(),
			title: title.to_string(),
			content: format!("{title} content"),
			score,
		}
	}

	#[test]
	fn drops_candidates_below_threshold() {
		let candidates = vec![
			candidate("Banana Bread", 0.91),
			candidate("Apple Pie", 0.74),
			candidate("Mathematics", 0.42),
		];
		let survivors = retain_above_threshold(candidates, 0.70);
		let titles: Vec<&str> = survivors.iter().map(|c| c.title.as_str()).collect();

		assert_eq!(titles, vec!["Banana Bread", "Apple Pie"]);
	}

	#[test]
	fn threshold_is_inclusive() {
		let survivors = retain_above_threshold(vec![candidate("Brownies", 0.70)], 0.70);

		assert_eq!(survivors.len(), 1);
	}

	#[test]
	fn preserves_descending_order_of_survivors() {
		let candidates = vec![
			candidate("a", 0.95),
			candidate("b", 0.60),
			candidate("c", 0.90),
			candidate("d", 0.85),
		];
		let survivors = retain_above_threshold(candidates, 0.80);
		let titles: Vec<&str> = survivors.iter().map(|c| c.title.as_str()).collect();

		assert_eq!(titles, vec!["a", "c", "d"]);
	}

	#[test]
	fn empty_candidate_pool_stays_empty() {
		assert!(retain_above_threshold(Vec::new(), 0.70).is_empty());
	}
}
