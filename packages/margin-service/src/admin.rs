use std::fs;

use serde::Deserialize;

use margin_storage::notes::{self, UpsertNote, UpsertOutcome};

use crate::{MarginService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SeedReport {
	pub inserted: u32,
	pub updated: u32,
	pub keywords_extracted: u32,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
	notes: Vec<SeedNote>,
}

#[derive(Debug, Deserialize)]
struct SeedNote {
	title: String,
	content: String,
	#[serde(default)]
	keywords: Vec<String>,
}

impl MarginService {
	/// Loads the configured seed corpus into the store, upserting by title.
	/// Notes without keywords are backfilled through the keyword extractor
	/// when one is configured; extraction failure degrades to empty keywords.
	pub async fn seed(&self) -> ServiceResult<SeedReport> {
		let Some(path) = self.cfg.corpus.seed_path.as_ref() else {
			return Err(ServiceError::InvalidRequest {
				message: "corpus.seed_path is not configured.".to_string(),
			});
		};
		let raw = fs::read_to_string(path).map_err(|err| ServiceError::Storage {
			message: format!("Failed to read seed corpus at {path:?}: {err}."),
		})?;
		let seed: SeedFile = toml::from_str(&raw).map_err(|err| ServiceError::InvalidRequest {
			message: format!("Failed to parse seed corpus: {err}."),
		})?;
		let mut report = SeedReport { inserted: 0, updated: 0, keywords_extracted: 0 };

		for note in seed.notes {
			let mut keywords = note.keywords;

			if keywords.is_empty()
				&& let Some(extractor) = self.cfg.providers.keyword_extractor.as_ref()
			{
				match self.providers.keywords.extract(extractor, &note.title, &note.content).await
				{
					Ok(extracted) => {
						keywords = extracted;
						report.keywords_extracted += 1;
					},
					Err(err) => {
						tracing::warn!(
							title = note.title.as_str(),
							error = %err,
							"Keyword extraction failed; seeding without keywords."
						);
					},
				}
			}

			let outcome = notes::upsert(&self.db.pool, UpsertNote {
				title: &note.title,
				content: &note.content,
				keywords: &keywords,
			})
			.await?;

			match outcome {
				UpsertOutcome::Inserted => report.inserted += 1,
				UpsertOutcome::Updated => report.updated += 1,
			}
		}

		tracing::info!(
			inserted = report.inserted,
			updated = report.updated,
			"Seed corpus applied."
		);

		Ok(report)
	}
}
