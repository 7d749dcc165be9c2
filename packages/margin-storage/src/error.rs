#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Document store is unavailable.")]
	Unavailable { source: sqlx::Error },
}
