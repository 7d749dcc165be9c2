pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Cannot build an index over an empty corpus.")]
	EmptyCorpus,
	#[error("Expected {documents} vectors for {documents} documents, got {vectors}.")]
	CountMismatch { documents: usize, vectors: usize },
	#[error("Expected a vector of dimension {expected}, got {actual}.")]
	DimensionMismatch { expected: usize, actual: usize },
}
