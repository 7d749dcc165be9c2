/// Case-insensitive membership gate against a configured allow-list. The
/// allow-list is expected to be lower-cased already (config normalization
/// does this).
pub fn is_relevant(word: &str, allowed: &[String]) -> bool {
	let lowered = word.trim().to_lowercase();

	if lowered.is_empty() {
		return false;
	}

	allowed.iter().any(|entry| entry == &lowered)
}
