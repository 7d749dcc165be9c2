use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// English stopwords, apostrophe-free subset of the NLTK list. Must stay
/// sorted; membership uses binary search.
const STOP_WORDS: &[&str] = &[
	"a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
	"are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
	"both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
	"don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
	"hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
	"his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
	"ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
	"now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
	"out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
	"such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
	"these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
	"very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
	"who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
	"yourself", "yourselves",
];

/// Splits `text` on unicode word boundaries and keeps tokens that are
/// alphanumeric, not purely numeric, and not stopwords. Case-insensitive
/// de-duplication: the first-seen casing wins and input order is preserved,
/// so the output is stable and re-filtering it is a no-op.
pub fn filter_tokens(text: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut tokens = Vec::new();

	for word in text.unicode_words() {
		if !is_candidate(word) {
			continue;
		}

		let lowered = word.to_lowercase();

		if is_stop_word(&lowered) {
			continue;
		}
		if !seen.insert(lowered) {
			continue;
		}

		tokens.push(word.to_string());
	}

	tokens
}

pub fn is_stop_word(lowered: &str) -> bool {
	STOP_WORDS.binary_search(&lowered).is_ok()
}

fn is_candidate(word: &str) -> bool {
	!word.is_empty()
		&& word.chars().all(char::is_alphanumeric)
		&& !word.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stop_word_list_is_sorted() {
		let mut sorted = STOP_WORDS.to_vec();

		sorted.sort_unstable();

		assert_eq!(sorted, STOP_WORDS);
	}

	#[test]
	fn drops_stopwords_numbers_and_duplicates() {
		let tokens = filter_tokens("The the quick Quick fox jumps 123");

		assert_eq!(tokens, vec!["quick", "fox", "jumps"]);
	}

	#[test]
	fn keeps_first_seen_casing() {
		let tokens = filter_tokens("Banana bread banana BREAD");

		assert_eq!(tokens, vec!["Banana", "bread"]);
	}

	#[test]
	fn drops_tokens_with_punctuation() {
		let tokens = filter_tokens("don't panic: keep calm");

		assert_eq!(tokens, vec!["panic", "keep", "calm"]);
	}

	#[test]
	fn keeps_mixed_alphanumeric_tokens() {
		let tokens = filter_tokens("room 101 has 2 mk2 units");

		assert_eq!(tokens, vec!["room", "mk2", "units"]);
	}

	#[test]
	fn empty_input_yields_no_tokens() {
		assert!(filter_tokens("").is_empty());
		assert!(filter_tokens("  \t\n").is_empty());
	}

	#[test]
	fn filtering_is_idempotent() {
		let once = filter_tokens("The the quick Quick fox jumps 123 over the Lazy dog");
		let again = filter_tokens(&once.join(" "));

		assert_eq!(once, again);
	}

	#[test]
	fn never_emits_case_insensitive_duplicates() {
		let tokens = filter_tokens("Rust RUST rust rUsT tokio Tokio");
		let mut lowered: Vec<String> = tokens.iter().map(|token| token.to_lowercase()).collect();

		lowered.sort_unstable();
		lowered.dedup();

		assert_eq!(lowered.len(), tokens.len());
	}
}
