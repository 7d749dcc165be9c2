use margin_domain::{filter, relevance};

#[test]
fn recipe_text_filters_to_distinct_content_words() {
	let text = "Ingredients: Ripe bananas, flour, sugar, butter, eggs, baking soda, salt, vanilla \
	            extract.\nSteps: Mash bananas, mix in wet ingredients, combine with dry \
	            ingredients. Bake at 350 for 60-70 minutes.";
	let tokens = filter::filter_tokens(text);

	// First-seen casing survives, later duplicates do not.
	assert!(tokens.contains(&"Ingredients".to_string()));
	assert!(!tokens.contains(&"ingredients".to_string()));
	// Pure numbers are dropped.
	assert!(!tokens.contains(&"350".to_string()));
	assert!(!tokens.contains(&"60".to_string()));
	// Stopwords are dropped.
	assert!(!tokens.contains(&"at".to_string()));
	assert!(!tokens.contains(&"with".to_string()));

	let lowered: Vec<String> = tokens.iter().map(|token| token.to_lowercase()).collect();
	let mut deduped = lowered.clone();

	deduped.sort_unstable();
	deduped.dedup();

	assert_eq!(deduped.len(), lowered.len());
}

#[test]
fn filter_output_is_a_fixed_point() {
	let inputs = [
		"The the quick Quick fox jumps 123",
		"Origin: Germany\nHistory: Developed in the late 19th century.",
		"Key Areas: Algebra, Geometry, Calculus, Statistics",
	];

	for input in inputs {
		let once = filter::filter_tokens(input);
		let again = filter::filter_tokens(&once.join(" "));

		assert_eq!(once, again, "Filtering diverged for input: {input}");
	}
}

#[test]
fn relevance_gate_matches_original_allow_list_expectations() {
	let allowed: Vec<String> = ["flask", "button", "text", "database", "chatgpt", "logic",
		"swift", "python", "backend"]
		.into_iter()
		.map(str::to_string)
		.collect();

	assert!(relevance::is_relevant("Flask", &allowed));
	assert!(!relevance::is_relevant("banana", &allowed));
}
