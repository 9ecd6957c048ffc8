/// Default substring corruptions, in lookup order.
///
/// Order matters: `you` is tested before `your`, so `your` is never reached
/// through the default table.
const DEFAULT_PATTERNS: &[(&str, &str)] = &[
	("th", "ht"),
	("ie", "ei"),
	("er", "re"),
	("you", "u"),
	("your", "ur"),
	("their", "there"),
];

/// Ordered mapping from substrings to their "typed wrong" form.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorPatternTable {
	patterns: Vec<(String, String)>,
}

impl Default for ErrorPatternTable {
	fn default() -> Self {
		Self::new(DEFAULT_PATTERNS.iter().map(|(p, r)| ((*p).to_owned(), (*r).to_owned())).collect())
	}
}

impl ErrorPatternTable {
	/// Creates a table from `(pattern, corruption)` pairs, kept in the given order.
	/// Empty patterns are dropped.
	pub fn new(patterns: Vec<(String, String)>) -> Self {
		let patterns = patterns.into_iter().filter(|(p, _)| !p.is_empty()).collect();
		Self { patterns }
	}

	/// Iterates over `(pattern, corruption)` pairs in lookup order.
	pub fn patterns(&self) -> impl Iterator<Item = (&str, &str)> {
		self.patterns.iter().map(|(p, r)| (p.as_str(), r.as_str()))
	}

	/// Applies the first matching pattern to the lowercased word.
	///
	/// Every occurrence of that pattern is replaced; later patterns are not
	/// tried. A word without any match is still returned lowercased.
	pub fn corrupt(&self, word: &str) -> String {
		let lower = word.to_lowercase();
		match self.patterns().find(|(pattern, _)| lower.contains(pattern)) {
			Some((pattern, corruption)) => lower.replace(pattern, corruption),
			None => lower,
		}
	}
}
