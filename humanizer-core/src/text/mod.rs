//! Text segmentation and tagging shared by every pipeline stage.
//!
//! - Word and sentence segmentation (`tokenize`)
//! - Rule-based part-of-speech tagging (`tagger`)
//! - The sentences-of-tokens representation used by the style stage (`document`)

/// Word/punctuation tokenization, sentence splitting and re-joining.
pub mod tokenize;

/// Coarse rule-based part-of-speech tagger.
pub mod tagger;

/// Sentences-of-tokens document model.
pub mod document;

/// Uppercases the first character of `word`, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Gives `replacement` a leading capital if `original` starts with one.
pub fn match_capitalization(original: &str, replacement: &str) -> String {
	if original.chars().next().is_some_and(char::is_uppercase) {
		capitalize_first(replacement)
	} else {
		replacement.to_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_capitalize_first() {
		assert_eq!(capitalize_first("hello World"), "Hello World");
		assert_eq!(capitalize_first("élan"), "Élan");
		assert_eq!(capitalize_first(""), "");
	}

	#[test]
	fn test_match_capitalization() {
		assert_eq!(match_capitalization("Gonna", "going to"), "Going to");
		assert_eq!(match_capitalization("gonna", "going to"), "going to");
	}
}
