use serde::Serialize;

use super::tokenize::is_word_char;

/// Coarse part-of-speech label attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tag {
	Determiner,
	Pronoun,
	Preposition,
	Conjunction,
	Auxiliary,
	Adverb,
	Adjective,
	Verb,
	Noun,
	Number,
	Punctuation,
}

const DETERMINERS: &[&str] = &[
	"a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
	"their", "some", "any", "no", "every", "each", "many", "few", "several",
];

const PRONOUNS: &[&str] = &[
	"i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself", "yourself",
	"himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "what", "which",
	"someone", "something", "everyone", "everything", "nobody", "nothing",
];

const PREPOSITIONS: &[&str] = &[
	"in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
	"during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off", "over",
	"under", "around", "without", "within", "across", "behind", "beyond", "near", "toward",
];

const CONJUNCTIONS: &[&str] = &[
	"and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "if",
	"unless", "since", "whereas",
];

const AUXILIARIES: &[&str] = &[
	"am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
	"did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

/// Verbs after which a bare `-y` word describes the subject ("looks happy").
const LINKING_VERBS: &[&str] = &[
	"am", "is", "are", "was", "were", "be", "been", "seem", "seems", "seemed", "look", "looks",
	"looked", "feel", "feels", "felt", "become", "became", "get", "gets", "got",
];

const ADVERBS: &[&str] = &[
	"very", "really", "quite", "not", "never", "always", "often", "too", "also", "just", "still",
	"already", "almost", "soon", "here", "there", "now", "then", "again", "even", "rather",
	"absolutely", "literally", "seriously", "actually", "basically",
];

const ADJECTIVES: &[&str] = &[
	"good", "bad", "great", "big", "small", "new", "old", "young", "long", "short", "high", "low",
	"large", "little", "happy", "sad", "nice", "bright", "dark", "hot", "cold", "easy", "hard",
	"important", "different", "simple", "clear", "quick", "slow", "strong", "weak", "rich",
	"poor", "true", "false", "best", "worst", "better", "worse", "fine", "free", "full", "real",
	"huge", "tiny", "smart", "busy", "ready", "sure", "late", "early", "friendly", "lovely",
	"ugly", "likely", "silly", "deep", "wide", "clean", "fresh", "calm", "safe", "rare", "odd",
];

/// Suffixes that mark an adjective on an otherwise unknown word.
const ADJECTIVE_SUFFIXES: &[&str] = &[
	"ful", "ous", "ive", "able", "ible", "less", "ish", "ic", "al", "ent", "ant", "est",
];

/// Tags a single word without context.
///
/// Closed-class lists are checked first, then suffix heuristics. Unknown
/// words default to [`Tag::Noun`].
pub fn tag_word(word: &str) -> Tag {
	if !word.chars().any(is_word_char) {
		return Tag::Punctuation;
	}
	if word.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
		return Tag::Number;
	}

	let lower = word.to_lowercase();
	let lower = lower.as_str();

	if DETERMINERS.contains(&lower) {
		Tag::Determiner
	} else if PRONOUNS.contains(&lower) {
		Tag::Pronoun
	} else if PREPOSITIONS.contains(&lower) {
		Tag::Preposition
	} else if CONJUNCTIONS.contains(&lower) {
		Tag::Conjunction
	} else if AUXILIARIES.contains(&lower) {
		Tag::Auxiliary
	} else if ADJECTIVES.contains(&lower) {
		Tag::Adjective
	} else if ADVERBS.contains(&lower) || (lower.ends_with("ly") && lower.chars().count() > 4) {
		Tag::Adverb
	} else if lower.chars().count() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
		Tag::Adjective
	} else if lower.chars().count() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
		Tag::Verb
	} else {
		Tag::Noun
	}
}

/// Tags a sentence worth of tokens.
///
/// On top of [`tag_word`], a noun-tagged word ending in `y` that directly
/// follows a determiner or a linking verb is re-tagged as an adjective
/// ("a funny story", "it looks messy").
pub fn tag<S: AsRef<str>>(words: &[S]) -> Vec<Tag> {
	let mut tags: Vec<Tag> = words.iter().map(|w| tag_word(w.as_ref())).collect();

	for i in 1..words.len() {
		let word = words[i].as_ref().to_lowercase();
		let previous = words[i - 1].as_ref().to_lowercase();
		let after_cue = tags[i - 1] == Tag::Determiner || LINKING_VERBS.contains(&previous.as_str());
		if tags[i] == Tag::Noun && after_cue && word.chars().count() > 3 && word.ends_with('y') {
			tags[i] = Tag::Adjective;
		}
	}

	tags
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::tokenize::split_words;

	#[test]
	fn test_closed_classes() {
		assert_eq!(tag_word("The"), Tag::Determiner);
		assert_eq!(tag_word("they"), Tag::Pronoun);
		assert_eq!(tag_word("between"), Tag::Preposition);
		assert_eq!(tag_word("because"), Tag::Conjunction);
		assert_eq!(tag_word("would"), Tag::Auxiliary);
	}

	#[test]
	fn test_adjectives_from_list_and_suffix() {
		assert_eq!(tag_word("happy"), Tag::Adjective);
		assert_eq!(tag_word("wonderful"), Tag::Adjective);
		assert_eq!(tag_word("dangerous"), Tag::Adjective);
		assert_eq!(tag_word("creative"), Tag::Adjective);
	}

	#[test]
	fn test_adverbs_verbs_and_default_noun() {
		assert_eq!(tag_word("quickly"), Tag::Adverb);
		assert_eq!(tag_word("friendly"), Tag::Adjective);
		assert_eq!(tag_word("running"), Tag::Verb);
		assert_eq!(tag_word("house"), Tag::Noun);
	}

	#[test]
	fn test_numbers_and_punctuation() {
		assert_eq!(tag_word("42"), Tag::Number);
		assert_eq!(tag_word("3.14"), Tag::Number);
		assert_eq!(tag_word("!!!"), Tag::Punctuation);
		assert_eq!(tag_word(","), Tag::Punctuation);
	}

	#[test]
	fn test_decimals_and_abbreviations_from_the_tokenizer() {
		let words = split_words("Dr. Lee paid 3.14 euros.");
		let tags = tag(words.as_slice());
		assert_eq!(words[3], "3.14");
		assert_eq!(tags[3], Tag::Number);
		assert_eq!(tags[0], Tag::Noun);
		assert_eq!(tags[5], Tag::Punctuation);
	}

	#[test]
	fn test_context_promotes_y_words() {
		let words = ["a", "funny", "story", "and", "it", "looks", "messy"];
		let tags = tag(&words);
		assert_eq!(tags[1], Tag::Adjective);
		assert_eq!(tags[2], Tag::Noun);
		assert_eq!(tags[6], Tag::Adjective);
	}

	#[test]
	fn test_tag_empty() {
		let words: [&str; 0] = [];
		assert!(tag(&words).is_empty());
	}
}
