use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::gate;
use crate::lexicon::synonyms::SynonymTable;
use crate::text::match_capitalization;
use crate::text::tokenize::{join_tokens, split_words};

/// Chance that an eligible word is looked up in the synonym table.
pub const SUBSTITUTION_PROBABILITY: f64 = 0.2;

/// Words of this many characters or fewer are never substituted.
pub const MIN_WORD_LEN: usize = 4;

/// Grade levels below this one reject long synonyms.
pub const LOW_GRADE_LEVEL: u32 = 10;

/// Longest synonym accepted for low grade levels.
pub const MAX_LOW_GRADE_SYNONYM_LEN: usize = 8;

/// Replaces words with synonyms, preferring shorter vocabulary for lower grades.
///
/// # Behavior
/// For each word longer than [`MIN_WORD_LEN`] characters, with probability
/// [`SUBSTITUTION_PROBABILITY`]:
/// - every synonym of every sense is pooled and one is picked uniformly,
/// - underscores become spaces,
/// - below grade [`LOW_GRADE_LEVEL`], a pick longer than
///   [`MAX_LOW_GRADE_SYNONYM_LEN`] is discarded and the original word kept
///   (there is no second attempt).
///
/// The output is the token list joined with single spaces.
pub struct VocabularyAdjuster<'a> {
	synonyms: &'a SynonymTable,
}

impl<'a> VocabularyAdjuster<'a> {
	pub fn new(synonyms: &'a SynonymTable) -> Self {
		Self { synonyms }
	}

	/// Runs the stage over `text` for the given reading-grade level.
	pub fn adjust<R: Rng + ?Sized>(&self, text: &str, grade_level: u32, rng: &mut R) -> String {
		let words: Vec<String> = split_words(text)
			.into_iter()
			.map(|word| self.adjust_word(word, grade_level, rng))
			.collect();
		join_tokens(&words)
	}

	fn adjust_word<R: Rng + ?Sized>(&self, word: String, grade_level: u32, rng: &mut R) -> String {
		if word.chars().count() <= MIN_WORD_LEN || !gate(rng, SUBSTITUTION_PROBABILITY) {
			return word;
		}

		let pool = self.synonyms.candidates(&word);
		let Some(choice) = pool.choose(rng) else {
			return word;
		};

		let synonym = choice.replace('_', " ");
		if grade_level < LOW_GRADE_LEVEL && synonym.chars().count() > MAX_LOW_GRADE_SYNONYM_LEN {
			trace!("Rejected '{synonym}' for '{word}' at grade {grade_level}");
			return word;
		}

		trace!("Substituted '{word}' with '{synonym}'");
		match_capitalization(&word, &synonym)
	}
}
