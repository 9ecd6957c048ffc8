use std::sync::LazyLock;

use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::{Captures, Regex};

use super::gate;
use crate::lexicon::fillers::FillerLexicon;
use crate::text::match_capitalization;
use crate::text::tokenize::split_sentences;

/// Chance that a sentence gets a filler when relaxing formality.
pub const FILLER_PROBABILITY: f64 = 0.2;

static SLANG: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\b(gonna|wanna|gotta)\b").expect("valid slang regex"));

static REPEATED_PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([!?.]){2,}").expect("valid punctuation regex"));

fn expand_slang(word: &str) -> &'static str {
	match word.to_lowercase().as_str() {
		"gonna" => "going to",
		"wanna" => "want to",
		_ => "have to",
	}
}

/// Adjusts the register of each sentence.
///
/// - Professional: expands `gonna`/`wanna`/`gotta` and collapses repeated
///   terminal punctuation (`"!!!"` → `"!"`). Applying it twice gives the same
///   result as applying it once.
/// - Relaxed: prepends a random filler phrase to a sentence with probability
///   [`FILLER_PROBABILITY`].
///
/// Sentences are joined back with single spaces.
pub struct FormalityAdjuster<'a> {
	fillers: &'a FillerLexicon,
}

impl<'a> FormalityAdjuster<'a> {
	pub fn new(fillers: &'a FillerLexicon) -> Self {
		Self { fillers }
	}

	/// Runs the stage over `text`.
	pub fn adjust<R: Rng + ?Sized>(&self, text: &str, keep_professional: bool, rng: &mut R) -> String {
		split_sentences(text)
			.into_iter()
			.map(|sentence| {
				if keep_professional {
					Self::professionalize(&sentence)
				} else {
					self.relax(sentence, rng)
				}
			})
			.collect::<Vec<String>>()
			.join(" ")
	}

	fn professionalize(sentence: &str) -> String {
		let expanded = SLANG.replace_all(sentence, |caps: &Captures| {
			match_capitalization(&caps[1], expand_slang(&caps[1]))
		});
		REPEATED_PUNCTUATION.replace_all(&expanded, "$1").into_owned()
	}

	fn relax<R: Rng + ?Sized>(&self, sentence: String, rng: &mut R) -> String {
		if !gate(rng, FILLER_PROBABILITY) {
			return sentence;
		}
		match self.fillers.formality().choose(rng) {
			Some(filler) => {
				trace!("Prepending filler '{filler}'");
				format!("{filler}, {sentence}")
			}
			None => sentence,
		}
	}
}
