use log::trace;
use rand::Rng;

use super::gate;
use crate::lexicon::typos::ErrorPatternTable;
use crate::text::tokenize::{is_word, join_tokens, split_words};

/// Per-word corruption probability used when none is configured.
pub const DEFAULT_ERROR_RATE: f64 = 0.1;

/// The three ways a word can be mistyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corruption {
	/// Transpose two adjacent characters (words longer than 3 characters).
	Swap,
	/// Type one character twice (words longer than 2 characters).
	Double,
	/// Apply the first matching entry of the error pattern table.
	Common,
}

impl Corruption {
	fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
		match rng.random_range(0..3) {
			0 => Corruption::Swap,
			1 => Corruption::Double,
			_ => Corruption::Common,
		}
	}
}

/// Injects human-like typing errors.
///
/// Each word token is selected with probability `error_rate`; a selected
/// word gets exactly one corruption attempt, chosen uniformly among
/// [`Corruption`] strategies. A strategy whose length requirement is not met
/// leaves the word unchanged. Punctuation tokens are never corrupted.
pub struct TypoInjector<'a> {
	errors: &'a ErrorPatternTable,
}

impl<'a> TypoInjector<'a> {
	pub fn new(errors: &'a ErrorPatternTable) -> Self {
		Self { errors }
	}

	/// Runs the stage over `text`.
	///
	/// With `error_rate == 0.0` the text only gets re-spaced.
	pub fn inject<R: Rng + ?Sized>(&self, text: &str, error_rate: f64, rng: &mut R) -> String {
		let words: Vec<String> = split_words(text)
			.into_iter()
			.map(|word| {
				if is_word(&word) && gate(rng, error_rate) {
					self.corrupt(word, rng)
				} else {
					word
				}
			})
			.collect();
		join_tokens(&words)
	}

	fn corrupt<R: Rng + ?Sized>(&self, word: String, rng: &mut R) -> String {
		let mut chars: Vec<char> = word.chars().collect();
		let corruption = Corruption::pick(rng);

		let corrupted = match corruption {
			Corruption::Swap if chars.len() > 3 => {
				let pos = rng.random_range(0..chars.len() - 1);
				chars.swap(pos, pos + 1);
				chars.into_iter().collect()
			}
			Corruption::Double if chars.len() > 2 => {
				let pos = rng.random_range(0..chars.len());
				let doubled = chars[pos];
				chars.insert(pos, doubled);
				chars.into_iter().collect()
			}
			Corruption::Common => self.errors.corrupt(&word),
			_ => word.clone(),
		};

		trace!("{corruption:?}: '{word}' -> '{corrupted}'");
		corrupted
	}
}
