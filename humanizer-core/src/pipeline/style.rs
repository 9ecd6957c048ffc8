use std::sync::LazyLock;

use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::gate;
use crate::lexicon::fillers::FillerLexicon;
use crate::options::Style;
use crate::text::document::Document;
use crate::text::tagger::{Tag, tag};
use crate::text::tokenize::split_sentences;
use crate::text::{capitalize_first, match_capitalization};

/// Fillers and emphasis are only considered above this creativity.
pub const CREATIVE_THRESHOLD: f64 = 0.5;

/// Chance that an adjective receives an emphasis adverb.
pub const EMPHASIS_PROBABILITY: f64 = 0.3;

static AUXILIARY: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\b(\w+) (am|are|is|have|has|had|will|would)\b").expect("valid auxiliary regex")
});

static CANNOT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\b(c)annot\b").expect("valid cannot regex"));

static IRREGULAR_NEGATION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)\b(can|won|shan)['’]t\b").expect("valid negation regex")
});

static CONTRACTION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)(n['’]t|['’](?:ve|re|m|ll))\b").expect("valid contraction regex")
});

fn contract(auxiliary: &str) -> &'static str {
	match auxiliary {
		"am" => "'m",
		"are" => "'re",
		"is" | "has" => "'s",
		"have" => "'ve",
		"will" => "'ll",
		_ => "'d",
	}
}

fn expand_negation(stem: &str) -> &'static str {
	match stem.to_lowercase().as_str() {
		"can" => "cannot",
		"won" => "will not",
		_ => "shall not",
	}
}

fn expand_suffix(suffix: &str) -> &'static str {
	let lower = suffix.to_lowercase().replace('’', "'");
	match lower.as_str() {
		"n't" => " not",
		"'ve" => " have",
		"'re" => " are",
		"'m" => " am",
		_ => " will",
	}
}

/// Summary scores attached to a result.
///
/// Both are heuristics derived from `creativity` and a random draw; neither
/// measures the text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
	/// `min(1.0, 0.5 + creativity)`.
	pub naturalness_score: f64,
	/// Placeholder drawn uniformly from `[0.8, 1.0)`. Not a similarity measure.
	pub semantic_similarity: f64,
}

impl Metrics {
	pub fn estimate<R: Rng + ?Sized>(creativity: f64, rng: &mut R) -> Self {
		Self {
			naturalness_score: (0.5 + creativity).min(1.0),
			semantic_similarity: rng.random_range(0.8..1.0),
		}
	}
}

/// Output of the style stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Humanized {
	pub humanized_text: String,
	/// The text as it entered the style stage.
	pub original_text: String,
	pub metrics: Metrics,
}

/// Applies the requested writing style, then random fillers and emphasis.
///
/// # Steps
/// 1. Casual: contract `<word> am/are/is/...` and `cannot`; with probability
///    `creativity`, prepend a casual marker and lowercase everything (blank
///    text gets no marker).
///    Formal: expand contractions and capitalize every sentence.
/// 2. Parse the rewritten text into a [`Document`].
/// 3. Above [`CREATIVE_THRESHOLD`]: with probability `creativity` prepend a
///    filler to one random sentence (lowercasing it); independently, with
///    probability `creativity`, give each adjective an emphasis adverb with
///    probability [`EMPHASIS_PROBABILITY`].
/// 4. Render the document.
///
/// All edits go through the same [`Document`], so none of them is lost
/// between steps.
pub struct StyleHumanizer<'a> {
	fillers: &'a FillerLexicon,
}

impl<'a> StyleHumanizer<'a> {
	pub fn new(fillers: &'a FillerLexicon) -> Self {
		Self { fillers }
	}

	/// Runs the stage over `text`.
	pub fn humanize<R: Rng + ?Sized>(&self, text: &str, style: Style, creativity: f64, rng: &mut R) -> Humanized {
		let rewritten = match style {
			Style::Casual => self.casualize(text, creativity, rng),
			Style::Formal => Self::formalize(text),
		};

		let mut document = Document::parse(&rewritten);
		if creativity > CREATIVE_THRESHOLD {
			if gate(rng, creativity) {
				self.insert_filler(&mut document, rng);
			}
			if gate(rng, creativity) {
				self.insert_emphasis(&mut document, rng);
			}
		}

		Humanized {
			humanized_text: document.render(),
			original_text: text.to_owned(),
			metrics: Metrics::estimate(creativity, rng),
		}
	}

	fn casualize<R: Rng + ?Sized>(&self, text: &str, creativity: f64, rng: &mut R) -> String {
		let contracted = AUXILIARY.replace_all(text, |caps: &Captures| {
			format!("{}{}", &caps[1], contract(&caps[2]))
		});
		let contracted = CANNOT.replace_all(&contracted, "${1}an't").into_owned();

		if !contracted.trim().is_empty() && gate(rng, creativity) {
			if let Some(marker) = self.fillers.casual_markers().choose(rng) {
				debug!("Prepending casual marker '{marker}'");
				return format!("{marker} {}", contracted.to_lowercase());
			}
		}
		contracted
	}

	fn formalize(text: &str) -> String {
		let expanded = IRREGULAR_NEGATION.replace_all(text, |caps: &Captures| {
			match_capitalization(&caps[1], expand_negation(&caps[1]))
		});
		let expanded = CONTRACTION_SUFFIX.replace_all(&expanded, |caps: &Captures| {
			expand_suffix(&caps[1])
		});

		split_sentences(&expanded)
			.iter()
			.map(|sentence| capitalize_first(sentence))
			.collect::<Vec<String>>()
			.join(" ")
	}

	fn insert_filler<R: Rng + ?Sized>(&self, document: &mut Document, rng: &mut R) {
		if document.is_empty() {
			return;
		}
		let index = rng.random_range(0..document.len());
		if let Some(filler) = self.fillers.style_fillers().choose(rng) {
			trace!("Prepending '{filler}' to sentence {index}");
			document.lowercase_sentence(index);
			document.prepend(index, &format!("{filler},"));
		}
	}

	fn insert_emphasis<R: Rng + ?Sized>(&self, document: &mut Document, rng: &mut R) {
		for sentence in document.sentences_mut() {
			let tags = tag(sentence.as_slice());
			let words = std::mem::take(sentence);
			for (word, word_tag) in words.into_iter().zip(tags) {
				if word_tag == Tag::Adjective && gate(rng, EMPHASIS_PROBABILITY) {
					if let Some(adverb) = self.fillers.emphasis().choose(rng) {
						trace!("Emphasizing '{word}' with '{adverb}'");
						sentence.push(adverb.clone());
					}
				}
				sentence.push(word);
			}
		}
	}
}
