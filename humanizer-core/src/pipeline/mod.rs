//! The four transformation stages and the pipeline that chains them.
//!
//! Stages are applied in a fixed order, each consuming the previous stage's
//! full output:
//!
//! 1. [`vocabulary::VocabularyAdjuster`]
//! 2. [`typo::TypoInjector`] (only when errors are requested)
//! 3. [`formality::FormalityAdjuster`]
//! 4. [`style::StyleHumanizer`]
//!
//! Every random decision goes through [`gate`] with a named probability, and
//! every stage takes the random source as a parameter, so a seeded generator
//! makes a run reproducible.

use rand::Rng;

/// Synonym substitution biased by reading-grade level.
pub mod vocabulary;

/// Random spelling corruption.
pub mod typo;

/// Sentence-level tone normalization or relaxation.
pub mod formality;

/// Casual/formal rewriting, filler and emphasis insertion, metrics.
pub mod style;

/// Stage orchestration and the per-request fault boundary.
pub mod humanizer;

/// Probability gate: returns `true` with probability `probability`.
///
/// A probability of `0.0` (or less) never passes and draws nothing from `rng`.
pub(crate) fn gate<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
	probability > 0.0 && rng.random::<f64>() < probability
}
