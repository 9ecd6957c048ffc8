use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, error};
use rand::Rng;

use super::formality::FormalityAdjuster;
use super::style::{Humanized, StyleHumanizer};
use super::typo::{DEFAULT_ERROR_RATE, TypoInjector};
use super::vocabulary::VocabularyAdjuster;
use crate::error::HumanizerError;
use crate::lexicon::Lexicons;
use crate::options::Options;
use crate::request::ProcessRequest;

/// High-level entry point chaining the four stages.
///
/// # Responsibilities
/// - Hold the shared, read-only [`Lexicons`]
/// - Run vocabulary → typo (optional) → formality → style, in that order
/// - Turn any failure inside the stages into a single error, with no partial result
///
/// A `TextHumanizer` holds no per-request state and can be shared between
/// threads; every call brings its own random source.
#[derive(Debug, Clone)]
pub struct TextHumanizer {
	lexicons: Arc<Lexicons>,
	error_rate: f64,
}

impl TextHumanizer {
	/// Creates a humanizer over the given lexicons with the default error rate.
	pub fn new(lexicons: Arc<Lexicons>) -> Self {
		Self {
			lexicons,
			error_rate: DEFAULT_ERROR_RATE,
		}
	}

	/// Sets the per-word typo probability used when errors are requested.
	///
	/// # Errors
	/// Returns an error if the value is outside `[0.0, 1.0]`.
	pub fn with_error_rate(mut self, error_rate: f64) -> Result<Self, HumanizerError> {
		if !(0.0..=1.0).contains(&error_rate) {
			return Err(HumanizerError::invalid(
				"errorRate",
				format!("must be between 0.0 and 1.0, got {error_rate}"),
			));
		}
		self.error_rate = error_rate;
		Ok(self)
	}

	pub fn lexicons(&self) -> &Lexicons {
		&self.lexicons
	}

	pub fn error_rate(&self) -> f64 {
		self.error_rate
	}

	/// Validates a raw request and processes it.
	pub fn process_request<R: Rng + ?Sized>(
		&self,
		request: &ProcessRequest,
		rng: &mut R,
	) -> Result<Humanized, HumanizerError> {
		let (text, options) = request.validate()?;
		self.process(text, &options, rng)
	}

	/// Runs the whole pipeline on `text`.
	///
	/// # Errors
	/// - [`HumanizerError::InvalidOptionValue`] if `options` break their invariants
	/// - [`HumanizerError::TransformationFailure`] if a stage panics; the
	///   remaining stages are skipped and nothing is returned
	pub fn process<R: Rng + ?Sized>(
		&self,
		text: &str,
		options: &Options,
		rng: &mut R,
	) -> Result<Humanized, HumanizerError> {
		options.validate()?;

		panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(text, options, rng))).map_err(|payload| {
			let reason = panic_reason(payload.as_ref());
			error!("Pipeline aborted: {reason}");
			HumanizerError::TransformationFailure(reason)
		})
	}

	fn run_stages<R: Rng + ?Sized>(&self, text: &str, options: &Options, rng: &mut R) -> Humanized {
		let lexicons = self.lexicons.as_ref();

		let text = VocabularyAdjuster::new(&lexicons.synonyms).adjust(text, options.vocabulary_level, rng);
		debug!("After vocabulary: {text}");

		let text = if options.add_errors {
			let text = TypoInjector::new(&lexicons.errors).inject(&text, self.error_rate, rng);
			debug!("After typos: {text}");
			text
		} else {
			text
		};

		let text = FormalityAdjuster::new(&lexicons.fillers).adjust(&text, options.keep_professional, rng);
		debug!("After formality: {text}");

		StyleHumanizer::new(&lexicons.fillers).humanize(&text, options.style, options.creativity, rng)
	}
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_owned()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic in a pipeline stage".to_owned()
	}
}
