use thiserror::Error;

/// Every failure the humanizer can report.
///
/// The first four variants are request-level failures surfaced to callers of
/// [`TextHumanizer`](crate::pipeline::humanizer::TextHumanizer). The remaining
/// ones can only happen while lexicons are loaded at start-up.
#[derive(Error, Debug)]
pub enum HumanizerError {
	/// A required request field (text or option) is absent or `null`.
	#[error("missing required field: {0}")]
	MissingField(String),

	/// A field is present but cannot be coerced into its expected type or range.
	#[error("invalid value for {field}: {reason}")]
	InvalidOptionValue { field: String, reason: String },

	/// The request body is not a JSON object.
	#[error("malformed request: {0}")]
	MalformedRequest(String),

	/// A stage failed unexpectedly. No partial result is produced.
	#[error("transformation failed: {0}")]
	TransformationFailure(String),

	/// A lexicon source could not be interpreted.
	#[error("lexicon error: {0}")]
	Lexicon(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Postcard(#[from] postcard::Error),
}

impl HumanizerError {
	/// Builds an [`HumanizerError::InvalidOptionValue`].
	pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
		Self::InvalidOptionValue {
			field: field.to_owned(),
			reason: reason.into(),
		}
	}

	/// Returns `true` when the caller is at fault (bad or incomplete request).
	///
	/// HTTP layers map this to a 4xx status, everything else to a 5xx status.
	pub fn is_client_error(&self) -> bool {
		matches!(
			self,
			Self::MissingField(_) | Self::InvalidOptionValue { .. } | Self::MalformedRequest(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_errors_are_classified() {
		assert!(HumanizerError::MissingField("options.style".into()).is_client_error());
		assert!(HumanizerError::invalid("creativity", "out of range").is_client_error());
		assert!(HumanizerError::MalformedRequest("not json".into()).is_client_error());
		assert!(!HumanizerError::TransformationFailure("boom".into()).is_client_error());
	}

	#[test]
	fn test_messages_name_the_field() {
		let err = HumanizerError::MissingField("options.style".into());
		assert_eq!(err.to_string(), "missing required field: options.style");

		let err = HumanizerError::invalid("creativity", "must be between 0.0 and 1.0");
		assert_eq!(err.to_string(), "invalid value for creativity: must be between 0.0 and 1.0");
	}
}
