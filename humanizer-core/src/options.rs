use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HumanizerError;

/// Target writing style of the last stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
	Casual,
	Formal,
}

impl FromStr for Style {
	type Err = HumanizerError;

	/// Case-insensitive, surrounding whitespace ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"casual" => Ok(Style::Casual),
			"formal" => Ok(Style::Formal),
			other => Err(HumanizerError::invalid(
				"options.style",
				format!("expected 'casual' or 'formal', got '{other}'"),
			)),
		}
	}
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Style::Casual => write!(f, "casual"),
			Style::Formal => write!(f, "formal"),
		}
	}
}

/// Validated options for one pipeline run.
///
/// # Invariants (checked by [`Options::validate`])
/// - `creativity` is finite and within `[0.0, 1.0]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
	/// Reading-grade level; below 10, long synonyms are rejected.
	pub vocabulary_level: u32,
	/// Enables the typo stage.
	pub add_errors: bool,
	/// Normalizes tone when `true`, relaxes it when `false`.
	pub keep_professional: bool,
	pub style: Style,
	/// Probability and intensity of stylistic insertions.
	pub creativity: f64,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			vocabulary_level: 12,
			add_errors: false,
			keep_professional: true,
			style: Style::Casual,
			creativity: 0.7,
		}
	}
}

impl Options {
	/// Checks the invariants that the type system cannot express.
	///
	/// # Errors
	/// [`HumanizerError::InvalidOptionValue`] if `creativity` is out of range.
	pub fn validate(&self) -> Result<(), HumanizerError> {
		if !self.creativity.is_finite() || !(0.0..=1.0).contains(&self.creativity) {
			return Err(HumanizerError::invalid(
				"options.creativity",
				format!("must be between 0.0 and 1.0, got {}", self.creativity),
			));
		}
		Ok(())
	}
}
