use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HumanizerError;
use crate::options::{Options, Style};
use crate::pipeline::style::{Humanized, Metrics};

/// Raw request body, before validation.
///
/// Fields are kept as loose JSON values so that absent fields and badly
/// typed fields produce distinct errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessRequest {
	#[serde(default)]
	pub text: Option<Value>,
	#[serde(default)]
	pub options: Option<Value>,
}

impl ProcessRequest {
	/// Parses a JSON request body.
	///
	/// # Errors
	/// [`HumanizerError::MalformedRequest`] if the body is not a JSON object.
	pub fn from_json(body: &str) -> Result<Self, HumanizerError> {
		serde_json::from_str(body).map_err(|e| HumanizerError::MalformedRequest(e.to_string()))
	}

	/// Extracts the text and validated options.
	///
	/// Fields are checked in order: `text`, `options`, `vocabularyLevel`,
	/// `addErrors`, `keepProfessional`, `style`, `creativity`. The first
	/// problem found is reported.
	///
	/// # Coercion
	/// - `vocabularyLevel`: non-negative number (fractions truncated) or integer string
	/// - `creativity`: number or numeric string, within `[0.0, 1.0]`
	/// - `style`: `"casual"` or `"formal"`, case-insensitive
	pub fn validate(&self) -> Result<(&str, Options), HumanizerError> {
		let text = match present(self.text.as_ref()) {
			None => return Err(HumanizerError::MissingField("text".to_owned())),
			Some(Value::String(text)) => text.as_str(),
			Some(_) => return Err(HumanizerError::invalid("text", "expected a string")),
		};

		let options = match present(self.options.as_ref()) {
			None => return Err(HumanizerError::MissingField("options".to_owned())),
			Some(Value::Object(options)) => options,
			Some(_) => return Err(HumanizerError::invalid("options", "expected an object")),
		};
		let field = |name: &str| present(options.get(name));

		let options = Options {
			vocabulary_level: grade_level(field("vocabularyLevel"))?,
			add_errors: boolean("options.addErrors", field("addErrors"))?,
			keep_professional: boolean("options.keepProfessional", field("keepProfessional"))?,
			style: style(field("style"))?,
			creativity: creativity(field("creativity"))?,
		};
		options.validate()?;

		Ok((text, options))
	}
}

/// Treats JSON `null` like an absent field.
fn present(value: Option<&Value>) -> Option<&Value> {
	value.filter(|v| !v.is_null())
}

fn grade_level(value: Option<&Value>) -> Result<u32, HumanizerError> {
	const FIELD: &str = "options.vocabularyLevel";
	let level = match value {
		None => return Err(HumanizerError::MissingField(FIELD.to_owned())),
		Some(Value::Number(n)) => n
			.as_f64()
			.filter(|n| n.is_finite())
			.ok_or_else(|| HumanizerError::invalid(FIELD, "expected a number"))?
			.trunc(),
		Some(Value::String(s)) => s
			.trim()
			.parse::<i64>()
			.map_err(|_| HumanizerError::invalid(FIELD, format!("'{s}' is not an integer")))? as f64,
		Some(_) => return Err(HumanizerError::invalid(FIELD, "expected a number or a string")),
	};

	if level < 0.0 || level > f64::from(u32::MAX) {
		return Err(HumanizerError::invalid(FIELD, format!("{level} is out of range")));
	}
	Ok(level as u32)
}

fn boolean(field: &str, value: Option<&Value>) -> Result<bool, HumanizerError> {
	match value {
		None => Err(HumanizerError::MissingField(field.to_owned())),
		Some(Value::Bool(b)) => Ok(*b),
		Some(_) => Err(HumanizerError::invalid(field, "expected a boolean")),
	}
}

fn style(value: Option<&Value>) -> Result<Style, HumanizerError> {
	match value {
		None => Err(HumanizerError::MissingField("options.style".to_owned())),
		Some(Value::String(s)) => s.parse(),
		Some(_) => Err(HumanizerError::invalid("options.style", "expected a string")),
	}
}

fn creativity(value: Option<&Value>) -> Result<f64, HumanizerError> {
	const FIELD: &str = "options.creativity";
	match value {
		None => Err(HumanizerError::MissingField(FIELD.to_owned())),
		Some(Value::Number(n)) => n.as_f64().ok_or_else(|| HumanizerError::invalid(FIELD, "expected a number")),
		Some(Value::String(s)) => s
			.trim()
			.parse::<f64>()
			.map_err(|_| HumanizerError::invalid(FIELD, format!("'{s}' is not a number"))),
		Some(_) => Err(HumanizerError::invalid(FIELD, "expected a number or a string")),
	}
}

/// Response body of the processing endpoint.
///
/// Success: `{ success: true, modifiedText, metrics }`.
/// Failure: `{ success: false, error }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub modified_text: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metrics: Option<Metrics>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl ProcessResponse {
	pub fn success(humanized: Humanized) -> Self {
		Self {
			success: true,
			modified_text: Some(humanized.humanized_text),
			metrics: Some(humanized.metrics),
			error: None,
		}
	}

	pub fn failure(error: &HumanizerError) -> Self {
		Self {
			success: false,
			modified_text: None,
			metrics: None,
			error: Some(error.to_string()),
		}
	}
}
