//! Static lexical resources consulted by the pipeline.
//!
//! All tables are built once at start-up and only read afterwards, so a
//! single [`Lexicons`] value can be shared between threads behind an `Arc`.

use std::path::Path;

use log::info;

use crate::error::HumanizerError;

/// Word → synonym senses table, loadable from `.dat` files.
pub mod synonyms;

/// Ordered substring corruptions used by the typo stage.
pub mod typos;

/// Filler, marker and emphasis word lists.
pub mod fillers;

use fillers::FillerLexicon;
use synonyms::SynonymTable;
use typos::ErrorPatternTable;

/// Every table the pipeline needs, bundled together.
#[derive(Clone, Debug, Default)]
pub struct Lexicons {
	pub synonyms: SynonymTable,
	pub errors: ErrorPatternTable,
	pub fillers: FillerLexicon,
}

impl Lexicons {
	/// Built-in synonyms with the default error patterns and fillers.
	pub fn builtin() -> Self {
		Self::with_synonyms(SynonymTable::builtin())
	}

	/// Default error patterns and fillers around a custom synonym table.
	pub fn with_synonyms(synonyms: SynonymTable) -> Self {
		Self {
			synonyms,
			errors: ErrorPatternTable::default(),
			fillers: FillerLexicon::default(),
		}
	}

	/// Loads the synonym table from `synonyms` if given, otherwise uses the built-in one.
	///
	/// # Errors
	/// Propagates [`SynonymTable::load`] failures.
	pub fn load<P: AsRef<Path>>(synonyms: Option<P>) -> Result<Self, HumanizerError> {
		let table = match synonyms {
			Some(path) => SynonymTable::load(path)?,
			None => SynonymTable::builtin(),
		};
		let lexicons = Self::with_synonyms(table);
		info!(
			"Lexicons ready: {} synonym entries, {} error patterns",
			lexicons.synonyms.len(),
			lexicons.errors.patterns().count()
		);
		Ok(lexicons)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_load_without_path_uses_builtin() {
		let lexicons = Lexicons::load(None::<&str>).unwrap();
		assert_eq!(lexicons.synonyms, SynonymTable::builtin());
		assert_eq!(lexicons.errors.patterns().count(), 6);
		assert_eq!(lexicons.fillers.emphasis().len(), 4);
	}

	#[test]
	fn test_load_with_path() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("small.dat");
		std::fs::write(&source, "quiet: silent\n").unwrap();

		let lexicons = Lexicons::load(Some(&source)).unwrap();
		assert_eq!(lexicons.synonyms.len(), 1);
	}
}
