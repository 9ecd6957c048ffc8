use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::HumanizerError;
use crate::io::{build_output_path, is_fresh, read_file};

/// Synonym table compiled into the binary.
const BUILTIN_SYNONYMS: &str = include_str!("../../data/synonyms.dat");

/// Read-only lexical resource mapping a word to its synonym senses.
///
/// Each headword owns a list of senses; each sense is a list of synonyms.
/// Multi-word synonyms use underscores instead of spaces (`"look_up_to"`).
///
/// # Source format
/// One headword per line:
///
/// ```text
/// # comment
/// happy: glad, joyful, content | felicitous, well-chosen
/// ```
///
/// Senses are separated by `|`, synonyms inside a sense by `,`.
///
/// # Invariants
/// - Headwords are stored lowercase
/// - No sense is empty and no synonym is empty
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SynonymTable {
	entries: HashMap<String, Vec<Vec<String>>>,
}

impl SynonymTable {
	/// Returns the table bundled with the crate.
	pub fn builtin() -> Self {
		Self::parse(BUILTIN_SYNONYMS)
	}

	/// Parses a whole table source sequentially.
	///
	/// Malformed lines are skipped with a warning.
	pub fn parse(source: &str) -> Self {
		let mut table = Self::default();
		for line in source.lines() {
			table.add_line(line);
		}
		table
	}

	/// Loads a table from a `.dat` source file.
	///
	/// # Behavior
	/// - If a `.bin` file next to the source exists and is at least as recent,
	///   it is deserialized with `postcard` instead of parsing the source.
	/// - Otherwise the source is parsed in parallel (see [`Self::read_source_file`])
	///   and the cache is rewritten. A cache that cannot be written only logs a warning.
	///
	/// # Errors
	/// - I/O errors while reading the source
	/// - A corrupted binary cache
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, HumanizerError> {
		let filepath = filepath.as_ref();
		let binary_data_path = build_output_path(filepath, "bin")?;

		if is_fresh(&binary_data_path, filepath) {
			let bytes = std::fs::read(&binary_data_path)?;
			let table: Self = postcard::from_bytes(&bytes)?;
			info!("Loaded {} synonym entries from cache {}", table.len(), binary_data_path.display());
			return Ok(table);
		}

		let table = Self::read_source_file(filepath)?;
		info!("Parsed {} synonym entries from {}", table.len(), filepath.display());

		match postcard::to_stdvec(&table) {
			Ok(bytes) => {
				if let Err(e) = std::fs::write(&binary_data_path, bytes) {
					warn!("Could not write synonym cache {}: {e}", binary_data_path.display());
				}
			}
			Err(e) => warn!("Could not serialize synonym cache: {e}"),
		}

		Ok(table)
	}

	/// Reads a source file, splits its lines into chunks, parses partial tables
	/// in parallel and merges them.
	///
	/// # Behavior
	/// - Chunk count is `CPU cores * 8`.
	/// - Each worker thread parses its chunk into a partial table.
	/// - Partial tables are merged in chunk order, so senses of a headword
	///   spread over several lines keep their file order.
	///
	/// # Errors
	/// [`HumanizerError::Lexicon`] if the file has content but not a single valid entry.
	fn read_source_file<P: AsRef<Path>>(filename: P) -> Result<Self, HumanizerError> {
		let lines = read_file(&filename)?;
		if lines.is_empty() {
			return Ok(Self::default());
		}

		let chunks = num_cpus::get() * 8;
		let chunk_size = lines.len().div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		for (index, chunk) in lines.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial = SynonymTable::default();
				for line in chunk {
					partial.add_line(&line);
				}
				if tx.send((index, partial)).is_err() {
					warn!("Synonym table builder hung up before chunk {index} was merged");
				}
			});
		}
		drop(tx);

		let mut partials: Vec<(usize, SynonymTable)> = rx.iter().collect();
		partials.sort_unstable_by_key(|(index, _)| *index);

		let mut table = SynonymTable::default();
		for (_, partial) in &partials {
			table.merge(partial);
		}

		let has_content = lines.iter().any(|line| {
			let line = line.trim();
			!line.is_empty() && !line.starts_with('#')
		});
		if has_content && table.is_empty() {
			return Err(HumanizerError::Lexicon(format!(
				"no valid synonym entry in {}",
				filename.as_ref().display()
			)));
		}

		Ok(table)
	}

	/// Parses one source line and adds it to the table.
	///
	/// Returns `false` for skipped lines (blank, comment or malformed).
	pub fn add_line(&mut self, line: &str) -> bool {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			return false;
		}

		let Some((word, senses)) = line.split_once(':') else {
			warn!("Skipping synonym line without ':' separator: {line}");
			return false;
		};

		let senses: Vec<Vec<String>> = senses
			.split('|')
			.map(|sense| {
				sense
					.split(',')
					.map(str::trim)
					.filter(|s| !s.is_empty())
					.map(str::to_owned)
					.collect::<Vec<String>>()
			})
			.filter(|sense| !sense.is_empty())
			.collect();

		if word.trim().is_empty() || senses.is_empty() {
			warn!("Skipping synonym line without headword or synonyms: {line}");
			return false;
		}

		self.insert(word, senses);
		true
	}

	/// Adds senses to a headword, appending to any senses already present.
	pub fn insert(&mut self, word: &str, senses: Vec<Vec<String>>) {
		let senses: Vec<Vec<String>> = senses.into_iter().filter(|s| !s.is_empty()).collect();
		if senses.is_empty() {
			return;
		}
		self.entries
			.entry(word.trim().to_lowercase())
			.or_default()
			.extend(senses);
	}

	/// Returns the senses of `word` (case-insensitive).
	pub fn senses(&self, word: &str) -> Option<&[Vec<String>]> {
		self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
	}

	/// Flattens every synonym of every sense of `word` into one pool.
	///
	/// Returns an empty pool for unknown words.
	pub fn candidates(&self, word: &str) -> Vec<&str> {
		self.senses(word)
			.map(|senses| senses.iter().flatten().map(String::as_str).collect())
			.unwrap_or_default()
	}

	/// Merges another table into this one.
	///
	/// Senses of headwords present in both tables are concatenated.
	pub fn merge(&mut self, other: &Self) {
		for (word, senses) in &other.entries {
			self.entries.entry(word.clone()).or_default().extend(senses.iter().cloned());
		}
		debug!("Merged {} synonym entries", other.len());
	}

	/// Number of headwords.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
