use super::tokenize::{join_tokens, split_sentences, split_words};

/// Text held as sentences of tokens.
///
/// This is the single representation the style stage edits: sentence-level
/// edits (fillers) and word-level edits (emphasis) both land here, and
/// [`Document::render`] is the only way back to a string.
///
/// # Invariants
/// - No sentence is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
	sentences: Vec<Vec<String>>,
}

impl Document {
	/// Segments `text` into sentences, then each sentence into tokens.
	pub fn parse(text: &str) -> Self {
		let sentences = split_sentences(text)
			.iter()
			.map(|sentence| split_words(sentence))
			.filter(|tokens| !tokens.is_empty())
			.collect();
		Self { sentences }
	}

	pub fn len(&self) -> usize {
		self.sentences.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sentences.is_empty()
	}

	/// Mutable access to the token list of every sentence.
	pub fn sentences_mut(&mut self) -> &mut [Vec<String>] {
		&mut self.sentences
	}

	/// Tokenizes `phrase` and inserts its tokens at the start of sentence `index`.
	///
	/// `"actually,"` becomes the two tokens `actually` and `,`, like any
	/// text that went through [`Document::parse`]. Out-of-range indexes are
	/// ignored.
	pub fn prepend(&mut self, index: usize, phrase: &str) {
		if let Some(sentence) = self.sentences.get_mut(index) {
			sentence.splice(0..0, split_words(phrase));
		}
	}

	/// Lowercases every token of sentence `index`.
	pub fn lowercase_sentence(&mut self, index: usize) {
		if let Some(sentence) = self.sentences.get_mut(index) {
			for token in sentence.iter_mut() {
				*token = token.to_lowercase();
			}
		}
	}

	/// Serializes the document: tokens and sentences joined with single spaces.
	pub fn render(&self) -> String {
		self.sentences
			.iter()
			.map(|sentence| join_tokens(sentence.as_slice()))
			.collect::<Vec<String>>()
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_and_render() {
		let document = Document::parse("Hello there. How are you?");
		assert_eq!(document.len(), 2);
		assert_eq!(document.render(), "Hello there . How are you ?");
	}

	#[test]
	fn test_prepend_and_lowercase() {
		let mut document = Document::parse("One. Two Words.");
		document.lowercase_sentence(1);
		document.prepend(1, "actually,");
		assert_eq!(document.render(), "One . actually , two words .");
		assert_eq!(document.sentences_mut()[1][..2], ["actually", ","]);
	}

	#[test]
	fn test_out_of_range_edits_are_ignored() {
		let mut document = Document::parse("Only one.");
		document.prepend(5, "nope");
		document.lowercase_sentence(5);
		assert_eq!(document.render(), "Only one .");
	}

	#[test]
	fn test_empty_document() {
		let document = Document::parse("   ");
		assert!(document.is_empty());
		assert_eq!(document.render(), "");
	}
}
