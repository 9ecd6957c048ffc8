/// Periods after these words (lowercase, without the final `.`) do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
	"mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "approx",
	"dept", "fig",
];

/// Returns `true` for characters that make up words.
pub(crate) fn is_word_char(c: char) -> bool {
	c.is_alphanumeric()
}

/// Characters allowed inside a word when another word character follows
/// (`don't`, `well-known`, `1.5`, `e.g`).
fn is_joiner(c: char) -> bool {
	matches!(c, '\'' | '’' | '-' | '.')
}

/// Returns `true` if a period right after `word` belongs to it.
///
/// Covers known abbreviations (`Dr`, `etc`), dotted letter groups (`e.g`,
/// `U.S`) and single capital initials other than the pronoun `I`.
fn is_abbreviation(word: &str) -> bool {
	let mut letters = word.chars();
	if let (Some(first), None) = (letters.next(), letters.next()) {
		return first.is_uppercase() && first != 'I';
	}

	let dotted = word.contains('.') && word.chars().all(|c| c.is_alphabetic() || c == '.');
	dotted || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

fn is_terminal(c: char) -> bool {
	matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
	matches!(c, '"' | '\'' | '’' | '”' | ')' | ']')
}

/// Returns `true` if the token contains at least one word character.
pub fn is_word(token: &str) -> bool {
	token.chars().any(is_word_char)
}

/// Splits text into word and punctuation tokens.
///
/// # Rules
/// - A word is a maximal run of alphanumeric characters, optionally joined
///   by `'`, `’`, `-` or `.` when another word character follows.
/// - A single period closing an abbreviation or an initial stays attached
///   (`"Dr."`, `"e.g."`, `"J."`), so re-splitting joined tokens finds the
///   same sentence boundaries.
/// - A punctuation token is a maximal run of non-space, non-word characters,
///   so `"!!!"` stays a single token.
/// - Whitespace only separates tokens and is discarded.
///
/// # Examples
/// `"I can't, really!!!"` → `["I", "can't", ",", "really", "!!!"]`
/// `"Dr. Lee paid 1.5 e.g."` → `["Dr.", "Lee", "paid", "1.5", "e.g."]`
pub fn split_words(text: &str) -> Vec<String> {
	let chars: Vec<char> = text.chars().collect();
	let mut tokens = Vec::new();
	let mut i = 0;

	while i < chars.len() {
		if chars[i].is_whitespace() {
			i += 1;
			continue;
		}

		let start = i;
		if is_word_char(chars[i]) {
			while i < chars.len()
				&& (is_word_char(chars[i])
					|| (is_joiner(chars[i]) && i + 1 < chars.len() && is_word_char(chars[i + 1])))
			{
				i += 1;
			}
			let single_period = chars.get(i) == Some(&'.') && chars.get(i + 1) != Some(&'.');
			if single_period && is_abbreviation(&chars[start..i].iter().collect::<String>()) {
				i += 1;
			}
		} else {
			while i < chars.len() && !chars[i].is_whitespace() && !is_word_char(chars[i]) {
				i += 1;
			}
		}
		tokens.push(chars[start..i].iter().collect());
	}

	tokens
}

/// Joins tokens back with single spaces.
///
/// Original spacing is not recoverable, so punctuation ends up separated from
/// the word before it (`"that !"`).
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
	tokens
		.iter()
		.map(AsRef::as_ref)
		.collect::<Vec<&str>>()
		.join(" ")
}

/// Splits text into sentences.
///
/// A sentence ends after a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets) followed by whitespace or the end of the text. A single period
/// after a known abbreviation or a capital initial does not end a sentence.
///
/// Sentences are trimmed and empty ones are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
	let chars: Vec<char> = text.chars().collect();
	let mut sentences = Vec::new();
	let mut start = 0;
	let mut i = 0;

	while i < chars.len() {
		if !is_terminal(chars[i]) {
			i += 1;
			continue;
		}

		let mut end = i;
		while end < chars.len() && is_terminal(chars[end]) {
			end += 1;
		}
		while end < chars.len() && is_closing(chars[end]) {
			end += 1;
		}

		let at_boundary = end == chars.len() || chars[end].is_whitespace();
		let single_period = chars[i] == '.' && end == i + 1;
		if at_boundary && !(single_period && ends_with_abbreviation(&chars[start..i])) {
			push_sentence(&mut sentences, &chars[start..end]);
			start = end;
		}
		i = end;
	}
	push_sentence(&mut sentences, &chars[start..]);

	sentences
}

fn push_sentence(sentences: &mut Vec<String>, chars: &[char]) {
	let sentence: String = chars.iter().collect();
	let sentence = sentence.trim();
	if !sentence.is_empty() {
		sentences.push(sentence.to_owned());
	}
}

/// Checks the last whitespace-delimited word before a period.
fn ends_with_abbreviation(chars: &[char]) -> bool {
	let word: String = chars
		.iter()
		.rev()
		.take_while(|c| !c.is_whitespace())
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect();

	is_abbreviation(&word)
}
