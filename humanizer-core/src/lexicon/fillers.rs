const FORMALITY_FILLERS: &[&str] = &[
	"like", "you know", "I mean", "sort of", "kind of", "basically", "actually",
];

const CASUAL_MARKERS: &[&str] = &["well,", "you know,", "like,", "basically,"];

const STYLE_FILLERS: &[&str] = &["actually", "basically", "literally", "seriously"];

const EMPHASIS: &[&str] = &["really", "very", "quite", "absolutely"];

fn owned(words: &[&str]) -> Vec<String> {
	words.iter().map(|w| (*w).to_owned()).collect()
}

/// Filler and emphasis vocabulary used by the formality and style stages.
#[derive(Clone, Debug, PartialEq)]
pub struct FillerLexicon {
	/// Phrases prepended to sentences when relaxing formality.
	formality: Vec<String>,
	/// Markers prepended to the whole text in casual style (carry their own comma).
	casual_markers: Vec<String>,
	/// Words prepended to a single sentence when creativity is high.
	style_fillers: Vec<String>,
	/// Adverbs inserted before adjectives.
	emphasis: Vec<String>,
}

impl Default for FillerLexicon {
	fn default() -> Self {
		Self {
			formality: owned(FORMALITY_FILLERS),
			casual_markers: owned(CASUAL_MARKERS),
			style_fillers: owned(STYLE_FILLERS),
			emphasis: owned(EMPHASIS),
		}
	}
}

impl FillerLexicon {
	pub fn formality(&self) -> &[String] {
		&self.formality
	}

	pub fn casual_markers(&self) -> &[String] {
		&self.casual_markers
	}

	pub fn style_fillers(&self) -> &[String] {
		&self.style_fillers
	}

	pub fn emphasis(&self) -> &[String] {
		&self.emphasis
	}
}
