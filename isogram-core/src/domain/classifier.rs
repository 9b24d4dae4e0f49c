//! Character classification for word normalization

/// Classification of a single decomposed character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letter that may appear in an output word
    Letter,
    /// Word-internal joiner
    Hyphen,
    /// Token separator
    Whitespace,
    /// Anything else; removed from the text
    Rejected,
}

/// Pure character classification logic
///
/// Implementations receive characters *after* canonical decomposition, so an
/// accented letter arrives as its base letter followed by combining marks.
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharClass;

    /// Check if character is a letter
    fn is_letter(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Letter)
    }

    /// Check if character is a hyphen
    fn is_hyphen(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Hyphen)
    }

    /// Check if character is whitespace
    fn is_whitespace(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Whitespace)
    }

    /// Check if character is dropped from the text
    fn is_rejected(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Rejected)
    }
}

/// Default classifier: ASCII letters, the ASCII hyphen-minus and Unicode
/// whitespace; everything else is rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiClassifier;

impl AsciiClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for AsciiClassifier {
    fn classify(&self, ch: char) -> CharClass {
        if ch.is_ascii_alphabetic() {
            CharClass::Letter
        } else if ch == '-' {
            CharClass::Hyphen
        } else if ch.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Rejected
        }
    }
}
