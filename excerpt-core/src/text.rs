//! Parsed document representation consumed by the ranking engine.

/// A sentence of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Zero-based position in document order
    pub index: usize,
    /// Cleaned text with punctuation restored and quotes curled
    pub text: String,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// A stand-alone punctuation mark split off the sentence stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Index of the sentence the mark follows (0 when none precedes it)
    pub sentence: usize,
    /// The punctuation character
    pub mark: char,
}

/// Sentences, their word lists and the marks found between them.
///
/// `sentences()[i]` and `words(i)` always describe the same sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    sentences: Vec<Sentence>,
    word_matrix: Vec<Vec<String>>,
    marks: Vec<Mark>,
}

impl Text {
    /// Assemble a text from its parts.
    ///
    /// `word_matrix` must hold one list per sentence. Debug builds assert
    /// this; release builds drop extra lists and pad missing ones with empty
    /// lists.
    pub fn new(
        sentences: Vec<Sentence>,
        mut word_matrix: Vec<Vec<String>>,
        marks: Vec<Mark>,
    ) -> Self {
        debug_assert_eq!(
            word_matrix.len(),
            sentences.len(),
            "one word list per sentence"
        );
        word_matrix.resize_with(sentences.len(), Vec::new);
        Self {
            sentences,
            word_matrix,
            marks,
        }
    }

    /// All sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Word lists, one per sentence
    pub fn word_matrix(&self) -> &[Vec<String>] {
        &self.word_matrix
    }

    /// Words of one sentence (empty for an out-of-range index)
    pub fn words(&self, sentence: usize) -> &[String] {
        self.word_matrix
            .get(sentence)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Punctuation marks in the order they were found
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// The first mark that terminates `sentence`, if any
    pub fn terminal_mark(&self, sentence: usize) -> Option<char> {
        self.marks
            .iter()
            .find(|m| m.sentence == sentence && matches!(m.mark, '.' | '?' | '!'))
            .map(|m| m.mark)
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the text has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of words kept across all sentences
    pub fn word_count(&self) -> usize {
        self.word_matrix.iter().map(Vec::len).sum()
    }
}
