//! Sentence and word tokenizer.
//!
//! The parser protects quoted punctuation with a [`QuoteCurator`], splits the
//! protected text into pieces on newline runs and on terminator + whitespace
//! pairs, glues split acronyms back together, restores every piece and finally
//! breaks each sentence into lowercase words.

use crate::curator::QuoteCurator;
use crate::stopwords::StopWords;
use crate::text::{Mark, Sentence, Text};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Parser configuration options.
#[derive(Clone, Default)]
pub struct ParserConfig {
    /// Words with fewer characters than this are dropped
    pub minimum_word_length: usize,
    /// Stop words excluded from the word lists
    pub stop_words: Option<Arc<dyn StopWords>>,
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("minimum_word_length", &self.minimum_word_length)
            .field("stop_words", &self.stop_words.as_ref().map(|_| "<dyn StopWords>"))
            .finish()
    }
}

/// Turns raw prose into a [`Text`].
///
/// The parser holds configuration only; all working state lives inside a
/// single [`Parser::parse`] call, so one parser can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser without stop words and without a length filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Sets the minimum word length.
    pub fn minimum_word_length(mut self, length: usize) -> Self {
        self.config.minimum_word_length = length;
        self
    }

    /// Sets the stop words to drop from word lists.
    pub fn stop_words(mut self, stop_words: Arc<dyn StopWords>) -> Self {
        self.config.stop_words = Some(stop_words);
        self
    }

    /// Current configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `raw_text` into sentences, word lists and marks.
    pub fn parse(&self, raw_text: &str) -> Text {
        let (sentences, marks) = self.sentences(raw_text);
        let word_matrix = sentences.iter().map(|s| self.words(&s.text)).collect();
        Text::new(sentences, word_matrix, marks)
    }

    /// Splits `raw_text` into sentences and stand-alone punctuation marks.
    pub fn sentences(&self, raw_text: &str) -> (Vec<Sentence>, Vec<Mark>) {
        let mut curator = QuoteCurator::new(raw_text);
        curator.protect();

        let pieces = repair_acronyms(split_pieces(curator.text()));

        let mut sentences = Vec::with_capacity(pieces.len() / 2 + 1);
        let mut marks = Vec::new();

        for piece in pieces {
            let restored = curator.restore_from_text(&piece);
            let cleaned = restored.trim();

            let mut chars = cleaned.chars();
            match (chars.next(), chars.next()) {
                (None, _) => {}
                (Some(mark), None) => marks.push(Mark {
                    sentence: sentences.len().saturating_sub(1),
                    mark,
                }),
                _ => sentences.push(Sentence::new(sentences.len(), cleaned)),
            }
        }

        (sentences, marks)
    }

    /// Extracts the lowercase words of one sentence.
    ///
    /// Punctuation touching whitespace or the sentence edges is stripped;
    /// punctuation inside a word ("U.K", "we've", "9.6") is kept. Words made
    /// only of symbols, shorter than the minimum length or listed as stop
    /// words are dropped.
    pub fn words(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(|chunk| chunk.trim_matches(is_punctuation))
            .filter(|chunk| !chunk.is_empty())
            .map(clean_word)
            .filter(|word| self.keeps(word))
            .collect()
    }

    fn keeps(&self, word: &str) -> bool {
        if !word.chars().any(char::is_alphanumeric) {
            return false;
        }
        if word.chars().count() < self.config.minimum_word_length {
            return false;
        }
        match &self.config.stop_words {
            Some(stop_words) => !stop_words.contains(word),
            None => true,
        }
    }
}

/// Parses `raw_text` with a default parser.
pub fn parse(raw_text: &str) -> Text {
    Parser::new().parse(raw_text)
}

/// Splits protected text on newline runs and on `.`/`?`/`!` followed by
/// whitespace, keeping delimiters as their own pieces. A terminator boundary
/// is not split when the next parenthesis after it is a closing one.
fn split_pieces(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let inside_parens = closing_paren_lookahead(&chars);

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];

        let delimiter_end = if ch == '\n' {
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 == '\n' {
                end += 1;
            }
            Some(end)
        } else if is_terminator(ch)
            && chars.get(i + 1).is_some_and(|&(_, next)| next.is_whitespace())
            && !inside_parens[i + 2]
        {
            Some(i + 2)
        } else {
            None
        };

        match delimiter_end {
            Some(end) => {
                let end_byte = chars.get(end).map_or(text.len(), |&(byte, _)| byte);
                push_piece(&mut pieces, &text[start..pos]);
                push_piece(&mut pieces, &text[pos..end_byte]);
                start = end_byte;
                i = end;
            }
            None => i += 1,
        }
    }

    push_piece(&mut pieces, &text[start..]);
    pieces
}

/// `table[k]` is true when the first parenthesis at or after char `k` is `)`.
fn closing_paren_lookahead(chars: &[(usize, char)]) -> Vec<bool> {
    let mut table = vec![false; chars.len() + 1];
    for k in (0..chars.len()).rev() {
        table[k] = match chars[k].1 {
            ')' => true,
            '(' => false,
            _ => table[k + 1],
        };
    }
    table
}

fn push_piece(pieces: &mut Vec<String>, piece: &str) {
    if !piece.is_empty() {
        pieces.push(piece.to_string());
    }
}

/// Re-joins pieces broken on single-letter abbreviations such as "U.K. " or
/// "U. S. ": a piece whose second-to-last byte is `.` or a space, followed by a
/// lone ". " piece, absorbs that piece and the one after it. The joined piece
/// keeps absorbing only while the next tail is another single capital, so
/// "U. S. A" stays whole but a sentence after "U. K." keeps its boundary.
fn repair_acronyms(pieces: Vec<String>) -> Vec<String> {
    let mut repaired = Vec::with_capacity(pieces.len());
    let mut pending: VecDeque<String> = pieces.into();

    while let Some(mut piece) = pending.pop_front() {
        if ends_like_acronym(&piece) {
            let mut chained = false;
            while pending.front().is_some_and(|next| next == ". ")
                && pending
                    .get(1)
                    .is_some_and(|tail| !chained || is_initial(tail))
            {
                for tail in pending.drain(..2) {
                    piece.push_str(&tail);
                }
                chained = true;
            }
        }
        repaired.push(piece);
    }

    repaired
}

fn is_initial(piece: &str) -> bool {
    let mut chars = piece.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_uppercase())
}

fn ends_like_acronym(piece: &str) -> bool {
    let bytes = piece.as_bytes();
    let before_last = match bytes.len() {
        0 => None,
        1 => bytes.first(),
        len => bytes.get(len - 2),
    };
    matches!(before_last, Some(b'.') | Some(b' '))
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!')
}

fn clean_word(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// Punctuation in the Unicode sense (general category P), restricted to the
/// blocks that show up in prose.
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
            | '\u{00A1}'
            | '\u{00A7}'
            | '\u{00AB}'
            | '\u{00B6}'
            | '\u{00B7}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{2043}'
            | '\u{2045}'..='\u{2051}'
            | '\u{2053}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301F}'
    )
}
