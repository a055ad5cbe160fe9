//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "json", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input as UTF-8
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }

    /// Read the text content, decoding bytes with the named encoding.
    ///
    /// `label` is a WHATWG encoding label such as `"utf-8"`,
    /// `"windows-1252"` or `"shift_jis"`. A byte order mark overrides the
    /// label. Malformed sequences are replaced with U+FFFD.
    pub fn read_text_with_encoding(self, label: &str) -> Result<String> {
        let encoding = encoding_rs::Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ApiError::Encoding(format!("unknown encoding '{label}'")))?;

        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::File(path) => fs::read(&path)?,
            Input::Bytes(bytes) => bytes,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };

        let (text, used, had_errors) = encoding.decode(&bytes);
        if had_errors {
            log::warn!(
                "input contained sequences invalid in {}, replaced with U+FFFD",
                used.name()
            );
        }
        Ok(text.into_owned())
    }
}

/// A summary sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDTO {
    /// Position in the source document
    pub index: usize,
    /// Sentence text with typographic quotes
    pub text: String,
    /// Aggregate score under the scoring mode used
    pub score: f64,
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordDTO {
    /// Lowercase word
    pub word: String,
    /// Rank scaled to `[0, 1]`
    pub score: f64,
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Sentences found in the document
    pub total_sentences: usize,
    /// Distinct words ranked
    pub vocabulary_size: usize,
    /// Rank iterations performed
    pub iterations: usize,
    /// Whether the ranks converged before the iteration cap
    pub converged: bool,
    /// Scoring mode used
    pub mode: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with sentences and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Selected sentences in document order
    pub sentences: Vec<SentenceDTO>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Sentence texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
