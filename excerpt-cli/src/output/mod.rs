//! Output formatting module

use anyhow::Result;
use excerpt_api::{KeywordDTO, Metadata, SentenceDTO};
use std::io::Write;

/// Trait for output formatters
///
/// A formatter sees one or more documents in input order. Each document
/// opens with `begin_document`, receives sentences or keywords, and closes
/// with `end_document`.
pub trait OutputFormatter: Send {
    /// Start a document read from `source`
    fn begin_document(&mut self, source: &str) -> Result<()>;

    /// Format and output a single summary sentence
    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()>;

    /// Format and output a single keyword
    fn format_keyword(&mut self, keyword: &KeywordDTO) -> Result<()>;

    /// Close the current document
    fn end_document(&mut self, metadata: Option<&Metadata>) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one sentence per line
    Text,
    /// JSON array of documents with scores and metadata
    Json,
    /// Markdown numbered list per document
    Markdown,
}

impl OutputFormat {
    /// Lowercase name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `excerpt list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one sentence per line",
            OutputFormat::Json => "JSON with sentence indices, scores and metadata",
            OutputFormat::Markdown => "Markdown numbered list per document",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
///
/// `separator` only applies to text output. Document headers are written
/// when `multiple` documents are formatted.
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    separator: &str,
    multiple: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, separator, multiple)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
