//! JSON output formatter

use super::OutputFormatter;
use anyhow::{Context, Result};
use excerpt_api::{KeywordDTO, Metadata, SentenceDTO};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects documents and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for one document in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text was read from
    pub source: String,
    /// Summary sentences in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<SentenceDTO>,
    /// Keywords in rank order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<KeywordDTO>,
    /// Processing metadata for summaries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    fn current(&mut self) -> Result<&mut DocumentData> {
        self.documents
            .last_mut()
            .context("JSON formatter received output before begin_document")
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            sentences: Vec::new(),
            keywords: Vec::new(),
            metadata: None,
        });
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()> {
        self.current()?.sentences.push(sentence.clone());
        Ok(())
    }

    fn format_keyword(&mut self, keyword: &KeywordDTO) -> Result<()> {
        self.current()?.keywords.push(keyword.clone());
        Ok(())
    }

    fn end_document(&mut self, metadata: Option<&Metadata>) -> Result<()> {
        self.current()?.metadata = metadata.cloned();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
