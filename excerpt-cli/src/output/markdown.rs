//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use excerpt_api::{KeywordDTO, Metadata, SentenceDTO};
use std::io::Write;

/// Markdown formatter - outputs each document as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    item_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            item_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.item_count = 0;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()> {
        self.item_count += 1;
        writeln!(self.writer, "{}. {}", self.item_count, sentence.text)?;
        Ok(())
    }

    fn format_keyword(&mut self, keyword: &KeywordDTO) -> Result<()> {
        self.item_count += 1;
        writeln!(
            self.writer,
            "{}. **{}** ({:.4})",
            self.item_count, keyword.word, keyword.score
        )?;
        Ok(())
    }

    fn end_document(&mut self, metadata: Option<&Metadata>) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        match metadata {
            Some(metadata) => writeln!(
                self.writer,
                "*{} of {} sentences, {} scoring*",
                self.item_count, metadata.total_sentences, metadata.mode
            )?,
            None => writeln!(self.writer, "*Total keywords: {}*", self.item_count)?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_with_footer() {
        let metadata = Metadata {
            total_sentences: 16,
            vocabulary_size: 80,
            iterations: 40,
            converged: true,
            mode: "basic".to_string(),
            processing_time_ms: 0,
        };
        let mut out = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut out);
            formatter.begin_document("georgia.txt").unwrap();
            for (index, text) in [(0, "First"), (4, "Fifth")] {
                formatter
                    .format_sentence(&SentenceDTO {
                        index,
                        text: text.to_string(),
                        score: 2.0,
                    })
                    .unwrap();
            }
            formatter.end_document(Some(&metadata)).unwrap();
            formatter.finish().unwrap();
        }
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("## georgia.txt\n\n1. First\n2. Fifth\n"));
        assert!(out.contains("*2 of 16 sentences, basic scoring*"));
    }
}
