//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use excerpt_api::{KeywordDTO, Metadata, SentenceDTO};
use std::io::{self, Write};

/// Plain text formatter - sentences joined by a separator, one document per block
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
    headers: bool,
    documents: usize,
    pending: Vec<String>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: &str, headers: bool) -> Self {
        Self {
            writer,
            separator: separator.to_string(),
            headers,
            documents: 0,
            pending: Vec::new(),
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout, one sentence per line
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "\n", false)
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        if self.headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        self.documents += 1;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()> {
        self.pending.push(sentence.text.clone());
        Ok(())
    }

    fn format_keyword(&mut self, keyword: &KeywordDTO) -> Result<()> {
        self.pending.push(format!("{}\t{:.4}", keyword.word, keyword.score));
        Ok(())
    }

    fn end_document(&mut self, _metadata: Option<&Metadata>) -> Result<()> {
        if !self.pending.is_empty() {
            writeln!(self.writer, "{}", self.pending.join(&self.separator))?;
        }
        self.pending.clear();
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

    fn sentence(index: usize, text: &str) -> SentenceDTO {
        SentenceDTO {
            index,
            text: text.to_string(),
            score: 1.0,
        }
    }

    #[test]
    fn test_one_sentence_per_line() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out, "\n", false);
            formatter.begin_document("a.txt").unwrap();
            formatter.format_sentence(&sentence(0, "First")).unwrap();
            formatter.format_sentence(&sentence(3, "Fourth")).unwrap();
            formatter.end_document(None).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "First\nFourth\n");
    }

    #[test]
    fn test_custom_separator_and_headers() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out, " ", true);
            for source in ["a.txt", "b.txt"] {
                formatter.begin_document(source).unwrap();
                formatter.format_sentence(&sentence(0, "One.")).unwrap();
                formatter.format_sentence(&sentence(1, "Two.")).unwrap();
                formatter.end_document(None).unwrap();
            }
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "==> a.txt <==\nOne. Two.\n\n==> b.txt <==\nOne. Two.\n"
        );
    }

    #[test]
    fn test_keywords() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out, "\n", false);
            formatter.begin_document("a.txt").unwrap();
            formatter
                .format_keyword(&KeywordDTO {
                    word: "georgia".to_string(),
                    score: 1.0,
                })
                .unwrap();
            formatter.end_document(None).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "georgia\t1.0000\n");
    }
}
