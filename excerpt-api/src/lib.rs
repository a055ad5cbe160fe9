//! Public API for Excerpt extractive summarization
//!
//! This crate provides a small, stable interface over the ranking engine:
//! configure a sentence count and a stop-word list, then ask for a basic or
//! compound TextRank summary.
//!
//! ```no_run
//! use excerpt_api::Summarizer;
//!
//! let summarizer = Summarizer::new()?;
//! for sentence in summarizer.summarize_basic("First point. Second point. Third point.")? {
//!     println!("{sentence}");
//! }
//! # Ok::<(), excerpt_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod stopwords;

use error::Result;
use excerpt_engine::Pipeline;
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder, StopWordSource};
pub use dto::{Input, KeywordDTO, Metadata, Output, SentenceDTO};
pub use error::ApiError;
pub use excerpt_core::{NoStopWords, StopWords};
pub use excerpt_engine::{EngineConfig, ScoringMode};
pub use stopwords::{available_languages, StopWordList};

/// Main entry point for summarization
#[derive(Debug, Clone)]
pub struct Summarizer {
    pipeline: Pipeline,
    config: Config,
}

impl Summarizer {
    /// Create a summarizer with default configuration (English, 5 sentences)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a summarizer using a built-in stop-word language
    pub fn with_language(language: &str) -> Result<Self> {
        let config = Config::builder().language(language).build()?;
        Self::with_config(config)
    }

    /// Create a summarizer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let pipeline = match config.stop_word_provider()? {
            Some(stop_words) => Pipeline::with_stop_words(config.engine.clone(), stop_words)?,
            None => Pipeline::new(config.engine.clone())?,
        };
        Ok(Self { pipeline, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Summarize with basic (unnormalized) sentence scores
    pub fn summarize_basic(&self, text: &str) -> Result<Vec<String>> {
        self.summarize(text, ScoringMode::Basic)
    }

    /// Summarize with compound (length-normalized) sentence scores
    pub fn summarize_compound(&self, text: &str) -> Result<Vec<String>> {
        self.summarize(text, ScoringMode::Compound)
    }

    /// Summarize `text` into the configured number of sentences
    pub fn summarize(&self, text: &str, mode: ScoringMode) -> Result<Vec<String>> {
        Ok(self
            .pipeline
            .summarize(text, self.config.sentences, mode)
            .into_texts())
    }

    /// Summarize several documents, keeping their order
    pub fn summarize_many(&self, texts: &[&str], mode: ScoringMode) -> Result<Vec<Vec<String>>> {
        Ok(self
            .pipeline
            .summarize_batch(texts, self.config.sentences, mode)
            .into_iter()
            .map(|result| result.into_texts())
            .collect())
    }

    /// Summarize input and return scores and metadata
    pub fn process(&self, input: Input, mode: ScoringMode) -> Result<Output> {
        let text = input.read_text()?;
        Ok(self.process_str(&text, mode))
    }

    /// Summarize input decoded with the named encoding
    pub fn process_with_encoding(
        &self,
        input: Input,
        encoding: &str,
        mode: ScoringMode,
    ) -> Result<Output> {
        let text = input.read_text_with_encoding(encoding)?;
        Ok(self.process_str(&text, mode))
    }

    fn process_str(&self, text: &str, mode: ScoringMode) -> Output {
        let start = Instant::now();

        let analysis = self.pipeline.analyze(text);
        let result = self.pipeline.select(&analysis, self.config.sentences, mode);

        let sentences = result
            .sentences
            .into_iter()
            .map(|s| SentenceDTO {
                index: s.index,
                text: s.text,
                score: s.score,
            })
            .collect();

        let metadata = Metadata {
            total_sentences: analysis.text.len(),
            vocabulary_size: analysis.scores.vocabulary_size(),
            iterations: analysis.scores.iterations(),
            converged: analysis.scores.converged(),
            mode: mode.to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Output {
            sentences,
            metadata,
        }
    }

    /// The `limit` highest ranked words with scores scaled to `[0, 1]`
    pub fn keywords(&self, text: &str, limit: usize) -> Result<Vec<KeywordDTO>> {
        Ok(self
            .pipeline
            .keywords(text, limit)
            .into_iter()
            .map(|(word, score)| KeywordDTO { word, score })
            .collect())
    }
}

// Convenience functions

/// Summarize text into `sentences` sentences with default settings
pub fn summarize_text(text: &str, sentences: usize) -> Result<Vec<String>> {
    let config = Config::builder().sentences(sentences).build()?;
    Summarizer::with_config(config)?.summarize_basic(text)
}

/// Summarize a UTF-8 file into `sentences` sentences with default settings
pub fn summarize_file<P: AsRef<std::path::Path>>(path: P, sentences: usize) -> Result<Vec<String>> {
    let config = Config::builder().sentences(sentences).build()?;
    let text = Input::from_file(path.as_ref()).read_text()?;
    Summarizer::with_config(config)?.summarize_basic(&text)
}
