//! End-to-end summarization pipeline
//!
//! raw text -> [`Parser`] -> [`Text`] -> [`Graph`] -> [`TextRank`] ->
//! [`SummarySelector`]. Every call builds its own parser state, graph and
//! score table, so one pipeline can be shared across threads.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::scorer::{ScoreTable, ScoringMode, TextRank};
use crate::selector::{SummaryResult, SummarySelector};
use excerpt_core::{Parser, StopWords, Text};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parsed document with its scores
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The parsed document
    pub text: Text,
    /// Word ranks and sentence scores
    pub scores: ScoreTable,
    /// Number of co-occurrence edges in the graph
    pub edge_count: usize,
}

/// Configured summarization pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: EngineConfig,
    parser: Parser,
    scorer: TextRank,
}

impl Pipeline {
    /// Create a pipeline without stop words
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let parser = Parser::new().minimum_word_length(config.minimum_word_length);
        let scorer = TextRank::from_config(&config);
        Ok(Self {
            config,
            parser,
            scorer,
        })
    }

    /// Create a pipeline that drops `stop_words` from the ranking vocabulary
    pub fn with_stop_words(config: EngineConfig, stop_words: Arc<dyn StopWords>) -> Result<Self> {
        let mut pipeline = Self::new(config)?;
        pipeline.parser = pipeline.parser.stop_words(stop_words);
        Ok(pipeline)
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse and score `raw_text` without selecting sentences.
    pub fn analyze(&self, raw_text: &str) -> Analysis {
        let text = self.parser.parse(raw_text);
        let graph = Graph::from_word_matrix(text.word_matrix(), self.config.window_size);
        let scores = self.scorer.score(&graph, text.word_matrix());

        log::debug!(
            "analyzed {} sentences, {} words, vocabulary {}, {} edges, {} iterations (converged: {})",
            text.len(),
            text.word_count(),
            graph.node_count(),
            graph.edge_count(),
            scores.iterations(),
            scores.converged()
        );

        Analysis {
            edge_count: graph.edge_count(),
            text,
            scores,
        }
    }

    /// Summarize `raw_text` into at most `limit` sentences in document order.
    pub fn summarize(&self, raw_text: &str, limit: usize, mode: ScoringMode) -> SummaryResult {
        let analysis = self.analyze(raw_text);
        self.select(&analysis, limit, mode)
    }

    /// Select sentences from an existing analysis.
    pub fn select(&self, analysis: &Analysis, limit: usize, mode: ScoringMode) -> SummaryResult {
        let mut result =
            SummarySelector::select(analysis.text.sentences(), &analysis.scores, limit, mode);

        if self.config.keep_marks {
            for sentence in &mut result.sentences {
                let terminated = sentence
                    .text
                    .ends_with(|c: char| matches!(c, '.' | '?' | '!'));
                if !terminated {
                    if let Some(mark) = analysis.text.terminal_mark(sentence.index) {
                        sentence.text.push(mark);
                    }
                }
            }
        }

        log::debug!(
            "selected {} of {} sentences ({} mode)",
            result.len(),
            analysis.text.len(),
            mode
        );
        result
    }

    /// The `limit` highest ranked words with scores scaled to `[0, 1]`.
    pub fn keywords(&self, raw_text: &str, limit: usize) -> Vec<(String, f64)> {
        self.analyze(raw_text).scores.keywords(limit)
    }

    /// Summarize independent documents, in parallel when the `parallel`
    /// feature is enabled. Results keep the input order.
    pub fn summarize_batch(
        &self,
        documents: &[&str],
        limit: usize,
        mode: ScoringMode,
    ) -> Vec<SummaryResult> {
        #[cfg(feature = "parallel")]
        {
            documents
                .par_iter()
                .map(|doc| self.summarize(doc, limit, mode))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|doc| self.summarize(doc, limit, mode))
                .collect()
        }
    }
}
