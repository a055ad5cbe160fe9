//! TextRank ranking and summary selection
//!
//! This crate builds the word co-occurrence graph of a parsed document,
//! iterates word ranks to convergence, aggregates them into sentence scores
//! and selects the top sentences in document order.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod scorer;
pub mod selector;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use graph::{Graph, GraphBuilder};
pub use pipeline::{Analysis, Pipeline};
pub use scorer::{ScoreTable, ScoringMode, TextRank, WordRanks};
pub use selector::{SelectedSentence, SummaryResult, SummarySelector};

// Re-export from core for convenience
pub use excerpt_core::{Mark, Parser, Sentence, StopWords, Text};
