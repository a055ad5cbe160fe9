//! Quote-aware text segmentation for extractive summarization
//!
//! This crate turns raw prose into the document model consumed by the ranking
//! engine: sentences, their lowercase word lists and the stand-alone
//! punctuation marks split off between them. Punctuation inside double-quoted
//! speech is protected while splitting, and typographic quotes are restored
//! in the output.
//!
//! The crate has no dependencies and never fails: malformed input degrades to
//! a best-effort segmentation.

#![warn(missing_docs)]

pub mod curator;
pub mod parser;
pub mod stopwords;
pub mod text;

// Re-export key types
pub use curator::{curly_quotes, decode_entities, straighten_quotes, QuoteCurator, Sentinel};
pub use parser::{parse, Parser, ParserConfig};
pub use stopwords::{NoStopWords, StopWords};
pub use text::{Mark, Sentence, Text};
