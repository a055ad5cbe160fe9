//! Top-N sentence selection

use crate::scorer::{ScoreTable, ScoringMode};
use excerpt_core::Sentence;

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// Position in the source document
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Aggregate score under the selection mode
    pub score: f64,
}

/// Selected sentences in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryResult {
    /// Selected sentences, ascending by `index`
    pub sentences: Vec<SelectedSentence>,
}

impl SummaryResult {
    /// Sentence texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// Consume the result, keeping only the texts
    pub fn into_texts(self) -> Vec<String> {
        self.sentences.into_iter().map(|s| s.text).collect()
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Picks the highest scoring sentences and restores document order
#[derive(Debug, Clone, Copy, Default)]
pub struct SummarySelector;

impl SummarySelector {
    /// Select the top `limit` sentences under `mode`.
    ///
    /// `limit` is clamped to the sentence count, so `0` yields an empty
    /// result and anything larger returns every sentence.
    pub fn select(
        sentences: &[Sentence],
        scores: &ScoreTable,
        limit: usize,
        mode: ScoringMode,
    ) -> SummaryResult {
        let limit = limit.min(sentences.len());

        let mut chosen: Vec<usize> = scores
            .ranked_sentences(mode)
            .into_iter()
            .filter(|&i| i < sentences.len())
            .take(limit)
            .collect();

        // Sentences the score table does not cover rank last, in order.
        if chosen.len() < limit {
            let missing = (scores.sentence_count()..sentences.len()).take(limit - chosen.len());
            chosen.extend(missing);
        }

        chosen.sort_unstable();

        SummaryResult {
            sentences: chosen
                .into_iter()
                .map(|i| SelectedSentence {
                    index: i,
                    text: sentences[i].text.clone(),
                    score: scores.sentence_score(i, mode),
                })
                .collect(),
        }
    }
}
