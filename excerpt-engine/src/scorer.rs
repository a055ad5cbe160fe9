//! TextRank scoring
//!
//! Word ranks come from a weighted PageRank-style iteration over the
//! co-occurrence graph:
//!
//! ```text
//! r'(i) = (1 - d) + d * sum_j w(i, j) * r(j) / W(j)
//! ```
//!
//! where `W(j)` is the total edge weight of node `j`. Every update reads only
//! the previous iteration's ranks. Sentence scores are then aggregated from
//! the converged word ranks.

use crate::config::EngineConfig;
use crate::graph::Graph;
use rustc_hash::FxHashMap;
use std::fmt;

/// How word ranks are aggregated into a sentence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringMode {
    /// Sum of word ranks; favors longer sentences
    #[default]
    Basic,
    /// Sum of word ranks divided by the word count; favors dense sentences
    Compound,
}

impl ScoringMode {
    /// Lowercase name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Basic => "basic",
            ScoringMode::Compound => "compound",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(ScoringMode::Basic),
            "compound" => Ok(ScoringMode::Compound),
            other => Err(format!("unknown scoring mode '{other}'")),
        }
    }
}

/// Converged word ranks
#[derive(Debug, Clone, PartialEq)]
pub struct WordRanks {
    /// Rank per node id
    pub scores: Vec<f64>,
    /// Iterations performed
    pub iterations: usize,
    /// Largest rank change of the last iteration
    pub delta: f64,
    /// Whether `delta` dropped below the threshold before the cap
    pub converged: bool,
}

/// TextRank rank propagation
#[derive(Debug, Clone)]
pub struct TextRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the largest absolute rank change
    pub threshold: f64,
}

impl Default for TextRank {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl TextRank {
    /// Create a scorer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer from an engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Iterate word ranks until they settle or the iteration cap is hit.
    ///
    /// Nodes without edges never receive a contribution and sit at the
    /// `1 - d` baseline.
    pub fn rank(&self, graph: &Graph) -> WordRanks {
        let n = graph.node_count();
        if n == 0 {
            return WordRanks {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let baseline = 1.0 - self.damping;
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations {
            iterations += 1;
            next.fill(baseline);

            for (node, &score) in scores.iter().enumerate() {
                let total = graph.total_weight(node as u32);
                if total <= 0.0 {
                    continue;
                }
                let share = self.damping * score / total;
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    next[neighbor as usize] += share * weight;
                }
            }

            delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut next);

            if delta < self.threshold {
                break;
            }
        }

        let converged = delta < self.threshold;
        if !converged {
            log::warn!(
                "TextRank stopped after {} iterations without converging (delta {:.3e})",
                iterations,
                delta
            );
        }

        WordRanks {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Rank the graph and aggregate sentence scores for `word_matrix`.
    pub fn score(&self, graph: &Graph, word_matrix: &[Vec<String>]) -> ScoreTable {
        let ranks = self.rank(graph);
        ScoreTable::new(graph, ranks, word_matrix)
    }
}

/// Word ranks and the sentence scores derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    words: Vec<String>,
    index: FxHashMap<String, u32>,
    ranks: Vec<f64>,
    basic: Vec<f64>,
    compound: Vec<f64>,
    iterations: usize,
    converged: bool,
}

impl ScoreTable {
    fn new(graph: &Graph, ranks: WordRanks, word_matrix: &[Vec<String>]) -> Self {
        let mut basic = Vec::with_capacity(word_matrix.len());
        let mut compound = Vec::with_capacity(word_matrix.len());

        for words in word_matrix {
            let sum: f64 = words
                .iter()
                .filter_map(|w| graph.node_id(w))
                .map(|id| ranks.scores[id as usize])
                .sum();
            basic.push(sum);
            compound.push(if words.is_empty() {
                0.0
            } else {
                sum / words.len() as f64
            });
        }

        Self {
            words: graph.words().to_vec(),
            index: graph.index().clone(),
            ranks: ranks.scores,
            basic,
            compound,
            iterations: ranks.iterations,
            converged: ranks.converged,
        }
    }

    /// Converged rank of `word`
    pub fn rank(&self, word: &str) -> Option<f64> {
        self.index
            .get(word)
            .and_then(|&id| self.ranks.get(id as usize))
            .copied()
    }

    /// Sentence scores for `mode`, indexed by sentence
    pub fn sentence_scores(&self, mode: ScoringMode) -> &[f64] {
        match mode {
            ScoringMode::Basic => &self.basic,
            ScoringMode::Compound => &self.compound,
        }
    }

    /// Score of one sentence (0 for an out-of-range index)
    pub fn sentence_score(&self, sentence: usize, mode: ScoringMode) -> f64 {
        self.sentence_scores(mode)
            .get(sentence)
            .copied()
            .unwrap_or(0.0)
    }

    /// Sentence indices ordered by descending score, ties by earlier index
    pub fn ranked_sentences(&self, mode: ScoringMode) -> Vec<usize> {
        let scores = self.sentence_scores(mode);
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
        order
    }

    /// Top `limit` words with ranks min-max scaled to `[0, 1]`.
    ///
    /// Ties keep first-occurrence order. When every rank is equal all scaled
    /// scores are 1.
    pub fn keywords(&self, limit: usize) -> Vec<(String, f64)> {
        let (min, max) = self
            .ranks
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| {
                (lo.min(r), hi.max(r))
            });
        let span = max - min;

        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by(|&a, &b| self.ranks[b].total_cmp(&self.ranks[a]).then(a.cmp(&b)));

        order
            .into_iter()
            .take(limit)
            .map(|i| {
                let scaled = if span > 0.0 {
                    (self.ranks[i] - min) / span
                } else {
                    1.0
                };
                (self.words[i].clone(), scaled)
            })
            .collect()
    }

    /// Number of ranked words
    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }

    /// Number of sentences scored
    pub fn sentence_count(&self) -> usize {
        self.basic.len()
    }

    /// Iterations the scorer ran
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the ranks converged before the iteration cap
    pub fn converged(&self) -> bool {
        self.converged
    }
}
