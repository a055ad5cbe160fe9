//! Word co-occurrence graph
//!
//! [`GraphBuilder`] accumulates undirected edge weights with O(1) lookups,
//! then [`Graph`] freezes them into compressed sparse rows for the rank
//! iteration. Node ids follow first occurrence in the word matrix and edges
//! are sorted by target, so the frozen graph is identical for identical input.

use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone)]
struct BuilderNode {
    word: String,
    edges: FxHashMap<u32, f64>,
}

/// Mutable graph under construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    word_to_id: FxHashMap<String, u32>,
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the co-occurrence graph of a word matrix.
    ///
    /// Within each sentence, every word is linked to the following
    /// `window_size - 1` words. Edges never cross sentence boundaries.
    pub fn from_word_matrix(word_matrix: &[Vec<String>], window_size: usize) -> Self {
        let mut builder = Self::new();

        for words in word_matrix {
            let ids: Vec<u32> = words.iter().map(|w| builder.node(w)).collect();
            for (j, &from) in ids.iter().enumerate() {
                let end = ids.len().min(j + window_size);
                for &to in &ids[j + 1..end.max(j + 1)] {
                    builder.increment_edge(from, to, 1.0);
                }
            }
        }

        builder
    }

    /// Get or create the node for `word`, returning its id
    pub fn node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(BuilderNode {
            word: word.to_string(),
            edges: FxHashMap::default(),
        });
        id
    }

    /// Add `weight` to the undirected edge between two nodes.
    ///
    /// Self-loops and unknown ids are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }
        *self.nodes[from as usize].edges.entry(to).or_insert(0.0) += weight;
        *self.nodes[to as usize].edges.entry(from).or_insert(0.0) += weight;
    }

    /// Number of distinct words
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Freeze the builder into a [`Graph`]
    pub fn build(self) -> Graph {
        Graph::from_builder(self)
    }
}

/// Immutable co-occurrence graph in compressed sparse row form
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    words: Vec<String>,
    index: FxHashMap<String, u32>,
    /// Node i's edges live at `row_ptr[i]..row_ptr[i + 1]`
    row_ptr: Vec<usize>,
    col_idx: Vec<u32>,
    weights: Vec<f64>,
    total_weight: Vec<f64>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            index: FxHashMap::default(),
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

impl Graph {
    /// Build the graph of a word matrix in one step
    pub fn from_word_matrix(word_matrix: &[Vec<String>], window_size: usize) -> Self {
        GraphBuilder::from_word_matrix(word_matrix, window_size).build()
    }

    fn from_builder(builder: GraphBuilder) -> Self {
        let node_count = builder.nodes.len();
        let mut words = Vec::with_capacity(node_count);
        let mut row_ptr = Vec::with_capacity(node_count + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(node_count);

        row_ptr.push(0);
        for node in builder.nodes {
            let mut edges: Vec<(u32, f64)> = node.edges.into_iter().collect();
            edges.sort_unstable_by_key(|&(target, _)| target);

            total_weight.push(edges.iter().map(|&(_, w)| w).sum());
            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
            words.push(node.word);
        }

        Self {
            words,
            index: builder.word_to_id,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Number of nodes (the vocabulary size)
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Vocabulary in node id order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word to node id map
    pub(crate) fn index(&self) -> &FxHashMap<String, u32> {
        &self.index
    }

    /// Node id of `word`
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.index.get(word).copied()
    }

    /// Neighbors of a node with their edge weights
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let node = node as usize;
        let (start, end) = match (self.row_ptr.get(node), self.row_ptr.get(node + 1)) {
            (Some(&start), Some(&end)) => (start, end),
            _ => (0, 0),
        };
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Sum of edge weights touching a node
    pub fn total_weight(&self, node: u32) -> f64 {
        self.total_weight.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Weight of the edge between two words, 0 when they never co-occur
    pub fn edge_weight(&self, a: &str, b: &str) -> f64 {
        match (self.node_id(a), self.node_id(b)) {
            (Some(a), Some(b)) => self
                .neighbors(a)
                .find(|&(target, _)| target == b)
                .map_or(0.0, |(_, w)| w),
            _ => 0.0,
        }
    }
}
