//! Stop-word lookup interface.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Membership test for lowercase stop words of one language.
pub trait StopWords: Send + Sync {
    /// Whether `word` (already lowercased) is a stop word
    fn contains(&self, word: &str) -> bool;
}

/// A stop-word set that matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopWords;

impl StopWords for NoStopWords {
    fn contains(&self, _word: &str) -> bool {
        false
    }
}

impl StopWords for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl StopWords for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<T: StopWords + ?Sized> StopWords for Arc<T> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<T: StopWords + ?Sized> StopWords for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}
