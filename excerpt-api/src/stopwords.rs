//! Stop-word lists
//!
//! Lists are TOML documents with a `[metadata]` table naming the language and
//! a `[words]` table holding the list. Built-in languages are embedded in the
//! binary and parsed once on first use.

use crate::error::{ApiError, Result};
use excerpt_core::StopWords;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Embedded stop-word lists keyed by code and by lowercase name
static EMBEDDED: OnceLock<HashMap<String, Arc<StopWordList>>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct StopWordFile {
    metadata: StopWordMetadata,
    words: WordSection,
}

#[derive(Debug, Deserialize)]
struct StopWordMetadata {
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct WordSection {
    list: Vec<String>,
}

/// Stop words of one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordList {
    code: String,
    name: String,
    words: HashSet<String>,
}

impl StopWordList {
    /// Build a list from words; entries are lowercased and apostrophes folded
    pub fn new<I, S>(code: impl Into<String>, name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            code: code.into(),
            name: name.into(),
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse a list from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: StopWordFile =
            toml::from_str(content).map_err(|e| ApiError::StopWords(e.to_string()))?;
        if file.metadata.code.trim().is_empty() {
            return Err(ApiError::StopWords(
                "metadata.code must not be empty".to_string(),
            ));
        }
        Ok(Self::new(
            file.metadata.code,
            file.metadata.name,
            file.words.list,
        ))
    }

    /// Load a list from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ApiError::StopWords(msg) => ApiError::StopWords(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Built-in list for a language code or name (case-insensitive)
    pub fn builtin(language: &str) -> Result<Arc<Self>> {
        embedded()
            .get(&language.to_lowercase())
            .cloned()
            .ok_or_else(|| ApiError::Config(format!("unsupported language '{language}'")))
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWords for StopWordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace('\u{2019}', "'")
}

fn embedded() -> &'static HashMap<String, Arc<StopWordList>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        let sources = [("en", include_str!("../configs/stopwords/english.toml"))];
        for (code, content) in sources {
            match StopWordList::from_toml_str(content) {
                Ok(list) if list.code() == code => {
                    let list = Arc::new(list);
                    map.insert(list.name().to_lowercase(), Arc::clone(&list));
                    map.insert(code.to_string(), list);
                }
                Ok(list) => {
                    log::warn!(
                        "embedded stop words for '{code}' declare code '{}'",
                        list.code()
                    );
                }
                Err(e) => {
                    log::warn!("failed to load embedded stop words for '{code}': {e}");
                }
            }
        }

        map
    })
}

/// Codes of the built-in languages, sorted
pub fn available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded()
        .values()
        .map(|list| list.code())
        .collect();
    codes.sort_unstable();
    codes.dedup();
    codes
}
