//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::stopwords::StopWordList;
use excerpt_core::StopWords;
use excerpt_engine::EngineConfig;
use std::fmt;
use std::sync::Arc;

/// Default number of summary sentences
pub const DEFAULT_SENTENCES: usize = 5;

/// Default stop-word language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Where the summarizer takes its stop words from
#[derive(Clone)]
pub enum StopWordSource {
    /// A built-in language list
    Language(String),
    /// A caller-provided provider
    Custom(Arc<dyn StopWords>),
    /// No stop-word filtering
    Disabled,
}

impl fmt::Debug for StopWordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopWordSource::Language(code) => f.debug_tuple("Language").field(code).finish(),
            StopWordSource::Custom(_) => f.debug_tuple("Custom").field(&"<dyn StopWords>").finish(),
            StopWordSource::Disabled => f.write_str("Disabled"),
        }
    }
}

/// High-level configuration for summarization
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of sentences to select
    pub sentences: usize,
    /// Stop-word source
    pub stop_words: StopWordSource,
    /// Ranking configuration
    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sentences: DEFAULT_SENTENCES,
            stop_words: StopWordSource::Language(DEFAULT_LANGUAGE.to_string()),
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Create a configuration tuned for tight convergence
    pub fn precise() -> Self {
        Self {
            engine: EngineConfig::precise(),
            ..Self::default()
        }
    }

    /// Create a fast configuration
    pub fn fast() -> Self {
        Self {
            engine: EngineConfig::fast(),
            ..Self::default()
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the configured stop-word provider
    pub fn stop_word_provider(&self) -> Result<Option<Arc<dyn StopWords>>> {
        match &self.stop_words {
            StopWordSource::Language(code) => {
                let list: Arc<dyn StopWords> = StopWordList::builtin(code)?;
                Ok(Some(list))
            }
            StopWordSource::Custom(provider) => Ok(Some(Arc::clone(provider))),
            StopWordSource::Disabled => Ok(None),
        }
    }

    /// Check the configuration without building a summarizer
    pub fn validate(&self) -> Result<()> {
        if self.sentences == 0 {
            return Err(ApiError::Config(
                "sentence count must be a positive integer".to_string(),
            ));
        }
        self.engine.validate()?;
        if let StopWordSource::Language(code) = &self.stop_words {
            StopWordList::builtin(code)?;
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Use the built-in stop words of a language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.stop_words = StopWordSource::Language(language.into());
        self
    }

    /// Set the number of sentences to select (must be positive)
    pub fn sentences(mut self, count: usize) -> Self {
        self.config.sentences = count;
        self
    }

    /// Set the minimum word length
    pub fn minimum_word_length(mut self, length: usize) -> Self {
        self.config.engine.minimum_word_length = length;
        self
    }

    /// Use a custom stop-word provider
    pub fn stop_words(mut self, provider: Arc<dyn StopWords>) -> Self {
        self.config.stop_words = StopWordSource::Custom(provider);
        self
    }

    /// Disable stop-word filtering
    pub fn no_stop_words(mut self) -> Self {
        self.config.stop_words = StopWordSource::Disabled;
        self
    }

    /// Re-attach split-off terminal punctuation to summary sentences
    pub fn keep_marks(mut self, keep: bool) -> Self {
        self.config.engine.keep_marks = keep;
        self
    }

    /// Replace the ranking configuration
    ///
    /// `minimum_word_length` and `keep_marks` are taken from `engine` as well.
    pub fn engine(mut self, engine: EngineConfig) -> Self {
        self.config.engine = engine;
        self
    }

    /// Use the precise ranking preset
    pub fn precise(mut self) -> Self {
        self.config.engine = EngineConfig {
            minimum_word_length: self.config.engine.minimum_word_length,
            keep_marks: self.config.engine.keep_marks,
            ..EngineConfig::precise()
        };
        self
    }

    /// Use the fast ranking preset
    pub fn fast(mut self) -> Self {
        self.config.engine = EngineConfig {
            minimum_word_length: self.config.engine.minimum_word_length,
            keep_marks: self.config.engine.keep_marks,
            ..EngineConfig::fast()
        };
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use excerpt_core::NoStopWords;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sentences, 5);
        assert!(matches!(&config.stop_words, StopWordSource::Language(code) if code == "en"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .sentences(8)
            .minimum_word_length(3)
            .keep_marks(true)
            .fast()
            .build()
            .unwrap();

        assert_eq!(config.sentences, 8);
        assert_eq!(config.engine.minimum_word_length, 3);
        assert!(config.engine.keep_marks);
        assert_eq!(config.engine.max_iterations, EngineConfig::fast().max_iterations);
    }

    #[test]
    fn test_zero_sentences_rejected() {
        assert!(matches!(
            Config::builder().sentences(0).build(),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(matches!(
            Config::builder().language("xx").build(),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_engine_rejected() {
        let engine = EngineConfig {
            window_size: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Config::builder().engine(engine).build(),
            Err(ApiError::Engine(_))
        ));
    }

    #[test]
    fn test_stop_word_sources() {
        let custom = Config::builder()
            .stop_words(Arc::new(NoStopWords))
            .build()
            .unwrap();
        assert!(custom.stop_word_provider().unwrap().is_some());
        assert_eq!(format!("{:?}", custom.stop_words), "Custom(\"<dyn StopWords>\")");

        let disabled = Config::builder().no_stop_words().build().unwrap();
        assert!(disabled.stop_word_provider().unwrap().is_none());

        let english = Config::default().stop_word_provider().unwrap();
        assert!(english.map_or(false, |words| words.contains("the")));
    }
}
