//! Configuration module
//!
//! The CLI reads an optional TOML file with `[summary]`, `[ranking]` and
//! `[output]` tables. Every key has a default, so a partial file is valid.
//! Command-line flags take precedence over file values.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use excerpt_api::{EngineConfig, ScoringMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Summary selection
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Ranking parameters
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Summary-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// Number of sentences to select
    pub sentences: usize,

    /// Scoring mode, `basic` or `compound`
    pub mode: String,

    /// Built-in stop-word language
    pub language: String,

    /// Words shorter than this many characters are ignored
    pub minimum_word_length: usize,

    /// Re-attach split-off terminal punctuation
    pub keep_marks: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentences: 5,
            mode: ScoringMode::Basic.to_string(),
            language: "en".to_string(),
            minimum_word_length: 0,
            keep_marks: false,
        }
    }
}

/// Ranking-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    /// Co-occurrence window size
    pub window_size: usize,

    /// Damping factor
    pub damping: f64,

    /// Iteration cap
    pub max_iterations: usize,

    /// Convergence threshold on the largest rank change
    pub threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            window_size: engine.window_size,
            damping: engine.damping,
            max_iterations: engine.max_iterations,
            threshold: engine.threshold,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Separator placed between sentences in text output
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            separator: "\n".to_string(),
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Scoring mode named in `[summary]`
    pub fn scoring_mode(&self) -> Result<ScoringMode> {
        self.summary
            .mode
            .parse()
            .map_err(|e: String| CliError::ConfigError(e).into())
    }

    /// Output format named in `[output]`
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.format, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{}'", self.output.format))
                .into()
        })
    }

    /// Ranking configuration derived from `[ranking]` and `[summary]`
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            window_size: self.ranking.window_size,
            damping: self.ranking.damping,
            max_iterations: self.ranking.max_iterations,
            threshold: self.ranking.threshold,
            minimum_word_length: self.summary.minimum_word_length,
            keep_marks: self.summary.keep_marks,
        }
    }

    fn check(&self) -> Result<()> {
        if self.summary.sentences == 0 {
            return Err(CliError::ConfigError(
                "summary.sentences must be a positive integer".to_string(),
            )
            .into());
        }
        self.scoring_mode()?;
        self.output_format()?;
        self.engine_config()
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(())
    }

    /// Commented template with every key at its default
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# Excerpt configuration
#
# Pass with `excerpt summarize -c <file>`. Command-line flags override
# the values below.

[summary]
# Number of sentences in the summary
sentences = {sentences}

# "basic" sums word ranks, "compound" averages them per word
mode = "{mode}"

# Built-in stop-word language (see `excerpt list languages`)
language = "{language}"

# Words shorter than this many characters are ignored (0 keeps all)
minimum_word_length = {min_len}

# Put split-off terminal punctuation back on selected sentences
keep_marks = {keep_marks}

[ranking]
# Words closer than this many positions are linked in the word graph
window_size = {window}

# Damping factor, strictly between 0 and 1
damping = {damping}

# Upper bound on rank iterations
max_iterations = {iterations}

# Iteration stops once no rank moves by this much
threshold = {threshold:e}

[output]
# text, json or markdown
format = "{format}"

# Separator between sentences in text output
separator = {separator:?}
"#,
            sentences = defaults.summary.sentences,
            mode = defaults.summary.mode,
            language = defaults.summary.language,
            min_len = defaults.summary.minimum_word_length,
            keep_marks = defaults.summary.keep_marks,
            window = defaults.ranking.window_size,
            damping = defaults.ranking.damping,
            iterations = defaults.ranking.max_iterations,
            threshold = defaults.ranking.threshold,
            format = defaults.output.format,
            separator = defaults.output.separator,
        )
    }
}
