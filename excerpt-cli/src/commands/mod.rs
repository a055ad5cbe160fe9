//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use excerpt_api::{ApiError, Config, StopWordList, Summarizer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub mod generate_config;
pub mod keywords;
pub mod list;
pub mod summarize;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize text files into their most central sentences
    Summarize(summarize::SummarizeArgs),

    /// Print the highest ranked words of text files
    Keywords(keywords::KeywordsArgs),

    /// Validate a configuration or stop-word file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Summarize(args) => args.execute(),
            Commands::Keywords(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Arguments shared by the commands that read documents
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in stop-word language [default: en]
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Stop-word list file (TOML) used instead of a built-in language
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub stop_words: Option<PathBuf>,

    /// Ignore words shorter than this many characters
    #[arg(long, value_name = "N")]
    pub min_word_length: Option<usize>,

    /// Decode input files with this encoding instead of UTF-8
    #[arg(long, value_name = "LABEL", env = "EXCERPT_ENCODING")]
    pub encoding: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        init_logging(self.verbose, self.quiet);
    }

    /// Load the configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Output format from the flag, falling back to the configuration
    pub fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => config.output_format(),
        }
    }

    /// Build a summarizer from the configuration and flag overrides
    pub fn summarizer(
        &self,
        config: &CliConfig,
        sentences: usize,
        keep_marks: bool,
    ) -> Result<Summarizer> {
        let mut engine = config.engine_config();
        if let Some(length) = self.min_word_length {
            engine.minimum_word_length = length;
        }
        engine.keep_marks = engine.keep_marks || keep_marks;

        let builder = Config::builder().engine(engine).sentences(sentences);
        let builder = match &self.stop_words {
            Some(path) => {
                let list = StopWordList::from_file(path).with_context(|| {
                    format!("Failed to load stop words: {}", path.display())
                })?;
                log::info!("Using {} stop words from {}", list.len(), path.display());
                builder.stop_words(Arc::new(list))
            }
            None => builder.language(
                self.language
                    .as_deref()
                    .unwrap_or(&config.summary.language),
            ),
        };

        let config = builder.build().map_err(|e| match e {
            ApiError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        })?;
        Ok(Summarizer::with_config(config)?)
    }

    /// Read every input file and run `f` on its text, in parallel
    ///
    /// Results come back in input order.
    pub fn process_files<T, F>(&self, f: F) -> Result<Vec<(PathBuf, T)>>
    where
        T: Send,
        F: Fn(&str) -> Result<T> + Sync,
    {
        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let encoding = self.encoding.as_deref();
        let results: Vec<Result<T>> = files
            .par_iter()
            .map(|path| {
                log::info!("Processing {}", path.display());
                let text = FileReader::read_text(path, encoding)?;
                let value = f(&text).map_err(|e| {
                    CliError::ProcessingError(format!("{}: {e:#}", path.display()))
                })?;
                progress.file_completed(&path.display().to_string());
                Ok(value)
            })
            .collect();
        progress.finish();

        files
            .into_iter()
            .zip(results)
            .map(|(path, result)| result.map(|value| (path, value)))
            .collect()
    }

    /// Formatter for the chosen format and destination
    pub fn formatter(
        &self,
        config: &CliConfig,
        documents: usize,
    ) -> Result<Box<dyn OutputFormatter>> {
        let format = self.output_format(config)?;
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(create_formatter(
            format,
            writer,
            &config.output.separator,
            documents > 1,
        ))
    }
}

/// Install `env_logger`, mapping `-v` counts to a default filter
///
/// `RUST_LOG` still takes precedence. Nothing is installed when `quiet`.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
