//! Summarize command implementation

use super::CommonArgs;
use anyhow::Result;
use clap::Args;
use excerpt_api::{Input, ScoringMode};

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of sentences in each summary [default: 5]
    #[arg(short = 'n', long, value_name = "N")]
    pub sentences: Option<usize>,

    /// Sentence scoring mode [default: basic]
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Put split-off terminal punctuation back on selected sentences
    #[arg(long)]
    pub keep_marks: bool,
}

/// Sentence scoring modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Sum of word ranks; favors long sentences
    Basic,
    /// Word ranks averaged per word; favors dense sentences
    Compound,
}

impl From<Mode> for ScoringMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Basic => ScoringMode::Basic,
            Mode::Compound => ScoringMode::Compound,
        }
    }
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting summarization");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let mode = match self.mode {
            Some(mode) => mode.into(),
            None => config.scoring_mode()?,
        };
        let sentences = self.sentences.unwrap_or(config.summary.sentences);
        let summarizer = self.common.summarizer(&config, sentences, self.keep_marks)?;

        let documents = self
            .common
            .process_files(|text| Ok(summarizer.process(Input::from_text(text), mode)?))?;

        let mut formatter = self.common.formatter(&config, documents.len())?;
        for (path, output) in &documents {
            let metadata = &output.metadata;
            log::debug!(
                "{}: {} of {} sentences, {} words ranked in {} iterations",
                path.display(),
                output.sentences.len(),
                metadata.total_sentences,
                metadata.vocabulary_size,
                metadata.iterations
            );
            if !metadata.converged && metadata.vocabulary_size > 0 {
                log::warn!(
                    "{}: ranking stopped after {} iterations without converging",
                    path.display(),
                    metadata.iterations
                );
            }

            formatter.begin_document(&path.display().to_string())?;
            for sentence in &output.sentences {
                formatter.format_sentence(sentence)?;
            }
            formatter.end_document(Some(metadata))?;
        }
        formatter.finish()
    }
}
