//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use excerpt_api::{available_languages, ScoringMode, StopWordList};

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in stop-word languages
    Languages,

    /// List available output formats
    Formats,

    /// List sentence scoring modes
    Modes,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        match self {
            ListCommands::Languages => {
                let mut lines = vec!["Available languages:".to_string()];
                for code in available_languages() {
                    let list = StopWordList::builtin(code)?;
                    lines.push(format!(
                        "  {:<4} {} ({} stop words)",
                        code,
                        list.name(),
                        list.len()
                    ));
                }
                Ok(lines)
            }
            ListCommands::Formats => {
                let mut lines = vec!["Available formats:".to_string()];
                lines.extend(
                    OutputFormat::value_variants()
                        .iter()
                        .map(|f| format!("  {:<9} {}", f.as_str(), f.description())),
                );
                Ok(lines)
            }
            ListCommands::Modes => Ok(vec![
                "Scoring modes:".to_string(),
                format!("  {:<9} sum of word ranks, favors long sentences", ScoringMode::Basic.as_str()),
                format!(
                    "  {:<9} average word rank, favors dense sentences",
                    ScoringMode::Compound.as_str()
                ),
            ]),
        }
    }
}
