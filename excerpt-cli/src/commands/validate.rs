//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::{ArgGroup, Args};
use excerpt_api::StopWordList;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["config", "stop_words"])))]
pub struct ValidateArgs {
    /// Configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop-word list file to validate
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.config {
            report(path, "configuration", validate_config(path))?;
        }
        if let Some(path) = &self.stop_words {
            report(path, "stop-word list", validate_stop_words(path))?;
        }
        Ok(())
    }
}

fn validate_config(path: &Path) -> Result<Vec<String>> {
    let config = CliConfig::from_file(path)?;
    StopWordList::builtin(&config.summary.language)?;
    Ok(vec![
        format!("Sentences: {}", config.summary.sentences),
        format!("Mode: {}", config.scoring_mode()?),
        format!("Language: {}", config.summary.language),
        format!("Format: {}", config.output_format()?.as_str()),
    ])
}

fn validate_stop_words(path: &Path) -> Result<Vec<String>> {
    let list = StopWordList::from_file(path)?;
    Ok(vec![
        format!("Language code: {}", list.code()),
        format!("Language name: {}", list.name()),
        format!("Words: {}", list.len()),
    ])
}

fn report(path: &Path, kind: &str, outcome: Result<Vec<String>>) -> Result<()> {
    println!("Validating {kind}: {}", path.display());
    match outcome {
        Ok(details) => {
            println!("✓ The {kind} is valid!");
            for line in details {
                println!("  {line}");
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ The {kind} is invalid!");
            println!("  Error: {e:#}");
            Err(anyhow::anyhow!("Validation failed: {e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = temp_file(&CliConfig::template());
        let args = ValidateArgs {
            config: Some(file.path().to_path_buf()),
            stop_words: None,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_config_unknown_language() {
        let file = temp_file("[summary]\nlanguage = \"xx\"\n");
        assert!(validate_config(file.path()).is_err());
    }

    #[test]
    fn test_validate_stop_words() {
        let file = temp_file(
            "[metadata]\ncode = \"cu\"\nname = \"Custom\"\n\n[words]\nlist = [\"foo\", \"bar\"]\n",
        );
        let details = validate_stop_words(file.path()).unwrap();
        assert!(details.contains(&"Words: 2".to_string()));
    }

    #[test]
    fn test_validate_invalid_stop_words() {
        let file = temp_file("[metadata]\ncode = \"\"\nname = \"Test\"\n");
        let args = ValidateArgs {
            config: None,
            stop_words: Some(file.path().to_path_buf()),
        };
        assert!(args.execute().is_err());
    }
}
