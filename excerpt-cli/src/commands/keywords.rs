//! Keywords command implementation

use super::CommonArgs;
use anyhow::Result;
use clap::Args;

/// Arguments for the keywords command
#[derive(Debug, Args)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of keywords per document
    #[arg(short = 'n', long, value_name = "N", default_value_t = 10)]
    pub count: usize,
}

impl KeywordsArgs {
    /// Execute the keywords command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting keyword extraction");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let summarizer =
            self.common
                .summarizer(&config, config.summary.sentences, false)?;

        let documents = self
            .common
            .process_files(|text| Ok(summarizer.keywords(text, self.count)?))?;

        let mut formatter = self.common.formatter(&config, documents.len())?;
        for (path, keywords) in &documents {
            formatter.begin_document(&path.display().to_string())?;
            for keyword in keywords {
                formatter.format_keyword(keyword)?;
            }
            formatter.end_document(None)?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::common;
    use super::*;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_execute_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("keywords.json");
        std::fs::write(
            &input,
            "Rust programs are fast. Rust programs are safe. Rust wins.",
        )
        .unwrap();

        let mut common = common(&input.display().to_string());
        common.output = Some(output.clone());
        common.format = Some(OutputFormat::Json);
        let args = KeywordsArgs { common, count: 2 };
        args.execute().unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let keywords = written[0]["keywords"].as_array().unwrap();
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0]["word"], "programs");
        assert_eq!(keywords[1]["word"], "rust");
    }
}
