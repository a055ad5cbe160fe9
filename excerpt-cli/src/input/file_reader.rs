//! File reading utilities

use anyhow::{Context, Result};
use excerpt_api::Input;
use std::path::Path;

/// File reader with optional legacy encoding support
pub struct FileReader;

impl FileReader {
    /// Read a file as text
    ///
    /// Without an encoding the file must be valid UTF-8. With one, bytes are
    /// decoded through the named encoding (e.g. `windows-1252`).
    pub fn read_text(path: &Path, encoding: Option<&str>) -> Result<String> {
        let input = Input::from_file(path);
        let text = match encoding {
            Some(label) => input.read_text_with_encoding(label),
            None => input.read_text(),
        };
        text.with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
