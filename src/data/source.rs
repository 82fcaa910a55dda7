//! Festival sources.

use super::Festival;
use crate::error::{FestivoError, Result};
use std::io::Read;
use std::path::PathBuf;

/// Something that can produce the full list of festivals.
pub trait FestivalSource: Send {
    /// Short description for status lines and logs.
    fn describe(&self) -> String;

    /// Fetch every festival the source knows about.
    fn fetch(&self) -> Result<Vec<Festival>>;
}

/// Parse a festival API payload (a JSON array of records).
pub fn parse_festivals(json: &str) -> Result<Vec<Festival>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a saved festival API response from disk, or stdin for `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read_payload(&self) -> Result<String> {
        if self.reads_stdin() {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .map_err(|e| FestivoError::source_read(&self.path, e))?;
            return Ok(payload);
        }

        std::fs::read_to_string(&self.path).map_err(|e| FestivoError::source_read(&self.path, e))
    }
}

impl FestivalSource for JsonFileSource {
    fn describe(&self) -> String {
        if self.reads_stdin() {
            "stdin".to_string()
        } else {
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| self.path.display().to_string())
        }
    }

    fn fetch(&self) -> Result<Vec<Festival>> {
        let payload = self.read_payload()?;
        let festivals = parse_festivals(&payload)?;
        tracing::info!("Read {} festivals from {}", festivals.len(), self.path.display());
        Ok(festivals)
    }
}
