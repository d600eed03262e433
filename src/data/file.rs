use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::Group;

use super::source::InMemorySource;

/// Error type for data-file loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// UI overrides from the `[ui]` table of `lists.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Parsed `lists.toml`: the group tree plus optional UI overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub ui: UiConfig,
}

/// The loaded data source plus where it came from (None = built-in seed).
/// The path anchors `.state.json` persistence.
#[derive(Debug)]
pub struct LoadedData {
    pub source: InMemorySource,
    pub ui: UiConfig,
    pub path: Option<PathBuf>,
}

/// Find `lists.toml` by walking up from the given directory.
pub fn discover_data_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join("lists.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and parse a `lists.toml` file.
pub fn load_data_file(path: &Path) -> Result<LoadedData, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: DataFile = toml::from_str(&text).map_err(|e| DataError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(LoadedData {
        source: InMemorySource::new(file.groups),
        ui: file.ui,
        path: Some(path.to_path_buf()),
    })
}

/// Resolve the data source: an explicit `-f` path, else the nearest
/// `lists.toml` walking up from the current directory, else the seed data.
pub fn load_data(explicit: Option<&Path>) -> Result<LoadedData, DataError> {
    if let Some(path) = explicit {
        return load_data_file(path);
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match discover_data_file(&cwd) {
        Some(path) => load_data_file(&path),
        None => Ok(LoadedData {
            source: InMemorySource::seed(),
            ui: UiConfig::default(),
            path: None,
        }),
    }
}
