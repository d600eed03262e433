use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json beside lists.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Left-pane cursor index
    #[serde(default)]
    pub cursor: usize,
}

/// Read .state.json from the data file's directory
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let path = data_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data file's directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = data_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
