use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub region: String,
    pub bucket: String,
    /// Spreadsheet webhook endpoint. Absent means export is disabled.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sheet_webhook_url: Option<String>,
}

fn config_dir() -> Result<PathBuf, SessionError> {
    let base = dirs::config_dir()
        .ok_or_else(|| SessionError::Config("no config directory found".to_string()))?;
    Ok(base.join("locomo-check"))
}

fn config_path() -> Result<PathBuf, SessionError> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> Result<CheckConfig, SessionError> {
    let path = config_path()?;
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        SessionError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;
    let config: CheckConfig = serde_json::from_str(&contents)
        .map_err(|e| SessionError::Config(format!("failed to parse config: {e}")))?;
    Ok(config)
}

pub fn save_config(config: &CheckConfig) -> Result<(), SessionError> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| {
        SessionError::Config(format!("failed to create {}: {e}", dir.display()))
    })?;
    let path = config_path()?;
    let contents = serde_json::to_string_pretty(config)
        .map_err(|e| SessionError::Config(format!("failed to serialize config: {e}")))?;
    std::fs::write(&path, contents).map_err(|e| {
        SessionError::Config(format!("failed to write config at {}: {e}", path.display()))
    })?;
    Ok(())
}
