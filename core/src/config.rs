use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::game::Difficulty;

const CONFIG_FILE_NAME: &str = "tictac_config.yaml";

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
        }
    }
}

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Reads the config from `path`. A missing file is not an error: the
/// default config is returned so a first launch works out of the box.
pub fn load_config(path: &str) -> Result<GameConfig, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(GameConfig::default()),
        Err(err) => Err(format!("Failed to read config file: {}", err)),
    }
}

pub fn save_config(path: &str, config: &GameConfig) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
