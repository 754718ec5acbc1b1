use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tictactoe_engine::Player;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_AUTO_MOVE_DELAY_MS: u64 = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigMode {
    TwoHuman,
    HumanVsAuto,
}

/// Which mark the automated side plays in HumanVsAuto games.
/// `Random` is resolved with `rand` when a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoSide {
    Fixed(Player),
    Random,
}

impl AutoSide {
    pub fn resolve(self) -> Player {
        match self {
            AutoSide::Fixed(player) => player,
            AutoSide::Random => {
                if rand::random() {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub mode: ConfigMode,
    pub auto_side: AutoSide,
    pub auto_move_delay_ms: u64,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.auto_move_delay_ms > MAX_AUTO_MOVE_DELAY_MS {
            return Err(format!(
                "auto_move_delay_ms must not exceed {}",
                MAX_AUTO_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ConfigMode::HumanVsAuto,
            auto_side: AutoSide::Fixed(Player::O),
            auto_move_delay_ms: 500,
        }
    }
}

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Loads the config, falling back to defaults when the file is absent.
pub fn load_config(file_path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

pub fn save_config(file_path: &str, config: &Config) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(file_path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
