//! Start-up configuration read from `BLOCKFALL_*` environment variables

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::JsonFileStore;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bag seed for a new game
    pub seed: u32,
    pub profile_path: PathBuf,
    /// Overrides the profile's ghost setting when set
    pub ghost: Option<bool>,
    pub tick_ms: u64,
    /// Leaderboard name used on game over
    pub name: String,
    /// Neither read nor write the profile
    pub no_save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            profile_path: JsonFileStore::default_path(),
            ghost: None,
            tick_ms: TICK_MS,
            name: "player".to_string(),
            no_save: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable lookup; unparsable values fall back to defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let seed = var("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let profile_path = var("BLOCKFALL_PROFILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(JsonFileStore::default_path);

        let ghost = var("BLOCKFALL_GHOST").and_then(|s| parse_flag(&s));

        let tick_ms = var("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(TICK_MS);

        let name = var("BLOCKFALL_NAME")
            .or_else(|| var("USER"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "player".to_string());

        let no_save = var("BLOCKFALL_NO_SAVE").is_some();

        Self {
            seed,
            profile_path,
            ghost,
            tick_ms,
            name,
            no_save,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
