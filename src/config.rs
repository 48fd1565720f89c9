use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Rule constants
pub const FOOD_TARGET_COUNT: usize = 3;
pub const MAX_POWER_UPS: usize = 2;
pub const POWER_UP_SPAWN_ODDS: u32 = 200; // one in N per tick
pub const POWER_UP_LIFETIME: u32 = 400; // ticks on the board
pub const POWER_UP_DURATION: u32 = 300; // ticks once consumed
pub const POISON_INVULNERABILITY: u32 = 60;
pub const POISON_SHRINK: usize = 2;
pub const POISON_SHRINK_MIN_LEN: usize = 3; // shrink only above this length
pub const FOODS_PER_LEVEL: u32 = 10;
pub const INITIAL_SPEED: u32 = 8; // ticks per second
pub const SPEED_BOOST_FACTOR: f32 = 1.5;
pub const HIGH_SCORE_SLOTS: usize = 10;

pub const CONFIG_PATH: &str = "snake_config.json";
pub const MAX_GRID_SIDE: i32 = 500;
pub const MAX_TILE_SIZE: i32 = 100;

/// Shape of the play field and the window around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub tile_size: i32,
    pub high_score_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            tile_size: 20,
            high_score_path: "high_scores.json".to_string(),
        }
    }
}

impl GameConfig {
    /// Reads `path` if it exists. A missing or malformed file falls back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(cfg) if cfg.in_range() => cfg,
            Ok(_) => {
                log::warn!(
                    "{}: grid sides must be 1..={MAX_GRID_SIDE} and tile size 1..={MAX_TILE_SIZE}, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(err) => {
                log::warn!("{err:#}, using default config");
                Self::default()
            }
        }
    }

    fn in_range(&self) -> bool {
        (1..=MAX_GRID_SIDE).contains(&self.grid_width)
            && (1..=MAX_GRID_SIDE).contains(&self.grid_height)
            && (1..=MAX_TILE_SIZE).contains(&self.tile_size)
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).context("parsing game config")
    }

    pub fn window_width(&self) -> i32 {
        self.grid_width * self.tile_size
    }

    pub fn window_height(&self) -> i32 {
        self.grid_height * self.tile_size
    }
}
