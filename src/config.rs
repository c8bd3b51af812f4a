//! Game configuration loaded from JSON.
//!
//! Every section and field has a default, so a config file only needs to
//! mention the values it wants to change. A missing file is not an error: the
//! game runs on defaults and logs a warning.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the game config, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Invaders".to_string(),
            width: 1280,
            height: 720,
            tick_rate: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels per movement step
    pub speed: i32,
    /// Minimum time between two movement steps
    pub move_interval_ms: u64,
    /// Space the ship keeps from the right edge of the playfield
    pub right_margin: i32,
    /// Horizontal offset of the gun from the ship's left edge
    pub muzzle_offset: i32,
    pub fire_cooldown_ms: u64,
    pub lives: u32,
    pub invulnerable_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            width: 100,
            height: 70,
            speed: 20,
            move_interval_ms: 50,
            right_margin: 70,
            muzzle_offset: 50,
            fire_cooldown_ms: 250,
            lives: 3,
            invulnerable_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: u32,
    pub height: u32,
    pub min_speed: i32,
    /// Width of the speed re-roll range above `min_speed`
    pub speed_spread: i32,
    /// Wait between two patrol steps
    pub step_interval_ms: u64,
    /// Chance that a round uses the aggressive (firing) route
    pub aggressive_chance: f64,
    /// How long the firing sprite stays up after a shot
    pub fire_flash_ms: u64,
    pub muzzle_offset: i32,
    /// Space kept from the right edge when drifting right
    pub right_margin: i32,
    /// Space kept from the bottom edge when drifting down
    pub bottom_margin: i32,
    pub points: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        EnemyConfig {
            width: 64,
            height: 48,
            min_speed: 20,
            speed_spread: 40,
            step_interval_ms: 1500,
            aggressive_chance: 0.25,
            fire_flash_ms: 200,
            muzzle_offset: 32,
            right_margin: 200,
            bottom_margin: 100,
            points: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub player_speed: f32,
    pub enemy_speed: f32,
    /// Distance a player shot covers before it fizzles out
    pub player_range: f32,
    /// Distance an enemy shot covers before it fizzles out
    pub enemy_range: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        BulletConfig {
            player_speed: 600.0,
            enemy_speed: 300.0,
            player_range: 600.0,
            enemy_range: 720.0,
            width: 4,
            height: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    pub rows: u32,
    pub cols: u32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub spacing_x: i32,
    pub spacing_y: i32,
}

impl Default for FormationConfig {
    fn default() -> Self {
        FormationConfig {
            rows: 3,
            cols: 6,
            origin_x: 120,
            origin_y: 60,
            spacing_x: 140,
            spacing_y: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Added to the enemy minimum speed for every cleared wave
    pub wave_speed_bonus: i32,
    pub max_high_scores: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            wave_speed_bonus: 5,
            max_high_scores: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub ship_idle: String,
    pub ship_left: String,
    pub ship_right: String,
    pub ship_hit: String,
    pub enemy_idle: String,
    pub enemy_moving: String,
    pub enemy_firing: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        SpriteConfig {
            ship_idle: "assets/sprites/ship.png".to_string(),
            ship_left: "assets/sprites/ship_left.png".to_string(),
            ship_right: "assets/sprites/ship_right.png".to_string(),
            ship_hit: "assets/sprites/ship_hit.png".to_string(),
            enemy_idle: "assets/sprites/enemy.png".to_string(),
            enemy_moving: "assets/sprites/enemy.png".to_string(),
            enemy_firing: "assets/sprites/enemy_firing.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub width: u32,
    pub height: u32,
    pub star_count: usize,
    pub warp_factor: f64,
    /// Tick length of the starfield loop
    pub tick_ms: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        StarfieldConfig {
            width: 1280,
            height: 720,
            star_count: 300,
            warp_factor: 0.1,
            tick_ms: 7,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
    pub formation: FormationConfig,
    pub rules: RulesConfig,
    pub sprites: SpriteConfig,
    pub starfield: StarfieldConfig,
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config, falling back to defaults when the file doesn't exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config {} not found, using defaults", path.display());
            return Ok(GameConfig::default());
        }

        let config = Self::load_from_file(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "player": { "speed": 35 }, "seed": 7 }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.player.speed, 35);
        assert_eq!(config.player.lives, PlayerConfig::default().lives);
        assert_eq!(config.enemy, EnemyConfig::default());
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_default_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.enemy.step_interval_ms, 1500);
        assert_eq!(config.enemy.min_speed, 20);
        assert_eq!(config.starfield.star_count, 300);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let config = GameConfig::load_from_file(path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("invaders_config_that_does_not_exist.json");
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("invaders_bad_config_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let result = GameConfig::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_file(&path).ok();
    }
}
