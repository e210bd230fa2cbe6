// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Game tuning configuration
//!
//! All tuning constants live in [`GameConfig`]. Defaults reproduce the
//! classic runner feel; a TOML file may override any subset of fields.
//!
//! ```
//! use dino_runner::config::{GameConfig, CollisionStrategy};
//!
//! let config = GameConfig::from_toml_str("collision = \"bounding_box\"\nobstacle_pool = 4").unwrap();
//! assert_eq!(config.collision, CollisionStrategy::BoundingBox);
//! assert_eq!(config.obstacle_pool, 4);
//! assert_eq!(config.screen_width, 800.0);
//! ```

use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Vertical velocity curve used while the player is airborne
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JumpProfileKind {
    /// Cosine-shaped waveform scaled by the scroll multiplier
    #[default]
    Sine,
    /// Earlier parabolic curve, independent of game speed
    Quadratic,
}

/// How obstacle hits are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollisionStrategy {
    /// Inset bounding boxes only
    BoundingBox,
    /// Bounding-box prefilter followed by an opaque-pixel overlap test
    #[default]
    PixelMask,
}

/// Tuning constants for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in pixels
    pub screen_width: f32,
    /// Window height in pixels
    pub screen_height: f32,
    /// Simulation ticks per second
    pub fps: u32,

    /// Resting y of the player's top edge
    pub floor_y: f32,
    /// Highest y the player's top edge may reach
    pub jump_ceiling: f32,
    /// Upward launch velocity (negative is up)
    pub initial_jump_velocity: f32,
    /// Terminal falling velocity
    pub drop_velocity: f32,
    /// Frame count that sets the jump waveform period
    pub min_frame_speed: f32,
    /// Jump curve in use
    pub jump_profile: JumpProfileKind,
    /// Player x at session start
    pub dino_start_x: f32,
    /// Player x once the run-in slide is over
    pub dino_play_x: f32,
    /// How far the crouched pose is raised above the floor
    pub duck_lift: f32,
    /// Player animation frames per second
    pub dino_frame_rate: u32,
    /// Flyer wing frames per second
    pub pterodactyl_frame_rate: u32,

    /// Base scroll speed in pixels per tick
    pub scroll_speed: f32,
    /// Scroll multiplier at session start
    pub initial_scroll_multiplier: f32,
    /// Per-tick geometric growth of the scroll multiplier
    pub acceleration: f32,
    /// Score interval that triggers an extra multiplier step
    pub milestone_points: u32,
    /// Multiplier added at each score milestone
    pub milestone_step: f32,
    /// Upper bound on the scroll multiplier
    pub max_scroll_multiplier: f32,
    /// Ticks between score increments
    pub score_interval: u64,

    /// Number of pooled obstacles
    pub obstacle_pool: usize,
    /// Distance past the left edge before an obstacle respawns
    pub respawn_margin: f32,
    /// Largest cactus group drawn as one obstacle
    pub max_cluster: u32,
    /// How far large cacti sink below the footline
    pub large_cactus_sink: f32,
    /// How far small cacti sit above the footline
    pub small_cactus_raise: f32,
    /// Gap between a flyer's bottom edge and the footline
    pub pterodactyl_hover: f32,

    /// Number of pooled clouds
    pub cloud_pool: usize,
    /// Cloud speed as a fraction of the scroll speed
    pub cloud_speed: f32,
    /// Vertical gap between cloud rows
    pub cloud_row_gap: f32,

    /// Hit detection strategy
    pub collision: CollisionStrategy,
    /// Share of the player box trimmed before the box test
    pub dino_inset: f32,
    /// Share of an obstacle box trimmed before the box test
    pub obstacle_inset: f32,
    /// Reuse pixel masks across ticks
    pub cache_masks: bool,

    /// Horizon y relative to the player's footline
    pub horizon_offset: f32,
    /// Directory holding the sprite sheets
    pub asset_dir: PathBuf,
    /// File holding the persisted high score
    pub high_score_path: PathBuf,
    /// Draw the tick rate overlay
    pub show_fps: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 800.0,
            screen_height: 480.0,
            fps: 60,

            floor_y: 280.0,
            jump_ceiling: 100.0,
            initial_jump_velocity: -24.0,
            drop_velocity: 12.0,
            min_frame_speed: 60.0,
            jump_profile: JumpProfileKind::Sine,
            dino_start_x: 250.0,
            dino_play_x: 800.0 / 2.0 + 88.0,
            duck_lift: 0.0,
            dino_frame_rate: 8,
            pterodactyl_frame_rate: 6,

            scroll_speed: 6.0,
            initial_scroll_multiplier: 1.0,
            acceleration: 1.0001,
            milestone_points: 100,
            milestone_step: 0.05,
            max_scroll_multiplier: 13.0 / 6.0,
            score_interval: 10,

            obstacle_pool: 3,
            respawn_margin: 50.0,
            max_cluster: 3,
            large_cactus_sink: 4.0,
            small_cactus_raise: 2.0,
            pterodactyl_hover: 64.0,

            cloud_pool: 6,
            cloud_speed: 0.2,
            cloud_row_gap: 10.0,

            collision: CollisionStrategy::PixelMask,
            dino_inset: 0.05,
            obstacle_inset: 0.40,
            cache_masks: true,

            horizon_offset: 38.0,
            asset_dir: PathBuf::from("resources"),
            high_score_path: PathBuf::from("highscore.bin"),
            show_fps: false,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML; missing fields keep their defaults
    pub fn from_toml_str(source: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(source).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check that the values can drive a session
    pub fn validate(&self) -> GameResult<()> {
        if self.fps == 0 {
            return Err(GameError::Config("fps must be positive".into()));
        }
        if !(self.min_frame_speed > 0.0) {
            return Err(GameError::Config("min_frame_speed must be positive".into()));
        }
        for (name, rate) in [
            ("dino_frame_rate", self.dino_frame_rate),
            ("pterodactyl_frame_rate", self.pterodactyl_frame_rate),
        ] {
            if rate == 0 || rate > self.fps {
                return Err(GameError::Config(format!(
                    "{name} must be between 1 and fps ({}), got {rate}",
                    self.fps
                )));
            }
        }
        if self.obstacle_pool == 0 || self.cloud_pool == 0 {
            return Err(GameError::Config("entity pools must not be empty".into()));
        }
        if self.max_cluster == 0 {
            return Err(GameError::Config("max_cluster must be at least 1".into()));
        }
        if self.dino_play_x <= self.dino_start_x {
            return Err(GameError::Config(
                "dino_play_x must lie to the right of dino_start_x".into(),
            ));
        }
        if self.jump_ceiling >= self.floor_y {
            return Err(GameError::Config("jump_ceiling must lie above floor_y".into()));
        }
        if self.acceleration < 1.0 || self.initial_scroll_multiplier <= 0.0 {
            return Err(GameError::Config(
                "scroll multiplier must start positive and never shrink".into(),
            ));
        }
        for (name, inset) in [("dino_inset", self.dino_inset), ("obstacle_inset", self.obstacle_inset)] {
            if !(0.0..1.0).contains(&inset) {
                return Err(GameError::Config(format!("{name} must be in [0, 1), got {inset}")));
            }
        }
        if self.score_interval == 0 {
            return Err(GameError::Config("score_interval must be positive".into()));
        }
        Ok(())
    }

    /// Ticks that make up one animation frame at `frame_rate`
    pub fn ticks_per_frame(&self, frame_rate: u32) -> u32 {
        (self.fps / frame_rate.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dino_play_x, 488.0);
        assert_eq!(config.ticks_per_frame(config.dino_frame_rate), 7);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("fps = 30\njump_profile = \"quadratic\"").unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.jump_profile, JumpProfileKind::Quadratic);
        assert_eq!(config.floor_y, 280.0);
    }

    #[test]
    fn test_rejects_empty_pool() {
        let result = GameConfig::from_toml_str("obstacle_pool = 0");
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_inset() {
        let result = GameConfig::from_toml_str("obstacle_inset = 1.5");
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = GameConfig::from_toml_str("fps = \"fast\"");
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load("/no/such/dino-runner.toml");
        assert!(matches!(result, Err(GameError::Io { .. })));
    }
}
