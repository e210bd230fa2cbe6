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
//! Headless sessions driven by a simple autopilot
//!
//! Each session is single-threaded and deterministic for a given seed.
//! With the `parallel` feature enabled, [`run_batch`] spreads independent
//! sessions across the Rayon thread pool; without it the sessions run one
//! after another and produce the same reports.

use crate::assets::Textures;
use crate::collision::CacheStats;
use crate::config::GameConfig;
use crate::ecs::components::ObstacleKind;
use crate::error::GameResult;
use crate::game::{GameState, Session};
use crate::platform::FrameInput;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ticks of warning the autopilot wants before an obstacle arrives
const LOOKAHEAD_TICKS: f32 = 12.0;

/// Choose input for the next tick
///
/// Confirms through the menu and game-over screens. While playing, ducks
/// under an approaching pterodactyl and jumps an approaching cactus.
pub fn autopilot(session: &Session) -> FrameInput {
    match session.state() {
        GameState::Menu | GameState::GameOver => FrameInput::confirm(),
        GameState::Playing => {
            let world = session.world();
            let dino = session.dino();
            let position = world.positions.get(dino);
            let reach = position.x + world.sizes.get(dino).w;
            let speed = session.config().scroll_speed * session.scroll().multiplier;

            let ahead = session
                .obstacles()
                .iter()
                .filter(|&&e| world.positions.get(e).x + world.sizes.get(e).w > position.x)
                .min_by(|&&a, &&b| {
                    world.positions.get(a).x.total_cmp(&world.positions.get(b).x)
                });
            let Some(&obstacle) = ahead else {
                return FrameInput::idle();
            };

            let gap = world.positions.get(obstacle).x - reach;
            if gap > speed * LOOKAHEAD_TICKS {
                return FrameInput::idle();
            }
            match world.obstacles.get(obstacle).kind {
                ObstacleKind::Pterodactyl => FrameInput::duck(),
                ObstacleKind::CactusLarge | ObstacleKind::CactusSmall => FrameInput::jump(),
            }
        }
    }
}

/// Outcome of one headless session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Seed the session ran with
    pub seed: u64,
    /// Simulation steps taken
    pub ticks: u64,
    /// Times the player died
    pub deaths: u32,
    /// Best score across all runs of the session
    pub best_score: u32,
    /// Mask cache use over the session
    pub mask_stats: CacheStats,
}

/// Run one session for `ticks` steps under the autopilot
pub fn run_session(
    config: &GameConfig,
    textures: Arc<Textures>,
    seed: u64,
    ticks: u64,
) -> GameResult<SessionReport> {
    let mut session = Session::new(config.clone(), textures, seed)?;
    let mut deaths = 0;
    let mut best_score = 0;
    let mut previous = session.state();
    for _ in 0..ticks {
        let input = autopilot(&session);
        let state = session.tick(input);
        if previous == GameState::Playing && state == GameState::GameOver {
            deaths += 1;
        }
        best_score = best_score.max(session.score());
        previous = state;
    }
    log::debug!("seed {seed}: {deaths} deaths, best score {best_score}");
    Ok(SessionReport {
        seed,
        ticks,
        deaths,
        best_score,
        mask_stats: session.mask_stats(),
    })
}

/// Run one session per seed, in parallel when available
///
/// Reports come back in seed order.
#[cfg(feature = "parallel")]
pub fn run_batch(
    config: &GameConfig,
    textures: Arc<Textures>,
    seeds: &[u64],
    ticks: u64,
) -> GameResult<Vec<SessionReport>> {
    seeds
        .par_iter()
        .map(|&seed| run_session(config, Arc::clone(&textures), seed, ticks))
        .collect()
}

/// Run one session per seed (sequential fallback when parallel feature disabled)
#[cfg(not(feature = "parallel"))]
pub fn run_batch(
    config: &GameConfig,
    textures: Arc<Textures>,
    seeds: &[u64],
    ticks: u64,
) -> GameResult<Vec<SessionReport>> {
    seeds
        .iter()
        .map(|&seed| run_session(config, Arc::clone(&textures), seed, ticks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textures() -> Arc<Textures> {
        Arc::new(Textures::placeholder())
    }

    #[test]
    fn test_autopilot_confirms_menu() {
        let session = Session::new(GameConfig::default(), textures(), 1).unwrap();
        assert_eq!(autopilot(&session), FrameInput::confirm());
    }

    #[test]
    fn test_session_is_deterministic() {
        let config = GameConfig::default();
        let a = run_session(&config, textures(), 5, 2_000).unwrap();
        let b = run_session(&config, textures(), 5, 2_000).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ticks, 2_000);
    }

    #[test]
    fn test_batch_in_seed_order() {
        let config = GameConfig::default();
        let reports = run_batch(&config, textures(), &[3, 1, 2], 500).unwrap();
        let seeds: Vec<u64> = reports.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![3, 1, 2]);
        assert_eq!(reports[1], run_session(&config, textures(), 1, 500).unwrap());
    }

    #[test]
    fn test_batch_propagates_setup_errors() {
        let config = GameConfig {
            cloud_pool: 500,
            ..GameConfig::default()
        };
        assert!(run_batch(&config, textures(), &[1], 10).is_err());
    }
}
