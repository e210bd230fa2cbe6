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
//! Game session state machine
//!
//! A [`Session`] owns the world, the pipeline and the scroll and score
//! bookkeeping. The frontend calls [`Session::tick`] once per simulation
//! step and [`Session::render`] once per displayed frame.
//!
//! ```text
//! Menu --confirm--> Playing --player dies--> GameOver --confirm/click--> Playing
//! ```

use crate::assets::{TextureKind, Textures};
use crate::collision::{CacheStats, MaskCache, Rect};
use crate::config::GameConfig;
use crate::ecs::components::Velocity;
use crate::ecs::systems::{render_sprites, AnimationSelectionSystem};
use crate::ecs::{Entity, Pipeline, System, TickContext, World};
use crate::error::GameResult;
use crate::platform::{FrameInput, Renderer};
use crate::score::{HighScore, HighScoreStore};
use crate::spawn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the first confirm
    Menu,
    /// Simulation running
    Playing,
    /// Player died; waiting for a restart
    GameOver,
}

/// Difficulty ramp and background scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Speed scalar applied to scrolling, obstacles and the jump waveform
    pub multiplier: f32,
    /// Horizon x offset; starts at zero and decreases, wrapping at the
    /// horizon texture width
    pub index: f32,
}

impl ScrollState {
    /// Scroll state at the start of a session
    pub fn new(config: &GameConfig) -> Self {
        ScrollState {
            multiplier: config.initial_scroll_multiplier,
            index: 0.0,
        }
    }

    /// Distance scrolled within the current horizon cycle, never negative
    pub fn offset(&self) -> f32 {
        -self.index
    }

    /// Scroll the background by one tick
    pub fn advance(&mut self, config: &GameConfig, wrap_width: f32) {
        self.index -= config.scroll_speed * self.multiplier;
        if wrap_width > 0.0 {
            while self.index <= -wrap_width {
                self.index += wrap_width;
            }
        }
    }
}

/// One game, from menu to any number of restarts
pub struct Session {
    config: GameConfig,
    textures: Arc<Textures>,
    world: World,
    pipeline: Pipeline,
    rng: StdRng,
    masks: MaskCache,
    store: Option<HighScoreStore>,
    state: GameState,
    scroll: ScrollState,
    frame_counter: u64,
    score: u32,
    next_milestone: u32,
    high_score: HighScore,
    dino: Entity,
    obstacles: Vec<Entity>,
    clouds: Vec<Entity>,
}

impl Session {
    /// Set up the world and pools
    ///
    /// Fails if the configuration is invalid or the pools do not fit in the
    /// world.
    pub fn new(config: GameConfig, textures: Arc<Textures>, seed: u64) -> GameResult<Self> {
        config.validate()?;
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let scroll = ScrollState::new(&config);

        let dino = spawn::spawn_dino(&mut world, &config, &textures)?;
        let obstacles =
            spawn::spawn_obstacles(&mut world, &config, &textures, &mut rng, scroll.offset())?;
        let clouds = spawn::spawn_clouds(&mut world, &config, &textures, &mut rng, scroll.offset())?;
        log::info!(
            "session ready: {} entities ({} obstacles, {} clouds), seed {seed}",
            world.entity_count(),
            obstacles.len(),
            clouds.len()
        );

        Ok(Session {
            pipeline: Pipeline::standard(&config),
            masks: MaskCache::new(config.cache_masks),
            next_milestone: config.milestone_points,
            config,
            textures,
            world,
            rng,
            store: None,
            state: GameState::Menu,
            scroll,
            frame_counter: 0,
            score: 0,
            high_score: HighScore::default(),
            dino,
            obstacles,
            clouds,
        })
    }

    /// Attach a high-score store and read the saved score from it
    pub fn with_high_score_store(mut self, store: HighScoreStore) -> Self {
        self.high_score = store.load();
        log::info!("high score {} from {}", self.high_score.value(), store.path().display());
        self.store = Some(store);
        self
    }

    /// Advance the session by one simulation step
    pub fn tick(&mut self, input: FrameInput) -> GameState {
        match self.state {
            GameState::Menu => {
                if input.confirm_pressed {
                    log::info!("game started");
                    self.state = GameState::Playing;
                }
            }
            GameState::Playing => self.step(input),
            GameState::GameOver => {
                let clicked = input
                    .click
                    .is_some_and(|(x, y)| self.restart_button().contains_point(x, y));
                if input.confirm_pressed || clicked {
                    self.restart();
                }
            }
        }
        self.state
    }

    fn step(&mut self, input: FrameInput) {
        let mut ctx = TickContext {
            config: &self.config,
            input,
            scroll: self.scroll,
            textures: self.textures.as_ref(),
            rng: &mut self.rng,
            masks: &mut self.masks,
        };
        self.pipeline.run(&mut self.world, &mut ctx);

        self.frame_counter += 1;
        let horizon_w = self.textures.get(TextureKind::Horizon).width() as f32;
        self.scroll.advance(&self.config, horizon_w);
        self.scroll.multiplier *= self.config.acceleration;

        if self.frame_counter % self.config.score_interval == 0 {
            self.score += self.scroll.multiplier.max(1.0).floor() as u32;
        }
        while self.config.milestone_points > 0 && self.score >= self.next_milestone {
            self.scroll.multiplier += self.config.milestone_step;
            self.next_milestone += self.config.milestone_points;
            log::debug!("milestone {}: multiplier {:.3}", self.score, self.scroll.multiplier);
        }
        self.scroll.multiplier = self.scroll.multiplier.min(self.config.max_scroll_multiplier);

        if self.world.dinos.get(self.dino).is_dead {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.state = GameState::GameOver;
        self.show_dead_pose();
        log::info!(
            "game over: score {} after {} ticks",
            self.score,
            self.frame_counter
        );
        let score = HighScore(i32::try_from(self.score).unwrap_or(i32::MAX));
        if score > self.high_score {
            self.high_score = score;
            if let Some(store) = &self.store {
                if let Err(e) = store.save(score) {
                    log::warn!("could not save high score: {e}");
                }
            }
        }
    }

    // Collision runs last in the pipeline, so the killing tick has already
    // posed and placed the player. Redo both for the dead pose.
    fn show_dead_pose(&mut self) {
        let dino = self.dino;
        self.world.positions.get_mut(dino).y = self.config.floor_y;
        self.world.velocities.set(dino, Velocity::zero());

        let mut ctx = TickContext {
            config: &self.config,
            input: FrameInput::idle(),
            scroll: self.scroll,
            textures: self.textures.as_ref(),
            rng: &mut self.rng,
            masks: &mut self.masks,
        };
        AnimationSelectionSystem.run(&mut self.world, &mut ctx);

        let frame = self.world.animations.get(dino).sheet_frame();
        let source = &mut self.world.sprites.get_mut(dino).source;
        source.x = source.w * frame as f32;
    }

    /// Reset everything but the high score and start playing again
    pub fn restart(&mut self) {
        self.score = 0;
        self.next_milestone = self.config.milestone_points;
        self.frame_counter = 0;
        self.scroll = ScrollState::new(&self.config);
        let offset = self.scroll.offset();

        spawn::reset_dino(&mut self.world, self.dino, &self.config, &self.textures);
        for &entity in &self.obstacles {
            self.world.velocities.set(entity, Velocity::zero());
            spawn::place_obstacle(
                &mut self.world,
                entity,
                &self.config,
                &self.textures,
                &mut self.rng,
                offset,
            );
        }
        for &entity in &self.clouds {
            self.world.velocities.set(entity, Velocity::zero());
            spawn::place_cloud(&mut self.world, entity, &self.config, &mut self.rng, offset);
        }
        self.state = GameState::Playing;
        log::info!("game restarted");
    }

    /// Screen region of the restart button
    pub fn restart_button(&self) -> Rect {
        let sheet = self.textures.get(TextureKind::Restart);
        let (w, h) = (sheet.width() as f32, sheet.height() as f32);
        Rect::new(
            (self.config.screen_width - w) * 0.5,
            (self.config.screen_height - h) * 0.5,
            w,
            h,
        )
    }

    /// Draw the current frame
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let horizon = self.textures.get(TextureKind::Horizon);
        let horizon_w = horizon.width() as f32;
        let source = Rect::new(0.0, 0.0, horizon_w, horizon.height() as f32);
        let horizon_y = spawn::footline(&self.config, &self.textures) - self.config.horizon_offset;
        renderer.draw_texture_region(horizon.id(), source, self.scroll.index, horizon_y);
        renderer.draw_texture_region(
            horizon.id(),
            source,
            self.scroll.index + horizon_w,
            horizon_y,
        );

        render_sprites(&self.world, renderer);

        let right = self.config.screen_width;
        renderer.draw_text(&format!("{:05}", self.score), right - 90.0, 30.0, 20.0);
        renderer.draw_text(&self.high_score.to_string(), right - 220.0, 30.0, 20.0);

        let center_y = self.config.screen_height * 0.5;
        match self.state {
            GameState::Menu => {
                renderer.draw_text("Press SPACE to start", right * 0.5 - 130.0, center_y, 30.0);
            }
            GameState::Playing => {}
            GameState::GameOver => {
                let button = self.restart_button();
                renderer.draw_text("G A M E  O V E R", right * 0.5 - 110.0, button.y - 20.0, 30.0);
                let restart = self.textures.get(TextureKind::Restart);
                renderer.draw_texture_region(
                    restart.id(),
                    Rect::new(0.0, 0.0, button.w, button.h),
                    button.x,
                    button.y,
                );
            }
        }
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen, including this session
    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    /// Scroll multiplier and background offset
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Ticks played since the last (re)start
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// The player entity
    pub fn dino(&self) -> Entity {
        self.dino
    }

    /// Obstacle pool, in slot order
    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    /// Cloud pool
    pub fn clouds(&self) -> &[Entity] {
        &self.clouds
    }

    /// The world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Tuning in use
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Sprite sheets in use
    pub fn textures(&self) -> &Arc<Textures> {
        &self.textures
    }

    /// Pixel mask cache statistics
    pub fn mask_stats(&self) -> CacheStats {
        self.masks.stats()
    }
}
