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
//! Windowed frontend
//!
//! Reads `dino-runner.toml` from the working directory when present, loads
//! the sprite sheets from the configured resource directory, and runs the
//! simulation at a fixed step regardless of the display refresh rate.

use dino_runner::assets::{TextureId, Textures};
use dino_runner::collision::Rect as SourceRect;
use dino_runner::config::GameConfig;
use dino_runner::game::Session;
use dino_runner::platform::{FrameInput, Renderer};
use dino_runner::score::HighScoreStore;
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const CONFIG_FILE: &str = "dino-runner.toml";

// Longest stretch of wall time simulated in one rendered frame.
const MAX_FRAME_TIME: f32 = 0.25;

fn load_config() -> GameConfig {
    if !Path::new(CONFIG_FILE).exists() {
        return GameConfig::default();
    }
    match GameConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring {CONFIG_FILE}: {e}");
            GameConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    let config = load_config();
    Conf {
        window_title: "Dino Runner".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

struct MacroquadRenderer {
    textures: HashMap<TextureId, Texture2D>,
}

impl MacroquadRenderer {
    fn upload(textures: &Textures) -> Self {
        let textures = textures
            .iter()
            .map(|texture| {
                let gpu = Texture2D::from_rgba8(
                    texture.width() as u16,
                    texture.height() as u16,
                    texture.rgba(),
                );
                gpu.set_filter(FilterMode::Nearest);
                (texture.id(), gpu)
            })
            .collect();
        MacroquadRenderer { textures }
    }
}

impl Renderer for MacroquadRenderer {
    fn draw_texture_region(&mut self, texture: TextureId, source: SourceRect, x: f32, y: f32) {
        let Some(gpu) = self.textures.get(&texture) else {
            return;
        };
        draw_texture_ex(
            gpu,
            x,
            y,
            WHITE,
            DrawTextureParams {
                source: Some(Rect::new(source.x, source.y, source.w, source.h)),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        macroquad::text::draw_text(text, x, y, size, DARKGRAY);
    }
}

fn sample_input() -> FrameInput {
    FrameInput {
        jump_pressed: is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Up),
        duck_held: is_key_down(KeyCode::Down),
        confirm_pressed: is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Enter),
        click: is_mouse_button_pressed(MouseButton::Left).then(mouse_position),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = load_config();
    let textures = match Textures::load(&config.asset_dir) {
        Ok(textures) => Arc::new(textures),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let seed = macroquad::miniquad::date::now().to_bits();
    let store = HighScoreStore::new(config.high_score_path.clone());
    let mut session = match Session::new(config.clone(), Arc::clone(&textures), seed) {
        Ok(session) => session.with_high_score_store(store),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let mut renderer = MacroquadRenderer::upload(&textures);

    let step = 1.0 / config.fps as f32;
    let mut accumulator = 0.0;
    let mut pending = FrameInput::idle();
    loop {
        pending = pending.merged(sample_input());
        accumulator += get_frame_time().min(MAX_FRAME_TIME);
        while accumulator >= step {
            session.tick(pending);
            pending = pending.without_edges();
            accumulator -= step;
        }

        clear_background(WHITE);
        session.render(&mut renderer);
        if config.show_fps {
            macroquad::text::draw_text(&format!("FPS {}", get_fps()), 10.0, 20.0, 20.0, GRAY);
        }
        next_frame().await;
    }
}
