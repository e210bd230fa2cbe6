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
//! Seams to the windowing and drawing backend
//!
//! The simulation never talks to a window directly. Each frame the
//! frontend samples its input devices into a [`FrameInput`] and hands the
//! session a [`Renderer`] to draw into.

use crate::assets::TextureId;
use crate::collision::Rect;

/// Input sampled once per rendered frame
///
/// `*_pressed` fields are edge-triggered (true only on the frame the key
/// went down); `duck_held` is level-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// Duck key is held
    pub duck_held: bool,
    /// Start/restart key went down this frame
    pub confirm_pressed: bool,
    /// Primary mouse button went down this frame, at this screen position
    pub click: Option<(f32, f32)>,
}

impl FrameInput {
    /// No keys down, no clicks
    pub fn idle() -> Self {
        FrameInput::default()
    }

    /// Only the jump key pressed
    pub fn jump() -> Self {
        FrameInput {
            jump_pressed: true,
            ..FrameInput::default()
        }
    }

    /// Only the duck key held
    pub fn duck() -> Self {
        FrameInput {
            duck_held: true,
            ..FrameInput::default()
        }
    }

    /// Only the confirm key pressed
    pub fn confirm() -> Self {
        FrameInput {
            confirm_pressed: true,
            ..FrameInput::default()
        }
    }

    /// Drop edge-triggered events, keeping held keys
    ///
    /// Used when one rendered frame runs several simulation ticks.
    pub fn without_edges(self) -> Self {
        FrameInput {
            duck_held: self.duck_held,
            ..FrameInput::default()
        }
    }

    /// Fold a newer sample into one not yet consumed
    ///
    /// Edges from either sample survive; held keys and the click position
    /// come from the newer one.
    pub fn merged(self, newer: FrameInput) -> Self {
        FrameInput {
            jump_pressed: self.jump_pressed || newer.jump_pressed,
            duck_held: newer.duck_held,
            confirm_pressed: self.confirm_pressed || newer.confirm_pressed,
            click: newer.click.or(self.click),
        }
    }
}

/// Drawing operations the session needs from the backend
pub trait Renderer {
    /// Blit a region of a texture with its top-left corner at (x, y)
    fn draw_texture_region(&mut self, texture: TextureId, source: Rect, x: f32, y: f32);

    /// Draw a line of solid-colour text
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Texture blit
    Texture {
        /// Texture drawn
        texture: TextureId,
        /// Source region
        source: Rect,
        /// Screen x
        x: f32,
        /// Screen y
        y: f32,
    },
    /// Text line
    Text {
        /// Content
        text: String,
        /// Screen x
        x: f32,
        /// Screen y
        y: f32,
    },
}

/// Renderer that stores draw calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder
    pub fn new() -> Self {
        RecordingRenderer::default()
    }

    /// Calls recorded since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text lines recorded since the last clear
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Texture { .. } => None,
        })
    }

    /// Forget every recorded call
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_texture_region(&mut self, texture: TextureId, source: Rect, x: f32, y: f32) {
        self.commands.push(DrawCommand::Texture {
            texture,
            source,
            x,
            y,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}
