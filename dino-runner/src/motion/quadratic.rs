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
//! Parabolic jump curve
//!
//! ```text
//! vy = (v_initial - v_drop) / (v_initial - 2F)² · (t - 2F)² + v_drop
//! ```
//!
//! where `F` is the minimum frame speed. The curve starts upward, crosses
//! zero once and approaches `v_drop` at `t = 2F`. It does not depend on the
//! scroll multiplier.

use super::JumpProfile;
use crate::config::GameConfig;

/// Parabolic jump, independent of game speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticJump {
    initial_velocity: f32,
    drop_velocity: f32,
    min_frame_speed: f32,
}

impl QuadraticJump {
    /// Create a curve from its launch and drop velocities
    pub fn new(initial_velocity: f32, drop_velocity: f32, min_frame_speed: f32) -> Self {
        QuadraticJump {
            initial_velocity,
            drop_velocity,
            min_frame_speed,
        }
    }

    /// Build from the configured constants
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.initial_jump_velocity,
            config.drop_velocity,
            config.min_frame_speed,
        )
    }
}

impl JumpProfile for QuadraticJump {
    fn name(&self) -> &str {
        "quadratic"
    }

    fn velocity(&self, t: u32, _multiplier: f32) -> f32 {
        let vertex = 2.0 * self.min_frame_speed;
        let scale = (self.initial_velocity - vertex).powi(2);
        if scale == 0.0 {
            return self.drop_velocity;
        }
        let k = (self.initial_velocity - self.drop_velocity) / scale;
        // Past the vertex the curve would turn upward again.
        let t = (t as f32).min(vertex);
        k * (t - vertex).powi(2) + self.drop_velocity
    }
}
