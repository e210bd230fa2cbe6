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
//! Sinusoidal jump waveform
//!
//! # Algorithm
//!
//! ```text
//! A  = (v_initial - v_drop) * 0.25 m
//! f  = 0.25 m / min_frame_speed
//! vy = A sin(2π f t + π/2)
//! ```
//!
//! With the default constants `A` is negative, so the first half period
//! rises and the second half falls. Raising `m` shortens the period and
//! raises the peak speed by the same factor, leaving the apex height
//! unchanged.

use super::JumpProfile;
use crate::config::GameConfig;
use std::f32::consts::{FRAC_PI_2, PI};

const SCALE: f32 = 0.25;

/// Cosine-shaped jump, scaled by the scroll multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineJump {
    initial_velocity: f32,
    drop_velocity: f32,
    min_frame_speed: f32,
}

impl SineJump {
    /// Create a waveform from its launch and drop velocities
    ///
    /// # Panics
    ///
    /// Panics if `min_frame_speed` is not positive and finite
    pub fn new(initial_velocity: f32, drop_velocity: f32, min_frame_speed: f32) -> Self {
        assert!(
            min_frame_speed > 0.0 && min_frame_speed.is_finite(),
            "min_frame_speed must be positive and finite"
        );
        SineJump {
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

    /// Signed amplitude at scroll multiplier `m`
    pub fn amplitude(&self, m: f32) -> f32 {
        (self.initial_velocity - self.drop_velocity) * SCALE * m
    }

    /// Frequency in cycles per tick at scroll multiplier `m`
    pub fn frequency(&self, m: f32) -> f32 {
        SCALE * m / self.min_frame_speed
    }

    /// Ticks for one full waveform cycle
    pub fn period(&self, m: f32) -> f32 {
        1.0 / self.frequency(m)
    }
}

impl JumpProfile for SineJump {
    fn name(&self) -> &str {
        "sine"
    }

    fn velocity(&self, t: u32, multiplier: f32) -> f32 {
        let phase = 2.0 * PI * self.frequency(multiplier) * t as f32 + FRAC_PI_2;
        self.amplitude(multiplier) * phase.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SineJump {
        SineJump::from_config(&GameConfig::default())
    }

    #[test]
    fn test_starts_at_full_amplitude() {
        let jump = profile();
        assert_eq!(jump.amplitude(1.0), -9.0);
        assert!((jump.velocity(0, 1.0) - jump.amplitude(1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_rises_then_falls() {
        let jump = profile();
        let quarter = (jump.period(1.0) / 4.0) as u32;
        let half = (jump.period(1.0) / 2.0) as u32;
        for t in 0..quarter {
            assert!(jump.velocity(t, 1.0) < 0.0, "tick {t} should rise");
        }
        for t in (quarter + 1)..half {
            assert!(jump.velocity(t, 1.0) > 0.0, "tick {t} should fall");
        }
    }

    #[test]
    fn test_multiplier_shortens_period() {
        let jump = profile();
        assert!((jump.period(1.0) - 240.0).abs() < 1e-2);
        assert!((jump.period(2.0) - 120.0).abs() < 1e-2);
    }

    #[test]
    #[should_panic]
    fn test_rejects_zero_frame_speed() {
        SineJump::new(-24.0, 12.0, 0.0);
    }
}
