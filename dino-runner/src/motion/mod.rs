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
//! Closed-form motion curves for the player
//!
//! The player never integrates forces. Its vertical velocity is read off a
//! waveform indexed by the number of ticks since the jump began, and its
//! horizontal velocity during the opening slide is read off an easing curve
//! indexed by its current x.
//!
//! # Jump profiles
//!
//! - **Sine**: `vy = A sin(2π f t + π/2)` with amplitude and frequency both
//!   scaled by the scroll multiplier, so jumps get quicker as the game speeds
//!   up.
//! - **Quadratic**: an earlier parabolic curve that ignores the multiplier.
//!
//! Velocities are in pixels per tick, negative is up.

use crate::config::{GameConfig, JumpProfileKind};
use std::f32::consts::PI;

mod quadratic;
mod sine;

pub use quadratic::QuadraticJump;
pub use sine::SineJump;

/// Vertical velocity curve for a jump
///
/// `t` is the number of ticks since the jump started and `multiplier` the
/// current scroll multiplier.
pub trait JumpProfile: Send + Sync {
    /// Get the name of this profile
    fn name(&self) -> &str;

    /// Vertical velocity `t` ticks into the jump
    fn velocity(&self, t: u32, multiplier: f32) -> f32;
}

/// Build the jump profile selected in the configuration
pub fn jump_profile(config: &GameConfig) -> Box<dyn JumpProfile> {
    match config.jump_profile {
        JumpProfileKind::Sine => Box::new(SineJump::from_config(config)),
        JumpProfileKind::Quadratic => Box::new(QuadraticJump::from_config(config)),
    }
}

/// Horizontal velocity of the opening slide
///
/// Follows `-sin(π (x - mid) / (play - start))` where `mid` is halfway
/// between `start` and `play`. Callers zero the velocity once `x` reaches
/// `play`; this function only evaluates the curve.
///
/// # Examples
///
/// ```
/// use dino_runner::motion::run_in_velocity;
///
/// assert!(run_in_velocity(250.0, 250.0, 488.0) > 0.0);
/// assert_eq!(run_in_velocity(369.0, 250.0, 488.0), 0.0);
/// ```
pub fn run_in_velocity(x: f32, start: f32, play: f32) -> f32 {
    let span = play - start;
    if span <= 0.0 {
        return 0.0;
    }
    let mid = (start + play) * 0.5;
    let v = -(PI * (x - mid) / span).sin();
    // -0.0 at the midpoint
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_signs() {
        let (start, play) = (250.0, 488.0);
        assert!(run_in_velocity(start, start, play) > 0.0);
        assert_eq!(run_in_velocity(369.0, start, play), 0.0);
        assert!(run_in_velocity(400.0, start, play) < 0.0);
    }

    #[test]
    fn test_run_in_peak_at_start() {
        let v = run_in_velocity(250.0, 250.0, 488.0);
        assert!((v - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_run_in_degenerate_span() {
        assert_eq!(run_in_velocity(10.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn test_profile_selection() {
        let mut config = GameConfig::default();
        assert_eq!(jump_profile(&config).name(), "sine");
        config.jump_profile = JumpProfileKind::Quadratic;
        assert_eq!(jump_profile(&config).name(), "quadratic");
    }
}
