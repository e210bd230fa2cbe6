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
//! System execution framework
//!
//! Systems are per-tick passes over the world. Everything a pass needs
//! beyond the component tables (tuning, input, scroll state, textures, the
//! random source) arrives through a [`TickContext`] built fresh each tick.

use crate::assets::Textures;
use crate::collision::MaskCache;
use crate::config::GameConfig;
use crate::ecs::World;
use crate::game::ScrollState;
use crate::platform::FrameInput;
use rand::rngs::StdRng;

/// Shared, non-component state visible to every system during one tick
pub struct TickContext<'a> {
    /// Tuning constants
    pub config: &'a GameConfig,
    /// Input sampled for this tick
    pub input: FrameInput,
    /// Scroll multiplier and background offset
    pub scroll: ScrollState,
    /// Decoded sprite sheets
    pub textures: &'a Textures,
    /// Session random source
    pub rng: &'a mut StdRng,
    /// Pixel masks for the collision test
    pub masks: &'a mut MaskCache,
}

/// Trait for systems that operate on the ECS world
///
/// A system must skip any entity missing a component it needs and leave
/// that entity's data untouched.
pub trait System: Send {
    /// Execute the system on the world
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>);

    /// Get the name of this system for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct CountingSystem {
        run_count: usize,
    }

    impl System for CountingSystem {
        fn run(&mut self, _world: &mut World, ctx: &mut TickContext<'_>) {
            if ctx.input.jump_pressed {
                self.run_count += 1;
            }
        }
    }

    #[test]
    fn test_system_sees_context() {
        let config = GameConfig::default();
        let textures = Textures::placeholder();
        let mut rng = StdRng::seed_from_u64(1);
        let mut masks = MaskCache::new(false);
        let mut ctx = TickContext {
            config: &config,
            input: FrameInput::jump(),
            scroll: ScrollState::new(&config),
            textures: &textures,
            rng: &mut rng,
            masks: &mut masks,
        };
        let mut world = World::new();
        let mut system = CountingSystem { run_count: 0 };
        system.run(&mut world, &mut ctx);
        assert_eq!(system.run_count, 1);
        assert!(system.name().ends_with("CountingSystem"));
    }
}
