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
//! Per-kind velocity rules

use super::pose::is_grounded;
use crate::config::GameConfig;
use crate::ecs::{ComponentMask, Entity, System, TickContext, World};
use crate::motion::{self, run_in_velocity, JumpProfile};

/// Computes each moving entity's velocity for the next tick
///
/// - Player: vertical velocity from the jump profile while jumping, zero
///   otherwise; horizontal velocity from the run-in curve until the play
///   position is reached.
/// - Obstacles: scroll left at `scroll_speed * m`.
/// - Clouds: scroll left at `cloud_speed * scroll_speed * m`.
pub struct VelocitySystem {
    jump: Box<dyn JumpProfile>,
}

impl VelocitySystem {
    /// Create the system with the configured jump profile
    pub fn new(config: &GameConfig) -> Self {
        Self::with_profile(motion::jump_profile(config))
    }

    /// Create the system with an explicit jump profile
    pub fn with_profile(jump: Box<dyn JumpProfile>) -> Self {
        VelocitySystem { jump }
    }

    /// Name of the jump profile in use
    pub fn jump_profile(&self) -> &str {
        self.jump.name()
    }

    fn update_dino(&self, world: &mut World, entity: Entity, ctx: &TickContext<'_>) {
        let config = ctx.config;
        let position = *world.positions.get(entity);
        let dino = world.dinos.get_mut(entity);
        let velocity = world.velocities.get_mut(entity);

        if dino.is_dead {
            velocity.x = 0.0;
            velocity.y = 0.0;
            return;
        }

        if dino.is_jumping {
            velocity.y = self.jump.velocity(dino.jump_frame_count, ctx.scroll.multiplier);
            dino.jump_frame_count += 1;
        } else {
            velocity.y = 0.0;
            dino.jump_frame_count = 0;
        }

        if position.x < config.dino_play_x && is_grounded(dino, position.y, config) {
            velocity.x = run_in_velocity(position.x, config.dino_start_x, config.dino_play_x);
            dino.slide_frame_count += 1;
        } else {
            velocity.x = 0.0;
            dino.slide_frame_count = 0;
        }
    }
}

impl System for VelocitySystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        let scroll = ctx.config.scroll_speed * ctx.scroll.multiplier;
        for entity in world.entities() {
            if !world.has_all(entity, ComponentMask::MOTION) {
                continue;
            }
            let mask = world.mask(entity);
            if mask.contains(ComponentMask::DINO) {
                self.update_dino(world, entity, ctx);
            } else if mask.contains(ComponentMask::OBSTACLE) {
                let velocity = world.velocities.get_mut(entity);
                velocity.x = -scroll;
                velocity.y = 0.0;
            } else if mask.contains(ComponentMask::CLOUD) {
                let velocity = world.velocities.get_mut(entity);
                velocity.x = -ctx.config.cloud_speed * scroll;
                velocity.y = 0.0;
            }
        }
    }

    fn name(&self) -> &str {
        "VelocitySystem"
    }
}
