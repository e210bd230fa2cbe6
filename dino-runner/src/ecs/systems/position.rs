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
//! Velocity integration and per-kind position rules

use crate::ecs::components::{ObstaclePhase, Position};
use crate::ecs::{ComponentMask, Entity, System, TickContext, World};
use crate::spawn;

/// Integrates velocity into position, then applies per-kind rules
///
/// - Player: pinned to the floor when dead, held at the crouch height when
///   ducking, held on the floor when not jumping, otherwise clamped between
///   the jump ceiling and the floor.
/// - Obstacles: phase updated from the new x; the respawn itself is left to
///   the obstacle type system later in the same tick.
/// - Clouds: moved back past the right edge once fully off the left.
#[derive(Debug)]
pub struct PositionSystem {
    warn_on_invalid: bool,
}

impl Default for PositionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSystem {
    /// Create the system
    pub fn new() -> Self {
        PositionSystem {
            warn_on_invalid: true,
        }
    }

    /// Set whether to warn when integration produces a non-finite position
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }

    fn integrate(&self, world: &mut World, entity: Entity) -> bool {
        let velocity = *world.velocities.get(entity);
        let position = world.positions.get_mut(entity);
        let next = Position::new(position.x + velocity.x, position.y + velocity.y);
        if !next.is_valid() {
            if self.warn_on_invalid {
                log::warn!("integration produced invalid position for {entity}, skipping");
            }
            return false;
        }
        *position = next;
        true
    }

    fn clamp_dino(world: &mut World, entity: Entity, ctx: &TickContext<'_>) {
        let config = ctx.config;
        let dino = *world.dinos.get(entity);
        let position = world.positions.get_mut(entity);
        position.y = if dino.is_dead || (!dino.is_jumping && !dino.is_ducking) {
            config.floor_y
        } else if dino.is_ducking {
            config.floor_y - config.duck_lift
        } else {
            position.y.clamp(config.jump_ceiling, config.floor_y)
        };
    }

    fn update_obstacle_phase(world: &mut World, entity: Entity, ctx: &TickContext<'_>) {
        let x = world.positions.get(entity).x;
        let w = world.sizes.get(entity).w;
        let obstacle = world.obstacles.get_mut(entity);
        obstacle.phase = if x < -(w + ctx.config.respawn_margin) {
            ObstaclePhase::OffscreenLeft
        } else if x < ctx.config.screen_width {
            ObstaclePhase::Onscreen
        } else {
            ObstaclePhase::OffscreenRight
        };
    }
}

impl System for PositionSystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        for entity in world.entities() {
            if !world.has_all(entity, ComponentMask::MOTION) {
                continue;
            }

            let is_dino = world.has_component(entity, ComponentMask::DINO);
            if is_dino && world.dinos.get(entity).is_dead {
                Self::clamp_dino(world, entity, ctx);
                continue;
            }

            if !self.integrate(world, entity) {
                continue;
            }

            if is_dino {
                Self::clamp_dino(world, entity, ctx);
            } else if world.has_all(entity, ComponentMask::OBSTACLE | ComponentMask::SIZE) {
                Self::update_obstacle_phase(world, entity, ctx);
            } else if world.has_all(entity, ComponentMask::CLOUD | ComponentMask::SIZE) {
                let x = world.positions.get(entity).x;
                if x < -world.sizes.get(entity).w {
                    spawn::place_cloud(world, entity, ctx.config, &mut *ctx.rng, ctx.scroll.offset());
                }
            }
        }
    }

    fn name(&self) -> &str {
        "PositionSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Dino, Obstacle, Size, Velocity};
    use crate::ecs::systems::test_support::Harness;

    #[test]
    fn test_integrates_plain_motion() {
        let mut h = Harness::new();
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(10.0, 20.0));
        h.world.insert(e, Velocity::new(1.5, -2.0));
        h.run(&mut PositionSystem::new());
        assert_eq!(*h.world.positions.get(e), Position::new(11.5, 18.0));
    }

    #[test]
    fn test_skips_entities_without_velocity() {
        let mut h = Harness::new();
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(10.0, 20.0));
        h.world.velocities.set(e, Velocity::new(5.0, 5.0));
        h.run(&mut PositionSystem::new());
        assert_eq!(*h.world.positions.get(e), Position::new(10.0, 20.0));
    }

    #[test]
    fn test_dino_never_sinks_below_floor() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(250.0, floor - 5.0));
        h.world.insert(e, Velocity::new(0.0, 40.0));
        h.world.insert(
            e,
            Dino {
                is_jumping: true,
                ..Dino::default()
            },
        );
        h.run(&mut PositionSystem::new());
        assert_eq!(h.world.positions.get(e).y, floor);
    }

    #[test]
    fn test_dino_clamped_at_ceiling() {
        let mut h = Harness::new();
        let ceiling = h.config.jump_ceiling;
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(250.0, ceiling + 3.0));
        h.world.insert(e, Velocity::new(0.0, -9.0));
        h.world.insert(
            e,
            Dino {
                is_jumping: true,
                ..Dino::default()
            },
        );
        h.run(&mut PositionSystem::new());
        assert_eq!(h.world.positions.get(e).y, ceiling);
    }

    #[test]
    fn test_dead_dino_pinned_to_floor() {
        let mut h = Harness::new();
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(300.0, 150.0));
        h.world.insert(e, Velocity::new(3.0, -9.0));
        h.world.insert(
            e,
            Dino {
                is_dead: true,
                is_jumping: true,
                ..Dino::default()
            },
        );
        h.run(&mut PositionSystem::new());
        assert_eq!(*h.world.positions.get(e), Position::new(300.0, h.config.floor_y));
    }

    #[test]
    fn test_obstacle_phase_transitions() {
        let mut h = Harness::new();
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Obstacle::default());
        h.world.insert(e, Size::new(25.0, 50.0));
        h.world.insert(e, Velocity::new(-6.0, 0.0));

        h.world.insert(e, Position::new(h.config.screen_width + 1.0, 0.0));
        h.run(&mut PositionSystem::new());
        assert_eq!(h.world.obstacles.get(e).phase, ObstaclePhase::Onscreen);

        h.world.positions.set(e, Position::new(-65.0, 0.0));
        h.run(&mut PositionSystem::new());
        assert_eq!(h.world.obstacles.get(e).phase, ObstaclePhase::Onscreen);

        h.run(&mut PositionSystem::new());
        assert_eq!(h.world.obstacles.get(e).phase, ObstaclePhase::OffscreenLeft);
    }

    #[test]
    fn test_invalid_integration_leaves_position() {
        let mut h = Harness::new();
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(1.0, 1.0));
        h.world.insert(e, Velocity::new(f32::NAN, 0.0));
        let mut system = PositionSystem::new();
        system.set_warn_on_invalid(false);
        h.run(&mut system);
        assert_eq!(*h.world.positions.get(e), Position::new(1.0, 1.0));
    }
}
