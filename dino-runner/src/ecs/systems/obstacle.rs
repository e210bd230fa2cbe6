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
//! Obstacle respawn: type reroll and texture selection

use crate::ecs::components::ObstaclePhase;
use crate::ecs::{ComponentMask, System, TickContext, World};
use crate::spawn;

/// Respawns obstacles that left the screen on the left
///
/// Consumes the `OffscreenLeft` phase set by the position system in the
/// same tick: rerolls the kind, picks a new strip region and cluster width,
/// toggles the wing animation and moves the obstacle back past the right
/// edge.
#[derive(Debug, Default)]
pub struct ObstacleTypeSystem {
    respawns: u64,
}

impl ObstacleTypeSystem {
    /// Create the system
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of respawns performed so far
    pub fn respawns(&self) -> u64 {
        self.respawns
    }
}

impl System for ObstacleTypeSystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        let required = ComponentMask::OBSTACLE
            | ComponentMask::POSITION
            | ComponentMask::SIZE
            | ComponentMask::SPRITE;
        for entity in world.entities() {
            if !world.has_all(entity, required) {
                continue;
            }
            if world.obstacles.get(entity).phase != ObstaclePhase::OffscreenLeft {
                continue;
            }
            spawn::place_obstacle(
                world,
                entity,
                ctx.config,
                ctx.textures,
                &mut *ctx.rng,
                ctx.scroll.offset(),
            );
            self.respawns += 1;
            log::trace!(
                "respawned {entity} as {:?} at x = {}",
                world.obstacles.get(entity).kind,
                world.positions.get(entity).x
            );
        }
    }

    fn name(&self) -> &str {
        "ObstacleTypeSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{ObstacleKind, Position};
    use crate::ecs::systems::test_support::Harness;

    #[test]
    fn test_respawns_only_offscreen_left() {
        let mut h = Harness::new();
        let pool = h.spawn_obstacles();
        h.world.positions.set(pool[0], Position::new(-500.0, 0.0));
        h.world.obstacles.get_mut(pool[0]).phase = ObstaclePhase::OffscreenLeft;
        h.world.obstacles.get_mut(pool[1]).phase = ObstaclePhase::Onscreen;
        h.world.positions.set(pool[1], Position::new(300.0, 0.0));

        let mut system = ObstacleTypeSystem::new();
        h.run(&mut system);

        assert_eq!(system.respawns(), 1);
        assert!(h.world.positions.get(pool[0]).x >= h.config.screen_width);
        assert_eq!(h.world.obstacles.get(pool[0]).phase, ObstaclePhase::OffscreenRight);
        assert_eq!(h.world.positions.get(pool[1]).x, 300.0);
    }

    #[test]
    fn test_respawn_adds_scroll_offset() {
        let mut h = Harness::new();
        let pool = h.spawn_obstacles();
        h.scroll.index = -150.0;
        h.world.obstacles.get_mut(pool[2]).phase = ObstaclePhase::OffscreenLeft;
        h.run(&mut ObstacleTypeSystem::new());
        let w = h.config.screen_width;
        let expected = w + 2.0 * w / h.config.obstacle_pool as f32 + 150.0;
        assert!((h.world.positions.get(pool[2]).x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_animation_tag_follows_kind() {
        let mut h = Harness::new();
        let pool = h.spawn_obstacles();
        let mut system = ObstacleTypeSystem::new();
        for _ in 0..100 {
            h.world.obstacles.get_mut(pool[0]).phase = ObstaclePhase::OffscreenLeft;
            h.run(&mut system);
            let animated = h.world.has_component(pool[0], ComponentMask::ANIMATION);
            let flyer = h.world.obstacles.get(pool[0]).kind == ObstacleKind::Pterodactyl;
            assert_eq!(animated, flyer);
        }
    }
}
