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
//! Jump and duck flags from input and height

use crate::config::GameConfig;
use crate::ecs::components::Dino;
use crate::ecs::{ComponentMask, System, TickContext, World};

/// Whether the player stands on the floor, crouched or not
pub fn is_grounded(dino: &Dino, y: f32, config: &GameConfig) -> bool {
    if dino.is_ducking {
        y >= config.floor_y - config.duck_lift
    } else {
        y >= config.floor_y
    }
}

/// Derives `is_jumping` and `is_ducking` for the player
///
/// A jump starts on the jump key's down edge while grounded and lasts for
/// as long as the player is off the floor. Ducking needs the floor and the
/// duck key held, and never overlaps a jump.
#[derive(Debug, Default)]
pub struct PoseSystem;

impl System for PoseSystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        for entity in world.entities() {
            if !world.has_all(entity, ComponentMask::DINO | ComponentMask::POSITION) {
                continue;
            }
            let y = world.positions.get(entity).y;
            let dino = world.dinos.get_mut(entity);
            if dino.is_dead {
                continue;
            }
            let grounded = is_grounded(dino, y, ctx.config);
            dino.is_jumping = !grounded || ctx.input.jump_pressed;
            dino.is_ducking = !dino.is_jumping && grounded && ctx.input.duck_held;
        }
    }

    fn name(&self) -> &str {
        "PoseSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Position;
    use crate::ecs::systems::test_support::Harness;
    use crate::ecs::Entity;
    use crate::platform::FrameInput;

    fn dino_at(h: &mut Harness, y: f32) -> Entity {
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Position::new(250.0, y));
        h.world.insert(e, Dino::default());
        e
    }

    #[test]
    fn test_jump_edge_on_floor() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let e = dino_at(&mut h, floor);
        h.input = FrameInput::jump();
        h.run(&mut PoseSystem);
        assert!(h.world.dinos.get(e).is_jumping);
        assert!(!h.world.dinos.get(e).is_ducking);
    }

    #[test]
    fn test_airborne_keeps_jumping() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let e = dino_at(&mut h, floor - 40.0);
        h.run(&mut PoseSystem);
        assert!(h.world.dinos.get(e).is_jumping);
    }

    #[test]
    fn test_landing_ends_jump() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let e = dino_at(&mut h, floor);
        h.world.dinos.get_mut(e).is_jumping = true;
        h.run(&mut PoseSystem);
        assert!(!h.world.dinos.get(e).is_jumping);
    }

    #[test]
    fn test_duck_only_on_floor() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let grounded = dino_at(&mut h, floor);
        let airborne = dino_at(&mut h, floor - 40.0);
        h.input = FrameInput::duck();
        h.run(&mut PoseSystem);
        assert!(h.world.dinos.get(grounded).is_ducking);
        assert!(!h.world.dinos.get(airborne).is_ducking);
    }

    #[test]
    fn test_jump_wins_over_duck() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let e = dino_at(&mut h, floor);
        h.input = FrameInput {
            jump_pressed: true,
            duck_held: true,
            ..FrameInput::default()
        };
        h.run(&mut PoseSystem);
        assert!(h.world.dinos.get(e).is_jumping);
        assert!(!h.world.dinos.get(e).is_ducking);
    }

    #[test]
    fn test_dead_dino_flags_frozen() {
        let mut h = Harness::new();
        let floor = h.config.floor_y;
        let e = dino_at(&mut h, floor);
        h.world.dinos.get_mut(e).is_dead = true;
        h.input = FrameInput::jump();
        h.run(&mut PoseSystem);
        assert!(!h.world.dinos.get(e).is_jumping);
    }
}
