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
//! Sprite sheet and frame range selection for the player

use crate::assets::TextureKind;
use crate::ecs::components::{Dino, Size};
use crate::ecs::{ComponentMask, System, TickContext, World};

/// Visual pose of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DinoPose {
    /// Standing still or airborne
    Idle,
    /// Running on the floor
    Run,
    /// Crouched run
    Duck,
    /// Hit an obstacle
    Dead,
}

impl DinoPose {
    /// Pose implied by the player's flags
    pub fn of(dino: &Dino) -> Self {
        if dino.is_dead {
            DinoPose::Dead
        } else if dino.is_ducking {
            DinoPose::Duck
        } else if dino.is_jumping {
            DinoPose::Idle
        } else {
            DinoPose::Run
        }
    }

    /// Sheet the pose is drawn from
    pub fn texture(self) -> TextureKind {
        match self {
            DinoPose::Duck => TextureKind::DinoDuck,
            _ => TextureKind::Dino,
        }
    }

    /// Inclusive frame range within the sheet
    pub fn frame_range(self) -> [u32; 2] {
        match self {
            DinoPose::Idle => [0, 0],
            DinoPose::Run => [2, 3],
            DinoPose::Dead => [4, 4],
            DinoPose::Duck => [0, 1],
        }
    }
}

/// Points the player's sprite at the sheet and frames of its pose
///
/// The sprite source and the entity size follow the sheet's frame
/// dimensions, so switching to the wider duck sheet also widens the hit
/// region.
#[derive(Debug, Default)]
pub struct AnimationSelectionSystem;

impl System for AnimationSelectionSystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        let required = ComponentMask::DINO | ComponentMask::SPRITE | ComponentMask::ANIMATION;
        for entity in world.entities() {
            if !world.has_all(entity, required) {
                continue;
            }
            let pose = DinoPose::of(world.dinos.get(entity));
            let sheet = ctx.textures.get(pose.texture());
            let (w, h) = (sheet.frame_width(), sheet.height() as f32);

            let sprite = world.sprites.get_mut(entity);
            sprite.texture = sheet.id();
            sprite.source.y = 0.0;
            sprite.source.w = w;
            sprite.source.h = h;

            world.animations.get_mut(entity).select_range(pose.frame_range());
            if world.has_component(entity, ComponentMask::SIZE) {
                world.sizes.set(entity, Size::new(w, h));
            }
        }
    }

    fn name(&self) -> &str {
        "AnimationSelectionSystem"
    }
}
