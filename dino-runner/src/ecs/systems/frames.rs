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
//! Animation timers and frame stepping
//!
//! The frame rate divides the tick rate into a ticks-per-frame threshold.
//! [`FrameCounterSystem`] counts ticks and wraps the timer to zero at the
//! threshold; [`CurrentFrameIndexSystem`] steps the frame whenever the
//! timer reads zero and points the sprite source at it.

use crate::ecs::{ComponentMask, System, TickContext, World};

/// Advances each animation's tick timer
#[derive(Debug, Default)]
pub struct FrameCounterSystem;

impl System for FrameCounterSystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        for entity in world.entities() {
            if !world.has_component(entity, ComponentMask::ANIMATION) {
                continue;
            }
            let animation = world.animations.get_mut(entity);
            animation.frame_timer += 1;
            if animation.frame_timer >= ctx.config.ticks_per_frame(animation.frame_rate) {
                animation.frame_timer = 0;
            }
        }
    }

    fn name(&self) -> &str {
        "FrameCounterSystem"
    }
}

/// Steps frames on timer wrap and updates the sprite source column
#[derive(Debug, Default)]
pub struct CurrentFrameIndexSystem;

impl System for CurrentFrameIndexSystem {
    fn run(&mut self, world: &mut World, _ctx: &mut TickContext<'_>) {
        for entity in world.entities() {
            if !world.has_all(entity, ComponentMask::ANIMATION | ComponentMask::SPRITE) {
                continue;
            }
            let animation = world.animations.get_mut(entity);
            if animation.frame_timer == 0 {
                animation.current_frame += 1;
                if animation.current_frame >= animation.range_len() {
                    animation.current_frame = 0;
                }
            }
            let source = &mut world.sprites.get_mut(entity).source;
            source.x = source.w * animation.sheet_frame() as f32;
        }
    }

    fn name(&self) -> &str {
        "CurrentFrameIndexSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureKind;
    use crate::collision::Rect;
    use crate::ecs::components::{Animation, Sprite};
    use crate::ecs::systems::test_support::Harness;
    use crate::ecs::Entity;

    fn animated(h: &mut Harness, range: [u32; 2], rate: u32) -> Entity {
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Animation::new(range, rate));
        h.world.insert(e, Sprite::new(TextureKind::Dino, Rect::new(0.0, 0.0, 88.0, 94.0)));
        e
    }

    fn tick(h: &mut Harness) {
        h.run(&mut FrameCounterSystem);
        h.run(&mut CurrentFrameIndexSystem);
    }

    #[test]
    fn test_frame_advances_every_threshold() {
        let mut h = Harness::new();
        // 60 fps / 6 = 10 ticks per frame
        let e = animated(&mut h, [2, 3], 6);
        for _ in 0..9 {
            tick(&mut h);
        }
        assert_eq!(h.world.animations.get(e).current_frame, 0);
        assert_eq!(h.world.sprites.get(e).source.x, 176.0);

        tick(&mut h);
        assert_eq!(h.world.animations.get(e).current_frame, 1);
        assert_eq!(h.world.sprites.get(e).source.x, 264.0);

        for _ in 0..10 {
            tick(&mut h);
        }
        assert_eq!(h.world.animations.get(e).current_frame, 0);
    }

    #[test]
    fn test_single_frame_range_stays_put() {
        let mut h = Harness::new();
        let e = animated(&mut h, [4, 4], 60);
        for _ in 0..5 {
            tick(&mut h);
            assert_eq!(h.world.animations.get(e).current_frame, 0);
            assert_eq!(h.world.sprites.get(e).source.x, 352.0);
        }
    }

    #[test]
    fn test_timer_without_sprite_still_counts() {
        let mut h = Harness::new();
        let e = h.world.create_entity().unwrap();
        h.world.insert(e, Animation::new([0, 1], 6));
        tick(&mut h);
        let anim = h.world.animations.get(e);
        assert_eq!(anim.frame_timer, 1);
        assert_eq!(anim.current_frame, 0);
    }
}
