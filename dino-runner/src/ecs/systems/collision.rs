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
//! Player versus obstacle hit detection

use crate::collision::{boxes_collide, pixels_collide, Rect};
use crate::config::CollisionStrategy;
use crate::ecs::{ComponentMask, Entity, System, TickContext, World};

/// Refreshes hit regions and marks the player dead on the first hit
///
/// Obstacles are scanned in id order and the scan stops at the first hit.
/// A player that is already dead is not tested again.
#[derive(Debug, Default)]
pub struct CollisionSystem;

impl CollisionSystem {
    fn refresh_regions(world: &mut World) {
        let required = ComponentMask::COLLISION | ComponentMask::POSITION | ComponentMask::SIZE;
        for entity in world.entities() {
            if !world.has_all(entity, required) {
                continue;
            }
            let position = world.positions.get(entity);
            let size = world.sizes.get(entity);
            world.collisions.get_mut(entity).region =
                Rect::new(position.x, position.y, size.w, size.h);
        }
    }

    fn hit(world: &World, dino: Entity, obstacle: Entity, ctx: &mut TickContext<'_>) -> bool {
        let dino_region = world.collisions.get(dino).region;
        let obstacle_region = world.collisions.get(obstacle).region;
        match ctx.config.collision {
            CollisionStrategy::BoundingBox => boxes_collide(
                &dino_region,
                &obstacle_region,
                ctx.config.dino_inset,
                ctx.config.obstacle_inset,
            ),
            CollisionStrategy::PixelMask => {
                if !world.has_component(dino, ComponentMask::SPRITE)
                    || !world.has_component(obstacle, ComponentMask::SPRITE)
                {
                    return false;
                }
                if !dino_region.overlaps(&obstacle_region) {
                    return false;
                }
                let dino_sprite = world.sprites.get(dino);
                let obstacle_sprite = world.sprites.get(obstacle);
                let masks = (
                    ctx.masks.mask(ctx.textures, dino_sprite.texture, dino_sprite.source),
                    ctx.masks.mask(ctx.textures, obstacle_sprite.texture, obstacle_sprite.source),
                );
                match masks {
                    (Some(dino_mask), Some(obstacle_mask)) => pixels_collide(
                        &dino_region,
                        &dino_mask,
                        &obstacle_region,
                        &obstacle_mask,
                    ),
                    _ => {
                        log::warn!("missing texture for {dino} or {obstacle}, skipping pixel test");
                        false
                    }
                }
            }
        }
    }
}

impl System for CollisionSystem {
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        Self::refresh_regions(world);

        let player = ComponentMask::DINO | ComponentMask::COLLISION;
        let Some(dino) = world.find(player) else {
            return;
        };
        if world.dinos.get(dino).is_dead {
            return;
        }

        let target = ComponentMask::OBSTACLE | ComponentMask::COLLISION;
        let hit = world
            .query(target)
            .find(|&obstacle| Self::hit(world, dino, obstacle, ctx));
        if let Some(obstacle) = hit {
            log::info!(
                "{dino} hit {:?} ({obstacle})",
                world.obstacles.get(obstacle).kind
            );
            world.dinos.get_mut(dino).is_dead = true;
        }
    }

    fn name(&self) -> &str {
        "CollisionSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Texture, TextureKind, Textures};
    use crate::config::GameConfig;
    use crate::ecs::components::{Collision, Dino, Obstacle, Position, Size, Sprite};
    use crate::ecs::systems::test_support::Harness;
    use image::RgbaImage;

    fn place(h: &mut Harness, e: Entity, kind: TextureKind, at: (f32, f32), w: f32, hgt: f32) {
        h.world.insert(e, Position::new(at.0, at.1));
        h.world.insert(e, Size::new(w, hgt));
        h.world.insert(e, Sprite::new(kind, Rect::new(0.0, 0.0, w, hgt)));
        h.world.insert(e, Collision::default());
    }

    fn scene(h: &mut Harness, obstacle_x: f32) -> (Entity, Entity) {
        let dino = h.world.create_entity().unwrap();
        h.world.insert(dino, Dino::default());
        place(h, dino, TextureKind::Dino, (100.0, 100.0), 88.0, 94.0);
        let obstacle = h.world.create_entity().unwrap();
        h.world.insert(obstacle, Obstacle::default());
        place(h, obstacle, TextureKind::CactusLarge, (obstacle_x, 120.0), 25.0, 50.0);
        (dino, obstacle)
    }

    fn with_strategy(strategy: CollisionStrategy) -> Harness {
        Harness::with_config(GameConfig {
            collision: strategy,
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_regions_follow_position_and_size() {
        let mut h = Harness::new();
        let (dino, _) = scene(&mut h, 500.0);
        h.run(&mut CollisionSystem);
        assert_eq!(
            h.world.collisions.get(dino).region,
            Rect::new(100.0, 100.0, 88.0, 94.0)
        );
    }

    #[test]
    fn test_bounding_box_hit_and_miss() {
        let mut h = with_strategy(CollisionStrategy::BoundingBox);
        let (dino, obstacle) = scene(&mut h, 500.0);
        h.run(&mut CollisionSystem);
        assert!(!h.world.dinos.get(dino).is_dead);

        h.world.positions.set(obstacle, Position::new(130.0, 120.0));
        h.run(&mut CollisionSystem);
        assert!(h.world.dinos.get(dino).is_dead);
    }

    #[test]
    fn test_bounding_box_forgives_edge_contact() {
        let mut h = with_strategy(CollisionStrategy::BoundingBox);
        // Full boxes overlap by 2px; the insets remove that
        let (dino, _) = scene(&mut h, 186.0);
        h.run(&mut CollisionSystem);
        assert!(!h.world.dinos.get(dino).is_dead);
    }

    #[test]
    fn test_pixel_mask_opaque_sprites_collide() {
        let mut h = Harness::new();
        let (dino, _) = scene(&mut h, 186.0);
        h.run(&mut CollisionSystem);
        assert!(h.world.dinos.get(dino).is_dead);
    }

    #[test]
    fn test_pixel_mask_transparent_sprites_do_not_collide() {
        let textures = Textures::placeholder()
            .with_sheet(Texture::from_image(TextureKind::CactusLarge, RgbaImage::new(150, 50)));
        let mut h = Harness::new().with_textures(textures);
        let (dino, _) = scene(&mut h, 130.0);
        h.run(&mut CollisionSystem);
        assert!(!h.world.dinos.get(dino).is_dead);
    }

    #[test]
    fn test_first_hit_stops_scan() {
        let mut h = with_strategy(CollisionStrategy::BoundingBox);
        let (dino, _) = scene(&mut h, 130.0);
        let second = h.world.create_entity().unwrap();
        h.world.insert(second, Obstacle::default());
        place(&mut h, second, TextureKind::CactusSmall, (140.0, 120.0), 17.0, 35.0);
        h.run(&mut CollisionSystem);
        assert!(h.world.dinos.get(dino).is_dead);
    }

    #[test]
    fn test_no_dino_is_noop() {
        let mut h = Harness::new();
        let obstacle = h.world.create_entity().unwrap();
        h.world.insert(obstacle, Obstacle::default());
        place(&mut h, obstacle, TextureKind::CactusLarge, (0.0, 0.0), 25.0, 50.0);
        h.run(&mut CollisionSystem);
        assert_eq!(h.masks.stats().misses, 0);
    }
}
