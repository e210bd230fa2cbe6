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
//! Entity setup and pooled respawns
//!
//! Every entity is created once, at session start. Obstacles and clouds
//! that leave the screen are placed again by [`place_obstacle`] and
//! [`place_cloud`]; the same functions do the initial placement, so a
//! restart rerolls the pools exactly like a fresh session.

use crate::assets::{TextureKind, Textures};
use crate::collision::Rect;
use crate::config::GameConfig;
use crate::ecs::components::{
    Animation, Cloud, Collision, Dino, Obstacle, ObstacleKind, ObstaclePhase, Position, Size,
    Sprite, Velocity,
};
use crate::ecs::{ComponentMask, Entity, World};
use crate::error::GameResult;
use rand::Rng;

/// Frame range of the pterodactyl wing flap
pub const FLAP_FRAMES: [u32; 2] = [0, 1];

/// Screen y of the line the player's feet rest on
pub fn footline(config: &GameConfig, textures: &Textures) -> f32 {
    config.floor_y + textures.get(TextureKind::Dino).height() as f32
}

/// Create the player entity
pub fn spawn_dino(world: &mut World, config: &GameConfig, textures: &Textures) -> GameResult<Entity> {
    let entity = world.create_entity()?;
    reset_dino(world, entity, config, textures);
    Ok(entity)
}

/// Put the player back at its start position, alive and idle
pub fn reset_dino(world: &mut World, entity: Entity, config: &GameConfig, textures: &Textures) {
    let sheet = textures.get(TextureKind::Dino);
    let (w, h) = (sheet.frame_width(), sheet.height() as f32);
    world.insert(entity, Position::new(config.dino_start_x, config.floor_y));
    world.insert(entity, Velocity::zero());
    world.insert(entity, Size::new(w, h));
    world.insert(entity, Sprite::new(TextureKind::Dino, Rect::new(0.0, 0.0, w, h)));
    world.insert(entity, Animation::new([0, 0], config.dino_frame_rate));
    world.insert(entity, Dino::default());
    world.insert(entity, Collision::default());
}

/// Create the obstacle pool and place every slot off-screen right
pub fn spawn_obstacles(
    world: &mut World,
    config: &GameConfig,
    textures: &Textures,
    rng: &mut impl Rng,
    scroll_offset: f32,
) -> GameResult<Vec<Entity>> {
    let mut pool = Vec::with_capacity(config.obstacle_pool);
    for slot in 0..config.obstacle_pool {
        let entity = world.create_entity()?;
        world.insert(
            entity,
            Obstacle {
                slot,
                ..Obstacle::default()
            },
        );
        world.insert(entity, Position::default());
        world.insert(entity, Velocity::zero());
        world.insert(entity, Size::default());
        world.insert(entity, Sprite::default());
        world.insert(entity, Collision::default());
        place_obstacle(world, entity, config, textures, rng, scroll_offset);
        pool.push(entity);
    }
    Ok(pool)
}

/// Reroll an obstacle's kind and visuals and move it off-screen right
///
/// Cacti show a random run of `1..=max_cluster` adjacent strip frames;
/// pterodactyls show one frame and gain a wing-flap animation. The new x
/// keeps pool slots evenly spaced past the right edge.
pub fn place_obstacle(
    world: &mut World,
    entity: Entity,
    config: &GameConfig,
    textures: &Textures,
    rng: &mut impl Rng,
    scroll_offset: f32,
) {
    if !world.has_all(
        entity,
        ComponentMask::OBSTACLE | ComponentMask::POSITION | ComponentMask::SIZE | ComponentMask::SPRITE,
    ) {
        log::trace!("{entity} is not a placeable obstacle, skipping");
        return;
    }

    let kind = ObstacleKind::ALL[rng.gen_range(0..ObstacleKind::ALL.len())];
    let sheet = textures.get(kind.texture());
    let frame_w = sheet.frame_width();
    let h = sheet.height() as f32;

    let source = if kind.is_animated() {
        world.insert(entity, Animation::new(FLAP_FRAMES, config.pterodactyl_frame_rate));
        Rect::new(0.0, 0.0, frame_w, h)
    } else {
        world.remove_component(entity, ComponentMask::ANIMATION);
        let frames = kind.texture().frame_count();
        let cluster = rng.gen_range(1..=config.max_cluster.min(frames));
        let offset = rng.gen_range(0..=frames - cluster);
        Rect::new(offset as f32 * frame_w, 0.0, cluster as f32 * frame_w, h)
    };

    let slot = {
        let obstacle = world.obstacles.get_mut(entity);
        obstacle.kind = kind;
        obstacle.phase = ObstaclePhase::OffscreenRight;
        obstacle.slot
    };

    let base = footline(config, textures) - h;
    let y = match kind {
        ObstacleKind::CactusLarge => base + config.large_cactus_sink,
        ObstacleKind::CactusSmall => base - config.small_cactus_raise,
        ObstacleKind::Pterodactyl => base - config.pterodactyl_hover,
    };
    let spacing = config.screen_width / config.obstacle_pool as f32;
    let x = config.screen_width + slot as f32 * spacing + scroll_offset;

    world.sprites.set(entity, Sprite::new(kind.texture(), source));
    world.sizes.set(entity, Size::new(source.w, h));
    world.positions.set(entity, Position::new(x, y));
}

/// Create the cloud pool
pub fn spawn_clouds(
    world: &mut World,
    config: &GameConfig,
    textures: &Textures,
    rng: &mut impl Rng,
    scroll_offset: f32,
) -> GameResult<Vec<Entity>> {
    let sheet = textures.get(TextureKind::Cloud);
    let (w, h) = (sheet.width() as f32, sheet.height() as f32);
    let mut pool = Vec::with_capacity(config.cloud_pool);
    for index in 0..config.cloud_pool {
        let entity = world.create_entity()?;
        world.insert(
            entity,
            Cloud {
                column: index as u32,
                row: index as u32 % 3,
            },
        );
        world.insert(entity, Position::default());
        world.insert(entity, Velocity::zero());
        world.insert(entity, Size::new(w, h));
        world.insert(entity, Sprite::new(TextureKind::Cloud, Rect::new(0.0, 0.0, w, h)));
        place_cloud(world, entity, config, rng, scroll_offset);
        pool.push(entity);
    }
    Ok(pool)
}

/// Move a cloud past the right edge, spread over a wide virtual lane
pub fn place_cloud(
    world: &mut World,
    entity: Entity,
    config: &GameConfig,
    rng: &mut impl Rng,
    scroll_offset: f32,
) {
    if !world.has_all(
        entity,
        ComponentMask::CLOUD | ComponentMask::POSITION | ComponentMask::SIZE,
    ) {
        log::trace!("{entity} is not a placeable cloud, skipping");
        return;
    }
    let cloud = *world.clouds.get(entity);
    let size = *world.sizes.get(entity);

    let lane_span = config.screen_width * config.cloud_pool as f32 * 0.5;
    let jitter = if lane_span > 0.0 {
        rng.gen_range(0.0..lane_span)
    } else {
        0.0
    };
    let x = config.screen_width + cloud.column as f32 * size.w + jitter + scroll_offset;
    let y = cloud.row as f32 * (size.h + config.cloud_row_gap);
    world.positions.set(entity, Position::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dino_starts_on_floor() {
        let config = GameConfig::default();
        let textures = Textures::placeholder();
        let mut world = World::new();
        let dino = spawn_dino(&mut world, &config, &textures).unwrap();
        let pos = world.get::<Position>(dino).unwrap();
        assert_eq!(pos.y, config.floor_y);
        assert_eq!(pos.x, config.dino_start_x);
        assert!(world.has_all(dino, ComponentMask::DINO | ComponentMask::COLLISION));
    }

    #[test]
    fn test_obstacles_start_offscreen_right() {
        let config = GameConfig::default();
        let textures = Textures::placeholder();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(7);
        let pool = spawn_obstacles(&mut world, &config, &textures, &mut rng, 0.0).unwrap();
        assert_eq!(pool.len(), config.obstacle_pool);
        for (slot, &e) in pool.iter().enumerate() {
            let obstacle = world.obstacles.get(e);
            assert_eq!(obstacle.slot, slot);
            assert_eq!(obstacle.phase, ObstaclePhase::OffscreenRight);
            assert!(world.positions.get(e).x >= config.screen_width);
            assert_eq!(
                world.has_component(e, ComponentMask::ANIMATION),
                obstacle.kind == ObstacleKind::Pterodactyl
            );
        }
    }

    #[test]
    fn test_obstacle_heights_by_kind() {
        let config = GameConfig::default();
        let textures = Textures::placeholder();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = spawn_obstacles(&mut world, &config, &textures, &mut rng, 0.0).unwrap();
        let foot = footline(&config, &textures);
        for _ in 0..50 {
            for &e in &pool {
                place_obstacle(&mut world, e, &config, &textures, &mut rng, 0.0);
                let bottom = world.positions.get(e).y + world.sizes.get(e).h;
                let expected = match world.obstacles.get(e).kind {
                    ObstacleKind::CactusLarge => foot + 4.0,
                    ObstacleKind::CactusSmall => foot - 2.0,
                    ObstacleKind::Pterodactyl => foot - 64.0,
                };
                assert!((bottom - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_cactus_cluster_fits_strip() {
        let config = GameConfig::default();
        let textures = Textures::placeholder();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(11);
        let pool = spawn_obstacles(&mut world, &config, &textures, &mut rng, 0.0).unwrap();
        for _ in 0..200 {
            place_obstacle(&mut world, pool[0], &config, &textures, &mut rng, 0.0);
            let sprite = world.sprites.get(pool[0]);
            let sheet = textures.by_id(sprite.texture).unwrap();
            assert!(sprite.source.right() <= sheet.width() as f32 + 1e-3);
            assert!(sprite.source.w <= config.max_cluster as f32 * sheet.frame_width() + 1e-3);
        }
    }

    #[test]
    fn test_clouds_respawn_right_of_screen() {
        let config = GameConfig::default();
        let textures = Textures::placeholder();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(5);
        let clouds = spawn_clouds(&mut world, &config, &textures, &mut rng, 120.0).unwrap();
        assert_eq!(clouds.len(), config.cloud_pool);
        for &e in &clouds {
            let pos = world.positions.get(e);
            assert!(pos.x >= config.screen_width + 120.0);
            let row = world.clouds.get(e).row as f32;
            assert_eq!(pos.y, row * (27.0 + config.cloud_row_gap));
        }
    }

    #[test]
    fn test_capacity_is_fatal() {
        let config = GameConfig {
            obstacle_pool: 200,
            ..GameConfig::default()
        };
        let textures = Textures::placeholder();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(spawn_obstacles(&mut world, &config, &textures, &mut rng, 0.0).is_err());
    }
}
