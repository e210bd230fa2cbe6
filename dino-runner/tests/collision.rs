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
//! Collision strategies against hand-placed obstacles

use dino_runner::assets::{TextureKind, Textures};
use dino_runner::collision::{MaskCache, Rect};
use dino_runner::config::{CollisionStrategy, GameConfig};
use dino_runner::ecs::components::{Collision, Obstacle, ObstacleKind, ObstaclePhase, Position, Size, Sprite};
use dino_runner::ecs::systems::{AnimationSelectionSystem, CollisionSystem};
use dino_runner::ecs::{Entity, System, TickContext, World};
use dino_runner::game::ScrollState;
use dino_runner::platform::FrameInput;
use dino_runner::spawn;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run(system: &mut dyn System, world: &mut World, config: &GameConfig, masks: &mut MaskCache) {
    let textures = Textures::placeholder();
    let mut rng = StdRng::seed_from_u64(0);
    let mut ctx = TickContext {
        config,
        input: FrameInput::idle(),
        scroll: ScrollState::new(config),
        textures: &textures,
        rng: &mut rng,
        masks,
    };
    system.run(world, &mut ctx);
}

// Player at its start position with a pterodactyl level with its head
fn scene(config: &GameConfig, ducking: bool, masks: &mut MaskCache) -> (World, Entity) {
    let textures = Textures::placeholder();
    let mut world = World::new();
    let dino = spawn::spawn_dino(&mut world, config, &textures).unwrap();
    world.dinos.get_mut(dino).is_ducking = ducking;
    run(&mut AnimationSelectionSystem, &mut world, config, masks);

    let flyer = world.create_entity().unwrap();
    world.insert(
        flyer,
        Obstacle {
            kind: ObstacleKind::Pterodactyl,
            slot: 0,
            phase: ObstaclePhase::Onscreen,
        },
    );
    world.insert(flyer, Position::new(config.dino_start_x + 50.0, config.floor_y - 10.0));
    world.insert(flyer, Size::new(46.0, 40.0));
    world.insert(
        flyer,
        Sprite::new(TextureKind::Pterodactyl, Rect::new(0.0, 0.0, 46.0, 40.0)),
    );
    world.insert(flyer, Collision::default());
    (world, dino)
}

fn pixel_config() -> GameConfig {
    GameConfig {
        collision: CollisionStrategy::PixelMask,
        ..GameConfig::default()
    }
}

#[test]
fn test_standing_player_hits_pterodactyl() {
    let config = pixel_config();
    let mut masks = MaskCache::new(true);
    let (mut world, dino) = scene(&config, false, &mut masks);
    run(&mut CollisionSystem, &mut world, &config, &mut masks);
    assert!(world.dinos.get(dino).is_dead);
}

#[test]
fn test_ducking_player_clears_pterodactyl_by_pixels() {
    let config = pixel_config();
    let mut masks = MaskCache::new(true);
    let (mut world, dino) = scene(&config, true, &mut masks);

    // Boxes overlap, so only the transparent top of the duck frame saves it
    let dino_region = Rect::new(
        config.dino_start_x,
        config.floor_y,
        world.sizes.get(dino).w,
        world.sizes.get(dino).h,
    );
    let flyer_region = Rect::new(config.dino_start_x + 50.0, config.floor_y - 10.0, 46.0, 40.0);
    assert!(dino_region.overlaps(&flyer_region));

    run(&mut CollisionSystem, &mut world, &config, &mut masks);
    assert!(!world.dinos.get(dino).is_dead);
}

#[test]
fn test_bounding_box_ignores_transparency() {
    let config = GameConfig {
        collision: CollisionStrategy::BoundingBox,
        dino_inset: 0.0,
        obstacle_inset: 0.0,
        ..GameConfig::default()
    };
    let mut masks = MaskCache::new(true);
    let (mut world, dino) = scene(&config, true, &mut masks);
    run(&mut CollisionSystem, &mut world, &config, &mut masks);
    assert!(world.dinos.get(dino).is_dead);
    assert_eq!(masks.stats().misses, 0);
}

#[test]
fn test_mask_cache_reuses_masks() {
    let config = pixel_config();
    let mut masks = MaskCache::new(true);
    let (mut world, _) = scene(&config, true, &mut masks);

    for _ in 0..5 {
        run(&mut CollisionSystem, &mut world, &config, &mut masks);
    }
    let stats = masks.stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 8);
    assert_eq!(masks.len(), 2);
}

#[test]
fn test_uncached_masks_give_same_verdict() {
    let config = pixel_config();
    for ducking in [false, true] {
        let mut cached = MaskCache::new(true);
        let mut uncached = MaskCache::new(false);
        let (mut a, dino_a) = scene(&config, ducking, &mut cached);
        let (mut b, dino_b) = scene(&config, ducking, &mut uncached);
        run(&mut CollisionSystem, &mut a, &config, &mut cached);
        run(&mut CollisionSystem, &mut b, &config, &mut uncached);
        assert_eq!(a.dinos.get(dino_a).is_dead, b.dinos.get(dino_b).is_dead);
        assert!(uncached.is_empty());
    }
}
