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
//! Sprite submission

use crate::ecs::{ComponentMask, World};
use crate::platform::Renderer;

/// Submit every positioned sprite, highest id first
///
/// The player is created first, so it is drawn last and ends up on top of
/// obstacles and clouds. Returns the number of sprites submitted.
pub fn render_sprites(world: &World, renderer: &mut dyn Renderer) -> usize {
    let mut submitted = 0;
    for entity in world.entities().rev() {
        if !world.has_all(entity, ComponentMask::SPRITE | ComponentMask::POSITION) {
            continue;
        }
        let sprite = world.sprites.get(entity);
        let position = world.positions.get(entity);
        renderer.draw_texture_region(sprite.texture, sprite.source, position.x, position.y);
        submitted += 1;
    }
    submitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureKind;
    use crate::collision::Rect;
    use crate::ecs::components::{Position, Sprite};
    use crate::platform::{DrawCommand, RecordingRenderer};

    #[test]
    fn test_back_to_front_by_id() {
        let mut world = World::new();
        let kinds = [TextureKind::Dino, TextureKind::Cloud, TextureKind::CactusSmall];
        for (i, kind) in kinds.iter().enumerate() {
            let e = world.create_entity().unwrap();
            world.insert(e, Sprite::new(*kind, Rect::new(0.0, 0.0, 1.0, 1.0)));
            world.insert(e, Position::new(i as f32, 0.0));
        }
        // No position: never drawn
        let hidden = world.create_entity().unwrap();
        world.insert(hidden, Sprite::default());

        let mut renderer = RecordingRenderer::new();
        assert_eq!(render_sprites(&world, &mut renderer), 3);

        let drawn: Vec<_> = renderer
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Texture { texture, .. } => *texture,
                DrawCommand::Text { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(
            drawn,
            vec![
                TextureKind::CactusSmall.id(),
                TextureKind::Cloud.id(),
                TextureKind::Dino.id()
            ]
        );
    }
}
