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
//! World management
//!
//! The World owns the entity masks and one [`ComponentTable`] per component
//! type. Tables are public fields so a system can borrow several of them at
//! once (positions mutably, sizes immutably, and so on) without going
//! through the generic accessors.

use crate::ecs::component::{Component, ComponentTable};
use crate::ecs::components::{
    Animation, Cloud, Collision, Dino, Obstacle, Position, Size, Sprite, Velocity,
};
use crate::ecs::{ComponentMask, Entity};
use crate::error::{GameError, GameResult};

/// Default number of entity slots
pub const MAX_ENTITIES: usize = 99;

/// The main ECS world container
///
/// # Examples
///
/// ```
/// use dino_runner::ecs::{ComponentMask, World};
/// use dino_runner::ecs::components::Position;
///
/// let mut world = World::new();
/// let entity = world.create_entity().unwrap();
/// world.insert(entity, Position::new(10.0, 20.0));
///
/// assert!(world.has_component(entity, ComponentMask::POSITION));
/// assert_eq!(world.get::<Position>(entity).map(|p| p.x), Some(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct World {
    capacity: usize,
    next_id: u32,
    masks: Box<[ComponentMask]>,
    /// Position table
    pub positions: ComponentTable<Position>,
    /// Velocity table
    pub velocities: ComponentTable<Velocity>,
    /// Size table
    pub sizes: ComponentTable<Size>,
    /// Sprite table
    pub sprites: ComponentTable<Sprite>,
    /// Animation table
    pub animations: ComponentTable<Animation>,
    /// Player table
    pub dinos: ComponentTable<Dino>,
    /// Hit region table
    pub collisions: ComponentTable<Collision>,
    /// Obstacle table
    pub obstacles: ComponentTable<Obstacle>,
    /// Cloud table
    pub clouds: ComponentTable<Cloud>,
}

impl World {
    /// Create a world with [`MAX_ENTITIES`] slots
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENTITIES)
    }

    /// Create a world with `capacity` slots in every table
    pub fn with_capacity(capacity: usize) -> Self {
        World {
            capacity,
            next_id: 0,
            masks: vec![ComponentMask::empty(); capacity].into_boxed_slice(),
            positions: ComponentTable::with_capacity(capacity),
            velocities: ComponentTable::with_capacity(capacity),
            sizes: ComponentTable::with_capacity(capacity),
            sprites: ComponentTable::with_capacity(capacity),
            animations: ComponentTable::with_capacity(capacity),
            dinos: ComponentTable::with_capacity(capacity),
            collisions: ComponentTable::with_capacity(capacity),
            obstacles: ComponentTable::with_capacity(capacity),
            clouds: ComponentTable::with_capacity(capacity),
        }
    }

    /// Allocate the next entity id
    ///
    /// Ids are never reused. Running out of slots is a setup error.
    pub fn create_entity(&mut self) -> GameResult<Entity> {
        if self.next_id as usize >= self.capacity {
            return Err(GameError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let entity = Entity::new(self.next_id);
        self.next_id += 1;
        Ok(entity)
    }

    /// Number of slots in every table
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entities allocated so far
    pub fn entity_count(&self) -> usize {
        self.next_id as usize
    }

    /// Iterate over allocated entities in ascending id order
    pub fn entities(&self) -> impl DoubleEndedIterator<Item = Entity> {
        (0..self.next_id).map(Entity::new)
    }

    /// Current component mask of an entity
    pub fn mask(&self, entity: Entity) -> ComponentMask {
        self.masks[entity.index()]
    }

    /// Check that the entity carries `tag`
    ///
    /// A multi-bit `tag` needs every bit set, as with [`World::has_all`].
    pub fn has_component(&self, entity: Entity, tag: ComponentMask) -> bool {
        self.masks[entity.index()].contains(tag)
    }

    /// Check that every bit of `required` is set
    pub fn has_all(&self, entity: Entity, required: ComponentMask) -> bool {
        self.masks[entity.index()].contains(required)
    }

    /// Set component bits on the stored mask
    ///
    /// The data slot is left as it is; callers initialise it separately
    /// (or use [`World::insert`]).
    pub fn add_component(&mut self, entity: Entity, tag: ComponentMask) {
        self.masks[entity.index()].insert(tag);
    }

    /// Clear component bits on the stored mask
    pub fn remove_component(&mut self, entity: Entity, tag: ComponentMask) {
        self.masks[entity.index()].remove(tag);
    }

    /// Write a component and mark it present
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        T::table_mut(self).set(entity, component);
        self.add_component(entity, T::TAG);
    }

    /// Read a component if the entity carries it
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        if self.has_component(entity, T::TAG) {
            Some(T::table(self).get(entity))
        } else {
            None
        }
    }

    /// Mutably access a component if the entity carries it
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if self.has_component(entity, T::TAG) {
            Some(T::table_mut(self).get_mut(entity))
        } else {
            None
        }
    }

    /// First entity carrying every bit of `required`
    pub fn find(&self, required: ComponentMask) -> Option<Entity> {
        self.entities().find(|&e| self.has_all(e, required))
    }

    /// All entities carrying every bit of `required`, in id order
    pub fn query(&self, required: ComponentMask) -> impl Iterator<Item = Entity> + '_ {
        self.entities().filter(move |&e| self.has_all(e, required))
    }

    /// Drop every entity and reset all tables
    pub fn clear(&mut self) {
        self.next_id = 0;
        self.masks.fill(ComponentMask::empty());
        self.positions.reset();
        self.velocities.reset();
        self.sizes.reset();
        self.sprites.reset();
        self.animations.reset();
        self.dinos.reset();
        self.collisions.reset();
        self.obstacles.reset();
        self.clouds.reset();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_component {
    ($ty:ty, $tag:ident, $field:ident) => {
        impl Component for $ty {
            const TAG: ComponentMask = ComponentMask::$tag;

            fn table(world: &World) -> &ComponentTable<Self> {
                &world.$field
            }

            fn table_mut(world: &mut World) -> &mut ComponentTable<Self> {
                &mut world.$field
            }
        }
    };
}

impl_component!(Position, POSITION, positions);
impl_component!(Velocity, VELOCITY, velocities);
impl_component!(Size, SIZE, sizes);
impl_component!(Sprite, SPRITE, sprites);
impl_component!(Animation, ANIMATION, animations);
impl_component!(Dino, DINO, dinos);
impl_component!(Collision, COLLISION, collisions);
impl_component!(Obstacle, OBSTACLE, obstacles);
impl_component!(Cloud, CLOUD, clouds);
