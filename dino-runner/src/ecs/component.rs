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
//! Component storage
//!
//! Each component type lives in its own [`ComponentTable`]: a flat slice
//! pre-sized to the world capacity and indexed directly by entity id. There
//! is no sparse mapping and no allocation after setup; presence is tracked
//! separately by the entity's [`ComponentMask`].
//!
//! # Memory Layout
//!
//! ```text
//! positions:  [p0, p1, p2, p3, ...]   // slot i belongs to Entity(i)
//! velocities: [v0, v1, v2, v3, ...]
//! masks:      [m0, m1, m2, m3, ...]   // which of the slots above are live
//! ```

use crate::ecs::{ComponentMask, Entity, World};

/// Trait that all components must implement
///
/// Components are plain data. Each type names the mask bit that marks it
/// present and the world table that stores it, which lets [`World::insert`]
/// and [`World::get`] stay generic.
pub trait Component: Copy + Default + 'static {
    /// Mask bit set on entities carrying this component
    const TAG: ComponentMask;

    /// The world table holding this component type
    fn table(world: &World) -> &ComponentTable<Self>;

    /// Mutable access to the world table holding this component type
    fn table_mut(world: &mut World) -> &mut ComponentTable<Self>;
}

/// Fixed-capacity table with one slot per entity id
///
/// Slot access is unchecked against the entity's mask: callers test the
/// mask first. Indexing past the capacity is a caller bug and panics.
#[derive(Debug, Clone)]
pub struct ComponentTable<T> {
    slots: Box<[T]>,
}

impl<T: Copy + Default> ComponentTable<T> {
    /// Create a table with `capacity` default-initialised slots
    pub fn with_capacity(capacity: usize) -> Self {
        ComponentTable {
            slots: vec![T::default(); capacity].into_boxed_slice(),
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get the slot for an entity
    pub fn get(&self, entity: Entity) -> &T {
        &self.slots[entity.index()]
    }

    /// Get the slot for an entity mutably
    pub fn get_mut(&mut self, entity: Entity) -> &mut T {
        &mut self.slots[entity.index()]
    }

    /// Overwrite the slot for an entity
    pub fn set(&mut self, entity: Entity, value: T) {
        self.slots[entity.index()] = value;
    }

    /// Reset every slot to its default value
    pub fn reset(&mut self) {
        self.slots.fill(T::default());
    }

    /// All slots, live or not
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    struct TestComponent {
        x: f32,
        y: f32,
    }

    #[test]
    fn test_table_is_presized() {
        let table = ComponentTable::<TestComponent>::with_capacity(16);
        assert_eq!(table.capacity(), 16);
        assert!(table.as_slice().iter().all(|c| *c == TestComponent::default()));
    }

    #[test]
    fn test_set_and_get() {
        let mut table = ComponentTable::<TestComponent>::with_capacity(4);
        let entity = Entity::new(2);
        table.set(entity, TestComponent { x: 10.0, y: 20.0 });
        assert_eq!(table.get(entity).x, 10.0);
        assert_eq!(table.get(entity).y, 20.0);
        assert_eq!(*table.get(Entity::new(1)), TestComponent::default());
    }

    #[test]
    fn test_get_mut() {
        let mut table = ComponentTable::<TestComponent>::with_capacity(4);
        let entity = Entity::new(0);
        table.get_mut(entity).x = 100.0;
        assert_eq!(table.get(entity).x, 100.0);
    }

    #[test]
    fn test_reset() {
        let mut table = ComponentTable::<TestComponent>::with_capacity(4);
        table.set(Entity::new(3), TestComponent { x: 1.0, y: 2.0 });
        table.reset();
        assert_eq!(*table.get(Entity::new(3)), TestComponent::default());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let table = ComponentTable::<TestComponent>::with_capacity(2);
        table.get(Entity::new(2));
    }
}
