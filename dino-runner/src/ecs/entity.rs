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
//! Entity management
//!
//! Entities are plain integer identifiers that correlate rows across the
//! component tables. Which rows are meaningful for an entity is recorded in
//! its [`ComponentMask`].
//!
//! Ids are handed out monotonically and never recycled: pooled obstacles and
//! clouds are repositioned rather than destroyed, so an id stays bound to the
//! same logical object for the whole session.

use bitflags::bitflags;
use std::fmt;

/// Identifier for an entity, valid as an index into every component table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(u32);

impl Entity {
    /// Create an entity handle from a raw id
    pub fn new(id: u32) -> Self {
        Entity(id)
    }

    /// Get the raw id
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Get the id as a table index
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

bitflags! {
    /// Set of components present on an entity
    ///
    /// Systems query this mask before touching a component table; a slot
    /// whose bit is clear holds stale data and must not be read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentMask: u16 {
        /// Width and height
        const SIZE      = 0b0_0000_0001;
        /// World position
        const POSITION  = 0b0_0000_0010;
        /// Per-tick displacement
        const VELOCITY  = 0b0_0000_0100;
        /// Texture reference and source region
        const SPRITE    = 0b0_0000_1000;
        /// Frame playback state
        const ANIMATION = 0b0_0001_0000;
        /// Player flags and counters
        const DINO      = 0b0_0010_0000;
        /// Derived hit region
        const COLLISION = 0b0_0100_0000;
        /// Obstacle kind and pool slot
        const OBSTACLE  = 0b0_1000_0000;
        /// Cloud placement seed
        const CLOUD     = 0b1_0000_0000;
    }
}

impl ComponentMask {
    /// Components every moving entity needs before motion systems touch it
    pub const MOTION: ComponentMask = ComponentMask::POSITION.union(ComponentMask::VELOCITY);
}
