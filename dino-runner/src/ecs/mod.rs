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
//! Entity Component System (ECS) core implementation
//!
//! This module provides the fixed-capacity ECS the game runs on:
//! - Entity ids with a component bitmask per entity
//! - One flat, pre-sized table per component type
//! - The system trait and the staged per-tick pipeline

mod component;
mod entity;
mod system;
mod world;

pub mod components;
pub mod scheduler;
pub mod systems;

pub use component::{Component, ComponentTable};
pub use entity::{ComponentMask, Entity};
pub use scheduler::Pipeline;
pub use system::{System, TickContext};
pub use world::{World, MAX_ENTITIES};
