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
//! Game systems
//!
//! One pass per file, in the order the [`Pipeline`](crate::ecs::Pipeline)
//! runs them:
//!
//! 1. [`PositionSystem`]
//! 2. [`PoseSystem`]
//! 3. [`AnimationSelectionSystem`]
//! 4. [`VelocitySystem`]
//! 5. [`ObstacleTypeSystem`]
//! 6. [`FrameCounterSystem`], [`CurrentFrameIndexSystem`]
//! 7. [`CollisionSystem`]
//!
//! Sprite submission ([`render_sprites`]) runs separately, once per
//! rendered frame.

mod animation;
mod collision;
mod frames;
mod obstacle;
mod pose;
mod position;
mod render;
mod velocity;

pub use animation::{AnimationSelectionSystem, DinoPose};
pub use collision::CollisionSystem;
pub use frames::{CurrentFrameIndexSystem, FrameCounterSystem};
pub use obstacle::ObstacleTypeSystem;
pub use pose::{is_grounded, PoseSystem};
pub use position::PositionSystem;
pub use render::render_sprites;
pub use velocity::VelocitySystem;
