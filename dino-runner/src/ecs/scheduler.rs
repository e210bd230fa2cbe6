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
//! Fixed per-tick system pipeline
//!
//! Systems are grouped into stages that run in ascending order; within a
//! stage, systems run in the order they were added. Every system completes
//! its pass over all entities before the next one starts, so no system
//! observes another's partial update.
//!
//! The set of systems is fixed: [`Pipeline::standard`] is the only way to
//! build one outside this crate.

use crate::config::GameConfig;
use crate::ecs::systems::{
    AnimationSelectionSystem, CollisionSystem, CurrentFrameIndexSystem, FrameCounterSystem,
    ObstacleTypeSystem, PoseSystem, PositionSystem, VelocitySystem,
};
use crate::ecs::{System, TickContext, World};

/// Stage identifier for grouping systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageId(pub usize);

/// The stages of a game tick
pub mod stages {
    use super::StageId;

    /// Velocity integration and position rules
    pub const POSITION: StageId = StageId(0);

    /// Jump and duck flags
    pub const POSE: StageId = StageId(1);

    /// Sprite sheet and frame range for the player's pose
    pub const ANIMATION_SELECTION: StageId = StageId(2);

    /// Per-kind velocity
    pub const VELOCITY: StageId = StageId(3);

    /// Obstacle respawn
    pub const OBSTACLE_TYPE: StageId = StageId(4);

    /// Animation timers and frame stepping
    pub const FRAMES: StageId = StageId(5);

    /// Hit detection
    pub const COLLISION: StageId = StageId(6);
}

struct ScheduledSystem {
    system: Box<dyn System>,
    stage: StageId,
}

/// Ordered list of the systems run each tick
///
/// # Examples
///
/// ```
/// use dino_runner::config::GameConfig;
/// use dino_runner::ecs::Pipeline;
///
/// let pipeline = Pipeline::standard(&GameConfig::default());
/// assert_eq!(pipeline.system_names()[0], "PositionSystem");
/// assert_eq!(pipeline.system_names().last(), Some(&"CollisionSystem"));
/// ```
pub struct Pipeline {
    systems: Vec<ScheduledSystem>,
}

impl Pipeline {
    fn empty() -> Self {
        Pipeline {
            systems: Vec::with_capacity(8),
        }
    }

    /// Build the game's pipeline
    pub fn standard(config: &GameConfig) -> Self {
        let mut pipeline = Self::empty();
        pipeline.add_system(PositionSystem::new(), stages::POSITION);
        pipeline.add_system(PoseSystem, stages::POSE);
        pipeline.add_system(AnimationSelectionSystem, stages::ANIMATION_SELECTION);
        pipeline.add_system(VelocitySystem::new(config), stages::VELOCITY);
        pipeline.add_system(ObstacleTypeSystem::new(), stages::OBSTACLE_TYPE);
        pipeline.add_system(FrameCounterSystem, stages::FRAMES);
        pipeline.add_system(CurrentFrameIndexSystem, stages::FRAMES);
        pipeline.add_system(CollisionSystem, stages::COLLISION);
        log::debug!("pipeline: {:?}", pipeline.system_names());
        pipeline
    }

    // Stable sort keeps insertion order within a stage.
    fn add_system<S: System + 'static>(&mut self, system: S, stage: StageId) {
        self.systems.push(ScheduledSystem {
            system: Box::new(system),
            stage,
        });
        self.systems.sort_by_key(|s| s.stage);
    }

    /// Run every system once, in stage order
    pub fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) {
        for scheduled in &mut self.systems {
            scheduled.system.run(world, ctx);
        }
    }

    /// Get the number of systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Get the number of distinct stages in use
    pub fn stage_count(&self) -> usize {
        let mut stages: Vec<StageId> = self.systems.iter().map(|s| s.stage).collect();
        stages.dedup();
        stages.len()
    }

    /// System names in execution order
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.system.name()).collect()
    }
}
