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
//! Game components
//!
//! Plain data records, one table per type. Behavior lives in the systems
//! under [`crate::ecs::systems`]. Coordinates are screen pixels with y
//! growing downward; velocities are pixels per tick.

use crate::assets::{TextureId, TextureKind};
use crate::collision::Rect;

/// Screen position of an entity's top-left corner
///
/// # Examples
///
/// ```
/// use dino_runner::ecs::components::Position;
///
/// let pos = Position::new(250.0, 280.0);
/// assert_eq!(pos.x, 250.0);
/// assert!(pos.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    /// Check that both coordinates are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Displacement applied to a position each tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Horizontal displacement per tick
    pub x: f32,
    /// Vertical displacement per tick (negative is up)
    pub y: f32,
}

impl Velocity {
    /// Create a new velocity
    pub fn new(x: f32, y: f32) -> Self {
        Velocity { x, y }
    }

    /// Zero velocity
    pub fn zero() -> Self {
        Velocity::default()
    }
}

/// Extent of an entity in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Size {
    /// Create a new size
    pub fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }
}

/// Texture reference and the region of it currently drawn
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sprite {
    /// Sheet to draw from
    pub texture: TextureId,
    /// Sub-rectangle of the sheet in texture pixels
    pub source: Rect,
}

impl Sprite {
    /// Create a sprite showing `source` from the given sheet
    pub fn new(kind: TextureKind, source: Rect) -> Self {
        Sprite {
            texture: kind.id(),
            source,
        }
    }
}

/// Frame playback state for a sheet laid out as a horizontal strip
///
/// `frame_range` is inclusive on both ends; `current_frame` counts from the
/// start of the range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Animation {
    /// Frame offset within the active range
    pub current_frame: u32,
    /// First and last sheet frame of the active range
    pub frame_range: [u32; 2],
    /// Frames per second
    pub frame_rate: u32,
    /// Ticks elapsed in the current frame
    pub frame_timer: u32,
}

impl Animation {
    /// Create an animation playing `frame_range` at `frame_rate`
    pub fn new(frame_range: [u32; 2], frame_rate: u32) -> Self {
        Animation {
            current_frame: 0,
            frame_range,
            frame_rate,
            frame_timer: 0,
        }
    }

    /// Number of frames in the active range
    pub fn range_len(&self) -> u32 {
        self.frame_range[1].saturating_sub(self.frame_range[0]) + 1
    }

    /// Switch to a new range, restarting playback if the current frame
    /// falls outside it
    pub fn select_range(&mut self, frame_range: [u32; 2]) {
        if self.frame_range == frame_range {
            return;
        }
        self.frame_range = frame_range;
        if self.current_frame >= self.range_len() {
            self.current_frame = 0;
        }
    }

    /// Sheet frame currently shown
    pub fn sheet_frame(&self) -> u32 {
        self.frame_range[0] + self.current_frame
    }
}

/// Player flags and counters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dino {
    /// Crouched on the floor
    pub is_ducking: bool,
    /// Airborne or launching this tick
    pub is_jumping: bool,
    /// Hit an obstacle
    pub is_dead: bool,
    /// Ticks since the current jump started
    pub jump_frame_count: u32,
    /// Ticks spent in the run-in slide
    pub slide_frame_count: u32,
}

/// Hit region derived from position and size each tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Collision {
    /// Region in screen coordinates
    pub region: Rect,
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObstacleKind {
    /// Tall cactus group, jumped over
    #[default]
    CactusLarge,
    /// Short cactus group, jumped over
    CactusSmall,
    /// Flyer, ducked under or jumped over
    Pterodactyl,
}

impl ObstacleKind {
    /// Every variant, in reroll order
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::CactusLarge,
        ObstacleKind::CactusSmall,
        ObstacleKind::Pterodactyl,
    ];

    /// Sheet the variant is drawn from
    pub fn texture(self) -> TextureKind {
        match self {
            ObstacleKind::CactusLarge => TextureKind::CactusLarge,
            ObstacleKind::CactusSmall => TextureKind::CactusSmall,
            ObstacleKind::Pterodactyl => TextureKind::Pterodactyl,
        }
    }

    /// Whether the variant plays a frame animation
    pub fn is_animated(self) -> bool {
        matches!(self, ObstacleKind::Pterodactyl)
    }
}

/// Where a pooled obstacle is in its scroll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObstaclePhase {
    /// Placed past the right edge, waiting to scroll in
    #[default]
    OffscreenRight,
    /// At least partly visible
    Onscreen,
    /// Fully past the left edge; respawns this tick
    OffscreenLeft,
}

/// Obstacle kind and pool bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Obstacle {
    /// Current variant
    pub kind: ObstacleKind,
    /// Index within the obstacle pool, fixed for the session
    pub slot: usize,
    /// Scroll cycle state
    pub phase: ObstaclePhase,
}

/// Cloud placement seed, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cloud {
    /// Horizontal lane index
    pub column: u32,
    /// Vertical row index
    pub row: u32,
}
