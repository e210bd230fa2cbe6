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
//! Hit testing between the player and obstacles
//!
//! Two strategies are available:
//!
//! - **Bounding box**: both rectangles are shrunk about their centers by an
//!   inset fraction, then tested for strict overlap. Forgiving, since the
//!   hitboxes are smaller than the visible sprites.
//! - **Pixel mask**: the full rectangles act as a broad phase; only when
//!   they overlap are the opacity masks of the current sprite regions
//!   compared pixel by pixel.

mod cache;
mod mask;
mod rect;

pub use cache::{CacheStats, MaskCache};
pub use mask::{masks_overlap, PixelMask};
pub use rect::Rect;

/// Inset bounding-box test
///
/// # Examples
///
/// ```
/// use dino_runner::collision::{boxes_collide, Rect};
///
/// let dino = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let cactus = Rect::new(90.0, 0.0, 50.0, 100.0);
/// assert!(!boxes_collide(&dino, &cactus, 0.05, 0.4));
/// assert!(boxes_collide(&dino, &dino, 0.05, 0.4));
/// ```
pub fn boxes_collide(dino: &Rect, obstacle: &Rect, dino_inset: f32, obstacle_inset: f32) -> bool {
    dino.shrink(dino_inset).overlaps(&obstacle.shrink(obstacle_inset))
}

/// Broad-phase box test followed by a mask comparison
///
/// `dino` and `obstacle` are screen rectangles whose top-left corners
/// place the masks.
pub fn pixels_collide(
    dino: &Rect,
    dino_mask: &PixelMask,
    obstacle: &Rect,
    obstacle_mask: &PixelMask,
) -> bool {
    if !dino.overlaps(obstacle) {
        return false;
    }
    masks_overlap(
        dino_mask,
        (dino.x, dino.y),
        obstacle_mask,
        (obstacle.x, obstacle.y),
    )
}
