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
//! Per-pixel opacity masks
//!
//! A mask records which pixels of a sprite's current source region are
//! opaque (alpha > 0). Overlap tests run on the integer pixel grid: each
//! mask is placed at its screen position rounded down, and only the shared
//! region of the two placements is scanned.

use crate::assets::Texture;
use crate::collision::Rect;

/// Opacity of every pixel in a sprite region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    solid: Vec<bool>,
}

impl PixelMask {
    /// Build a mask from a generator called once per pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut solid = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                solid.push(f(x, y));
            }
        }
        PixelMask {
            width,
            height,
            solid,
        }
    }

    /// A mask with every pixel opaque
    pub fn opaque(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    /// A mask with every pixel transparent
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Build the mask for `source` in `texture`
    ///
    /// The region is snapped to whole pixels; parts of it outside the
    /// texture read as transparent.
    pub fn from_region(texture: &Texture, source: Rect) -> Self {
        let x0 = source.x.round() as i64;
        let y0 = source.y.round() as i64;
        let width = source.w.round().max(0.0) as u32;
        let height = source.h.round().max(0.0) as u32;
        Self::from_fn(width, height, |x, y| {
            texture.alpha(x0 + x as i64, y0 + y as i64) > 0
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether a local pixel is opaque; outside the mask is transparent
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.solid[(y as u64 * self.width as u64 + x as u64) as usize]
    }

    /// Number of opaque pixels
    pub fn solid_count(&self) -> usize {
        self.solid.iter().filter(|&&s| s).count()
    }
}

/// Test two placed masks for any pair of coincident opaque pixels
///
/// `a_at` and `b_at` are the screen positions of each mask's top-left
/// pixel.
///
/// # Examples
///
/// ```
/// use dino_runner::collision::{masks_overlap, PixelMask};
///
/// let a = PixelMask::opaque(4, 4);
/// let b = PixelMask::opaque(4, 4);
/// assert!(masks_overlap(&a, (0.0, 0.0), &b, (3.0, 3.0)));
/// assert!(!masks_overlap(&a, (0.0, 0.0), &b, (4.0, 0.0)));
/// ```
pub fn masks_overlap(a: &PixelMask, a_at: (f32, f32), b: &PixelMask, b_at: (f32, f32)) -> bool {
    let (ax, ay) = (a_at.0.floor() as i64, a_at.1.floor() as i64);
    let (bx, by) = (b_at.0.floor() as i64, b_at.1.floor() as i64);

    let left = ax.max(bx);
    let top = ay.max(by);
    let right = (ax + a.width as i64).min(bx + b.width as i64);
    let bottom = (ay + a.height as i64).min(by + b.height as i64);

    for y in top..bottom {
        for x in left..right {
            if a.is_solid(x - ax, y - ay) && b.is_solid(x - bx, y - by) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{TextureKind, Textures};

    fn single_pixel(size: u32, px: u32, py: u32) -> PixelMask {
        PixelMask::from_fn(size, size, |x, y| x == px && y == py)
    }

    #[test]
    fn test_transparent_masks_never_overlap() {
        let a = PixelMask::transparent(10, 10);
        let b = PixelMask::transparent(10, 10);
        assert!(!masks_overlap(&a, (0.0, 0.0), &b, (2.0, 2.0)));
    }

    #[test]
    fn test_opaque_masks_overlap() {
        let a = PixelMask::opaque(10, 10);
        let b = PixelMask::opaque(10, 10);
        assert!(masks_overlap(&a, (0.0, 0.0), &b, (9.0, 9.0)));
    }

    #[test]
    fn test_single_pixel_alignment() {
        let a = single_pixel(5, 2, 2);
        let b = single_pixel(5, 0, 0);
        // b's solid pixel lands on (12, 12), a's on (12, 12)
        assert!(masks_overlap(&a, (10.0, 10.0), &b, (12.0, 12.0)));
        assert!(!masks_overlap(&a, (10.0, 10.0), &b, (13.0, 12.0)));
        assert!(!masks_overlap(&a, (10.0, 10.0), &b, (12.0, 11.0)));
    }

    #[test]
    fn test_mask_from_region() {
        let textures = Textures::placeholder();
        let duck = textures.get(TextureKind::DinoDuck);
        let mask = PixelMask::from_region(duck, Rect::new(118.0, 0.0, 118.0, 94.0));
        assert_eq!(mask.width(), 118);
        assert_eq!(mask.height(), 94);
        assert!(!mask.is_solid(0, 0));
        assert!(mask.is_solid(0, 93));
        assert_eq!(mask.solid_count(), 118 * 60);
    }

    #[test]
    fn test_region_past_texture_edge_is_transparent() {
        let textures = Textures::placeholder();
        let cloud = textures.get(TextureKind::Cloud);
        let mask = PixelMask::from_region(cloud, Rect::new(40.0, 0.0, 10.0, 1.0));
        assert_eq!(mask.solid_count(), 6);
    }
}
