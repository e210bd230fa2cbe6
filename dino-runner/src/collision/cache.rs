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
//! Mask reuse across collision checks
//!
//! Building a [`PixelMask`] reads every pixel of a sprite region. Sprite
//! regions come from a small fixed set (a few frames per sheet), so masks
//! are kept keyed by texture and source rectangle. A disabled cache builds
//! a fresh mask on every request and drops it after use; results are the
//! same either way.

use crate::assets::{TextureId, Textures};
use crate::collision::{PixelMask, Rect};
use std::collections::HashMap;
use std::sync::Arc;

/// Statistics for monitoring cache effectiveness
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Requests served from the cache
    pub hits: usize,
    /// Requests that built a new mask
    pub misses: usize,
    /// Masks currently held
    pub entries: usize,
}

impl CacheStats {
    /// Calculate the hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

// f32 is not Hash; key on the exact bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MaskKey {
    texture: TextureId,
    rect: [u32; 4],
}

impl MaskKey {
    fn new(texture: TextureId, source: Rect) -> Self {
        MaskKey {
            texture,
            rect: [
                source.x.to_bits(),
                source.y.to_bits(),
                source.w.to_bits(),
                source.h.to_bits(),
            ],
        }
    }
}

/// Cache of pixel masks keyed by (texture, source rectangle)
#[derive(Debug, Default)]
pub struct MaskCache {
    enabled: bool,
    masks: HashMap<MaskKey, Arc<PixelMask>>,
    stats: CacheStats,
}

impl MaskCache {
    /// Create a cache; a disabled cache never stores masks
    pub fn new(enabled: bool) -> Self {
        MaskCache {
            enabled,
            masks: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Whether masks are kept between requests
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the mask for a sprite region, building it on a miss
    ///
    /// Returns `None` if the texture id is unknown.
    pub fn mask(
        &mut self,
        textures: &Textures,
        texture: TextureId,
        source: Rect,
    ) -> Option<Arc<PixelMask>> {
        let key = MaskKey::new(texture, source);
        if let Some(mask) = self.masks.get(&key) {
            self.stats.hits += 1;
            return Some(Arc::clone(mask));
        }

        let sheet = textures.by_id(texture)?;
        let mask = Arc::new(PixelMask::from_region(sheet, source));
        self.stats.misses += 1;
        if self.enabled {
            self.masks.insert(key, Arc::clone(&mask));
            self.stats.entries = self.masks.len();
            log::trace!(
                "MaskCache: cached {:?} region {:?} (hit rate: {:.1}%)",
                sheet.kind(),
                source,
                self.stats.hit_rate()
            );
        }
        Some(mask)
    }

    /// Get a snapshot of the statistics
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Drop every cached mask
    pub fn clear(&mut self) {
        self.masks.clear();
        self.stats.entries = 0;
    }

    /// Number of masks held
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Check whether no masks are held
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
