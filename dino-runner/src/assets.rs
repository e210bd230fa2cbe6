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
//! Texture identity and decoded sprite sheets
//!
//! The simulation only ever refers to textures through a [`TextureId`]. The
//! decoded RGBA pixels are kept on the CPU side so the collision system can
//! read per-pixel alpha; a windowed frontend uploads the same pixels to the
//! GPU keyed by the same id.

use crate::error::{GameError, GameResult};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TextureId(u8);

impl TextureId {
    /// Raw handle value
    pub fn raw(&self) -> u8 {
        self.0
    }
}

/// Every sprite sheet the game draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Player sheet: idle, blink, two run frames, two dead frames
    Dino,
    /// Player duck sheet: two crouched run frames
    DinoDuck,
    /// Scrolling ground strip
    Horizon,
    /// Flying obstacle, two wing frames
    Pterodactyl,
    /// Restart button
    Restart,
    /// Strip of large cactus variants
    CactusLarge,
    /// Strip of small cactus variants
    CactusSmall,
    /// Background cloud
    Cloud,
}

impl TextureKind {
    /// All kinds in handle order
    pub const ALL: [TextureKind; 8] = [
        TextureKind::Dino,
        TextureKind::DinoDuck,
        TextureKind::Horizon,
        TextureKind::Pterodactyl,
        TextureKind::Restart,
        TextureKind::CactusLarge,
        TextureKind::CactusSmall,
        TextureKind::Cloud,
    ];

    /// Handle for this sheet
    pub fn id(self) -> TextureId {
        TextureId(self as u8)
    }

    /// File name under the resource directory
    pub fn file_name(self) -> &'static str {
        match self {
            TextureKind::Dino => "dino.png",
            TextureKind::DinoDuck => "dino-duck.png",
            TextureKind::Horizon => "horizon.png",
            TextureKind::Pterodactyl => "ptero.png",
            TextureKind::Restart => "restart.png",
            TextureKind::CactusLarge => "cactus-large.png",
            TextureKind::CactusSmall => "cactus-small.png",
            TextureKind::Cloud => "cloud.png",
        }
    }

    /// Number of equally wide frames laid out horizontally in the sheet
    pub fn frame_count(self) -> u32 {
        match self {
            TextureKind::Dino => 6,
            TextureKind::DinoDuck => 2,
            TextureKind::Pterodactyl => 2,
            TextureKind::CactusLarge | TextureKind::CactusSmall => 6,
            TextureKind::Horizon | TextureKind::Restart | TextureKind::Cloud => 1,
        }
    }

    // Canonical sheet size, used for placeholder sheets.
    fn placeholder_size(self) -> (u32, u32) {
        match self {
            TextureKind::Dino => (88 * 6, 94),
            TextureKind::DinoDuck => (118 * 2, 94),
            TextureKind::Horizon => (1200, 12),
            TextureKind::Pterodactyl => (46 * 2, 40),
            TextureKind::Restart => (46, 40),
            TextureKind::CactusLarge => (25 * 6, 50),
            TextureKind::CactusSmall => (17 * 6, 35),
            TextureKind::Cloud => (46, 27),
        }
    }
}

/// A decoded texture with its pixels kept for alpha queries
#[derive(Debug, Clone)]
pub struct Texture {
    kind: TextureKind,
    pixels: RgbaImage,
}

impl Texture {
    /// Wrap decoded pixels as the given sheet
    pub fn from_image(kind: TextureKind, pixels: RgbaImage) -> Self {
        Texture { kind, pixels }
    }

    /// Which sheet this is
    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    /// Handle of this texture
    pub fn id(&self) -> TextureId {
        self.kind.id()
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width of one frame of the sheet
    pub fn frame_width(&self) -> f32 {
        self.width() as f32 / self.kind.frame_count() as f32
    }

    /// Alpha of a pixel; anything outside the image reads as transparent
    pub fn alpha(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return 0;
        }
        self.pixels.get_pixel(x as u32, y as u32).0[3]
    }

    /// Raw RGBA bytes, row-major
    pub fn rgba(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// The full set of sprite sheets, indexed by [`TextureId`]
#[derive(Debug, Clone)]
pub struct Textures {
    sheets: Vec<Texture>,
}

impl Textures {
    /// Decode every sheet from `dir`
    ///
    /// A missing or undecodable file is fatal for startup.
    pub fn load(dir: impl AsRef<Path>) -> GameResult<Self> {
        let dir = dir.as_ref();
        let mut sheets = Vec::with_capacity(TextureKind::ALL.len());
        for kind in TextureKind::ALL {
            let path = dir.join(kind.file_name());
            let decoded = image::open(&path).map_err(|source| GameError::Asset {
                path: path.clone(),
                source,
            })?;
            let texture = Texture::from_image(kind, decoded.to_rgba8());
            log::debug!(
                "loaded {} ({}x{})",
                path.display(),
                texture.width(),
                texture.height()
            );
            sheets.push(texture);
        }
        Ok(Textures { sheets })
    }

    /// Build in-memory sheets with the canonical dimensions
    ///
    /// Every sheet is fully opaque except the duck sheet, whose frames are
    /// solid only in the bottom 60 rows so a crouched player clears flyers.
    pub fn placeholder() -> Self {
        let ink = Rgba([83, 83, 83, 255]);
        let sheets = TextureKind::ALL
            .iter()
            .map(|&kind| {
                let (w, h) = kind.placeholder_size();
                let pixels = match kind {
                    TextureKind::DinoDuck => RgbaImage::from_fn(w, h, |_, y| {
                        if y >= h - 60 {
                            ink
                        } else {
                            Rgba([0, 0, 0, 0])
                        }
                    }),
                    _ => RgbaImage::from_pixel(w, h, ink),
                };
                Texture::from_image(kind, pixels)
            })
            .collect();
        Textures { sheets }
    }

    /// Replace one sheet, keeping the rest
    pub fn with_sheet(mut self, texture: Texture) -> Self {
        let index = texture.kind() as usize;
        self.sheets[index] = texture;
        self
    }

    /// Look up a sheet by kind
    pub fn get(&self, kind: TextureKind) -> &Texture {
        &self.sheets[kind as usize]
    }

    /// Look up a sheet by handle
    pub fn by_id(&self, id: TextureId) -> Option<&Texture> {
        self.sheets.get(id.raw() as usize)
    }

    /// Iterate over every sheet
    pub fn iter(&self) -> impl Iterator<Item = &Texture> {
        self.sheets.iter()
    }
}
