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
//! High-score persistence
//!
//! The file holds a single native-endian `i32`. A missing, short or
//! otherwise unreadable file is not an error: it reads as a score of zero.

use crate::error::{GameError, GameResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// Best score reached so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct HighScore(pub i32);

impl HighScore {
    /// Raw value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HI {:05}", self.0)
    }
}

/// File-backed high-score store
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Create a store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score, defaulting to zero
    pub fn load(&self) -> HighScore {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("no high score at {}: {e}", self.path.display());
                return HighScore::default();
            }
        };
        match bytes.get(..4).and_then(|b| <[u8; 4]>::try_from(b).ok()) {
            Some(raw) => HighScore(i32::from_ne_bytes(raw)),
            None => {
                log::warn!(
                    "high score file {} is too short ({} bytes), starting from 0",
                    self.path.display(),
                    bytes.len()
                );
                HighScore::default()
            }
        }
    }

    /// Write a score
    pub fn save(&self, score: HighScore) -> GameResult<()> {
        std::fs::write(&self.path, score.0.to_ne_bytes()).map_err(|source| GameError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
