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
//! Error types
//!
//! Only setup can fail. Once a session is running, systems skip entities
//! they cannot process and the high score falls back to zero, so nothing in
//! the per-tick path returns an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up or persisting a game session
#[derive(Error, Debug)]
pub enum GameError {
    /// More entities were requested than the world has slots for.
    #[error("entity capacity exceeded: world holds at most {capacity} entities")]
    CapacityExceeded {
        /// Fixed number of slots in the world
        capacity: usize,
    },

    /// A required sprite sheet is missing or could not be decoded.
    #[error("failed to load asset {path}: {source}")]
    Asset {
        /// File that failed to load
        path: PathBuf,
        /// Underlying decode or I/O failure
        #[source]
        source: image::ImageError,
    },

    /// Configuration could not be parsed or holds invalid values.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for setup and persistence operations
pub type GameResult<T> = Result<T, GameError>;
