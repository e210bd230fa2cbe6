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
//! # Dino Runner
//!
//! A side-scrolling runner built on a small fixed-capacity ECS.
//!
//! ## Features
//!
//! - **ECS Architecture**: bitmask-tagged entities over flat, pre-sized
//!   component tables, updated by a fixed pipeline of systems
//! - **Closed-form Motion**: speed-scaled sinusoidal jumps and an eased
//!   run-in slide
//! - **Pooled Entities**: obstacles and clouds are repositioned, never
//!   destroyed
//! - **Two Collision Strategies**: inset bounding boxes, or per-pixel masks
//!   behind a bounding-box broad phase
//! - **Headless Runs**: a recording renderer and an optional Rayon-backed
//!   batch runner
//!
//! ## Example
//!
//! ```rust
//! use dino_runner::assets::Textures;
//! use dino_runner::config::GameConfig;
//! use dino_runner::game::{GameState, Session};
//! use dino_runner::platform::FrameInput;
//! use std::sync::Arc;
//!
//! let mut session = Session::new(GameConfig::default(), Arc::new(Textures::placeholder()), 7).unwrap();
//! assert_eq!(session.tick(FrameInput::confirm()), GameState::Playing);
//! for _ in 0..10 {
//!     session.tick(FrameInput::idle());
//! }
//! assert_eq!(session.score(), 1);
//! ```

#![warn(missing_docs)]

/// Texture identity and sprite sheets
pub mod assets;

/// Headless batch runs
pub mod batch;

/// Rectangles, pixel masks and hit tests
pub mod collision;

/// Tuning configuration
pub mod config;

/// Entity Component System implementation
pub mod ecs;

/// Error types
pub mod error;

/// Session state machine
pub mod game;

/// Jump and run-in motion curves
pub mod motion;

/// Renderer and input seams
pub mod platform;

/// High-score persistence
pub mod score;

/// Entity setup and pooled respawns
pub mod spawn;

pub use ecs::{Entity, World};
pub use error::{GameError, GameResult};
pub use game::{GameState, Session};
