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
//! Headless autopilot runs
//!
//! Usage: `sim-harness [SESSIONS] [TICKS] [CONFIG]`
//!
//! Runs one autopilot session per seed `0..SESSIONS` against placeholder
//! sprite sheets and logs a report per session. Set `RUST_LOG=debug` for
//! per-run detail.

use dino_runner::assets::Textures;
use dino_runner::batch::run_batch;
use dino_runner::config::GameConfig;
use dino_runner::GameResult;
use std::sync::Arc;
use std::time::Instant;

const DEFAULT_SESSIONS: u64 = 8;
const DEFAULT_TICKS: u64 = 10_000;

fn parse_arg(args: &[String], index: usize, default: u64) -> u64 {
    match args.get(index) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("expected a number, got {raw:?}; using {default}");
            default
        }),
        None => default,
    }
}

fn run(args: &[String]) -> GameResult<()> {
    let sessions = parse_arg(args, 1, DEFAULT_SESSIONS);
    let ticks = parse_arg(args, 2, DEFAULT_TICKS);
    let config = match args.get(3) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.validate()?;

    let seeds: Vec<u64> = (0..sessions).collect();
    log::info!("running {sessions} sessions of {ticks} ticks");
    let started = Instant::now();
    let reports = run_batch(&config, Arc::new(Textures::placeholder()), &seeds, ticks)?;
    let elapsed = started.elapsed();

    for report in &reports {
        log::info!(
            "seed {:>3}: best {:>5}, deaths {:>3}, mask cache {:.1}% of {} lookups",
            report.seed,
            report.best_score,
            report.deaths,
            report.mask_stats.hit_rate(),
            report.mask_stats.hits + report.mask_stats.misses,
        );
    }
    let total_ticks = sessions * ticks;
    log::info!(
        "{total_ticks} ticks in {:.2?} ({:.0} ticks/s)",
        elapsed,
        total_ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    Ok(())
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
