// Copyright 2025 Lablup Inc. and Jeongkyu Shin
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

//! Wiring between particles and reports.
//!
//! # Example
//!
//! ```rust
//! use particle_report::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let card = VideoCard::new("NVIDIA GeForce RTX 2070 Super", 8, 2560);
//! let mut report = FileReport::new();
//! let mut out = Vec::new();
//! client(&card, &mut report, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).ends_with("Data was saved to the file\n"));
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use tracing::debug;

use crate::common::config::AppConfig;
use crate::error::Result;
use crate::particle::{HardDrive, Particle, VideoCard};
use crate::report::{ConsoleReport, FileReport, Report};

/// Bind `particle` to `report` and present it to `out`
pub fn client<'a>(
    particle: &'a dyn Particle,
    report: &mut dyn Report<'a>,
    out: &mut dyn Write,
) -> Result<()> {
    debug!(
        particle = particle.kind(),
        report = report.name(),
        "binding particle"
    );
    report.bind(particle);
    report.present(out)
}

/// Run the two canonical scenarios: a video card saved to a file, then a
/// hard drive printed to the console.
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    {
        let card = VideoCard::new(
            AppConfig::DEMO_VIDEO_CARD_MODEL,
            AppConfig::DEMO_VIDEO_CARD_MEMORY_GB,
            AppConfig::DEMO_VIDEO_CARD_CUDA_CORES,
        );
        let mut report = FileReport::new();
        client(&card, &mut report, out)?;
    }
    out.write_all(AppConfig::SCENARIO_SEPARATOR.as_bytes())?;

    let drive = HardDrive::new(
        AppConfig::DEMO_HARD_DRIVE_MODEL,
        AppConfig::DEMO_HARD_DRIVE_CAPACITY_GB,
    );
    let mut report = ConsoleReport::new();
    client(&drive, &mut report, out)?;
    out.flush()?;
    Ok(())
}
