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

//! Error types for the particle-report library.
//!
//! Presenting a report can only go wrong in two ways: the report was never
//! bound to a particle, or the output writer rejected the text.
//!
//! # Example
//!
//! ```rust
//! use particle_report::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let drive = HardDrive::new("Seagate Barracuda", 2000);
//!     let mut report = ConsoleReport::new();
//!     client(&drive, &mut report, &mut std::io::sink())?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for particle-report operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A report was asked to present before any particle was bound to it.
    ///
    /// Carries the name of the offending report.
    #[error("{0} has no particle bound; call bind() before present()")]
    UnboundReport(&'static str),

    /// Writing the report output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for particle-report operations.
pub type Result<T> = std::result::Result<T, Error>;
