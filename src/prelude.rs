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

//! The particle-report prelude.
//!
//! ```rust
//! use particle_report::prelude::*;
//! ```

pub use crate::client::{client, run_demo};
pub use crate::error::{Error, Result};
pub use crate::particle::{HardDrive, Particle, Processor, Sink, VideoCard};
pub use crate::report::{ConsoleReport, FileReport, Report, ReportKind, WindowReport};
