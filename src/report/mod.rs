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

//! Presentation strategies bound to a particle.
//!
//! A report borrows a [`Particle`] and decides which sink the description is
//! delivered to. Reports and particles vary independently: any report can
//! present any particle.

pub mod console;
pub mod file;
pub mod window;

pub use console::ConsoleReport;
pub use file::FileReport;
pub use window::WindowReport;

use std::io::Write;

use clap::ValueEnum;
use tracing::debug;

use crate::error::{Error, Result};
use crate::particle::{Particle, Sink};

/// Trait for presenting a bound particle
///
/// A report is the abstraction side of the pairing: it decides where the
/// description goes, while the bound [`Particle`] decides what is said.
/// Implementors only provide identity, sink choice and the binding slot;
/// [`present`](Report::present) is shared.
///
/// The report never owns its particle; the borrow lives for `'a`, so a
/// report cannot outlive the component it describes.
///
/// # Example
///
/// ```rust
/// use particle_report::prelude::*;
///
/// let cpu = Processor::new("AMD Ryzen 7 5800X", 8, 16);
/// let mut report = WindowReport::new();
/// report.bind(&cpu);
///
/// let mut out = Vec::new();
/// report.present(&mut out).unwrap();
/// assert!(String::from_utf8_lossy(&out).ends_with("Data was printed in the message box\n"));
/// ```
pub trait Report<'a> {
    /// Type name of the report, e.g. `"ConsoleReport"`.
    ///
    /// Carried by [`Error::UnboundReport`] and attached to log events.
    fn name(&self) -> &'static str;

    /// Sink this report delivers to
    ///
    /// Fixed per report type; it selects which particle notification
    /// [`notify`](Report::notify) asks for.
    fn sink(&self) -> Sink;

    /// Bind a particle, replacing any previously bound one
    ///
    /// No validation happens here; an unbound report is only detected by
    /// [`present`](Report::present).
    fn bind(&mut self, particle: &'a dyn Particle);

    /// Currently bound particle, if any
    fn particle(&self) -> Option<&'a dyn Particle>;

    /// Ask the particle for the confirmation sentence of this report's sink
    fn notify(&self, particle: &dyn Particle) -> &'static str {
        match self.sink() {
            Sink::File => particle.notify_file_sink(),
            Sink::Console => particle.notify_console_sink(),
            Sink::Window => particle.notify_window_sink(),
        }
    }

    /// Write the particle description followed by the sink sentence
    ///
    /// # Errors
    /// * [`Error::UnboundReport`] if [`bind`](Report::bind) was never called.
    ///   Nothing is written in that case.
    /// * [`Error::Io`] if the writer fails
    fn present(&self, out: &mut dyn Write) -> Result<()> {
        let particle = self.particle().ok_or(Error::UnboundReport(self.name()))?;
        debug!(
            report = self.name(),
            particle = particle.kind(),
            sink = %self.sink(),
            "presenting particle"
        );

        let mut text = particle.describe();
        text.push_str(self.notify(particle));
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Report selection for the command line
///
/// Maps `--report console|window|file` to a concrete report type chosen at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportKind {
    #[default]
    Console,
    Window,
    File,
}

impl ReportKind {
    /// Create a fresh, unbound report of this kind
    pub fn build<'a>(self) -> Box<dyn Report<'a> + 'a> {
        match self {
            ReportKind::Console => Box::new(ConsoleReport::new()),
            ReportKind::Window => Box::new(WindowReport::new()),
            ReportKind::File => Box::new(FileReport::new()),
        }
    }
}
