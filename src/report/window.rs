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

use crate::particle::{Particle, Sink};

use super::Report;

/// Report that shows the description in a message box
///
/// No window is opened. The report appends the message box sentence after
/// the particle description. Starts unbound; call [`Report::bind`] before
/// [`Report::present`].
#[derive(Default, Clone, Copy)]
pub struct WindowReport<'a> {
    particle: Option<&'a dyn Particle>,
}

impl WindowReport<'_> {
    /// Create an unbound report
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> Report<'a> for WindowReport<'a> {
    fn name(&self) -> &'static str {
        "WindowReport"
    }

    fn sink(&self) -> Sink {
        Sink::Window
    }

    fn bind(&mut self, particle: &'a dyn Particle) {
        self.particle = Some(particle);
    }

    fn particle(&self) -> Option<&'a dyn Particle> {
        self.particle
    }
}
