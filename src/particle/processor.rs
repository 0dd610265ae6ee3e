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

use std::fmt::Write;

use super::Particle;

/// Central processing unit
///
/// Described as three lines: model, physical core count and hardware
/// thread count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processor {
    pub model: String,
    pub cores: u32,
    pub threads: u32,
}

impl Processor {
    pub fn new(model: impl Into<String>, cores: u32, threads: u32) -> Self {
        Self {
            model: model.into(),
            cores,
            threads,
        }
    }
}

impl Particle for Processor {
    fn kind(&self) -> &'static str {
        "processor"
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Model: {}", self.model);
        let _ = writeln!(out, "Number of Cores: {}", self.cores);
        let _ = writeln!(out, "Number of Threads: {}", self.threads);
        out
    }
}
