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

/// Spinning or solid state disk
///
/// Described as two lines: model and capacity in GB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardDrive {
    pub model: String,
    pub capacity_gb: u32,
}

impl HardDrive {
    pub fn new(model: impl Into<String>, capacity_gb: u32) -> Self {
        Self {
            model: model.into(),
            capacity_gb,
        }
    }
}

impl Particle for HardDrive {
    fn kind(&self) -> &'static str {
        "hard drive"
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Model: {}", self.model);
        let _ = writeln!(out, "Capacity: {}GB", self.capacity_gb);
        out
    }
}
