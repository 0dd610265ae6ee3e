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

/// Discrete graphics card
///
/// Described as three lines: model, memory size in GB and CUDA core count.
///
/// ```rust
/// use particle_report::prelude::*;
///
/// let card = VideoCard::new("NVIDIA GeForce RTX 2070 Super", 8, 2560);
/// assert_eq!(
///     card.describe(),
///     "Model: NVIDIA GeForce RTX 2070 Super\nMemory Size: 8GB\nCUDA Cores: 2560\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub model: String,
    pub memory_size_gb: u32,
    pub cuda_cores: u32,
}

impl VideoCard {
    /// Create a video card; `memory_size_gb` is reported as given
    pub fn new(model: impl Into<String>, memory_size_gb: u32, cuda_cores: u32) -> Self {
        Self {
            model: model.into(),
            memory_size_gb,
            cuda_cores,
        }
    }
}

impl Particle for VideoCard {
    fn kind(&self) -> &'static str {
        "video card"
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "Model: {}", self.model);
        let _ = writeln!(out, "Memory Size: {}GB", self.memory_size_gb);
        let _ = writeln!(out, "CUDA Cores: {}", self.cuda_cores);
        out
    }
}
