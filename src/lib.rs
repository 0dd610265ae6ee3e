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

//! Hardware component descriptions presented through interchangeable reports.
//!
//! [`particle`] holds what is described, [`report`] holds how it is
//! presented, and [`client::client`] joins one of each.

pub mod cli;
pub mod client;
pub mod error;
pub mod particle;
pub mod prelude;
pub mod report;
#[cfg(test)]
mod utils;

pub mod common {
    pub mod config;
}

pub use error::{Error, Result};
