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

use std::fmt;

/// Destination a report claims to have delivered its text to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    File,
    Console,
    Window,
}

impl Sink {
    /// Fixed confirmation sentence for this sink, newline terminated
    pub fn message(self) -> &'static str {
        match self {
            Sink::File => "Data was saved to the file\n",
            Sink::Console => "Data was printed in the console\n",
            Sink::Window => "Data was printed in the message box\n",
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sink::File => "file",
            Sink::Console => "console",
            Sink::Window => "window",
        };
        f.write_str(name)
    }
}
