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

//! Hardware component descriptions.
//!
//! A particle knows how to describe itself as text. It knows nothing about
//! where that text ends up; that decision belongs to a [`Report`].
//!
//! [`Report`]: crate::report::Report

pub mod hard_drive;
pub mod processor;
pub mod sink;
pub mod video_card;

pub use hard_drive::HardDrive;
pub use processor::Processor;
pub use sink::Sink;
pub use video_card::VideoCard;

/// Trait implemented by every hardware component that can be reported on.
///
/// Only [`describe`](Particle::describe) differs between components. The
/// sink notifications are shared by every particle.
pub trait Particle {
    /// Short human readable name of the component family, used in logs
    fn kind(&self) -> &'static str;

    /// Multi-line summary of the component, one `Label: value` per line,
    /// each line terminated by `\n`
    fn describe(&self) -> String;

    /// Sentence confirming the description was saved to a file
    fn notify_file_sink(&self) -> &'static str {
        Sink::File.message()
    }

    /// Sentence confirming the description was printed to the console
    fn notify_console_sink(&self) -> &'static str {
        Sink::Console.message()
    }

    /// Sentence confirming the description was shown in a window
    fn notify_window_sink(&self) -> &'static str {
        Sink::Window.message()
    }
}
