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

use clap::{Parser, Subcommand};

use crate::particle::{HardDrive, Particle, Processor, VideoCard};
use crate::report::ReportKind;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the built-in scenarios. (default)
    Demo,
    /// Present a single hardware component through the chosen report.
    Present(PresentArgs),
}

#[derive(Parser)]
pub struct PresentArgs {
    /// Where the report claims to deliver the description.
    #[arg(short, long, value_enum, default_value_t = ReportKind::Console)]
    pub report: ReportKind,
    #[command(subcommand)]
    pub particle: ParticleArgs,
}

#[derive(Subcommand, Clone)]
pub enum ParticleArgs {
    /// A graphics card.
    VideoCard {
        #[arg(long)]
        model: String,
        /// Memory size in GB.
        #[arg(long)]
        memory_size: u32,
        #[arg(long)]
        cuda_cores: u32,
    },
    /// A CPU.
    Processor {
        #[arg(long)]
        model: String,
        #[arg(long)]
        cores: u32,
        #[arg(long)]
        threads: u32,
    },
    /// A disk.
    HardDrive {
        #[arg(long)]
        model: String,
        /// Capacity in GB.
        #[arg(long)]
        capacity: u32,
    },
}

impl ParticleArgs {
    pub fn into_particle(self) -> Box<dyn Particle> {
        match self {
            ParticleArgs::VideoCard {
                model,
                memory_size,
                cuda_cores,
            } => Box::new(VideoCard::new(model, memory_size, cuda_cores)),
            ParticleArgs::Processor {
                model,
                cores,
                threads,
            } => Box::new(Processor::new(model, cores, threads)),
            ParticleArgs::HardDrive { model, capacity } => {
                Box::new(HardDrive::new(model, capacity))
            }
        }
    }
}
