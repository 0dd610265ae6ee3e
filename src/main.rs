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

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use particle_report::cli::{Cli, Commands, PresentArgs};
use particle_report::client::{client, run_demo};
use particle_report::common::config::AppConfig;
use particle_report::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Some(Commands::Present(args)) => present(args, &mut out),
        Some(Commands::Demo) | None => run_demo(&mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn present(args: PresentArgs, out: &mut dyn Write) -> Result<()> {
    let particle = args.particle.into_particle();
    let mut report = args.report.build();
    client(particle.as_ref(), report.as_mut(), out)?;
    out.flush()?;
    Ok(())
}

// Logs go to stderr so stdout carries only report text.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| AppConfig::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
