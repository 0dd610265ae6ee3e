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

//! Integration tests for the particle-report library API.

use std::io::{self, Write};

use particle_report::prelude::*;

fn render(particle: &dyn Particle, kind: ReportKind) -> String {
    let mut report = kind.build();
    let mut out = Vec::new();
    client(particle, report.as_mut(), &mut out).expect("client should succeed");
    String::from_utf8(out).expect("report output is UTF-8")
}

#[test]
fn test_video_card_saved_to_file() {
    let card = VideoCard::new("NVIDIA GeForce RTX 2070 Super", 8, 2560);
    assert_eq!(
        render(&card, ReportKind::File),
        "Model: NVIDIA GeForce RTX 2070 Super\nMemory Size: 8GB\nCUDA Cores: 2560\nData was saved to the file\n"
    );
}

#[test]
fn test_hard_drive_printed_to_console() {
    let drive = HardDrive::new("Seagate Barracuda", 2000);
    assert_eq!(
        render(&drive, ReportKind::Console),
        "Model: Seagate Barracuda\nCapacity: 2000GB\nData was printed in the console\n"
    );
}

#[test]
fn test_window_report_appends_message_box_sentence() {
    let particles: [&dyn Particle; 3] = [
        &VideoCard::new("Radeon RX 7900 XTX", 24, 0),
        &Processor::new("Intel Core i7-13700K", 16, 24),
        &HardDrive::new("Toshiba X300", 4000),
    ];

    for particle in particles {
        let output = render(particle, ReportKind::Window);
        assert!(output.starts_with(&particle.describe()));
        assert!(output.ends_with("Data was printed in the message box\n"));
        assert_eq!(
            output.len(),
            particle.describe().len() + Sink::Window.message().len()
        );
    }
}

#[test]
fn test_processor_description() {
    let cpu = Processor::new("AMD Ryzen 9 7950X", 16, 32);
    assert_eq!(
        render(&cpu, ReportKind::Console),
        "Model: AMD Ryzen 9 7950X\nNumber of Cores: 16\nNumber of Threads: 32\nData was printed in the console\n"
    );
}

#[test]
fn test_present_twice_yields_identical_output() {
    let drive = HardDrive::new("Seagate Barracuda", 2000);
    let mut report = FileReport::new();
    report.bind(&drive);

    let mut first = Vec::new();
    let mut second = Vec::new();
    report.present(&mut first).unwrap();
    report.present(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unbound_report_is_rejected() {
    let report = ConsoleReport::new();
    let mut out = Vec::new();
    let err = report.present(&mut out).unwrap_err();

    assert!(matches!(err, Error::UnboundReport("ConsoleReport")));
    assert!(out.is_empty());
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_reported() {
    let card = VideoCard::new("GTX 1080", 8, 2560);
    let mut report = WindowReport::new();
    let err = client(&card, &mut report, &mut ClosedPipe).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn test_demo_output() {
    let mut out = Vec::new();
    run_demo(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let (first, second) = text
        .split_once("\n\n\n")
        .expect("scenarios are separated by a blank line pair");
    assert_eq!(
        first,
        "Model: NVIDIA GeForce RTX 2070 Super\nMemory Size: 8GB\nCUDA Cores: 2560\nData was saved to the file"
    );
    assert_eq!(
        second,
        "Model: Seagate Barracuda\nCapacity: 2000GB\nData was printed in the console\n"
    );
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
