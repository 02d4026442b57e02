//! Demo 02: Raw report diffing for a generic device
//!
//! Mounts a generic (non-boot) interface whose descriptor parses to a
//! single gamepad report type with report-ID framing, then feeds a few
//! framed reports through the manager. Changed bytes show up as
//! `offset:VALUE` pairs; a report with an unknown ID is dropped.
//!
//! Run with: `cargo run --example 02_raw_report_diff`

use std::fmt;

use usbh_hid_input::hid::{USAGE_DESKTOP_GAMEPAD, USAGE_PAGE_DESKTOP};
use usbh_hid_input::{BootProtocol, HidInputManager, HostStack, ReportInfo, Result};

/// Host stack stand-in for a generic gamepad on report ID 1
struct SimStack;

impl HostStack for SimStack {
    fn request_report(&mut self, _address: u8, _instance: u8) -> Result<()> {
        Ok(())
    }

    fn interface_protocol(&self, _address: u8, _instance: u8) -> BootProtocol {
        BootProtocol::None
    }

    fn parse_report_descriptor(&self, _descriptor: &[u8], infos: &mut [ReportInfo]) -> usize {
        infos[0] = ReportInfo {
            report_id: 1,
            usage: USAGE_DESKTOP_GAMEPAD,
            usage_page: USAGE_PAGE_DESKTOP,
        };
        1
    }
}

struct Console;

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

fn main() {
    let mut stack = SimStack;
    let mut manager: HidInputManager<1> = HidInputManager::new();
    let mut console = Console;

    manager
        .on_mount(&mut stack, 1, 0, &[0x05, 0x01, 0x09, 0x05])
        .expect("mount failed");

    // stick centered, one button pressed, then released, then a second axis
    let frames: &[&[u8]] = &[
        &[1, 0x80, 0x80, 0x00, 0x00, 0x01],
        &[1, 0x80, 0x80, 0x00, 0x00, 0x00],
        &[1, 0x80, 0x7F, 0x10, 0x00, 0x00],
    ];

    for frame in frames {
        manager
            .on_report(&mut stack, &mut console, 1, 0, frame)
            .expect("report rejected");
    }

    // a report ID the descriptor never declared is dropped
    let err = manager.on_report(&mut stack, &mut console, 1, 0, &[7, 0xFF]);
    println!("unknown report id -> {}", err.unwrap_err());
}
