//! Demo 01: Simulated typing session
//!
//! Feeds a scripted sequence of boot keyboard reports through the input
//! manager, exactly as a host stack's report-received callback would, and
//! prints the decoded characters to stdout. Repeated letters are separated
//! by an all-keys-up report, since a held key produces no further output.
//!
//! Run with: `cargo run --example 01_keyboard_sim`

use std::fmt;

use usbh_hid_input::{BootProtocol, HidInputManager, HostStack, ReportInfo, Result};

/// Host stack stand-in: every interface is a boot keyboard and report
/// requests always succeed.
struct SimStack;

impl HostStack for SimStack {
    fn request_report(&mut self, _address: u8, _instance: u8) -> Result<()> {
        Ok(())
    }

    fn interface_protocol(&self, _address: u8, _instance: u8) -> BootProtocol {
        BootProtocol::Keyboard
    }

    fn parse_report_descriptor(&self, _descriptor: &[u8], _infos: &mut [ReportInfo]) -> usize {
        0
    }
}

/// Sink that forwards decoded text straight to stdout
struct Console;

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

const LEFT_SHIFT: u8 = 0x02;

/// One keystroke: modifier byte plus the single pressed keycode
const KEYSTROKES: &[(u8, u8)] = &[
    (LEFT_SHIFT, 0x0B), // H
    (0, 0x08),          // e
    (0, 0x0F),          // l
    (0, 0x0F),          // l
    (0, 0x12),          // o
    (0, 0x2C),          // space
    (LEFT_SHIFT, 0x1A), // W
    (0, 0x12),          // o
    (0, 0x15),          // r
    (0, 0x0F),          // l
    (0, 0x07),          // d
    (LEFT_SHIFT, 0x1E), // !
    (0, 0x28),          // Enter
];

fn report(modifiers: u8, keycode: u8) -> [u8; 8] {
    [modifiers, 0, keycode, 0, 0, 0, 0, 0]
}

fn main() {
    let mut stack = SimStack;
    let mut manager: HidInputManager<1> = HidInputManager::new();
    let mut console = Console;

    manager
        .on_mount(&mut stack, 1, 0, &[])
        .expect("mount failed");

    for &(modifiers, keycode) in KEYSTROKES {
        manager
            .on_report(&mut stack, &mut console, 1, 0, &report(modifiers, keycode))
            .expect("report rejected");
        // key-up between strokes so repeated letters register as new presses
        manager
            .on_report(&mut stack, &mut console, 1, 0, &report(0, 0))
            .expect("report rejected");
        // idle loop keeps the request/response cycle going
        manager.poll(&mut stack);
    }
}
