//! HID mouse support
//!
//! Implements HID Boot Protocol mouse reports (USB HID Spec 1.11,
//! Appendix B.2) and button/movement decoding to text.

use core::fmt;

use bitflags::bitflags;

use crate::error::{HidError, Result};
use super::constants::BOOT_MOUSE_REPORT_LEN;

/// HID mouse report (boot protocol)
///
/// Standard 3-byte mouse report format:
/// - Byte 0: Button states
/// - Byte 1: X displacement (signed)
/// - Byte 2: Y displacement (signed)
///
/// Some mice include a fourth byte for the scroll wheel.
#[derive(Debug, Clone, Copy)]
pub struct MouseReport {
    /// Button states
    pub buttons: MouseButtons,
    /// X displacement (relative movement)
    pub x: i8,
    /// Y displacement (relative movement)
    pub y: i8,
    /// Scroll wheel displacement (if present)
    pub wheel: i8,
}

impl MouseReport {
    /// Parse report from raw data
    ///
    /// Supports both 3-byte (basic) and 4-byte (with scroll) reports.
    ///
    /// # Example
    ///
    /// ```
    /// use usbh_hid_input::hid::MouseReport;
    ///
    /// // Left button pressed, moved right 5 and up 5
    /// let data: [u8; 4] = [0x01, 0x05, 0xFB, 0x00];
    /// let report = MouseReport::parse(&data).unwrap();
    /// assert!(report.buttons.left());
    /// assert_eq!(report.y, -5);
    /// ```
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < BOOT_MOUSE_REPORT_LEN {
            return Err(HidError::ReportTooShort);
        }

        Ok(Self {
            buttons: MouseButtons::from_bits_truncate(data[0]),
            x: data[1] as i8,
            y: data[2] as i8,
            wheel: if data.len() >= 4 { data[3] as i8 } else { 0 },
        })
    }

    /// Check if mouse moved
    pub fn has_movement(&self) -> bool {
        self.x != 0 || self.y != 0 || self.wheel != 0
    }
}

bitflags! {
    /// Mouse button states
    ///
    /// Standard buttons 1-3 are defined by the boot protocol.
    /// Buttons 4-8 may be present on extended mice.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseButtons: u8 {
        /// Button 1 (left button)
        const LEFT   = 0b00000001;
        /// Button 2 (right button)
        const RIGHT  = 0b00000010;
        /// Button 3 (middle button / wheel click)
        const MIDDLE = 0b00000100;
        /// Button 4 (side button)
        const BUTTON_4 = 0b00001000;
        /// Button 5 (side button)
        const BUTTON_5 = 0b00010000;
    }
}

impl MouseButtons {
    /// Check if left button is pressed
    pub fn left(&self) -> bool {
        self.contains(Self::LEFT)
    }

    /// Check if right button is pressed
    pub fn right(&self) -> bool {
        self.contains(Self::RIGHT)
    }

    /// Check if middle button is pressed
    pub fn middle(&self) -> bool {
        self.contains(Self::MIDDLE)
    }
}

/// Stateful mouse report decoder
///
/// Writes a ` LMR `-style indicator when a button transitions from released
/// to pressed, and the `(x y wheel)` delta triple on every report.
#[derive(Debug)]
pub struct MouseDecoder {
    prev_buttons: MouseButtons,
}

impl Default for MouseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseDecoder {
    /// Decoder with all buttons released
    pub const fn new() -> Self {
        Self {
            prev_buttons: MouseButtons::empty(),
        }
    }

    /// Decode one report, writing button edges and movement to `out`
    ///
    /// The indicator shows each of left/middle/right as its letter when
    /// currently down, `-` otherwise, and is printed only when at least one
    /// button transitioned to pressed. The delta triple is unconditional.
    pub fn process<W: fmt::Write>(&mut self, report: &MouseReport, out: &mut W) {
        let changed = report.buttons ^ self.prev_buttons;
        if !(changed & report.buttons).is_empty() {
            let _ = write!(
                out,
                " {}{}{} ",
                if report.buttons.left() { 'L' } else { '-' },
                if report.buttons.middle() { 'M' } else { '-' },
                if report.buttons.right() { 'R' } else { '-' },
            );
        }

        let _ = write!(out, "({} {} {})\r\n", report.x, report.y, report.wheel);

        self.prev_buttons = report.buttons;
    }
}
