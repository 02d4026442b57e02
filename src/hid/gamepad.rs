//! HID gamepad and raw report support
//!
//! There is no boot protocol for gamepads, so gamepad reports arrive through
//! the generic dispatcher. Two renderings exist: a full field dump for
//! reports following the common gamepad layout, and a byte-diff printer that
//! works for any report shape. The diff printer is the default fallback; the
//! field dump assumes the device actually uses the common layout.

use core::fmt;

use crate::error::{HidError, Result};
use super::constants::MAX_GENERIC_REPORT;

/// Gamepad report in the common HID layout
///
/// Field order on the wire: x, y, z, rz, rx, ry (signed 8-bit axes), hat
/// switch, then a 32-bit little-endian button mask.
#[derive(Debug, Clone, Copy)]
pub struct GamepadReport {
    /// Left stick X
    pub x: i8,
    /// Left stick Y
    pub y: i8,
    /// Right stick X
    pub z: i8,
    /// Right stick Y
    pub rz: i8,
    /// Left trigger
    pub rx: i8,
    /// Right trigger
    pub ry: i8,
    /// Hat switch position (4-bit direction encoding)
    pub hat: u8,
    /// Button bitmask
    pub buttons: u32,
}

impl GamepadReport {
    /// Report length in bytes
    pub const LEN: usize = 11;

    /// Parse report from raw data
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::LEN {
            return Err(HidError::ReportTooShort);
        }

        Ok(Self {
            x: data[0] as i8,
            y: data[1] as i8,
            z: data[2] as i8,
            rz: data[3] as i8,
            rx: data[4] as i8,
            ry: data[5] as i8,
            hat: data[6],
            buttons: u32::from_le_bytes([data[7], data[8], data[9], data[10]]),
        })
    }

    /// Write a full field dump to `out`
    pub fn dump<W: fmt::Write>(&self, out: &mut W) {
        let _ = write!(out, "\r\nGamepad report\r\n");
        let _ = write!(out, "Delta x movement = {}\r\n", self.x);
        let _ = write!(out, "Delta y movement = {}\r\n", self.y);
        let _ = write!(out, "Delta z movement = {}\r\n", self.z);
        let _ = write!(out, "Delta rx movement = {}\r\n", self.rx);
        let _ = write!(out, "Delta ry movement = {}\r\n", self.ry);
        let _ = write!(out, "Delta rz movement = {}\r\n", self.rz);
        let _ = write!(out, "Hat = {:02X}\r\n", self.hat);
        let _ = write!(out, "Buttons = {:08X}\r\n", self.buttons);
    }
}

/// Byte-diff printer for reports of unknown shape
///
/// Keeps the last [`MAX_GENERIC_REPORT`] bytes seen and prints
/// `offset:VALUE` pairs for bytes that changed since the previous report,
/// breaking the line after offset 20. Bytes past the tracked window are
/// ignored.
#[derive(Debug)]
pub struct RawReportDecoder {
    last: [u8; MAX_GENERIC_REPORT],
}

impl Default for RawReportDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RawReportDecoder {
    /// Decoder with an all-zero comparison window
    pub const fn new() -> Self {
        Self {
            last: [0; MAX_GENERIC_REPORT],
        }
    }

    /// Print changed bytes of `data` against the stored window
    pub fn process<W: fmt::Write>(&mut self, data: &[u8], out: &mut W) {
        let _ = out.write_str("New report:\r\n");

        for (i, &byte) in data.iter().take(MAX_GENERIC_REPORT).enumerate() {
            if self.last[i] != byte {
                let _ = write!(out, "{}:{:02X} ", i, byte);
            }
            if i == 20 {
                let _ = out.write_str("\r\n");
            }
            self.last[i] = byte;
        }

        let _ = out.write_str("\r\n");
    }
}
