//! HID report decoding
//!
//! This module turns raw HID input reports into text: keyboard reports into
//! characters, mouse reports into button/movement lines, and everything else
//! into field dumps or byte diffs.
//!
//! # Boot Protocol vs Report Protocol
//!
//! ## Boot Protocol (Simplified)
//! - Fixed report format (8 bytes for keyboard, 3-4 bytes for mouse)
//! - Works with any boot-compatible HID device
//! - No report descriptor parsing needed
//!
//! ## Report Protocol (Generic)
//! - Custom report formats described by the device's report descriptor
//! - The host stack parses the descriptor once at mount; the resulting
//!   [`ReportInfo`](crate::host::ReportInfo) entries drive
//!   [`dispatch`](crate::dispatch) routing by usage page and usage
//!
//! # Decoders
//!
//! Each decoder is a small state machine that diffs the current report
//! against the previous one:
//!
//! - [`KeyboardDecoder`] emits a character per fresh key press
//! - [`MouseDecoder`] emits a button indicator on press edges and the
//!   movement triple on every report
//! - [`RawReportDecoder`] prints `offset:value` pairs for changed bytes
//!
//! # Reference
//!
//! - USB HID Specification 1.11: <https://www.usb.org/document-library/device-class-definition-hid-111>
//! - HID Usage Tables 1.12: <https://usb.org/document-library/hid-usage-tables-15>

pub mod constants;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;

pub use constants::*;
pub use gamepad::{GamepadReport, RawReportDecoder};
pub use keyboard::{KeyCode, KeyModifiers, KeyboardDecoder, KeyboardReport};
pub use mouse::{MouseButtons, MouseDecoder, MouseReport};
