#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

//! HID input-report decoding for callback-based USB host stacks
//!
//! This crate sits on top of an external USB host stack that owns
//! enumeration, transfer scheduling, and report-descriptor parsing, and
//! turns the HID reports that stack delivers into text: keyboard presses
//! into characters, mouse reports into button/movement lines, and unknown
//! reports into byte diffs.
//!
//! # Architecture
//!
//! - [`host`] - the contract the external host stack must provide
//! - [`hid`] - boot-protocol report types and the per-class decoders
//! - [`dispatch`] - usage-based routing for non-boot (generic) reports
//! - [`manager`] - per-device state, callbacks, and the request loop
//! - [`error`] - error types
//!
//! # Quick Start
//!
//! Implement [`HostStack`] for your platform's USB host stack, then forward
//! its HID callbacks to a [`HidInputManager`]:
//!
//! ```no_run
//! use usbh_hid_input::{HidInputManager, HostStack};
//! # use usbh_hid_input::{BootProtocol, ReportInfo, Result};
//! # struct MyStack;
//! # impl HostStack for MyStack {
//! #     fn request_report(&mut self, _: u8, _: u8) -> Result<()> { Ok(()) }
//! #     fn interface_protocol(&self, _: u8, _: u8) -> BootProtocol { BootProtocol::Mouse }
//! #     fn parse_report_descriptor(&self, _: &[u8], _: &mut [ReportInfo]) -> usize { 0 }
//! # }
//! # struct Console;
//! # impl core::fmt::Write for Console {
//! #     fn write_str(&mut self, _: &str) -> core::fmt::Result { Ok(()) }
//! # }
//! # fn on_hid_mount(stack: &mut MyStack, descriptor: &[u8]) -> Result<()> {
//! let mut manager: HidInputManager<4> = HidInputManager::new();
//! let mut console = Console;
//!
//! // from the stack's mount callback:
//! manager.on_mount(stack, 1, 0, descriptor)?;
//!
//! // from the stack's report-received callback:
//! manager.on_report(stack, &mut console, 1, 0, &[0x01, 0x05, 0x00, 0x00])?;
//!
//! // from the idle loop:
//! manager.poll(stack);
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod error;
pub mod hid;
pub mod host;
pub mod manager;

pub use error::{HidError, Result};
pub use host::{BootProtocol, HostStack, ReportInfo};
pub use manager::{HidInputManager, PollState};
