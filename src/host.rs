//! Host stack contract
//!
//! The USB host stack proper (enumeration, endpoint scheduling, transfer
//! retries, report-descriptor parsing) lives outside this crate. This module
//! defines the narrow surface the input layer consumes: a way to arm the next
//! inbound report, a boot-protocol query, and the stack's descriptor parser.
//!
//! A platform integration implements [`HostStack`] once and forwards the
//! stack's mount/unmount/report callbacks to
//! [`HidInputManager`](crate::manager::HidInputManager).

use crate::error::Result;

/// Boot protocol reported by an HID interface
///
/// Interfaces with `None` carry device-defined reports and are routed through
/// the generic dispatcher; keyboard and mouse interfaces use the fixed boot
/// report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BootProtocol {
    /// No boot protocol (generic report protocol)
    None = 0x00,
    /// Keyboard boot protocol
    Keyboard = 0x01,
    /// Mouse boot protocol
    Mouse = 0x02,
}

impl BootProtocol {
    /// Create from interface protocol code
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x01 => Self::Keyboard,
            0x02 => Self::Mouse,
            _ => Self::None,
        }
    }
}

/// Parsed report metadata for one report type of an interface
///
/// Produced by the host stack's descriptor parser at mount time and cached
/// per device instance. Immutable after mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportInfo {
    /// Report ID, 0 when the interface sends un-framed reports
    pub report_id: u8,
    /// HID usage within the usage page
    pub usage: u16,
    /// HID usage page
    pub usage_page: u16,
}

/// Operations the input layer requires from the external USB host stack
///
/// Methods take device address and interface instance, matching the identity
/// the stack hands to its callbacks.
pub trait HostStack {
    /// Arm the next inbound report for the interface
    ///
    /// Returns an error if the stack cannot currently accept the request
    /// (e.g. a transfer is already pending). The corresponding report arrives
    /// later through the report-received callback.
    fn request_report(&mut self, address: u8, instance: u8) -> Result<()>;

    /// Query the boot protocol the interface was bound with
    fn interface_protocol(&self, address: u8, instance: u8) -> BootProtocol;

    /// Parse a report descriptor into `infos`, returning the entry count
    ///
    /// Fills at most `infos.len()` entries. Called once per mount for
    /// interfaces without a boot protocol.
    fn parse_report_descriptor(&self, descriptor: &[u8], infos: &mut [ReportInfo]) -> usize;
}
