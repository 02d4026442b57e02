//! Shared test utilities for usbh-hid-input tests
//!
//! Provides a scriptable mock host stack and report builders used across
//! the integration test files.

#![allow(dead_code)]

use usbh_hid_input::{BootProtocol, HidError, HostStack, ReportInfo, Result};

/// Mock host stack with a scriptable protocol and parser result
pub struct MockHost {
    /// Protocol reported for every interface
    pub protocol: BootProtocol,
    /// Entries the descriptor parser hands back
    pub infos: Vec<ReportInfo>,
    /// When set, report requests are rejected
    pub fail_requests: bool,
    /// Number of report requests issued so far
    pub request_count: usize,
}

impl MockHost {
    /// Stack that reports a boot keyboard on every interface
    pub fn keyboard() -> Self {
        Self::with_protocol(BootProtocol::Keyboard)
    }

    /// Stack that reports a boot mouse on every interface
    pub fn mouse() -> Self {
        Self::with_protocol(BootProtocol::Mouse)
    }

    /// Stack that reports a generic interface parsing to `infos`
    pub fn generic(infos: &[ReportInfo]) -> Self {
        Self {
            protocol: BootProtocol::None,
            infos: infos.to_vec(),
            fail_requests: false,
            request_count: 0,
        }
    }

    fn with_protocol(protocol: BootProtocol) -> Self {
        Self {
            protocol,
            infos: Vec::new(),
            fail_requests: false,
            request_count: 0,
        }
    }
}

impl HostStack for MockHost {
    fn request_report(&mut self, _address: u8, _instance: u8) -> Result<()> {
        self.request_count += 1;
        if self.fail_requests {
            Err(HidError::RequestFailed)
        } else {
            Ok(())
        }
    }

    fn interface_protocol(&self, _address: u8, _instance: u8) -> BootProtocol {
        self.protocol
    }

    fn parse_report_descriptor(&self, _descriptor: &[u8], infos: &mut [ReportInfo]) -> usize {
        let count = self.infos.len().min(infos.len());
        infos[..count].copy_from_slice(&self.infos[..count]);
        count
    }
}

/// Build a boot keyboard report from modifiers and key slots
pub fn kbd_report(modifiers: u8, keys: [u8; 6]) -> [u8; 8] {
    [
        modifiers, 0, keys[0], keys[1], keys[2], keys[3], keys[4], keys[5],
    ]
}

/// Build a boot mouse report
pub fn mouse_report(buttons: u8, x: i8, y: i8, wheel: i8) -> [u8; 4] {
    [buttons, x as u8, y as u8, wheel as u8]
}

/// Build a report-info entry
pub fn report_info(report_id: u8, usage_page: u16, usage: u16) -> ReportInfo {
    ReportInfo {
        report_id,
        usage,
        usage_page,
    }
}
