//! HID input manager
//!
//! Owns the per-interface state the host stack's callbacks need: the parsed
//! report metadata, the class decoders, and the report request state
//! machine. A platform integration forwards the stack's mount, unmount, and
//! report-received callbacks here and calls [`HidInputManager::poll`] from
//! its idle loop.
//!
//! # Request/Response Loop
//!
//! Issuing a report request returns immediately; the matching report arrives
//! later through the report-received callback. Each interface tracks this
//! with [`PollState`]: `Idle` means no request is outstanding,
//! `AwaitingReport` means one is. [`on_report`](HidInputManager::on_report)
//! re-arms the next request itself; [`poll`](HidInputManager::poll) only
//! requests for interfaces sitting in `Idle`, which covers request failures
//! at mount or re-arm time. No timer-based backoff exists in this layer.

use core::fmt;

use heapless::Vec;

use crate::dispatch::{self, DecoderSet};
use crate::error::{HidError, Result};
use crate::hid::constants::MAX_REPORTS_PER_INTERFACE;
use crate::hid::{KeyboardReport, MouseReport};
use crate::host::{BootProtocol, HostStack, ReportInfo};

/// Report request state for one interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PollState {
    /// No report request outstanding
    Idle = 0,
    /// Request issued, waiting for the report-received callback
    AwaitingReport = 1,
}

/// Tracking state for one mounted HID interface
#[derive(Debug)]
struct DeviceSlot {
    address: u8,
    instance: u8,
    protocol: BootProtocol,
    infos: Vec<ReportInfo, MAX_REPORTS_PER_INTERFACE>,
    decoders: DecoderSet,
    poll: PollState,
}

/// HID input manager tracking up to `N` mounted interfaces
///
/// Decoded text is written to a caller-supplied [`core::fmt::Write`] sink;
/// failures are reported through [`Result`] and, with the `defmt` feature,
/// the log.
///
/// # Example
///
/// ```
/// use usbh_hid_input::{BootProtocol, HidInputManager, HostStack, ReportInfo, Result};
///
/// struct Stack;
///
/// impl HostStack for Stack {
///     fn request_report(&mut self, _address: u8, _instance: u8) -> Result<()> {
///         Ok(())
///     }
///     fn interface_protocol(&self, _address: u8, _instance: u8) -> BootProtocol {
///         BootProtocol::Keyboard
///     }
///     fn parse_report_descriptor(&self, _descriptor: &[u8], _infos: &mut [ReportInfo]) -> usize {
///         0
///     }
/// }
///
/// let mut manager: HidInputManager<4> = HidInputManager::new();
/// let mut stack = Stack;
/// let mut out = String::new();
///
/// manager.on_mount(&mut stack, 1, 0, &[])?;
/// manager.on_report(&mut stack, &mut out, 1, 0, &[0, 0, 0x04, 0, 0, 0, 0, 0])?;
/// assert_eq!(out, "a");
/// # Ok::<(), usbh_hid_input::HidError>(())
/// ```
pub struct HidInputManager<const N: usize> {
    slots: Vec<DeviceSlot, N>,
    gamepad_dump: bool,
}

impl<const N: usize> Default for HidInputManager<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HidInputManager<N> {
    /// Manager with no mounted interfaces
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            gamepad_dump: false,
        }
    }

    /// Render gamepad reports as a field dump instead of a raw byte diff
    ///
    /// Off by default; the dump assumes the device follows the common
    /// gamepad report layout.
    pub fn set_gamepad_dump(&mut self, enabled: bool) {
        self.gamepad_dump = enabled;
    }

    /// Number of currently mounted interfaces
    pub fn device_count(&self) -> usize {
        self.slots.len()
    }

    /// Check whether an interface is mounted
    pub fn is_mounted(&self, address: u8, instance: u8) -> bool {
        self.find(address, instance).is_some()
    }

    /// Request state of a mounted interface
    pub fn poll_state(&self, address: u8, instance: u8) -> Option<PollState> {
        self.find(address, instance).map(|slot| slot.poll)
    }

    /// Mount callback: cache report metadata and arm the first report
    ///
    /// Interfaces bound to a boot protocol need no descriptor parsing; for
    /// the rest the host stack's parser fills the per-interface metadata
    /// cache. Mounting an `(address, instance)` pair that is already tracked
    /// replaces it with fresh state. A failed first report request is
    /// logged and leaves the interface `Idle` for [`poll`](Self::poll) to
    /// retry; it does not fail the mount.
    pub fn on_mount<H: HostStack>(
        &mut self,
        host: &mut H,
        address: u8,
        instance: u8,
        descriptor: &[u8],
    ) -> Result<()> {
        let protocol = host.interface_protocol(address, instance);

        let mut infos: Vec<ReportInfo, MAX_REPORTS_PER_INTERFACE> = Vec::new();
        if protocol == BootProtocol::None {
            let mut parsed = [ReportInfo::default(); MAX_REPORTS_PER_INTERFACE];
            let count = host
                .parse_report_descriptor(descriptor, &mut parsed)
                .min(MAX_REPORTS_PER_INTERFACE);
            infos.extend(parsed[..count].iter().copied());

            #[cfg(feature = "defmt")]
            defmt::info!(
                "HID {}.{} mounted with {} report types",
                address,
                instance,
                count
            );
        }

        // remount replaces the previous slot wholesale
        self.remove(address, instance);
        if self.slots.len() == self.slots.capacity() {
            return Err(HidError::NoResources);
        }

        let mut slot = DeviceSlot {
            address,
            instance,
            protocol,
            infos,
            decoders: DecoderSet::new(),
            poll: PollState::Idle,
        };

        match host.request_report(address, instance) {
            Ok(()) => slot.poll = PollState::AwaitingReport,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("cannot request to receive report");
            }
        }

        self.slots.push(slot).map_err(|_| HidError::NoResources)?;
        Ok(())
    }

    /// Unmount callback: forget the interface entirely
    ///
    /// Cached report metadata and decoder state are discarded, so a device
    /// later reusing the same address and instance starts clean.
    pub fn on_unmount(&mut self, address: u8, instance: u8) -> Result<()> {
        if self.remove(address, instance) {
            #[cfg(feature = "defmt")]
            defmt::info!("HID {}.{} unmounted", address, instance);
            Ok(())
        } else {
            Err(HidError::DeviceNotFound)
        }
    }

    /// Report-received callback: decode, then re-arm the next request
    ///
    /// Routing follows the interface's boot protocol; interfaces without one
    /// go through the generic dispatcher. The next report request is issued
    /// before returning, whether or not decoding succeeded: a malformed
    /// report is dropped, not a reason to stop polling. Decode errors are
    /// returned after the re-arm.
    pub fn on_report<H: HostStack, W: fmt::Write>(
        &mut self,
        host: &mut H,
        out: &mut W,
        address: u8,
        instance: u8,
        data: &[u8],
    ) -> Result<()> {
        let gamepad_dump = self.gamepad_dump;
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.address == address && slot.instance == instance)
            .ok_or(HidError::DeviceNotFound)?;

        slot.poll = PollState::Idle;

        let decoded = match slot.protocol {
            BootProtocol::Keyboard => KeyboardReport::parse(data)
                .map(|report| slot.decoders.keyboard.process(&report, out)),
            BootProtocol::Mouse => {
                MouseReport::parse(data).map(|report| slot.decoders.mouse.process(&report, out))
            }
            BootProtocol::None => {
                dispatch::route_report(&slot.infos, &mut slot.decoders, gamepad_dump, data, out)
            }
        };

        if decoded == Err(HidError::UnknownReportId) {
            #[cfg(feature = "defmt")]
            defmt::warn!("report info not found");
        }

        match host.request_report(address, instance) {
            Ok(()) => slot.poll = PollState::AwaitingReport,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("cannot request to receive report");
            }
        }

        decoded
    }

    /// Periodic task: re-request reports for idle interfaces
    ///
    /// Call from the application's idle loop. Interfaces already awaiting a
    /// report are left alone; request failures are logged and retried on the
    /// next call.
    pub fn poll<H: HostStack>(&mut self, host: &mut H) {
        for slot in self.slots.iter_mut() {
            if slot.poll != PollState::Idle {
                continue;
            }

            match host.request_report(slot.address, slot.instance) {
                Ok(()) => slot.poll = PollState::AwaitingReport,
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("cannot request to receive report");
                }
            }
        }
    }

    fn find(&self, address: u8, instance: u8) -> Option<&DeviceSlot> {
        self.slots
            .iter()
            .find(|slot| slot.address == address && slot.instance == instance)
    }

    fn remove(&mut self, address: u8, instance: u8) -> bool {
        let position = self
            .slots
            .iter()
            .position(|slot| slot.address == address && slot.instance == instance);

        match position {
            Some(index) => {
                self.slots.swap_remove(index);
                true
            }
            None => false,
        }
    }
}
