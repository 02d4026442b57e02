//! Generic report dispatch
//!
//! Routes reports from interfaces without a boot protocol. The leading
//! report-ID byte (when the interface uses report IDs) selects one of the
//! [`ReportInfo`] entries cached at mount time, and the entry's usage page
//! and usage select the decoder. Usages without a registered decoder are
//! dropped without comment.

use core::fmt;

use crate::error::{HidError, Result};
use crate::hid::{
    GamepadReport, KeyboardDecoder, KeyboardReport, MouseDecoder, MouseReport, RawReportDecoder,
    USAGE_DESKTOP_GAMEPAD, USAGE_DESKTOP_KEYBOARD, USAGE_DESKTOP_MOUSE, USAGE_PAGE_DESKTOP,
};
use crate::host::ReportInfo;

/// Per-device decoder state for every class the dispatcher can route to
#[derive(Debug, Default)]
pub struct DecoderSet {
    /// Keyboard press-edge decoder
    pub keyboard: KeyboardDecoder,
    /// Mouse button/movement decoder
    pub mouse: MouseDecoder,
    /// Raw byte-diff fallback decoder
    pub raw: RawReportDecoder,
}

impl DecoderSet {
    /// Fresh decoder state, as if no report had been seen
    pub const fn new() -> Self {
        Self {
            keyboard: KeyboardDecoder::new(),
            mouse: MouseDecoder::new(),
            raw: RawReportDecoder::new(),
        }
    }
}

/// Match a report against the cached metadata and strip ID framing
///
/// A single cached entry with report ID 0 means the interface sends
/// un-framed reports; anything else treats the first byte as the report ID
/// and consumes it.
fn match_report<'d>(
    infos: &[ReportInfo],
    data: &'d [u8],
) -> Result<(ReportInfo, &'d [u8])> {
    if infos.len() == 1 && infos[0].report_id == 0 {
        return Ok((infos[0], data));
    }

    let (&report_id, payload) = data.split_first().ok_or(HidError::ReportTooShort)?;
    let info = infos
        .iter()
        .find(|info| info.report_id == report_id)
        .ok_or(HidError::UnknownReportId)?;

    Ok((*info, payload))
}

/// Route one generic report to the decoder its usage selects
///
/// Keyboard and mouse usages assume the boot report layout, matching how
/// host stacks deliver them when no boot protocol was negotiated. Gamepads
/// get the raw byte diff unless `gamepad_dump` asks for the field dump.
/// Unrecognized usages return `Ok(())` without output.
pub fn route_report<W: fmt::Write>(
    infos: &[ReportInfo],
    decoders: &mut DecoderSet,
    gamepad_dump: bool,
    data: &[u8],
    out: &mut W,
) -> Result<()> {
    let (info, payload) = match_report(infos, data)?;

    if info.usage_page != USAGE_PAGE_DESKTOP {
        return Ok(());
    }

    match info.usage {
        USAGE_DESKTOP_KEYBOARD => {
            let report = KeyboardReport::parse(payload)?;
            decoders.keyboard.process(&report, out);
        }
        USAGE_DESKTOP_MOUSE => {
            let report = MouseReport::parse(payload)?;
            decoders.mouse.process(&report, out);
        }
        USAGE_DESKTOP_GAMEPAD => {
            if gamepad_dump {
                GamepadReport::parse(payload)?.dump(out);
            } else {
                decoders.raw.process(payload, out);
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::USAGE_PAGE_CONSUMER;

    fn info(report_id: u8, usage_page: u16, usage: u16) -> ReportInfo {
        ReportInfo {
            report_id,
            usage,
            usage_page,
        }
    }

    #[test]
    fn single_unframed_descriptor_skips_id_byte_handling() {
        let infos = [info(0, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_MOUSE)];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        // first byte is mouse button data, not a report ID
        route_report(&infos, &mut decoders, false, &[1, 2, 3, 0], &mut out).unwrap();

        assert_eq!(out, " L-- (2 3 0)\r\n");
    }

    #[test]
    fn framed_report_consumes_id_byte() {
        let infos = [
            info(1, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_MOUSE),
            info(2, USAGE_PAGE_CONSUMER, 0x01),
        ];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        route_report(&infos, &mut decoders, false, &[1, 0, 5, 0xFB, 0], &mut out).unwrap();

        assert_eq!(out, "(5 -5 0)\r\n");
    }

    #[test]
    fn unknown_report_id_is_rejected() {
        let infos = [
            info(1, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_MOUSE),
            info(2, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_KEYBOARD),
        ];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        let err = route_report(&infos, &mut decoders, false, &[9, 0, 0, 0], &mut out);

        assert_eq!(err.unwrap_err(), HidError::UnknownReportId);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_report_is_rejected() {
        let infos = [
            info(1, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_MOUSE),
            info(2, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_KEYBOARD),
        ];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        let err = route_report(&infos, &mut decoders, false, &[], &mut out);

        assert_eq!(err.unwrap_err(), HidError::ReportTooShort);
    }

    #[test]
    fn keyboard_usage_routes_to_keyboard_decoder() {
        let infos = [info(0, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_KEYBOARD)];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        route_report(
            &infos,
            &mut decoders,
            false,
            &[0, 0, 4, 0, 0, 0, 0, 0],
            &mut out,
        )
        .unwrap();

        assert_eq!(out, "a");
    }

    #[test]
    fn gamepad_usage_defaults_to_raw_diff() {
        let infos = [info(0, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_GAMEPAD)];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        route_report(&infos, &mut decoders, false, &[0, 0x7F], &mut out).unwrap();

        assert_eq!(out, "New report:\r\n1:7F \r\n");
    }

    #[test]
    fn gamepad_dump_variant_prints_fields() {
        let infos = [info(0, USAGE_PAGE_DESKTOP, USAGE_DESKTOP_GAMEPAD)];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        route_report(
            &infos,
            &mut decoders,
            true,
            &[1, 2, 3, 4, 5, 6, 0, 0, 0, 0, 0],
            &mut out,
        )
        .unwrap();

        assert!(out.contains("Delta x movement = 1"));
    }

    #[test]
    fn unregistered_usage_is_silently_dropped() {
        let infos = [info(0, USAGE_PAGE_CONSUMER, 0x01)];
        let mut decoders = DecoderSet::new();
        let mut out = String::new();

        route_report(&infos, &mut decoders, false, &[0xFF, 0xFF], &mut out).unwrap();

        assert!(out.is_empty());
    }
}
