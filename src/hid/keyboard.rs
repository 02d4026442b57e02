//! HID keyboard support
//!
//! Implements HID Boot Protocol keyboard reports (USB HID Spec 1.11,
//! Appendix B.1) and press-edge decoding to ASCII text.
//!
//! # Decoding Policy
//!
//! [`KeyboardDecoder`] emits a character only on a fresh press edge: a
//! nonzero keycode present in the current report but absent from the
//! previous one. Held keys stay silent, and release/repeat events are not
//! reported. Keycodes with no ASCII mapping are skipped.

use core::fmt;

use bitflags::bitflags;

use crate::error::{HidError, Result};
use super::constants::BOOT_KEYBOARD_REPORT_LEN;

/// HID keyboard report (boot protocol)
///
/// Standard 8-byte keyboard report format:
/// - Byte 0: Modifier keys (Ctrl, Alt, Shift, GUI)
/// - Byte 1: Reserved (OEM use)
/// - Bytes 2-7: Up to 6 simultaneous key presses
#[derive(Debug, Clone, Copy)]
pub struct KeyboardReport {
    /// Modifier key states
    pub modifiers: KeyModifiers,
    /// Active keycodes (up to 6)
    keycodes: [u8; 6],
}

impl KeyboardReport {
    /// Empty report, no keys pressed
    pub const fn new() -> Self {
        Self {
            modifiers: KeyModifiers::empty(),
            keycodes: [0; 6],
        }
    }

    /// Parse report from raw boot-protocol data
    ///
    /// # Example
    ///
    /// ```
    /// use usbh_hid_input::hid::KeyboardReport;
    ///
    /// // Key 'A' is pressed
    /// let data: [u8; 8] = [0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00];
    /// let report = KeyboardReport::parse(&data).unwrap();
    /// assert!(report.has_keys());
    /// ```
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < BOOT_KEYBOARD_REPORT_LEN {
            return Err(HidError::ReportTooShort);
        }

        Ok(Self {
            modifiers: KeyModifiers::from_bits_truncate(data[0]),
            keycodes: [data[2], data[3], data[4], data[5], data[6], data[7]],
        })
    }

    /// Get iterator over pressed keys
    ///
    /// Returns keycodes for all currently pressed keys (excluding modifiers).
    pub fn keys_pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keycodes
            .iter()
            .filter(|&&code| code != 0) // 0x00 = no key
            .map(|&code| KeyCode(code))
    }

    /// Check if specific key is pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keycodes.contains(&key.0)
    }

    /// Check if any key is pressed
    pub fn has_keys(&self) -> bool {
        self.keycodes.iter().any(|&code| code != 0)
    }
}

impl Default for KeyboardReport {
    fn default() -> Self {
        Self::new()
    }
}

bitflags! {
    /// Keyboard modifier keys
    ///
    /// These are separate from regular keys and can be combined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyModifiers: u8 {
        /// Left Control
        const LEFT_CTRL  = 0b00000001;
        /// Left Shift
        const LEFT_SHIFT = 0b00000010;
        /// Left Alt
        const LEFT_ALT   = 0b00000100;
        /// Left GUI (Windows/Command key)
        const LEFT_GUI   = 0b00001000;
        /// Right Control
        const RIGHT_CTRL  = 0b00010000;
        /// Right Shift
        const RIGHT_SHIFT = 0b00100000;
        /// Right Alt
        const RIGHT_ALT   = 0b01000000;
        /// Right GUI (Windows/Command key)
        const RIGHT_GUI   = 0b10000000;
    }
}

impl KeyModifiers {
    /// Check if any Ctrl key is pressed
    pub fn ctrl(&self) -> bool {
        self.intersects(Self::LEFT_CTRL | Self::RIGHT_CTRL)
    }

    /// Check if any Shift key is pressed
    pub fn shift(&self) -> bool {
        self.intersects(Self::LEFT_SHIFT | Self::RIGHT_SHIFT)
    }

    /// Check if any Alt key is pressed
    pub fn alt(&self) -> bool {
        self.intersects(Self::LEFT_ALT | Self::RIGHT_ALT)
    }

    /// Check if any GUI key is pressed
    pub fn gui(&self) -> bool {
        self.intersects(Self::LEFT_GUI | Self::RIGHT_GUI)
    }
}

/// HID keyboard keycode
///
/// Standard USB HID keyboard scancodes (Usage Page 0x07).
/// See HID Usage Tables 1.12, Section 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCode(pub u8);

impl KeyCode {
    // Letter keys (0x04-0x1D)
    pub const A: Self = Self(0x04);
    pub const B: Self = Self(0x05);
    pub const C: Self = Self(0x06);
    pub const D: Self = Self(0x07);
    pub const E: Self = Self(0x08);
    pub const F: Self = Self(0x09);
    pub const G: Self = Self(0x0A);
    pub const H: Self = Self(0x0B);
    pub const I: Self = Self(0x0C);
    pub const J: Self = Self(0x0D);
    pub const K: Self = Self(0x0E);
    pub const L: Self = Self(0x0F);
    pub const M: Self = Self(0x10);
    pub const N: Self = Self(0x11);
    pub const O: Self = Self(0x12);
    pub const P: Self = Self(0x13);
    pub const Q: Self = Self(0x14);
    pub const R: Self = Self(0x15);
    pub const S: Self = Self(0x16);
    pub const T: Self = Self(0x17);
    pub const U: Self = Self(0x18);
    pub const V: Self = Self(0x19);
    pub const W: Self = Self(0x1A);
    pub const X: Self = Self(0x1B);
    pub const Y: Self = Self(0x1C);
    pub const Z: Self = Self(0x1D);

    // Number keys (0x1E-0x27)
    pub const KEY_1: Self = Self(0x1E);
    pub const KEY_2: Self = Self(0x1F);
    pub const KEY_3: Self = Self(0x20);
    pub const KEY_4: Self = Self(0x21);
    pub const KEY_5: Self = Self(0x22);
    pub const KEY_6: Self = Self(0x23);
    pub const KEY_7: Self = Self(0x24);
    pub const KEY_8: Self = Self(0x25);
    pub const KEY_9: Self = Self(0x26);
    pub const KEY_0: Self = Self(0x27);

    // Special keys
    pub const ENTER: Self = Self(0x28);
    pub const ESCAPE: Self = Self(0x29);
    pub const BACKSPACE: Self = Self(0x2A);
    pub const TAB: Self = Self(0x2B);
    pub const SPACE: Self = Self(0x2C);
    pub const MINUS: Self = Self(0x2D);
    pub const EQUALS: Self = Self(0x2E);
    pub const LEFT_BRACKET: Self = Self(0x2F);
    pub const RIGHT_BRACKET: Self = Self(0x30);
    pub const BACKSLASH: Self = Self(0x31);
    pub const EUROPE_1: Self = Self(0x32);
    pub const SEMICOLON: Self = Self(0x33);
    pub const APOSTROPHE: Self = Self(0x34);
    pub const GRAVE: Self = Self(0x35);
    pub const COMMA: Self = Self(0x36);
    pub const PERIOD: Self = Self(0x37);
    pub const SLASH: Self = Self(0x38);
    pub const CAPS_LOCK: Self = Self(0x39);

    // Function keys
    pub const F1: Self = Self(0x3A);
    pub const F2: Self = Self(0x3B);
    pub const F3: Self = Self(0x3C);
    pub const F4: Self = Self(0x3D);
    pub const F5: Self = Self(0x3E);
    pub const F6: Self = Self(0x3F);
    pub const F7: Self = Self(0x40);
    pub const F8: Self = Self(0x41);
    pub const F9: Self = Self(0x42);
    pub const F10: Self = Self(0x43);
    pub const F11: Self = Self(0x44);
    pub const F12: Self = Self(0x45);

    // Navigation keys
    pub const INSERT: Self = Self(0x49);
    pub const HOME: Self = Self(0x4A);
    pub const PAGE_UP: Self = Self(0x4B);
    pub const DELETE: Self = Self(0x4C);
    pub const END: Self = Self(0x4D);
    pub const PAGE_DOWN: Self = Self(0x4E);
    pub const RIGHT_ARROW: Self = Self(0x4F);
    pub const LEFT_ARROW: Self = Self(0x50);
    pub const DOWN_ARROW: Self = Self(0x51);
    pub const UP_ARROW: Self = Self(0x52);

    // Keypad (0x54-0x63)
    pub const KEYPAD_DIVIDE: Self = Self(0x54);
    pub const KEYPAD_MULTIPLY: Self = Self(0x55);
    pub const KEYPAD_SUBTRACT: Self = Self(0x56);
    pub const KEYPAD_ADD: Self = Self(0x57);
    pub const KEYPAD_ENTER: Self = Self(0x58);
    pub const KEYPAD_1: Self = Self(0x59);
    pub const KEYPAD_0: Self = Self(0x62);
    pub const KEYPAD_DECIMAL: Self = Self(0x63);

    /// Convert keycode to ASCII character (no modifiers)
    ///
    /// Returns `None` for keys that don't have an ASCII representation.
    /// Enter maps to carriage return; the decoder appends the line feed.
    ///
    /// # Example
    ///
    /// ```
    /// use usbh_hid_input::hid::KeyCode;
    ///
    /// assert_eq!(KeyCode::A.to_ascii(), Some('a'));
    /// assert_eq!(KeyCode::KEY_1.to_ascii(), Some('1'));
    /// assert_eq!(KeyCode::SPACE.to_ascii(), Some(' '));
    /// assert_eq!(KeyCode::F1.to_ascii(), None);
    /// ```
    pub fn to_ascii(&self) -> Option<char> {
        match self.0 {
            0x04..=0x1D => Some((b'a' + (self.0 - 0x04)) as char), // a-z
            0x1E..=0x26 => Some((b'1' + (self.0 - 0x1E)) as char), // 1-9
            0x27 => Some('0'),
            0x28 => Some('\r'),   // Enter
            0x29 => Some('\x1b'), // Escape
            0x2A => Some('\x08'), // Backspace
            0x2B => Some('\t'),   // Tab
            0x2C => Some(' '),    // Space
            0x2D => Some('-'),    // Minus
            0x2E => Some('='),    // Equals
            0x2F => Some('['),    // Left bracket
            0x30 => Some(']'),    // Right bracket
            0x31 => Some('\\'),   // Backslash
            0x32 => Some('#'),    // Europe-1
            0x33 => Some(';'),    // Semicolon
            0x34 => Some('\''),   // Apostrophe
            0x35 => Some('`'),    // Grave
            0x36 => Some(','),    // Comma
            0x37 => Some('.'),    // Period
            0x38 => Some('/'),    // Slash
            0x54 => Some('/'),    // Keypad divide
            0x55 => Some('*'),    // Keypad multiply
            0x56 => Some('-'),    // Keypad subtract
            0x57 => Some('+'),    // Keypad add
            0x58 => Some('\r'),   // Keypad enter
            0x59..=0x61 => Some((b'1' + (self.0 - 0x59)) as char), // Keypad 1-9
            0x62 => Some('0'),    // Keypad 0
            0x63 => Some('.'),    // Keypad decimal
            _ => None,
        }
    }

    /// Convert keycode to ASCII character with Shift modifier
    ///
    /// Keys without a distinct shifted glyph fall back to the unshifted
    /// mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use usbh_hid_input::hid::KeyCode;
    ///
    /// assert_eq!(KeyCode::A.to_ascii_shifted(), Some('A'));
    /// assert_eq!(KeyCode::KEY_1.to_ascii_shifted(), Some('!'));
    /// assert_eq!(KeyCode::COMMA.to_ascii_shifted(), Some('<'));
    /// ```
    pub fn to_ascii_shifted(&self) -> Option<char> {
        match self.0 {
            0x04..=0x1D => Some((b'A' + (self.0 - 0x04)) as char), // A-Z
            0x1E => Some('!'),
            0x1F => Some('@'),
            0x20 => Some('#'),
            0x21 => Some('$'),
            0x22 => Some('%'),
            0x23 => Some('^'),
            0x24 => Some('&'),
            0x25 => Some('*'),
            0x26 => Some('('),
            0x27 => Some(')'),
            0x2D => Some('_'),   // Minus -> Underscore
            0x2E => Some('+'),   // Equals -> Plus
            0x2F => Some('{'),   // [ -> {
            0x30 => Some('}'),   // ] -> }
            0x31 => Some('|'),   // \ -> |
            0x32 => Some('~'),   // Europe-1
            0x33 => Some(':'),   // ; -> :
            0x34 => Some('"'),   // ' -> "
            0x35 => Some('~'),   // ` -> ~
            0x36 => Some('<'),   // , -> <
            0x37 => Some('>'),   // . -> >
            0x38 => Some('?'),   // / -> ?
            _ => self.to_ascii(), // Fall back to unshifted
        }
    }

    /// Get raw keycode value
    pub fn raw(&self) -> u8 {
        self.0
    }
}

/// Press-edge keyboard decoder
///
/// Compares each report against the previous one and writes a character to
/// the sink for every newly pressed key. Enter additionally emits a line
/// feed after the carriage return.
#[derive(Debug, Default)]
pub struct KeyboardDecoder {
    prev: KeyboardReport,
}

impl KeyboardDecoder {
    /// Decoder with an all-released previous report
    pub const fn new() -> Self {
        Self {
            prev: KeyboardReport::new(),
        }
    }

    /// Decode one report, writing fresh press edges to `out`
    ///
    /// The previous-report state is overwritten with `report` on every call,
    /// whether or not any key changed.
    pub fn process<W: fmt::Write>(&mut self, report: &KeyboardReport, out: &mut W) {
        let shift = report.modifiers.shift();

        for key in report.keys_pressed() {
            if self.prev.is_key_pressed(key) {
                // still held from the previous report
                continue;
            }

            let ch = if shift {
                key.to_ascii_shifted()
            } else {
                key.to_ascii()
            };

            if let Some(ch) = ch {
                let _ = out.write_char(ch);
                if ch == '\r' {
                    let _ = out.write_char('\n');
                }
            }
        }

        self.prev = *report;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(modifiers: u8, keys: [u8; 6]) -> KeyboardReport {
        let data = [
            modifiers, 0, keys[0], keys[1], keys[2], keys[3], keys[4], keys[5],
        ];
        KeyboardReport::parse(&data).unwrap()
    }

    #[test]
    fn parse_rejects_short_report() {
        assert_eq!(
            KeyboardReport::parse(&[0, 0, 4]).unwrap_err(),
            HidError::ReportTooShort
        );
    }

    #[test]
    fn fresh_press_emits_once() {
        let mut decoder = KeyboardDecoder::new();
        let mut out = String::new();

        decoder.process(&report(0, [4, 0, 0, 0, 0, 0]), &mut out);
        decoder.process(&report(0, [4, 0, 0, 0, 0, 0]), &mut out);
        decoder.process(&report(0, [5, 4, 0, 0, 0, 0]), &mut out);

        // 4 is held in the second report, 5 is the only fresh key in the third
        assert_eq!(out, "ab");
    }

    #[test]
    fn release_then_repress_is_a_new_press() {
        let mut decoder = KeyboardDecoder::new();
        let mut out = String::new();

        decoder.process(&report(0, [4, 0, 0, 0, 0, 0]), &mut out);
        decoder.process(&report(0, [0, 0, 0, 0, 0, 0]), &mut out);
        decoder.process(&report(0, [4, 0, 0, 0, 0, 0]), &mut out);

        assert_eq!(out, "aa");
    }

    #[test]
    fn shift_selects_shifted_column() {
        let mut decoder = KeyboardDecoder::new();
        let mut out = String::new();

        decoder.process(&report(0x02, [0x0B, 0, 0, 0, 0, 0]), &mut out); // LShift+H
        decoder.process(&report(0x20, [0x1E, 0, 0, 0, 0, 0]), &mut out); // RShift+1

        assert_eq!(out, "H!");
    }

    #[test]
    fn enter_emits_crlf() {
        let mut decoder = KeyboardDecoder::new();
        let mut out = String::new();

        decoder.process(&report(0, [0x28, 0, 0, 0, 0, 0]), &mut out);

        assert_eq!(out, "\r\n");
    }

    #[test]
    fn unmapped_keys_are_skipped() {
        let mut decoder = KeyboardDecoder::new();
        let mut out = String::new();

        // F1 and an out-of-table keycode produce no output, 'a' still does
        decoder.process(&report(0, [0x3A, 0x7F, 4, 0, 0, 0]), &mut out);

        assert_eq!(out, "a");
    }

    #[test]
    fn keypad_digits_map_unshifted() {
        assert_eq!(KeyCode::KEYPAD_1.to_ascii(), Some('1'));
        assert_eq!(KeyCode::KEYPAD_0.to_ascii(), Some('0'));
        assert_eq!(KeyCode::KEYPAD_ENTER.to_ascii(), Some('\r'));
        assert_eq!(KeyCode::KEYPAD_DECIMAL.to_ascii(), Some('.'));
    }

    #[test]
    fn six_simultaneous_fresh_keys_all_emit() {
        let mut decoder = KeyboardDecoder::new();
        let mut out = String::new();

        decoder.process(&report(0, [4, 5, 6, 7, 8, 9]), &mut out);

        assert_eq!(out, "abcdef");
    }
}
