//! HID protocol constants
//!
//! Usage taxonomy codes from the HID Usage Tables 1.12, limited to the
//! pages and usages the dispatcher routes on.

/// HID device class code
pub const HID_CLASS: u8 = 0x03;

/// Generic Desktop usage page
pub const USAGE_PAGE_DESKTOP: u16 = 0x01;

/// Consumer usage page (media keys)
pub const USAGE_PAGE_CONSUMER: u16 = 0x0C;

/// First vendor-defined usage page
pub const USAGE_PAGE_VENDOR: u16 = 0xFF00;

/// Generic Desktop usage: Pointer
pub const USAGE_DESKTOP_POINTER: u16 = 0x01;

/// Generic Desktop usage: Mouse
pub const USAGE_DESKTOP_MOUSE: u16 = 0x02;

/// Generic Desktop usage: Joystick
pub const USAGE_DESKTOP_JOYSTICK: u16 = 0x04;

/// Generic Desktop usage: Gamepad
pub const USAGE_DESKTOP_GAMEPAD: u16 = 0x05;

/// Generic Desktop usage: Keyboard
pub const USAGE_DESKTOP_KEYBOARD: u16 = 0x06;

/// Generic Desktop usage: Keypad
pub const USAGE_DESKTOP_KEYPAD: u16 = 0x07;

/// Generic Desktop usage: System Control (power keys)
pub const USAGE_DESKTOP_SYSTEM_CONTROL: u16 = 0x80;

/// Boot keyboard report length in bytes
pub const BOOT_KEYBOARD_REPORT_LEN: usize = 8;

/// Minimum boot mouse report length in bytes (buttons, x, y)
pub const BOOT_MOUSE_REPORT_LEN: usize = 3;

/// Maximum cached report types per interface
pub const MAX_REPORTS_PER_INTERFACE: usize = 4;

/// Generic report window tracked for byte-diff printing
pub const MAX_GENERIC_REPORT: usize = 40;
