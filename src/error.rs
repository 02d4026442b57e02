//! HID input error types

use core::fmt;

/// HID input operation result type
pub type Result<T> = core::result::Result<T, HidError>;

/// HID input error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    /// No free device slot available
    NoResources,
    /// Device not found or already unmounted
    DeviceNotFound,
    /// Report payload shorter than the expected layout
    ReportTooShort,
    /// Leading report ID matched no cached report info
    UnknownReportId,
    /// Host stack rejected the report request
    RequestFailed,
    /// Invalid parameter
    InvalidParameter,
}

impl fmt::Display for HidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResources => write!(f, "No device slot available"),
            Self::DeviceNotFound => write!(f, "Device not found"),
            Self::ReportTooShort => write!(f, "Report too short"),
            Self::UnknownReportId => write!(f, "Unknown report ID"),
            Self::RequestFailed => write!(f, "Report request failed"),
            Self::InvalidParameter => write!(f, "Invalid parameter"),
        }
    }
}
