//! Error types for register-map operations

use thiserror::Error;

use crate::field::AccessMode;

/// Result type alias for register-map operations
pub type Result<T> = std::result::Result<T, RegMapError>;

/// Errors that can occur while defining or accessing register fields
#[derive(Debug, Error)]
pub enum RegMapError {
    /// A field or command with this name is already defined on the device
    #[error("duplicate field name on {device}: {name}")]
    DuplicateFieldName {
        /// Device being populated
        device: String,
        /// Name that was already taken
        name: String,
    },

    /// No field or command with this name exists on the device
    #[error("unknown field: {name}")]
    UnknownField {
        /// Requested name
        name: String,
    },

    /// The operation is not permitted by the field's access mode
    #[error("field {name} is {mode} and cannot be {operation}")]
    InvalidAccess {
        /// Field name
        name: String,
        /// Declared access mode
        mode: AccessMode,
        /// What the caller tried to do ("read" or "written")
        operation: &'static str,
    },

    /// A label was written that the field's enum map does not contain
    #[error("field {name} has no enum label {label:?}")]
    UnknownEnumLabel {
        /// Field name
        name: String,
        /// Label that failed to resolve
        label: String,
    },

    /// Read-back after a verified write did not match the intended value
    #[error("verify mismatch on {name}: wrote {wrote:#x}, read back {read_back:#x}")]
    VerifyMismatch {
        /// Field name
        name: String,
        /// Value the write intended
        wrote: u32,
        /// Value the read-back produced
        read_back: u32,
    },

    /// The raw value does not fit in the field's bit window
    #[error("value {value:#x} does not fit in {name} ({bit_width} bits)")]
    ValueTooWide {
        /// Field name
        name: String,
        /// Offending value
        value: u32,
        /// Width of the field's bit window
        bit_width: u8,
    },

    /// The bit window is malformed (zero width or extends past bit 31)
    #[error("invalid bit window for {name}: offset {bit_offset}, width {bit_width}")]
    InvalidWindow {
        /// Field name
        name: String,
        /// Declared bit offset
        bit_offset: u8,
        /// Declared bit width
        bit_width: u8,
    },

    /// Register address outside the device's register space
    #[error("address {address:#06x} outside register space of {size:#x} bytes")]
    AddressOutOfRange {
        /// Offending byte address
        address: u32,
        /// Size of the register space in bytes
        size: u32,
    },

    /// Register address is not aligned to a 32-bit word
    #[error("address {address:#06x} is not 32-bit aligned")]
    UnalignedAddress {
        /// Offending byte address
        address: u32,
    },

    /// A bulk-load table row could not be parsed
    #[error("table row {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// I/O error reading a bulk-load file
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl RegMapError {
    /// Create a duplicate field name error
    pub fn duplicate(device: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateFieldName {
            device: device.into(),
            name: name.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an invalid access error
    pub fn invalid_access(name: impl Into<String>, mode: AccessMode, operation: &'static str) -> Self {
        Self::InvalidAccess {
            name: name.into(),
            mode,
            operation,
        }
    }

    /// Create an unknown enum label error
    pub fn unknown_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::UnknownEnumLabel {
            name: name.into(),
            label: label.into(),
        }
    }

    /// Create a malformed table row error
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
