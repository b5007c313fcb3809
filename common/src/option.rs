//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use std::fmt;

use crate::DhcpError;

/// Option code paired with its display name.
///
/// Codes are only unique within one registry, so the same number may carry a
/// different name at the DHCP level and inside the vendor specific option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCode {
    pub code: u8,
    pub name: String,
}

impl OptionCode {
    pub fn new(code: u8, name: &str) -> OptionCode {
        OptionCode {
            code,
            name: name.to_string(),
        }
    }

    /// Code without a registered name.
    pub fn unknown(code: u8) -> OptionCode {
        OptionCode::new(code, "Unknown")
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Capabilities every option implements at any nesting level.
///
/// `Display` is the human readable description; see `render` for the
/// nesting rules.
pub trait DhcpOptionValue: fmt::Display {
    /// Option code.
    fn code(&self) -> u8;

    /// Payload bytes, excluding code and length.
    fn to_bytes(&self) -> Result<Vec<u8>, DhcpError>;
}

/// Option whose code has no typed parser in the registry, kept verbatim.
#[derive(Debug, Clone)]
pub struct RawOption {
    pub code: OptionCode,
    pub data: Vec<u8>,
}

impl RawOption {
    pub fn new(code: OptionCode, data: &[u8]) -> RawOption {
        RawOption {
            code,
            data: data.to_vec(),
        }
    }
}

// The name depends on the registry that produced the option, so only the
// wire content takes part in equality.
impl PartialEq for RawOption {
    fn eq(&self, other: &Self) -> bool {
        self.code.code == other.code.code && self.data == other.data
    }
}

impl Eq for RawOption {}

impl DhcpOptionValue for RawOption {
    fn code(&self) -> u8 {
        self.code.code
    }

    fn to_bytes(&self) -> Result<Vec<u8>, DhcpError> {
        Ok(self.data.clone())
    }
}

impl fmt::Display for RawOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {:?}", self.code, self.data)
    }
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_raw_option() {
        let opt = RawOption::new(OptionCode::unknown(200), &[1, 2, 3]);
        assert_eq!(opt.code(), 200);
        match opt.to_bytes() {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(b) => assert_eq!(b, [1, 2, 3]),
        }
        assert_eq!(opt.to_string(), "Unknown (200) -> [1, 2, 3]");
    }

    #[test]
    pub fn test_raw_option_eq() {
        let named = RawOption::new(OptionCode::new(128, "Shadow Mount Path"), b"/mnt");
        let unknown = RawOption::new(OptionCode::unknown(128), b"/mnt");
        assert_eq!(named, unknown);
        assert_ne!(unknown, RawOption::new(OptionCode::unknown(129), b"/mnt"));
        assert_ne!(unknown, RawOption::new(OptionCode::unknown(128), b"/tmp"));
    }

    #[test]
    pub fn test_option_code_display() {
        let code = OptionCode::new(43, "Vendor Specific Information");
        assert_eq!(code.to_string(), "Vendor Specific Information (43)");
    }
}
