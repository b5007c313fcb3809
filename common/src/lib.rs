//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//

pub mod encode;
pub mod payload;
pub mod option;
pub mod registry;
pub mod options;
pub mod tlv;
pub mod render;

pub use option::{DhcpOptionValue, OptionCode, RawOption};
pub use options::Options;
pub use registry::Registry;

use thiserror::Error;

/// DHCP option codec errors.
#[derive(Error, Debug)]
pub enum DhcpError {
    #[error("Truncated option header")]
    TruncatedHeader,
    #[error("Truncated payload {0}")]
    TruncatedPayload(String),
    #[error("Malformed option {code}: {cause}")]
    MalformedOption {
        code: OptionCode,
        #[source]
        cause: Box<DhcpError>,
    },
    #[error("Unexpected trailing data {0} bytes")]
    UnexpectedTrailingData(usize),
    #[error("Invalid Option Length {0}")]
    InvalidOptionLength(String),
    #[error("Invalid Value {0}")]
    InvalidValue(String),
    #[error("Option {code} too long {len} bytes")]
    OptionTooLong {
        code: u8,
        len: usize,
    },
    #[error("Encode error {0}")]
    EncodeError(String),
    #[error("Decode error {0}")]
    DecodeError(String),
    #[error("I/O error")]
    IoError(#[from] std::io::Error),
    #[error("Config error {0}")]
    ConfigError(String),
}
