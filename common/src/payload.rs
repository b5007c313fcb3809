//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Payload:
//  Decoders for the value part of an option.  The TLV engine has already
//  sliced the payload to the declared length, so fixed size values must
//  match it exactly.
//

use std::mem::size_of;
use std::net::Ipv4Addr;

use crate::DhcpError;
use crate::encode::*;

// Check a fixed size payload length.
fn expect_len(buf: &[u8], size: usize) -> Result<(), DhcpError> {
    if buf.len() != size {
        Err(DhcpError::InvalidOptionLength(format!("expected {} got {}", size, buf.len())))
    } else {
        Ok(())
    }
}

// Utility to decode u8 value for a DHCP option.
pub fn option_u8(buf: &[u8]) -> Result<u8, DhcpError> {
    expect_len(buf, size_of::<u8>())?;
    decode_u8(buf)
}

// Utility to decode u16 value for a DHCP option.
pub fn option_u16(buf: &[u8]) -> Result<u16, DhcpError> {
    expect_len(buf, size_of::<u16>())?;
    decode_u16(buf)
}

// Utility to decode u32 value for a DHCP option.
pub fn option_u32(buf: &[u8]) -> Result<u32, DhcpError> {
    expect_len(buf, size_of::<u32>())?;
    decode_u32(buf)
}

// Utility to decode an IPv4 address for a DHCP option.
pub fn option_ipv4(buf: &[u8]) -> Result<Ipv4Addr, DhcpError> {
    expect_len(buf, size_of::<Ipv4Addr>())?;
    decode_ipv4(buf)
}

// Utility to decode u8 vector value for a DHCP option.
pub fn option_u8_vec(buf: &[u8], min: usize) -> Result<Vec<u8>, DhcpError> {
    if buf.len() < min {
        Err(DhcpError::InvalidOptionLength(format!("expected at least {} got {}", min, buf.len())))
    } else {
        Ok(buf.to_vec())
    }
}

// Utility to decode string value for a DHCP option.
pub fn option_string(buf: &[u8], min: usize) -> Result<String, DhcpError> {
    if buf.len() < min {
        Err(DhcpError::InvalidOptionLength(format!("expected at least {} got {}", min, buf.len())))
    } else {
        match std::str::from_utf8(buf) {
            Ok(s) => Ok(s.to_string()),
            Err(err) => Err(DhcpError::DecodeError(format!("{}", err))),
        }
    }
}
