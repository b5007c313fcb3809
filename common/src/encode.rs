//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Encode:
//  Low level utility functions to append values to a byte buffer and to read
//  them back from a slice.  All integer values are network byte order on the
//  wire and host byte order in memory.
//

use std::mem::size_of;
use std::net::Ipv4Addr;

use crate::DhcpError;

/// Append arbitrary bytes to buffer.
pub fn encode_data(buf: &mut Vec<u8>, data: &[u8]) -> usize {
    buf.extend_from_slice(data);
    data.len()
}

/// Encode u8 value into buffer.
pub fn encode_u8(buf: &mut Vec<u8>, v: u8) -> usize {
    buf.push(v);
    size_of::<u8>()
}

/// Encode u16 value into buffer.
pub fn encode_u16(buf: &mut Vec<u8>, v: u16) -> usize {
    encode_data(buf, &v.to_be_bytes())
}

/// Encode u32 value into buffer.
pub fn encode_u32(buf: &mut Vec<u8>, v: u32) -> usize {
    encode_data(buf, &v.to_be_bytes())
}

/// Encode string into buffer.
pub fn encode_string(buf: &mut Vec<u8>, v: &str) -> usize {
    encode_data(buf, v.as_bytes())
}

/// Encode IPv4 address into buffer.
pub fn encode_ipv4(buf: &mut Vec<u8>, v: Ipv4Addr) -> usize {
    encode_data(buf, &v.octets())
}

/// Return u8 value in host byte order.
pub fn decode_u8(data: &[u8]) -> Result<u8, DhcpError> {
    if data.len() < size_of::<u8>() {
        Err(DhcpError::TruncatedPayload(format!("data.len() == {:?} < size_of::<u8>() {:?}", data.len(), size_of::<u8>())))
    } else {
        Ok(data[0])
    }
}

/// Return u16 value in host byte order.
pub fn decode_u16(data: &[u8]) -> Result<u16, DhcpError> {
    if data.len() < size_of::<u16>() {
        Err(DhcpError::TruncatedPayload(format!("data.len() == {:?} < size_of::<u16>() {:?}", data.len(), size_of::<u16>())))
    } else {
        Ok((data[0] as u16) << 8 | data[1] as u16)
    }
}

/// Return u32 value in host byte order.
pub fn decode_u32(data: &[u8]) -> Result<u32, DhcpError> {
    if data.len() < size_of::<u32>() {
        Err(DhcpError::TruncatedPayload(format!("data.len() == {:?} < size_of::<u32>() {:?}", data.len(), size_of::<u32>())))
    } else {
        Ok((data[0] as u32) << 24 | (data[1] as u32) << 16 | (data[2] as u32) << 8 | data[3] as u32)
    }
}

/// Return Ipv4Addr.
pub fn decode_ipv4(data: &[u8]) -> Result<Ipv4Addr, DhcpError> {
    if data.len() < size_of::<Ipv4Addr>() {
        Err(DhcpError::TruncatedPayload(format!("data.len() == {:?} < size_of::<Ipv4Addr>() {:?}", data.len(), size_of::<Ipv4Addr>())))
    } else {
        Ok(Ipv4Addr::new(data[0], data[1], data[2], data[3]))
    }
}

/// Return a slice of exactly `len` bytes from the head of data.
pub fn decode_data(data: &[u8], len: usize) -> Result<&[u8], DhcpError> {
    if data.len() < len {
        Err(DhcpError::TruncatedPayload(format!("data.len() == {:?} < {:?}", data.len(), len)))
    } else {
        Ok(&data[..len])
    }
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_encode_integers() {
        let mut buf = Vec::new();
        assert_eq!(encode_u8(&mut buf, 0x01), 1);
        assert_eq!(encode_u16(&mut buf, 0x0203), 2);
        assert_eq!(encode_u32(&mut buf, 0x04050607), 4);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    }

    #[test]
    pub fn test_decode_u32() {
        let data: [u8; 4] = [0x80, 0x00, 0x23, 0x31];
        match decode_u32(&data) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(v) => assert_eq!(v, 0x80002331),
        }
        let data: [u8; 3] = [0x80, 0x00, 0x23];
        match decode_u32(&data) {
            Err(e) => assert!(matches!(e, DhcpError::TruncatedPayload(_))),
            Ok(v) => assert!(false, "Error: {:?}", v),
        }
    }

    #[test]
    pub fn test_decode_ipv4() {
        let data: [u8; 4] = [192, 168, 1, 10];
        match decode_ipv4(&data) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(addr) => assert_eq!(addr, "192.168.1.10".parse::<Ipv4Addr>().unwrap()),
        }
        assert!(decode_ipv4(&data[..3]).is_err());
    }

    #[test]
    pub fn test_decode_data() {
        let data: [u8; 4] = [b'b', b's', b'd', b'p'];
        match decode_data(&data, 3) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(b) => assert_eq!(b, b"bsd"),
        }
        match decode_data(&data, 5) {
            Err(e) => assert!(matches!(e, DhcpError::TruncatedPayload(_))),
            Ok(b) => assert!(false, "Error: {:?}", b),
        }
    }
}
