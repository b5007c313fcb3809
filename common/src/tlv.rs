//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// TLV:
//  Generic code/length/value engine.  The same routines handle the DHCP
//  options region and any option whose payload is itself a list of
//  sub-options.
//

use log::{debug, trace};

use crate::DhcpError;
use crate::encode::*;
use crate::option::{DhcpOptionValue, RawOption};
use crate::options::Options;
use crate::registry::Registry;

/// Option header length, code and length.
pub const DHCP_OPTION_HLEN: usize = 2;

/// Largest payload a length byte can describe.
pub const DHCP_OPTION_MAX_LEN: usize = u8::MAX as usize;

/// Parse options from buffer.
///
/// Codes known to the registry go through their parser and any failure
/// aborts the whole parse.  Unknown codes become raw options.
pub fn parse<O>(buf: &[u8], registry: &Registry<O>) -> Result<Options<O>, DhcpError>
where
    O: DhcpOptionValue + From<RawOption>,
{
    let mut options = Options::new();
    let mut b = buf;

    while !b.is_empty() {
        if b.len() < DHCP_OPTION_HLEN {
            return Err(DhcpError::TruncatedHeader)
        }
        let code = b[0];
        let len = b[1] as usize;
        let data = &b[DHCP_OPTION_HLEN..];
        if data.len() < len {
            return Err(DhcpError::TruncatedPayload(
                format!("option {} length {} > remaining {}", code, len, data.len())))
        }
        let data = &data[..len];
        b = &b[DHCP_OPTION_HLEN + len..];

        let opt = match registry.parser(code) {
            Some(parser) => {
                trace!("Parse option {} length {}", code, len);
                parser(data).map_err(|err| DhcpError::MalformedOption {
                    code: registry.option_code(code),
                    cause: Box::new(err),
                })?
            }
            None => {
                debug!("No parser for option {}, keep {} bytes raw", code, len);
                O::from(RawOption::new(registry.option_code(code), data))
            }
        };
        options.push(opt);
    }

    Ok(options)
}

/// Encode one option with its code and length header.
pub fn encode_option(buf: &mut Vec<u8>, code: u8, data: &[u8]) -> Result<usize, DhcpError> {
    if data.len() > DHCP_OPTION_MAX_LEN {
        return Err(DhcpError::OptionTooLong { code, len: data.len() })
    }
    encode_u8(buf, code);
    encode_u8(buf, data.len() as u8);
    Ok(DHCP_OPTION_HLEN + encode_data(buf, data))
}

/// Serialize options in order, without padding or End option.
pub fn serialize<O: DhcpOptionValue>(options: &Options<O>) -> Result<Vec<u8>, DhcpError> {
    let mut buf = Vec::new();

    for opt in options {
        let data = opt.to_bytes()?;
        let len = encode_option(&mut buf, opt.code(), &data)?;
        trace!("Encode option {} length {}", opt.code(), len);
    }

    Ok(buf)
}
