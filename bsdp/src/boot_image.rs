//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Boot Image:
//  Boot image descriptor advertised by a BSDP server.
//
//   0                   1                   2                   3
//   0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//  +-+-------------+---------------+-------------------------------+
//  |I|  Image Type |   Reserved    |             Index             |
//  +-+-------------+---------------+-------------------------------+
//  |  Name Length  |  Name ...
//  +---------------+-----------------
//

use std::fmt;
use std::convert::TryFrom;
use std::mem::size_of;

use common::DhcpError;
use common::encode::*;
use common::render::escape_control;

/// Boot Image ID length.
pub const BOOT_IMAGE_ID_LEN: usize = size_of::<u32>();

/// Boot Image fixed part, ID and name length.
pub const BOOT_IMAGE_HLEN: usize = BOOT_IMAGE_ID_LEN + size_of::<u8>();

const INSTALL_MASK: u32 = 0x8000_0000;
const IMAGE_TYPE_MASK: u32 = 0x7F;
const IMAGE_TYPE_SHIFT: u32 = 24;
const INDEX_MASK: u32 = 0xFFFF;

/// Boot Image Type.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BootImageType {
    MacOS9 = 0,
    MacOSX = 1,
    MacOSXServer = 2,
    HardwareDiagnostics = 3,
}

impl fmt::Display for BootImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            BootImageType::MacOS9 => write!(f, "macOS 9"),
            BootImageType::MacOSX => write!(f, "macOS"),
            BootImageType::MacOSXServer => write!(f, "macOS Server"),
            BootImageType::HardwareDiagnostics => write!(f, "Hardware Diagnostics"),
        }
    }
}

impl TryFrom<u8> for BootImageType {
    type Error = DhcpError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            x if x == BootImageType::MacOS9 as u8 => Ok(BootImageType::MacOS9),
            x if x == BootImageType::MacOSX as u8 => Ok(BootImageType::MacOSX),
            x if x == BootImageType::MacOSXServer as u8 => Ok(BootImageType::MacOSXServer),
            x if x == BootImageType::HardwareDiagnostics as u8 => Ok(BootImageType::HardwareDiagnostics),
            _ => Err(DhcpError::InvalidValue(format!("boot image type {}", v))),
        }
    }
}

/// Boot Image ID.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BootImageID {
    /// Image can be installed.
    pub is_install: bool,

    /// Image type.
    pub image_type: BootImageType,

    /// Image index.
    pub index: u16,
}

impl BootImageID {
    pub fn new(is_install: bool, image_type: BootImageType, index: u16) -> BootImageID {
        BootImageID {
            is_install,
            image_type,
            index,
        }
    }

    /// Pack into the 32 bit wire value.  Reserved bits are zero.
    pub fn to_u32(&self) -> u32 {
        let mut v = (self.image_type as u32 & IMAGE_TYPE_MASK) << IMAGE_TYPE_SHIFT;
        if self.is_install {
            v |= INSTALL_MASK;
        }
        v | self.index as u32
    }

    /// Unpack from the 32 bit wire value.  Reserved bits are ignored, so an
    /// ID received with any of them set encodes back with them cleared.
    pub fn from_u32(v: u32) -> Result<BootImageID, DhcpError> {
        let image_type = ((v >> IMAGE_TYPE_SHIFT) & IMAGE_TYPE_MASK) as u8;
        Ok(BootImageID {
            is_install: v & INSTALL_MASK != 0,
            image_type: image_type.try_into()?,
            index: (v & INDEX_MASK) as u16,
        })
    }

    pub fn encode(&self, buf: &mut Vec<u8>) -> usize {
        encode_u32(buf, self.to_u32())
    }

    pub fn decode(buf: &[u8]) -> Result<(usize, BootImageID), DhcpError> {
        let v = decode_u32(buf)?;
        Ok((BOOT_IMAGE_ID_LEN, BootImageID::from_u32(v)?))
    }
}

impl fmt::Display for BootImageID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let install = if self.is_install { "installable" } else { "uninstallable" };
        write!(f, "[{}] {} {} image", self.index, install, self.image_type)
    }
}

/// Boot Image.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BootImage {
    pub id: BootImageID,
    pub name: String,
}

impl BootImage {
    pub fn new(id: BootImageID, name: &str) -> BootImage {
        BootImage {
            id,
            name: name.to_string(),
        }
    }

    /// Encode ID, name length and name.  The length always comes from the
    /// name itself.
    pub fn encode(&self, buf: &mut Vec<u8>) -> Result<usize, DhcpError> {
        let name = self.name.as_bytes();
        if name.len() > u8::MAX as usize {
            return Err(DhcpError::EncodeError(format!("boot image name {} bytes > {}", name.len(), u8::MAX)))
        }

        let mut len = self.id.encode(buf);
        len += encode_u8(buf, name.len() as u8);
        len += encode_data(buf, name);
        Ok(len)
    }

    /// Decode one boot image from the head of buf.
    pub fn decode(buf: &[u8]) -> Result<(usize, BootImage), DhcpError> {
        let (mut len, id) = BootImageID::decode(buf)?;
        let name_len = decode_u8(&buf[len..])? as usize;
        len += size_of::<u8>();
        let name = match std::str::from_utf8(decode_data(&buf[len..], name_len)?) {
            Ok(s) => s.to_string(),
            Err(err) => return Err(DhcpError::DecodeError(format!("boot image name {}", err))),
        };
        len += name_len;

        Ok((len, BootImage { id, name }))
    }
}

impl fmt::Display for BootImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", escape_control(&self.name), self.id)
    }
}

/// Decode a sequence of boot images filling the whole buffer.
pub fn decode_boot_images(buf: &[u8]) -> Result<Vec<BootImage>, DhcpError> {
    let mut images = Vec::new();
    let mut b = buf;

    while !b.is_empty() {
        if b.len() < BOOT_IMAGE_HLEN {
            return Err(DhcpError::UnexpectedTrailingData(b.len()))
        }
        let (len, image) = BootImage::decode(b)?;
        images.push(image);
        b = &b[len..];
    }

    Ok(images)
}

/// Encode a sequence of boot images.
pub fn encode_boot_images(buf: &mut Vec<u8>, images: &[BootImage]) -> Result<usize, DhcpError> {
    let mut len = 0;
    for image in images {
        len += image.encode(buf)?;
    }
    Ok(len)
}
