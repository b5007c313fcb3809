//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// BSDP sub-options carried inside DHCP Vendor Specific Information.
//

use std::fmt;
use std::convert::TryFrom;
use std::net::Ipv4Addr;

use common::{DhcpError, DhcpOptionValue, RawOption, Registry};
use common::encode::*;
use common::payload::*;
use common::render::{escape_control, write_nested};

use crate::boot_image::*;

/// BSDP Option Code.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum BsdpOptionCode {
    MessageType = 1,
    Version = 2,
    ServerIdentifier = 3,
    ServerPriority = 4,
    ReplyPort = 5,
    BootImageListPath = 6,
    DefaultBootImageID = 7,
    SelectedBootImageID = 8,
    BootImageList = 9,
    NetBoot10Firmware = 10,
    BootImageAttributesFilterList = 11,
    MaxMessageSize = 12,
    ShadowMountPath = 128,
    ShadowFilePath = 129,
    MachineName = 130,
}

impl BsdpOptionCode {
    pub const ALL: [BsdpOptionCode; 15] = [
        BsdpOptionCode::MessageType,
        BsdpOptionCode::Version,
        BsdpOptionCode::ServerIdentifier,
        BsdpOptionCode::ServerPriority,
        BsdpOptionCode::ReplyPort,
        BsdpOptionCode::BootImageListPath,
        BsdpOptionCode::DefaultBootImageID,
        BsdpOptionCode::SelectedBootImageID,
        BsdpOptionCode::BootImageList,
        BsdpOptionCode::NetBoot10Firmware,
        BsdpOptionCode::BootImageAttributesFilterList,
        BsdpOptionCode::MaxMessageSize,
        BsdpOptionCode::ShadowMountPath,
        BsdpOptionCode::ShadowFilePath,
        BsdpOptionCode::MachineName,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            BsdpOptionCode::MessageType => "BSDP Message Type",
            BsdpOptionCode::Version => "BSDP Version",
            BsdpOptionCode::ServerIdentifier => "BSDP Server Identifier",
            BsdpOptionCode::ServerPriority => "BSDP Server Priority",
            BsdpOptionCode::ReplyPort => "BSDP Reply Port",
            BsdpOptionCode::BootImageListPath => "BSDP Boot Image List Path",
            BsdpOptionCode::DefaultBootImageID => "BSDP Default Boot Image ID",
            BsdpOptionCode::SelectedBootImageID => "BSDP Selected Boot Image ID",
            BsdpOptionCode::BootImageList => "BSDP Boot Image List",
            BsdpOptionCode::NetBoot10Firmware => "BSDP Netboot 1.0 Firmware",
            BsdpOptionCode::BootImageAttributesFilterList => "BSDP Boot Image Attributes Filter List",
            BsdpOptionCode::MaxMessageSize => "BSDP Maximum Message Size",
            BsdpOptionCode::ShadowMountPath => "BSDP Shadow Mount Path",
            BsdpOptionCode::ShadowFilePath => "BSDP Shadow File Path",
            BsdpOptionCode::MachineName => "BSDP Machine Name",
        }
    }
}

/// BSDP Message Type.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum MessageType {
    List = 1,
    Select = 2,
    Failed = 3,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            MessageType::List => write!(f, "LIST"),
            MessageType::Select => write!(f, "SELECT"),
            MessageType::Failed => write!(f, "FAILED"),
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = DhcpError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            x if x == MessageType::List as u8 => Ok(MessageType::List),
            x if x == MessageType::Select as u8 => Ok(MessageType::Select),
            x if x == MessageType::Failed as u8 => Ok(MessageType::Failed),
            _ => Err(DhcpError::InvalidValue(format!("BSDP message type {}", v))),
        }
    }
}

/// BSDP protocol version.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub const V1_0: Version = Version { major: 1, minor: 0 };
    pub const V1_1: Version = Version { major: 1, minor: 1 };
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// BSDP sub-option.
#[derive(Debug, Clone, PartialEq)]
pub enum BsdpOption {
    /// 1. Message Type.
    MessageType(MessageType),

    /// 2. Version.
    Version(Version),

    /// 3. Server Identifier.
    ServerIdentifier(Ipv4Addr),

    /// 4. Server Priority.
    ServerPriority(u16),

    /// 5. Reply Port.
    ReplyPort(u16),

    /// 7. Default Boot Image ID.
    DefaultBootImageID(BootImageID),

    /// 8. Selected Boot Image ID.
    SelectedBootImageID(BootImageID),

    /// 9. Boot Image List.
    BootImageList(Vec<BootImage>),

    /// 12. Maximum Message Size.
    MaxMessageSize(u16),

    /// 130. Machine Name.
    MachineName(String),

    /// Any other sub-option, kept verbatim.
    Raw(RawOption),
}

impl From<RawOption> for BsdpOption {
    fn from(raw: RawOption) -> Self {
        BsdpOption::Raw(raw)
    }
}

impl BsdpOption {
    /// Return the code, or None for raw sub-options.
    pub fn option_code(&self) -> Option<BsdpOptionCode> {
        match self {
            BsdpOption::MessageType(_) => Some(BsdpOptionCode::MessageType),
            BsdpOption::Version(_) => Some(BsdpOptionCode::Version),
            BsdpOption::ServerIdentifier(_) => Some(BsdpOptionCode::ServerIdentifier),
            BsdpOption::ServerPriority(_) => Some(BsdpOptionCode::ServerPriority),
            BsdpOption::ReplyPort(_) => Some(BsdpOptionCode::ReplyPort),
            BsdpOption::DefaultBootImageID(_) => Some(BsdpOptionCode::DefaultBootImageID),
            BsdpOption::SelectedBootImageID(_) => Some(BsdpOptionCode::SelectedBootImageID),
            BsdpOption::BootImageList(_) => Some(BsdpOptionCode::BootImageList),
            BsdpOption::MaxMessageSize(_) => Some(BsdpOptionCode::MaxMessageSize),
            BsdpOption::MachineName(_) => Some(BsdpOptionCode::MachineName),
            BsdpOption::Raw(_) => None,
        }
    }
}

impl DhcpOptionValue for BsdpOption {
    fn code(&self) -> u8 {
        match self {
            BsdpOption::Raw(raw) => raw.code(),
            _ => self.option_code().map_or(0, |code| code as u8),
        }
    }

    fn to_bytes(&self) -> Result<Vec<u8>, DhcpError> {
        let mut buf = Vec::new();
        match self {
            BsdpOption::MessageType(v) => { encode_u8(&mut buf, *v as u8); }
            BsdpOption::Version(v) => {
                encode_u8(&mut buf, v.major);
                encode_u8(&mut buf, v.minor);
            }
            BsdpOption::ServerIdentifier(v) => { encode_ipv4(&mut buf, *v); }
            BsdpOption::ServerPriority(v)
                | BsdpOption::ReplyPort(v)
                | BsdpOption::MaxMessageSize(v) => { encode_u16(&mut buf, *v); }
            BsdpOption::DefaultBootImageID(v)
                | BsdpOption::SelectedBootImageID(v) => { v.encode(&mut buf); }
            BsdpOption::BootImageList(images) => { encode_boot_images(&mut buf, images)?; }
            BsdpOption::MachineName(v) => { encode_string(&mut buf, v); }
            BsdpOption::Raw(raw) => return raw.to_bytes(),
        }
        Ok(buf)
    }
}

impl fmt::Display for BsdpOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.option_code() {
            Some(code) => code.name(),
            None => "",
        };
        match self {
            BsdpOption::MessageType(v) => write!(f, "{} -> {}", name, v),
            BsdpOption::Version(v) => write!(f, "{} -> {}", name, v),
            BsdpOption::ServerIdentifier(v) => write!(f, "{} -> {}", name, v),
            BsdpOption::ServerPriority(v)
                | BsdpOption::ReplyPort(v)
                | BsdpOption::MaxMessageSize(v) => write!(f, "{} -> {}", name, v),
            BsdpOption::DefaultBootImageID(v)
                | BsdpOption::SelectedBootImageID(v) => write!(f, "{} -> {}", name, v),
            BsdpOption::BootImageList(images) => write_nested(f, name, images),
            BsdpOption::MachineName(v) => write!(f, "{} -> {}", name, escape_control(v)),
            BsdpOption::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

fn parse_boot_image_id(buf: &[u8]) -> Result<BootImageID, DhcpError> {
    BootImageID::from_u32(option_u32(buf)?)
}

/// Build the BSDP sub-option registry.
pub fn registry() -> Registry<BsdpOption> {
    let mut registry: Registry<BsdpOption> = Registry::new();

    for code in BsdpOptionCode::ALL {
        registry.register_name(code as u8, code.name());
    }

    registry.register(BsdpOptionCode::MessageType as u8, BsdpOptionCode::MessageType.name(), |b: &[u8]| {
        Ok(BsdpOption::MessageType(option_u8(b)?.try_into()?))
    });
    registry.register(BsdpOptionCode::Version as u8, BsdpOptionCode::Version.name(), |b: &[u8]| {
        let v = option_u16(b)?;
        Ok(BsdpOption::Version(Version { major: (v >> 8) as u8, minor: (v & 0xFF) as u8 }))
    });
    registry.register(BsdpOptionCode::ServerIdentifier as u8, BsdpOptionCode::ServerIdentifier.name(), |b: &[u8]| {
        Ok(BsdpOption::ServerIdentifier(option_ipv4(b)?))
    });
    registry.register(BsdpOptionCode::ServerPriority as u8, BsdpOptionCode::ServerPriority.name(), |b: &[u8]| {
        Ok(BsdpOption::ServerPriority(option_u16(b)?))
    });
    registry.register(BsdpOptionCode::ReplyPort as u8, BsdpOptionCode::ReplyPort.name(), |b: &[u8]| {
        Ok(BsdpOption::ReplyPort(option_u16(b)?))
    });
    registry.register(BsdpOptionCode::DefaultBootImageID as u8, BsdpOptionCode::DefaultBootImageID.name(), |b: &[u8]| {
        Ok(BsdpOption::DefaultBootImageID(parse_boot_image_id(b)?))
    });
    registry.register(BsdpOptionCode::SelectedBootImageID as u8, BsdpOptionCode::SelectedBootImageID.name(), |b: &[u8]| {
        Ok(BsdpOption::SelectedBootImageID(parse_boot_image_id(b)?))
    });
    registry.register(BsdpOptionCode::BootImageList as u8, BsdpOptionCode::BootImageList.name(), |b: &[u8]| {
        Ok(BsdpOption::BootImageList(decode_boot_images(b)?))
    });
    registry.register(BsdpOptionCode::MaxMessageSize as u8, BsdpOptionCode::MaxMessageSize.name(), |b: &[u8]| {
        Ok(BsdpOption::MaxMessageSize(option_u16(b)?))
    });
    registry.register(BsdpOptionCode::MachineName as u8, BsdpOptionCode::MachineName.name(), |b: &[u8]| {
        Ok(BsdpOption::MachineName(option_string(b, 0)?))
    });

    registry
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;
    use common::{OptionCode, Options};
    use common::tlv;

    fn images() -> Vec<BootImage> {
        vec![
            BootImage::new(BootImageID::new(false, BootImageType::MacOSX, 1001), "bsdp-1"),
            BootImage::new(BootImageID::new(true, BootImageType::MacOS9, 9009), "bsdp-2"),
        ]
    }

    #[test]
    pub fn test_message_type() {
        assert_eq!(MessageType::try_from(1).ok(), Some(MessageType::List));
        assert_eq!(MessageType::try_from(3).ok(), Some(MessageType::Failed));
        assert!(MessageType::try_from(4).is_err());
        assert_eq!(MessageType::Select.to_string(), "SELECT");
    }

    #[test]
    pub fn test_option_to_bytes() {
        let cases: Vec<(BsdpOption, Vec<u8>)> = vec![
            (BsdpOption::MessageType(MessageType::List), vec![1]),
            (BsdpOption::Version(Version::V1_1), vec![1, 1]),
            (BsdpOption::ServerIdentifier(Ipv4Addr::new(10, 0, 0, 1)), vec![10, 0, 0, 1]),
            (BsdpOption::ReplyPort(993), vec![0x03, 0xE1]),
            (BsdpOption::DefaultBootImageID(images()[0].id), vec![0x01, 0x00, 0x03, 0xE9]),
            (BsdpOption::MachineName("mac".to_string()), vec![b'm', b'a', b'c']),
        ];
        for (opt, expected) in cases {
            match opt.to_bytes() {
                Err(e) => assert!(false, "Error: {:?}", e),
                Ok(b) => assert_eq!(b, expected, "{}", opt),
            }
        }
    }

    #[test]
    pub fn test_option_code() {
        assert_eq!(BsdpOption::BootImageList(vec![]).code(), 9);
        assert_eq!(BsdpOption::MachineName("x".to_string()).code(), 130);
        let raw = RawOption::new(OptionCode::new(128, "BSDP Shadow Mount Path"), &[1]);
        assert_eq!(BsdpOption::Raw(raw).code(), 128);
    }

    #[test]
    pub fn test_parse_sub_options() {
        let data: [u8; 37] = [
            1, 1, 1,
            2, 2, 1, 1,
            5, 2, 1, 1,
            9, 22,
            0x1, 0x0, 0x03, 0xe9, 6, b'b', b's', b'd', b'p', b'-', b'1',
            0x80, 0x0, 0x23, 0x31, 6, b'b', b's', b'd', b'p', b'-', b'2',
            7, 4,
        ];
        // Default boot image ID is cut off.
        assert!(tlv::parse(&data, &registry()).is_err());

        let mut data = data.to_vec();
        data.extend_from_slice(&[0x1, 0x0, 0x03, 0xe9]);
        match tlv::parse(&data, &registry()) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(options) => {
                assert_eq!(options, Options::from(vec![
                    BsdpOption::MessageType(MessageType::List),
                    BsdpOption::Version(Version::V1_1),
                    BsdpOption::ReplyPort(0x0101),
                    BsdpOption::BootImageList(images()),
                    BsdpOption::DefaultBootImageID(images()[0].id),
                ]));
                match options.to_bytes() {
                    Err(e) => assert!(false, "Error: {:?}", e),
                    Ok(b) => assert_eq!(b, data),
                }
            }
        }
    }

    #[test]
    pub fn test_parse_bad_reply_port() {
        let data: [u8; 12] = [1, 1, 1, 2, 2, 1, 1, 5, 3, 1, 1, 1];
        match tlv::parse(&data, &registry()) {
            Err(DhcpError::MalformedOption { code, cause }) => {
                assert_eq!(code, OptionCode::new(5, "BSDP Reply Port"));
                assert!(matches!(*cause, DhcpError::InvalidOptionLength(_)));
            }
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(options) => assert!(false, "Error: {:?}", options),
        }
    }

    #[test]
    pub fn test_parse_bad_boot_image_list() {
        // Trailing partial record inside the list.
        let data: [u8; 16] = [9, 14, 0x1, 0x0, 0x03, 0xe9, 6, b'b', b's', b'd', b'p', b'-', b'1', 0x80, 0x0, 0x23];
        match tlv::parse(&data, &registry()) {
            Err(DhcpError::MalformedOption { code, cause }) => {
                assert_eq!(code.code, 9);
                assert!(matches!(*cause, DhcpError::UnexpectedTrailingData(3)));
            }
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(options) => assert!(false, "Error: {:?}", options),
        }
    }

    #[test]
    pub fn test_parse_named_raw() {
        let data: [u8; 5] = [128, 3, b'/', b'a', b'b'];
        match tlv::parse(&data, &registry()) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(options) => {
                let expected = RawOption::new(OptionCode::new(128, "BSDP Shadow Mount Path"), &[b'/', b'a', b'b']);
                assert_eq!(options.get_one_option(128), Some(&BsdpOption::Raw(expected)));
                assert_eq!(options.to_bytes().ok(), Some(data.to_vec()));
            }
        }
    }

    #[test]
    pub fn test_empty_machine_name() {
        let options = Options::from(vec![BsdpOption::MachineName(String::new())]);
        match options.to_bytes() {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(b) => {
                assert_eq!(b, [130, 0]);
                match tlv::parse(&b, &registry()) {
                    Err(e) => assert!(false, "Error: {:?}", e),
                    Ok(parsed) => assert_eq!(parsed, options),
                }
            }
        }
    }

    #[test]
    pub fn test_display_machine_name_control() {
        let opt = BsdpOption::MachineName("lab\nmac-01\r".to_string());
        assert_eq!(opt.to_string(), "BSDP Machine Name -> lab\\nmac-01\\r");
    }

    #[test]
    pub fn test_display() {
        assert_eq!(BsdpOption::Version(Version::V1_0).to_string(), "BSDP Version -> 1.0");
        assert_eq!(BsdpOption::ReplyPort(993).to_string(), "BSDP Reply Port -> 993");
        assert_eq!(BsdpOption::DefaultBootImageID(images()[0].id).to_string(),
                   "BSDP Default Boot Image ID -> [1001] uninstallable macOS image");
        assert_eq!(BsdpOption::BootImageList(images()).to_string(),
                   "BSDP Boot Image List ->\n  bsdp-1 [1001] uninstallable macOS image\n  bsdp-2 [9009] installable macOS 9 image");
    }
}
