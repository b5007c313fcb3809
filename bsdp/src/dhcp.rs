//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// DHCP level options that a BSDP exchange uses.  Every other code parses
// as a raw option.
//

use std::fmt;
use std::convert::TryFrom;
use std::net::Ipv4Addr;
use std::sync::Arc;

use common::{DhcpError, DhcpOptionValue, RawOption, Registry};
use common::encode::*;
use common::payload::*;
use common::render::escape_control;

use crate::options::{self, BsdpOption};
use crate::vendor::VendorSpecificInformation;

/// DHCP Option Code.
///   https://www.iana.org/assignments/bootp-dhcp-parameters/bootp-dhcp-parameters.xhtml
///
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum DhcpOptionCode {
    SubnetMask = 1,				// RFC2132
    Router = 3,					// RFC2132
    DomainServer = 6,				// RFC2132
    HostName = 12,				// RFC2132
    DomainName = 15,				// RFC2132
    VendorSpecificInformation = 43,		// RFC2132
    AddressRequest = 50,			// RFC2132
    AddressTime = 51,				// RFC2132
    DHCPMsgType = 53,				// RFC2132
    DHCPServerId = 54,				// RFC2132
    ParameterList = 55,				// RFC2132
    MaxMessageSize = 57,			// RFC2132
    RenewalTime = 58,				// RFC2132
    RebindingTime = 59,				// RFC2132
    ClassId = 60,				// RFC2132
    ClientId = 61,				// RFC2132
}

impl DhcpOptionCode {
    pub const ALL: [DhcpOptionCode; 16] = [
        DhcpOptionCode::SubnetMask,
        DhcpOptionCode::Router,
        DhcpOptionCode::DomainServer,
        DhcpOptionCode::HostName,
        DhcpOptionCode::DomainName,
        DhcpOptionCode::VendorSpecificInformation,
        DhcpOptionCode::AddressRequest,
        DhcpOptionCode::AddressTime,
        DhcpOptionCode::DHCPMsgType,
        DhcpOptionCode::DHCPServerId,
        DhcpOptionCode::ParameterList,
        DhcpOptionCode::MaxMessageSize,
        DhcpOptionCode::RenewalTime,
        DhcpOptionCode::RebindingTime,
        DhcpOptionCode::ClassId,
        DhcpOptionCode::ClientId,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            DhcpOptionCode::SubnetMask => "Subnet Mask",
            DhcpOptionCode::Router => "Router",
            DhcpOptionCode::DomainServer => "Domain Name Server",
            DhcpOptionCode::HostName => "Host Name",
            DhcpOptionCode::DomainName => "Domain Name",
            DhcpOptionCode::VendorSpecificInformation => "Vendor Specific Information",
            DhcpOptionCode::AddressRequest => "Requested IP Address",
            DhcpOptionCode::AddressTime => "IP Addresses Lease Time",
            DhcpOptionCode::DHCPMsgType => "DHCP Message Type",
            DhcpOptionCode::DHCPServerId => "Server Identifier",
            DhcpOptionCode::ParameterList => "Parameter Request List",
            DhcpOptionCode::MaxMessageSize => "Maximum DHCP Message Size",
            DhcpOptionCode::RenewalTime => "Renew Time Value",
            DhcpOptionCode::RebindingTime => "Rebinding Time Value",
            DhcpOptionCode::ClassId => "Class Identifier",
            DhcpOptionCode::ClientId => "Client identifier",
        }
    }
}

/// DHCP Message Type.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum DhcpMessageType {
    DHCPDISCOVER = 1,
    DHCPOFFER = 2,
    DHCPREQUEST = 3,
    DHCPDECLINE = 4,
    DHCPACK = 5,
    DHCPNAK = 6,
    DHCPRELEASE = 7,
    DHCPINFORM = 8,
    DHCPFORCERENEW = 9,
    DHCPLEASEQUERY = 10,
    DHCPLEASEUNASSIGNED = 11,
    DHCPLEASEUNKNOWN = 12,
    DHCPLEASEACTIVE = 13,
    DHCPBULKLEASEQUERY = 14,
    DHCPLEASEQUERYDONE = 15,
    DHCPACTIVELEASEQUERY = 16,
    DHCPLEASEQUERYSTATUS = 17,
    DHCPTLS = 18,
}

impl DhcpMessageType {
    const ALL: [DhcpMessageType; 18] = [
        DhcpMessageType::DHCPDISCOVER,
        DhcpMessageType::DHCPOFFER,
        DhcpMessageType::DHCPREQUEST,
        DhcpMessageType::DHCPDECLINE,
        DhcpMessageType::DHCPACK,
        DhcpMessageType::DHCPNAK,
        DhcpMessageType::DHCPRELEASE,
        DhcpMessageType::DHCPINFORM,
        DhcpMessageType::DHCPFORCERENEW,
        DhcpMessageType::DHCPLEASEQUERY,
        DhcpMessageType::DHCPLEASEUNASSIGNED,
        DhcpMessageType::DHCPLEASEUNKNOWN,
        DhcpMessageType::DHCPLEASEACTIVE,
        DhcpMessageType::DHCPBULKLEASEQUERY,
        DhcpMessageType::DHCPLEASEQUERYDONE,
        DhcpMessageType::DHCPACTIVELEASEQUERY,
        DhcpMessageType::DHCPLEASEQUERYSTATUS,
        DhcpMessageType::DHCPTLS,
    ];
}

impl fmt::Display for DhcpMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for DhcpMessageType {
    type Error = DhcpError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match DhcpMessageType::ALL.iter().find(|t| **t as u8 == v) {
            Some(t) => Ok(*t),
            None => Err(DhcpError::InvalidValue(format!("DHCP message type {}", v))),
        }
    }
}

/// DHCP option.
#[derive(Debug, Clone, PartialEq)]
pub enum DhcpOption {
    /// 43. Vendor Specific Information, BSDP sub-options.
    VendorSpecificInformation(VendorSpecificInformation),

    /// 53. DHCP Message Type.
    DHCPMsgType(DhcpMessageType),

    /// 54. Server Identifier.
    DHCPServerId(Ipv4Addr),

    /// 55. Parameter Request List.
    ParameterList(Vec<u8>),

    /// 57. Maximum DHCP Message Size.
    MaxMessageSize(u16),

    /// 60. Class Identifier.
    ClassId(String),

    /// Place holder for any other option.
    Raw(RawOption),
}

impl From<RawOption> for DhcpOption {
    fn from(raw: RawOption) -> Self {
        DhcpOption::Raw(raw)
    }
}

impl DhcpOption {
    /// Return the code, or None for raw options.
    pub fn option_code(&self) -> Option<DhcpOptionCode> {
        match self {
            DhcpOption::VendorSpecificInformation(_) => Some(DhcpOptionCode::VendorSpecificInformation),
            DhcpOption::DHCPMsgType(_) => Some(DhcpOptionCode::DHCPMsgType),
            DhcpOption::DHCPServerId(_) => Some(DhcpOptionCode::DHCPServerId),
            DhcpOption::ParameterList(_) => Some(DhcpOptionCode::ParameterList),
            DhcpOption::MaxMessageSize(_) => Some(DhcpOptionCode::MaxMessageSize),
            DhcpOption::ClassId(_) => Some(DhcpOptionCode::ClassId),
            DhcpOption::Raw(_) => None,
        }
    }
}

// RFC 2132 requires at least one byte.
fn expect_not_empty(code: DhcpOptionCode, len: usize) -> Result<(), DhcpError> {
    if len == 0 {
        Err(DhcpError::InvalidOptionLength(format!("{} is empty", code.name())))
    } else {
        Ok(())
    }
}

impl DhcpOptionValue for DhcpOption {
    fn code(&self) -> u8 {
        match self {
            DhcpOption::Raw(raw) => raw.code(),
            _ => self.option_code().map_or(0, |code| code as u8),
        }
    }

    fn to_bytes(&self) -> Result<Vec<u8>, DhcpError> {
        let mut buf = Vec::new();
        match self {
            DhcpOption::VendorSpecificInformation(v) => return v.to_bytes(),
            DhcpOption::DHCPMsgType(v) => { encode_u8(&mut buf, *v as u8); }
            DhcpOption::DHCPServerId(v) => { encode_ipv4(&mut buf, *v); }
            DhcpOption::ParameterList(v) => {
                expect_not_empty(DhcpOptionCode::ParameterList, v.len())?;
                encode_data(&mut buf, v);
            }
            DhcpOption::MaxMessageSize(v) => { encode_u16(&mut buf, *v); }
            DhcpOption::ClassId(v) => {
                expect_not_empty(DhcpOptionCode::ClassId, v.len())?;
                encode_string(&mut buf, v);
            }
            DhcpOption::Raw(raw) => return raw.to_bytes(),
        }
        Ok(buf)
    }
}

impl fmt::Display for DhcpOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.option_code() {
            Some(code) => code.name(),
            None => "",
        };
        match self {
            DhcpOption::VendorSpecificInformation(v) => write!(f, "{}", v),
            DhcpOption::DHCPMsgType(v) => write!(f, "{} -> {}", name, v),
            DhcpOption::DHCPServerId(v) => write!(f, "{} -> {}", name, v),
            DhcpOption::ParameterList(v) => write!(f, "{} -> {:?}", name, v),
            DhcpOption::MaxMessageSize(v) => write!(f, "{} -> {}", name, v),
            DhcpOption::ClassId(v) => write!(f, "{} -> {}", name, escape_control(v)),
            DhcpOption::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// Build the DHCP option registry, parsing option 43 with the given BSDP
/// sub-option registry.
pub fn registry(vendor: Arc<Registry<BsdpOption>>) -> Registry<DhcpOption> {
    let mut registry: Registry<DhcpOption> = Registry::new();

    for code in DhcpOptionCode::ALL {
        registry.register_name(code as u8, code.name());
    }

    registry.register(DhcpOptionCode::VendorSpecificInformation as u8,
                      DhcpOptionCode::VendorSpecificInformation.name(), move |b: &[u8]| {
        Ok(DhcpOption::VendorSpecificInformation(VendorSpecificInformation::parse(b, &vendor)?))
    });
    registry.register(DhcpOptionCode::DHCPMsgType as u8, DhcpOptionCode::DHCPMsgType.name(), |b: &[u8]| {
        Ok(DhcpOption::DHCPMsgType(option_u8(b)?.try_into()?))
    });
    registry.register(DhcpOptionCode::DHCPServerId as u8, DhcpOptionCode::DHCPServerId.name(), |b: &[u8]| {
        Ok(DhcpOption::DHCPServerId(option_ipv4(b)?))
    });
    registry.register(DhcpOptionCode::ParameterList as u8, DhcpOptionCode::ParameterList.name(), |b: &[u8]| {
        Ok(DhcpOption::ParameterList(option_u8_vec(b, 1)?))
    });
    registry.register(DhcpOptionCode::MaxMessageSize as u8, DhcpOptionCode::MaxMessageSize.name(), |b: &[u8]| {
        Ok(DhcpOption::MaxMessageSize(option_u16(b)?))
    });
    registry.register(DhcpOptionCode::ClassId as u8, DhcpOptionCode::ClassId.name(), |b: &[u8]| {
        Ok(DhcpOption::ClassId(option_string(b, 1)?))
    });

    registry
}

/// DHCP option registry with the default BSDP sub-option registry.
pub fn default_registry() -> Registry<DhcpOption> {
    registry(Arc::new(options::registry()))
}
