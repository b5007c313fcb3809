//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Vendor Specific Information (DHCP option 43) holding BSDP sub-options.
//

use std::fmt;
use std::net::Ipv4Addr;

use common::{DhcpError, DhcpOptionValue, Options, Registry};
use common::render::write_nested;
use common::tlv;

use crate::boot_image::*;
use crate::dhcp::DhcpOptionCode;
use crate::options::*;

/// Vendor Specific Information option.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorSpecificInformation {
    pub options: Options<BsdpOption>,
}

impl From<Vec<BsdpOption>> for VendorSpecificInformation {
    fn from(options: Vec<BsdpOption>) -> Self {
        VendorSpecificInformation {
            options: Options::from(options),
        }
    }
}

impl VendorSpecificInformation {
    pub fn new(options: Options<BsdpOption>) -> VendorSpecificInformation {
        VendorSpecificInformation { options }
    }

    /// Parse the payload as a sub-option stream.  Any error in the stream
    /// fails the whole option.
    pub fn parse(buf: &[u8], registry: &Registry<BsdpOption>) -> Result<VendorSpecificInformation, DhcpError> {
        Ok(VendorSpecificInformation {
            options: tlv::parse(buf, registry)?,
        })
    }

    /// Parse with the default BSDP registry.
    pub fn from_bytes(buf: &[u8]) -> Result<VendorSpecificInformation, DhcpError> {
        VendorSpecificInformation::parse(buf, &registry())
    }

    pub fn has(&self, code: BsdpOptionCode) -> bool {
        self.options.has(code as u8)
    }

    pub fn get_option(&self, code: BsdpOptionCode) -> Vec<&BsdpOption> {
        self.options.get_option(code as u8)
    }

    pub fn get_one_option(&self, code: BsdpOptionCode) -> Option<&BsdpOption> {
        self.options.get_one_option(code as u8)
    }

    pub fn message_type(&self) -> Option<MessageType> {
        match self.get_one_option(BsdpOptionCode::MessageType) {
            Some(BsdpOption::MessageType(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn version(&self) -> Option<Version> {
        match self.get_one_option(BsdpOptionCode::Version) {
            Some(BsdpOption::Version(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn server_identifier(&self) -> Option<Ipv4Addr> {
        match self.get_one_option(BsdpOptionCode::ServerIdentifier) {
            Some(BsdpOption::ServerIdentifier(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn server_priority(&self) -> Option<u16> {
        match self.get_one_option(BsdpOptionCode::ServerPriority) {
            Some(BsdpOption::ServerPriority(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn reply_port(&self) -> Option<u16> {
        match self.get_one_option(BsdpOptionCode::ReplyPort) {
            Some(BsdpOption::ReplyPort(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn default_boot_image_id(&self) -> Option<BootImageID> {
        match self.get_one_option(BsdpOptionCode::DefaultBootImageID) {
            Some(BsdpOption::DefaultBootImageID(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn selected_boot_image_id(&self) -> Option<BootImageID> {
        match self.get_one_option(BsdpOptionCode::SelectedBootImageID) {
            Some(BsdpOption::SelectedBootImageID(v)) => Some(*v),
            _ => None,
        }
    }

    /// Boot images from every Boot Image List sub-option, in order.
    pub fn boot_images(&self) -> Vec<&BootImage> {
        self.get_option(BsdpOptionCode::BootImageList)
            .into_iter()
            .filter_map(|opt| match opt {
                BsdpOption::BootImageList(images) => Some(images.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl DhcpOptionValue for VendorSpecificInformation {
    fn code(&self) -> u8 {
        DhcpOptionCode::VendorSpecificInformation as u8
    }

    fn to_bytes(&self) -> Result<Vec<u8>, DhcpError> {
        tlv::serialize(&self.options)
    }
}

impl fmt::Display for VendorSpecificInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, DhcpOptionCode::VendorSpecificInformation.name(), &self.options)
    }
}
