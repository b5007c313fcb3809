//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Option lists for BSDP client requests, and boot image extraction from
// server replies.
//

use std::net::Ipv4Addr;

use log::debug;

use common::{DhcpError, Options};

use crate::boot_image::*;
use crate::dhcp::*;
use crate::options::*;
use crate::vendor::VendorSpecificInformation;

/// DHCP client port.
pub const DHCP_CLIENT_PORT: u16 = 68;

/// Maximum DHCP message size a BSDP client advertises.
pub const BSDP_MAX_MESSAGE_SIZE: u16 = 1500;

/// Vendor class prefix of BSDP clients.
pub const BSDP_VENDOR_CLASS_PREFIX: &str = "AAPLBSDPC";

/// Return the BSDP vendor class identifier for an architecture and model.
pub fn vendor_class_identifier(arch: &str, model: &str) -> String {
    format!("{}/{}/{}", BSDP_VENDOR_CLASS_PREFIX, arch, model)
}

// Sub-options common to INFORM[LIST] and INFORM[SELECT].
fn client_vendor_options(message_type: MessageType, reply_port: u16) -> Result<Vec<BsdpOption>, DhcpError> {
    let mut options = vec![
        BsdpOption::MessageType(message_type),
        BsdpOption::Version(Version::V1_1),
    ];

    if reply_port != 0 && reply_port != DHCP_CLIENT_PORT {
        // Reply port must be privileged.
        if reply_port >= 1024 {
            return Err(DhcpError::InvalidValue(format!("reply port {} >= 1024", reply_port)))
        }
        options.push(BsdpOption::ReplyPort(reply_port));
    }

    Ok(options)
}

// DHCP options wrapping the BSDP sub-options.
fn client_options(class_id: &str, vendor: Vec<BsdpOption>) -> Options<DhcpOption> {
    Options::from(vec![
        DhcpOption::DHCPMsgType(DhcpMessageType::DHCPINFORM),
        DhcpOption::ParameterList(vec![
            DhcpOptionCode::VendorSpecificInformation as u8,
            DhcpOptionCode::ClassId as u8,
        ]),
        DhcpOption::MaxMessageSize(BSDP_MAX_MESSAGE_SIZE),
        DhcpOption::ClassId(class_id.to_string()),
        DhcpOption::VendorSpecificInformation(VendorSpecificInformation::from(vendor)),
    ])
}

/// Options for an INFORM[LIST] request.
pub fn inform_list_options(reply_port: u16, class_id: &str) -> Result<Options<DhcpOption>, DhcpError> {
    let vendor = client_vendor_options(MessageType::List, reply_port)?;
    debug!("INFORM[LIST] class {} reply port {}", class_id, reply_port);
    Ok(client_options(class_id, vendor))
}

/// Options for an INFORM[SELECT] request for a boot image offered by a server.
pub fn inform_select_options(reply_port: u16, class_id: &str, image: &BootImage,
                             server_id: Ipv4Addr, priority: u16) -> Result<Options<DhcpOption>, DhcpError> {
    let mut vendor = client_vendor_options(MessageType::Select, reply_port)?;
    vendor.push(BsdpOption::SelectedBootImageID(image.id));
    vendor.push(BsdpOption::ServerIdentifier(server_id));
    vendor.push(BsdpOption::ServerPriority(priority));
    debug!("INFORM[SELECT] class {} image {} server {}", class_id, image, server_id);
    Ok(client_options(class_id, vendor))
}

/// Return the vendor specific information of a reply.
pub fn vendor_information(options: &Options<DhcpOption>) -> Result<&VendorSpecificInformation, DhcpError> {
    match options.get_one_option(DhcpOptionCode::VendorSpecificInformation as u8) {
        Some(DhcpOption::VendorSpecificInformation(v)) => Ok(v),
        _ => Err(DhcpError::DecodeError("no vendor specific information".to_string())),
    }
}

/// Return the boot images advertised in an ACK[LIST].
pub fn boot_images_from_ack(options: &Options<DhcpOption>) -> Result<Vec<BootImage>, DhcpError> {
    let vendor = vendor_information(options)?;
    Ok(vendor.boot_images().into_iter().cloned().collect())
}
