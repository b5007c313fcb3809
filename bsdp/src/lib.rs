//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Boot Service Discovery Protocol options carried in DHCP option 43.
//

pub mod boot_image;
pub mod options;
pub mod vendor;
pub mod dhcp;
pub mod request;
pub mod config;

pub use boot_image::{BootImage, BootImageID, BootImageType};
pub use options::{BsdpOption, BsdpOptionCode, MessageType, Version};
pub use vendor::VendorSpecificInformation;
pub use dhcp::{DhcpMessageType, DhcpOption, DhcpOptionCode};
pub use config::Config;
