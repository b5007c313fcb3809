//
// DHCP-RS - BSDP
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;

use common::{DhcpError, Registry};

use crate::dhcp::{self, DhcpOption};
use crate::options::{self, BsdpOption};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub global: Option<ConfigGlobal>,
    pub option_names: Option<HashMap<u8, String>>,
    pub vendor_option_names: Option<HashMap<u8, String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigGlobal {
    pub debug: Option<bool>,
}

/// DHCP and BSDP registries built from a config.
pub struct Registries {
    pub dhcp: Registry<DhcpOption>,
    pub vendor: Arc<Registry<BsdpOption>>,
}

impl Config {
    pub fn from_json(s: &str) -> Result<Config, DhcpError> {
        serde_json::from_str(s).map_err(|e| DhcpError::ConfigError(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, DhcpError> {
        let s = fs::read_to_string(path)?;
        Config::from_json(&s)
    }

    pub fn is_debug_enabled(&self) -> bool {
        match &self.global {
            Some(ConfigGlobal { debug: Some(debug) }) => *debug,
            _ => false,
        }
    }

    /// Build the registries, adding configured display names.  Codes with a
    /// typed parser keep their built-in name.
    pub fn registries(&self) -> Registries {
        let mut vendor = options::registry();
        if let Some(names) = &self.vendor_option_names {
            add_names(&mut vendor, names, "vendor");
        }
        let vendor = Arc::new(vendor);

        let mut dhcp = dhcp::registry(vendor.clone());
        if let Some(names) = &self.option_names {
            add_names(&mut dhcp, names, "dhcp");
        }

        Registries { dhcp, vendor }
    }
}

fn add_names<O>(registry: &mut Registry<O>, names: &HashMap<u8, String>, scope: &str) {
    for (code, name) in names {
        if registry.has_parser(*code) {
            warn!("{} option {} has a typed parser, ignoring name {}", scope, code, name);
            continue;
        }
        debug!("{} option {} named {}", scope, code, name);
        registry.register_name(*code, name);
    }
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;
    use common::tlv;

    const CONFIG: &str = r#"
    {
        "global": { "debug": true },
        "option_names": { "224": "Site Private", "53": "Message Type" },
        "vendor_option_names": { "11": "Attributes Filter" }
    }"#;

    #[test]
    pub fn test_config_from_json() {
        match Config::from_json(CONFIG) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(config) => {
                assert!(config.is_debug_enabled());
                assert_eq!(config.option_names.as_ref().map(|m| m.len()), Some(2));
            }
        }

        match Config::from_json("{}") {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(config) => assert!(!config.is_debug_enabled()),
        }
    }

    #[test]
    pub fn test_config_bad_json() {
        match Config::from_json("{ \"global\": ") {
            Err(e) => assert!(matches!(e, DhcpError::ConfigError(_))),
            Ok(config) => assert!(false, "Error: {:?}", config),
        }
    }

    #[test]
    pub fn test_config_missing_file() {
        match Config::from_file("/nonexistent/bsdp.json") {
            Err(e) => assert!(matches!(e, DhcpError::IoError(_))),
            Ok(config) => assert!(false, "Error: {:?}", config),
        }
    }

    #[test]
    pub fn test_config_registries() {
        let config = match Config::from_json(CONFIG) {
            Err(e) => panic!("Error: {:?}", e),
            Ok(config) => config,
        };
        let registries = config.registries();

        assert_eq!(registries.dhcp.option_code(224).to_string(), "Site Private (224)");
        // Typed option keeps its name.
        assert_eq!(registries.dhcp.option_code(53).to_string(), "DHCP Message Type (53)");
        assert!(registries.dhcp.has_parser(53));
        assert_eq!(registries.vendor.option_code(11).to_string(), "Attributes Filter (11)");

        match tlv::parse(&[224, 2, 1, 2], &registries.dhcp) {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(options) => assert_eq!(options.iter().next().map(|o| o.to_string()),
                                      Some("Site Private (224) -> [1, 2]".to_string())),
        }
    }
}
