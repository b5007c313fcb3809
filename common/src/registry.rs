//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use std::collections::HashMap;

use crate::DhcpError;
use crate::option::OptionCode;

/// Parser for one option payload.
pub type ParseFn<O> = Box<dyn Fn(&[u8]) -> Result<O, DhcpError> + Send + Sync>;

struct RegistryEntry<O> {
    name: String,
    parser: Option<ParseFn<O>>,
}

/// Option code to parser and display name, for one nesting level.
///
/// A registry is built once and only read afterwards, so it can be shared
/// between concurrent parses.
pub struct Registry<O> {
    entries: HashMap<u8, RegistryEntry<O>>,
}

impl<O> Default for Registry<O> {
    fn default() -> Self {
        Registry::new()
    }
}

impl<O> Registry<O> {
    pub fn new() -> Registry<O> {
        Registry {
            entries: HashMap::new(),
        }
    }

    /// Register a typed parser for a code.
    pub fn register<F>(&mut self, code: u8, name: &str, parser: F)
    where
        F: Fn(&[u8]) -> Result<O, DhcpError> + Send + Sync + 'static,
    {
        self.entries.insert(code, RegistryEntry {
            name: name.to_string(),
            parser: Some(Box::new(parser)),
        });
    }

    /// Register a display name only; the payload stays raw bytes.
    pub fn register_name(&mut self, code: u8, name: &str) {
        self.entries.insert(code, RegistryEntry {
            name: name.to_string(),
            parser: None,
        });
    }

    /// Return true if the code has a typed parser.
    pub fn has_parser(&self, code: u8) -> bool {
        matches!(self.entries.get(&code), Some(RegistryEntry { parser: Some(_), .. }))
    }

    /// Return the parser for a code, if any.
    pub fn parser(&self, code: u8) -> Option<&ParseFn<O>> {
        self.entries.get(&code).and_then(|entry| entry.parser.as_ref())
    }

    /// Return the code with its display name.
    pub fn option_code(&self, code: u8) -> OptionCode {
        match self.entries.get(&code) {
            Some(entry) => OptionCode::new(code, &entry.name),
            None => OptionCode::unknown(code),
        }
    }
}
