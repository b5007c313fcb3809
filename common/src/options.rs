//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use std::slice::Iter;

use crate::DhcpError;
use crate::option::DhcpOptionValue;
use crate::tlv;

/// Ordered list of options, in wire order.
///
/// The same code may appear more than once.  Lookups return every
/// occurrence separately; options are never concatenated as RFC 3396
/// describes, callers that need that must join the payloads themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Options<O> {
    options: Vec<O>,
}

impl<O> Default for Options<O> {
    fn default() -> Self {
        Options::new()
    }
}

impl<O> From<Vec<O>> for Options<O> {
    fn from(options: Vec<O>) -> Self {
        Options { options }
    }
}

impl<O> FromIterator<O> for Options<O> {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Options {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a, O> IntoIterator for &'a Options<O> {
    type Item = &'a O;
    type IntoIter = Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

impl<O> Options<O> {
    pub fn new() -> Options<O> {
        Options {
            options: Vec::new(),
        }
    }

    /// Append an option while building the list.
    pub fn push(&mut self, opt: O) {
        self.options.push(opt);
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, O> {
        self.options.iter()
    }
}

impl<O: DhcpOptionValue> Options<O> {
    /// Return true if at least one option carries the code.
    pub fn has(&self, code: u8) -> bool {
        self.options.iter().any(|opt| opt.code() == code)
    }

    /// Return all options with the code, in order.
    pub fn get_option(&self, code: u8) -> Vec<&O> {
        self.options.iter().filter(|opt| opt.code() == code).collect()
    }

    /// Return the first option with the code.
    pub fn get_one_option(&self, code: u8) -> Option<&O> {
        self.options.iter().find(|opt| opt.code() == code)
    }

    /// Serialize all options as code, length and payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DhcpError> {
        tlv::serialize(self)
    }
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{OptionCode, RawOption};

    fn raw(code: u8, data: &[u8]) -> RawOption {
        RawOption::new(OptionCode::unknown(code), data)
    }

    #[test]
    pub fn test_options_has() {
        let options = Options::from(vec![raw(1, &[1]), raw(2, &[1, 1])]);
        assert!(options.has(1));
        assert!(options.has(2));
        assert!(!options.has(9));
        assert!(!Options::<RawOption>::new().has(1));
    }

    #[test]
    pub fn test_options_get_option() {
        let options = Options::from(vec![raw(1, &[1]), raw(2, &[1, 1]), raw(2, &[1, 0])]);

        assert!(options.get_option(9).is_empty());

        let found = options.get_option(1);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data, [1]);

        let found = options.get_option(2);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].data, [1, 1]);
        assert_eq!(found[1].data, [1, 0]);
    }

    #[test]
    pub fn test_options_get_one_option() {
        let options = Options::from(vec![raw(1, &[1]), raw(2, &[1, 1]), raw(2, &[1, 0])]);

        assert!(options.get_one_option(9).is_none());
        match options.get_one_option(2) {
            Some(opt) => assert_eq!(opt.data, [1, 1]),
            None => assert!(false, "option 2 not found"),
        }
    }

    #[test]
    pub fn test_options_order() {
        let mut options = Options::new();
        options.push(raw(3, &[]));
        options.push(raw(1, &[]));
        options.push(raw(2, &[]));
        let codes: Vec<u8> = options.iter().map(|opt| opt.code()).collect();
        assert_eq!(codes, [3, 1, 2]);
        assert_eq!(options.len(), 3);
    }
}
