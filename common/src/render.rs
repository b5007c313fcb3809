//
// DHCP-RS - Common
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use std::fmt;

/// Indentation added per nesting level.
pub const INDENT: &str = "  ";

/// Write a header line and each child below it, indented one level.
///
/// Children may themselves render over several lines; every line is
/// indented, so nesting composes.  Leaf values taken from the wire go
/// through `escape_control` first so they stay on one line.
pub fn write_nested<I, T>(f: &mut fmt::Formatter<'_>, name: &str, children: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    write!(f, "{} ->", name)?;
    for child in children {
        for line in child.to_string().lines() {
            write!(f, "\n{}{}", INDENT, line)?;
        }
    }
    Ok(())
}

/// Escape control characters, such as line breaks, in a wire string.
pub fn escape_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
