// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text parsing primitives used by the parse-style converters.
//!
//! Numeric parsing goes through `str::parse`; this module only covers the
//! lenient forms the converters accept beyond `FromStr`.

/// Parse a boolean from common textual forms.
///
/// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, ASCII
/// case-insensitive. Anything else is `None`.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a single character; multi-character input is rejected.
pub fn parse_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
