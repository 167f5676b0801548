// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use alloy::primitives::Address;
use std::str::FromStr;

pub fn parse_boolish(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parses a `0x`-prefixed, 40 hex digit address. Mixed case is accepted without
/// checksum verification.
pub fn parse_address_hex(s: &str) -> Option<Address> {
    let trimmed = s.trim();
    let digits = strip_0x(trimmed);
    if digits.len() == trimmed.len() || digits.len() != 40 {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Address::from_str(digits).ok()
}

/// Chain id as decimal or `0x`-prefixed hex.
pub fn parse_chain_id(s: &str) -> Option<u64> {
    let trimmed = s.trim();
    let digits = strip_0x(trimmed);
    if digits.len() != trimmed.len() {
        return u64::from_str_radix(digits, 16).ok();
    }
    trimmed.parse().ok()
}

/// Splits a comma/whitespace separated list, dropping quotes, empty parts and
/// repeats. First occurrence order is kept.
pub fn parse_name_list(raw: &str) -> Vec<String> {
    let cleaned = raw.trim_matches(|c| c == '`' || c == '"' || c == '\'');
    dedup_names(
        cleaned
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(ToString::to_string),
    )
}

/// Trims names and drops empty and repeated ones, keeping first occurrence order.
pub fn dedup_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if !trimmed.is_empty() && !out.iter().any(|seen| seen == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_parser_requires_prefix_and_length() {
        let addr = parse_address_hex("0x6849a3c193cf49cfc470852a297914055d55785e").unwrap();
        assert_eq!(
            format!("{addr:#x}"),
            "0x6849a3c193cf49cfc470852a297914055d55785e"
        );
        assert!(parse_address_hex("0X6849A3C193CF49CFC470852A297914055D55785E").is_some());
        assert!(parse_address_hex("6849a3c193cf49cfc470852a297914055d55785e").is_none());
        assert!(parse_address_hex("0x6849a3c1").is_none());
        assert!(parse_address_hex("0xzz49a3c193cf49cfc470852a297914055d55785e").is_none());
        assert!(parse_address_hex("").is_none());
    }

    #[test]
    fn parse_boolish_rejects_invalid_values() {
        assert_eq!(parse_boolish("true"), Some(true));
        assert_eq!(parse_boolish("OFF"), Some(false));
        assert_eq!(parse_boolish("tru"), None);
    }

    #[test]
    fn name_lists_accept_commas_and_spaces() {
        assert_eq!(
            parse_name_list("\"mantleSepolia, mantle  local\""),
            vec!["mantleSepolia", "mantle", "local"]
        );
        assert!(parse_name_list(" , ").is_empty());
    }

    #[test]
    fn name_lists_drop_repeats() {
        assert_eq!(parse_name_list("n n,n"), vec!["n"]);
        assert_eq!(
            dedup_names(vec!["b".to_string(), " a".to_string(), "b ".to_string()]),
            vec!["b", "a"]
        );
    }

    #[test]
    fn chain_ids_accept_decimal_and_hex() {
        assert_eq!(parse_chain_id("5003"), Some(5003));
        assert_eq!(parse_chain_id("0x138b"), Some(5003));
        assert_eq!(parse_chain_id("mantle"), None);
    }
}
