// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field normalization for NetBox values

/// Strip the prefix length from an address in CIDR notation.
///
/// Returns everything before the first `/`, or the value unchanged when there
/// is no `/`.
///
/// ```rust
/// use netbox_inventory::domain::strip_address_suffix;
///
/// assert_eq!(strip_address_suffix("10.0.0.1/24"), "10.0.0.1");
/// assert_eq!(strip_address_suffix("10.0.0.1"), "10.0.0.1");
/// ```
pub fn strip_address_suffix(value: &str) -> String {
    value
        .split_once('/')
        .map_or(value, |(address, _)| address)
        .to_string()
}

/// Substitute an empty string for an absent value.
pub fn coalesce_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
