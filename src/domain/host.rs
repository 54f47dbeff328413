// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Entries
//!
//! A [`HostEntry`] is the per-host unit of the rendered inventory: a hostname,
//! the groups the automation tool uses to pick configuration/role logic, and
//! a fixed set of string metadata.

use serde::{Deserialize, Serialize};

/// Group label for Cisco IOS devices
pub const GROUP_IOS: &str = "ios";

/// Group label for Juniper Junos devices
pub const GROUP_JUNOS: &str = "junos";

/// Normalized host entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub hostname: String,
    pub groups: Vec<String>,
    pub data: HostData,
}

/// Host metadata
///
/// Serialized as a string mapping with keys in declaration order. Absent
/// source values are empty strings, never missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostData {
    pub mgmt_ip: String,
    pub vendor: String,
    pub device_type: String,
    pub site_code: String,
}
