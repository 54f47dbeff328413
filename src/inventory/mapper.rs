// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Mapper
//!
//! Pure mapping `DeviceRecord → Option<HostEntry>`.
//!
//! # Rules
//!
//! - **Eligibility**: a device without a primary IP produces no host.
//! - **Groups**: the lower-cased site name (when non-empty) comes first, then
//!   one `ios`/`junos` group per matching tag, in tag order. Other tags are
//!   ignored. Repeated tags are not deduplicated.
//! - **Data**: management address without prefix length, manufacturer name,
//!   model and site code. Absent values become empty strings.

use crate::domain::{
    coalesce_empty, strip_address_suffix, DeviceRecord, HostData, HostEntry, GROUP_IOS,
    GROUP_JUNOS,
};

/// Map a device into a host entry, or `None` if the device is not eligible
pub fn map_device(device: &DeviceRecord) -> Option<HostEntry> {
    let primary_ip = device.primary_ip.as_ref()?;

    let site_name = coalesce_empty(device.site_name()).to_lowercase();

    let mut groups = Vec::with_capacity(1 + device.tags.len());
    if !site_name.is_empty() {
        groups.push(site_name.clone());
    }
    groups.extend(
        device
            .tags
            .iter()
            .filter_map(|tag| platform_group(&tag.name))
            .map(str::to_string),
    );

    let data = HostData {
        mgmt_ip: strip_address_suffix(&primary_ip.address),
        vendor: coalesce_empty(device.manufacturer_name()),
        device_type: coalesce_empty(device.model()),
        site_code: site_name,
    };

    Some(HostEntry {
        hostname: device.name.clone(),
        groups,
        data,
    })
}

/// Platform group for a tag name; only exact matches count
fn platform_group(tag: &str) -> Option<&'static str> {
    match tag {
        GROUP_IOS => Some(GROUP_IOS),
        GROUP_JUNOS => Some(GROUP_JUNOS),
        _ => None,
    }
}
