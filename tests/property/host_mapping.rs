// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Host Mapping
//!
//! Eligibility, hostname, group and data rules of `map_device` over
//! arbitrary devices, including every combination of absent fields.

use netbox_inventory::domain::{
    coalesce_empty, strip_address_suffix, DeviceRecord, DeviceTypeRef, IpAddressRef,
    ManufacturerRef, SiteRef, TagRef,
};
use netbox_inventory::map_device;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn address() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<[u8; 4]>(), 0u8..=32).prop_map(|(o, len)| format!(
            "{}.{}.{}.{}/{}",
            o[0], o[1], o[2], o[3], len
        )),
        any::<[u8; 4]>().prop_map(|o| format!("{}.{}.{}.{}", o[0], o[1], o[2], o[3])),
        "[0-9a-f:]{2,20}/[0-9]{1,3}",
    ]
}

fn tag() -> impl Strategy<Value = TagRef> {
    prop_oneof![
        Just("ios".to_string()),
        Just("junos".to_string()),
        Just("IOS".to_string()),
        "[a-z]{1,8}",
    ]
    .prop_map(|name| TagRef { name })
}

fn optional_name() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9 -]{0,12}")
}

pub fn device() -> impl Strategy<Value = DeviceRecord> {
    (
        "[a-z][a-z0-9-]{0,15}",
        prop::option::of(address()),
        prop::option::of(optional_name()),
        prop::option::of((optional_name(), prop::option::of(optional_name()))),
        prop::collection::vec(tag(), 0..6),
    )
        .prop_map(|(name, ip, site, device_type, tags)| DeviceRecord {
            name,
            primary_ip: ip.map(|address| IpAddressRef { address }),
            site: site.map(|name| SiteRef { name }),
            device_type: device_type.map(|(model, manufacturer)| DeviceTypeRef {
                model,
                manufacturer: manufacturer.map(|name| ManufacturerRef { name }),
            }),
            tags,
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: devices without a primary IP never produce a host
    #[test]
    fn prop_no_primary_ip_no_host(mut device in device()) {
        device.primary_ip = None;
        prop_assert!(map_device(&device).is_none());
    }

    /// Property: devices with a primary IP always produce a host named after the device
    #[test]
    fn prop_hostname_is_device_name(device in device(), ip in address()) {
        let device = device.with_primary_ip(ip);
        let host = map_device(&device).expect("eligible device must map");
        prop_assert_eq!(host.hostname, device.name);
    }

    /// Property: groups are the site code (if any) followed by the platform tags in order
    #[test]
    fn prop_groups_follow_site_then_tags(device in device(), ip in address()) {
        let device = device.with_primary_ip(ip);
        let host = map_device(&device).unwrap();

        let site_code = coalesce_empty(device.site_name()).to_lowercase();
        let mut expected: Vec<String> = Vec::new();
        if !site_code.is_empty() {
            expected.push(site_code.clone());
        }
        expected.extend(
            device
                .tags
                .iter()
                .filter(|t| t.name == "ios" || t.name == "junos")
                .map(|t| t.name.clone()),
        );

        prop_assert_eq!(host.groups, expected);
        prop_assert_eq!(host.data.site_code, site_code);
    }

    /// Property: data fields are normalized source values, never missing
    #[test]
    fn prop_data_is_normalized(device in device(), ip in address()) {
        let device = device.with_primary_ip(ip.clone());
        let host = map_device(&device).unwrap();

        prop_assert!(!host.data.mgmt_ip.contains('/'));
        prop_assert_eq!(host.data.mgmt_ip, strip_address_suffix(&ip));
        prop_assert_eq!(host.data.vendor, coalesce_empty(device.manufacturer_name()));
        prop_assert_eq!(host.data.device_type, coalesce_empty(device.model()));
    }

    /// Property: mapping is pure
    #[test]
    fn prop_mapping_is_deterministic(device in device()) {
        prop_assert_eq!(map_device(&device), map_device(&device.clone()));
    }
}
