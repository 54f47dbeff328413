// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Inventory Building
//!
//! Folding device sequences into an `InventoryCollection`: determinism,
//! last-write-wins on duplicate hostnames, and skip accounting.

use netbox_inventory::inventory::{build_inventory, build_inventory_with_stats, render_context};
use netbox_inventory::{map_device, DeviceRecord};
use proptest::prelude::*;
use std::collections::HashMap;

use super::host_mapping::device;

/// Short, colliding hostnames so duplicates are common
fn colliding_devices() -> impl Strategy<Value = Vec<DeviceRecord>> {
    prop::collection::vec(
        (device(), "sw[0-3]").prop_map(|(mut device, name)| {
            device.name = name;
            device
        }),
        0..20,
    )
}

proptest! {
    /// Property: building is deterministic, down to the rendered context
    #[test]
    fn prop_build_is_deterministic(devices in colliding_devices()) {
        let first = build_inventory(devices.clone());
        let second = build_inventory(devices);

        prop_assert_eq!(render_context(&first).to_string(), render_context(&second).to_string());
        prop_assert_eq!(first, second);
    }

    /// Property: each hostname holds the entry of the last eligible device with that name
    #[test]
    fn prop_last_write_wins(devices in colliding_devices()) {
        let collection = build_inventory(devices.clone());

        let mut expected = HashMap::new();
        for device in &devices {
            if let Some(host) = map_device(device) {
                expected.insert(host.hostname.clone(), host);
            }
        }

        prop_assert_eq!(collection.len(), expected.len());
        for (hostname, host) in &expected {
            prop_assert_eq!(collection.get(hostname), Some(host));
        }
    }

    /// Property: hosts appear in order of first eligible occurrence
    #[test]
    fn prop_first_insertion_order(devices in colliding_devices()) {
        let collection = build_inventory(devices.clone());

        let mut expected: Vec<String> = Vec::new();
        for device in devices.iter().filter(|d| d.primary_ip.is_some()) {
            if !expected.contains(&device.name) {
                expected.push(device.name.clone());
            }
        }

        let actual: Vec<String> = collection.hostnames().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: every device is either skipped or accounted for in the collection
    #[test]
    fn prop_stats_account_for_every_device(devices in colliding_devices()) {
        let total = devices.len();
        let without_ip = devices.iter().filter(|d| d.primary_ip.is_none()).count();

        let (collection, stats) = build_inventory_with_stats(devices);

        prop_assert_eq!(stats.devices_seen, total);
        prop_assert_eq!(stats.skipped, without_ip);
        prop_assert_eq!(collection.len() + stats.overwritten, total - without_ip);
    }
}
