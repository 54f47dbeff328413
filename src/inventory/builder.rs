// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Builder
//!
//! Folds a device sequence through [`map_device`] into an
//! [`InventoryCollection`] keyed by hostname.
//!
//! # Properties
//!
//! - **Deterministic**: the same device sequence always builds the same
//!   collection, in the same order.
//! - **Last write wins**: a later device with an already-seen hostname
//!   replaces the earlier entry in place.
//! - **Silent skips**: devices without a primary IP are counted, not errors.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use tracing::debug;

use super::mapper::map_device;
use crate::domain::{DeviceRecord, HostEntry};

/// Hostname → host entry mapping that iterates in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryCollection {
    hosts: Vec<HostEntry>,
    index: HashMap<String, usize>,
}

impl InventoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a host, replacing any entry with the same hostname.
    ///
    /// Returns the replaced entry, if any.
    pub fn insert(&mut self, host: HostEntry) -> Option<HostEntry> {
        match self.index.get(&host.hostname) {
            Some(&position) => Some(std::mem::replace(&mut self.hosts[position], host)),
            None => {
                self.index.insert(host.hostname.clone(), self.hosts.len());
                self.hosts.push(host);
                None
            }
        }
    }

    pub fn get(&self, hostname: &str) -> Option<&HostEntry> {
        self.index.get(hostname).map(|&position| &self.hosts[position])
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.index.contains_key(hostname)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(|host| host.hostname.as_str())
    }
}

/// Serialized as a map `{hostname: entry}` in iteration order
impl Serialize for InventoryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hosts.len()))?;
        for host in &self.hosts {
            map.serialize_entry(&host.hostname, host)?;
        }
        map.end()
    }
}

/// Counters gathered while building an inventory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Devices read from the source
    pub devices_seen: usize,
    /// Devices excluded for lacking a primary IP
    pub skipped: usize,
    /// Entries replaced by a later device with the same hostname
    pub overwritten: usize,
}

/// Build an inventory from a device sequence
pub fn build_inventory<I>(devices: I) -> InventoryCollection
where
    I: IntoIterator<Item = DeviceRecord>,
{
    build_inventory_with_stats(devices).0
}

/// Build an inventory and report what was seen and skipped
pub fn build_inventory_with_stats<I>(devices: I) -> (InventoryCollection, BuildStats)
where
    I: IntoIterator<Item = DeviceRecord>,
{
    devices.into_iter().fold(
        (InventoryCollection::new(), BuildStats::default()),
        |(mut collection, mut stats), device| {
            stats.devices_seen += 1;
            match map_device(&device) {
                Some(host) => {
                    if collection.insert(host).is_some() {
                        debug!("Duplicate hostname {}, keeping the later device", device.name);
                        stats.overwritten += 1;
                    }
                }
                None => {
                    debug!("Skipping {}: no primary IP", device.name);
                    stats.skipped += 1;
                }
            }
            (collection, stats)
        },
    )
}
