// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for netbox-inventory
//!
//! Deterministic devices and in-memory collaborators shared by the
//! integration tests. Fakes record what they were given so tests can assert
//! on it without touching the network.

#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use netbox_inventory::errors::{InventoryError, InventoryResult};
use netbox_inventory::{DeviceRecord, DeviceSource, OutputSink};

/// The single-switch device used by the end-to-end examples
pub fn sw1() -> DeviceRecord {
    DeviceRecord::new("sw1")
        .with_primary_ip("10.0.0.1/24")
        .with_site("DC1")
        .with_device_type("X", Some("Acme"))
        .with_tag("ios")
}

/// A mixed set: eligible, ineligible, and a Junos switch at another site
pub fn mixed_devices() -> Vec<DeviceRecord> {
    vec![
        sw1(),
        DeviceRecord::new("sw-noip").with_site("DC1").with_tag("ios"),
        DeviceRecord::new("sw2")
            .with_primary_ip("10.0.1.2/24")
            .with_site("LAB")
            .with_device_type("EX4300", Some("Juniper"))
            .with_tag("junos")
            .with_tag("lab"),
    ]
}

/// Device source returning a fixed list
pub struct StaticSource {
    pub devices: Vec<DeviceRecord>,
}

#[async_trait]
impl DeviceSource for StaticSource {
    async fn fetch_devices(&self, _role: &str) -> InventoryResult<Vec<DeviceRecord>> {
        Ok(self.devices.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Device source that always fails
pub struct FailingSource;

#[async_trait]
impl DeviceSource for FailingSource {
    async fn fetch_devices(&self, _role: &str) -> InventoryResult<Vec<DeviceRecord>> {
        Err(InventoryError::SourceFetch(
            "NetBox API returned 403 Forbidden".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Sink that keeps writes in memory
#[derive(Default)]
pub struct MemorySink {
    pub writes: RefCell<Vec<(PathBuf, String)>>,
}

impl OutputSink for MemorySink {
    fn write(&self, path: &Path, text: &str) -> InventoryResult<()> {
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), text.to_string()));
        Ok(())
    }
}

/// Path of the shipped inventory template directory
pub fn shipped_template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub const SHIPPED_TEMPLATE: &str = "templates/hosts_template.hbs";

/// One line per host: `<hostname> <mgmt_ip> <groups...>`
pub const ONE_LINE_TEMPLATE: &str =
    "{{#each hosts}}{{@key}} {{data.mgmt_ip}}{{#each groups}} {{this}}{{/each}}\n{{/each}}";
