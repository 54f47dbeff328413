// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox to automation inventory
//!
//! Converts NetBox DCIM devices into a host inventory file (Nornir-style
//! `hosts.yaml`) by mapping each device into a host entry and rendering the
//! collection through a template.
//!
//! The transformation ([`domain`], [`inventory`]) is pure. Fetching, rendering
//! and writing happen behind the [`DeviceSource`], [`TemplateRenderer`] and
//! [`OutputSink`] traits, with concrete implementations in [`adapters`].

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod pipeline;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use config::InventoryConfig;
pub use domain::{DeviceRecord, HostData, HostEntry};
pub use errors::{InventoryError, InventoryResult};
pub use inventory::{build_inventory, map_device, InventoryCollection, InventoryRenderer, TemplateRenderer};
pub use pipeline::{InventoryPipeline, InventoryReport};
pub use sink::OutputSink;
pub use source::DeviceSource;
