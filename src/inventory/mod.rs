// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory construction and rendering
//!
//! ```text
//! DeviceRecord* ──map_device──> HostEntry* ──build──> InventoryCollection ──render──> String
//! ```
//!
//! Everything in this module is synchronous and free of I/O; fetching and
//! writing belong to the [`DeviceSource`](crate::source::DeviceSource) and
//! [`OutputSink`](crate::sink::OutputSink) collaborators.

pub mod builder;
pub mod mapper;
pub mod render;

pub use builder::{build_inventory, build_inventory_with_stats, BuildStats, InventoryCollection};
pub use mapper::map_device;
pub use render::{render_context, InventoryRenderer, TemplateRenderer, HOSTS_KEY};
