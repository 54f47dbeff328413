// Copyright (c) 2025 - Cowboy AI, Inc.

//! Collaborator implementations
//!
//! Concrete implementations of the [`DeviceSource`](crate::source::DeviceSource),
//! [`TemplateRenderer`](crate::inventory::TemplateRenderer) and
//! [`OutputSink`](crate::sink::OutputSink) seams.

pub mod file;
pub mod templates;

pub use file::FileSink;
pub use templates::HandlebarsRenderer;

#[cfg(feature = "netbox")]
pub mod netbox;

#[cfg(feature = "netbox")]
pub use netbox::{DevicePage, NetBoxConfig, NetBoxDeviceSource};
