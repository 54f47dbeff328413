// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Domain Models
//!
//! - [`DeviceRecord`] - NetBox device as fetched (read-only input)
//! - [`HostEntry`] / [`HostData`] - normalized per-host inventory unit
//! - [`strip_address_suffix`] / [`coalesce_empty`] - field normalizers

pub mod device;
pub mod host;
pub mod normalize;

pub use device::{DeviceRecord, DeviceTypeRef, IpAddressRef, ManufacturerRef, SiteRef, TagRef};
pub use host::{HostData, HostEntry, GROUP_IOS, GROUP_JUNOS};
pub use normalize::{coalesce_empty, strip_address_suffix};
