// Copyright (c) 2025 - Cowboy AI, Inc.

//! Device Source
//!
//! The asset-management side of the pipeline. A [`DeviceSource`] yields the
//! devices matching a role filter; the filter is applied upstream and is not
//! interpreted by the inventory code.
//!
//! # Example Implementation
//!
//! ```rust
//! use async_trait::async_trait;
//! use netbox_inventory::domain::DeviceRecord;
//! use netbox_inventory::errors::InventoryResult;
//! use netbox_inventory::source::DeviceSource;
//!
//! struct StaticSource(Vec<DeviceRecord>);
//!
//! #[async_trait]
//! impl DeviceSource for StaticSource {
//!     async fn fetch_devices(&self, _role: &str) -> InventoryResult<Vec<DeviceRecord>> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "static"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::DeviceRecord;
use crate::errors::InventoryResult;

/// Source of device records
///
/// Implementations fetch every matching device, following pagination
/// internally, and return them in source order. Any transport, auth or
/// decoding failure is an [`InventoryError::SourceFetch`]. No retries.
///
/// [`InventoryError::SourceFetch`]: crate::errors::InventoryError::SourceFetch
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Fetch all devices with the given role
    async fn fetch_devices(&self, role: &str) -> InventoryResult<Vec<DeviceRecord>>;

    /// Name of this source, for logging
    fn name(&self) -> &str;
}
