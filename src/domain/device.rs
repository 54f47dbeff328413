// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox Device Records
//!
//! Read-only views of the `/api/dcim/devices/` payload. Only the fields the
//! inventory needs are modeled; everything else in the NetBox response is
//! ignored during deserialization.
//!
//! Every nested object NetBox may return as `null` is an `Option`, so absence
//! is checked explicitly at each access instead of failing the fetch.

use serde::{Deserialize, Deserializer, Serialize};

/// A single network device as returned by NetBox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Unnamed devices come back as `null`; they map to an empty name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub primary_ip: Option<IpAddressRef>,
    #[serde(default)]
    pub site: Option<SiteRef>,
    #[serde(default)]
    pub device_type: Option<DeviceTypeRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

/// Nested IP address reference (CIDR format: "192.168.1.10/24")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAddressRef {
    pub address: String,
}

/// Nested site reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Nested device type reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTypeRef {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<ManufacturerRef>,
}

/// Nested manufacturer reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Nested tag reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DeviceRecord {
    /// Create a bare record with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_ip: None,
            site: None,
            device_type: None,
            tags: Vec::new(),
        }
    }

    pub fn with_primary_ip(mut self, address: impl Into<String>) -> Self {
        self.primary_ip = Some(IpAddressRef {
            address: address.into(),
        });
        self
    }

    pub fn with_site(mut self, name: impl Into<String>) -> Self {
        self.site = Some(SiteRef {
            name: Some(name.into()),
        });
        self
    }

    /// Set the device type; `manufacturer` is optional in NetBox
    pub fn with_device_type(mut self, model: impl Into<String>, manufacturer: Option<&str>) -> Self {
        self.device_type = Some(DeviceTypeRef {
            model: Some(model.into()),
            manufacturer: manufacturer.map(|name| ManufacturerRef {
                name: Some(name.to_string()),
            }),
        });
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(TagRef { name: name.into() });
        self
    }

    /// Site name, if both the site and its name are present
    pub fn site_name(&self) -> Option<&str> {
        self.site.as_ref().and_then(|site| site.name.as_deref())
    }

    /// Manufacturer name, if the device type, manufacturer and name are present
    pub fn manufacturer_name(&self) -> Option<&str> {
        self.device_type
            .as_ref()
            .and_then(|device_type| device_type.manufacturer.as_ref())
            .and_then(|manufacturer| manufacturer.name.as_deref())
    }

    /// Device model, if the device type and model are present
    pub fn model(&self) -> Option<&str> {
        self.device_type
            .as_ref()
            .and_then(|device_type| device_type.model.as_deref())
    }
}
