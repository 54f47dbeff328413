// Copyright (c) 2025 - Cowboy AI, Inc.

//! NetBox DCIM Device Source
//!
//! Fetches devices from NetBox (Network Source of Truth) via its REST API:
//!
//! ```text
//! GET {base_url}/api/dcim/devices/?role={role}&limit={page_size}
//!   → { "count": N, "next": "<url>" | null, "results": [Device, ...] }
//! ```
//!
//! Pages are fetched one after another by following `next` until it is
//! `null`; results are returned in page order.
//!
//! # Example
//!
//! ```rust,no_run
//! use netbox_inventory::adapters::{NetBoxConfig, NetBoxDeviceSource};
//! use netbox_inventory::source::DeviceSource;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NetBoxConfig {
//!         base_url: "http://netbox.example.com".to_string(),
//!         api_token: "your-token-here".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let source = NetBoxDeviceSource::new(config)?;
//!     let switches = source.fetch_devices("switch").await?;
//!     println!("{} switches", switches.len());
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::DeviceRecord;
use crate::errors::{InventoryError, InventoryResult};
use crate::source::DeviceSource;

/// Configuration for NetBox connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetBoxConfig {
    /// NetBox base URL (e.g., "http://netbox.example.com")
    pub base_url: String,

    /// API token for authentication
    pub api_token: String,

    /// Devices requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_page_size() -> usize {
    100
}

fn default_timeout() -> u64 {
    30
}

impl Default for NetBoxConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_token: String::new(),
            page_size: default_page_size(),
            timeout_secs: default_timeout(),
        }
    }
}

/// One page of a NetBox list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DevicePage {
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<DeviceRecord>,
}

/// Device source backed by the NetBox REST API
pub struct NetBoxDeviceSource {
    config: NetBoxConfig,
    client: Client,
}

impl NetBoxDeviceSource {
    /// Create a new NetBox device source
    pub fn new(config: NetBoxConfig) -> InventoryResult<Self> {
        info!("Using NetBox at {}", config.base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    format!("Token {}", config.api_token).parse().map_err(|e| {
                        InventoryError::Configuration(format!("Invalid API token: {}", e))
                    })?,
                );
                headers.insert(
                    reqwest::header::ACCEPT,
                    "application/json".parse().map_err(|e| {
                        InventoryError::Configuration(format!("Invalid header: {}", e))
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| {
                InventoryError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// URL of the first page of devices with `role`
    pub fn devices_url(&self, role: &str) -> String {
        format!(
            "{}/api/dcim/devices/?role={}&limit={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(role),
            self.config.page_size
        )
    }

    async fn fetch_page(&self, url: &str) -> InventoryResult<DevicePage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| InventoryError::SourceFetch(format!("NetBox API error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InventoryError::SourceFetch(format!(
                "NetBox API returned {}: {}",
                status, body
            )));
        }

        response.json::<DevicePage>().await.map_err(|e| {
            InventoryError::SourceFetch(format!("Invalid device list from NetBox: {}", e))
        })
    }
}

#[async_trait]
impl DeviceSource for NetBoxDeviceSource {
    async fn fetch_devices(&self, role: &str) -> InventoryResult<Vec<DeviceRecord>> {
        let mut devices = Vec::new();
        let mut next = Some(self.devices_url(role));

        while let Some(url) = next {
            debug!("Fetching devices page: {}", url);
            let page = self.fetch_page(&url).await?;
            devices.extend(page.results);
            next = page.next;
        }

        info!("Fetched {} devices with role '{}' from NetBox", devices.len(), role);
        Ok(devices)
    }

    fn name(&self) -> &str {
        "netbox-dcim"
    }
}
