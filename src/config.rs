// Copyright (c) 2025 - Cowboy AI, Inc.

//! Run configuration
//!
//! Loaded from environment variables:
//!
//! | Variable                 | Default                        |
//! |--------------------------|--------------------------------|
//! | `NETBOX_URL`             | `http://localhost:8000`        |
//! | `NETBOX_API_TOKEN`       | required                       |
//! | `NETBOX_DEVICE_ROLE`     | `switch`                       |
//! | `NETBOX_PAGE_SIZE`       | `100`                          |
//! | `NETBOX_TIMEOUT_SECS`    | `30`                           |
//! | `INVENTORY_TEMPLATE_DIR` | `.`                            |
//! | `INVENTORY_TEMPLATE`     | `templates/hosts_template.hbs` |
//! | `INVENTORY_OUTPUT`       | `inventory/hosts.yaml`         |

use std::path::PathBuf;
use std::str::FromStr;

#[cfg(feature = "netbox")]
use crate::adapters::NetBoxConfig;
use crate::errors::{InventoryError, InventoryResult};

pub const DEFAULT_ROLE: &str = "switch";
pub const DEFAULT_TEMPLATE: &str = "templates/hosts_template.hbs";
pub const DEFAULT_OUTPUT: &str = "inventory/hosts.yaml";

/// Configuration for one inventory run
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Device role filter sent to the source
    pub role: String,
    /// Base directory templates are resolved against
    pub template_dir: PathBuf,
    /// Template identifier, relative to `template_dir`
    pub template: String,
    /// Output file path
    pub output: PathBuf,
    /// NetBox connection settings
    #[cfg(feature = "netbox")]
    pub netbox: NetBoxConfig,
}

impl InventoryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> InventoryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> InventoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        #[cfg(feature = "netbox")]
        let netbox = {
            let defaults = NetBoxConfig::default();
            NetBoxConfig {
                base_url: or_default("NETBOX_URL", &defaults.base_url)
                    .trim_end_matches('/')
                    .to_string(),
                api_token: lookup("NETBOX_API_TOKEN")
                    .filter(|token| !token.is_empty())
                    .ok_or_else(|| {
                        InventoryError::Configuration("NETBOX_API_TOKEN not set".to_string())
                    })?,
                page_size: parse_or(&lookup, "NETBOX_PAGE_SIZE", defaults.page_size)?,
                timeout_secs: parse_or(&lookup, "NETBOX_TIMEOUT_SECS", defaults.timeout_secs)?,
            }
        };

        Ok(Self {
            role: or_default("NETBOX_DEVICE_ROLE", DEFAULT_ROLE),
            template_dir: PathBuf::from(or_default("INVENTORY_TEMPLATE_DIR", ".")),
            template: or_default("INVENTORY_TEMPLATE", DEFAULT_TEMPLATE),
            output: PathBuf::from(or_default("INVENTORY_OUTPUT", DEFAULT_OUTPUT)),
            #[cfg(feature = "netbox")]
            netbox,
        })
    }
}

#[cfg_attr(not(feature = "netbox"), allow(dead_code))]
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> InventoryResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            InventoryError::Configuration(format!("Invalid {} '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}
