// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox Inventory Generator
//!
//! Fetches devices from NetBox and renders them into a host inventory file:
//! - NetBox API → DeviceRecords → HostEntries → Template → hosts.yaml
//!
//! Run with: cargo run --bin netbox-inventory
//!
//! Prerequisites:
//! 1. NetBox API accessible (via NETBOX_URL environment variable)
//! 2. NetBox API token set (via NETBOX_API_TOKEN environment variable)
//! 3. Template present (default: templates/hosts_template.hbs)

use anyhow::{Context, Result};
use netbox_inventory::{
    adapters::{FileSink, HandlebarsRenderer, NetBoxDeviceSource},
    InventoryConfig, InventoryPipeline, InventoryReport,
};
use std::process::ExitCode;
use tracing::{error, info};

async fn run() -> Result<InventoryReport> {
    let config = InventoryConfig::from_env().context("Failed to load configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - NetBox URL: {}", config.netbox.base_url);
    info!("  - Device role: {}", config.role);
    info!(
        "  - Template: {}",
        config.template_dir.join(&config.template).display()
    );
    info!("  - Output: {}", config.output.display());

    let source =
        NetBoxDeviceSource::new(config.netbox.clone()).context("Failed to create NetBox client")?;

    let pipeline = InventoryPipeline::new(
        source,
        HandlebarsRenderer::new(&config.template_dir),
        FileSink,
        config.role,
        config.template,
        config.output,
    );

    pipeline
        .run()
        .await
        .with_context(|| format!("Failed to create {}", pipeline.output().display()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("🚀 Starting NetBox inventory generation");

    match run().await {
        Ok(report) => {
            info!(
                "✅ Hosts file created successfully: {} ({} hosts, {} devices skipped)",
                report.output.display(),
                report.hosts,
                report.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
