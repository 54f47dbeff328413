// Copyright (c) 2025 - Cowboy AI, Inc.

//! Inventory Pipeline
//!
//! One linear, non-restartable run:
//!
//! ```text
//! DeviceSource ──fetch──> build_inventory ──render──> OutputSink
//! ```
//!
//! No step recovers locally: the first error aborts the run and is returned
//! unchanged. A failure while writing may leave a partial file behind.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::InventoryResult;
use crate::inventory::{build_inventory_with_stats, InventoryRenderer, TemplateRenderer};
use crate::sink::OutputSink;
use crate::source::DeviceSource;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    /// Devices returned by the source
    pub devices_seen: usize,
    /// Hosts written to the inventory
    pub hosts: usize,
    /// Devices excluded for lacking a primary IP
    pub skipped: usize,
    /// Where the inventory was written
    pub output: PathBuf,
}

/// Fetch → build → render → write
pub struct InventoryPipeline<S, R, W> {
    source: S,
    renderer: InventoryRenderer<R>,
    sink: W,
    role: String,
    template: String,
    output: PathBuf,
}

impl<S, R, W> InventoryPipeline<S, R, W>
where
    S: DeviceSource,
    R: TemplateRenderer,
    W: OutputSink,
{
    pub fn new(
        source: S,
        renderer: R,
        sink: W,
        role: impl Into<String>,
        template: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            renderer: InventoryRenderer::new(renderer),
            sink,
            role: role.into(),
            template: template.into(),
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run the pipeline once
    pub async fn run(&self) -> InventoryResult<InventoryReport> {
        info!(
            "Fetching devices with role '{}' from {}",
            self.role,
            self.source.name()
        );
        let devices = self.source.fetch_devices(&self.role).await?;

        let (hosts, stats) = build_inventory_with_stats(devices);
        info!(
            "Built inventory: {} hosts from {} devices ({} without primary IP)",
            hosts.len(),
            stats.devices_seen,
            stats.skipped
        );

        let text = self.renderer.render(&hosts, &self.template)?;
        self.sink.write(&self.output, &text)?;

        Ok(InventoryReport {
            devices_seen: stats.devices_seen,
            hosts: hosts.len(),
            skipped: stats.skipped,
            output: self.output.clone(),
        })
    }
}
