// Copyright (c) 2025 - Cowboy AI, Inc.

//! File-system output sink

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{InventoryError, InventoryResult};
use crate::sink::OutputSink;

/// Writes inventories to local files, creating parent directories as needed
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write(&self, path: &Path, text: &str) -> InventoryResult<()> {
        let write_error = |source: std::io::Error| InventoryError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(path, text).map_err(write_error)?;
        debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}
