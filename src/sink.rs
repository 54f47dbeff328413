// Copyright (c) 2025 - Cowboy AI, Inc.

//! Output Sink
//!
//! Where the rendered inventory goes. Writes fully replace prior content; no
//! atomicity is provided.

use std::path::Path;

use crate::errors::InventoryResult;

/// Destination for rendered inventory text
pub trait OutputSink {
    /// Write `text` to `path`, replacing any prior content
    fn write(&self, path: &Path, text: &str) -> InventoryResult<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn write(&self, path: &Path, text: &str) -> InventoryResult<()> {
        (**self).write(path, text)
    }
}
