// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Renderer
//!
//! Builds the template context for an [`InventoryCollection`] and hands it to
//! a [`TemplateRenderer`]. All formatting lives in the template; this module
//! only decides what the template sees:
//!
//! ```text
//! { "hosts": { "<hostname>": { "hostname": ..., "groups": [...], "data": {...} }, ... } }
//! ```

use serde_json::{json, Value};

use super::builder::InventoryCollection;
use crate::errors::InventoryResult;

/// Context key the collection is exposed under
pub const HOSTS_KEY: &str = "hosts";

/// Template rendering collaborator
///
/// Resolves `template` (an opaque identifier, typically a path relative to a
/// template directory) and renders it against `context`. Failing to locate,
/// parse or render the template is an [`InventoryError::Template`].
///
/// [`InventoryError::Template`]: crate::errors::InventoryError::Template
pub trait TemplateRenderer {
    fn render(&self, template: &str, context: &Value) -> InventoryResult<String>;
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for &T {
    fn render(&self, template: &str, context: &Value) -> InventoryResult<String> {
        (**self).render(template, context)
    }
}

/// Renders inventories through a [`TemplateRenderer`]
#[derive(Debug, Clone)]
pub struct InventoryRenderer<R> {
    renderer: R,
}

impl<R: TemplateRenderer> InventoryRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render the collection with the given template
    pub fn render(&self, hosts: &InventoryCollection, template: &str) -> InventoryResult<String> {
        self.renderer.render(template, &render_context(hosts))
    }
}

/// Template context for a collection
pub fn render_context(hosts: &InventoryCollection) -> Value {
    json!({ HOSTS_KEY: hosts })
}
