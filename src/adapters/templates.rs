// Copyright (c) 2025 - Cowboy AI, Inc.

//! Handlebars template renderer
//!
//! Resolves template identifiers as paths under a base directory, the way a
//! file-system template loader does, and renders them with Handlebars.
//!
//! HTML escaping is disabled: the output is YAML, and escaping would turn
//! values such as `AT&T` into `AT&amp;T`. Templates quote scalars with the
//! `yaml` helper instead, which emits the value as JSON. A JSON string is a
//! valid double-quoted YAML scalar, so embedded quotes survive and values
//! such as `no` or `null` stay strings.

use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use crate::errors::{InventoryError, InventoryResult};
use crate::inventory::TemplateRenderer;

handlebars_helper!(yaml: |value: Json| serde_json::to_string(value).unwrap_or_default());

/// File-system backed Handlebars renderer
#[derive(Debug, Clone)]
pub struct HandlebarsRenderer {
    base_path: PathBuf,
}

impl HandlebarsRenderer {
    /// Create a renderer rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn registry() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("yaml", Box::new(yaml));
        handlebars
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: &str, context: &Value) -> InventoryResult<String> {
        let path = self.base_path.join(template);
        if !path.is_file() {
            return Err(InventoryError::Template(format!(
                "Template not found: {}",
                path.display()
            )));
        }

        debug!("Loading template {}", path.display());
        let mut handlebars = Self::registry();
        handlebars.register_template_file(template, &path)?;

        Ok(handlebars.render(template, context)?)
    }
}
