use tracing::warn;

use crate::error::{BrushError, BrushResult};
use crate::extensions::BrushPlugin;
use crate::render::Renderer;

use super::BrushEngine;

impl<R: Renderer> BrushEngine<R> {
    /// Registers a plugin. Plugin ids must be non-empty and unique.
    pub fn register_plugin(&mut self, plugin: Box<dyn BrushPlugin>) -> BrushResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(BrushError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            warn!(plugin_id = %plugin_id, "rejecting duplicate plugin registration");
            return Err(BrushError::DuplicatePlugin(plugin_id));
        }
        self.core.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .core
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.core.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
