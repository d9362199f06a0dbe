//! Registry for facility directory plugins.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{DirectoryId, DirectoryMeta};
use crate::ports::{DirectoryPort, PortError};

/// A facility directory packaged with its metadata.
pub struct DirectoryPlugin {
    /// Static metadata describing the directory.
    pub meta: DirectoryMeta,
    /// Implementation serving the facility records.
    pub port: Arc<dyn DirectoryPort>,
}

/// Registry that resolves directory plugins by identifier.
pub struct DirectoryRegistry {
    plugins: HashMap<DirectoryId, DirectoryPlugin>,
}

impl DirectoryRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<DirectoryPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered directories.
    #[must_use]
    pub fn directories(&self) -> Vec<DirectoryMeta> {
        self.plugins
            .values()
            .map(|plugin| plugin.meta.clone())
            .collect()
    }

    /// Look up a plugin for the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnsupportedDirectory`] when no plugin is registered.
    pub fn plugin(&self, directory: &DirectoryId) -> Result<&DirectoryPlugin, PortError> {
        self.plugins
            .get(directory)
            .ok_or(PortError::UnsupportedDirectory)
    }
}
