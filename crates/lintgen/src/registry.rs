//! Plugin registry
//!
//! Resolves a feature name to its transformer implementation. The registry is
//! an explicit name-to-function map populated at construction; a feature the
//! user enabled but the registry cannot resolve is a hard
//! [`PluginUnavailable`](LintgenError::PluginUnavailable) failure, never a
//! silent skip. Lookups happen per generator invocation, with no
//! process-wide caching.

use lintgen_core::{LintgenError, PluginFn, Result};
use std::collections::HashMap;

/// Feature name for Vue single-file-component support
pub const VUE_FEATURE: &str = "vue";

/// Feature name for TypeScript support
pub const TYPESCRIPT_FEATURE: &str = "typescript";

pub struct PluginRegistry {
    plugins: HashMap<String, PluginFn>,
}

impl PluginRegistry {
    /// A registry with no plugins registered.
    pub fn empty() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register (or replace) the implementation for a feature name.
    pub fn register(&mut self, feature: impl Into<String>, plugin: PluginFn) {
        let feature = feature.into();
        tracing::debug!(%feature, "registering plugin");
        self.plugins.insert(feature, plugin);
    }

    pub fn is_available(&self, feature: &str) -> bool {
        self.plugins.contains_key(feature)
    }

    /// Look up the transformer for a feature, failing loudly if it is not
    /// registered.
    pub fn resolve(&self, feature: &str) -> Result<PluginFn> {
        self.plugins
            .get(feature)
            .copied()
            .ok_or_else(|| LintgenError::PluginUnavailable {
                feature: feature.to_string(),
            })
    }
}

impl Default for PluginRegistry {
    /// The registry with the built-in feature plugins.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(VUE_FEATURE, lintgen_plugins::vue::apply);
        registry.register(TYPESCRIPT_FEATURE, lintgen_plugins::typescript::apply);
        registry
    }
}
