//! Feature-transformer contract
//!
//! A plugin is a pure function value: it takes the configuration built so
//! far by value, together with the resolved options, and returns the new
//! configuration. Plugins never see shared state, so a chain can be replayed
//! any number of times with the same options and produce the same result.
//!
//! A plugin must behave as a structural no-op when its feature is disabled
//! in the options; "feature requested but implementation missing" is handled
//! by the registry, not the plugin itself.

use crate::config::EslintConfig;
use crate::options::Options;

/// A composable configuration transformation step
pub type PluginFn = fn(EslintConfig, &Options) -> EslintConfig;
