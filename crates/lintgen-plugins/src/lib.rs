//! Built-in feature plugins
//!
//! Each plugin is a [`PluginFn`](lintgen_core::PluginFn): a pure
//! configuration transformation gated on one feature toggle of the resolved
//! options. Plugins are registered by name in the generator's plugin
//! registry; applying one whose feature is disabled returns the input
//! configuration unchanged.

pub mod typescript;
pub mod vue;
