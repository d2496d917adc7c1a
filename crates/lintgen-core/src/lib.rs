//! lintgen core
//!
//! Data model and option normalization for the lintgen ESLint configuration
//! generator. This crate provides the fundamental types shared by the
//! generator pipeline and its feature plugins:
//!
//! - [`UserOptions`] / [`Options`]: sparse user input and its fully-resolved
//!   canonical form
//! - [`EslintConfig`]: the configuration object handed to the ESLint loader
//! - [`PluginFn`]: the feature-transformer contract
//! - [`LintgenError`]: the error taxonomy (a single missing-plugin condition)

pub mod config;
pub mod error;
pub mod options;
pub mod plugin;
pub mod result;

pub use config::{
    EcmaFeatures, EslintConfig, OverrideBlock, ParserOptions, RuleEntry, Severity,
};
pub use error::LintgenError;
pub use options::{
    DEFAULT_KNOWN_EXTENSIONS, Options, TypeScriptSettings, TypeScriptUserOptions,
    TypeScriptUserSettings, UserOptions, VueConfig, VueSettings, VueUserOptions, VueUserSettings,
    VueVersion, normalize,
};
pub use plugin::PluginFn;
pub use result::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
