//! lintgen
//!
//! ESLint configuration generator: a small set of user-facing feature
//! toggles in, one fully-composed ESLint configuration object out.
//!
//! The pipeline normalizes sparse [`UserOptions`] into a canonical
//! [`Options`] record, builds a seed configuration, runs the enabled feature
//! plugins in order through the [`PluginRegistry`], and finishes with the
//! prettier conflict-resolution layer:
//!
//! ```
//! use lintgen::{UserOptions, generate_config};
//!
//! let config = generate_config(&UserOptions::default()).unwrap();
//! assert_eq!(config.extends, ["airbnb-base", "prettier"]);
//! ```
//!
//! Generation is synchronous, side-effect free and independent across calls;
//! the only failure condition is a feature whose plugin is not registered
//! ([`LintgenError::PluginUnavailable`]).

pub mod base;
pub mod generator;
pub mod prettier;
pub mod registry;

pub use base::{DEFAULT_PARSER, base_config};
pub use generator::{generate_config, generate_config_with};
pub use lintgen_core::{
    EcmaFeatures, EslintConfig, LintgenError, Options, OverrideBlock, ParserOptions, PluginFn,
    Result, RuleEntry, Severity, TypeScriptSettings, TypeScriptUserOptions,
    TypeScriptUserSettings, UserOptions, VueConfig, VueSettings, VueUserOptions, VueUserSettings,
    VueVersion, normalize,
};
pub use lintgen_plugins::{typescript, vue};
pub use prettier::apply_prettier;
pub use registry::{PluginRegistry, TYPESCRIPT_FEATURE, VUE_FEATURE};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintgen=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
