//! The generation pipeline
//!
//! Raw options are normalized once, a seed configuration is built, the
//! enabled feature plugins run in a fixed order (vue before typescript, so
//! the typescript plugin can see whether the parser slot was already taken
//! over), and the prettier finalization step closes the chain. A missing
//! plugin aborts before any later transformer runs; no partial configuration
//! is returned.

use crate::base::base_config;
use crate::prettier::apply_prettier;
use crate::registry::{PluginRegistry, TYPESCRIPT_FEATURE, VUE_FEATURE};
use lintgen_core::{EslintConfig, Result, UserOptions, normalize};

/// Generate a configuration using the built-in plugin registry.
pub fn generate_config(user: &UserOptions) -> Result<EslintConfig> {
    generate_config_with(&PluginRegistry::default(), user)
}

/// Generate a configuration resolving feature plugins from the given
/// registry.
pub fn generate_config_with(
    registry: &PluginRegistry,
    user: &UserOptions,
) -> Result<EslintConfig> {
    let options = normalize(user);
    tracing::debug!(?options, "normalized user options");

    let mut config = base_config(&options);

    if options.vue.is_some() {
        let plugin = registry.resolve(VUE_FEATURE)?;
        config = plugin(config, &options);
    }

    if options.typescript.is_some() {
        let plugin = registry.resolve(TYPESCRIPT_FEATURE)?;
        config = plugin(config, &options);
    }

    Ok(apply_prettier(config, &options))
}
