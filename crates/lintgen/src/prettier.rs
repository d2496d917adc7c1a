//! Prettier finalization step
//!
//! Always runs last: the `prettier` extends entries exist to switch off
//! formatting rules enabled by everything before them, so they must sort
//! after the style guide and every feature preset. One compatibility entry is
//! appended per active feature so the generic layer does not fight
//! feature-specific rules.

use lintgen_core::{EslintConfig, Options, RuleEntry};

pub fn apply_prettier(mut config: EslintConfig, options: &Options) -> EslintConfig {
    config.extends.push("prettier".to_string());
    if options.vue.is_some() {
        config.extends.push("prettier/vue".to_string());
    }
    if options.typescript.is_some() {
        config.extends.push("prettier/@typescript-eslint".to_string());
    }

    config.plugins.push("prettier".to_string());
    config
        .rules
        .insert("prettier/prettier".to_string(), RuleEntry::error());

    config
}
