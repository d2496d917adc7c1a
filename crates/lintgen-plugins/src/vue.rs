//! Vue single-file-component support
//!
//! Extends the configuration with the `eslint-plugin-vue` preset matching the
//! requested version and flavor, hands the top-level parser slot to
//! `vue-eslint-parser`, and adds the component-authoring rule bundle.

use lintgen_core::{EslintConfig, Options, RuleEntry, VueVersion};
use serde_json::json;

/// Outer parser for `.vue` files; the previously-selected parser keeps
/// handling embedded `<script>` regions via `parserOptions.parser`.
pub const VUE_PARSER: &str = "vue-eslint-parser";

pub fn apply(mut config: EslintConfig, options: &Options) -> EslintConfig {
    let Some(vue) = &options.vue else {
        return config;
    };

    tracing::debug!(version = ?vue.version, config = %vue.config, "applying vue plugin");

    let preset = match vue.version {
        VueVersion::V2 => format!("plugin:vue/{}", vue.config),
        VueVersion::V3 => format!("plugin:vue/vue3-{}", vue.config),
    };
    // Prepended so the style layers appended later can override framework
    // defaults.
    config.extends.insert(0, preset);

    if let Some(previous) = config.parser.take() {
        config.parser_options.parser = Some(previous);
    }
    config.parser = Some(VUE_PARSER.to_string());

    let rules = [
        (
            "vue/component-name-in-template-casing",
            RuleEntry::error_with([
                json!("PascalCase"),
                json!({ "registeredComponentsOnly": false }),
            ]),
        ),
        (
            "vue/html-self-closing",
            RuleEntry::error_with([json!({ "html": { "void": "always" } })]),
        ),
        ("vue/no-duplicate-attr-inheritance", RuleEntry::error_with([])),
        ("vue/no-empty-component-block", RuleEntry::error_with([])),
        ("vue/no-template-target-blank", RuleEntry::error_with([])),
        ("vue/padding-line-between-blocks", RuleEntry::error_with([])),
        ("vue/v-on-function-call", RuleEntry::error_with([])),
        ("vue/no-boolean-default", RuleEntry::error_with([])),
    ];
    for (id, entry) in rules {
        config.rules.insert(id.to_string(), entry);
    }

    config
}
