//! TypeScript support
//!
//! Extends the configuration with the `@typescript-eslint` presets, wires the
//! TypeScript parser into whichever slot is appropriate (nested under
//! `parserOptions.parser` when Vue owns the top-level parser, top-level
//! otherwise), and layers the naming-convention rule plus two file-pattern
//! overrides on top.

use lintgen_core::{EslintConfig, Options, OverrideBlock, RuleEntry};
use serde_json::json;

pub const TYPESCRIPT_PARSER: &str = "@typescript-eslint/parser";

pub fn apply(mut config: EslintConfig, options: &Options) -> EslintConfig {
    let Some(typescript) = &options.typescript else {
        return config;
    };

    let vue_enabled = options.vue.is_some();
    tracing::debug!(
        vue_components = typescript.vue_components,
        vue_enabled,
        "applying typescript plugin"
    );

    config
        .extends
        .push("plugin:@typescript-eslint/eslint-recommended".to_string());
    config
        .extends
        .push("plugin:@typescript-eslint/recommended".to_string());

    if vue_enabled {
        // vue-eslint-parser stays in charge of the outer document; the
        // TypeScript parser only handles script regions.
        config.parser_options.parser = Some(TYPESCRIPT_PARSER.to_string());
        if typescript.vue_components {
            config.parser_options.extra_file_extensions = Some(vec![".vue".to_string()]);
        }
    } else {
        config.parser = Some(TYPESCRIPT_PARSER.to_string());
    }

    config.rules.insert(
        "@typescript-eslint/naming-convention".to_string(),
        RuleEntry::error_with([
            json!({
                "selector": "default",
                "format": ["camelCase"],
                "leadingUnderscore": "allow",
                "trailingUnderscore": "allow",
            }),
            json!({
                "selector": "variable",
                "format": ["camelCase", "UPPER_CASE", "PascalCase"],
                "leadingUnderscore": "allow",
                "trailingUnderscore": "allow",
            }),
            json!({ "selector": "typeLike", "format": ["PascalCase"] }),
            json!({
                "selector": "property",
                "format": ["camelCase", "snake_case", "PascalCase", "UPPER_CASE"],
            }),
            json!({ "selector": "function", "format": ["camelCase", "PascalCase"] }),
            json!({ "selector": "objectLiteralProperty", "format": null }),
        ]),
    );
    config
        .rules
        .insert("@typescript-eslint/no-var-requires".to_string(), RuleEntry::off());

    // Return-type inference makes the explicit-boundary rules pure noise in
    // plain script files.
    let mut plain_files = vec!["*.js".to_string(), "*.jsx".to_string()];
    if !typescript.vue_components {
        plain_files.push("*.vue".to_string());
    }
    config.overrides.push(OverrideBlock {
        files: plain_files,
        rules: [
            (
                "@typescript-eslint/explicit-function-return-type".to_string(),
                RuleEntry::off(),
            ),
            (
                "@typescript-eslint/explicit-module-boundary-types".to_string(),
                RuleEntry::off(),
            ),
        ]
        .into(),
    });

    // Base-language rules that misfire on type-only syntax.
    let mut typed_files = vec!["*.ts".to_string(), "*.tsx".to_string()];
    if typescript.vue_components && vue_enabled {
        typed_files.push("*.vue".to_string());
    }
    config.overrides.push(OverrideBlock {
        files: typed_files,
        rules: [
            ("no-unused-vars".to_string(), RuleEntry::off()),
            ("camelcase".to_string(), RuleEntry::off()),
            ("global-require".to_string(), RuleEntry::off()),
            ("no-use-before-define".to_string(), RuleEntry::off()),
            ("no-useless-constructor".to_string(), RuleEntry::off()),
            ("no-loop-func".to_string(), RuleEntry::off()),
            ("no-shadow".to_string(), RuleEntry::off()),
        ]
        .into(),
    });

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vue;
    use lintgen_core::{
        TypeScriptUserOptions, TypeScriptUserSettings, UserOptions, VueUserOptions, normalize,
    };

    fn seed_config() -> EslintConfig {
        EslintConfig {
            root: true,
            parser: Some("@babel/eslint-parser".to_string()),
            extends: vec!["airbnb-base".to_string()],
            ..Default::default()
        }
    }

    fn typescript_options(vue: bool) -> Options {
        normalize(&UserOptions {
            vue: vue.then_some(VueUserOptions::Toggle(true)),
            typescript: Some(TypeScriptUserOptions::Toggle(true)),
            ..Default::default()
        })
    }

    #[test]
    fn is_a_no_op_when_typescript_is_disabled() {
        let options = normalize(&UserOptions {
            vue: Some(VueUserOptions::Toggle(true)),
            ..Default::default()
        });

        let config = seed_config();
        assert_eq!(apply(config.clone(), &options), config);
    }

    #[test]
    fn appends_both_presets_in_order() {
        let config = apply(seed_config(), &typescript_options(false));

        assert_eq!(
            config.extends,
            [
                "airbnb-base",
                "plugin:@typescript-eslint/eslint-recommended",
                "plugin:@typescript-eslint/recommended",
            ]
        );
    }

    #[test]
    fn sets_the_top_level_parser_without_vue() {
        let config = apply(seed_config(), &typescript_options(false));

        assert_eq!(config.parser.as_deref(), Some(TYPESCRIPT_PARSER));
        assert_eq!(config.parser_options.parser, None);
        assert_eq!(config.parser_options.extra_file_extensions, None);
    }

    #[test]
    fn sets_the_nested_parser_when_vue_ran_first() {
        let options = typescript_options(true);
        let config = apply(vue::apply(seed_config(), &options), &options);

        assert_eq!(config.parser.as_deref(), Some(vue::VUE_PARSER));
        assert_eq!(config.parser_options.parser.as_deref(), Some(TYPESCRIPT_PARSER));
        assert_eq!(
            config.parser_options.extra_file_extensions,
            Some(vec![".vue".to_string()])
        );
    }

    #[test]
    fn skips_extra_file_extensions_when_vue_components_are_off() {
        let options = normalize(&UserOptions {
            vue: Some(VueUserOptions::Toggle(true)),
            typescript: Some(TypeScriptUserOptions::Settings(TypeScriptUserSettings {
                vue_components: Some(false),
            })),
            ..Default::default()
        });

        let config = apply(vue::apply(seed_config(), &options), &options);
        assert_eq!(config.parser_options.extra_file_extensions, None);
    }

    #[test]
    fn appends_exactly_two_override_blocks() {
        let existing = OverrideBlock {
            files: vec!["*.spec.js".to_string()],
            rules: [("no-console".to_string(), RuleEntry::off())].into(),
        };
        let mut config = seed_config();
        config.overrides.push(existing.clone());

        let config = apply(config, &typescript_options(false));

        assert_eq!(config.overrides.len(), 3);
        assert_eq!(config.overrides[0], existing);
    }

    #[test]
    fn override_files_follow_vue_components() {
        let with_vue = apply(seed_config(), &typescript_options(true));
        assert_eq!(with_vue.overrides[0].files, ["*.js", "*.jsx"]);
        assert_eq!(with_vue.overrides[1].files, ["*.ts", "*.tsx", "*.vue"]);

        let without_vue = apply(seed_config(), &typescript_options(false));
        assert_eq!(without_vue.overrides[0].files, ["*.js", "*.jsx", "*.vue"]);
        assert_eq!(without_vue.overrides[1].files, ["*.ts", "*.tsx"]);
    }

    #[test]
    fn vue_components_without_vue_never_emits_vue_patterns() {
        let options = normalize(&UserOptions {
            typescript: Some(TypeScriptUserOptions::Settings(TypeScriptUserSettings {
                vue_components: Some(true),
            })),
            ..Default::default()
        });

        let config = apply(seed_config(), &options);

        assert_eq!(config.parser.as_deref(), Some(TYPESCRIPT_PARSER));
        assert_eq!(config.parser_options.extra_file_extensions, None);
        for block in &config.overrides {
            assert!(!block.files.contains(&"*.vue".to_string()));
        }
    }

    #[test]
    fn disables_base_rules_that_misfire_on_types() {
        let config = apply(seed_config(), &typescript_options(false));

        let typed_block = &config.overrides[1];
        for rule in [
            "no-unused-vars",
            "camelcase",
            "global-require",
            "no-use-before-define",
            "no-useless-constructor",
            "no-loop-func",
            "no-shadow",
        ] {
            assert_eq!(typed_block.rules.get(rule), Some(&RuleEntry::off()), "{rule}");
        }
    }
}
