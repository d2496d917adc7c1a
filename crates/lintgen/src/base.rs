//! Base configuration builder
//!
//! Seeds the configuration that every generated config starts from: browser
//! environment, the Babel parser with JSX enabled, the airbnb-base style
//! guide, import resolution wired to the known extensions, and the baseline
//! rule set. Feature plugins and the prettier finalization step layer on top
//! of this seed.

use indexmap::IndexMap;
use lintgen_core::{EcmaFeatures, EslintConfig, Options, ParserOptions, RuleEntry};
use serde_json::{Map, Value, json};

/// Default syntax parser, replaced or relocated by feature plugins.
pub const DEFAULT_PARSER: &str = "@babel/eslint-parser";

/// Locations where depending on packages outside `dependencies` is fine.
/// Static by design: test and tooling layouts do not vary with the options.
const DEV_DEPENDENCY_GLOBS: [&str; 24] = [
    "test/**",
    "tests/**",
    "spec/**",
    "**/__tests__/**",
    "**/__mocks__/**",
    "**/cypress/**",
    "test.{js,jsx,ts,tsx}",
    "test-*.{js,jsx,ts,tsx}",
    "**/*{.,_}{test,spec}.{js,jsx,ts,tsx}",
    "**/jest.config.{js,ts}",
    "**/jest.setup.{js,ts}",
    "**/vue.config.{js,ts}",
    "**/webpack.config.{js,ts}",
    "**/webpack.config.*.{js,ts}",
    "**/rollup.config.{js,ts}",
    "**/rollup.config.*.{js,ts}",
    "**/gulpfile.{js,ts}",
    "**/gulpfile.*.{js,ts}",
    "**/.eslintrc.{js,ts}",
    "**/postcss.config.{js,ts}",
    "**/tailwind.config.{js,ts}",
    "**/vite.config.{js,ts}",
    "**/prettier.config.{js,cjs,ts}",
    "**/.prettierrc.{js,cjs,ts}",
];

/// Build the seed configuration from the resolved options alone.
pub fn base_config(options: &Options) -> EslintConfig {
    let extensions = &options.known_extensions;

    let mut env = IndexMap::new();
    env.insert("browser".to_string(), true);
    env.insert("es2021".to_string(), true);

    // Single source of truth for "which extensions are first-class": the
    // resolver settings and the import/extensions rule both derive from it.
    let mut settings = IndexMap::new();
    settings.insert(
        "import/resolver".to_string(),
        json!({
            "node": { "extensions": extensions },
            "webpack": {},
        }),
    );
    settings.insert("import/extensions".to_string(), json!(extensions));

    let mut extension_policy = Map::new();
    for extension in extensions {
        let bare = extension.strip_prefix('.').unwrap_or(extension);
        extension_policy.insert(bare.to_string(), json!("never"));
    }

    let mut rules = IndexMap::new();
    rules.insert(
        "semi".to_string(),
        RuleEntry::error_with([json!("always")]),
    );
    rules.insert("func-names".to_string(), RuleEntry::off());
    rules.insert(
        "no-param-reassign".to_string(),
        RuleEntry::error_with([json!({
            "props": true,
            // vuex state, reduce accumulators, e.returnvalue
            "ignorePropertyModificationsFor": ["state", "acc", "e"],
        })]),
    );
    rules.insert("import/prefer-default-export".to_string(), RuleEntry::off());
    rules.insert(
        "import/extensions".to_string(),
        RuleEntry::error_with([json!("always"), Value::Object(extension_policy)]),
    );
    rules.insert(
        "import/no-extraneous-dependencies".to_string(),
        RuleEntry::error_with([json!({
            "devDependencies": DEV_DEPENDENCY_GLOBS,
            "optionalDependencies": false,
        })]),
    );

    EslintConfig {
        root: options.root,
        env,
        parser: Some(DEFAULT_PARSER.to_string()),
        parser_options: ParserOptions {
            ecma_features: Some(EcmaFeatures { jsx: true }),
            ..Default::default()
        },
        extends: vec!["airbnb-base".to_string()],
        plugins: Vec::new(),
        settings,
        rules,
        overrides: Vec::new(),
    }
}
