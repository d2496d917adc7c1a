//! The generated configuration object
//!
//! [`EslintConfig`] is the single output artifact of the generator. Its field
//! names, rule identifiers and `extends`/`plugins` entries are a wire
//! contract with the ESLint configuration loader, so the serialized form must
//! match what that loader expects exactly (camelCase keys, severities as
//! `"off" | "warn" | "error"`, rule options as `[severity, ...options]`
//! arrays, empty sections omitted).
//!
//! Map-typed fields use [`IndexMap`]: key order is part of the contract
//! (e.g. the `import/extensions` rule object follows the order of the
//! configured known extensions).

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// ESLint configuration object, built incrementally within one generator
/// invocation and handed to the caller by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintConfig {
    pub root: bool,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, bool>,

    /// Top-level parser identifier. Feature plugins may relocate this into
    /// `parserOptions.parser` when an outer multi-format parser takes over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    pub parser_options: ParserOptions,

    /// Ordered rule-set bundles; later entries override earlier ones.
    pub extends: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub settings: IndexMap<String, Value>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleEntry>,

    /// Ordered file-pattern overrides; later blocks matching the same file
    /// take precedence for the keys they list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideBlock>,
}

/// `parserOptions` section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_features: Option<EcmaFeatures>,

    /// Parser for embedded script regions when an outer multi-format parser
    /// owns the top-level `parser` slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_file_extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EcmaFeatures {
    pub jsx: bool,
}

/// Rule severity, encoded the way ESLint expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

/// A single rule configuration: a bare severity, or a severity followed by
/// rule-specific options. Serialized as `"error"` or `["error", ...]`.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleEntry {
    Severity(Severity),
    WithOptions(Severity, Vec<Value>),
}

impl RuleEntry {
    pub fn off() -> Self {
        RuleEntry::Severity(Severity::Off)
    }

    pub fn warn() -> Self {
        RuleEntry::Severity(Severity::Warn)
    }

    pub fn error() -> Self {
        RuleEntry::Severity(Severity::Error)
    }

    /// `["error", ...options]`; an empty options list still serializes as
    /// the single-element array form.
    pub fn error_with<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        RuleEntry::WithOptions(Severity::Error, options.into_iter().collect())
    }
}

impl Serialize for RuleEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RuleEntry::Severity(severity) => severity.serialize(serializer),
            RuleEntry::WithOptions(severity, options) => {
                let mut seq = serializer.serialize_seq(Some(1 + options.len()))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

/// A `(files, rules)` override applied only to matching files
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverrideBlock {
    pub files: Vec<String>,
    pub rules: IndexMap<String, RuleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Error).unwrap(), json!("error"));
        assert_eq!(serde_json::to_value(Severity::Warn).unwrap(), json!("warn"));
        assert_eq!(serde_json::to_value(Severity::Off).unwrap(), json!("off"));
    }

    #[test]
    fn rule_entry_serializes_as_severity_or_array() {
        assert_eq!(serde_json::to_value(RuleEntry::off()).unwrap(), json!("off"));
        assert_eq!(
            serde_json::to_value(RuleEntry::error_with([])).unwrap(),
            json!(["error"])
        );
        assert_eq!(
            serde_json::to_value(RuleEntry::error_with([json!("always")])).unwrap(),
            json!(["error", "always"])
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        let config = EslintConfig {
            root: true,
            extends: vec!["airbnb-base".to_string()],
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "root": true,
                "parserOptions": {},
                "extends": ["airbnb-base"],
            })
        );
    }

    #[test]
    fn parser_options_use_camel_case_keys() {
        let parser_options = ParserOptions {
            ecma_features: Some(EcmaFeatures { jsx: true }),
            parser: Some("@typescript-eslint/parser".to_string()),
            extra_file_extensions: Some(vec![".vue".to_string()]),
        };

        assert_eq!(
            serde_json::to_value(&parser_options).unwrap(),
            json!({
                "ecmaFeatures": { "jsx": true },
                "parser": "@typescript-eslint/parser",
                "extraFileExtensions": [".vue"],
            })
        );
    }

    #[test]
    fn rule_map_preserves_insertion_order() {
        let mut rules: IndexMap<String, RuleEntry> = IndexMap::new();
        rules.insert("semi".to_string(), RuleEntry::error());
        rules.insert("func-names".to_string(), RuleEntry::off());
        rules.insert("import/prefer-default-export".to_string(), RuleEntry::off());

        let value = serde_json::to_value(&rules).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["semi", "func-names", "import/prefer-default-export"]);
    }
}
