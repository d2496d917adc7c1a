//! Shared helpers for the functional test suite

use lintgen::EslintConfig;
use serde_json::Value;

/// Serialize a generated configuration the way the ESLint loader would
/// receive it.
pub fn to_json(config: &EslintConfig) -> Value {
    serde_json::to_value(config).expect("configuration serializes to JSON")
}
