//! User-facing options and their canonical, fully-resolved form
//!
//! Callers hand the generator a sparse [`UserOptions`] value where every
//! field is optional and the feature toggles accept either a boolean or a
//! settings object. [`normalize`] performs the exhaustive case analysis once
//! and produces an [`Options`] record with no optional defaults left, which
//! is what the rest of the pipeline consumes.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Extensions considered first-class when the user does not provide a list.
pub const DEFAULT_KNOWN_EXTENSIONS: [&str; 6] = [".js", ".jsx", ".mjs", ".ts", ".tsx", ".d.ts"];

/// Sparse, caller-supplied options
///
/// Absence of a toggle is semantically distinct from an explicit `false`:
/// defaults are only applied for absent fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UserOptions {
    /// Mark the generated configuration as the project root one
    pub root: Option<bool>,

    /// File extensions the configuration should treat as first-class.
    /// Replaces the default list entirely when provided.
    pub known_extensions: Option<Vec<String>>,

    /// Vue single-file-component support
    pub vue: Option<VueUserOptions>,

    /// TypeScript support
    pub typescript: Option<TypeScriptUserOptions>,
}

/// `vue: true` or `vue: { version, config }`
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum VueUserOptions {
    Toggle(bool),
    Settings(VueUserSettings),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct VueUserSettings {
    /// Vue major version, `2` or `3`
    pub version: Option<VueVersion>,

    /// Which `eslint-plugin-vue` preset to extend
    pub config: Option<VueConfig>,
}

/// `typescript: true` or `typescript: { vueComponents }`
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TypeScriptUserOptions {
    Toggle(bool),
    Settings(TypeScriptUserSettings),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeScriptUserSettings {
    /// Whether `.vue` single-file components contain TypeScript
    pub vue_components: Option<bool>,
}

/// Vue major version, serialized as the JSON numbers `2` and `3`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VueVersion {
    #[default]
    V2,
    V3,
}

impl TryFrom<u8> for VueVersion {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            2 => Ok(VueVersion::V2),
            3 => Ok(VueVersion::V3),
            other => Err(format!("unsupported Vue version: {other} (expected 2 or 3)")),
        }
    }
}

impl From<VueVersion> for u8 {
    fn from(version: VueVersion) -> u8 {
        match version {
            VueVersion::V2 => 2,
            VueVersion::V3 => 3,
        }
    }
}

impl JsonSchema for VueVersion {
    fn schema_name() -> Cow<'static, str> {
        "VueVersion".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": "integer", "enum": [2, 3] })
    }
}

/// `eslint-plugin-vue` preset flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VueConfig {
    Essential,
    #[default]
    Recommended,
    StronglyRecommended,
}

impl fmt::Display for VueConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VueConfig::Essential => "essential",
            VueConfig::Recommended => "recommended",
            VueConfig::StronglyRecommended => "strongly-recommended",
        };
        f.write_str(name)
    }
}

/// Fully-resolved options, immutable after normalization
///
/// `None` on the feature fields means the feature is disabled; the settings
/// structs carry no remaining optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub root: bool,
    pub known_extensions: Vec<String>,
    pub vue: Option<VueSettings>,
    pub typescript: Option<TypeScriptSettings>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VueSettings {
    pub version: VueVersion,
    pub config: VueConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScriptSettings {
    pub vue_components: bool,
}

/// Resolve sparse user options into a canonical [`Options`] record.
///
/// Total and pure: every input produces a valid record, the same input
/// always produces the same record. `typescript.vueComponents` defaults to
/// whether Vue support ended up enabled, unless the user set it explicitly.
pub fn normalize(user: &UserOptions) -> Options {
    let vue_enabled = matches!(
        user.vue,
        Some(VueUserOptions::Toggle(true)) | Some(VueUserOptions::Settings(_))
    );

    let vue = match &user.vue {
        None | Some(VueUserOptions::Toggle(false)) => None,
        Some(VueUserOptions::Toggle(true)) => Some(VueSettings::default()),
        Some(VueUserOptions::Settings(settings)) => Some(VueSettings {
            version: settings.version.unwrap_or_default(),
            config: settings.config.unwrap_or_default(),
        }),
    };

    let typescript = match &user.typescript {
        None | Some(TypeScriptUserOptions::Toggle(false)) => None,
        Some(TypeScriptUserOptions::Toggle(true)) => Some(TypeScriptSettings {
            vue_components: vue_enabled,
        }),
        Some(TypeScriptUserOptions::Settings(settings)) => Some(TypeScriptSettings {
            vue_components: settings.vue_components.unwrap_or(vue_enabled),
        }),
    };

    Options {
        root: user.root.unwrap_or(true),
        known_extensions: user.known_extensions.clone().unwrap_or_else(|| {
            DEFAULT_KNOWN_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        }),
        vue,
        typescript,
    }
}
