//! Error types for configuration generation

use thiserror::Error;

/// Errors surfaced by the generation pipeline
///
/// Normalization and configuration composition are total over their input
/// domains; the only failure condition is a feature whose plugin
/// implementation cannot be located. That condition is fatal and aborts the
/// pipeline before any further transformer runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LintgenError {
    /// A requested feature has no registered plugin implementation
    #[error("plugin for feature \"{feature}\" is missing from your dependencies")]
    PluginUnavailable { feature: String },
}

impl LintgenError {
    /// Name of the feature involved in the error
    pub fn feature(&self) -> &str {
        match self {
            LintgenError::PluginUnavailable { feature } => feature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_unavailable_message_names_the_feature() {
        let err = LintgenError::PluginUnavailable {
            feature: "vue".to_string(),
        };

        assert_eq!(err.feature(), "vue");
        assert_eq!(
            err.to_string(),
            "plugin for feature \"vue\" is missing from your dependencies"
        );
    }
}
