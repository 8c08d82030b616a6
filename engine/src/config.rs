//! Converter configuration.
//!
//! Selects which outputs a front end shows. The engine computes the same
//! values either way; the flags only gate `commit` evaluation and which
//! derived panels are filled.

use serde::{Deserialize, Serialize};

use crate::twos::Width;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Evaluate expressions when a decimal/binary/hex field is committed.
    pub expressions: bool,

    /// Show the signed-decimal and bit-length panel.
    pub signed_panel: bool,

    /// Fixed-width two's-complement panels to render; empty disables them.
    pub fixed_width_panels: Vec<Width>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            expressions: true,
            signed_panel: true,
            fixed_width_panels: Width::ALL.to_vec(),
        }
    }
}

impl ConverterConfig {
    /// Create a configuration with every capability enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expression evaluation with the signed/bit-length panel.
    pub fn expression_variant() -> Self {
        ConverterConfig {
            expressions: true,
            signed_panel: true,
            fixed_width_panels: Vec::new(),
        }
    }

    /// Fixed 8/16/32/64-bit panels, no expression support.
    pub fn fixed_width_variant() -> Self {
        ConverterConfig {
            expressions: false,
            signed_panel: false,
            fixed_width_panels: Width::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: ConverterConfig = serde_json::from_str(r#"{"expressions": false}"#).unwrap();
        assert!(!cfg.expressions);
        assert!(cfg.signed_panel);
        assert_eq!(cfg.fixed_width_panels, Width::ALL.to_vec());
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(serde_json::from_str::<ConverterConfig>(r#"{"octal": true}"#).is_err());
    }

    #[test]
    fn variants_differ() {
        assert_ne!(
            ConverterConfig::expression_variant(),
            ConverterConfig::fixed_width_variant()
        );
        assert!(ConverterConfig::expression_variant().fixed_width_panels.is_empty());
        assert!(!ConverterConfig::fixed_width_variant().expressions);
    }
}
