//! Output format selection.
//!
//! Two formats are recognized, by the names callers have relied on since
//! the first release: `"jsObject"` and `"solidityType"`. An unrecognized
//! name is not fatal — it logs a warning and falls back to `jsObject`,
//! preserving best-effort behavior for callers on older contracts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format names accepted by [`DecodeFormat::from_name`].
pub const VALID_FORMATS: &[&str] = &["jsObject", "solidityType"];

/// The output shape produced by the decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeFormat {
    /// Nested object keyed by parameter name, type annotations stripped.
    ///
    /// Lossy for ABIs with multiple unnamed parameters at one level (they
    /// all collapse to the `""` key); use [`DecodeFormat::SolidityType`]
    /// when that matters.
    #[default]
    #[serde(rename = "jsObject")]
    JsObject,
    /// Flat parameter list, each entry annotated with its declared
    /// Solidity type.
    #[serde(rename = "solidityType")]
    SolidityType,
}

impl DecodeFormat {
    /// The wire name of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeFormat::JsObject => "jsObject",
            DecodeFormat::SolidityType => "solidityType",
        }
    }

    /// Strict lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "jsObject" => Some(DecodeFormat::JsObject),
            "solidityType" => Some(DecodeFormat::SolidityType),
            _ => None,
        }
    }

    /// Lookup by wire name, warning and defaulting to `jsObject` when the
    /// name is not recognized.
    pub fn from_name_or_default(name: &str) -> Self {
        match Self::from_name(name) {
            Some(format) => format,
            None => {
                tracing::warn!(
                    requested = name,
                    valid = ?VALID_FORMATS,
                    "invalid format, defaulting to 'jsObject'"
                );
                DecodeFormat::JsObject
            }
        }
    }
}

impl fmt::Display for DecodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_names() {
        for name in VALID_FORMATS {
            let format = DecodeFormat::from_name(name).unwrap();
            assert_eq!(format.as_str(), *name);
        }
    }

    #[test]
    fn unknown_name_defaults_to_js_object() {
        assert_eq!(
            DecodeFormat::from_name_or_default("yamlObject"),
            DecodeFormat::JsObject
        );
        assert!(DecodeFormat::from_name("yamlObject").is_none());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&DecodeFormat::SolidityType).unwrap();
        assert_eq!(json, "\"solidityType\"");
    }
}
