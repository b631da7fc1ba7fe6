//! Output types for decoded function calls.
//!
//! The value transformer produces a flat, type-annotated [`Parameter`]
//! sequence. Depending on the requested [`DecodeFormat`](crate::DecodeFormat)
//! that sequence is either returned as-is (`solidityType`) or collapsed
//! into a nested name-keyed map (`jsObject`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::DecodeFormat;

/// A normalized parameter value.
///
/// Leaves are always strings or booleans — integers become exact decimal
/// strings, addresses become checksummed hex, bytes become `0x`-hex. Tuples
/// nest a parameter list one level down; arrays nest element-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    String(String),
    /// Arrays of scalars, tuples, or further arrays (tuple[][], ...).
    Array(Vec<ParamValue>),
    /// A bare tuple: structurally a parameter list one level down.
    Tuple(Vec<Parameter>),
}

impl ParamValue {
    /// Collapse into the `jsObject` shape: tuples become name-keyed maps,
    /// arrays collapse element-wise, scalars pass through.
    pub fn collapse(&self) -> NestedValue {
        match self {
            ParamValue::Bool(b) => NestedValue::Bool(*b),
            ParamValue::String(s) => NestedValue::String(s.clone()),
            ParamValue::Array(items) => {
                NestedValue::Array(items.iter().map(ParamValue::collapse).collect())
            }
            ParamValue::Tuple(params) => NestedValue::Object(collapse_params(params)),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::String(s) => write!(f, "{s}"),
            ParamValue::Array(items) => {
                let parts: Vec<_> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            ParamValue::Tuple(params) => {
                let parts: Vec<_> = params
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.value))
                    .collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// One decoded parameter in the flat `solidityType` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name from the schema. Empty when the ABI omits it.
    pub name: String,
    /// Declared Solidity type, retained for programmatic introspection.
    #[serde(rename = "type")]
    pub solidity_type: String,
    pub value: ParamValue,
}

/// A value in the nested `jsObject` output. Type annotations are stripped;
/// tuples are insertion-ordered maps keyed by parameter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedValue {
    Bool(bool),
    String(String),
    Array(Vec<NestedValue>),
    Object(IndexMap<String, NestedValue>),
}

impl fmt::Display for NestedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedValue::Bool(b) => write!(f, "{b}"),
            NestedValue::String(s) => write!(f, "{s}"),
            NestedValue::Array(items) => {
                let parts: Vec<_> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            NestedValue::Object(map) => {
                let parts: Vec<_> = map.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// Collapse a flat parameter sequence into the `jsObject` map.
///
/// Unnamed parameters collapse to the empty-string key; multiple unnamed
/// parameters at the same level overwrite in positional order. That loss is
/// an accepted property of the `jsObject` format — callers that need every
/// unnamed parameter use `solidityType`.
pub fn collapse_params(params: &[Parameter]) -> IndexMap<String, NestedValue> {
    let mut map = IndexMap::with_capacity(params.len());
    for p in params {
        map.insert(p.name.clone(), p.value.collapse());
    }
    map
}

/// The decoded parameters in whichever output shape was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedParams {
    /// `solidityType` format: flat, type-annotated, positional.
    Flat(Vec<Parameter>),
    /// `jsObject` format: nested map keyed by parameter name.
    Nested(IndexMap<String, NestedValue>),
}

impl DecodedParams {
    /// Finalize a transformer result into the requested output shape.
    pub fn from_parameters(params: Vec<Parameter>, format: DecodeFormat) -> Self {
        match format {
            DecodeFormat::SolidityType => DecodedParams::Flat(params),
            DecodeFormat::JsObject => DecodedParams::Nested(collapse_params(&params)),
        }
    }

    pub fn as_flat(&self) -> Option<&[Parameter]> {
        match self {
            DecodedParams::Flat(params) => Some(params),
            DecodedParams::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&IndexMap<String, NestedValue>> {
        match self {
            DecodedParams::Flat(_) => None,
            DecodedParams::Nested(map) => Some(map),
        }
    }
}

/// Result of decoding one calldata payload: the resolved method name plus
/// its arguments in the requested shape. Plain and JSON-serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCall {
    /// Function name (e.g. "transfer", "swapExactETHForTokens")
    pub method_name: String,
    pub params: DecodedParams,
}

impl DecodedCall {
    pub fn new(method_name: impl Into<String>, params: Vec<Parameter>, format: DecodeFormat) -> Self {
        Self {
            method_name: method_name.into(),
            params: DecodedParams::from_parameters(params, format),
        }
    }
}

impl fmt::Display for DecodedCall {
    /// One-line call summary, e.g. `transfer(_to=0x5A1C..., _value=1000...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = match &self.params {
            DecodedParams::Flat(params) => params
                .iter()
                .map(|p| format!("{}={}", p.name, p.value))
                .collect(),
            DecodedParams::Nested(map) => {
                map.iter().map(|(k, v)| format!("{k}={v}")).collect()
            }
        };
        write!(f, "{}({})", self.method_name, args.join(", "))
    }
}
