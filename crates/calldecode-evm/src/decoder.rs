//! EVM calldata decoder — the top-level entry point.
//!
//! Decodes transaction `input` data using an ABI JSON definition.
//!
//! # How it works
//! - First 4 bytes of calldata = keccak256(function_signature)[:4] (the selector)
//! - Remaining bytes = ABI-encoded inputs tuple, byte-decoded by `alloy-core`
//! - The verbose input descriptors are reduced to the minimal schema tree,
//!   the transformer zips schema against decoded values, and the result is
//!   finalized into the configured output format
//!
//! # Error boundary
//! Decoders are built once per ABI and then fed a stream of possibly
//! invalid calldata. Construction problems (bad ABI JSON, unreadable file)
//! are real errors and propagate; per-call decode failures are expected
//! and collapse to `None`.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use alloy_dyn_abi::Specifier;
use alloy_json_abi::{Function, JsonAbi};
use calldecode_core::{DecodeError, DecodeFormat, DecodedCall, SchemaError};
use std::path::Path;

use crate::schema::normalize_inputs;
use crate::transform::transform;

/// Calldata decoder for a single ABI.
///
/// ```no_run
/// use calldecode_core::DecodeFormat;
/// use calldecode_evm::InputDataDecoder;
///
/// # fn main() -> Result<(), calldecode_core::SchemaError> {
/// let decoder = InputDataDecoder::from_abi_file("erc20.json", DecodeFormat::JsObject)?;
/// if let Some(call) = decoder.decode_data("0xa9059cbb…") {
///     println!("{call}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct InputDataDecoder {
    abi: JsonAbi,
    format: DecodeFormat,
}

impl InputDataDecoder {
    /// Create a decoder from an already-parsed ABI.
    pub fn new(abi: JsonAbi, format: DecodeFormat) -> Self {
        Self { abi, format }
    }

    /// Create a decoder from a standard Ethereum ABI JSON string.
    ///
    /// # Errors
    /// Returns `SchemaError` if the JSON is not valid ABI JSON.
    pub fn from_abi_json(abi_json: &str, format: DecodeFormat) -> Result<Self, SchemaError> {
        let abi: JsonAbi = serde_json::from_str(abi_json)?;
        Ok(Self::new(abi, format))
    }

    /// Create a decoder from an ABI JSON file on disk.
    pub fn from_abi_file(path: impl AsRef<Path>, format: DecodeFormat) -> Result<Self, SchemaError> {
        let abi_json = std::fs::read_to_string(path)?;
        Self::from_abi_json(&abi_json, format)
    }

    /// The output format this decoder was configured with.
    pub fn format(&self) -> DecodeFormat {
        self.format
    }

    /// Returns all function names in this ABI.
    pub fn function_names(&self) -> Vec<&str> {
        self.abi.functions().map(|f| f.name.as_str()).collect()
    }

    /// Returns the 4-byte selector for a named function.
    pub fn selector_for(&self, name: &str) -> Option<[u8; 4]> {
        self.abi
            .functions()
            .find(|f| f.name == name)
            .map(|f| f.selector().0)
    }

    /// Decode a calldata hex string into the configured output format.
    ///
    /// Returns `None` on any failure — unknown selector, malformed hex,
    /// byte-decode failure, unknown leaf type. Malformed on-chain calldata
    /// is a frequent, expected input; this method never panics and never
    /// propagates an error.
    pub fn decode_data(&self, input: &str) -> Option<DecodedCall> {
        self.decode_data_as(input, self.format)
    }

    /// Like [`decode_data`](Self::decode_data), with a per-call format
    /// override.
    pub fn decode_data_as(&self, input: &str, format: DecodeFormat) -> Option<DecodedCall> {
        match self.try_decode(input, format) {
            Ok(call) => Some(call),
            Err(err) => {
                tracing::debug!(error = %err, "calldata did not decode against this ABI");
                None
            }
        }
    }

    fn try_decode(&self, input: &str, format: DecodeFormat) -> Result<DecodedCall, DecodeError> {
        let trimmed = input.trim();
        let hex_body = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let calldata = hex::decode(hex_body).map_err(|e| DecodeError::InvalidHex {
            reason: e.to_string(),
        })?;

        if calldata.len() < 4 {
            return Err(DecodeError::CalldataTooShort {
                len: calldata.len(),
            });
        }
        let selector = [calldata[0], calldata[1], calldata[2], calldata[3]];

        let func = self.find_function(selector)?;
        let values = decode_input_tuple(func, &calldata[4..])?;
        let schema = normalize_inputs(&func.inputs);
        let params = transform(&schema, &values)?;

        Ok(DecodedCall::new(func.name.clone(), params, format))
    }

    fn find_function(&self, selector: [u8; 4]) -> Result<&Function, DecodeError> {
        self.abi
            .functions()
            .find(|f| f.selector() == selector)
            .ok_or_else(|| DecodeError::UnknownSelector {
                selector: hex::encode(selector),
            })
    }
}

/// Byte-decode a function's input tuple into raw `DynSolValue`s.
fn decode_input_tuple(func: &Function, data: &[u8]) -> Result<Vec<DynSolValue>, DecodeError> {
    let types: Vec<DynSolType> = func
        .inputs
        .iter()
        .map(|p| {
            p.resolve().map_err(|e| DecodeError::AbiDecodeFailed {
                reason: format!("parameter '{}': {e}", p.name),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if types.is_empty() {
        return Ok(Vec::new());
    }

    let tuple_type = DynSolType::Tuple(types);
    let decoded = tuple_type
        .abi_decode(data)
        .map_err(|e| DecodeError::AbiDecodeFailed {
            reason: format!("function input decode: {e}"),
        })?;

    match decoded {
        DynSolValue::Tuple(values) => Ok(values),
        other => Ok(vec![other]),
    }
}

/// One-shot convenience: build a decoder from ABI JSON and decode a single
/// calldata payload.
///
/// The asymmetry is deliberate: a bad ABI is a configuration error and
/// propagates; a calldata that does not decode yields `Ok(None)`.
pub fn decode_input(
    abi_json: &str,
    data: &str,
    format: DecodeFormat,
) -> Result<Option<DecodedCall>, SchemaError> {
    let decoder = InputDataDecoder::from_abi_json(abi_json, format)?;
    Ok(decoder.decode_data(data))
}
