//! Error types for the CallDecode pipeline.
//!
//! `SchemaError` is fatal and surfaces at decoder construction time (a bad
//! ABI is a configuration error). `DecodeError` covers per-call failures;
//! those never escape `decode_data` — arbitrary calldata routinely fails to
//! match a given ABI, so the decoder collapses them to the `None` sentinel.

use thiserror::Error;

/// Errors raised while building a decoder from an ABI definition.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid ABI JSON: {0}")]
    InvalidAbiJson(#[from] serde_json::Error),

    #[error("IO error reading ABI: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while decoding a single calldata payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("calldata too short: {len} bytes (need at least 4 for selector)")]
    CalldataTooShort { len: usize },

    #[error("invalid calldata hex: {reason}")]
    InvalidHex { reason: String },

    #[error("no function found for selector 0x{selector}")]
    UnknownSelector { selector: String },

    #[error("ABI decode failed: {reason}")]
    AbiDecodeFailed { reason: String },

    #[error("arity mismatch: schema has {expected} entries, decoded values have {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("unknown Solidity type '{solidity_type}' for value {value} (runtime kind: {kind})")]
    UnknownType {
        solidity_type: String,
        value: String,
        kind: &'static str,
    },

    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("tuple nesting exceeds maximum depth {max}")]
    NestingTooDeep { max: usize },
}
