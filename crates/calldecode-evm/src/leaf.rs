//! Leaf value normalization: one decoded `DynSolValue` → one presentable
//! scalar (or array of scalars), dispatched on the declared type string.
//!
//! Stateless and referentially transparent: identical inputs always yield
//! identical outputs, and normalizing an already-normalized string or bool
//! a second time is a no-op (the double-hex-encoding guard below depends
//! on that).

use alloy_core::dyn_abi::DynSolValue;
use alloy_primitives::Address;
use calldecode_core::{DecodeError, ParamValue};

/// Normalize one leaf value against its declared Solidity type.
///
/// The type string is matched in priority order: `address`, `string`,
/// `bool`, and `bytes` are all checked before the `int` substring match,
/// which would otherwise shadow them (`uint256` contains `int`; so does
/// nothing else in the families above, but the ordering is load-bearing
/// for `int`/`uint` themselves).
pub fn normalize_leaf(value: &DynSolValue, solidity_type: &str) -> Result<ParamValue, DecodeError> {
    if solidity_type == "address" {
        return checksummed(value, solidity_type);
    }
    if solidity_type.starts_with("address[") {
        return map_elements(value, solidity_type, |v| checksummed(v, "address"));
    }
    if solidity_type == "string" {
        return utf8_string(value, solidity_type);
    }
    if solidity_type.starts_with("string[") {
        return map_elements(value, solidity_type, |v| utf8_string(v, "string"));
    }
    if solidity_type == "bool" {
        return boolean(value, solidity_type);
    }
    if solidity_type.starts_with("bool[") {
        return map_elements(value, solidity_type, |v| boolean(v, "bool"));
    }
    if solidity_type.starts_with("bytes") {
        if solidity_type.contains('[') {
            return map_elements(value, solidity_type, |v| hex_string(v, "bytes"));
        }
        return hex_string(value, solidity_type);
    }
    if solidity_type.contains("int") {
        if solidity_type.contains('[') {
            return map_elements(value, solidity_type, |v| decimal_string(v, "int"));
        }
        return decimal_string(value, solidity_type);
    }

    Err(DecodeError::UnknownType {
        solidity_type: solidity_type.to_string(),
        value: format!("{value:?}"),
        kind: value_kind(value),
    })
}

/// EIP-55 checksum an address string, prepending the `0x` prefix when the
/// input lacks it. The checksum algorithm itself comes from
/// `alloy_primitives::Address`.
pub fn checksum_address(raw: &str) -> Result<String, DecodeError> {
    let prefixed: std::borrow::Cow<'_, str> = if raw.starts_with("0x") {
        raw.into()
    } else {
        format!("0x{raw}").into()
    };
    let address: Address =
        prefixed
            .parse()
            .map_err(|e: alloy_primitives::hex::FromHexError| DecodeError::InvalidAddress {
                address: raw.to_string(),
                reason: e.to_string(),
            })?;
    Ok(address.to_checksum(None))
}

fn checksummed(value: &DynSolValue, expected: &str) -> Result<ParamValue, DecodeError> {
    match value {
        DynSolValue::Address(a) => Ok(ParamValue::String(a.to_checksum(None))),
        // Some decoder versions hand addresses over as plain hex strings.
        DynSolValue::String(s) => Ok(ParamValue::String(checksum_address(s)?)),
        other => Err(mismatch(expected, other)),
    }
}

fn utf8_string(value: &DynSolValue, expected: &str) -> Result<ParamValue, DecodeError> {
    match value {
        DynSolValue::String(s) => Ok(ParamValue::String(s.clone())),
        other => Err(mismatch(expected, other)),
    }
}

fn boolean(value: &DynSolValue, expected: &str) -> Result<ParamValue, DecodeError> {
    match value {
        DynSolValue::Bool(b) => Ok(ParamValue::Bool(*b)),
        other => Err(mismatch(expected, other)),
    }
}

/// Integers become exact decimal strings — never a floating approximation.
fn decimal_string(value: &DynSolValue, expected: &str) -> Result<ParamValue, DecodeError> {
    match value {
        DynSolValue::Uint(u, _) => Ok(ParamValue::String(u.to_string())),
        DynSolValue::Int(i, _) => Ok(ParamValue::String(i.to_string())),
        // Already normalized; pass through unchanged.
        DynSolValue::String(s) => Ok(ParamValue::String(s.clone())),
        other => Err(mismatch(expected, other)),
    }
}

/// Bytes values become `0x`-hex strings. A value that is already a hex
/// string passes through unchanged — re-encoding it would corrupt the
/// payload, which is exactly the double-decode bug class this guards
/// against. Empty bytes become `"0x"`.
fn hex_string(value: &DynSolValue, expected: &str) -> Result<ParamValue, DecodeError> {
    match value {
        DynSolValue::Bytes(b) => Ok(ParamValue::String(format!("0x{}", hex::encode(b)))),
        DynSolValue::FixedBytes(word, size) => {
            let bytes = &word.as_slice()[..(*size).min(32)];
            Ok(ParamValue::String(format!("0x{}", hex::encode(bytes))))
        }
        DynSolValue::String(s) if s.starts_with("0x") => Ok(ParamValue::String(s.clone())),
        DynSolValue::String(s) => Ok(ParamValue::String(format!("0x{}", hex::encode(s.as_bytes())))),
        other => Err(mismatch(expected, other)),
    }
}

fn map_elements<F>(
    value: &DynSolValue,
    expected: &str,
    normalize: F,
) -> Result<ParamValue, DecodeError>
where
    F: Fn(&DynSolValue) -> Result<ParamValue, DecodeError>,
{
    match value {
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            let normalized: Result<Vec<_>, _> = items.iter().map(normalize).collect();
            Ok(ParamValue::Array(normalized?))
        }
        other => Err(mismatch(expected, other)),
    }
}

fn mismatch(expected: &str, got: &DynSolValue) -> DecodeError {
    DecodeError::TypeMismatch {
        expected: expected.to_string(),
        got: value_kind(got).to_string(),
    }
}

/// The runtime kind of a decoded value, for diagnostics.
pub(crate) fn value_kind(value: &DynSolValue) -> &'static str {
    match value {
        DynSolValue::Bool(_) => "bool",
        DynSolValue::Int(..) => "int",
        DynSolValue::Uint(..) => "uint",
        DynSolValue::FixedBytes(..) => "fixed bytes",
        DynSolValue::Address(_) => "address",
        DynSolValue::Function(_) => "function",
        DynSolValue::Bytes(_) => "bytes",
        DynSolValue::String(_) => "string",
        DynSolValue::Array(_) => "array",
        DynSolValue::FixedArray(_) => "fixed array",
        DynSolValue::Tuple(_) => "tuple",
    }
}
