//! The value transformer: walks the minimal schema tree and the decoded
//! value tree in lock-step and reassembles the result as a flat parameter
//! list (tuples and arrays nest inside their `ParamValue`).
//!
//! Values are consumed strictly positionally — parameter names come from
//! the schema side only, never from the value tree. Output is freshly
//! allocated; nothing aliases the caller's schema or values.

use alloy_core::dyn_abi::DynSolValue;
use calldecode_core::{DecodeError, ParamValue, Parameter, TypeNode};

use crate::leaf::{normalize_leaf, value_kind};

/// Upper bound on tuple/tuple-array nesting. Nesting depth is
/// attacker-controllable (it comes from calldata being decoded), so
/// exceeding the bound is a decode error rather than a stack overflow.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Zip a schema against its decoded values, producing one [`Parameter`]
/// per schema node.
///
/// # Errors
/// Fails fast on schema/value arity mismatch (a transformer defect or a
/// corrupt decode, not a recoverable input), on shape mismatches, on
/// unknown leaf types, and on nesting deeper than [`MAX_NESTING_DEPTH`].
pub fn transform(
    schema: &[TypeNode],
    values: &[DynSolValue],
) -> Result<Vec<Parameter>, DecodeError> {
    zip_level(schema, values, 0)
}

fn zip_level(
    schema: &[TypeNode],
    values: &[DynSolValue],
    depth: usize,
) -> Result<Vec<Parameter>, DecodeError> {
    if schema.len() != values.len() {
        return Err(DecodeError::ArityMismatch {
            expected: schema.len(),
            got: values.len(),
        });
    }

    schema
        .iter()
        .zip(values.iter())
        .map(|(node, value)| {
            let value = if node.is_tuple() {
                tuple_value(node, value, depth)?
            } else {
                normalize_leaf(value, &node.solidity_type)?
            };
            Ok(Parameter {
                name: node.name.clone(),
                solidity_type: node.solidity_type.clone(),
                value,
            })
        })
        .collect()
}

/// Recurse into a tuple or tuple-array node.
///
/// Tuple arrays strip one `[]` level per call (on a cloned node — the
/// caller's schema is never mutated) and recurse per element; the child
/// born from stripping may itself still be array-typed (`tuple[][]`).
/// A bare tuple zips its components against the tuple's fields exactly as
/// the top level zips schema against values.
fn tuple_value(
    node: &TypeNode,
    value: &DynSolValue,
    depth: usize,
) -> Result<ParamValue, DecodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::NestingTooDeep {
            max: MAX_NESTING_DEPTH,
        });
    }

    if node.is_array() {
        let elem = node.strip_array_level();
        let items = match value {
            DynSolValue::Array(items) | DynSolValue::FixedArray(items) => items,
            other => {
                return Err(DecodeError::TypeMismatch {
                    expected: node.solidity_type.clone(),
                    got: value_kind(other).to_string(),
                })
            }
        };
        let collected: Result<Vec<_>, _> = items
            .iter()
            .map(|item| tuple_value(&elem, item, depth + 1))
            .collect();
        Ok(ParamValue::Array(collected?))
    } else {
        let fields = match value {
            DynSolValue::Tuple(fields) => fields,
            other => {
                return Err(DecodeError::TypeMismatch {
                    expected: node.solidity_type.clone(),
                    got: value_kind(other).to_string(),
                })
            }
        };
        Ok(ParamValue::Tuple(zip_level(&node.components, fields, depth + 1)?))
    }
}
