//! Schema normalizer: verbose ABI input descriptors → minimal `TypeNode` tree.
//!
//! A standard ABI JSON input carries far more than the value transformer
//! needs (internal types, indexed flags, mutability). This module projects
//! each descriptor down to `{name, type, components?}`, recursing into
//! tuple components and keeping the full type string so array depth
//! (`tuple[]` vs `tuple`) stays on the node. Pure structural projection —
//! values are never inspected, and there is no failure mode: absent names
//! are already empty strings in the parsed ABI.

use alloy_json_abi::Param;
use calldecode_core::TypeNode;

/// Reduce a function's raw input descriptors to the minimal schema tree.
pub fn normalize_inputs(inputs: &[Param]) -> Vec<TypeNode> {
    inputs.iter().map(normalize_param).collect()
}

fn normalize_param(param: &Param) -> TypeNode {
    if param.ty.contains("tuple") {
        TypeNode::with_components(
            param.name.clone(),
            param.ty.clone(),
            normalize_inputs(&param.components),
        )
    } else {
        TypeNode::new(param.name.clone(), param.ty.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(json: &str) -> Param {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn plain_input_keeps_name_and_type_only() {
        let p = param(r#"{"name": "to", "type": "address"}"#);
        let node = normalize_param(&p);
        assert_eq!(node.name, "to");
        assert_eq!(node.solidity_type, "address");
        assert!(node.components.is_empty());
    }

    #[test]
    fn tuple_input_recurses_into_components() {
        let p = param(
            r#"{
                "name": "order",
                "type": "tuple",
                "internalType": "struct Exchange.Order",
                "components": [
                    {"name": "maker", "type": "address", "internalType": "address"},
                    {"name": "amount", "type": "uint256", "internalType": "uint256"}
                ]
            }"#,
        );
        let node = normalize_param(&p);
        assert_eq!(node.solidity_type, "tuple");
        assert_eq!(node.components.len(), 2);
        assert_eq!(node.components[0].name, "maker");
        assert_eq!(node.components[1].solidity_type, "uint256");
    }

    #[test]
    fn tuple_array_keeps_array_depth_on_the_node() {
        let p = param(
            r#"{
                "name": "swaps",
                "type": "tuple[][]",
                "components": [
                    {"name": "pool", "type": "address"}
                ]
            }"#,
        );
        let node = normalize_param(&p);
        assert_eq!(node.solidity_type, "tuple[][]");
        assert_eq!(node.components.len(), 1);
    }

    #[test]
    fn missing_name_becomes_empty_string() {
        let p = param(r#"{"name": "", "type": "bytes32[]"}"#);
        let node = normalize_param(&p);
        assert_eq!(node.name, "");
        assert_eq!(node.solidity_type, "bytes32[]");
    }
}
