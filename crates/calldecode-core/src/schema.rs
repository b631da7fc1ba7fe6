//! The minimal schema tree the value transformer walks.
//!
//! A `TypeNode` is the reduced form of one verbose ABI input descriptor:
//! everything except name, declared type string, and (for tuples) the
//! component descriptors is stripped by the schema normalizer in
//! `calldecode-evm`.

use serde::{Deserialize, Serialize};

/// One entry of the minimal schema tree.
///
/// Invariant: a tuple-typed node always carries a non-empty `components`
/// sequence matching the arity of the values it will be zipped against;
/// a non-tuple node never carries components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    /// Parameter name from the ABI. Empty when the ABI omits it.
    pub name: String,
    /// Declared Solidity type string, array depth included
    /// (e.g. `"uint256"`, `"tuple"`, `"bytes32[]"`, `"tuple[][]"`).
    #[serde(rename = "type")]
    pub solidity_type: String,
    /// Component schema for `tuple` / tuple-array nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<TypeNode>,
}

impl TypeNode {
    /// A leaf node with no components.
    pub fn new(name: impl Into<String>, solidity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            solidity_type: solidity_type.into(),
            components: Vec::new(),
        }
    }

    /// A tuple (or tuple-array) node with component schema.
    pub fn with_components(
        name: impl Into<String>,
        solidity_type: impl Into<String>,
        components: Vec<TypeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            solidity_type: solidity_type.into(),
            components,
        }
    }

    /// True for `tuple` and every tuple-array variant (`tuple[]`, `tuple[][]`, ...).
    pub fn is_tuple(&self) -> bool {
        self.solidity_type.contains("tuple")
    }

    /// True when the declared type carries at least one trailing `[]`.
    pub fn is_array(&self) -> bool {
        self.solidity_type.ends_with("[]")
    }

    /// Returns a copy of this node with exactly one trailing `[]` removed.
    ///
    /// Always clones: the caller's schema may be reused across decode
    /// attempts by a long-lived decoder, so array stripping must never
    /// mutate it in place. The clone keeps the same name and components —
    /// the element schema of a tuple array is the tuple itself, one array
    /// level down.
    pub fn strip_array_level(&self) -> TypeNode {
        let mut elem = self.clone();
        if let Some(stripped) = self.solidity_type.strip_suffix("[]") {
            elem.solidity_type = stripped.to_string();
        }
        elem
    }
}
