//! # calldecode-core
//!
//! Schema tree, parameter values, output formats, and the error taxonomy
//! shared across all CallDecode crates. The EVM decoder in `calldecode-evm`
//! is built on top of the types defined here.

pub mod error;
pub mod format;
pub mod schema;
pub mod types;

pub use error::{DecodeError, SchemaError};
pub use format::{DecodeFormat, VALID_FORMATS};
pub use schema::TypeNode;
pub use types::{DecodedCall, DecodedParams, NestedValue, ParamValue, Parameter};
