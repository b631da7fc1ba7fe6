//! # calldecode-evm
//!
//! EVM calldata decoder producing CallDecode's output shapes.
//!
//! ## Implementation notes
//! - Uses `alloy-core` for the byte-level ABI decode (selector match +
//!   input tuple) and `alloy-primitives` for EIP-55 address checksumming
//! - The schema normalizer reduces verbose ABI input descriptors to the
//!   minimal `TypeNode` tree from `calldecode-core`
//! - The value transformer walks schema and decoded values in lock-step;
//!   names come exclusively from the schema side

pub mod decoder;
pub mod leaf;
pub mod schema;
pub mod transform;

pub use decoder::{decode_input, InputDataDecoder};
pub use leaf::{checksum_address, normalize_leaf};
pub use schema::normalize_inputs;
pub use transform::{transform, MAX_NESTING_DEPTH};
