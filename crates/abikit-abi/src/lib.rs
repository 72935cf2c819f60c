//! # abikit-abi
//!
//! Solidity ABI parameter encoding.
//!
//! Given parameter descriptors in the canonical ABI JSON shape and a
//! matching list of values, produce the call-data encoding of the
//! parameters:
//!
//! - static values are written inline as 32-byte words
//! - dynamic values (`bytes`, `string`, `T[]` and composites containing
//!   them) are written after the head and referenced by offset
//! - arrays and tuples nest to any depth
//!
//! # Example
//!
//! ```rust
//! use abikit_abi::{encode_parameters_hex, TypeDescriptor, Value};
//!
//! let params = [TypeDescriptor::new("uint256"), TypeDescriptor::new("string")];
//! let values = [Value::from(1u64), Value::from("hi")];
//!
//! let encoded = encode_parameters_hex(&params, &values).unwrap();
//! assert!(encoded.starts_with("0x0000"));
//! ```
//!
//! Tuple values may be positional or keyed by component name:
//!
//! ```rust
//! use abikit_abi::{encode_parameters, TypeDescriptor, Value};
//!
//! let point = TypeDescriptor::tuple(
//!     "tuple",
//!     vec![TypeDescriptor::named("x", "int32"), TypeDescriptor::named("y", "int32")],
//! );
//! let positional = Value::List(vec![Value::from(-1i32), Value::from(2i32)]);
//! let named = Value::named([("y", Value::from(2i32)), ("x", Value::from(-1i32))]);
//!
//! assert_eq!(
//!     encode_parameters(&[point.clone()], &[positional]).unwrap(),
//!     encode_parameters(&[point], &[named]).unwrap(),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod assemble;
mod encode;
mod error;
mod leaf;
mod prepare;
mod types;
mod value;

pub use encode::{encode, encode_parameter, encode_parameters, encode_parameters_hex};
pub use error::AbiError;
pub use types::{parse_type, ParamType, TupleField, TypeDescriptor, I256};
pub use value::Value;

// Re-export primitives for convenience
pub use abikit_primitives::{Address, U256};
