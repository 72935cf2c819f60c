//! Values supplied to the encoder

use std::collections::BTreeMap;

use abikit_primitives::{Address, U256};

use crate::types::I256;
use crate::AbiError;

/// A value to encode against a [`ParamType`](crate::ParamType).
///
/// Primitive variants are loosely typed the way ABI JSON arguments are:
/// addresses, byte strings and integers may all arrive as strings and are
/// validated against the declared type during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Unsigned integer
    Uint(U256),
    /// Signed integer
    Int(I256),
    /// Address
    Address(Address),
    /// Text: a UTF-8 string, a hex address or byte string, or an integer literal
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Positional sequence, for arrays and tuples
    List(Vec<Value>),
    /// Name-keyed tuple components
    Named(BTreeMap<String, Value>),
}

impl Value {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Uint(_) => "unsigned integer",
            Value::Int(_) => "signed integer",
            Value::Address(_) => "address",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Named(_) => "named tuple",
        }
    }

    /// Convert a JSON value.
    ///
    /// Non-negative integers become [`Value::Uint`], negative ones
    /// [`Value::Int`]. Integers beyond 64 bits must be passed as strings.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, AbiError> {
        use serde_json::Value as Json;

        match json {
            Json::Bool(b) => Ok(Value::Bool(*b)),
            Json::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Value::Uint(U256::from(u)))
                } else if let Some(i) = n.as_i64() {
                    Ok(Value::Int(I256::from_i128(i as i128)))
                } else {
                    Err(AbiError::InvalidValue(format!(
                        "number {} is not an integer that fits in 64 bits",
                        n
                    )))
                }
            }
            Json::String(s) => Ok(Value::Str(s.clone())),
            Json::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Json::Object(map) => map
                .iter()
                .map(|(k, v)| Ok((k.clone(), Value::from_json(v)?)))
                .collect::<Result<BTreeMap<_, _>, AbiError>>()
                .map(Value::Named),
            Json::Null => Err(AbiError::InvalidValue("null".to_string())),
        }
    }

    /// Build a name-keyed tuple value
    pub fn named<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Named(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Uint(U256::from(v))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(I256::from_i128(v as i128))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::Uint(v)
    }
}

impl From<I256> for Value {
    fn from(v: I256) -> Self {
        Value::Int(v)
    }
}

impl From<Address> for Value {
    fn from(a: Address) -> Self {
        Value::Address(a)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
