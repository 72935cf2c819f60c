//! ABI type definitions

use std::fmt;

use abikit_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::AbiError;

/// One parameter of a canonical ABI JSON schema (`{name, type, components?}`).
///
/// Extra keys such as `internalType` or `indexed` are ignored when
/// deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Parameter name, empty when anonymous
    #[serde(default)]
    pub name: String,
    /// Type string, e.g. `uint256`, `bytes32[]`, `tuple[2]`
    #[serde(rename = "type")]
    pub ty: String,
    /// Tuple components, only meaningful for `tuple` and arrays of it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Create an anonymous descriptor for a non-tuple type
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            ty: ty.into(),
            components: Vec::new(),
        }
    }

    /// Create a named descriptor
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            components: Vec::new(),
        }
    }

    /// Create a tuple (or tuple array, e.g. `tuple[]`) descriptor
    pub fn tuple(ty: impl Into<String>, components: Vec<TypeDescriptor>) -> Self {
        Self {
            name: String::new(),
            ty: ty.into(),
            components,
        }
    }

    /// Set the name, builder style
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parse this descriptor into a [`ParamType`]
    pub fn param_type(&self) -> Result<ParamType, AbiError> {
        parse_with_components(&self.ty, &self.components)
    }
}

/// A named tuple component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleField {
    /// Component name, empty when anonymous
    pub name: String,
    /// Component type
    pub kind: ParamType,
}

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Address
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
    /// Tuple
    Tuple(Vec<TupleField>),
}

impl ParamType {
    /// Check if this type is dynamic (variable length)
    ///
    /// `T[0]` is static whatever `T` is, since it encodes to nothing.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(_, 0) => false,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(fields) => fields.iter().any(|f| f.kind.is_dynamic()),
            _ => false,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => write!(f, "address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Bytes => write!(f, "bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::String => write!(f, "string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, len) => write!(f, "{}[{}]", inner, len),
            ParamType::Tuple(fields) => {
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", field.kind)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Signed 256-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256
    pub fn new(abs: U256, negative: bool) -> Self {
        Self { abs, negative }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            abs: U256::from(value.unsigned_abs()),
            negative: value < 0,
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// Check if strictly negative (`-0` is not)
    pub fn is_negative(&self) -> bool {
        self.negative && !self.abs.is_zero()
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

/// Parse a type string without tuple components (e.g. `"uint256"`, `"address[]"`)
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    parse_with_components(s, &[])
}

/// Parse a type string, resolving `tuple` against `components`.
///
/// Array suffixes are peeled from the right, so `uint8[2][]` is a dynamic
/// array whose elements are `uint8[2]`.
fn parse_with_components(s: &str, components: &[TypeDescriptor]) -> Result<ParamType, AbiError> {
    if let Some(stripped) = s.strip_suffix(']') {
        let open = stripped
            .rfind('[')
            .ok_or_else(|| AbiError::UnsupportedType(s.to_string()))?;
        let inner = Box::new(parse_with_components(&stripped[..open], components)?);
        let size = &stripped[open + 1..];

        if size.is_empty() {
            return Ok(ParamType::Array(inner));
        }
        let len = parse_digits(size).ok_or_else(|| AbiError::UnsupportedType(s.to_string()))?;
        return Ok(ParamType::FixedArray(inner, len));
    }

    match s {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        "tuple" => {
            let fields = components
                .iter()
                .map(|c| {
                    Ok(TupleField {
                        name: c.name.clone(),
                        kind: c.param_type()?,
                    })
                })
                .collect::<Result<Vec<_>, AbiError>>()?;
            return Ok(ParamType::Tuple(fields));
        }
        _ => {}
    }

    // uint<N>
    if let Some(rest) = s.strip_prefix("uint") {
        return int_bits(rest, s).map(ParamType::Uint);
    }

    // int<N>
    if let Some(rest) = s.strip_prefix("int") {
        return int_bits(rest, s).map(ParamType::Int);
    }

    // bytes<N>
    if let Some(rest) = s.strip_prefix("bytes") {
        return match parse_digits(rest) {
            Some(size) if (1..=32).contains(&size) => Ok(ParamType::FixedBytes(size)),
            _ => Err(AbiError::UnsupportedType(s.to_string())),
        };
    }

    Err(AbiError::UnsupportedType(s.to_string()))
}

fn int_bits(rest: &str, full: &str) -> Result<usize, AbiError> {
    if rest.is_empty() {
        return Ok(256);
    }
    match parse_digits(rest) {
        Some(bits) if bits % 8 == 0 && (8..=256).contains(&bits) => Ok(bits),
        _ => Err(AbiError::UnsupportedType(full.to_string())),
    }
}

/// Canonical decimal: no sign, no whitespace, no leading zeros (`0` itself is fine)
fn parse_digits(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}
