//! Leaf encoders for primitive ABI types
//!
//! Every encoder produces a word-aligned fragment: a single 32-byte word for
//! static types, or a length word followed by right-padded data for `bytes`
//! and `string`.

use abikit_primitives::{Address, U256, WORD_SIZE};
use bytes::BufMut;

use crate::types::{ParamType, I256};
use crate::value::Value;
use crate::AbiError;

/// Encode a U256 as one big-endian word
pub fn encode_word(value: U256) -> [u8; WORD_SIZE] {
    let mut buf = [0u8; WORD_SIZE];
    value.to_big_endian(&mut buf);
    buf
}

/// Encode an address, left-padded to a word
pub fn encode_address(addr: &Address) -> [u8; WORD_SIZE] {
    let mut buf = [0u8; WORD_SIZE];
    buf[WORD_SIZE - Address::LEN..].copy_from_slice(addr.as_bytes());
    buf
}

/// Encode a boolean as word `0` or `1`
pub fn encode_bool(b: bool) -> [u8; WORD_SIZE] {
    let mut buf = [0u8; WORD_SIZE];
    buf[WORD_SIZE - 1] = u8::from(b);
    buf
}

/// Encode an unsigned integer declared as `uint<bits>`
pub fn encode_uint(value: U256, bits: usize) -> Result<[u8; WORD_SIZE], AbiError> {
    check_bits(bits, "uint")?;
    if bits < 256 && !(value >> bits).is_zero() {
        return Err(AbiError::IntegerOutOfRange {
            value: value.to_string(),
            ty: format!("uint{}", bits),
        });
    }
    Ok(encode_word(value))
}

/// Encode a signed integer declared as `int<bits>`, in two's complement
pub fn encode_int(value: I256, bits: usize) -> Result<[u8; WORD_SIZE], AbiError> {
    check_bits(bits, "int")?;
    // -2^(bits-1) <= value < 2^(bits-1)
    let limit = U256::one() << (bits - 1);
    let in_range = if value.is_negative() {
        value.abs <= limit
    } else {
        value.abs < limit
    };
    if !in_range {
        return Err(AbiError::IntegerOutOfRange {
            value: value.to_string(),
            ty: format!("int{}", bits),
        });
    }

    if value.is_negative() {
        let (twos, _) = (!value.abs).overflowing_add(U256::one());
        Ok(encode_word(twos))
    } else {
        Ok(encode_word(value.abs))
    }
}

/// Encode `bytes<size>`, right-padded to a word
pub fn encode_fixed_bytes(data: &[u8], size: usize) -> Result<[u8; WORD_SIZE], AbiError> {
    if !(1..=WORD_SIZE).contains(&size) {
        return Err(AbiError::UnsupportedType(format!("bytes{}", size)));
    }
    if data.len() != size {
        return Err(AbiError::InvalidFixedBytesLength {
            expected: size,
            actual: data.len(),
        });
    }
    let mut buf = [0u8; WORD_SIZE];
    buf[..size].copy_from_slice(data);
    Ok(buf)
}

fn check_bits(bits: usize, base: &str) -> Result<(), AbiError> {
    if bits % 8 != 0 || !(8..=256).contains(&bits) {
        return Err(AbiError::UnsupportedType(format!("{}{}", base, bits)));
    }
    Ok(())
}

/// Encode dynamic bytes: length word, then data padded to a multiple of 32
pub fn encode_dynamic_bytes(data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    let mut out = Vec::with_capacity(WORD_SIZE + padded_len);
    out.put_slice(&encode_word(U256::from(data.len())));
    out.put_slice(data);
    out.put_bytes(0, padded_len - data.len());
    out
}

// ---------------------------------------------------------------------------
// Value coercions
// ---------------------------------------------------------------------------

fn mismatch(kind: &ParamType, value: &Value) -> AbiError {
    AbiError::TypeMismatch {
        expected: kind.to_string(),
        found: value.kind(),
    }
}

/// Read an address out of an `Address` or a `0x`-prefixed, checksummable hex string
pub(crate) fn address_value(kind: &ParamType, value: &Value) -> Result<Address, AbiError> {
    match value {
        Value::Address(addr) => Ok(*addr),
        Value::Str(s) => {
            if !s.starts_with("0x") && !s.starts_with("0X") {
                return Err(AbiError::InvalidAddress(format!("missing 0x prefix: {}", s)));
            }
            Ok(Address::from_checksummed(s)?)
        }
        other => Err(mismatch(kind, other)),
    }
}

pub(crate) fn bool_value(kind: &ParamType, value: &Value) -> Result<bool, AbiError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(kind, other)),
    }
}

/// Read an integer out of `Uint`, `Int`, or a decimal / `0x` hex literal
pub(crate) fn int_value(kind: &ParamType, value: &Value) -> Result<I256, AbiError> {
    match value {
        Value::Uint(u) => Ok(I256::new(*u, false)),
        Value::Int(i) => Ok(*i),
        Value::Str(s) => parse_int_literal(s),
        other => Err(mismatch(kind, other)),
    }
}

/// Read an unsigned integer; negative values are out of range
pub(crate) fn uint_value(kind: &ParamType, value: &Value) -> Result<U256, AbiError> {
    let int = int_value(kind, value)?;
    if int.is_negative() {
        return Err(AbiError::IntegerOutOfRange {
            value: int.to_string(),
            ty: kind.to_string(),
        });
    }
    Ok(int.abs)
}

/// Read raw bytes out of `Bytes` or a `0x`-prefixed hex string
pub(crate) fn bytes_value(kind: &ParamType, value: &Value) -> Result<Vec<u8>, AbiError> {
    match value {
        Value::Bytes(b) => Ok(b.clone()),
        Value::Str(s) => {
            let digits = s
                .strip_prefix("0x")
                .or_else(|| s.strip_prefix("0X"))
                .ok_or_else(|| AbiError::InvalidHex(format!("missing 0x prefix: {}", s)))?;
            Ok(hex::decode(digits)?)
        }
        other => Err(mismatch(kind, other)),
    }
}

pub(crate) fn string_value<'a>(kind: &ParamType, value: &'a Value) -> Result<&'a str, AbiError> {
    match value {
        Value::Str(s) => Ok(s.as_str()),
        other => Err(mismatch(kind, other)),
    }
}

fn parse_int_literal(s: &str) -> Result<I256, AbiError> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let abs = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(digits) if !digits.is_empty() => U256::from_str_radix(digits, 16).ok(),
        Some(_) => None,
        None if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) => {
            U256::from_dec_str(body).ok()
        }
        None => None,
    };

    abs.map(|abs| I256::new(abs, negative))
        .ok_or_else(|| AbiError::InvalidInteger(s.to_string()))
}
