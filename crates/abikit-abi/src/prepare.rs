//! Recursive preparation of a (type, value) pair

use abikit_primitives::U256;

use crate::assemble::{assemble, concat, PreparedParam};
use crate::leaf;
use crate::types::{ParamType, TupleField};
use crate::value::Value;
use crate::AbiError;

/// Encode one value against its type, reporting whether the result must
/// live in the parent's tail.
pub(crate) fn prepare(kind: &ParamType, value: &Value) -> Result<PreparedParam, AbiError> {
    match kind {
        ParamType::Array(inner) => prepare_array(kind, inner, None, value),
        ParamType::FixedArray(inner, len) => prepare_array(kind, inner, Some(*len), value),
        ParamType::Tuple(fields) => prepare_tuple(kind, fields, value),
        ParamType::Address => {
            let addr = leaf::address_value(kind, value)?;
            Ok(PreparedParam::fixed(leaf::encode_address(&addr)))
        }
        ParamType::Bool => {
            let b = leaf::bool_value(kind, value)?;
            Ok(PreparedParam::fixed(leaf::encode_bool(b)))
        }
        ParamType::Uint(bits) => {
            let n = leaf::uint_value(kind, value)?;
            Ok(PreparedParam::fixed(leaf::encode_uint(n, *bits)?))
        }
        ParamType::Int(bits) => {
            let n = leaf::int_value(kind, value)?;
            Ok(PreparedParam::fixed(leaf::encode_int(n, *bits)?))
        }
        ParamType::FixedBytes(size) => {
            let data = leaf::bytes_value(kind, value)?;
            Ok(PreparedParam::fixed(leaf::encode_fixed_bytes(&data, *size)?))
        }
        ParamType::Bytes => {
            let data = leaf::bytes_value(kind, value)?;
            Ok(PreparedParam::dynamic(leaf::encode_dynamic_bytes(&data)))
        }
        ParamType::String => {
            let s = leaf::string_value(kind, value)?;
            Ok(PreparedParam::dynamic(leaf::encode_dynamic_bytes(s.as_bytes())))
        }
    }
}

fn prepare_array(
    kind: &ParamType,
    inner: &ParamType,
    fixed_len: Option<usize>,
    value: &Value,
) -> Result<PreparedParam, AbiError> {
    let Value::List(items) = value else {
        return Err(AbiError::TypeMismatch {
            expected: kind.to_string(),
            found: value.kind(),
        });
    };

    if let Some(expected) = fixed_len {
        if items.len() != expected {
            return Err(AbiError::ArrayLengthMismatch {
                ty: kind.to_string(),
                expected,
                actual: items.len(),
            });
        }
    }

    let children = items
        .iter()
        .map(|item| prepare(inner, item))
        .collect::<Result<Vec<_>, _>>()?;
    let dynamic_child = children.iter().any(|c| c.dynamic);

    match fixed_len {
        None => {
            let mut encoded = leaf::encode_word(U256::from(items.len())).to_vec();
            encoded.extend(assemble(&children));
            Ok(PreparedParam::dynamic(encoded))
        }
        Some(_) if dynamic_child => Ok(PreparedParam::dynamic(assemble(&children))),
        Some(_) => Ok(PreparedParam::fixed(concat(&children))),
    }
}

fn prepare_tuple(
    kind: &ParamType,
    fields: &[TupleField],
    value: &Value,
) -> Result<PreparedParam, AbiError> {
    let children = match value {
        Value::List(items) => {
            if items.len() != fields.len() {
                return Err(AbiError::TupleLengthMismatch {
                    ty: kind.to_string(),
                    expected: fields.len(),
                    actual: items.len(),
                });
            }
            fields
                .iter()
                .zip(items)
                .map(|(field, item)| prepare(&field.kind, item))
                .collect::<Result<Vec<_>, _>>()?
        }
        Value::Named(map) => fields
            .iter()
            .map(|field| {
                let item = map
                    .get(&field.name)
                    .ok_or_else(|| AbiError::MissingTupleField(field.name.clone()))?;
                prepare(&field.kind, item)
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(AbiError::TypeMismatch {
                expected: kind.to_string(),
                found: other.kind(),
            })
        }
    };

    if children.iter().any(|c| c.dynamic) {
        Ok(PreparedParam::dynamic(assemble(&children)))
    } else {
        Ok(PreparedParam::fixed(concat(&children)))
    }
}
