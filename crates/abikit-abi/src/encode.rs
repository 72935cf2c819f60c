//! ABI encoding entry points

use crate::assemble::assemble;
use crate::prepare::prepare;
use crate::types::{ParamType, TypeDescriptor};
use crate::value::Value;
use crate::AbiError;

/// Encode a parameter list described by ABI JSON descriptors.
///
/// Descriptors are parsed up front; any count, type or value problem fails
/// the whole call. An empty list encodes to an empty byte string.
pub fn encode_parameters(params: &[TypeDescriptor], values: &[Value]) -> Result<Vec<u8>, AbiError> {
    check_count(params.len(), values.len())?;

    let types = params
        .iter()
        .map(TypeDescriptor::param_type)
        .collect::<Result<Vec<_>, _>>()?;

    encode(&types, values)
}

/// Same as [`encode_parameters`], rendered as lowercase `0x`-prefixed hex
pub fn encode_parameters_hex(params: &[TypeDescriptor], values: &[Value]) -> Result<String, AbiError> {
    encode_parameters(params, values).map(|bytes| format!("0x{}", hex::encode(bytes)))
}

/// Encode a single parameter, as a one-element parameter list
pub fn encode_parameter(param: &TypeDescriptor, value: &Value) -> Result<Vec<u8>, AbiError> {
    encode_parameters(std::slice::from_ref(param), std::slice::from_ref(value))
}

/// Encode values against already-parsed types
pub fn encode(types: &[ParamType], values: &[Value]) -> Result<Vec<u8>, AbiError> {
    check_count(types.len(), values.len())?;

    let prepared = types
        .iter()
        .zip(values)
        .map(|(kind, value)| prepare(kind, value))
        .collect::<Result<Vec<_>, _>>()?;

    let encoded = assemble(&prepared);
    tracing::trace!(params = types.len(), bytes = encoded.len(), "encoded abi parameters");
    Ok(encoded)
}

fn check_count(expected: usize, actual: usize) -> Result<(), AbiError> {
    if expected != actual {
        return Err(AbiError::ParameterCountMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abikit_primitives::{Address, U256};

    fn params(types: &[&str]) -> Vec<TypeDescriptor> {
        types.iter().map(|t| TypeDescriptor::new(*t)).collect()
    }

    #[test]
    fn test_encode_address() {
        let addr = Address::from_checksummed("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        let encoded = encode_parameters(&params(&["address"]), &[Value::Address(addr)]).unwrap();

        assert_eq!(encoded.len(), 32);
        // Address is left-padded in 32 bytes
        assert_eq!(&encoded[12..32], addr.as_bytes());
    }

    #[test]
    fn test_encode_uint() {
        let encoded = encode_parameters(&params(&["uint256"]), &[Value::Uint(U256::from(100))]).unwrap();
        assert_eq!(encoded.len(), 32);
        assert_eq!(encoded[31], 100);
    }

    #[test]
    fn test_encode_bool() {
        let encoded_true = encode_parameters(&params(&["bool"]), &[true.into()]).unwrap();
        let encoded_false = encode_parameters(&params(&["bool"]), &[false.into()]).unwrap();

        assert_eq!(encoded_true[31], 1);
        assert_eq!(encoded_false[31], 0);
    }

    #[test]
    fn test_encode_bytes32() {
        let data = [0x42u8; 32];
        let encoded = encode_parameters(&params(&["bytes32"]), &[data.to_vec().into()]).unwrap();

        assert_eq!(encoded.len(), 32);
        assert_eq!(&encoded[..], &data[..]);
    }

    #[test]
    fn test_encode_dynamic_bytes() {
        let data = vec![0x01, 0x02, 0x03];
        let encoded = encode_parameters(&params(&["bytes"]), &[data.clone().into()]).unwrap();

        // offset (32) + length (32) + padded data (32)
        assert_eq!(encoded.len(), 96);
        assert_eq!(encoded[31], 32);
        assert_eq!(encoded[63], 3);
        assert_eq!(&encoded[64..67], &data[..]);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_parameters(&[], &[]).unwrap().is_empty());
        assert_eq!(encode_parameters_hex(&[], &[]).unwrap(), "0x");
    }

    #[test]
    fn test_encode_count_mismatch() {
        let err = encode_parameters(&params(&["uint256", "bool"]), &[1u8.into()]).unwrap_err();
        assert_eq!(err, AbiError::ParameterCountMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_count_checked_before_types() {
        // an unknown type with the wrong count still reports the count
        let err = encode_parameters(&params(&["nope"]), &[]).unwrap_err();
        assert!(matches!(err, AbiError::ParameterCountMismatch { .. }));
    }

    #[test]
    fn test_encode_unsupported_type() {
        let err = encode_parameters(&params(&["fixed128x18"]), &[1u8.into()]).unwrap_err();
        assert_eq!(err, AbiError::UnsupportedType("fixed128x18".to_string()));
    }

    #[test]
    fn test_encode_parameter_matches_list_form() {
        let desc = TypeDescriptor::new("string");
        let value = Value::from("hi");
        assert_eq!(
            encode_parameter(&desc, &value).unwrap(),
            encode_parameters(&[desc.clone()], &[value]).unwrap()
        );
    }

    #[test]
    fn test_encode_hex_lowercase() {
        let hex = encode_parameters_hex(&params(&["bytes1"]), &["0xAB".into()]).unwrap();
        assert_eq!(hex, format!("0xab{}", "00".repeat(31)));
    }
}
