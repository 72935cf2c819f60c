//! Encode command

use std::path::{Path, PathBuf};

use abikit_abi::{encode_parameters, TypeDescriptor, Value};
use clap::Args;

use crate::{config::Config, output::Output, CliError};

/// Arguments for `abikit encode`
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Parameter types: a JSON array of type strings or ABI parameter
    /// objects, or a comma-separated list such as `address,uint256`
    #[arg(short, long, required_unless_present = "abi", conflicts_with = "abi")]
    pub types: Option<String>,
    /// JSON file with the parameter list (an array, or an ABI entry with `inputs`)
    #[arg(long)]
    pub abi: Option<PathBuf>,
    /// Values as a JSON array, one entry per parameter
    #[arg(short, long)]
    pub values: String,
    /// Omit the 0x prefix
    #[arg(long)]
    pub no_prefix: bool,
    /// Print one 32-byte word per line
    #[arg(long)]
    pub words: bool,
}

impl EncodeArgs {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let params = match (&self.types, &self.abi) {
            (Some(types), _) => parse_types(types)?,
            (None, Some(path)) => load_abi(path)?,
            (None, None) => return Err(CliError::InvalidInput("either --types or --abi is required".into())),
        };
        let values = parse_values(&self.values)?;
        tracing::debug!("Encoding {} parameters", params.len());

        let encoded = encode_parameters(&params, &values)?;
        let prefix = config.prefix && !self.no_prefix;
        let words = config.words || self.words;

        render(&encoded, prefix, words, json).print();
        Ok(())
    }
}

/// Parse `--types` as JSON or as a comma-separated list
pub fn parse_types(input: &str) -> Result<Vec<TypeDescriptor>, CliError> {
    let input = input.trim();
    if input.starts_with('[') {
        let items: Vec<serde_json::Value> = serde_json::from_str(input)?;
        return items.into_iter().map(descriptor_from_json).collect();
    }

    if input.is_empty() {
        return Ok(Vec::new());
    }
    Ok(input.split(',').map(|t| TypeDescriptor::new(t.trim())).collect())
}

fn descriptor_from_json(item: serde_json::Value) -> Result<TypeDescriptor, CliError> {
    match item {
        serde_json::Value::String(ty) => Ok(TypeDescriptor::new(ty)),
        obj @ serde_json::Value::Object(_) => Ok(serde_json::from_value(obj)?),
        other => Err(CliError::InvalidInput(format!("not a type descriptor: {}", other))),
    }
}

/// Read a parameter list from an ABI JSON file
pub fn load_abi(path: &Path) -> Result<Vec<TypeDescriptor>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;

    let list = match json {
        serde_json::Value::Object(mut entry) => entry
            .remove("inputs")
            .ok_or_else(|| CliError::InvalidInput(format!("{:?} has no `inputs`", path)))?,
        list => list,
    };
    match list {
        serde_json::Value::Array(items) => items.into_iter().map(descriptor_from_json).collect(),
        _ => Err(CliError::InvalidInput(format!("{:?} is not a parameter list", path))),
    }
}

/// Parse `--values` as a JSON array
pub fn parse_values(input: &str) -> Result<Vec<Value>, CliError> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    let serde_json::Value::Array(items) = json else {
        return Err(CliError::InvalidInput("values must be a JSON array".into()));
    };
    Ok(items.iter().map(Value::from_json).collect::<Result<Vec<_>, _>>()?)
}

fn render(encoded: &[u8], prefix: bool, words: bool, json: bool) -> Output {
    let marker = if prefix { "0x" } else { "" };
    let hex = format!("{}{}", marker, hex::encode(encoded));

    let mut out = Output::new(json)
        .field("encoded", &hex)
        .field_u64("length", encoded.len() as u64);

    if words {
        let chunks: Vec<String> = encoded.chunks(32).map(hex::encode).collect();
        out = out.field_value("words", serde_json::json!(chunks));
        for (i, chunk) in chunks.iter().enumerate() {
            out = out.line(format!("{:#06x}: {}", i * 32, chunk));
        }
        if chunks.is_empty() {
            out = out.line(marker);
        }
        out
    } else {
        out.line(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_types_comma_list() {
        let params = parse_types("address, uint256[] ,bytes32").unwrap();
        let types: Vec<_> = params.iter().map(|p| p.ty.as_str()).collect();
        assert_eq!(types, ["address", "uint256[]", "bytes32"]);
        assert!(parse_types("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_types_json() {
        let params = parse_types(
            r#"["bool", {"type": "tuple", "components": [{"name": "a", "type": "string"}]}]"#,
        )
        .unwrap();
        assert_eq!(params[0].ty, "bool");
        assert_eq!(params[1].components[0].name, "a");
        assert!(parse_types("[1]").is_err());
    }

    #[test]
    fn test_parse_values() {
        let values = parse_values(r#"[1, "hi", [true]]"#).unwrap();
        assert_eq!(values.len(), 3);
        assert!(matches!(parse_values("{}"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_values("[null]"), Err(CliError::Abi(_))));
    }

    #[test]
    fn test_load_abi_function_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transfer.json");
        std::fs::write(
            &path,
            r#"{"type": "function", "name": "transfer",
                "inputs": [{"name": "to", "type": "address"}, {"name": "amount", "type": "uint256"}]}"#,
        )
        .unwrap();
        let params = load_abi(&path).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].name, "amount");
    }

    #[test]
    fn test_render_words() {
        let mut encoded = vec![0u8; 64];
        encoded[31] = 1;
        let text = render(&encoded, true, true, false).render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0x0000: "));
        assert!(lines[0].ends_with("01"));
        assert!(lines[1].starts_with("0x0020: "));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], true, false, false).render(), "0x");
        assert_eq!(render(&[], true, true, false).render(), "0x");
    }
}
