//! Number generator configuration
//!
//! Serialised as `{"length": 6, "padNumber": true}`. Both fields are optional
//! and fall back to the defaults. Deserialising goes through
//! [`GeneratorConfig::from_value`] so a bad length fails with the same
//! `InvalidArgument` error as direct construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DigitLength;
use crate::error::GeneratorError;

/// Padding is on unless configured otherwise
pub const DEFAULT_PAD_NUMBER: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct GeneratorConfig {
    /// Number of digits to generate
    pub length: DigitLength,
    /// Left-pad the result with zeros to exactly `length` characters
    pub pad_number: bool,
}

impl GeneratorConfig {
    /// Create a config from a native integer length.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidArgument` if the length is outside
    /// `1..=18`.
    pub fn new(length: i64, pad_number: bool) -> Result<Self, GeneratorError> {
        Ok(Self {
            length: DigitLength::new(length)?,
            pad_number,
        })
    }

    pub fn with_length(mut self, length: DigitLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_padding(mut self, pad_number: bool) -> Self {
        self.pad_number = pad_number;
        self
    }

    /// Build a config from an untyped JSON object.
    ///
    /// `length` must be a JSON integer. `padNumber` (or `pad_number`) is
    /// read loosely: booleans as-is, null is false, numbers are true when
    /// non-zero, strings when non-empty and not `"0"`, arrays and objects
    /// when non-empty.
    pub fn from_value(value: &Value) -> Result<Self, GeneratorError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(GeneratorError::InvalidConfig(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };

        let length = match object.get("length") {
            Some(raw) => DigitLength::try_from(raw.clone())?,
            None => DigitLength::default(),
        };
        let pad_number = object
            .get("padNumber")
            .or_else(|| object.get("pad_number"))
            .map(is_truthy)
            .unwrap_or(DEFAULT_PAD_NUMBER);

        Ok(Self { length, pad_number })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DigitLength::default(),
            pad_number: DEFAULT_PAD_NUMBER,
        }
    }
}

impl TryFrom<Value> for GeneratorConfig {
    type Error = GeneratorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LengthError;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length.get(), 6);
        assert!(config.pad_number);
    }

    #[test]
    fn test_new_validates_length() {
        assert!(GeneratorConfig::new(4, false).is_ok());
        assert_eq!(
            GeneratorConfig::new(0, true),
            Err(GeneratorError::InvalidArgument(LengthError::TooSmall(0)))
        );
        assert_eq!(
            GeneratorConfig::new(19, true),
            Err(GeneratorError::InvalidArgument(LengthError::TooLarge(19)))
        );
    }

    #[test]
    fn test_builder_helpers() {
        let config = GeneratorConfig::default()
            .with_length(DigitLength::new(3).unwrap())
            .with_padding(false);
        assert_eq!(config.length.get(), 3);
        assert!(!config.pad_number);
    }

    #[test]
    fn test_from_value_defaults() {
        assert_eq!(
            GeneratorConfig::from_value(&json!({})).unwrap(),
            GeneratorConfig::default()
        );
        assert_eq!(
            GeneratorConfig::from_value(&json!(null)).unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_from_value_reads_both_spellings() {
        let camel = GeneratorConfig::from_value(&json!({"length": 4, "padNumber": false})).unwrap();
        let snake = GeneratorConfig::from_value(&json!({"length": 4, "pad_number": false})).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.length.get(), 4);
        assert!(!camel.pad_number);
    }

    #[test]
    fn test_from_value_rejects_non_integer_length() {
        for raw in [json!("five"), json!("abc"), json!(3.5), json!(null)] {
            let err = GeneratorConfig::from_value(&json!({ "length": raw.clone() })).unwrap_err();
            assert!(
                matches!(
                    err,
                    GeneratorError::InvalidArgument(LengthError::NotAnInteger(_))
                ),
                "length {} gave {:?}",
                raw,
                err
            );
        }
    }

    #[test]
    fn test_from_value_rejects_small_length() {
        assert_eq!(
            GeneratorConfig::from_value(&json!({"length": -1})),
            Err(GeneratorError::InvalidArgument(LengthError::TooSmall(-1)))
        );
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = GeneratorConfig::from_value(&json!([6, true])).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidConfig("expected an object, got [6,true]".to_string())
        );
    }

    #[test]
    fn test_pad_number_is_read_loosely() {
        let cases = [
            (json!(true), true),
            (json!(false), false),
            (json!(null), false),
            (json!(0), false),
            (json!(1), true),
            (json!(""), false),
            (json!("0"), false),
            (json!("no"), true),
            (json!([]), false),
            (json!({"a": 1}), true),
        ];
        for (raw, expected) in cases {
            let config = GeneratorConfig::from_value(&json!({ "padNumber": raw.clone() })).unwrap();
            assert_eq!(config.pad_number, expected, "padNumber {}", raw);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GeneratorConfig::new(4, false).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json, json!({"length": 4, "padNumber": false}));
        let back: GeneratorConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_deserialize_reports_length_error() {
        let err = serde_json::from_str::<GeneratorConfig>(r#"{"length": "five"}"#).unwrap_err();
        assert!(
            err.to_string()
                .contains("Length must be a valid integer, got 'five'"),
            "{}",
            err
        );
    }
}
