use crate::domain::model::REQUIRED_FIELDS;
use crate::utils::error::{AppError, Result};
use serde_json::Value;
use std::fmt;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    NotAnArray,
    NotAnObject,
    MissingField,
    NotAString,
}

/// A single place where a train file deviates from the expected layout:
/// an array of objects, each holding the four required string fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub index: Option<usize>,
    pub field: Option<String>,
    pub kind: ViolationKind,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match (self.index, &self.field) {
            (Some(i), Some(field)) => format!("[{}].{}", i, field),
            (Some(i), None) => format!("[{}]", i),
            (None, Some(field)) => field.clone(),
            (None, None) => "document".to_string(),
        };

        match self.kind {
            ViolationKind::NotAnArray => write!(f, "{} is not an array", location),
            ViolationKind::NotAnObject => write!(f, "{} is not an object", location),
            ViolationKind::MissingField => write!(f, "{} is a required property", location),
            ViolationKind::NotAString => write!(f, "{} is not of type string", location),
        }
    }
}

/// Checks a parsed train document and returns every violation found.
/// An empty vector means the document is valid. Extra keys are allowed.
pub fn validate_train_array(document: &Value) -> Vec<SchemaViolation> {
    let Value::Array(items) = document else {
        return vec![SchemaViolation {
            index: None,
            field: None,
            kind: ViolationKind::NotAnArray,
        }];
    };

    let mut violations = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Value::Object(obj) = item else {
            violations.push(SchemaViolation {
                index: Some(index),
                field: None,
                kind: ViolationKind::NotAnObject,
            });
            continue;
        };

        for field in REQUIRED_FIELDS {
            let kind = match obj.get(field) {
                None => ViolationKind::MissingField,
                Some(Value::String(_)) => continue,
                Some(_) => ViolationKind::NotAString,
            };
            violations.push(SchemaViolation {
                index: Some(index),
                field: Some(field.to_string()),
                kind,
            });
        }
    }

    violations
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document_has_no_violations() {
        let doc = json!([
            {"departure_point": "Moscow", "number_train": "101", "time_departure": "08:00", "destination": "Kazan"},
            {"departure_point": "Omsk", "number_train": "202", "time_departure": "07:00", "destination": "Tomsk", "platform": 3}
        ]);
        assert!(validate_train_array(&doc).is_empty());
        assert!(validate_train_array(&json!([])).is_empty());
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let doc = json!([
            {"departure_point": "Moscow", "time_departure": "08:00", "destination": "Kazan"},
            {"departure_point": "Omsk", "number_train": 202, "time_departure": "07:00", "destination": "Tomsk"},
            "not a train"
        ]);

        let violations = validate_train_array(&doc);
        assert_eq!(
            violations,
            vec![
                SchemaViolation {
                    index: Some(0),
                    field: Some("number_train".to_string()),
                    kind: ViolationKind::MissingField,
                },
                SchemaViolation {
                    index: Some(1),
                    field: Some("number_train".to_string()),
                    kind: ViolationKind::NotAString,
                },
                SchemaViolation {
                    index: Some(2),
                    field: None,
                    kind: ViolationKind::NotAnObject,
                },
            ]
        );
        assert_eq!(violations[0].to_string(), "[0].number_train is a required property");
    }

    #[test]
    fn test_top_level_must_be_array() {
        let violations = validate_train_array(&json!({"departure_point": "Moscow"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::NotAnArray);
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("registry.autoload", "trains.json").is_ok());
        assert!(validate_path("registry.autoload", "").is_err());
        assert!(validate_path("registry.autoload", "a\0b").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("registry.prompt", ">>> ").is_ok());
        assert!(validate_non_empty_string("registry.prompt", "   ").is_err());
    }
}
