use crate::domain::model::{SentenceList, TrainRecord};
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_train_array;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Outcome of reading a train file. The records are returned even when the
/// document failed validation, so callers must check `validation` themselves.
#[derive(Debug)]
pub struct LoadedRegistry {
    pub records: Vec<TrainRecord>,
    pub validation: std::result::Result<(), AppError>,
}

impl LoadedRegistry {
    pub fn is_valid(&self) -> bool {
        self.validation.is_ok()
    }
}

/// Pretty JSON with four-space indentation. Non-ASCII text is written as is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes the whole registry, replacing any existing file.
pub fn save_trains<S: Storage>(storage: &S, file_name: &str, trains: &[TrainRecord]) -> Result<()> {
    let data = to_pretty_json(trains)?;
    storage.write_file(file_name, &data)?;
    tracing::info!("💾 Saved {} trains to {}", trains.len(), file_name);
    Ok(())
}

/// Reads a train file. Missing files and malformed JSON are returned as
/// errors; schema violations are not, they only mark the result invalid.
pub fn load_trains<S: Storage>(storage: &S, file_name: &str) -> Result<LoadedRegistry> {
    let data = storage.read_file(file_name)?;
    let document: Value = serde_json::from_slice(&data)?;

    let violations = validate_train_array(&document);
    let validation = if violations.is_empty() {
        tracing::info!("✅ {} passed validation", file_name);
        Ok(())
    } else {
        tracing::debug!(
            "{} has {} schema violation(s), loading anyway",
            file_name,
            violations.len()
        );
        Err(AppError::SchemaError { violations })
    };

    let records = match document {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object())
            .map(TrainRecord::from_json_lenient)
            .collect(),
        _ => Vec::new(),
    };

    Ok(LoadedRegistry {
        records,
        validation,
    })
}

pub fn save_sentences<S: Storage>(storage: &S, file_name: &str, sentences: &[String]) -> Result<()> {
    let data = to_pretty_json(sentences)?;
    storage.write_file(file_name, &data)
}

pub fn load_sentences<S: Storage>(storage: &S, file_name: &str) -> Result<SentenceList> {
    let data = storage.read_file(file_name)?;
    Ok(serde_json::from_slice(&data)?)
}
