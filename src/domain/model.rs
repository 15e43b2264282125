use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys every persisted train object must carry, in output order.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "departure_point",
    "number_train",
    "time_departure",
    "destination",
];

/// One train schedule entry. Every field is free text; `time_departure`
/// is compared as a plain string when the registry is sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub departure_point: String,
    pub number_train: String,
    pub time_departure: String,
    pub destination: String,
    /// Keys found in a loaded file beyond the four required ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrainRecord {
    pub fn new(
        departure_point: impl Into<String>,
        number_train: impl Into<String>,
        time_departure: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            departure_point: departure_point.into(),
            number_train: number_train.into(),
            time_departure: time_departure.into(),
            destination: destination.into(),
            extra: Map::new(),
        }
    }

    /// Builds a record from an already-parsed JSON object without rejecting
    /// anything: absent keys become empty strings and non-string values
    /// keep their JSON text.
    pub fn from_json_lenient(obj: &Map<String, Value>) -> Self {
        let text = |key: &str| match obj.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let extra = obj
            .iter()
            .filter(|(key, _)| !REQUIRED_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            departure_point: text("departure_point"),
            number_train: text("number_train"),
            time_departure: text("time_departure"),
            destination: text("destination"),
            extra,
        }
    }
}

/// Trimmed, non-empty sentence fragments produced by the sentence filter.
pub type SentenceList = Vec<String>;
