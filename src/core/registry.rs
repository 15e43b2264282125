use crate::domain::model::TrainRecord;

/// The session's ordered list of trains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    records: Vec<TrainRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Once there is more than one entry the whole list is
    /// stable-sorted by `time_departure`, compared as plain strings.
    pub fn add(&mut self, record: TrainRecord) {
        self.records.push(record);
        if self.records.len() > 1 {
            self.records
                .sort_by(|a, b| a.time_departure.cmp(&b.time_departure));
        }
        tracing::debug!("Registry now holds {} trains", self.records.len());
    }

    /// Trains whose destination equals `destination`, ignoring case.
    pub fn select(&self, destination: &str) -> Vec<TrainRecord> {
        let wanted = destination.to_lowercase();
        self.records
            .iter()
            .filter(|train| train.destination.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn replace(&mut self, records: Vec<TrainRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[TrainRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
