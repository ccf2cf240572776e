//! A store seeded from the JSON the marketplace API serves.

use std::collections::HashSet;

use chrono::Utc;
use paddock_ui::{ListSubject, StoreError, SubjectStore};
use serde::de::DeserializeOwned;

pub struct JsonStore<S> {
    records: Vec<S>,
    refused: HashSet<String>,
}

impl<S: ListSubject + DeserializeOwned> JsonStore<S> {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            records: serde_json::from_str(json)?,
            refused: HashSet::new(),
        })
    }

    /// The backend will reject every delete of `id`.
    pub fn refusing(mut self, id: &str) -> Self {
        self.refused.insert(id.to_string());
        self
    }
}

impl<S: ListSubject> SubjectStore<S> for JsonStore<S> {
    fn fetch_all(&mut self) -> Result<Vec<S>, StoreError> {
        Ok(self.records.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        if self.refused.contains(id) {
            return Err(StoreError::Rejected(500));
        }
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.records.remove(index);
        Ok(())
    }

    fn mark_read(&mut self, id: &str) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.mark_read(Utc::now());
        Ok(())
    }

    fn mark_all_read(&mut self) -> Result<(), StoreError> {
        let now = Utc::now();
        for record in &mut self.records {
            record.mark_read(now);
        }
        Ok(())
    }
}
