//! An in-memory [`SubjectStore`] with a call log and failure injection.

use std::collections::VecDeque;

use paddock_ui::{ListSubject, StoreError, SubjectStore};

use crate::fixtures::reference_now;

/// One request the screen made to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreCall {
    FetchAll,
    Delete(String),
    MarkRead(String),
    MarkAllRead,
}

#[derive(Debug)]
pub struct InMemoryStore<S> {
    records: Vec<S>,
    calls: Vec<StoreCall>,
    delete_failures: VecDeque<StoreError>,
    offline: bool,
}

impl<S: ListSubject> InMemoryStore<S> {
    pub fn new(records: Vec<S>) -> Self {
        Self {
            records,
            calls: Vec::new(),
            delete_failures: VecDeque::new(),
            offline: false,
        }
    }

    pub fn records(&self) -> &[S] {
        &self.records
    }

    pub fn push(&mut self, record: S) {
        self.records.push(record);
    }

    pub fn calls(&self) -> &[StoreCall] {
        &self.calls
    }

    /// Ids passed to `delete`, successful or not.
    pub fn deleted_ids(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                StoreCall::Delete(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The next `delete` fails with `error`. Queued failures are used in order.
    pub fn fail_next_delete(&mut self, error: StoreError) {
        self.delete_failures.push_back(error);
    }

    /// While offline every request fails with a network error.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Network("offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl<S: ListSubject> SubjectStore<S> for InMemoryStore<S> {
    fn fetch_all(&mut self) -> Result<Vec<S>, StoreError> {
        self.calls.push(StoreCall::FetchAll);
        self.check_online()?;
        Ok(self.records.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.calls.push(StoreCall::Delete(id.to_string()));
        self.check_online()?;
        if let Some(error) = self.delete_failures.pop_front() {
            log::debug!("injected delete failure for {id}: {error}");
            return Err(error);
        }
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn mark_read(&mut self, id: &str) -> Result<(), StoreError> {
        self.calls.push(StoreCall::MarkRead(id.to_string()));
        self.check_online()?;
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.mark_read(reference_now());
        Ok(())
    }

    fn mark_all_read(&mut self) -> Result<(), StoreError> {
        self.calls.push(StoreCall::MarkAllRead);
        self.check_online()?;
        for record in &mut self.records {
            record.mark_read(reference_now());
        }
        Ok(())
    }
}
