use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not signed in")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(String),
    #[error("request rejected with status {0}")]
    Rejected(u16),
    #[error("network error: {0}")]
    Network(String),
}

/// Backend boundary of a list screen.
///
/// Implementations wrap the authenticated REST calls; the screen only ever
/// sees records and outcomes.
pub trait SubjectStore<S> {
    fn fetch_all(&mut self) -> Result<Vec<S>, StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    fn mark_read(&mut self, _id: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn mark_all_read(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

impl<S, T: SubjectStore<S> + ?Sized> SubjectStore<S> for Box<T> {
    fn fetch_all(&mut self) -> Result<Vec<S>, StoreError> {
        (**self).fetch_all()
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        (**self).delete(id)
    }

    fn mark_read(&mut self, id: &str) -> Result<(), StoreError> {
        (**self).mark_read(id)
    }

    fn mark_all_read(&mut self) -> Result<(), StoreError> {
        (**self).mark_all_read()
    }
}
