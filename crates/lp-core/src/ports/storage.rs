use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Client-side persisted key/value store (`localStorage`).
///
/// Expiry is not a storage concern: callers schedule removal themselves.
pub trait KeyValueStorePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store a value. Must be idempotent (overwrite if exists).
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove a key; removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    fn contains(&self, key: &str) -> Result<bool, KeyValueStoreError> {
        Ok(self.get(key)?.is_some())
    }
}

#[cfg(test)]
mockall::mock! {
    pub KeyValueStore {}

    impl KeyValueStorePort for KeyValueStore {
        fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
        fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;
        fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn contains_reports_present_key() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq("exitPopupShown"))
            .returning(|_| Ok(Some("true".to_string())));

        assert!(store.contains("exitPopupShown").unwrap());
    }

    #[test]
    fn contains_reports_missing_key() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));

        assert!(!store.contains("exitPopupShown").unwrap());
    }

    #[test]
    fn contains_propagates_store_errors() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(KeyValueStoreError::Unavailable("private mode".into())));

        let err = store.contains("exitPopupShown").unwrap_err();
        assert!(err.to_string().contains("private mode"));
    }
}
