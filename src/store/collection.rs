//! Ordered key-value collection generic over the stored entity.
//!
//! # Architecture Note
//! Every entity type gets the same four lifecycle operations with the same
//! message shapes ("No clients found", "Driver not found", ...). By putting
//! the label metadata behind the [`StoreRecord`] trait, the lookup, update,
//! and removal plumbing is written *once* here and reused by all seven
//! collections, the same way a generic actor reuses one message loop for
//! every entity type.
//!
//! # Storage contract
//! Backed by a `BTreeMap<String, T>`, so `values()` is key-ordered and stable
//! for the lifetime of the process. Storage is unbounded; sizing assumes
//! 44 bytes per key and 512 bytes per serialized value envelope, which UUID
//! keys (36 bytes) and these record shapes fit comfortably.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::domain::Timestamp;
use crate::store::error::StoreError;

/// Trait every persisted entity implements so a [`Collection`] can manage it.
pub trait StoreRecord: Clone {
    /// Singular label used in messages, e.g. `"Food item"`.
    const LABEL: &'static str;

    /// Lowercase plural used in empty-collection messages, e.g. `"food items"`.
    const LABEL_PLURAL: &'static str;

    /// Stamp the record as mutated at `now`.
    fn touch(&mut self, now: Timestamp);
}

/// An ordered map from string id to one entity type's records.
#[derive(Debug)]
pub struct Collection<T: StoreRecord> {
    records: BTreeMap<String, T>,
}

impl<T: StoreRecord> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreRecord> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    /// Inserts a newly created record, returning any previous record under
    /// the same key (always `None` for service-generated ids).
    pub fn insert(&mut self, id: impl Into<String>, record: T) -> Option<T> {
        let id = id.into();
        let previous = self.records.insert(id.clone(), record);
        info!(entity = T::LABEL, %id, size = self.records.len(), "Created");
        previous
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.records.remove(id)
    }

    /// All records in stable key order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Every record, or `NotFound("No {plural} found")` when none exist.
    ///
    /// Callers distinguish "none exist" from "some exist" by the error, so an
    /// empty collection is a failure here, not an empty sequence.
    pub fn values_or_not_found(&self) -> Result<Vec<T>, StoreError> {
        if self.records.is_empty() {
            warn!(entity = T::LABEL, "Collection empty");
            return Err(StoreError::NotFound(format!(
                "No {} found",
                T::LABEL_PLURAL
            )));
        }
        Ok(self.records.values().cloned().collect())
    }

    /// Applies `apply` to the record under `id`, stamps `updated_at`, and
    /// returns the id; `NotFound("{label} not found")` when absent.
    pub fn update_with(
        &mut self,
        id: &str,
        now: Timestamp,
        apply: impl FnOnce(&mut T),
    ) -> Result<String, StoreError> {
        match self.records.get_mut(id) {
            Some(record) => {
                apply(record);
                record.touch(now);
                info!(entity = T::LABEL, %id, "Updated");
                Ok(id.to_string())
            }
            None => {
                warn!(entity = T::LABEL, %id, "Not found");
                Err(StoreError::not_found(T::LABEL))
            }
        }
    }

    /// Removes the record under `id` and returns a confirmation message;
    /// `NotFound` when absent. No cascading of any kind.
    pub fn remove_or_not_found(&mut self, id: &str) -> Result<String, StoreError> {
        match self.records.remove(id) {
            Some(_) => {
                info!(entity = T::LABEL, %id, size = self.records.len(), "Deleted");
                Ok(format!("{} with ID: {id} removed successfully", T::LABEL))
            }
            None => {
                warn!(entity = T::LABEL, %id, "Not found");
                Err(StoreError::not_found(T::LABEL))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Client;

    fn client(id: &str, name: &str) -> Client {
        Client::new(id, name, "somewhere", 100)
    }

    #[test]
    fn values_are_key_ordered_and_stable() {
        let mut collection = Collection::new();
        collection.insert("b", client("b", "Beth"));
        collection.insert("a", client("a", "Ann"));
        collection.insert("c", client("c", "Cal"));

        let names: Vec<&str> = collection.values().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Beth", "Cal"]);

        // Same order on a second enumeration.
        let again: Vec<&str> = collection.values().map(|c| c.name.as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn insert_returns_previous_record() {
        let mut collection = Collection::new();
        assert!(collection.insert("a", client("a", "Ann")).is_none());
        let previous = collection.insert("a", client("a", "Anna")).unwrap();
        assert_eq!(previous.name, "Ann");
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn values_or_not_found_reports_empty_collection() {
        let collection: Collection<Client> = Collection::new();
        assert_eq!(
            collection.values_or_not_found(),
            Err(StoreError::NotFound("No clients found".to_string()))
        );
    }

    #[test]
    fn update_with_stamps_updated_at() {
        let mut collection = Collection::new();
        collection.insert("a", client("a", "Ann"));

        let id = collection
            .update_with("a", 200, |c| c.name = "Anna".to_string())
            .unwrap();
        assert_eq!(id, "a");

        let record = collection.get("a").unwrap();
        assert_eq!(record.name, "Anna");
        assert_eq!(record.updated_at, Some(200));
    }

    #[test]
    fn remove_or_not_found_messages() {
        let mut collection = Collection::new();
        collection.insert("a", client("a", "Ann"));

        assert_eq!(
            collection.remove_or_not_found("a").unwrap(),
            "Client with ID: a removed successfully"
        );
        assert_eq!(
            collection.remove_or_not_found("a"),
            Err(StoreError::NotFound("Client not found".to_string()))
        );
    }
}
