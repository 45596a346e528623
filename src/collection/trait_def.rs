//! FunkoStore trait definition.

use super::models::Funko;
use anyhow::Result;

/// Durable storage of users' collections, keyed by (user, id).
///
/// Missing or already existing keys are ordinary outcomes and are reported
/// through the `Ok` value. `Err` is reserved for storage failures.
pub trait FunkoStore: Send + Sync {
    /// Stores a new record.
    /// Returns false if the user already has a record with the same id.
    fn create(&self, user: &str, funko: &Funko) -> Result<bool>;

    /// Returns the record with the given id.
    /// Returns None if the user has no such record.
    fn read(&self, user: &str, id: u32) -> Result<Option<Funko>>;

    /// Replaces an existing record, matched by `funko.id`.
    /// Returns false if the record does not exist.
    fn update(&self, user: &str, funko: &Funko) -> Result<bool>;

    /// Deletes a record.
    /// Returns false if the record does not exist.
    fn delete(&self, user: &str, id: u32) -> Result<bool>;

    /// Returns all the user's records ordered by ascending id.
    fn list(&self, user: &str) -> Result<Vec<Funko>>;
}
