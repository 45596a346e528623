use super::models::Funko;
use super::trait_def::FunkoStore;
use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// In-process FunkoStore, nothing is persisted.
#[derive(Default)]
pub struct MemoryFunkoStore {
    collections: Mutex<HashMap<String, BTreeMap<u32, Funko>>>,
}

impl MemoryFunkoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FunkoStore for MemoryFunkoStore {
    fn create(&self, user: &str, funko: &Funko) -> Result<bool> {
        let mut collections = self.collections.lock().unwrap();
        let collection = collections.entry(user.to_string()).or_default();
        if collection.contains_key(&funko.id) {
            return Ok(false);
        }
        collection.insert(funko.id, funko.clone());
        Ok(true)
    }

    fn read(&self, user: &str, id: u32) -> Result<Option<Funko>> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(user)
            .and_then(|collection| collection.get(&id))
            .cloned())
    }

    fn update(&self, user: &str, funko: &Funko) -> Result<bool> {
        let mut collections = self.collections.lock().unwrap();
        match collections
            .get_mut(user)
            .and_then(|collection| collection.get_mut(&funko.id))
        {
            Some(stored) => {
                *stored = funko.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, user: &str, id: u32) -> Result<bool> {
        let mut collections = self.collections.lock().unwrap();
        Ok(collections
            .get_mut(user)
            .and_then(|collection| collection.remove(&id))
            .is_some())
    }

    fn list(&self, user: &str) -> Result<Vec<Funko>> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(user)
            .map(|collection| collection.values().cloned().collect())
            .unwrap_or_default())
    }
}
