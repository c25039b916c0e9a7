//! Repository layer over in-memory collections
//!
//! State lives for the lifetime of the process. Every operation holds the
//! collection lock for its whole read-modify-write.

pub mod companies;
pub mod employees;
pub mod equipment;
pub mod substitutions;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Company, Employee, Equipment},
};

/// Entities addressed by a natural key
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Equipment {
    fn key(&self) -> &str {
        &self.certificate
    }
}

impl Keyed for Employee {
    fn key(&self) -> &str {
        &self.national_id
    }
}

impl Keyed for Company {
    fn key(&self) -> &str {
        &self.email
    }
}

/// Outcome of replacing a keyed entry
#[derive(Debug)]
pub enum Replace<T> {
    Replaced(T),
    Missing,
    /// The new key belongs to another entry
    KeyTaken,
}

/// Insertion-ordered collection with first-match lookups by key
#[derive(Debug)]
pub struct Collection<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    pub async fn all(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn find(&self, key: &str) -> Option<T> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.key() == key)
            .cloned()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Append unless the key is already present; hands the item back on conflict
    pub async fn insert(&self, item: T) -> Result<T, T> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.key() == item.key()) {
            return Err(item);
        }
        items.push(item.clone());
        Ok(item)
    }

    /// Replace the entry under `key`, possibly moving it to a new key
    pub async fn replace(&self, key: &str, item: T) -> Replace<T> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|existing| existing.key() == key) else {
            return Replace::Missing;
        };
        if item.key() != key && items.iter().any(|existing| existing.key() == item.key()) {
            return Replace::KeyTaken;
        }
        items[index] = item.clone();
        Replace::Replaced(item)
    }

    /// Drop every entry under `key`; true when something was removed
    pub async fn remove(&self, key: &str) -> bool {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.key() != key);
        items.len() < before
    }

    /// Return the entry under `key`, building and appending it when absent.
    /// The flag tells whether a new entry was created.
    pub async fn find_or_insert_with<F>(&self, key: &str, build: F) -> AppResult<(T, bool)>
    where
        F: FnOnce() -> AppResult<T>,
    {
        let mut items = self.items.write().await;
        if let Some(existing) = items.iter().find(|item| item.key() == key) {
            return Ok((existing.clone(), false));
        }
        let item = build()?;
        items.push(item.clone());
        Ok((item, true))
    }
}

/// Main repository struct holding every collection
#[derive(Clone, Default)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub employees: employees::EmployeesRepository,
    pub companies: companies::CompaniesRepository,
    pub substitutions: substitutions::SubstitutionsRepository,
}

impl Repository {
    /// Create a repository with empty collections
    pub fn new() -> Self {
        Self::default()
    }
}
