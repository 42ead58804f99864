//! Ordered in-memory collection keyed by id
//!
//! Records keep insertion order. Ids come from a counter that starts after
//! the largest id seen, so an id is never handed out twice even after
//! deletions.

use crate::error::{DomainError, DomainResult};

/// An entity stored in a [`Collection`]
pub trait Record: Clone {
    /// Entity name used in not-found errors
    const ENTITY: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: u64,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a collection from records that already carry ids
    pub fn from_records(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Like [`Collection::get`] but reports a missing id as an error
    pub fn require(&self, id: u64) -> DomainResult<&T> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))
    }

    pub fn require_mut(&mut self, id: u64) -> DomainResult<&mut T> {
        self.get_mut(id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))
    }

    /// Append a record under the next sequential id
    pub fn create(&mut self, mut record: T) -> T {
        record.set_id(self.next_id);
        self.next_id += 1;
        self.items.push(record.clone());
        record
    }

    /// Replace the record with the same id, keeping its position
    pub fn update(&mut self, record: T) -> DomainResult<T> {
        let slot = self.require_mut(record.id())?;
        *slot = record.clone();
        Ok(record)
    }

    pub fn delete(&mut self, id: u64) -> DomainResult<T> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))?;
        Ok(self.items.remove(index))
    }
}
