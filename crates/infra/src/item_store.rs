//! In-memory authoritative store for catalog items.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_catalog::{Item, ItemDraft};
use stockroom_core::{DomainError, DomainResult, ItemId};

/// Owns the ordered sequence of items for the process lifetime.
///
/// Created empty at service start and mutated only through the operations
/// below. The lock serializes all operations relative to each other, so a
/// list scan never observes a half-applied mutation. Contents are lost at
/// shutdown; there is no durability.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    items: Vec<Item>,
    /// Highest id handed out so far. Never decremented, so ids freed by
    /// `delete` are not reallocated.
    last_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still guards a consistent collection; recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Full ordered sequence of items, insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.read().items.clone()
    }

    /// Look up a single item by id.
    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.read()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    /// Allocate the next id, append the new item, and return it.
    pub fn create(&self, draft: ItemDraft) -> Item {
        let mut inner = self.write();
        inner.last_id += 1;
        let item = Item::new(ItemId::new(inner.last_id), draft);
        inner.items.push(item.clone());
        tracing::debug!(id = %item.id, "item created");
        item
    }

    /// Replace the item with the given id in place, keeping its position.
    pub fn update(&self, id: ItemId, draft: ItemDraft) -> DomainResult<Item> {
        let mut inner = self.write();
        let slot = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(DomainError::NotFound)?;
        *slot = Item::new(id, draft);
        let item = slot.clone();
        tracing::debug!(%id, "item updated");
        Ok(item)
    }

    /// Remove the item with the given id, shifting later items down.
    pub fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut inner = self.write();
        let idx = inner
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(DomainError::NotFound)?;
        inner.items.remove(idx);
        tracing::debug!(%id, "item deleted");
        Ok(())
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
