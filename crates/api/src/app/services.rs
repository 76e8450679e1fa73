//! Service wiring shared by all handlers.

use stockroom_catalog::{Item, ItemDraft};
use stockroom_core::{DomainResult, ItemId};
use stockroom_infra::ItemStore;

/// Everything the HTTP layer needs, constructed once at startup and
/// injected into handlers via `Extension` rather than module-level state.
pub struct AppServices {
    items: ItemStore,
}

/// Construct the service graph for a fresh process (empty store).
pub fn build_services() -> AppServices {
    AppServices {
        items: ItemStore::new(),
    }
}

impl AppServices {
    pub fn items_list(&self) -> Vec<Item> {
        self.items.list()
    }

    pub fn items_get(&self, id: ItemId) -> DomainResult<Item> {
        self.items.get(id)
    }

    pub fn items_create(&self, draft: ItemDraft) -> Item {
        self.items.create(draft)
    }

    pub fn items_update(&self, id: ItemId, draft: ItemDraft) -> DomainResult<Item> {
        self.items.update(id, draft)
    }

    pub fn items_delete(&self, id: ItemId) -> DomainResult<()> {
        self.items.delete(id)
    }
}
