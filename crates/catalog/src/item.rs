use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

/// The client-supplied fields of an item: everything except its identity.
///
/// Both create and update take this shape. Field shape is the only
/// precondition; the HTTP boundary enforces it during deserialization, so
/// no further validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// A stored catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Item {
    /// Build an item from its store-assigned identity plus a draft.
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }
}
