use serde::Deserialize;

use stockroom_catalog::ItemDraft;

// -------------------------
// Request DTOs
// -------------------------

/// Body shape shared by create and update: an item minus its identity.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl ItemRequest {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}
