//! Declarative description of the companion messaging stack.
//!
//! Nothing here executes. The definition is data handed to an external
//! provisioning engine; the service itself only owns the item catalog.

use serde::{Deserialize, Serialize};

/// Default queue visibility timeout, in seconds.
pub const DEFAULT_VISIBILITY_TIMEOUT_SECS: u64 = 300;

/// A single provisionable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    /// Message queue with a visibility timeout.
    Queue {
        id: String,
        visibility_timeout_secs: u64,
    },
    /// Notification topic.
    Topic { id: String },
    /// Subscription delivering topic messages to a queue.
    Subscription {
        id: String,
        topic: String,
        queue: String,
    },
}

impl Resource {
    pub fn id(&self) -> &str {
        match self {
            Resource::Queue { id, .. } => id,
            Resource::Topic { id } => id,
            Resource::Subscription { id, .. } => id,
        }
    }
}

/// An ordered set of resources provisioned together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDefinition {
    pub name: String,
    pub resources: Vec<Resource>,
}

impl StackDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// The stock wiring: one queue, one topic, and a subscription
    /// connecting them.
    pub fn example(name: &str) -> Self {
        let queue_id = format!("{name}Queue");
        let topic_id = format!("{name}Topic");
        Self::new(name)
            .with_resource(Resource::Queue {
                id: queue_id.clone(),
                visibility_timeout_secs: DEFAULT_VISIBILITY_TIMEOUT_SECS,
            })
            .with_resource(Resource::Topic {
                id: topic_id.clone(),
            })
            .with_resource(Resource::Subscription {
                id: format!("{name}Subscription"),
                topic: topic_id,
                queue: queue_id,
            })
    }

    /// Serialize for handoff to the provisioning engine.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
