use serde::{Deserialize, Serialize};

/// A specific case entity (IP address, host, user, ...) an action is pointed
/// at directly, bypassing scope-based selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetEntity {
    /// Entity identifier as it appears in the case (e.g. `10.0.0.1`).
    #[serde(rename = "Identifier")]
    pub identifier: String,
    /// Entity type name (e.g. `ADDRESS`, `USERUNIQNAME`, `HOSTNAME`).
    #[serde(rename = "EntityType")]
    pub entity_type: String,
}

impl TargetEntity {
    #[must_use]
    pub fn new(identifier: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            entity_type: entity_type.into(),
        }
    }
}
