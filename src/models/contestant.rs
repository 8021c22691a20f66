//! Contestant data structure.

use serde::{Deserialize, Serialize};

/// Identifier for a contestant (stable across rounds; identity of a contestant).
pub type ContestantId = u32;

/// An entrant in the bracket. Never mutated after the roster is built.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    /// Image shown for this contestant (e.g. `/3.jpeg`).
    pub image_ref: String,
}

impl Contestant {
    pub fn new(id: ContestantId, image_ref: impl Into<String>) -> Self {
        Self {
            id,
            image_ref: image_ref.into(),
        }
    }
}
