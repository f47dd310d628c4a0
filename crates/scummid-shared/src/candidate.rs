//! Candidate rows and the resolved match.

use serde::{Deserialize, Serialize};

/// One row of the ScummVM detect table.
/// All fields are non-empty; construct through [`Candidate::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Engine-qualified game id (e.g., "scumm:loom")
    pub identifier: String,
    /// Human label, may carry qualifiers (e.g., "Loom (VGA/DOS/English)")
    pub description: String,
    /// Path column as printed, trailing separators included
    pub source_path: String,
}

impl Candidate {
    /// Build a candidate from raw fields. Returns None if any field is blank.
    pub fn new(identifier: &str, description: &str, source_path: &str) -> Option<Self> {
        let identifier = identifier.trim();
        let description = description.trim();
        let source_path = source_path.trim();

        if identifier.is_empty() || description.is_empty() || source_path.is_empty() {
            return None;
        }

        Some(Self {
            identifier: identifier.to_string(),
            description: description.to_string(),
            source_path: source_path.to_string(),
        })
    }

    pub fn to_match(&self) -> GameMatch {
        GameMatch {
            identifier: self.identifier.clone(),
            description: self.description.clone(),
        }
    }
}

/// The single game chosen for one detect output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMatch {
    pub identifier: String,
    pub description: String,
}
