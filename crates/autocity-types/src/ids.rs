//! Identifier newtypes.
//!
//! Citizens are identified by a small integer assigned in the roster so that
//! two runs over the same roster produce byte-identical reports. Runs carry a
//! UUID v7 used only to correlate log lines.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a citizen within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitizenId(pub u32);

impl CitizenId {
    /// Wrap a raw roster number.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw roster number.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for CitizenId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CitizenId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Identifier for one simulation run, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new run identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RunId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citizen_id_displays_with_hash() {
        assert_eq!(CitizenId::new(7).to_string(), "#7");
    }

    #[test]
    fn citizen_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&CitizenId::new(3)).unwrap_or_default();
        assert_eq!(json, "3");
    }

    #[test]
    fn run_ids_are_unique() {
        let a = RunId::new();
        let b = RunId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }
}
