//! Type-safe identifier wrapper for heroes.
//!
//! Hero identities are small integers assigned by the backing store when a
//! record is created. They never change afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a hero, assigned by the backing store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct HeroId(pub u32);

impl HeroId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for HeroId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HeroId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<HeroId> for u32 {
    fn from(id: HeroId) -> Self {
        id.0
    }
}
