//! The Hero entity and its request shapes.
//!
//! A [`Hero`] is a flat value: a store-assigned [`HeroId`] plus a name.
//! [`NewHero`] is the same record before the store has given it an id, and
//! [`HeroRef`] lets callers name a hero either by record or by bare id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::HeroId;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// A hero as stored by the backing collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Hero {
    /// Store-assigned identity. Immutable once created.
    pub id: HeroId,
    /// Display name, editable by the user.
    pub name: String,
}

impl Hero {
    /// Build a hero record from its parts.
    pub fn new(id: impl Into<HeroId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// NewHero
// ---------------------------------------------------------------------------

/// A hero that has not been stored yet and therefore has no id.
///
/// Serializes to `{"name": "..."}`; the store assigns the id on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewHero {
    /// Display name of the hero to create.
    pub name: String,
}

impl NewHero {
    /// Build a creation payload from raw user input.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` when nothing is
    /// left, since a hero needs a non-empty name.
    pub fn from_input(input: &str) -> Option<Self> {
        let name = input.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// HeroRef
// ---------------------------------------------------------------------------

/// A reference to a stored hero, either by full record or by bare id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroRef {
    /// A full hero record; its embedded id is used.
    Record(Hero),
    /// A bare hero identity.
    Id(HeroId),
}

impl HeroRef {
    /// Resolve the reference to the identity it points at.
    pub const fn id(&self) -> HeroId {
        match self {
            Self::Record(hero) => hero.id,
            Self::Id(id) => *id,
        }
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        Self::Record(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        Self::Record(hero.clone())
    }
}

impl From<HeroId> for HeroRef {
    fn from(id: HeroId) -> Self {
        Self::Id(id)
    }
}

impl From<u32> for HeroRef {
    fn from(id: u32) -> Self {
        Self::Id(HeroId(id))
    }
}
