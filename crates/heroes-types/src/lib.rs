//! Shared type definitions for the Tour of Heroes data layer.
//!
//! This crate is the single source of truth for the Hero entity used by the
//! data-access client and the mock backing store. Types defined here flow
//! downstream to `TypeScript` via `ts-rs` for the single-page frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Typed wrapper for hero identifiers
//! - [`hero`] -- The `Hero` record, its id-less creation payload, and the
//!   record-or-id reference used by deletes

pub mod hero;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use hero::{Hero, HeroRef, NewHero};
pub use ids::HeroId;
