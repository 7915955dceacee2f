//! Static battle content.
//!
//! Houses the compiled-in bestiary tables (enemy names and skill kits,
//! keyed by element and tier) consumed by the `battle-core` enemy
//! generator. Content never appears in engine state; it only flavors
//! generated units.

pub mod bestiary;

pub use bestiary::StandardBestiary;
