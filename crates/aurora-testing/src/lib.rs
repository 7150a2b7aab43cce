//! Testing infrastructure for aurora integration tests.
//!
//! - `TestWorld`: isolated data directory with optional pre-stored users and config
//! - `assertions`: checks over `aurora list --format json` output

pub mod assertions;
pub mod world;

pub use world::TestWorld;
