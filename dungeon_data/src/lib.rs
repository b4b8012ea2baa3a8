//! Shared data model for the adventure dungeon description.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_dungeon};
