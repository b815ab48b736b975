//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod terrain;
mod tree;

pub use terrain::*;
pub use tree::*;
