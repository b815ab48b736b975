//! Verdant Core - Tree Lifecycle Simulation Engine
//!
//! An ECS-based simulation of growable plants in a persistent world:
//! germination through senescence, and the harvesting of mature yield.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Trees, water tiles, structures
//! - **Components**: Pure data attached to entities (Tree, Harvestable, GridPosition, etc.)
//! - **Systems**: Logic that queries and updates components
//!
//! All sweeps are synchronous and single-threaded; spatial indices are
//! rebuilt read-only at the start of each sweep, so no mutation during a
//! sweep feeds back into that sweep's lookups.
//!
//! # Example
//!
//! ```rust,no_run
//! use verdant_core::prelude::*;
//! use verdant_core::generation::GroveConfig;
//!
//! let mut engine = GroveEngine::new();
//!
//! // Seed a grove with water, structures and trees
//! engine.generate(GroveConfig::default());
//!
//! // Run simulation
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//! }
//! ```

pub mod components;
pub mod engine;
pub mod generation;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::GroveEngine;
}
