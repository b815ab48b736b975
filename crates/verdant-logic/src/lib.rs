//! Pure simulation logic for Verdant.
//!
//! This crate contains the tree-lifecycle math that is independent of any
//! entity store, engine, or runtime. Functions take plain data and return
//! results, making them unit-testable and portable across the native
//! engine, headless tools, and any future client.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Growth/yield multipliers, caps, season length |
//! | [`difficulty`] | Species growth divisor (1–5) and active difficulty tiers |
//! | [`growth`] | The growth-rate function shared by per-tick and offline paths |
//! | [`harvest`] | Late-bound yield multiplier composition |
//! | [`offline`] | Closed-form catch-up over long elapsed real time |
//! | [`season`] | Seasons, weather, and the day-cycle season clock |
//! | [`species`] | Species catalog, growth stages, hard-coded specials |

pub mod constants;
pub mod difficulty;
pub mod growth;
pub mod harvest;
pub mod offline;
pub mod season;
pub mod species;
