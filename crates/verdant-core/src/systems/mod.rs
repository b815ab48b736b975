//! Systems - logic that operates on components

mod growth;
mod harvest;
mod offline;

pub use growth::*;
pub use harvest::*;
pub use offline::*;
