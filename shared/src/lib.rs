//! GymMania Shared Library
//!
//! This crate contains the plan and log data model together with the pure
//! calculations (macro aggregation, training statistics) used by the store
//! and WASM crates.

pub mod errors;
pub mod logs;
pub mod models;
pub mod nutrition;
pub mod stats;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use logs::*;
pub use models::*;
pub use nutrition::*;
pub use types::*;
