//! Composer configuration for charter.
//!
//! This module defines the `Configuration` struct that drives composition.
//! It can be built in code or loaded from YAML. Unknown YAML fields are
//! ignored for forward compatibility, and every field is optional: an empty
//! configuration composes a complete document from defaults.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{BackendIntegration, Configuration};
pub use types::{BackendStatus, DEFAULT_WORKING_DIRECTORY, default_markup_vocabulary};
