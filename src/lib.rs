//! Charter: deterministic directive-bundle composer for sandboxed
//! code-generation agents.
//!
//! The core is [`composer::compose`], a pure function from a
//! [`config::Configuration`] to a [`composer::Document`]:
//!
//! ```
//! use charter::composer::{SectionName, compose};
//! use charter::config::{BackendIntegration, Configuration};
//!
//! let config = Configuration::new()
//!     .with_working_directory("/repo")
//!     .with_markup_vocabulary(["b"])
//!     .with_backend(BackendIntegration::default());
//!
//! let doc = compose(&config);
//! assert!(doc.contains_section(SectionName::BackendPolicy));
//! assert!(doc.unresolved_slots().is_empty());
//! ```

pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;

pub use composer::{Document, compose};
pub use config::Configuration;
