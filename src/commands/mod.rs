//! Command implementations for charter.
//!
//! This module routes CLI commands to their handlers and owns the one piece
//! of logic they share: turning `ConfigArgs` into a validated `Configuration`.

mod check;
mod compose;
mod sections;

use crate::cli::{Command, ConfigArgs};
use crate::config::{BackendIntegration, Configuration};
use crate::error::Result;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Compose(args) => compose::cmd_compose(args),
        Command::Sections(args) => sections::cmd_sections(args),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Build the configuration for a command: file first, then flag overrides.
pub(crate) fn resolve_config(args: &ConfigArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            Configuration::load(path)?
        }
        None => Configuration::default(),
    };

    if let Some(dir) = &args.working_directory {
        config.working_directory = Some(dir.clone());
    }

    if args.plain_text {
        config.allowed_markup_vocabulary = Some(Vec::new());
    } else if !args.allow_elements.is_empty() {
        config.allowed_markup_vocabulary = Some(args.allow_elements.clone());
    }

    if args.no_backend {
        config.backend_integration = None;
    } else if let Some(status) = args.backend_status {
        config.backend_integration = Some(BackendIntegration::new(status));
    } else if args.backend && config.backend_integration.is_none() {
        config.backend_integration = Some(BackendIntegration::default());
    }

    config.validate()?;
    Ok(config)
}
