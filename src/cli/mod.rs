//! CLI argument parsing for charter.
//!
//! Uses clap derive macros for declarative argument definitions. Every
//! subcommand builds a `Configuration` the same way: an optional YAML file,
//! then flag overrides.

use crate::config::BackendStatus;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Charter: compose the directive bundle for a sandboxed code-generation agent.
///
/// The bundle is a single instruction document built from fixed sections.
/// The working directory, permitted markup elements, and backend integration
/// are the only inputs.
#[derive(Parser, Debug)]
#[command(name = "charter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments from the process command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for charter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the directive bundle.
    ///
    /// Writes the document to stdout, or atomically to --output.
    Compose(ComposeArgs),

    /// List the section order and which sections are included.
    Sections(SectionsArgs),

    /// Compose and verify that no resolve-now placeholder survived.
    ///
    /// Values passed in (such as `--cwd`) are opaque and never reported.
    /// Also lists the placeholders left for a downstream binding stage.
    Check(CheckArgs),
}

/// Inputs shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// YAML configuration file. Flags override its values.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Absolute project root inside the sandbox.
    #[arg(long = "cwd", value_name = "PATH")]
    pub working_directory: Option<String>,

    /// Markup element permitted in prose replies (repeatable, comma-separated).
    #[arg(
        long = "allow-element",
        value_name = "NAME",
        value_delimiter = ',',
        conflicts_with = "plain_text"
    )]
    pub allow_elements: Vec<String>,

    /// Permit no markup elements at all.
    #[arg(long)]
    pub plain_text: bool,

    /// Include the managed-backend policy section.
    #[arg(long)]
    pub backend: bool,

    /// Backend connection status (implies --backend).
    #[arg(long, value_name = "STATUS", value_parser = parse_backend_status)]
    pub backend_status: Option<BackendStatus>,

    /// Exclude the backend policy even if the config file enables it.
    #[arg(long, conflicts_with_all = ["backend", "backend_status"])]
    pub no_backend: bool,
}

/// Arguments for the `compose` command.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write the document to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sections` command.
#[derive(Args, Debug)]
pub struct SectionsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

fn parse_backend_status(s: &str) -> Result<BackendStatus, String> {
    BackendStatus::from_str(s).ok_or_else(|| {
        format!(
            "invalid backend status '{}' (expected connected, project-not-selected, or disconnected)",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_compose_defaults() {
        let cli = parse(&["charter", "compose"]);
        match cli.command {
            Command::Compose(args) => {
                assert!(args.output.is_none());
                assert!(args.config.config.is_none());
                assert!(args.config.allow_elements.is_empty());
                assert!(!args.config.backend);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_compose_with_flags() {
        let cli = parse(&[
            "charter",
            "compose",
            "--cwd",
            "/repo",
            "--allow-element",
            "b",
            "--allow-element",
            "em,strong",
            "--backend-status",
            "project-not-selected",
            "-o",
            "out.md",
        ]);
        match cli.command {
            Command::Compose(args) => {
                assert_eq!(args.config.working_directory.as_deref(), Some("/repo"));
                assert_eq!(args.config.allow_elements, vec!["b", "em", "strong"]);
                assert_eq!(
                    args.config.backend_status,
                    Some(BackendStatus::ProjectNotSelected)
                );
                assert_eq!(args.output, Some(PathBuf::from("out.md")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_backend_status_rejected() {
        let result = Cli::try_parse_from(["charter", "check", "--backend-status", "maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_text_conflicts_with_elements() {
        let result = Cli::try_parse_from([
            "charter",
            "compose",
            "--plain-text",
            "--allow-element",
            "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_backend_conflicts_with_backend() {
        let result = Cli::try_parse_from(["charter", "sections", "--backend", "--no-backend"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sections_json_flag() {
        let cli = parse(&["charter", "sections", "--json", "--backend"]);
        match cli.command {
            Command::Sections(args) => {
                assert!(args.json);
                assert!(args.config.backend);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
