//! `charter check`: verify placeholder resolution in a composed document.

use super::resolve_config;
use crate::cli::CheckArgs;
use crate::composer::{Document, compose};
use crate::error::{CharterError, Result};
use std::io::Write;

pub(super) fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = resolve_config(&args.config)?;
    let doc = compose(&config);
    report(&doc, &mut std::io::stdout().lock())
}

/// Print the check result; fail if any resolve-now token survived.
///
/// Only section text is scanned; caller-supplied values are opaque.
fn report<W: Write>(doc: &Document, out: &mut W) -> Result<()> {
    let unresolved = doc.unresolved_slots();
    if !unresolved.is_empty() {
        return Err(CharterError::ValidationError(format!(
            "unresolved placeholder(s) in composed document: {}",
            unresolved.join(", ")
        )));
    }

    let io_err = |e: std::io::Error| CharterError::Io(format!("failed to write report: {}", e));

    writeln!(
        out,
        "ok: {} sections, {} bytes, no unresolved placeholders",
        doc.sections().len(),
        doc.len()
    )
    .map_err(io_err)?;

    let downstream = doc.downstream_placeholders();
    if downstream.is_empty() {
        writeln!(out, "downstream placeholders: none").map_err(io_err)?;
    } else {
        writeln!(out, "downstream placeholders:").map_err(io_err)?;
        for name in downstream {
            writeln!(out, "  {{{{{}}}}}", name).map_err(io_err)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::SectionName;
    use crate::config::{BackendIntegration, Configuration};
    use crate::exit_codes;

    fn run(config: &Configuration) -> (Result<()>, String) {
        let doc = compose(config);
        let mut out = Vec::new();
        let result = report(&doc, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_document_passes() {
        let (result, text) = run(&Configuration::new());

        assert!(result.is_ok());
        assert!(text.starts_with("ok: 10 sections"));
        assert!(text.contains("downstream placeholders: none"));
    }

    #[test]
    fn test_backend_document_lists_downstream_token() {
        let (result, text) =
            run(&Configuration::new().with_backend(BackendIntegration::default()));

        assert!(result.is_ok());
        assert!(text.starts_with("ok: 11 sections"));
        assert!(text.contains("  {{SUPABASE_PROJECT_ID}}\n"));
    }

    #[test]
    fn test_marker_inside_working_directory_passes() {
        let config = Configuration::new().with_working_directory("/repo/%{backend_status}");
        let (result, text) = run(&config);

        assert!(result.is_ok(), "{:?}", result);
        assert!(text.starts_with("ok: 10 sections"));
    }

    #[test]
    fn test_leftover_section_token_fails() {
        let mut builder = Document::builder();
        builder.push(SectionName::Identity, "cd %{working_directory}", &[]);
        let doc = builder.finish();

        let mut out = Vec::new();
        let err = report(&doc, &mut out).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("%{working_directory}"));
        assert!(out.is_empty());
    }
}
