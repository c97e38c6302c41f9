//! `charter sections`: show the section order for a configuration.

use super::resolve_config;
use crate::cli::SectionsArgs;
use crate::composer::{Inclusion, SECTIONS, SectionName};
use crate::config::Configuration;
use crate::error::{CharterError, Result};
use serde::Serialize;
use std::io::Write;

/// One row of the section listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct SectionRow {
    position: usize,
    name: SectionName,
    inclusion: Inclusion,
    included: bool,
}

pub(super) fn cmd_sections(args: SectionsArgs) -> Result<()> {
    let config = resolve_config(&args.config)?;
    let rows = section_rows(&config);
    let mut out = std::io::stdout().lock();

    let written = if args.json {
        let json = serde_json::to_string_pretty(&rows).map_err(|e| {
            CharterError::Io(format!("failed to serialize section listing: {}", e))
        })?;
        writeln!(out, "{}", json)
    } else {
        write_table(&rows, &mut out)
    };

    written.map_err(|e| CharterError::Io(format!("failed to write section listing: {}", e)))
}

fn section_rows(config: &Configuration) -> Vec<SectionRow> {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| SectionRow {
            position: i + 1,
            name: section.name,
            inclusion: section.inclusion,
            included: section.inclusion.applies(config),
        })
        .collect()
}

fn write_table<W: Write>(rows: &[SectionRow], out: &mut W) -> std::io::Result<()> {
    for row in rows {
        let state = if row.included { "included" } else { "omitted" };
        let rule = match row.inclusion {
            Inclusion::Required => "required",
            Inclusion::WithBackend => "with backend",
        };
        writeln!(
            out,
            "{:>2}. {:<20} {:<9} ({})",
            row.position, row.name, state, rule
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendIntegration;

    #[test]
    fn test_rows_without_backend() {
        let rows = section_rows(&Configuration::new());

        assert_eq!(rows.len(), SECTIONS.len());
        let omitted: Vec<_> = rows.iter().filter(|r| !r.included).map(|r| r.name).collect();
        assert_eq!(omitted, vec![SectionName::BackendPolicy]);
    }

    #[test]
    fn test_rows_with_backend() {
        let rows = section_rows(&Configuration::new().with_backend(BackendIntegration::default()));
        assert!(rows.iter().all(|r| r.included));
        assert_eq!(rows[6].name, SectionName::BackendPolicy);
        assert_eq!(rows[6].position, 7);
    }

    #[test]
    fn test_table_output() {
        let rows = section_rows(&Configuration::new());
        let mut out = Vec::new();
        write_table(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(" 1. identity"));
        assert!(text.contains(" 7. backend_policy       omitted   (with backend)"));
        assert_eq!(text.lines().count(), SECTIONS.len());
    }

    #[test]
    fn test_json_shape() {
        let rows = section_rows(&Configuration::new());
        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(value[0]["name"], "identity");
        assert_eq!(value[0]["inclusion"], "required");
        assert_eq!(value[6]["name"], "backend_policy");
        assert_eq!(value[6]["inclusion"], "with_backend");
        assert_eq!(value[6]["included"], false);
    }
}
