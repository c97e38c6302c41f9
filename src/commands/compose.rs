//! `charter compose`: write the directive bundle.

use super::resolve_config;
use crate::cli::ComposeArgs;
use crate::composer::{Document, compose};
use crate::error::{CharterError, Result};
use crate::fs::atomic_write_file;
use std::io::Write;
use tracing::info;

pub(super) fn cmd_compose(args: ComposeArgs) -> Result<()> {
    let config = resolve_config(&args.config)?;
    let doc = compose(&config);

    match &args.output {
        Some(path) => {
            atomic_write_file(path, doc.as_str())?;
            info!(
                path = %path.display(),
                sections = doc.sections().len(),
                bytes = doc.len(),
                "directive bundle written"
            );
            Ok(())
        }
        None => write_document(&doc, &mut std::io::stdout().lock()),
    }
}

fn write_document<W: Write>(doc: &Document, out: &mut W) -> Result<()> {
    out.write_all(doc.as_str().as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| CharterError::Io(format!("failed to write document: {}", e)))
}
