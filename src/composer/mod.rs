//! The directive composer.
//!
//! `compose` turns a [`Configuration`] into a [`Document`] in one synchronous
//! pass over the static [`SECTIONS`] registry:
//!
//! 1. Resolve slot values from the configuration (defaults for absent fields)
//! 2. Skip sections whose inclusion rule does not hold
//! 3. Render each remaining body, substituting `%{slot}` tokens
//! 4. Join bodies in registry order
//!
//! # Placeholder classes
//!
//! - `%{slot}` is resolved here and never survives into the output.
//! - `{{NAME}}` is left untouched for a later binding stage.
//!
//! Composition is total. Every body is checked against its declared slots at
//! compile time and every slot has a value, so rendering cannot fail.

mod cache;
mod document;
pub mod sections;
mod slots;
mod template;


pub use cache::{DEFAULT_MAX_CAPACITY, DocumentCache};
pub use document::{Document, SECTION_SEPARATOR, SectionSpan};
pub use sections::{Inclusion, SECTIONS, Section, SectionName};
pub use slots::{Slot, SlotValues, body_declares_slots};
pub use template::{
    Rendered, SLOT_OPEN, TemplateError, render_template, render_template_tracked, vars,
};

use crate::config::Configuration;
use tracing::debug;

/// Compose the directive bundle for a configuration.
///
/// Deterministic: equal configurations produce byte-identical documents.
pub fn compose(config: &Configuration) -> Document {
    let vars = SlotValues::from_config(config).to_template_vars();
    let mut builder = Document::builder();

    for section in SECTIONS {
        if !section.inclusion.applies(config) {
            debug!(section = %section.name, "section omitted");
            continue;
        }

        let rendered = render_template_tracked(section.body, &vars).unwrap_or_else(|err| {
            unreachable!("section `{}` passed its slot check but failed to render: {err}", section.name)
        });
        debug!(section = %section.name, bytes = rendered.text.len(), "section included");
        builder.push(section.name, &rendered.text, &rendered.substitutions);
    }

    builder.finish()
}
