//! Resolve-now renderer for section bodies.
//!
//! # Syntax
//!
//! - `%{name}` - Substitutes the value of slot `name`
//! - A `%` not followed by `{` is literal text
//! - Everything else, including `{`, `}` and `{{NAME}}`, is copied through
//!
//! Section bodies are full of code samples (JSX, SQL, shell) where braces are
//! ordinary characters, so the resolve-now marker is `%{` rather than a bare
//! brace. Leave-for-downstream tokens use `{{NAME}}` and never reach the slot
//! lookup.
//!
//! # Error Handling
//!
//! Unknown slots are an error rather than an empty substitution. The composer
//! only renders bodies that passed the compile-time slot check in
//! `slots::body_declares_slots`, so these errors surface for ad-hoc templates.

use std::collections::HashMap;
use std::ops::Range;
use thiserror::Error;

/// Marker that opens a resolve-now slot.
pub const SLOT_OPEN: &str = "%{";

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A slot was referenced but no value was supplied.
    #[error("undefined slot '{name}' at position {position} in template")]
    UndefinedSlot {
        /// The name of the undefined slot.
        name: String,
        /// Byte offset of the `%{` marker.
        position: usize,
    },
    /// A `%{` was found without a matching `}`.
    #[error("unterminated slot '%{{' at position {position} in template")]
    UnterminatedSlot {
        /// Byte offset of the `%{` marker.
        position: usize,
    },
    /// An empty slot name was found (`%{}`).
    #[error("empty slot name '%{{}}' at position {position} in template")]
    EmptySlotName {
        /// Byte offset of the `%{` marker.
        position: usize,
    },
}

/// Render a template string by substituting resolve-now slots.
///
/// # Examples
///
/// ```
/// use charter::composer::{render_template, vars};
///
/// let vars = vars([("working_directory", "/repo")]);
/// let result = render_template("cd %{working_directory} && ls", &vars).unwrap();
/// assert_eq!(result, "cd /repo && ls");
/// ```
///
/// Downstream tokens and braces pass through:
///
/// ```
/// use charter::composer::render_template;
/// use std::collections::HashMap;
///
/// let vars = HashMap::new();
/// let result = render_template("id={{PROJECT_ID}} style={{ a: 1 }}", &vars).unwrap();
/// assert_eq!(result, "id={{PROJECT_ID}} style={{ a: 1 }}");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    render_template_tracked(template, variables).map(|rendered| rendered.text)
}

/// Output of [`render_template_tracked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The rendered text.
    pub text: String,
    /// Byte ranges of `text` that hold substituted values, in order.
    pub substitutions: Vec<Range<usize>>,
}

/// Like [`render_template`], but also records where each value landed.
///
/// Lets later scans tell template text apart from caller-supplied values.
pub fn render_template_tracked(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<Rendered, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut substitutions = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(SLOT_OPEN) {
        result.push_str(&rest[..start]);
        let position = offset + start;
        let after_open = &rest[start + SLOT_OPEN.len()..];

        let end = after_open
            .find('}')
            .ok_or(TemplateError::UnterminatedSlot { position })?;
        let name = after_open[..end].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptySlotName { position });
        }

        match variables.get(name) {
            Some(value) => {
                let at = result.len();
                result.push_str(value);
                substitutions.push(at..result.len());
            }
            None => {
                return Err(TemplateError::UndefinedSlot {
                    name: name.to_string(),
                    position,
                });
            }
        }

        let consumed = start + SLOT_OPEN.len() + end + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }

    result.push_str(rest);
    Ok(Rendered {
        text: result,
        substitutions,
    })
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
