//! The composed directive bundle.

use super::sections::SectionName;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::LazyLock;

/// Separator between consecutive sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

static UNRESOLVED_SLOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\{\s*([A-Za-z0-9_]*)\s*\}").expect("Invalid unresolved slot regex")
});

static DOWNSTREAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("Invalid downstream placeholder regex")
});

/// Location of one section inside the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub name: SectionName,
    /// Byte range of the section body within [`Document::as_str`].
    pub range: Range<usize>,
}

/// Ordered, fully resolved instruction text.
///
/// Identity is content: two documents are equal iff their text is equal.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    spans: Vec<SectionSpan>,
    /// Byte ranges holding caller-supplied slot values.
    substituted: Vec<Range<usize>>,
}

impl Document {
    pub(crate) fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// The document text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[SectionSpan] {
        &self.spans
    }

    /// Names of the included sections, in order.
    pub fn section_names(&self) -> Vec<SectionName> {
        self.spans.iter().map(|span| span.name).collect()
    }

    /// Body text of a section, if it was included.
    pub fn section(&self, name: SectionName) -> Option<&str> {
        self.spans
            .iter()
            .find(|span| span.name == name)
            .map(|span| &self.text[span.range.clone()])
    }

    /// Whether a section was included.
    pub fn contains_section(&self, name: SectionName) -> bool {
        self.spans.iter().any(|span| span.name == name)
    }

    /// Resolve-now tokens (`%{name}`) left over from section text.
    ///
    /// Substituted values are opaque: a working directory that happens to
    /// contain `%{x}` is not reported. Empty for every composed document.
    pub fn unresolved_slots(&self) -> Vec<String> {
        UNRESOLVED_SLOT_REGEX
            .find_iter(&self.text)
            .filter(|m| !self.is_substituted(m.range()))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn is_substituted(&self, range: Range<usize>) -> bool {
        self.substituted
            .iter()
            .any(|value| range.start < value.end && value.start < range.end)
    }

    /// Leave-for-downstream tokens (`{{NAME}}`) in the text, deduplicated.
    pub fn downstream_placeholders(&self) -> BTreeSet<String> {
        DOWNSTREAM_REGEX
            .captures_iter(&self.text)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty. Never true for composed documents.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Document {}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Appends rendered sections and records their spans.
#[derive(Debug, Default)]
pub(crate) struct DocumentBuilder {
    text: String,
    spans: Vec<SectionSpan>,
    substituted: Vec<Range<usize>>,
}

impl DocumentBuilder {
    /// Append a rendered section body. Surrounding blank lines are trimmed.
    ///
    /// `substitutions` are byte ranges of `body` that hold slot values.
    pub(crate) fn push(
        &mut self,
        name: SectionName,
        body: &str,
        substitutions: &[Range<usize>],
    ) {
        if !self.text.is_empty() {
            self.text.push_str(SECTION_SEPARATOR);
        }
        let lead = body.len() - body.trim_start_matches('\n').len();
        let body = body.trim_matches('\n');
        let start = self.text.len();
        self.text.push_str(body);

        for value in substitutions {
            let from = value.start.saturating_sub(lead).min(body.len());
            let to = value.end.saturating_sub(lead).min(body.len());
            if from < to {
                self.substituted.push(start + from..start + to);
            }
        }
        self.spans.push(SectionSpan {
            name,
            range: start..self.text.len(),
        });
    }

    /// Finish the document with a single trailing newline.
    pub(crate) fn finish(mut self) -> Document {
        self.text.push('\n');
        Document {
            text: self.text,
            spans: self.spans,
            substituted: self.substituted,
        }
    }
}
