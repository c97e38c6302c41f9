//! Resolve-now slots and their values.
//!
//! Every slot a section body may reference is a variant of [`Slot`]. Values
//! come from [`SlotValues::get`], an exhaustive `match`, so adding a slot
//! without a supplier does not compile. Section bodies are checked against
//! their declared slots by [`body_declares_slots`] in a `const` context.

use super::sections::BACKEND_ACTION_KINDS;
use crate::config::{Configuration, DEFAULT_WORKING_DIRECTORY, default_markup_vocabulary};
use std::collections::HashMap;

/// A named interpolation site filled at composition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Project root inside the sandbox.
    WorkingDirectory,
    /// Rendered list of permitted markup elements.
    MarkupVocabulary,
    /// Sentence describing the backend connection state.
    BackendStatus,
    /// Backend-only action kinds in the artifact contract; empty without a backend.
    BackendActionKinds,
}

impl Slot {
    /// Every slot, in declaration order.
    pub const ALL: [Slot; 4] = [
        Slot::WorkingDirectory,
        Slot::MarkupVocabulary,
        Slot::BackendStatus,
        Slot::BackendActionKinds,
    ];

    /// Token name used inside `%{...}`.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::WorkingDirectory => "working_directory",
            Slot::MarkupVocabulary => "markup_vocabulary",
            Slot::BackendStatus => "backend_status",
            Slot::BackendActionKinds => "backend_action_kinds",
        }
    }

    /// Look up a slot by its token name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{{{}}}", self.name())
    }
}

/// Concrete values for every slot, derived from a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotValues {
    working_directory: String,
    markup_vocabulary: String,
    backend_status: String,
    backend_action_kinds: &'static str,
}

impl SlotValues {
    /// Resolve slot values, falling back to defaults for absent fields.
    pub fn from_config(config: &Configuration) -> Self {
        let working_directory = config
            .working_directory
            .clone()
            .unwrap_or_else(|| DEFAULT_WORKING_DIRECTORY.to_string());

        let markup_vocabulary = match &config.allowed_markup_vocabulary {
            Some(elements) => render_vocabulary(elements),
            None => render_vocabulary(&default_markup_vocabulary()),
        };

        let backend_status = config
            .backend_integration
            .map(|backend| backend.status)
            .unwrap_or_default()
            .describe()
            .to_string();

        let backend_action_kinds = if config.has_backend() {
            BACKEND_ACTION_KINDS
        } else {
            ""
        };

        Self {
            working_directory,
            markup_vocabulary,
            backend_status,
            backend_action_kinds,
        }
    }

    /// Value for a single slot.
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::WorkingDirectory => &self.working_directory,
            Slot::MarkupVocabulary => &self.markup_vocabulary,
            Slot::BackendStatus => &self.backend_status,
            Slot::BackendActionKinds => self.backend_action_kinds,
        }
    }

    /// Convert to template variables for `render_template`.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        Slot::ALL
            .into_iter()
            .map(|slot| (slot.name().to_string(), self.get(slot).to_string()))
            .collect()
    }
}

/// Render a markup vocabulary as an inline enumeration: `<b>, <em>`.
fn render_vocabulary(elements: &[String]) -> String {
    if elements.is_empty() {
        return "none. Reply in plain text only, without any markup elements".to_string();
    }

    elements
        .iter()
        .map(|name| format!("<{}>", name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that every `%{...}` token in `body` names one of `declared`.
///
/// Also rejects unterminated tokens. Usable in `const` context so section
/// definitions fail to compile when they reference an undeclared slot.
pub const fn body_declares_slots(body: &str, declared: &[Slot]) -> bool {
    let bytes = body.as_bytes();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'%' && bytes[i + 1] == b'{' {
            let start = i + 2;
            let mut end = start;
            while end < bytes.len() && bytes[end] != b'}' {
                end += 1;
            }
            if end == bytes.len() {
                return false;
            }
            if !names_declared_slot(bytes, start, end, declared) {
                return false;
            }
            i = end + 1;
        } else {
            i += 1;
        }
    }

    true
}

const fn names_declared_slot(bytes: &[u8], start: usize, end: usize, declared: &[Slot]) -> bool {
    let mut k = 0;
    while k < declared.len() {
        let name = declared[k].name().as_bytes();
        if name.len() == end - start {
            let mut j = 0;
            let mut equal = true;
            while j < name.len() {
                if name[j] != bytes[start + j] {
                    equal = false;
                    break;
                }
                j += 1;
            }
            if equal {
                return true;
            }
        }
        k += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendIntegration, BackendStatus};

    #[test]
    fn test_slot_names_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(Slot::from_name("cwd"), None);
    }

    #[test]
    fn test_slot_display_is_token() {
        assert_eq!(Slot::WorkingDirectory.to_string(), "%{working_directory}");
    }

    #[test]
    fn test_defaults_for_empty_config() {
        let values = SlotValues::from_config(&Configuration::default());

        assert_eq!(values.get(Slot::WorkingDirectory), "/home/project");
        assert!(values.get(Slot::MarkupVocabulary).starts_with("<a>, <b>"));
        assert_eq!(
            values.get(Slot::BackendStatus),
            BackendStatus::Connected.describe()
        );
        assert_eq!(values.get(Slot::BackendActionKinds), "");
    }

    #[test]
    fn test_backend_action_kinds_follow_backend_switch() {
        let config = Configuration::new().with_backend(BackendIntegration::default());
        let values = SlotValues::from_config(&config);

        let kinds = values.get(Slot::BackendActionKinds);
        assert!(kinds.starts_with("\n\n      - supabase:"));
        assert!(kinds.contains(r#"`operation`"#));
        assert!(kinds.contains("`projectId`"));
        assert!(!kinds.ends_with('\n'));
    }

    #[test]
    fn test_working_directory_is_verbatim() {
        let config = Configuration::new().with_working_directory("/odd path/with %{x} & <y>");
        let values = SlotValues::from_config(&config);
        assert_eq!(
            values.get(Slot::WorkingDirectory),
            "/odd path/with %{x} & <y>"
        );
    }

    #[test]
    fn test_vocabulary_preserves_order() {
        let config = Configuration::new().with_markup_vocabulary(["strong", "em"]);
        let values = SlotValues::from_config(&config);
        assert_eq!(values.get(Slot::MarkupVocabulary), "<strong>, <em>");
    }

    #[test]
    fn test_explicit_empty_vocabulary_is_plain_text() {
        let config = Configuration::new().with_markup_vocabulary(Vec::<String>::new());
        let values = SlotValues::from_config(&config);
        assert!(values.get(Slot::MarkupVocabulary).contains("plain text only"));
    }

    #[test]
    fn test_backend_status_follows_config() {
        let config =
            Configuration::new().with_backend(BackendIntegration::new(BackendStatus::Disconnected));
        let values = SlotValues::from_config(&config);
        assert_eq!(
            values.get(Slot::BackendStatus),
            BackendStatus::Disconnected.describe()
        );
    }

    #[test]
    fn test_template_vars_cover_every_slot() {
        let vars = SlotValues::from_config(&Configuration::default()).to_template_vars();
        assert_eq!(vars.len(), Slot::ALL.len());
        for slot in Slot::ALL {
            assert!(vars.contains_key(slot.name()), "missing {}", slot.name());
        }
    }

    #[test]
    fn test_body_declares_slots() {
        let declared = [Slot::WorkingDirectory];

        assert!(body_declares_slots("no tokens {{X}} { }", &declared));
        assert!(body_declares_slots("cd %{working_directory}", &declared));
        assert!(body_declares_slots("100% done", &declared));
        assert!(body_declares_slots("trailing %", &declared));

        assert!(!body_declares_slots("%{markup_vocabulary}", &declared));
        assert!(!body_declares_slots("%{working_directory", &declared));
        assert!(!body_declares_slots("%{}", &declared));
        assert!(!body_declares_slots("%{working_directory_x}", &declared));
    }

    const _: () = assert!(body_declares_slots(
        "in %{working_directory}",
        &[Slot::WorkingDirectory]
    ));
}
