//! Configuration types and defaults for charter.

use serde::{Deserialize, Serialize};

/// Working directory used when the configuration does not name one.
pub const DEFAULT_WORKING_DIRECTORY: &str = "/home/project";

/// Connection state of the managed backend, as reported by the caller.
///
/// Only affects wording inside the backend section; the section itself is
/// present whenever a `BackendIntegration` is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendStatus {
    /// A project is connected and selected (default).
    #[default]
    Connected,
    /// The user is signed in but has not picked a project.
    ProjectNotSelected,
    /// The user has not connected a backend account.
    Disconnected,
}

impl BackendStatus {
    /// Parse a backend status from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "connected" => Some(Self::Connected),
            "project_not_selected" | "project-not-selected" => Some(Self::ProjectNotSelected),
            "disconnected" => Some(Self::Disconnected),
            _ => None,
        }
    }

    /// Sentence describing the status to the agent.
    pub fn describe(self) -> &'static str {
        match self {
            BackendStatus::Connected => {
                "The user has connected a Supabase project. Make sure `.env` defines the variables listed below before writing code that talks to the database."
            }
            BackendStatus::ProjectNotSelected => {
                "The user is signed in to Supabase but has not selected a project yet. Remind them to select one in the chat box before you create any migration."
            }
            BackendStatus::Disconnected => {
                "The user is not connected to Supabase yet. Remind them to connect from the chat box before you create any migration."
            }
        }
    }
}

/// Default markup vocabulary permitted in the agent's prose replies.
pub fn default_markup_vocabulary() -> Vec<String> {
    [
        "a",
        "b",
        "blockquote",
        "br",
        "code",
        "dd",
        "del",
        "details",
        "div",
        "dl",
        "dt",
        "em",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "i",
        "ins",
        "kbd",
        "li",
        "ol",
        "p",
        "pre",
        "q",
        "s",
        "samp",
        "span",
        "strong",
        "sub",
        "summary",
        "sup",
        "table",
        "tbody",
        "td",
        "tfoot",
        "th",
        "thead",
        "tr",
        "ul",
        "var",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
