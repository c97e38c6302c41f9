//! Configuration struct definitions.

use super::types::BackendStatus;
use serde::{Deserialize, Deserializer, Serialize};

/// Environment facts the composer interpolates into the directive bundle.
///
/// Every field is optional. `None` maps to a stable default at composition
/// time; it never produces an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Absolute path of the project root inside the sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Markup element names the agent may use in prose, in render order.
    ///
    /// `None` selects the default vocabulary. `Some(vec![])` is kept distinct
    /// and renders as "plain text only".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_markup_vocabulary: Option<Vec<String>>,

    /// Managed-backend integration. Presence adds the backend policy section.
    ///
    /// In YAML this is either a settings mapping or a plain switch: `true`
    /// means connected with default settings, while `false`, `null`, or an
    /// empty value mean no backend.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_backend_switch"
    )]
    pub backend_integration: Option<BackendIntegration>,
}

/// Accepted YAML shapes for `backend_integration`.
#[derive(Deserialize)]
#[serde(untagged)]
enum BackendSwitch {
    Enabled(bool),
    Settings(BackendIntegration),
}

fn deserialize_backend_switch<'de, D>(
    deserializer: D,
) -> Result<Option<BackendIntegration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BackendSwitch>::deserialize(deserializer)? {
        Some(BackendSwitch::Enabled(true)) => Some(BackendIntegration::default()),
        Some(BackendSwitch::Enabled(false)) | None => None,
        Some(BackendSwitch::Settings(settings)) => Some(settings),
    })
}

/// Managed-backend integration settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendIntegration {
    /// Connection state reported by the caller.
    pub status: BackendStatus,
}

impl BackendIntegration {
    /// Integration with the given connection status.
    pub fn new(status: BackendStatus) -> Self {
        Self { status }
    }
}

impl Configuration {
    /// Empty configuration; composes entirely from defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory.
    pub fn with_working_directory(mut self, path: impl Into<String>) -> Self {
        self.working_directory = Some(path.into());
        self
    }

    /// Set the permitted markup vocabulary, preserving order.
    pub fn with_markup_vocabulary<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_markup_vocabulary = Some(elements.into_iter().map(Into::into).collect());
        self
    }

    /// Enable the backend integration.
    pub fn with_backend(mut self, backend: BackendIntegration) -> Self {
        self.backend_integration = Some(backend);
        self
    }

    /// Whether the backend policy section applies.
    pub fn has_backend(&self) -> bool {
        self.backend_integration.is_some()
    }
}
