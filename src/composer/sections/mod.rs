//! Process-wide section registry.
//!
//! Sections are `const` data: name, inclusion rule, declared slots, body.
//! Their order in [`SECTIONS`] is the order of the composed document. The
//! backend policy is the only conditional entry and sits at a fixed anchor
//! between the prose-markup rules and the code formatting rules.

mod backend;
mod conventions;
mod environment;
mod examples;
mod identity;
mod protocol;

pub(crate) use backend::BACKEND_ACTION_KINDS;

use super::slots::{Slot, body_declares_slots};
use crate::config::Configuration;
use serde::Serialize;

/// Identifier of a section in the composed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    /// Opening role statement.
    Identity,
    /// Sandbox facts and forbidden operations.
    SystemConstraints,
    /// Folder and naming conventions.
    Architecture,
    /// Styling and UX rules.
    Styling,
    /// Data-fetching conventions.
    DataFetching,
    /// Markup elements permitted in prose.
    MessageFormatting,
    /// Managed-backend policy (conditional).
    BackendPolicy,
    /// Indentation and line endings.
    CodeFormatting,
    /// Short plan before each solution.
    PlanningProtocol,
    /// Artifact/action tagging contract.
    ArtifactContract,
    /// Worked examples.
    Examples,
}

impl SectionName {
    /// Stable snake_case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Identity => "identity",
            SectionName::SystemConstraints => "system_constraints",
            SectionName::Architecture => "architecture",
            SectionName::Styling => "styling",
            SectionName::DataFetching => "data_fetching",
            SectionName::MessageFormatting => "message_formatting",
            SectionName::BackendPolicy => "backend_policy",
            SectionName::CodeFormatting => "code_formatting",
            SectionName::PlanningProtocol => "planning_protocol",
            SectionName::ArtifactContract => "artifact_contract",
            SectionName::Examples => "examples",
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// When a section is part of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// Always present.
    Required,
    /// Present iff a backend integration is configured.
    WithBackend,
}

impl Inclusion {
    /// Evaluate the inclusion rule against a configuration.
    pub fn applies(self, config: &Configuration) -> bool {
        match self {
            Inclusion::Required => true,
            Inclusion::WithBackend => config.has_backend(),
        }
    }
}

/// A named block of instruction text.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: SectionName,
    pub inclusion: Inclusion,
    /// Slots the body may reference.
    pub slots: &'static [Slot],
    pub body: &'static str,
}

const SECTION_TABLE: [Section; 11] = [
    Section {
        name: SectionName::Identity,
        inclusion: Inclusion::Required,
        slots: &[],
        body: identity::IDENTITY,
    },
    Section {
        name: SectionName::SystemConstraints,
        inclusion: Inclusion::Required,
        slots: &[Slot::WorkingDirectory],
        body: environment::SYSTEM_CONSTRAINTS,
    },
    Section {
        name: SectionName::Architecture,
        inclusion: Inclusion::Required,
        slots: &[],
        body: conventions::ARCHITECTURE,
    },
    Section {
        name: SectionName::Styling,
        inclusion: Inclusion::Required,
        slots: &[],
        body: conventions::STYLING,
    },
    Section {
        name: SectionName::DataFetching,
        inclusion: Inclusion::Required,
        slots: &[],
        body: conventions::DATA_FETCHING,
    },
    Section {
        name: SectionName::MessageFormatting,
        inclusion: Inclusion::Required,
        slots: &[Slot::MarkupVocabulary],
        body: conventions::MESSAGE_FORMATTING,
    },
    Section {
        name: SectionName::BackendPolicy,
        inclusion: Inclusion::WithBackend,
        slots: &[Slot::BackendStatus],
        body: backend::BACKEND_POLICY,
    },
    Section {
        name: SectionName::CodeFormatting,
        inclusion: Inclusion::Required,
        slots: &[],
        body: protocol::CODE_FORMATTING,
    },
    Section {
        name: SectionName::PlanningProtocol,
        inclusion: Inclusion::Required,
        slots: &[],
        body: protocol::PLANNING_PROTOCOL,
    },
    Section {
        name: SectionName::ArtifactContract,
        inclusion: Inclusion::Required,
        slots: &[Slot::WorkingDirectory, Slot::BackendActionKinds],
        body: protocol::ARTIFACT_CONTRACT,
    },
    Section {
        name: SectionName::Examples,
        inclusion: Inclusion::Required,
        slots: &[],
        body: examples::EXAMPLES,
    },
];

// Every `%{...}` in a body must name a declared slot.
const _: () = {
    let mut i = 0;
    while i < SECTION_TABLE.len() {
        assert!(
            body_declares_slots(SECTION_TABLE[i].body, SECTION_TABLE[i].slots),
            "section body references an undeclared or unterminated slot"
        );
        i += 1;
    }
};

/// All sections in document order.
pub static SECTIONS: &[Section] = &SECTION_TABLE;

/// Look up a section definition by name.
pub fn section(name: SectionName) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.name == name)
}
