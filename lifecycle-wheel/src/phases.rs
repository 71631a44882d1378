//! Phase registry
//!
//! The life cycle is a fixed, ordered list of phases. Slice order on the wheel
//! is the order of [`PHASES`].

use serde::Serialize;

use crate::error::{Result, WheelError};

/// One stage of the research data life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub storage: &'static str,
    pub policy: &'static str,
    /// Long-form markdown shown in the detail panel
    pub full_text: &'static str,
}

pub static PHASES: [Phase; 8] = [
    Phase {
        id: 1,
        title: "Research Question Definition",
        description: "Formulate research questions and hypotheses.",
        storage: "Notes in OneNote, Miro, Google Docs",
        policy: "Ensure alignment with institutional research policy.",
        full_text: "# Research Question Definition\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 2,
        title: "Project Creation",
        description: "Set up project plan, team, and resources.",
        storage: "Project management tools: Notion, Trello, Asana",
        policy: "Document ownership and roles clearly.",
        full_text: "# Project Creation\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 3,
        title: "Collection, Storage and Documentation",
        description: "Gather data from experiments, surveys, or external sources.",
        storage: "Secure server, cloud storage, version-controlled repositories",
        policy: "Follow GDPR and internal data storage guidelines.",
        full_text: "# Collection, Storage and Documentation\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 4,
        title: "Evaluation and Selection",
        description: "Assess data quality and select relevant datasets.",
        storage: "Filtered datasets stored with metadata in repository",
        policy: "Document selection criteria and decisions.",
        full_text: "# Evaluation and Selection\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 5,
        title: "Processing and Analysing",
        description: "Clean, process, and analyse data using statistical tools.",
        storage: "Processed datasets stored in CSV, SQL, or analysis software",
        policy: "Ensure reproducibility and documentation of steps.",
        full_text: "# Processing and Analysing\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 6,
        title: "Publishing and Access Management",
        description: "Write papers, manage peer-review and open access.",
        storage: "Overleaf, Word, Zenodo, ResearchGate",
        policy: "Follow open access and copyright regulations.",
        full_text: "# Publishing and Access Management\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 7,
        title: "Preservation of Data",
        description: "Long-term storage of datasets and documentation.",
        storage: "Institutional repositories, cloud archives, GitHub",
        policy: "Ensure data integrity and compliance with retention policies.",
        full_text: "# Preservation of Data\n Lorem ipsum dolor sit amet...",
    },
    Phase {
        id: 8,
        title: "Verification and Data-reuse",
        description: "Verify results, allow for reuse and replication.",
        storage: "Repositories with version control and DOIs",
        policy: "Ensure licenses allow reuse and proper citation.",
        full_text: "# Verification and Reuse of Data\n Lorem ipsum dolor sit amet...",
    },
];

/// The full registry in slice order
pub fn all() -> &'static [Phase] {
    &PHASES
}

/// Look up a phase by its stable id
pub fn by_id(id: u32) -> Result<&'static Phase> {
    PHASES
        .iter()
        .find(|p| p.id == id)
        .ok_or(WheelError::UnknownPhase(id))
}

/// Slice index of the phase with the given id
pub fn index_of(id: u32) -> Result<usize> {
    PHASES
        .iter()
        .position(|p| p.id == id)
        .ok_or(WheelError::UnknownPhase(id))
}
