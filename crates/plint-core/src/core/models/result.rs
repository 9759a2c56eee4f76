use crate::core::models::contact::Contact;
use serde::{Deserialize, Serialize};

/// Atom and bond counts of the analyzed ligand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LigandSummary {
    pub atoms: usize,
    pub bonds: usize,
}

/// Chain and residue counts of the analyzed protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinSummary {
    pub chains: usize,
    pub residues: usize,
}

/// The complete output of one `detect` invocation.
///
/// `contacts` is sorted by the stable composite key
/// `(type name, protein_resi, protein_atom, ligand_atom)` and free of exact
/// duplicates; `warnings` preserves first-seen order and is deduplicated by
/// message text. The value is a pure, serializable record; the presentation
/// and transport layers consume it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub contacts: Vec<Contact>,
    pub ligand_summary: LigandSummary,
    pub protein_summary: ProteinSummary,
    pub warnings: Vec<String>,
}
