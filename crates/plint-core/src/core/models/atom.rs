use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Represents a single atom as supplied by the structure parser.
///
/// This is the canonical input record of the engine. Identity fields (`index`,
/// `element`, `position`, `is_ligand`) are always populated; residue fields are
/// meaningful for protein atoms and default to placeholder values for ligand
/// atoms. Annotation fields (`formal_charge`, `is_aromatic`, `bonded`) may be
/// partially absent for degraded input; the feature classifier compensates and
/// records a warning instead of failing.
///
/// Atoms are immutable once built: detectors read them, the classifier derives
/// per-set feature maps from them, and nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Stable 0-based index within the owning atom set (protein or ligand).
    pub index: usize,
    /// Chemical element symbol, normalized to uppercase (e.g. "C", "N", "ZN").
    pub element: String,
    /// The 3-D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Whether this atom belongs to the ligand set.
    pub is_ligand: bool,
    /// Residue sequence number (protein atoms; 0 for ligand atoms).
    #[serde(default)]
    pub residue_id: isize,
    /// Three-letter residue code (protein atoms; empty for ligand atoms).
    #[serde(default)]
    pub residue_name: String,
    /// PDB-style atom name (e.g. "CA", "OD1"; empty for ligand atoms).
    #[serde(default)]
    pub atom_name: String,
    /// Chain identifier; a space when the source carries no chain annotation.
    #[serde(default = "default_chain_id")]
    pub chain_id: char,
    /// Formal charge as annotated by the parser (0 when unknown).
    #[serde(default)]
    pub formal_charge: i8,
    /// Whether the parser flagged this atom as part of an aromatic system.
    #[serde(default)]
    pub is_aromatic: bool,
    /// Indices of covalently bonded atoms within the same set (may be empty
    /// when the source format carries no connectivity).
    #[serde(default)]
    pub bonded: Vec<usize>,
}

fn default_chain_id() -> char {
    ' '
}

impl Atom {
    /// Creates a new `Atom` with default values for all annotation fields.
    ///
    /// The constructor covers the identity contract; residue information,
    /// charges, aromaticity, and bonds can be filled in afterwards by the
    /// parser before the set is handed to the engine.
    ///
    /// # Arguments
    ///
    /// * `index` - Stable 0-based index within the owning set.
    /// * `element` - Chemical element symbol (normalized to uppercase).
    /// * `position` - The 3-D coordinates of the atom.
    /// * `is_ligand` - Whether the atom belongs to the ligand set.
    pub fn new(index: usize, element: &str, position: Point3<f64>, is_ligand: bool) -> Self {
        Self {
            index,
            element: element.trim().to_ascii_uppercase(),
            position,
            is_ligand,
            residue_id: 0,
            residue_name: String::new(),
            atom_name: String::new(),
            chain_id: ' ',
            formal_charge: 0,
            is_aromatic: false,
            bonded: Vec::new(),
        }
    }

    /// Returns true when the atom is a hydrogen (or deuterium).
    pub fn is_hydrogen(&self) -> bool {
        matches!(self.element.as_str(), "H" | "D")
    }
}
