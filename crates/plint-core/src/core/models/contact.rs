use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The interaction type of a detected contact.
///
/// The serialized names (`HBOND`, `HYDROPHOBIC`, `PI-PI`, `SALT_BRIDGE`,
/// `METAL`) are the canonical wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContactKind {
    #[serde(rename = "HBOND")]
    HydrogenBond,
    #[serde(rename = "HYDROPHOBIC")]
    Hydrophobic,
    #[serde(rename = "PI-PI")]
    PiStacking,
    #[serde(rename = "SALT_BRIDGE")]
    SaltBridge,
    #[serde(rename = "METAL")]
    Metal,
}

impl ContactKind {
    /// The canonical wire name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ContactKind::HydrogenBond => "HBOND",
            ContactKind::Hydrophobic => "HYDROPHOBIC",
            ContactKind::PiStacking => "PI-PI",
            ContactKind::SaltBridge => "SALT_BRIDGE",
            ContactKind::Metal => "METAL",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single typed protein-ligand contact with its geometric evidence.
///
/// Contacts are pure values: once produced by a detector and normalized by the
/// aggregator they are never mutated. `distance` (and `angle`, when present)
/// are rounded to two decimal places by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The interaction type.
    #[serde(rename = "type")]
    pub kind: ContactKind,
    /// Index of the participating atom in the ligand set.
    pub ligand_atom: usize,
    /// Residue sequence number of the participating protein residue.
    pub protein_resi: isize,
    /// Three-letter residue code of the participating protein residue.
    pub protein_resn: String,
    /// Name of the participating protein atom.
    pub protein_atom: String,
    /// Contact distance in Angstroms.
    pub distance: f64,
    /// Geometric angle in degrees; present only for HBOND (donor-H-acceptor)
    /// and PI-PI (normal-normal) contacts, and absent for HBOND when the donor
    /// hydrogen position is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl Contact {
    /// Identity key used for deduplication: same type + same atom identities.
    pub fn identity(&self) -> (ContactKind, usize, isize, &str) {
        (
            self.kind,
            self.ligand_atom,
            self.protein_resi,
            self.protein_atom.as_str(),
        )
    }

    /// Stable composite sort key making output order independent of detector
    /// execution order: `(type name, protein_resi, protein_atom, ligand_atom)`.
    pub fn sort_key(&self) -> (&'static str, isize, &str, usize) {
        (
            self.kind.name(),
            self.protein_resi,
            self.protein_atom.as_str(),
            self.ligand_atom,
        )
    }
}

impl Eq for Contact {}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
