use phf::{Map, Set, phf_map, phf_set};

/// Metal ions recognized for METAL coordination contacts.
static METAL_ELEMENTS: Set<&'static str> = phf_set! {
    "MG", "ZN", "CA", "MN", "FE", "CU", "NA", "K", "NI", "CO",
};

/// Heteroatoms that disqualify a bonded carbon from being hydrophobic.
static HETEROATOMS: Set<&'static str> = phf_set! {
    "O", "N", "S", "P",
};

/// Elements able to coordinate a metal ion.
static METAL_COORDINATORS: Set<&'static str> = phf_set! {
    "O", "N", "S",
};

/// Side-chain atoms forming anionic (carboxylate) groups, per residue.
pub static ANIONIC_RESIDUE_ATOMS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "ASP" => &["OD1", "OD2"],
    "GLU" => &["OE1", "OE2"],
};

/// Side-chain nitrogens forming cationic groups, per residue. HIS nitrogens
/// only count when the parser annotates a positive formal charge (protonated
/// imidazole); LYS and ARG are treated as charged at physiological pH.
pub static CATIONIC_RESIDUE_ATOMS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "LYS" => &["NZ"],
    "ARG" => &["NE", "NH1", "NH2"],
    "HIS" => &["ND1", "NE2"],
};

pub fn is_metal(element: &str) -> bool {
    METAL_ELEMENTS.contains(element.trim())
}

pub fn is_heteroatom(element: &str) -> bool {
    HETEROATOMS.contains(element.trim())
}

pub fn is_metal_coordinator(element: &str) -> bool {
    METAL_COORDINATORS.contains(element.trim())
}

/// Whether a HIS residue requires explicit positive charge annotation to be
/// counted as cationic (LYS/ARG do not).
pub fn requires_charge_annotation(residue_name: &str) -> bool {
    residue_name == "HIS"
}
