//! Feature classification: derives, once per analysis, which atoms or groups
//! act as hydrogen-bond donors/acceptors, hydrophobic carbons, charged-group
//! members, aromatic rings, or metal ions.
//!
//! Classification is a pure function of the input atom set. Degraded input
//! (missing hydrogens, missing bond annotation) lowers precision for the
//! affected features and records a warning; it never fails.
//!
//! The rule table, kept unit-testable independent of geometry:
//!
//! - acceptor: element O or N, formal charge <= 0, fewer than four bonded
//!   neighbors (lone-pair capacity)
//! - donor: O or N bonded to at least one hydrogen; when no usable hydrogen
//!   position exists (the set lacks hydrogens, its hydrogens carry no bond
//!   annotation, or the atom itself has no connectivity) the atom becomes a
//!   donor candidate without hydrogens and a warning is recorded
//! - hydrophobic carbon: element C with no bonded O/N/S/P; aromatic ring
//!   carbons remain eligible
//! - charged groups: protein side from the Asp/Glu and Lys/Arg/His residue
//!   tables (His only with an annotated positive charge); ligand side from a
//!   motif ladder over bonded-neighbor patterns with annotated formal
//!   charges as the final fallback
//! - metal: element in the recognized metal-ion set
//! - aromatic rings: aromatic-flagged atoms grouped into 5- and 6-cycles by
//!   connectivity, each with a stable id

use crate::core::models::atom::Atom;
use crate::core::models::ring::Ring;
use crate::core::utils::elements;
use crate::core::utils::geometry;
use nalgebra::Point3;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

// Picks the warning texts and the charged-group rule set (residue tables
// vs. small-molecule motifs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetLabel {
    Protein,
    Ligand,
}

impl SetLabel {
    fn as_str(&self) -> &'static str {
        match self {
            SetLabel::Protein => "protein",
            SetLabel::Ligand => "ligand",
        }
    }
}

// An empty `hydrogens` list marks a donor candidate whose hydrogen positions
// are unknown; the detector then skips the angle check for this donor.
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    pub atom: usize,
    pub hydrogens: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargedGroup {
    // -1 anionic, +1 cationic.
    pub sign: i8,
    pub atoms: Vec<usize>,
    pub centroid: Point3<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Features {
    pub donors: Vec<Donor>,
    pub acceptors: Vec<usize>,
    pub hydrophobic_carbons: Vec<usize>,
    pub charged_groups: Vec<ChargedGroup>,
    pub rings: Vec<Ring>,
    pub metals: Vec<usize>,
    pub warnings: Vec<String>,
}

pub fn classify(atoms: &[Atom], label: SetLabel) -> Features {
    let mut features = Features::default();

    let has_hydrogens = atoms.iter().any(|a| a.is_hydrogen());
    let has_bonds = atoms.len() < 2 || atoms.iter().any(|a| !a.bonded.is_empty());
    let hydrogens_attached = atoms
        .iter()
        .any(|a| !a.is_hydrogen() && a.bonded.iter().any(|&j| atoms[j].is_hydrogen()));

    if !has_bonds {
        features.warnings.push(format!(
            "{} has no bond information; donor, hydrophobic, and charge perception degraded",
            label.as_str()
        ));
    }
    if !has_hydrogens {
        features.warnings.push(format!(
            "{} has no hydrogens; hydrogen-bond angles approximated",
            label.as_str()
        ));
    } else if has_bonds && !hydrogens_attached {
        features.warnings.push(format!(
            "{} hydrogens carry no bond annotation; hydrogen-bond angles approximated",
            label.as_str()
        ));
    }

    let hydrogens_known = has_hydrogens && has_bonds && hydrogens_attached;
    let mut unbonded_polar = false;

    for atom in atoms {
        if atom.is_hydrogen() {
            continue;
        }
        if elements::is_metal(&atom.element) {
            features.metals.push(atom.index);
            continue;
        }

        let polar = matches!(atom.element.as_str(), "O" | "N");
        if polar {
            if atom.formal_charge <= 0 && atom.bonded.len() < 4 {
                features.acceptors.push(atom.index);
            }
            if hydrogens_known {
                let hs: Vec<usize> = atom
                    .bonded
                    .iter()
                    .copied()
                    .filter(|&j| atoms[j].is_hydrogen())
                    .collect();
                if !hs.is_empty() {
                    features.donors.push(Donor {
                        atom: atom.index,
                        hydrogens: hs,
                    });
                } else if atom.bonded.is_empty() {
                    // Connectivity unknown for this atom alone; fall back to
                    // the distance-only donor path instead of dropping it.
                    unbonded_polar = true;
                    features.donors.push(Donor {
                        atom: atom.index,
                        hydrogens: Vec::new(),
                    });
                }
            } else {
                features.donors.push(Donor {
                    atom: atom.index,
                    hydrogens: Vec::new(),
                });
            }
        }

        if atom.element == "C"
            && atom
                .bonded
                .iter()
                .all(|&j| !elements::is_heteroatom(&atoms[j].element))
        {
            features.hydrophobic_carbons.push(atom.index);
        }
    }

    if unbonded_polar {
        features.warnings.push(format!(
            "{} has polar atoms without bond annotation; hydrogen-bond angles approximated",
            label.as_str()
        ));
    }

    features.rings = aromatic_rings(atoms);

    features.charged_groups = match label {
        SetLabel::Protein => protein_charged_groups(atoms),
        SetLabel::Ligand => ligand_charged_groups(atoms, has_bonds),
    };

    debug!(
        set = label.as_str(),
        donors = features.donors.len(),
        acceptors = features.acceptors.len(),
        hydrophobic = features.hydrophobic_carbons.len(),
        charged_groups = features.charged_groups.len(),
        rings = features.rings.len(),
        metals = features.metals.len(),
        "Feature classification complete."
    );

    features
}

// Bounded depth-first search over the aromatic subgraph, anchored at the
// smallest member index of each cycle so every ring is found exactly once.
// Fused systems yield one ring per elementary 5/6-cycle.
fn aromatic_rings(atoms: &[Atom]) -> Vec<Ring> {
    let mut rings = Vec::new();
    let mut seen: BTreeSet<Vec<usize>> = BTreeSet::new();

    for start in 0..atoms.len() {
        if !atoms[start].is_aromatic || atoms[start].is_hydrogen() {
            continue;
        }
        let mut path = vec![start];
        walk_cycles(atoms, start, &mut path, &mut seen, &mut rings);
    }

    rings
}

fn walk_cycles(
    atoms: &[Atom],
    start: usize,
    path: &mut Vec<usize>,
    seen: &mut BTreeSet<Vec<usize>>,
    rings: &mut Vec<Ring>,
) {
    let Some(&last) = path.last() else {
        return;
    };
    for &nb in &atoms[last].bonded {
        if nb >= atoms.len() || !atoms[nb].is_aromatic || atoms[nb].is_hydrogen() {
            continue;
        }
        if nb == start && path.len() >= 5 {
            let mut key = path.clone();
            key.sort_unstable();
            if seen.insert(key) {
                if let Some(ring) = Ring::from_members(rings.len(), path.clone(), atoms) {
                    rings.push(ring);
                }
            }
        } else if nb > start && path.len() < 6 && !path.contains(&nb) {
            path.push(nb);
            walk_cycles(atoms, start, path, seen, rings);
            path.pop();
        }
    }
}

fn heavy_degree(atom: &Atom, atoms: &[Atom]) -> usize {
    atom.bonded
        .iter()
        .filter(|&&j| !atoms[j].is_hydrogen())
        .count()
}

fn protein_charged_groups(atoms: &[Atom]) -> Vec<ChargedGroup> {
    let mut by_residue: BTreeMap<(char, isize), Vec<usize>> = BTreeMap::new();
    for atom in atoms {
        by_residue
            .entry((atom.chain_id, atom.residue_id))
            .or_default()
            .push(atom.index);
    }

    let mut groups = Vec::new();
    for members in by_residue.values() {
        let resn = atoms[members[0]].residue_name.as_str();

        if let Some(names) = elements::ANIONIC_RESIDUE_ATOMS.get(resn) {
            let group: Vec<usize> = members
                .iter()
                .copied()
                .filter(|&i| names.contains(&atoms[i].atom_name.as_str()))
                .collect();
            if let Some(g) = make_group(-1, group, atoms) {
                groups.push(g);
            }
        }

        if let Some(names) = elements::CATIONIC_RESIDUE_ATOMS.get(resn) {
            let group: Vec<usize> = members
                .iter()
                .copied()
                .filter(|&i| names.contains(&atoms[i].atom_name.as_str()))
                .collect();
            let charged = !elements::requires_charge_annotation(resn)
                || group.iter().any(|&i| atoms[i].formal_charge > 0);
            if charged {
                if let Some(g) = make_group(1, group, atoms) {
                    groups.push(g);
                }
            }
        }
    }
    groups
}

// Motif ladder over bonded-neighbor patterns, with annotated formal charges
// as the final fallback. Each atom joins at most one group.
fn ligand_charged_groups(atoms: &[Atom], has_bonds: bool) -> Vec<ChargedGroup> {
    let mut used = vec![false; atoms.len()];
    let mut groups = Vec::new();

    if has_bonds {
        // Carboxylate: a carbon bearing exactly two terminal oxygens.
        for atom in atoms {
            if atom.element != "C" {
                continue;
            }
            let terminal_o: Vec<usize> = atom
                .bonded
                .iter()
                .copied()
                .filter(|&j| atoms[j].element == "O" && heavy_degree(&atoms[j], atoms) == 1)
                .collect();
            if terminal_o.len() == 2 && terminal_o.iter().all(|&j| !used[j]) {
                claim(&mut used, &terminal_o);
                if let Some(g) = make_group(-1, terminal_o, atoms) {
                    groups.push(g);
                }
            }
        }

        // Phosphate / sulfonate: P or S bearing three or more oxygens; the
        // terminal ones carry the charge.
        for atom in atoms {
            if !matches!(atom.element.as_str(), "P" | "S") {
                continue;
            }
            let oxygens: Vec<usize> = atom
                .bonded
                .iter()
                .copied()
                .filter(|&j| atoms[j].element == "O")
                .collect();
            if oxygens.len() < 3 {
                continue;
            }
            let terminal: Vec<usize> = oxygens
                .into_iter()
                .filter(|&j| heavy_degree(&atoms[j], atoms) == 1 && !used[j])
                .collect();
            if !terminal.is_empty() {
                claim(&mut used, &terminal);
                if let Some(g) = make_group(-1, terminal, atoms) {
                    groups.push(g);
                }
            }
        }

        // Guanidinium / amidinium: a carbon bonded to two or more nitrogens
        // whose remaining neighbors are all carbon or hydrogen.
        for atom in atoms {
            if atom.element != "C" {
                continue;
            }
            let ns: Vec<usize> = atom
                .bonded
                .iter()
                .copied()
                .filter(|&j| {
                    atoms[j].element == "N"
                        && !used[j]
                        && atoms[j]
                            .bonded
                            .iter()
                            .all(|&k| matches!(atoms[k].element.as_str(), "C" | "H" | "D"))
                })
                .collect();
            if ns.len() >= 2 {
                claim(&mut used, &ns);
                if let Some(g) = make_group(1, ns, atoms) {
                    groups.push(g);
                }
            }
        }

        // Amine: a non-aromatic nitrogen with only C/H neighbors, at most
        // three heavy neighbors, and no adjacent carbonyl (excludes amides).
        for atom in atoms {
            if atom.element != "N" || used[atom.index] || atom.is_aromatic {
                continue;
            }
            let charged = atom.formal_charge > 0;
            let degree = heavy_degree(atom, atoms);
            let plain_neighbors = !atom.bonded.is_empty()
                && atom
                    .bonded
                    .iter()
                    .all(|&j| matches!(atoms[j].element.as_str(), "C" | "H" | "D"));
            if charged || (plain_neighbors && degree <= 3 && !adjacent_to_carbonyl(atom, atoms)) {
                claim(&mut used, &[atom.index]);
                if let Some(g) = make_group(1, vec![atom.index], atoms) {
                    groups.push(g);
                }
            }
        }
    }

    // Fallback: any remaining atom with an annotated formal charge.
    for atom in atoms {
        if atom.formal_charge != 0 && !used[atom.index] && !atom.is_hydrogen() {
            let sign = atom.formal_charge.signum();
            claim(&mut used, &[atom.index]);
            if let Some(g) = make_group(sign, vec![atom.index], atoms) {
                groups.push(g);
            }
        }
    }

    groups
}

fn adjacent_to_carbonyl(atom: &Atom, atoms: &[Atom]) -> bool {
    atom.bonded.iter().any(|&j| {
        atoms[j].element == "C"
            && atoms[j]
                .bonded
                .iter()
                .any(|&k| atoms[k].element == "O" && heavy_degree(&atoms[k], atoms) == 1)
    })
}

fn claim(used: &mut [bool], members: &[usize]) {
    for &i in members {
        used[i] = true;
    }
}

fn make_group(sign: i8, members: Vec<usize>, atoms: &[Atom]) -> Option<ChargedGroup> {
    let positions: Vec<Point3<f64>> = members.iter().map(|&i| atoms[i].position).collect();
    let centroid = geometry::centroid(&positions)?;
    Some(ChargedGroup {
        sign,
        atoms: members,
        centroid,
    })
}
