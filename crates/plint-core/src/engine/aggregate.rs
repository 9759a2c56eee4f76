use crate::core::models::contact::{Contact, ContactKind};
use crate::core::models::result::{AnalysisResult, LigandSummary, ProteinSummary};
use crate::engine::context::DetectionContext;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

// Output precision for distances and angles, in decimal places.
const EVIDENCE_PRECISION: i32 = 2;

#[instrument(skip_all, name = "aggregation")]
pub fn run(ctx: &DetectionContext, raw: Vec<Contact>) -> AnalysisResult {
    let mut by_identity: HashMap<(ContactKind, usize, isize, String), usize> = HashMap::new();
    let mut contacts: Vec<Contact> = Vec::new();

    for contact in raw {
        let key = (
            contact.kind,
            contact.ligand_atom,
            contact.protein_resi,
            contact.protein_atom.clone(),
        );
        match by_identity.get(&key) {
            None => {
                by_identity.insert(key, contacts.len());
                contacts.push(contact);
            }
            Some(&i) if stronger_evidence(&contact, &contacts[i]) => contacts[i] = contact,
            Some(_) => {}
        }
    }

    for contact in &mut contacts {
        contact.distance = round_evidence(contact.distance);
        contact.angle = contact.angle.map(round_evidence);
    }
    contacts.sort();

    let warnings = collect_warnings(ctx);
    let result = AnalysisResult {
        contacts,
        ligand_summary: ligand_summary(ctx),
        protein_summary: protein_summary(ctx),
        warnings,
    };

    debug!(
        contacts = result.contacts.len(),
        warnings = result.warnings.len(),
        "Aggregation complete."
    );
    result
}

// A known angle outranks an approximated (angle-less) record of the same
// identity; among known angles the larger wins.
fn stronger_evidence(new: &Contact, old: &Contact) -> bool {
    match (new.angle, old.angle) {
        (Some(_), None) => true,
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

fn round_evidence(value: f64) -> f64 {
    let factor = 10f64.powi(EVIDENCE_PRECISION);
    (value * factor).round() / factor
}

fn ligand_summary(ctx: &DetectionContext) -> LigandSummary {
    let mut bond_pairs: HashSet<(usize, usize)> = HashSet::new();
    for atom in ctx.ligand {
        for &j in &atom.bonded {
            bond_pairs.insert((atom.index.min(j), atom.index.max(j)));
        }
    }
    LigandSummary {
        atoms: ctx.ligand.len(),
        bonds: bond_pairs.len(),
    }
}

fn protein_summary(ctx: &DetectionContext) -> ProteinSummary {
    let chains: HashSet<char> = ctx
        .protein
        .iter()
        .map(|a| a.chain_id)
        .filter(|&c| c != ' ')
        .collect();
    let residues: HashSet<(char, isize)> = ctx
        .protein
        .iter()
        .map(|a| (a.chain_id, a.residue_id))
        .collect();
    ProteinSummary {
        // Unannotated chains still represent one chain.
        chains: chains.len().max(1),
        residues: residues.len(),
    }
}

fn collect_warnings(ctx: &DetectionContext) -> Vec<String> {
    let mut seen = HashSet::new();
    ctx.protein_features
        .warnings
        .iter()
        .chain(&ctx.ligand_features.warnings)
        .filter(|w| seen.insert(w.as_str()))
        .cloned()
        .collect()
}
