use crate::core::models::atom::Atom;
use crate::core::models::params::InteractionParams;
use crate::core::models::result::AnalysisResult;
use crate::engine::context::DetectionContext;
use crate::engine::detectors;
use crate::engine::error::EngineError;
use crate::engine::features::{self, SetLabel};
use crate::engine::grid::SpatialGrid;
use tracing::{info, instrument};

/// Runs one complete interaction analysis. Pure and deterministic: identical
/// inputs always yield an identical [`AnalysisResult`], contact order
/// included.
///
/// # Errors
///
/// [`EngineError::InvalidParams`] for a non-finite threshold;
/// [`EngineError::InvalidInput`] for an empty atom set or inconsistent atom
/// indices.
#[instrument(skip_all, name = "detect_workflow")]
pub fn detect(
    protein: &[Atom],
    ligand: &[Atom],
    params: &InteractionParams,
) -> Result<AnalysisResult, EngineError> {
    let params = params.validated()?;
    validate_set(protein, "protein")?;
    validate_set(ligand, "ligand")?;

    info!(
        protein_atoms = protein.len(),
        ligand_atoms = ligand.len(),
        "Starting interaction analysis."
    );

    let protein_features = features::classify(protein, SetLabel::Protein);
    let ligand_features = features::classify(ligand, SetLabel::Ligand);
    let grid = SpatialGrid::build(protein, params.max_cutoff());

    let ctx = DetectionContext {
        protein,
        ligand,
        protein_features: &protein_features,
        ligand_features: &ligand_features,
        grid: &grid,
        params: &params,
    };

    let mut contacts = detectors::hbond::run(&ctx);
    contacts.extend(detectors::hydrophobic::run(&ctx));
    contacts.extend(detectors::pi_stacking::run(&ctx));
    contacts.extend(detectors::salt_bridge::run(&ctx));
    contacts.extend(detectors::metal::run(&ctx));

    let result = crate::engine::aggregate::run(&ctx, contacts);
    info!(
        contacts = result.contacts.len(),
        warnings = result.warnings.len(),
        "Interaction analysis complete."
    );
    Ok(result)
}

fn validate_set(atoms: &[Atom], label: &str) -> Result<(), EngineError> {
    if atoms.is_empty() {
        return Err(EngineError::InvalidInput(format!(
            "{label} atom set is empty"
        )));
    }
    for (i, atom) in atoms.iter().enumerate() {
        if atom.index != i {
            return Err(EngineError::InvalidInput(format!(
                "{label} atom at position {i} carries index {}",
                atom.index
            )));
        }
        if atom.bonded.iter().any(|&j| j >= atoms.len()) {
            return Err(EngineError::InvalidInput(format!(
                "{label} atom {i} references a bonded atom outside the set"
            )));
        }
    }
    Ok(())
}
