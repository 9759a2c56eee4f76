use crate::core::models::contact::{Contact, ContactKind};
use crate::core::utils::geometry;
use crate::engine::context::DetectionContext;
use itertools::Itertools;
use tracing::{debug, instrument};

// Fixed geometric criteria; only the `pi_stack` toggle is user-visible.
pub const MAX_CENTROID_DIST: f64 = 5.5;
pub const FACE_TO_FACE_MAX_ANGLE: f64 = 30.0;
pub const EDGE_TO_FACE_MIN_ANGLE: f64 = 60.0;

#[instrument(skip_all, name = "pi_stacking_detection")]
pub fn run(ctx: &DetectionContext) -> Vec<Contact> {
    if !ctx.params.pi_stack {
        return Vec::new();
    }

    let mut contacts = Vec::new();
    for (lring, pring) in ctx
        .ligand_features
        .rings
        .iter()
        .cartesian_product(&ctx.protein_features.rings)
    {
        let dist = geometry::distance(&lring.centroid, &pring.centroid);
        if dist > MAX_CENTROID_DIST {
            continue;
        }
        let angle = geometry::axis_angle(&lring.normal, &pring.normal);
        if angle > FACE_TO_FACE_MAX_ANGLE && angle < EDGE_TO_FACE_MIN_ANGLE {
            continue;
        }
        let (Some(&ligand_atom), Some(&protein_atom)) =
            (lring.atoms.iter().min(), pring.atoms.iter().min())
        else {
            continue;
        };
        contacts.push(ctx.contact(
            ContactKind::PiStacking,
            ligand_atom,
            protein_atom,
            dist,
            Some(angle),
        ));
    }

    debug!(count = contacts.len(), "Pi-stacking detection complete.");
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::params::InteractionParams;
    use crate::engine::detectors::testutil::Fixture;
    use nalgebra::{Point3, Rotation3, Vector3};

    /// A benzene-like hexagon centered at `center`, rotated about the x axis
    /// by `tilt_degrees` (0° keeps the ring in the xy plane).
    fn hexagon(center: [f64; 3], tilt_degrees: f64, is_ligand: bool) -> Vec<Atom> {
        let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), tilt_degrees.to_radians());
        let center = Point3::from(center);
        let mut atoms: Vec<Atom> = (0..6)
            .map(|i| {
                let theta = std::f64::consts::FRAC_PI_3 * i as f64;
                let local = Vector3::new(1.4 * theta.cos(), 1.4 * theta.sin(), 0.0);
                let mut a = Atom::new(i, "C", center + rot * local, is_ligand);
                a.is_aromatic = true;
                if !is_ligand {
                    a.residue_id = 90;
                    a.residue_name = "PHE".to_string();
                    a.atom_name = format!("C{}", i);
                }
                a
            })
            .collect();
        for i in 0..6 {
            let j = (i + 1) % 6;
            atoms[i].bonded.push(j);
            atoms[j].bonded.push(i);
        }
        atoms
    }

    #[test]
    fn parallel_rings_within_cutoff_stack_face_to_face() {
        let fixture = Fixture::new(
            hexagon([0.0, 0.0, 3.8], 0.0, false),
            hexagon([0.0, 0.0, 0.0], 0.0, true),
            InteractionParams::default(),
        );
        let contacts = run(&fixture.ctx());
        assert_eq!(contacts.len(), 1);
        let c = &contacts[0];
        assert_eq!(c.kind, ContactKind::PiStacking);
        assert!((c.distance - 3.8).abs() < 1e-9);
        assert!(c.angle.unwrap() < 1e-6);
        assert_eq!(c.protein_resn, "PHE");
    }

    #[test]
    fn perpendicular_rings_stack_edge_to_face() {
        let fixture = Fixture::new(
            hexagon([0.0, 0.0, 4.8], 90.0, false),
            hexagon([0.0, 0.0, 0.0], 0.0, true),
            InteractionParams::default(),
        );
        let contacts = run(&fixture.ctx());
        assert_eq!(contacts.len(), 1);
        assert!((contacts[0].angle.unwrap() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn intermediate_tilt_is_rejected() {
        let fixture = Fixture::new(
            hexagon([0.0, 0.0, 4.0], 45.0, false),
            hexagon([0.0, 0.0, 0.0], 0.0, true),
            InteractionParams::default(),
        );
        assert!(run(&fixture.ctx()).is_empty());
    }

    #[test]
    fn distant_centroids_are_rejected() {
        let fixture = Fixture::new(
            hexagon([0.0, 0.0, 5.6], 0.0, false),
            hexagon([0.0, 0.0, 0.0], 0.0, true),
            InteractionParams::default(),
        );
        assert!(run(&fixture.ctx()).is_empty());
    }

    #[test]
    fn disabled_flag_suppresses_all_stacking() {
        let fixture = Fixture::new(
            hexagon([0.0, 0.0, 3.8], 0.0, false),
            hexagon([0.0, 0.0, 0.0], 0.0, true),
            InteractionParams {
                pi_stack: false,
                ..Default::default()
            },
        );
        assert!(run(&fixture.ctx()).is_empty());
    }

    #[test]
    fn sets_without_rings_yield_nothing() {
        let protein = vec![Atom::new(0, "C", Point3::origin(), false)];
        let ligand = vec![Atom::new(0, "C", Point3::new(3.0, 0.0, 0.0), true)];
        let fixture = Fixture::new(protein, ligand, InteractionParams::default());
        assert!(run(&fixture.ctx()).is_empty());
    }
}
