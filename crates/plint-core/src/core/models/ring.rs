use crate::core::models::atom::Atom;
use crate::core::utils::geometry;
use nalgebra::{Point3, Vector3};

/// An aromatic ring derived from one atom set, used for π-π stacking.
///
/// Rings are recomputed per analysis and never mutated. The `normal` is a unit
/// vector whose sign is arbitrary: consumers must treat it as an undirected
/// axis (compare orientations via [`geometry::axis_angle`], never via a raw
/// dot-product angle).
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Stable id within the owning set, assigned in classification order.
    pub id: usize,
    /// Ordered member atom indices (5 or 6 atoms).
    pub atoms: Vec<usize>,
    /// Arithmetic mean of the member positions.
    pub centroid: Point3<f64>,
    /// Unit normal of the best-fit ring plane (undirected).
    pub normal: Vector3<f64>,
}

impl Ring {
    /// Builds a ring from its member indices, computing centroid and normal.
    ///
    /// Returns `None` for degenerate geometry (fewer than 3 members, or all
    /// edge vectors collinear), which a well-formed aromatic ring never has.
    pub fn from_members(id: usize, members: Vec<usize>, atoms: &[Atom]) -> Option<Self> {
        let positions: Vec<Point3<f64>> = members.iter().map(|&i| atoms[i].position).collect();
        let centroid = geometry::centroid(&positions)?;
        let normal = geometry::ring_normal(&positions, &centroid)?;
        Some(Self {
            id,
            atoms: members,
            centroid,
            normal,
        })
    }
}
