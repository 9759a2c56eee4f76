use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::collections::HashMap;

// Below this many indexed atoms a brute-force scan beats the grid overhead.
const BRUTE_FORCE_THRESHOLD: usize = 32;

// Cubical cells sized to the largest configured cutoff, so a radius query
// (radius <= cell size) visits at most the 27-cell neighborhood. The grid
// only prunes; detectors apply the exact geometric test themselves.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
    positions: Vec<Point3<f64>>,
    brute_force: bool,
}

impl SpatialGrid {
    pub fn build(atoms: &[Atom], cell_size: f64) -> Self {
        let positions: Vec<Point3<f64>> = atoms.iter().map(|a| a.position).collect();
        let brute_force = atoms.len() < BRUTE_FORCE_THRESHOLD;

        let mut cells: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        if !brute_force {
            for (i, pos) in positions.iter().enumerate() {
                cells.entry(cell_key(pos, cell_size)).or_default().push(i);
            }
        }

        Self {
            cell_size,
            cells,
            positions,
            brute_force,
        }
    }

    // Results are unordered; `out` is cleared first.
    pub fn query(&self, center: &Point3<f64>, radius: f64, out: &mut Vec<usize>) {
        debug_assert!(
            radius <= self.cell_size,
            "query radius {radius} exceeds cell size {}",
            self.cell_size
        );
        out.clear();
        let radius_sq = radius * radius;

        if self.brute_force {
            for (i, pos) in self.positions.iter().enumerate() {
                if (pos - center).norm_squared() <= radius_sq {
                    out.push(i);
                }
            }
            return;
        }

        let (cx, cy, cz) = cell_key(center, self.cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(indices) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &i in indices {
                        if (self.positions[i] - center).norm_squared() <= radius_sq {
                            out.push(i);
                        }
                    }
                }
            }
        }
    }
}

fn cell_key(pos: &Point3<f64>, cell_size: f64) -> (i64, i64, i64) {
    (
        (pos.x / cell_size).floor() as i64,
        (pos.y / cell_size).floor() as i64,
        (pos.z / cell_size).floor() as i64,
    )
}
