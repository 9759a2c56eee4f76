use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid ranges for each configurable threshold, in Angstroms or degrees.
pub const HBOND_DIST_RANGE: (f64, f64) = (0.5, 10.0);
pub const HBOND_ANGLE_RANGE: (f64, f64) = (90.0, 180.0);
pub const HYDROPHOBIC_DIST_RANGE: (f64, f64) = (1.0, 10.0);
pub const SALT_BRIDGE_DIST_RANGE: (f64, f64) = (1.0, 10.0);
pub const METAL_DIST_RANGE: (f64, f64) = (1.0, 5.0);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("parameter '{name}' is not a finite number: {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Numeric thresholds controlling the per-type detectors.
///
/// Every distance is in Angstroms, the hydrogen-bond angle in degrees. Defaults
/// match common interaction-profiling practice. Values are not used directly by
/// the detectors: [`InteractionParams::validated`] clamps them into their valid
/// ranges first, so a detector never observes an out-of-range threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionParams {
    /// Maximum donor-acceptor distance for hydrogen bonds.
    pub hbond_max_dist: f64,
    /// Minimum donor-hydrogen-acceptor angle for hydrogen bonds.
    pub hbond_min_angle: f64,
    /// Maximum carbon-carbon distance for hydrophobic contacts.
    pub hydrophobic_max_dist: f64,
    /// Enables or disables π-π stacking detection entirely.
    pub pi_stack: bool,
    /// Maximum centroid-centroid distance between opposite charged groups.
    pub salt_bridge_max_dist: f64,
    /// Maximum distance between a metal ion and a coordinating O/N/S atom.
    pub metal_max_dist: f64,
}

impl Default for InteractionParams {
    fn default() -> Self {
        Self {
            hbond_max_dist: 3.5,
            hbond_min_angle: 120.0,
            hydrophobic_max_dist: 4.0,
            pi_stack: true,
            salt_bridge_max_dist: 4.0,
            metal_max_dist: 2.8,
        }
    }
}

impl InteractionParams {
    /// Validates and clamps all thresholds into their recognized ranges.
    ///
    /// Out-of-range but finite values are clamped silently; non-finite values
    /// (NaN, ±inf) cannot be clamped meaningfully and are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::NotFinite`] naming the offending parameter when
    /// any threshold is NaN or infinite.
    pub fn validated(&self) -> Result<Self, ParamsError> {
        Ok(Self {
            hbond_max_dist: clamp("hbond_max_dist", self.hbond_max_dist, HBOND_DIST_RANGE)?,
            hbond_min_angle: clamp("hbond_min_angle", self.hbond_min_angle, HBOND_ANGLE_RANGE)?,
            hydrophobic_max_dist: clamp(
                "hydrophobic_max_dist",
                self.hydrophobic_max_dist,
                HYDROPHOBIC_DIST_RANGE,
            )?,
            pi_stack: self.pi_stack,
            salt_bridge_max_dist: clamp(
                "salt_bridge_max_dist",
                self.salt_bridge_max_dist,
                SALT_BRIDGE_DIST_RANGE,
            )?,
            metal_max_dist: clamp("metal_max_dist", self.metal_max_dist, METAL_DIST_RANGE)?,
        })
    }

    /// The largest configured distance cutoff, used as the spatial-index cell
    /// size so that one 27-cell neighborhood covers every grid-backed
    /// detector's radius.
    pub fn max_cutoff(&self) -> f64 {
        self.hbond_max_dist
            .max(self.hydrophobic_max_dist)
            .max(self.salt_bridge_max_dist)
            .max(self.metal_max_dist)
    }
}

fn clamp(name: &'static str, value: f64, range: (f64, f64)) -> Result<f64, ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NotFinite { name, value });
    }
    Ok(value.clamp(range.0, range.1))
}
