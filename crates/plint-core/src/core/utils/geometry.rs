use nalgebra::{Point3, Vector3};

const COLLINEARITY_EPS: f64 = 1e-9;

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

// Angle at `vertex` formed by a-vertex-b, in degrees. The cosine is clamped
// to [-1, 1] so drift on nearly collinear inputs cannot produce NaN.
pub fn angle_at_vertex(a: &Point3<f64>, vertex: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let va = (a - vertex).normalize();
    let vb = (b - vertex).normalize();
    va.dot(&vb).clamp(-1.0, 1.0).acos().to_degrees()
}

pub fn centroid(positions: &[Point3<f64>]) -> Option<Point3<f64>> {
    if positions.is_empty() {
        return None;
    }
    let sum = positions
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / positions.len() as f64))
}

// The normal's sign is arbitrary; callers must treat it as an undirected
// axis.
pub fn ring_normal(positions: &[Point3<f64>], centroid: &Point3<f64>) -> Option<Vector3<f64>> {
    if positions.len() < 3 {
        return None;
    }
    let first = positions[0] - centroid;
    for p in &positions[1..] {
        let cross = first.cross(&(p - centroid));
        if cross.norm() > COLLINEARITY_EPS {
            return Some(cross.normalize());
        }
    }
    None
}

// Angle between two undirected axes, folded into [0, 90] degrees: a vector
// angle past 90 describes the same relative orientation as its supplement.
pub fn axis_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let cos = (a.normalize().dot(&b.normalize())).abs().clamp(0.0, 1.0);
    cos.acos().to_degrees()
}
