/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for matching antipodal unit-sphere coordinates.
pub const ANTIPODE_TOLERANCE: f64 = 1e-8;

/// Returns `true` if `a` and `b` are antipodal within [`ANTIPODE_TOLERANCE`].
#[must_use]
pub fn is_antipode(a: &Vector3, b: &Vector3) -> bool {
    (a + b).norm() <= ANTIPODE_TOLERANCE
}
