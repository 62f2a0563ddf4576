use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{ArgumentError, MeshError, Result};
use crate::math::{is_antipode, Vector3, ANTIPODE_TOLERANCE};

/// Axis of the plane splitting the sphere into hemispheres.
///
/// The sign picks which side of the plane survives hemisphere reduction:
/// `Axis::Z` keeps the `+z` member of each antipodal pair, `Axis::NegZ`
/// the `-z` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Keep the `+x` side.
    X,
    /// Keep the `+y` side.
    Y,
    /// Keep the `+z` side.
    #[default]
    Z,
    /// Keep the `-x` side.
    NegX,
    /// Keep the `-y` side.
    NegY,
    /// Keep the `-z` side.
    NegZ,
}

impl Axis {
    /// Signed coordinate of `v` along this axis.
    fn coord(self, v: &Vector3) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
            Self::NegX => -v.x,
            Self::NegY => -v.y,
            Self::NegZ => -v.z,
        }
    }

    /// Next axis in cyclic order `x -> y -> z -> x`, keeping the sign.
    fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
            Self::NegX => Self::NegY,
            Self::NegY => Self::NegZ,
            Self::NegZ => Self::NegX,
        }
    }
}

impl FromStr for Axis {
    type Err = ArgumentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "-x" => Ok(Self::NegX),
            "-y" => Ok(Self::NegY),
            "-z" => Ok(Self::NegZ),
            other => Err(ArgumentError::UnknownAxis(other.to_owned())),
        }
    }
}

/// Selects one vertex from each antipodal pair: the member on the positive
/// side of the splitting plane normal to `axis`.
///
/// Pairs lying on the plane (axis coordinate zero within tolerance) are
/// decided by the next axis in cyclic order `x -> y -> z -> x` with the
/// same sign convention, then the third axis, and finally the
/// lower-indexed member wins. The rule is deterministic: the same input
/// always yields the same set.
///
/// The returned indices are ascending and exactly half the vertex count.
/// For a peak-finding-compatible ordering the result is `0..n/2`.
///
/// # Errors
///
/// Returns [`MeshError::OddVertexCount`] for an odd number of vertices and
/// [`MeshError::MissingAntipode`] when a vertex has no partner within
/// tolerance.
pub fn sym_hemisphere(vertices: &[Vector3], axis: Axis) -> Result<Vec<u32>> {
    let pairs = antipodal_pairs(vertices)?;
    let mut kept: Vec<u32> = pairs
        .iter()
        .map(|&[i, j]| {
            if wins(&vertices[i as usize], &vertices[j as usize], axis) {
                i
            } else {
                j
            }
        })
        .collect();
    kept.sort_unstable();
    Ok(kept)
}

/// Reports whether the vertex ordering supports the fast hemisphere
/// reduction path: `Ok(true)` iff [`sym_hemisphere`] about `+z` yields the
/// canonical first-half range `0..n/2`.
///
/// Order matters, not just set membership; reversing a compatible vertex
/// array reports `Ok(false)`.
///
/// # Errors
///
/// Propagates [`MeshError`] when the mesh cannot be hemisphere-split at
/// all. An incompatible ordering is a query result, not an error.
pub fn peak_finding_compatible(vertices: &[Vector3]) -> Result<bool> {
    let inds = sym_hemisphere(vertices, Axis::Z)?;
    Ok(inds.iter().enumerate().all(|(k, &v)| v as usize == k))
}

/// `true` when `a` beats its antipode `b` for the hemisphere slot.
fn wins(a: &Vector3, b: &Vector3, axis: Axis) -> bool {
    let mut ax = axis;
    for _ in 0..3 {
        let ca = ax.coord(a);
        let cb = ax.coord(b);
        if (ca - cb).abs() > ANTIPODE_TOLERANCE {
            return ca > cb;
        }
        ax = ax.next();
    }
    // coincident on every axis within tolerance; lower index wins
    true
}

/// Grid cell edge for the antipode hash join. Points within
/// [`ANTIPODE_TOLERANCE`] of each other land in the same or an adjacent
/// cell.
const CELL: f64 = ANTIPODE_TOLERANCE;

#[allow(clippy::cast_possible_truncation)]
fn cell_of(v: &Vector3) -> [i64; 3] {
    [
        (v.x / CELL).round() as i64,
        (v.y / CELL).round() as i64,
        (v.z / CELL).round() as i64,
    ]
}

/// Partitions `vertices` into antipodal index pairs, each `[lower, upper]`,
/// ordered by their lower index.
///
/// Matching is a hash join on tolerance-quantized coordinates; the
/// neighboring cells of each probe are scanned so a partner within
/// tolerance of a cell boundary is still found. Linear in the vertex count.
#[allow(clippy::cast_possible_truncation)]
fn antipodal_pairs(vertices: &[Vector3]) -> Result<Vec<[u32; 2]>> {
    let n = vertices.len();
    if n % 2 != 0 {
        return Err(MeshError::OddVertexCount(n).into());
    }
    let mut cells: HashMap<[i64; 3], Vec<u32>> = HashMap::with_capacity(n);
    for (i, v) in vertices.iter().enumerate() {
        cells.entry(cell_of(v)).or_default().push(i as u32);
    }
    let mut paired = vec![false; n];
    let mut pairs = Vec::with_capacity(n / 2);
    for (i, v) in vertices.iter().enumerate() {
        if paired[i] {
            continue;
        }
        let probe = cell_of(&-v);
        let mut partner = None;
        'search: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = [probe[0] + dx, probe[1] + dy, probe[2] + dz];
                    let Some(bucket) = cells.get(&key) else {
                        continue;
                    };
                    for &j in bucket {
                        if j as usize != i
                            && !paired[j as usize]
                            && is_antipode(v, &vertices[j as usize])
                        {
                            partner = Some(j);
                            break 'search;
                        }
                    }
                }
            }
        }
        let Some(j) = partner else {
            return Err(MeshError::MissingAntipode(i).into());
        };
        paired[i] = true;
        paired[j as usize] = true;
        pairs.push([i as u32, j]);
    }
    Ok(pairs)
}
