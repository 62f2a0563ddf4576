pub mod adjacency;
pub mod edges;
pub mod hemisphere;
pub mod peaks;

pub use adjacency::{faces_for_vertices, neighbors, neighbors_for};
pub use edges::{edges, vertex_adjacency_matrix};
pub use hemisphere::{peak_finding_compatible, sym_hemisphere, Axis};
pub use peaks::{argmax_from_adjacency, argmax_packed, PackedAdjacency};

use crate::error::{MeshError, Result};

/// A triangular face: three distinct vertex indices.
///
/// No orientation is assumed; the triple is treated as unordered.
pub type Face = [u32; 3];

/// Validates a face list against a declared vertex count.
///
/// The adjacency builders assume validated input and do not repeat these
/// checks; callers that own the vertex array run this once up front.
///
/// # Errors
///
/// Returns [`MeshError::FaceOutOfRange`] if a face references a vertex index
/// at or beyond `n_vertices`, and [`MeshError::DegenerateFace`] if a face
/// does not have three distinct vertices.
pub fn check_faces(n_vertices: usize, faces: &[Face]) -> Result<()> {
    for (f, face) in faces.iter().enumerate() {
        for &v in face {
            if v as usize >= n_vertices {
                return Err(MeshError::FaceOutOfRange {
                    face: f,
                    vertex: v,
                    n_vertices,
                }
                .into());
            }
        }
        if face[0] == face[1] || face[0] == face[2] {
            return Err(MeshError::DegenerateFace {
                face: f,
                vertex: face[0],
            }
            .into());
        }
        if face[1] == face[2] {
            return Err(MeshError::DegenerateFace {
                face: f,
                vertex: face[1],
            }
            .into());
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::fixtures::{bipyramid, icosahedron};
    use super::*;
    use crate::error::SpherePeakError;

    #[test]
    fn check_faces_accepts_fixtures() {
        let (vertices, faces) = bipyramid();
        assert!(check_faces(vertices.len(), &faces).is_ok());
        let (vertices, faces) = icosahedron();
        assert!(check_faces(vertices.len(), &faces).is_ok());
    }

    #[test]
    fn check_faces_rejects_out_of_range() {
        let err = check_faces(3, &[[0, 1, 2], [1, 2, 3]]);
        assert!(matches!(
            err,
            Err(SpherePeakError::Mesh(MeshError::FaceOutOfRange {
                face: 1,
                vertex: 3,
                n_vertices: 3
            }))
        ));
    }

    #[test]
    fn check_faces_rejects_repeated_vertex() {
        let err = check_faces(4, &[[0, 1, 1]]);
        assert!(matches!(
            err,
            Err(SpherePeakError::Mesh(MeshError::DegenerateFace {
                face: 0,
                vertex: 1
            }))
        ));
        let err = check_faces(4, &[[2, 1, 2]]);
        assert!(matches!(
            err,
            Err(SpherePeakError::Mesh(MeshError::DegenerateFace {
                face: 0,
                vertex: 2
            }))
        ));
    }

    #[test]
    fn icosahedron_is_unit_and_antipodal() {
        let (vertices, faces) = icosahedron();
        assert_eq!(vertices.len(), 12);
        assert_eq!(faces.len(), 20);
        for v in &vertices {
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
        }
        for i in 0..6 {
            assert!(crate::math::is_antipode(&vertices[i], &vertices[i + 6]));
        }
    }
}
