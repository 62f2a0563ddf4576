use std::collections::HashMap;

use nalgebra::DMatrix;

use super::adjacency::neighbors_for;
use super::Face;

/// Directed edge list of the adjacency restricted to `vertex_inds`.
///
/// Both orderings of every undirected edge appear exactly once, so the
/// result has twice as many entries as the restricted mesh has edges.
#[must_use]
pub fn edges(vertex_inds: &[u32], faces: &[Face]) -> Vec<[u32; 2]> {
    let adj = neighbors_for(vertex_inds, faces);
    let mut out = Vec::with_capacity(adj.iter().map(Vec::len).sum());
    for (row, &v) in adj.iter().zip(vertex_inds) {
        for &n in row {
            out.push([v, n]);
        }
    }
    out
}

/// Dense 0/1 adjacency matrix of the mesh restricted to `vertex_inds`,
/// indexed by position within `vertex_inds`. Symmetric with a zero
/// diagonal.
///
/// This is a diagnostic view over the same face data as [`neighbors_for`]
/// and stays consistent with it by construction; the ragged lists remain
/// the authoritative representation.
#[must_use]
pub fn vertex_adjacency_matrix(vertex_inds: &[u32], faces: &[Face]) -> DMatrix<u8> {
    let adj = neighbors_for(vertex_inds, faces);
    let pos: HashMap<u32, usize> = vertex_inds
        .iter()
        .enumerate()
        .map(|(k, &v)| (v, k))
        .collect();
    let m = vertex_inds.len();
    let mut matrix = DMatrix::zeros(m, m);
    for (k, row) in adj.iter().enumerate() {
        for n in row {
            if let Some(&j) = pos.get(n) {
                matrix[(k, j)] = 1;
            }
        }
    }
    matrix
}
