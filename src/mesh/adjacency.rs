use std::collections::{BTreeSet, HashSet};

use super::Face;

/// Builds the full adjacency list for every vertex referenced by `faces`.
///
/// Two vertices are neighbors when they share a face edge. The result is
/// indexed by vertex index and covers `0..=max` over all indices appearing
/// in `faces`; each row is ascending and deduplicated.
#[must_use]
pub fn neighbors(faces: &[Face]) -> Vec<Vec<u32>> {
    let n = faces
        .iter()
        .flatten()
        .max()
        .map_or(0, |&m| m as usize + 1);
    let mut sets: Vec<BTreeSet<u32>> = vec![BTreeSet::new(); n];
    for face in faces {
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let i = face[a];
            let j = face[b];
            sets[i as usize].insert(j);
            sets[j as usize].insert(i);
        }
    }
    sets.into_iter()
        .map(|set| set.into_iter().collect())
        .collect()
}

/// Adjacency restricted to `vertex_inds`: one row per subset entry, in
/// subset order, listing only the neighbors that are themselves members of
/// the subset, ascending.
///
/// Restriction only ever drops edges; an edge with either endpoint outside
/// the subset disappears entirely rather than being projected. A subset
/// vertex that appears in no face (or whose every neighbor is outside the
/// subset) gets an empty row.
#[must_use]
pub fn neighbors_for(vertex_inds: &[u32], faces: &[Face]) -> Vec<Vec<u32>> {
    let full = neighbors(faces);
    let subset: HashSet<u32> = vertex_inds.iter().copied().collect();
    vertex_inds
        .iter()
        .map(|&v| {
            full.get(v as usize).map_or_else(Vec::new, |row| {
                row.iter()
                    .copied()
                    .filter(|n| subset.contains(n))
                    .collect()
            })
        })
        .collect()
}

/// Returns the faces whose three vertices all lie in `vertex_inds`,
/// preserving the original face order.
#[must_use]
pub fn faces_for_vertices(vertex_inds: &[u32], faces: &[Face]) -> Vec<Face> {
    let subset: HashSet<u32> = vertex_inds.iter().copied().collect();
    faces
        .iter()
        .copied()
        .filter(|face| face.iter().all(|v| subset.contains(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{bipyramid, icosahedron};
    use super::*;

    #[test]
    fn bipyramid_full_adjacency() {
        let (_, faces) = bipyramid();
        let adj = neighbors(&faces);
        assert_eq!(
            adj,
            vec![
                vec![1, 2, 3, 4],
                vec![0, 2, 4, 5],
                vec![0, 1, 3, 5],
                vec![0, 2, 4, 5],
                vec![0, 1, 3, 5],
                vec![1, 2, 3, 4],
            ]
        );
    }

    #[test]
    fn restricting_to_full_range_is_identity() {
        for (_, faces) in [bipyramid(), icosahedron()] {
            let full = neighbors(&faces);
            let all: Vec<u32> = (0..full.len() as u32).collect();
            assert_eq!(neighbors_for(&all, &faces), full);
        }
    }

    #[test]
    fn restriction_keeps_only_subset_edges() {
        let (_, faces) = bipyramid();
        let adj = neighbors_for(&[0, 1, 2], &faces);
        assert_eq!(adj, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
        // an arbitrary subset works too
        let adj = neighbors_for(&[3, 4, 5], &faces);
        assert_eq!(adj, vec![vec![4, 5], vec![3, 5], vec![3, 4]]);
    }

    #[test]
    fn restriction_only_drops_edges() {
        let (_, faces) = icosahedron();
        let full = neighbors(&faces);
        let subset: Vec<u32> = vec![0, 2, 4, 5, 7, 9];
        let restricted = neighbors_for(&subset, &faces);
        for (row, &v) in restricted.iter().zip(&subset) {
            for n in row {
                assert!(full[v as usize].contains(n));
            }
        }
    }

    #[test]
    fn icosahedron_degree_is_five() {
        let (_, faces) = icosahedron();
        let adj = neighbors(&faces);
        assert_eq!(adj.len(), 12);
        for row in &adj {
            assert_eq!(row.len(), 5);
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let (_, faces) = icosahedron();
        let adj = neighbors(&faces);
        for (v, row) in adj.iter().enumerate() {
            for &n in row {
                assert!(adj[n as usize].contains(&(v as u32)));
            }
        }
    }

    #[test]
    fn faces_for_full_range_returns_all() {
        let (_, faces) = bipyramid();
        let all: Vec<u32> = (0..6).collect();
        assert_eq!(faces_for_vertices(&all, &faces), faces);
    }

    #[test]
    fn faces_for_subset_requires_all_three_vertices() {
        let (_, faces) = bipyramid();
        assert_eq!(faces_for_vertices(&[0, 1, 2], &faces), vec![[0, 1, 2]]);
        // the top cap: apex plus the whole equator
        assert_eq!(
            faces_for_vertices(&[0, 1, 2, 3, 4], &faces),
            faces[..4].to_vec()
        );
        // no face lies entirely within the poles
        assert!(faces_for_vertices(&[0, 5], &faces).is_empty());
    }

    #[test]
    fn empty_inputs() {
        assert!(neighbors(&[]).is_empty());
        assert!(neighbors_for(&[], &bipyramid().1).is_empty());
        assert!(faces_for_vertices(&[], &bipyramid().1).is_empty());
    }
}
