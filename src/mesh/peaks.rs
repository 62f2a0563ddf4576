/// Reference strict-local-maxima search.
///
/// `vertex_inds` lists the vertices under consideration and `adjacency` is
/// parallel to it: the row at position `k` holds the neighbor indices of
/// `vertex_inds[k]`. Neighbor indices address `values` directly and need
/// not lie in `vertex_inds`, so callers choose between restricted and full
/// neighbor rows.
///
/// A vertex is kept iff its value strictly exceeds every neighbor's value;
/// an equal-valued neighbor disqualifies it, so a plateau produces no
/// maxima. An empty `vertex_inds` yields an empty result. A vertex with an
/// empty neighbor row is vacuously a maximum; keeping every subset vertex
/// connected is the mesh builder's responsibility, not checked here.
///
/// # Panics
///
/// Panics if a vertex or neighbor index is out of range for `values`.
#[must_use]
pub fn argmax_from_adjacency(
    values: &[f64],
    vertex_inds: &[u32],
    adjacency: &[Vec<u32>],
) -> Vec<u32> {
    vertex_inds
        .iter()
        .zip(adjacency)
        .filter(|&(&v, row)| {
            let val = values[v as usize];
            row.iter().all(|&n| values[n as usize] < val)
        })
        .map(|(&v, _)| v)
        .collect()
}

/// Adjacency rows flattened into a single neighbor array with per-row
/// offsets.
///
/// Built once per mesh and reused across many scalar fields; the packed
/// layout trades the ragged lists' per-row allocations for two contiguous
/// arrays.
#[derive(Debug, Clone)]
pub struct PackedAdjacency {
    offsets: Vec<u32>,
    packed: Vec<u32>,
}

impl PackedAdjacency {
    /// Packs ragged neighbor rows, as produced by
    /// [`neighbors_for`](super::neighbors_for).
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_lists(adjacency: &[Vec<u32>]) -> Self {
        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        let mut packed = Vec::with_capacity(adjacency.iter().map(Vec::len).sum());
        offsets.push(0);
        for row in adjacency {
            packed.extend_from_slice(row);
            offsets.push(packed.len() as u32);
        }
        Self { offsets, packed }
    }

    /// Number of rows (subset vertices).
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// `true` if the packing holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Neighbor row for subset position `k`.
    #[must_use]
    pub fn row(&self, k: usize) -> &[u32] {
        &self.packed[self.offsets[k] as usize..self.offsets[k + 1] as usize]
    }
}

/// Optimized strict-local-maxima search over a packed adjacency.
///
/// Semantically identical to [`argmax_from_adjacency`] on the lists the
/// packing was built from: for every scalar field and subset the two
/// return the same indices. The packed form only changes the memory
/// layout, not the predicate.
///
/// # Panics
///
/// Panics if a vertex or neighbor index is out of range for `values`, or
/// if `adjacency` has fewer rows than `vertex_inds`.
#[must_use]
pub fn argmax_packed(
    values: &[f64],
    vertex_inds: &[u32],
    adjacency: &PackedAdjacency,
) -> Vec<u32> {
    let mut maxima = Vec::new();
    for (k, &v) in vertex_inds.iter().enumerate() {
        let val = values[v as usize];
        if adjacency.row(k).iter().all(|&n| values[n as usize] < val) {
            maxima.push(v);
        }
    }
    maxima
}
