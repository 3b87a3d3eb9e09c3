//! Disjoint-set (union-find) used by the Kruskal engine.
//!
//! One instance is built fresh per spanning-forest computation, mutated by
//! sequential find/union calls, and discarded with the result. `find` uses
//! iterative two-pass path compression; `union_roots` uses union by rank,
//! incrementing a rank only when two equal-rank roots merge.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per vertex.
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of disjoint sets remaining.
    pub(super) fn components(&self) -> usize {
        self.components
    }

    /// Returns the root representative of `node`'s set.
    ///
    /// First pass walks to the root; second pass repoints every visited
    /// node directly at it (path compression).
    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets rooted at `left` and `right`.
    ///
    /// Both arguments must already be roots — the Kruskal loop has just
    /// resolved them via [`Self::find`] to test the cycle condition, so
    /// re-resolving here would be wasted work. Equal roots are a no-op;
    /// the call site never passes them, but the guard keeps the structure
    /// consistent if it ever does.
    pub(super) fn union_roots(&mut self, mut left: usize, mut right: usize) {
        debug_assert_eq!(self.parent[left], left, "left must be a root");
        debug_assert_eq!(self.parent[right], right, "right must be a root");

        if left == right {
            return;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
    }
}
