//! Bipartitions of a finite set.

use crate::element::Element;
use serde::{Deserialize, Serialize};

/// A bipartition of degree `n`: a set partition of `{0, .., 2n-1}`.
///
/// Points `0..n` are the top row, points `n..2n` the bottom row. The
/// partition is stored as a block index per point, normalised so that
/// block indices appear in increasing order of first occurrence — two
/// bipartitions are equal exactly when their block vectors are equal.
///
/// The product `x * y` glues the bottom row of `x` to the top row of `y`,
/// fuses the blocks that meet, and reads off the induced partition on the
/// top row of `x` and the bottom row of `y`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bipartition {
    blocks: Vec<usize>,
}

impl Bipartition {
    /// Creates a bipartition from its block-index vector of length `2n`.
    ///
    /// # Panics
    /// Panics if the vector has odd length or is not normalised (block
    /// `k + 1` first occurring before block `k`).
    pub fn new(blocks: Vec<usize>) -> Self {
        assert!(blocks.len() % 2 == 0, "block vector must have even length");
        let mut next = 0;
        for &b in &blocks {
            assert!(
                b <= next,
                "block indices must appear in order of first occurrence"
            );
            if b == next {
                next += 1;
            }
        }
        Self { blocks }
    }

    /// Returns the number of blocks.
    pub fn nr_blocks(&self) -> usize {
        self.blocks.iter().max().map_or(0, |&b| b + 1)
    }

    /// Returns the block index of `pt`.
    #[inline]
    pub fn block(&self, pt: usize) -> usize {
        self.blocks[pt]
    }

    fn find(fuse: &[usize], mut b: usize) -> usize {
        while fuse[b] < b {
            b = fuse[b];
        }
        b
    }
}

impl Element for Bipartition {
    fn degree(&self) -> usize {
        self.blocks.len() / 2
    }

    fn complexity(&self) -> usize {
        self.blocks.len() * self.blocks.len()
    }

    fn identity(&self) -> Self {
        let n = self.degree();
        let mut blocks = Vec::with_capacity(2 * n);
        blocks.extend(0..n);
        blocks.extend(0..n);
        Self { blocks }
    }

    fn multiply(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.degree(), y.degree());
        let n = x.degree();
        let nrx = x.nr_blocks();
        let nry = y.nr_blocks();

        // Union-find over the blocks of x (0..nrx) and of y (offset by nrx),
        // always pointing the larger root at the smaller.
        let mut fuse: Vec<usize> = (0..nrx + nry).collect();
        for i in 0..n {
            let bx = Self::find(&fuse, x.blocks[i + n]);
            let by = Self::find(&fuse, y.blocks[i] + nrx);
            if bx != by {
                if bx < by {
                    fuse[by] = bx;
                } else {
                    fuse[bx] = by;
                }
            }
        }

        const UNASSIGNED: usize = usize::MAX;
        let mut lookup = vec![UNASSIGNED; nrx + nry];
        let mut next = 0;
        self.blocks.clear();
        for i in 0..n {
            let root = Self::find(&fuse, x.blocks[i]);
            if lookup[root] == UNASSIGNED {
                lookup[root] = next;
                next += 1;
            }
            self.blocks.push(lookup[root]);
        }
        for i in n..2 * n {
            let root = Self::find(&fuse, y.blocks[i] + nrx);
            if lookup[root] == UNASSIGNED {
                lookup[root] = next;
                next += 1;
            }
            self.blocks.push(lookup[root]);
        }
    }
}
