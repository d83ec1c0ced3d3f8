//! Partitioned binary relations.

use crate::element::Element;
use serde::{Deserialize, Serialize};

/// A partitioned binary relation (PBR) of degree `n`: an arbitrary binary
/// relation on `{0, .., 2n-1}`, stored as a sorted adjacency list per
/// point. Points `0..n` are the left column, points `n..2n` the right.
///
/// The product `x * y` glues the right column of `x` to the left column of
/// `y` and connects `u` to `v` whenever there is a path from `u` to `v`
/// whose interior lies in the glued middle layer. Paths alternate between
/// the two relations: a middle point entered along an edge of `x` is left
/// along edges of `y`, and vice versa.
///
/// # Invariants
/// - Adjacency lists are sorted and duplicate-free.
/// - Every listed point is less than `2 * degree`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pbr {
    adj: Vec<Vec<usize>>,
}

impl Pbr {
    /// Creates a PBR from one adjacency list per point of `{0, .., 2n-1}`.
    ///
    /// Lists are sorted and deduplicated on ingestion.
    ///
    /// # Panics
    /// Panics if the number of lists is odd or any point is out of range.
    pub fn new(adj: Vec<Vec<usize>>) -> Self {
        assert!(adj.len() % 2 == 0, "a PBR needs one list per point of both columns");
        let bound = adj.len();
        let mut adj = adj;
        for list in adj.iter_mut() {
            assert!(list.iter().all(|&v| v < bound), "adjacency out of range");
            list.sort_unstable();
            list.dedup();
        }
        Self { adj }
    }

    /// Returns the neighbours of `pt`.
    #[inline]
    pub fn neighbours(&self, pt: usize) -> &[usize] {
        &self.adj[pt]
    }

    /// Walks the glued digraph from every neighbour in `starts`, recording
    /// terminal points of the product row in `out`.
    ///
    /// A middle point is keyed by `(index, via_x)`: entered along an x-edge
    /// it continues along `y`, entered along a y-edge it continues along
    /// `x`.
    fn trace(x: &Self, y: &Self, starts: &[usize], start_in_x: bool, out: &mut Vec<bool>) {
        let n = x.degree();
        // A middle point may be expanded once along y (entered via x) and
        // once along x (entered via y); the two guards are independent.
        let mut explored_y = vec![false; n];
        let mut explored_x = vec![false; n];
        let mut stack: Vec<(usize, bool)> = Vec::new();

        for &v in starts {
            if start_in_x {
                // Edge of x: targets < n are terminals of the left column.
                if v < n {
                    out[v] = true;
                } else {
                    stack.push((v - n, true));
                }
            } else {
                // Edge of y: targets >= n are terminals of the right column.
                if v >= n {
                    out[v] = true;
                } else {
                    stack.push((v, false));
                }
            }
        }

        while let Some((mid, via_x)) = stack.pop() {
            if via_x {
                if explored_y[mid] {
                    continue;
                }
                explored_y[mid] = true;
                // Continue along y from the glued point.
                for &v in &y.adj[mid] {
                    if v >= n {
                        out[v] = true;
                    } else {
                        stack.push((v, false));
                    }
                }
            } else {
                if explored_x[mid] {
                    continue;
                }
                explored_x[mid] = true;
                // Continue along x from the glued point.
                for &v in &x.adj[mid + n] {
                    if v < n {
                        out[v] = true;
                    } else {
                        stack.push((v - n, true));
                    }
                }
            }
        }
    }
}

impl Element for Pbr {
    fn degree(&self) -> usize {
        self.adj.len() / 2
    }

    fn complexity(&self) -> usize {
        let two_n = self.adj.len();
        two_n * two_n * two_n
    }

    fn identity(&self) -> Self {
        let n = self.degree();
        let mut adj = Vec::with_capacity(2 * n);
        for pt in 0..n {
            adj.push(vec![pt + n]);
        }
        for pt in 0..n {
            adj.push(vec![pt]);
        }
        Self { adj }
    }

    fn multiply(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.degree(), y.degree());
        let n = x.degree();
        self.adj.clear();
        let mut out = vec![false; 2 * n];
        for pt in 0..n {
            out.iter_mut().for_each(|o| *o = false);
            Self::trace(x, y, &x.adj[pt], true, &mut out);
            self.adj
                .push((0..2 * n).filter(|&v| out[v]).collect());
        }
        for pt in n..2 * n {
            out.iter_mut().for_each(|o| *o = false);
            Self::trace(x, y, &y.adj[pt], false, &mut out);
            self.adj
                .push((0..2 * n).filter(|&v| out[v]).collect());
        }
    }
}
