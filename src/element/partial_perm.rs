//! Partial permutations of a finite set.

use crate::element::Element;
use serde::{Deserialize, Serialize};

/// Marker for a point with no image.
const NONE: usize = usize::MAX;

/// A partial permutation of `{0, .., n-1}`.
///
/// Stored as an image list where undefined points map to a sentinel. Two
/// partial perms are equal only if they have the same degree, so the empty
/// partial perm of degree 11 differs from the one of degree 9.
///
/// # Invariants
/// - Every defined image is less than the degree.
/// - Defined images are pairwise distinct (injectivity).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartialPerm {
    images: Vec<usize>,
}

impl PartialPerm {
    /// Creates a partial permutation mapping `domain[i]` to `range[i]`,
    /// acting on `degree` points.
    ///
    /// # Panics
    /// Panics if the domain and range lengths differ, if any point is out
    /// of range, or if the map is not injective.
    pub fn new(domain: &[usize], range: &[usize], degree: usize) -> Self {
        assert_eq!(
            domain.len(),
            range.len(),
            "domain and range must have equal length"
        );
        let mut images = vec![NONE; degree];
        let mut hit = vec![false; degree];
        for (&pt, &im) in domain.iter().zip(range.iter()) {
            assert!(pt < degree && im < degree, "point out of range");
            assert!(images[pt] == NONE, "domain point repeated");
            assert!(!hit[im], "partial perm must be injective");
            images[pt] = im;
            hit[im] = true;
        }
        Self { images }
    }

    /// The empty partial permutation on `degree` points.
    pub fn empty(degree: usize) -> Self {
        Self {
            images: vec![NONE; degree],
        }
    }

    /// Returns the image of `pt`, or `None` if undefined.
    #[inline]
    pub fn apply(&self, pt: usize) -> Option<usize> {
        match self.images[pt] {
            NONE => None,
            im => Some(im),
        }
    }

    /// Returns the number of points with a defined image.
    pub fn rank(&self) -> usize {
        self.images.iter().filter(|&&im| im != NONE).count()
    }
}

impl Element for PartialPerm {
    fn degree(&self) -> usize {
        self.images.len()
    }

    fn complexity(&self) -> usize {
        self.images.len()
    }

    fn identity(&self) -> Self {
        Self {
            images: (0..self.images.len()).collect(),
        }
    }

    fn multiply(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.degree(), y.degree());
        self.images.clear();
        self.images.extend(
            x.images
                .iter()
                .map(|&pt| if pt == NONE { NONE } else { y.images[pt] }),
        );
    }
}
