//! Element algebras and the capability boundary between them and the engine.
//!
//! The enumeration engine is polymorphic over anything implementing
//! [`Element`]: transformations, partial permutations, boolean matrices,
//! bipartitions, partitioned binary relations, and matrices over a
//! semiring. The engine owns its element storage; generators are cloned on
//! ingestion and callers keep their originals.
//!
//! # Conventions
//! - Products compose left to right: `x * y` applies `x` first, then `y`.
//! - Equality and hashing are value-based and consistent with each other.
//! - All elements of one semigroup share a common degree.

pub mod bipartition;
pub mod boolmat;
pub mod matrix;
pub mod partial_perm;
pub mod pbr;
pub mod semiring;
pub mod transf;

pub use bipartition::Bipartition;
pub use boolmat::BooleanMat;
pub use matrix::Matrix;
pub use partial_perm::PartialPerm;
pub use pbr::Pbr;
pub use semiring::{
    Integers, MaxPlus, MinPlus, NaturalThreshold, Semiring, TropicalMaxPlus, TropicalMinPlus,
};
pub use transf::Transformation;

/// Capability set every element type must supply to the engine.
///
/// `multiply` writes the product into `self`, which acts as a
/// caller-supplied scratch of the correct degree; implementations must not
/// read from `self` while writing it. The engine reuses one scratch element
/// for the whole enumeration, so `multiply` should avoid allocating where
/// the representation permits.
pub trait Element: Clone + Eq + Ord + std::hash::Hash {
    /// The number of points (or rows) this element acts on.
    ///
    /// Fixed for the lifetime of the element; all generators handed to one
    /// engine must agree on it.
    fn degree(&self) -> usize;

    /// Rough cost estimate of one `multiply` call.
    ///
    /// Used by `fast_product` to choose between direct multiplication and
    /// Cayley-graph traversal.
    fn complexity(&self) -> usize;

    /// The identity of the monoid containing this element.
    fn identity(&self) -> Self;

    /// Writes `x * y` into `self`.
    fn multiply(&mut self, x: &Self, y: &Self);

    /// Returns `x * y` as a fresh element.
    fn product(x: &Self, y: &Self) -> Self {
        let mut out = x.clone();
        out.multiply(x, y);
        out
    }
}
