//! Froidure-Pin enumeration of finitely generated semigroups and monoids.
//!
//! Given a finite set of generators drawn from a common algebra —
//! transformations, partial permutations, boolean matrices, bipartitions,
//! partitioned binary relations, or matrices over a semiring — the engine
//! incrementally discovers every distinct element reachable by
//! right-multiplication, together with:
//!
//! - both Cayley graphs as dense position tables;
//! - a length-reducing confluent rewriting system (the defining
//!   relations, in canonical order);
//! - a minimal factorisation of every element over the generators;
//! - the idempotents, found by a bounded parallel scan.
//!
//! Enumeration is batched and resumable: queries like `position` and `at`
//! advance the machine just far enough, a cancellation token can suspend
//! it between rows, and `add_generators`/`closure` enlarge the generating
//! set without discarding what is already known.
//!
//! # References
//!
//! - Froidure, Pin. "Algorithms for computing finite semigroups" (1997)
//! - East, Egri-Nagy, Mitchell, Peresse. "Computing finite semigroups"
//!   (J. Symbolic Computation, 2019)
//!
//! # Example
//!
//! ```
//! use semigroups::prelude::*;
//!
//! let gens = vec![
//!     Transformation::new(vec![0, 1, 0]),
//!     Transformation::new(vec![0, 1, 2]),
//! ];
//! let mut s = Semigroup::new(&gens).unwrap();
//! assert_eq!(s.size(), 2);
//! assert_eq!(s.nr_idempotents(), 2);
//! assert_eq!(s.minimal_factorisation(1), Some(vec![1]));
//! ```

pub mod element;
pub mod error;
pub mod semigroup;
pub mod table;

pub use element::{
    Bipartition, BooleanMat, Element, Integers, Matrix, MaxPlus, MinPlus, NaturalThreshold,
    PartialPerm, Pbr, Semiring, Transformation, TropicalMaxPlus, TropicalMinPlus,
};
pub use error::SemigroupError;
pub use semigroup::{Letter, Position, Relation, Semigroup, Word, LIMIT_MAX, UNDEFINED};
pub use table::Table;

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::element::{
        Bipartition, BooleanMat, Element, Integers, Matrix, MaxPlus, MinPlus, NaturalThreshold,
        PartialPerm, Pbr, Semiring, Transformation, TropicalMaxPlus, TropicalMinPlus,
    };
    pub use crate::error::SemigroupError;
    pub use crate::semigroup::{
        Letter, Position, Relation, Semigroup, Word, LIMIT_MAX, UNDEFINED,
    };
}
