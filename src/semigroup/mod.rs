//! The Froidure-Pin enumeration engine.
//!
//! [`Semigroup`] incrementally discovers every element of the semigroup
//! generated by a finite set of [`Element`]s, together with both Cayley
//! graphs, a length-reducing confluent rewriting system, and a minimal
//! factorisation of every element. Elements are produced in
//! length-lexicographic order induced by the generator order.
//!
//! Enumeration is batched and resumable: [`Semigroup::enumerate`] stops
//! once it has found roughly `batch_size` new elements past the requested
//! limit and can be resumed at any time; any interleaving of calls reaches
//! the same tables.
//!
//! # Invariants
//! - `map` is a bijection between the values in `elements` and `0..nr`.
//! - Walking `enum_index` visits positions in non-decreasing word length;
//!   `lenindex[k]` is the start of the length-`k` block in `enum_index`.
//! - For every non-generator position `p`:
//!   `elements[prefixes[p]] * gens[final_letters[p]] == elements[p]` and
//!   `gens[first_letters[p]] * elements[suffixes[p]] == elements[p]`.
//! - For every computed entry `r = right[p][l]`:
//!   `elements[r] == elements[p] * gens[l]`, and `lengths[r] ==
//!   lengths[p] + 1` exactly when `reduced[p][l]` holds.
//! - All rows of `right`, `left`, `reduced` and the `multiplied` flags are
//!   sized to `nr` at every return from a public method.

mod extend;
mod idempotents;
pub mod relations;

pub use relations::Relation;

use crate::element::Element;
use crate::error::SemigroupError;
use crate::table::Table;
use log::{debug, info};
use std::collections::HashMap;
use std::ops::Index;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stable index of an element in the enumeration.
pub type Position = usize;

/// Index into the (possibly duplicated) generator list.
pub type Letter = usize;

/// A word over the generator letters, equal to the product of the
/// corresponding generators in left-to-right order.
pub type Word = Vec<Letter>;

/// Reserved sentinel for "no such position".
pub const UNDEFINED: Position = usize::MAX;

/// Largest usable enumeration limit.
pub const LIMIT_MAX: usize = usize::MAX;

/// Default number of new elements found by one `enumerate` call.
const DEFAULT_BATCH_SIZE: usize = 8192;

/// A finitely generated semigroup or monoid, enumerated by the
/// Froidure-Pin algorithm.
///
/// Generators are deep-copied at construction; the caller keeps its
/// originals. Methods that may need elements not yet discovered take
/// `&mut self` and enumerate on demand; their `current_*` counterparts
/// report only what is already known and never enumerate.
#[derive(Debug, Clone)]
pub struct Semigroup<T: Element> {
    batch_size: usize,
    degree: usize,
    duplicate_gens: Vec<(Letter, Letter)>,
    elements: Vec<T>,
    enum_index: Vec<Position>,
    final_letters: Vec<Letter>,
    first_letters: Vec<Letter>,
    found_one: bool,
    gens: Vec<T>,
    id: T,
    idempotents: Vec<Position>,
    idempotents_found: bool,
    is_idempotent_flags: Vec<bool>,
    left: Table<Position>,
    lengths: Vec<usize>,
    lenindex: Vec<usize>,
    letter_to_pos: Vec<Position>,
    map: HashMap<T, Position>,
    max_threads: usize,
    multiplied: Vec<bool>,
    nr: usize,
    nrrules: usize,
    pos: usize,
    pos_one: Position,
    pos_sorted: Option<Vec<usize>>,
    prefixes: Vec<Position>,
    reduced: Table<bool>,
    relation_gen: usize,
    relation_pos: Position,
    report: bool,
    right: Table<Position>,
    sorted: Option<Vec<(T, Position)>>,
    suffixes: Vec<Position>,
    tmp_product: T,
    wordlen: usize,
}

impl<T: Element> Semigroup<T> {
    /// Creates the semigroup generated by `gens`.
    ///
    /// Duplicate generators are kept as distinct letters but collapse to a
    /// single position; each duplicate contributes one defining relation.
    ///
    /// # Errors
    /// Returns [`SemigroupError::EmptyGeneratingSet`] if `gens` is empty
    /// and [`SemigroupError::DegreeMismatch`] if the generators disagree
    /// on degree.
    pub fn new(gens: &[T]) -> Result<Self, SemigroupError> {
        let first_gen = gens.first().ok_or(SemigroupError::EmptyGeneratingSet)?;
        let degree = first_gen.degree();
        for gen in gens {
            if gen.degree() != degree {
                return Err(SemigroupError::DegreeMismatch {
                    expected: degree,
                    found: gen.degree(),
                });
            }
        }
        let id = first_gen.identity();
        let nrgens = gens.len();
        let mut semigroup = Self {
            batch_size: DEFAULT_BATCH_SIZE,
            degree,
            duplicate_gens: Vec::new(),
            elements: Vec::new(),
            enum_index: Vec::new(),
            final_letters: Vec::new(),
            first_letters: Vec::new(),
            found_one: false,
            gens: gens.to_vec(),
            tmp_product: id.clone(),
            id,
            idempotents: Vec::new(),
            idempotents_found: false,
            is_idempotent_flags: Vec::new(),
            left: Table::new(nrgens, UNDEFINED),
            lengths: Vec::new(),
            lenindex: vec![0],
            letter_to_pos: Vec::new(),
            map: HashMap::new(),
            max_threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            multiplied: Vec::new(),
            nr: 0,
            nrrules: 0,
            pos: 0,
            pos_one: UNDEFINED,
            pos_sorted: None,
            prefixes: Vec::new(),
            reduced: Table::new(nrgens, false),
            relation_gen: 0,
            relation_pos: UNDEFINED,
            report: false,
            right: Table::new(nrgens, UNDEFINED),
            sorted: None,
            suffixes: Vec::new(),
            wordlen: 0,
        };
        for (letter, gen) in gens.iter().enumerate() {
            match semigroup.map.get(gen).copied() {
                Some(existing) => {
                    semigroup.letter_to_pos.push(existing);
                    semigroup.nrrules += 1;
                    semigroup
                        .duplicate_gens
                        .push((semigroup.first_letters[existing], letter));
                }
                None => {
                    let pos = semigroup.nr;
                    semigroup.elements.push(gen.clone());
                    semigroup.map.insert(gen.clone(), pos);
                    semigroup.first_letters.push(letter);
                    semigroup.final_letters.push(letter);
                    semigroup.prefixes.push(UNDEFINED);
                    semigroup.suffixes.push(UNDEFINED);
                    semigroup.lengths.push(1);
                    semigroup.enum_index.push(pos);
                    semigroup.letter_to_pos.push(pos);
                    semigroup.nr += 1;
                    semigroup.note_identity(pos);
                }
            }
        }
        semigroup.expand(semigroup.nr);
        semigroup.lenindex.push(semigroup.enum_index.len());
        Ok(semigroup)
    }

    /// Appends `n` rows to every table kept in lockstep with `elements`.
    pub(crate) fn expand(&mut self, n: usize) {
        self.left.add_rows(n);
        self.reduced.add_rows(n);
        self.right.add_rows(n);
        self.multiplied.resize(self.multiplied.len() + n, false);
    }

    /// Records the first position holding the identity element.
    pub(crate) fn note_identity(&mut self, pos: Position) {
        if !self.found_one && self.elements[pos] == self.id {
            self.pos_one = pos;
            self.found_one = true;
        }
    }

    /// The common degree of the elements.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The number of generators, duplicates included.
    #[inline]
    pub fn nr_generators(&self) -> usize {
        self.gens.len()
    }

    /// The generators, in the order given at construction.
    #[inline]
    pub fn generators(&self) -> &[T] {
        &self.gens
    }

    /// The generator behind `letter`.
    ///
    /// # Panics
    /// Panics if `letter` is out of range.
    #[inline]
    pub fn generator(&self, letter: Letter) -> &T {
        &self.gens[letter]
    }

    /// The position of the first element equal to generator `letter`.
    ///
    /// Usually `letter_to_pos(l) == l`; duplicates and generators added
    /// after partial enumeration break that pattern.
    ///
    /// # Panics
    /// Panics if `letter` is out of range.
    #[inline]
    pub fn letter_to_pos(&self, letter: Letter) -> Position {
        self.letter_to_pos[letter]
    }

    /// Pairs of letters carrying equal generators, as
    /// `(earlier, later)`.
    #[inline]
    pub fn duplicate_generators(&self) -> &[(Letter, Letter)] {
        &self.duplicate_gens
    }

    /// True once every discovered element has had its row of the right
    /// Cayley graph computed, i.e. enumeration is complete.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.pos >= self.nr
    }

    /// True if any non-generator row has been processed.
    #[inline]
    pub fn is_begun(&self) -> bool {
        self.pos >= self.lenindex[1]
    }

    /// The number of elements discovered so far. Never enumerates.
    #[inline]
    pub fn current_size(&self) -> usize {
        self.nr
    }

    /// The number of defining relations found so far. Never enumerates.
    #[inline]
    pub fn current_nr_rules(&self) -> usize {
        self.nrrules
    }

    /// The maximum length of any minimal word found so far.
    pub fn current_max_word_length(&self) -> usize {
        if self.is_done() {
            self.lenindex.len() - 2
        } else if self.nr > *self.lenindex.last().expect("lenindex is never empty") {
            self.lenindex.len()
        } else {
            self.lenindex.len() - 1
        }
    }

    /// The position of `x` among the already discovered elements, without
    /// enumerating. Returns `None` on degree mismatch.
    pub fn current_position(&self, x: &T) -> Option<Position> {
        if x.degree() != self.degree {
            return None;
        }
        self.map.get(x).copied()
    }

    /// The length of the minimal word of the element at `pos`, without
    /// enumerating.
    ///
    /// # Panics
    /// Panics if `pos` has not been discovered yet.
    #[inline]
    pub fn current_length(&self, pos: Position) -> usize {
        self.lengths[pos]
    }

    /// The length of the minimal word of the element at `pos`, enumerating
    /// as needed.
    pub fn length(&mut self, pos: Position) -> usize {
        if pos >= self.nr {
            self.enumerate(LIMIT_MAX);
        }
        self.current_length(pos)
    }

    /// First letter of the minimal word of the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` has not been discovered yet.
    #[inline]
    pub fn first_letter(&self, pos: Position) -> Letter {
        self.first_letters[pos]
    }

    /// Final letter of the minimal word of the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` has not been discovered yet.
    #[inline]
    pub fn final_letter(&self, pos: Position) -> Letter {
        self.final_letters[pos]
    }

    /// Position of the length-minus-one prefix of the minimal word of
    /// `pos`, or `UNDEFINED` for generators.
    ///
    /// # Panics
    /// Panics if `pos` has not been discovered yet.
    #[inline]
    pub fn prefix(&self, pos: Position) -> Position {
        self.prefixes[pos]
    }

    /// Position of the length-minus-one suffix of the minimal word of
    /// `pos`, or `UNDEFINED` for generators.
    ///
    /// # Panics
    /// Panics if `pos` has not been discovered yet.
    #[inline]
    pub fn suffix(&self, pos: Position) -> Position {
        self.suffixes[pos]
    }

    /// Entry `(pos, letter)` of the right Cayley graph: the position of
    /// `elements[pos] * gens[letter]`.
    ///
    /// # Panics
    /// Panics if the row has not been computed yet.
    #[inline]
    pub fn right(&self, pos: Position, letter: Letter) -> Position {
        self.right.get(pos, letter)
    }

    /// Entry `(pos, letter)` of the left Cayley graph: the position of
    /// `gens[letter] * elements[pos]`.
    ///
    /// # Panics
    /// Panics if the row has not been computed yet.
    #[inline]
    pub fn left(&self, pos: Position, letter: Letter) -> Position {
        self.left.get(pos, letter)
    }

    /// The full right Cayley graph; enumerates to completion first.
    pub fn right_cayley_graph(&mut self) -> &Table<Position> {
        self.enumerate(LIMIT_MAX);
        &self.right
    }

    /// The full left Cayley graph; enumerates to completion first.
    pub fn left_cayley_graph(&mut self) -> &Table<Position> {
        self.enumerate(LIMIT_MAX);
        &self.left
    }

    /// The batch size: the minimum amount of progress made by one
    /// non-trivial `enumerate` call.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Sets the batch size (default 8192).
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
    }

    /// Caps the number of threads used by the idempotent scan. `0` means
    /// one thread; values beyond the hardware concurrency are clamped.
    pub fn set_max_threads(&mut self, nr_threads: usize) {
        let hardware = std::thread::available_parallelism().map_or(1, |n| n.get());
        self.max_threads = nr_threads.max(1).min(hardware);
    }

    /// Toggles progress reporting at `info` level (default: `debug`).
    pub fn set_report(&mut self, report: bool) {
        self.report = report;
    }

    /// Pre-sizes the tables for a semigroup of `n` elements.
    pub fn reserve(&mut self, n: usize) {
        let extra = n.saturating_sub(self.nr);
        self.elements.reserve(extra);
        self.map.reserve(extra);
        self.enum_index.reserve(extra);
        self.first_letters.reserve(extra);
        self.final_letters.reserve(extra);
        self.prefixes.reserve(extra);
        self.suffixes.reserve(extra);
        self.lengths.reserve(extra);
        self.multiplied.reserve(extra);
        self.left.reserve_rows(extra);
        self.right.reserve_rows(extra);
        self.reduced.reserve_rows(extra);
    }

    /// The size of the semigroup; enumerates to completion.
    pub fn size(&mut self) -> usize {
        self.enumerate(LIMIT_MAX);
        self.nr
    }

    /// The number of defining relations; enumerates to completion.
    pub fn nr_rules(&mut self) -> usize {
        self.enumerate(LIMIT_MAX);
        self.nrrules
    }

    /// Tests whether `x` belongs to the semigroup, enumerating in batches
    /// until `x` is found or enumeration finishes.
    pub fn contains(&mut self, x: &T) -> bool {
        self.position(x).is_some()
    }

    /// The position of `x`, enumerating in batches until `x` is found or
    /// enumeration finishes. Returns `None` on degree mismatch or absence.
    pub fn position(&mut self, x: &T) -> Option<Position> {
        if x.degree() != self.degree {
            return None;
        }
        loop {
            if let Some(&pos) = self.map.get(x) {
                return Some(pos);
            }
            if self.is_done() {
                return None;
            }
            self.enumerate(self.nr + 1);
        }
    }

    /// The element at `pos`, enumerating until it exists or enumeration
    /// finishes.
    pub fn at(&mut self, pos: Position) -> Option<&T> {
        if pos >= self.nr && !self.is_done() {
            self.enumerate(pos.saturating_add(1));
        }
        self.elements.get(pos)
    }

    /// Evaluates a word over the generators to an element, without
    /// consulting the enumeration. Returns `None` for the empty word.
    ///
    /// # Panics
    /// Panics if a letter is out of range.
    pub fn word_to_element(&self, word: &[Letter]) -> Option<T> {
        let (&head, tail) = word.split_first()?;
        let mut out = self.gens[head].clone();
        for &letter in tail {
            out = T::product(&out, &self.gens[letter]);
        }
        Some(out)
    }

    /// The position of the product of a word over the generators.
    /// Enumerates to completion. Returns `None` for the empty word.
    ///
    /// # Panics
    /// Panics if a letter is out of range.
    pub fn word_to_position(&mut self, word: &[Letter]) -> Option<Position> {
        let (&head, tail) = word.split_first()?;
        self.enumerate(LIMIT_MAX);
        let mut out = self.letter_to_pos[head];
        for &letter in tail {
            out = self.fast_product(out, self.letter_to_pos[letter]);
        }
        Some(out)
    }

    /// The position of `elements[i] * elements[j]`, computed purely from
    /// the Cayley graphs by following the minimal word of the shorter
    /// operand through the opposite graph.
    ///
    /// # Panics
    /// Panics if either position is undiscovered or its graph rows are
    /// incomplete (enumerate first).
    pub fn product_by_reduction(&self, mut i: Position, mut j: Position) -> Position {
        assert!(i < self.nr && j < self.nr, "positions must be enumerated");
        if self.lengths[i] <= self.lengths[j] {
            // Feed the word of i, right to left, into j from the left.
            while i != UNDEFINED {
                j = self.left.get(j, self.final_letters[i]);
                i = self.prefixes[i];
            }
            j
        } else {
            // Feed the word of j, left to right, into i from the right.
            while j != UNDEFINED {
                i = self.right.get(i, self.first_letters[j]);
                j = self.suffixes[j];
            }
            i
        }
    }

    /// The position of `elements[i] * elements[j]`, via the Cayley graphs
    /// when the word lengths are small against the multiplication cost,
    /// and by direct multiplication otherwise.
    ///
    /// # Panics
    /// Panics if either position is undiscovered, or if the product has
    /// not been discovered yet (enumerate first).
    pub fn fast_product(&self, i: Position, j: Position) -> Position {
        assert!(i < self.nr && j < self.nr, "positions must be enumerated");
        if self.lengths[i] + self.lengths[j] < self.elements[i].complexity() {
            self.product_by_reduction(i, j)
        } else {
            let product = T::product(&self.elements[i], &self.elements[j]);
            *self
                .map
                .get(&product)
                .expect("product of enumerated elements must be enumerated")
        }
    }

    /// Runs the Froidure-Pin main loop until at least `limit` elements are
    /// known or the semigroup is fully enumerated.
    pub fn enumerate(&mut self, limit: usize) {
        let cancel = AtomicBool::new(false);
        self.enumerate_cancellable(limit, &cancel);
    }

    /// As [`enumerate`](Self::enumerate), additionally returning early —
    /// with all tables consistent — once `cancel` becomes true. The flag
    /// is sampled once per row.
    pub fn enumerate_cancellable(&mut self, limit: usize, cancel: &AtomicBool) {
        if self.pos >= self.nr || limit <= self.nr || cancel.load(Ordering::Relaxed) {
            return;
        }
        let limit = limit.max(self.nr.saturating_add(self.batch_size));

        // Multiply the generator block by every generator.
        if self.pos < self.lenindex[1] {
            let nr_shorter = self.nr;
            while self.pos < self.lenindex[1]
                && self.nr < limit
                && !cancel.load(Ordering::Relaxed)
            {
                let i = self.enum_index[self.pos];
                let b = self.first_letters[i];
                self.multiplied[i] = true;
                for j in 0..self.gens.len() {
                    self.tmp_product.multiply(&self.elements[i], &self.gens[j]);
                    match self.map.get(&self.tmp_product).copied() {
                        Some(existing) => {
                            self.right.set(i, j, existing);
                            self.nrrules += 1;
                        }
                        None => {
                            let new_pos = self.nr;
                            self.elements.push(self.tmp_product.clone());
                            self.map.insert(self.tmp_product.clone(), new_pos);
                            self.first_letters.push(b);
                            self.final_letters.push(j);
                            self.lengths.push(2);
                            self.prefixes.push(i);
                            self.suffixes.push(self.letter_to_pos[j]);
                            self.enum_index.push(new_pos);
                            self.reduced.set(i, j, true);
                            self.right.set(i, j, new_pos);
                            self.nr += 1;
                            self.note_identity(new_pos);
                        }
                    }
                }
                self.pos += 1;
            }
            self.expand(self.nr - nr_shorter);
            if self.pos == self.lenindex[1] {
                for idx in 0..self.pos {
                    let p = self.enum_index[idx];
                    let b = self.final_letters[p];
                    for j in 0..self.gens.len() {
                        let entry = self.right.get(self.letter_to_pos[j], b);
                        self.left.set(p, j, entry);
                    }
                }
                self.wordlen += 1;
                self.lenindex.push(self.enum_index.len());
            }
        }

        // Multiply the longer words by every generator.
        let mut stop = self.nr >= limit || cancel.load(Ordering::Relaxed);
        while self.pos < self.nr && !stop {
            let nr_shorter = self.nr;
            while self.pos < self.lenindex[self.wordlen + 1] && !stop {
                let i = self.enum_index[self.pos];
                let b = self.first_letters[i];
                let s = self.suffixes[i];
                self.multiplied[i] = true;
                for j in 0..self.gens.len() {
                    if !self.reduced.get(s, j) {
                        // The word of i extended by j rewrites through the
                        // suffix; every lookup lands on an older row.
                        let r = self.right.get(s, j);
                        let entry = if self.found_one && r == self.pos_one {
                            self.letter_to_pos[b]
                        } else if self.prefixes[r] != UNDEFINED {
                            self.right
                                .get(self.left.get(self.prefixes[r], b), self.final_letters[r])
                        } else {
                            self.right
                                .get(self.letter_to_pos[b], self.final_letters[r])
                        };
                        self.right.set(i, j, entry);
                    } else {
                        self.tmp_product.multiply(&self.elements[i], &self.gens[j]);
                        match self.map.get(&self.tmp_product).copied() {
                            Some(existing) => {
                                self.right.set(i, j, existing);
                                self.nrrules += 1;
                            }
                            None => {
                                let new_pos = self.nr;
                                self.elements.push(self.tmp_product.clone());
                                self.map.insert(self.tmp_product.clone(), new_pos);
                                self.first_letters.push(b);
                                self.final_letters.push(j);
                                self.lengths.push(self.wordlen + 2);
                                self.prefixes.push(i);
                                self.suffixes.push(self.right.get(s, j));
                                self.enum_index.push(new_pos);
                                self.reduced.set(i, j, true);
                                self.right.set(i, j, new_pos);
                                self.nr += 1;
                                self.note_identity(new_pos);
                            }
                        }
                    }
                }
                self.pos += 1;
                stop = self.nr >= limit || cancel.load(Ordering::Relaxed);
            }
            self.expand(self.nr - nr_shorter);
            if self.pos == self.lenindex[self.wordlen + 1] {
                for idx in self.lenindex[self.wordlen]..self.pos {
                    let p = self.enum_index[idx];
                    let prefix = self.prefixes[p];
                    let b = self.final_letters[p];
                    for j in 0..self.gens.len() {
                        let entry = self.right.get(self.left.get(prefix, j), b);
                        self.left.set(p, j, entry);
                    }
                }
                self.wordlen += 1;
                self.lenindex.push(self.enum_index.len());
            }
        }

        if self.report {
            info!(
                "found {} elements, {} rules, max word length {}{}",
                self.nr,
                self.nrrules,
                self.current_max_word_length(),
                if self.is_done() { ", finished" } else { "" }
            );
        } else {
            debug!(
                "found {} elements, {} rules, max word length {}{}",
                self.nr,
                self.nrrules,
                self.current_max_word_length(),
                if self.is_done() { ", finished" } else { "" }
            );
        }
    }

    /// Builds the view of the elements sorted by their natural order.
    fn sort_elements(&mut self) {
        if self.sorted.is_some() {
            return;
        }
        self.enumerate(LIMIT_MAX);
        let mut sorted: Vec<(T, Position)> =
            self.elements.iter().cloned().zip(0..self.nr).collect();
        sorted.sort_by(|x, y| x.0.cmp(&y.0));
        self.sorted = Some(sorted);
    }

    /// The elements paired with their positions, sorted by the element
    /// order. Enumerates to completion; the view is built once and cached.
    pub fn sorted_elements(&mut self) -> &[(T, Position)] {
        self.sort_elements();
        self.sorted.as_deref().expect("sorted view was just built")
    }

    /// The element at `pos` of the sorted view.
    pub fn sorted_at(&mut self, pos: usize) -> Option<&T> {
        self.sort_elements();
        self.sorted
            .as_ref()
            .expect("sorted view was just built")
            .get(pos)
            .map(|(element, _)| element)
    }

    /// Converts an enumeration position into a rank in the sorted view.
    pub fn position_to_sorted_position(&mut self, pos: Position) -> Option<usize> {
        self.enumerate(LIMIT_MAX);
        if pos >= self.nr {
            return None;
        }
        if self.pos_sorted.is_none() {
            self.sort_elements();
            let sorted = self.sorted.as_ref().expect("sorted view was just built");
            let mut inverse = vec![0; sorted.len()];
            for (rank, &(_, position)) in sorted.iter().enumerate() {
                inverse[position] = rank;
            }
            self.pos_sorted = Some(inverse);
        }
        self.pos_sorted
            .as_ref()
            .expect("inverse view was just built")
            .get(pos)
            .copied()
    }

    /// The rank of `x` in the sorted view, or `None` if `x` is not a
    /// member.
    pub fn sorted_position(&mut self, x: &T) -> Option<usize> {
        let pos = self.position(x)?;
        self.position_to_sorted_position(pos)
    }
}

impl<T: Element> Index<Position> for Semigroup<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        &self.elements[pos]
    }
}
