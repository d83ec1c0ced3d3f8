//! Incremental extension of an enumerated semigroup by new generators.
//!
//! `add_generators` mutates the partial enumeration in place instead of
//! restarting it: rows already multiplied by the old generators keep their
//! right-graph entries and are only multiplied by the new letters, while
//! elements whose minimal word changes under the enlarged alphabet are
//! rewritten to the new discovery order. `closure` filters candidates that
//! the semigroup can already produce.

use super::{Letter, Position, Semigroup, UNDEFINED};
use crate::element::Element;
use crate::error::SemigroupError;
use crate::table::Table;

impl<T: Element> Semigroup<T> {
    /// Adds every element of `coll` as a new generator, preserving all
    /// previously enumerated data.
    ///
    /// Candidates equal to an existing generator become duplicate letters;
    /// candidates equal to an already-known element promote that element
    /// to a generator (its minimal word shrinks to the new letter); the
    /// rest become fresh positions. The rule count, word lengths, and the
    /// relation cursor restart; the Cayley graphs keep their old entries.
    ///
    /// # Errors
    /// Returns [`SemigroupError::DegreeMismatch`] if any candidate has the
    /// wrong degree.
    pub fn add_generators(&mut self, coll: &[T]) -> Result<(), SemigroupError> {
        if coll.is_empty() {
            return Ok(());
        }
        for x in coll {
            if x.degree() != self.degree {
                return Err(SemigroupError::DegreeMismatch {
                    expected: self.degree,
                    found: x.degree(),
                });
            }
        }

        let old_nrgens = self.gens.len();
        let old_nr = self.nr;
        let mut nr_old_left = self.pos;

        // Only the generator block of the enumeration order survives; the
        // rest is rebuilt as elements are rediscovered.
        self.enum_index.truncate(self.lenindex[1]);
        let mut old_new = vec![false; old_nr];
        for &pos in &self.enum_index {
            old_new[pos] = true;
        }

        for x in coll {
            let new_letter = self.gens.len();
            match self.map.get(x).copied() {
                None => {
                    let new_pos = self.nr;
                    self.gens.push(x.clone());
                    self.elements.push(x.clone());
                    self.map.insert(x.clone(), new_pos);
                    self.first_letters.push(new_letter);
                    self.final_letters.push(new_letter);
                    self.prefixes.push(UNDEFINED);
                    self.suffixes.push(UNDEFINED);
                    self.lengths.push(1);
                    self.letter_to_pos.push(new_pos);
                    self.enum_index.push(new_pos);
                    self.multiplied.push(false);
                    self.nr += 1;
                    self.note_identity(new_pos);
                }
                Some(existing) => {
                    if self.letter_to_pos[self.first_letters[existing]] == existing {
                        // Already a generator: a duplicate letter.
                        self.gens.push(x.clone());
                        self.duplicate_gens
                            .push((self.first_letters[existing], new_letter));
                        self.letter_to_pos.push(existing);
                    } else {
                        // A known element promoted to generator status.
                        self.gens.push(x.clone());
                        self.letter_to_pos.push(existing);
                        self.enum_index.push(existing);
                        self.first_letters[existing] = new_letter;
                        self.final_letters[existing] = new_letter;
                        self.prefixes[existing] = UNDEFINED;
                        self.suffixes[existing] = UNDEFINED;
                        self.lengths[existing] = 1;
                        old_new[existing] = true;
                    }
                }
            }
        }

        // Restart the counters the enlarged alphabet invalidates.
        self.idempotents_found = false;
        self.idempotents.clear();
        self.is_idempotent_flags.clear();
        self.sorted = None;
        self.pos_sorted = None;
        self.nrrules = self.duplicate_gens.len();
        self.pos = 0;
        self.wordlen = 0;
        self.lenindex.clear();
        self.lenindex.push(0);
        self.lenindex.push(self.enum_index.len());
        self.reset_relation_cursor();

        let new_letters = self.gens.len() - old_nrgens;
        let new_positions = self.nr - old_nr;
        self.right.add_cols(new_letters);
        self.left.add_cols(new_letters);
        self.right.add_rows(new_positions);
        self.left.add_rows(new_positions);
        // The reduced flags are recounted from scratch at the new width.
        self.reduced = Table::new(self.gens.len(), false);
        self.reduced.add_rows(self.nr);

        // Reprocess rows until every row that was fully multiplied by the
        // old generators has been multiplied by the new ones too.
        while nr_old_left > 0 {
            let nr_shorter = self.nr;
            while self.pos < self.lenindex[self.wordlen + 1] && nr_old_left > 0 {
                let i = self.enum_index[self.pos];
                let b = self.first_letters[i];
                let s = self.suffixes[i];
                if self.multiplied[i] {
                    nr_old_left -= 1;
                    // Old columns are already known; reclaim anything the
                    // old enumeration had found further down the order.
                    for j in 0..old_nrgens {
                        let k = self.right.get(i, j);
                        if !old_new[k] {
                            self.first_letters[k] = b;
                            self.final_letters[k] = j;
                            self.lengths[k] = self.wordlen + 2;
                            self.prefixes[k] = i;
                            self.reduced.set(i, j, true);
                            self.suffixes[k] = if self.wordlen == 0 {
                                self.letter_to_pos[j]
                            } else {
                                self.right.get(s, j)
                            };
                            self.enum_index.push(k);
                            old_new[k] = true;
                            self.note_identity(k);
                        } else if s == UNDEFINED || self.reduced.get(s, j) {
                            self.nrrules += 1;
                        }
                    }
                    for j in old_nrgens..self.gens.len() {
                        self.closure_update(i, j, b, s, &mut old_new, old_nr);
                    }
                } else {
                    self.multiplied[i] = true;
                    for j in 0..self.gens.len() {
                        self.closure_update(i, j, b, s, &mut old_new, old_nr);
                    }
                }
                self.pos += 1;
            }
            self.expand(self.nr - nr_shorter);
            if self.pos == self.lenindex[self.wordlen + 1] {
                if self.wordlen == 0 {
                    for idx in 0..self.pos {
                        let p = self.enum_index[idx];
                        let b = self.final_letters[p];
                        for j in 0..self.gens.len() {
                            let entry = self.right.get(self.letter_to_pos[j], b);
                            self.left.set(p, j, entry);
                        }
                    }
                } else {
                    for idx in self.lenindex[self.wordlen]..self.pos {
                        let p = self.enum_index[idx];
                        let prefix = self.prefixes[p];
                        let b = self.final_letters[p];
                        for j in 0..self.gens.len() {
                            let entry = self.right.get(self.left.get(prefix, j), b);
                            self.left.set(p, j, entry);
                        }
                    }
                }
                self.wordlen += 1;
                self.lenindex.push(self.enum_index.len());
            }
        }
        Ok(())
    }

    /// One `(row, letter)` step of the extension loop: either rewrite
    /// through the suffix or multiply and classify the product as new,
    /// reclaimed, or already known.
    fn closure_update(
        &mut self,
        i: Position,
        j: Letter,
        b: Letter,
        s: Position,
        old_new: &mut [bool],
        old_nr: usize,
    ) {
        if self.wordlen != 0 && !self.reduced.get(s, j) {
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
            return;
        }
        self.tmp_product.multiply(&self.elements[i], &self.gens[j]);
        match self.map.get(&self.tmp_product).copied() {
            None => {
                let new_pos = self.nr;
                self.elements.push(self.tmp_product.clone());
                self.map.insert(self.tmp_product.clone(), new_pos);
                self.first_letters.push(b);
                self.final_letters.push(j);
                self.lengths.push(self.wordlen + 2);
                self.prefixes.push(i);
                self.reduced.set(i, j, true);
                self.right.set(i, j, new_pos);
                self.suffixes.push(if self.wordlen == 0 {
                    self.letter_to_pos[j]
                } else {
                    self.right.get(s, j)
                });
                self.enum_index.push(new_pos);
                self.nr += 1;
                self.note_identity(new_pos);
            }
            Some(existing) if existing < old_nr && !old_new[existing] => {
                // An element of the old semigroup, rediscovered here for
                // the first time under the enlarged alphabet.
                self.first_letters[existing] = b;
                self.final_letters[existing] = j;
                self.lengths[existing] = self.wordlen + 2;
                self.prefixes[existing] = i;
                self.reduced.set(i, j, true);
                self.right.set(i, j, existing);
                self.suffixes[existing] = if self.wordlen == 0 {
                    self.letter_to_pos[j]
                } else {
                    self.right.get(s, j)
                };
                self.enum_index.push(existing);
                old_new[existing] = true;
                self.note_identity(existing);
            }
            Some(existing) => {
                self.right.set(i, j, existing);
                self.nrrules += 1;
            }
        }
    }

    /// Adds only those elements of `coll` that the semigroup cannot
    /// already produce, one at a time and in input order; of two mutually
    /// derivable candidates the earlier wins.
    ///
    /// Membership of each candidate is tested against the semigroup as
    /// enlarged by the candidates accepted before it, which requires
    /// enumerating to quiescence between additions.
    ///
    /// # Errors
    /// Returns [`SemigroupError::DegreeMismatch`] if any candidate has the
    /// wrong degree.
    pub fn closure(&mut self, coll: &[T]) -> Result<(), SemigroupError> {
        for x in coll {
            if x.degree() != self.degree {
                return Err(SemigroupError::DegreeMismatch {
                    expected: self.degree,
                    found: x.degree(),
                });
            }
        }
        for x in coll {
            if !self.contains(x) {
                self.add_generators(std::slice::from_ref(x))?;
            }
        }
        Ok(())
    }

    /// Returns a new semigroup generated by this one's generators plus
    /// `coll`, leaving `self` untouched.
    ///
    /// # Errors
    /// Returns [`SemigroupError::DegreeMismatch`] if any candidate has the
    /// wrong degree.
    pub fn copy_add_generators(&self, coll: &[T]) -> Result<Self, SemigroupError> {
        let mut copy = self.clone();
        copy.add_generators(coll)?;
        Ok(copy)
    }

    /// Returns a new semigroup enlarged by the non-redundant elements of
    /// `coll`, leaving `self` untouched.
    ///
    /// # Errors
    /// Returns [`SemigroupError::DegreeMismatch`] if any candidate has the
    /// wrong degree.
    pub fn copy_closure(&self, coll: &[T]) -> Result<Self, SemigroupError> {
        let mut copy = self.clone();
        copy.closure(coll)?;
        Ok(copy)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Transformation;

    fn gens_t6() -> Vec<Transformation> {
        vec![
            Transformation::new(vec![0, 1, 2, 3, 4, 5]),
            Transformation::new(vec![1, 0, 2, 3, 4, 5]),
            Transformation::new(vec![4, 0, 1, 2, 3, 5]),
            Transformation::new(vec![5, 1, 2, 3, 4, 5]),
            Transformation::new(vec![1, 1, 2, 3, 4, 5]),
        ]
    }

    #[test]
    fn add_generators_one_at_a_time() {
        let gens = gens_t6();
        let mut s = Semigroup::new(&gens[..1]).unwrap();
        assert_eq!(s.size(), 1);
        assert_eq!(s.nr_idempotents(), 1);
        assert_eq!(s.nr_rules(), 1);

        s.add_generators(&gens[1..2]).unwrap();
        assert_eq!(s.size(), 2);
        assert_eq!(s.nr_idempotents(), 1);
        assert_eq!(s.nr_rules(), 4);

        s.add_generators(&gens[2..3]).unwrap();
        assert_eq!(s.size(), 120);
        assert_eq!(s.nr_idempotents(), 1);
        assert_eq!(s.nr_rules(), 25);

        s.add_generators(&gens[3..4]).unwrap();
        assert_eq!(s.size(), 1546);
        assert_eq!(s.nr_idempotents(), 32);
        assert_eq!(s.nr_rules(), 495);

        s.add_generators(&gens[4..5]).unwrap();
        assert_eq!(s.size(), 7776);
        assert_eq!(s.nr_idempotents(), 537);
        assert_eq!(s.nr_rules(), 2459);

        assert_eq!(s.letter_to_pos(0), 0);
        assert_eq!(s.letter_to_pos(1), 1);
        assert_eq!(s.letter_to_pos(2), 2);
        assert_eq!(s.letter_to_pos(3), 120);
        assert_eq!(s.letter_to_pos(4), 1546);
    }

    #[test]
    fn add_generators_mid_enumeration_matches_fresh_engine() {
        let gens = gens_t6();
        let mut incremental = Semigroup::new(&gens[..3]).unwrap();
        incremental.set_batch_size(64);
        incremental.enumerate(64);
        assert!(!incremental.is_done());
        incremental.add_generators(&gens[3..]).unwrap();

        let mut fresh = Semigroup::new(&gens).unwrap();
        assert_eq!(incremental.size(), fresh.size());
        assert_eq!(incremental.nr_rules(), fresh.nr_rules());

        // Same elements as sets; discovery order may differ after the
        // incremental path.
        for pos in 0..fresh.size() {
            let x = fresh[pos].clone();
            assert!(incremental.contains(&x));
        }
    }

    #[test]
    fn add_generator_already_in_semigroup_promotes_it() {
        let gens = gens_t6();
        let mut s = Semigroup::new(&gens).unwrap();
        let product = Transformation::product(&gens[1], &gens[2]);
        let old_size = s.size();
        let old_pos = s.position(&product).unwrap();
        s.add_generators(std::slice::from_ref(&product)).unwrap();
        assert_eq!(s.size(), old_size);
        assert_eq!(s.nr_generators(), 6);
        assert_eq!(s.letter_to_pos(5), old_pos);
        assert_eq!(s.length(old_pos), 1);
    }

    #[test]
    fn duplicate_candidate_becomes_duplicate_letter() {
        let gens = gens_t6();
        let mut s = Semigroup::new(&gens).unwrap();
        s.enumerate(super::super::LIMIT_MAX);
        s.add_generators(&gens[2..3]).unwrap();
        assert_eq!(s.nr_generators(), 6);
        assert_eq!(s.letter_to_pos(5), 2);
        assert_eq!(s.duplicate_generators(), &[(2, 5)]);
        assert_eq!(s.size(), 7776);
    }

    #[test]
    fn closure_skips_derivable_candidates() {
        let gens = gens_t6();
        let mut s = Semigroup::new(&gens[..3]).unwrap();
        let derivable = Transformation::product(&gens[1], &gens[2]);
        s.closure(&[derivable, gens[3].clone()]).unwrap();
        // The derivable candidate must not have become a letter.
        assert_eq!(s.nr_generators(), 4);
        assert_eq!(s.size(), 1546);
    }

    #[test]
    fn closure_earlier_candidate_wins() {
        let gens = gens_t6();
        let mut s = Semigroup::new(&gens[..2]).unwrap();
        // Two candidates that each generate the other over the base set:
        // the swap cycled once and the same swap cycled back.
        let a = gens[2].clone();
        let b = Transformation::product(&gens[2], &gens[1]);
        s.closure(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(s.nr_generators(), 3);
        assert_eq!(s.generator(2), &a);
        assert!(s.contains(&b));
    }

    #[test]
    fn copy_variants_leave_original_untouched() {
        let gens = gens_t6();
        let mut s = Semigroup::new(&gens[..2]).unwrap();
        assert_eq!(s.size(), 2);

        let mut extended = s.copy_add_generators(&gens[2..3]).unwrap();
        assert_eq!(extended.size(), 120);
        assert_eq!(s.size(), 2);
        assert_eq!(s.nr_generators(), 2);

        let mut closed = s.copy_closure(&gens[2..]).unwrap();
        assert_eq!(closed.size(), 7776);
        assert_eq!(s.size(), 2);
    }

    #[test]
    fn add_generators_rejects_wrong_degree() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        let err = s
            .add_generators(&[Transformation::new(vec![0, 1, 2])])
            .unwrap_err();
        assert_eq!(
            err,
            SemigroupError::DegreeMismatch {
                expected: 6,
                found: 3
            }
        );
    }

    #[test]
    fn empty_addition_is_a_no_op() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        let size = s.size();
        s.add_generators(&[]).unwrap();
        assert_eq!(s.current_size(), size);
        assert!(s.is_done());
    }
}
