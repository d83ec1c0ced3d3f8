//! Minimal factorisations and the defining relations.
//!
//! The relations emitted by [`Semigroup::next_relation`] form a
//! length-reducing confluent rewriting system: every relation equates a
//! non-reduced word `word(p) · l` with the strictly shorter minimal word
//! of its product, all length-2 relations precede all length-3 relations,
//! and replaying the relations as rewrite rules sends every word over the
//! generators to a unique normal form.

use super::{Letter, Position, Semigroup, Word, LIMIT_MAX, UNDEFINED};
use crate::element::Element;

/// One defining relation of the semigroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Two letters carry equal generators: the words `[first]` and
    /// `[second]` are equal.
    DuplicateGenerators(Letter, Letter),
    /// `word(pos) · letter` equals the minimal word of `product`:
    /// `elements[pos] * gens[letter] == elements[product]`.
    Product(Position, Letter, Position),
}

impl<T: Element> Semigroup<T> {
    /// The minimal word over the generators equal to the element at
    /// `pos`, enumerating until that element exists. Returns `None` if the
    /// semigroup has fewer than `pos + 1` elements.
    ///
    /// Idempotent: repeated calls return the same word.
    pub fn minimal_factorisation(&mut self, pos: Position) -> Option<Word> {
        if pos >= self.nr && !self.is_done() {
            self.enumerate(pos.saturating_add(1));
        }
        if pos >= self.nr {
            return None;
        }
        let mut word = Word::new();
        let mut current = pos;
        while current != UNDEFINED {
            word.push(self.final_letters[current]);
            current = self.prefixes[current];
        }
        word.reverse();
        Some(word)
    }

    /// The minimal word of the element `x`, or `None` if `x` is not a
    /// member.
    pub fn factorisation(&mut self, x: &T) -> Option<Word> {
        let pos = self.position(x)?;
        self.minimal_factorisation(pos)
    }

    /// Rewinds [`next_relation`](Self::next_relation) to the first
    /// relation.
    pub fn reset_relation_cursor(&mut self) {
        self.relation_pos = UNDEFINED;
        self.relation_gen = 0;
    }

    /// The next defining relation, or `None` once all have been emitted.
    ///
    /// Duplicate-generator relations come first; then the cursor advances
    /// through `(enumeration order, letter)` pairs lexicographically,
    /// emitting the pairs whose extension is non-reduced but whose suffix
    /// extension is reduced — exactly the rules counted by
    /// [`nr_rules`](Self::nr_rules). Enumerates to completion on first
    /// use.
    pub fn next_relation(&mut self) -> Option<Relation> {
        self.enumerate(LIMIT_MAX);
        if self.relation_pos == self.nr {
            return None;
        }
        if self.relation_pos == UNDEFINED {
            // Duplicate generators are the length-1 relations.
            if self.relation_gen < self.duplicate_gens.len() {
                let (earlier, later) = self.duplicate_gens[self.relation_gen];
                self.relation_gen += 1;
                return Some(Relation::DuplicateGenerators(earlier, later));
            }
            self.relation_gen = 0;
            self.relation_pos = 0;
        }
        while self.relation_pos < self.nr {
            let pos = self.enum_index[self.relation_pos];
            while self.relation_gen < self.gens.len() {
                let letter = self.relation_gen;
                if !self.reduced.get(pos, letter)
                    && (self.relation_pos < self.lenindex[1]
                        || self.reduced.get(self.suffixes[pos], letter))
                {
                    self.relation_gen += 1;
                    return Some(Relation::Product(pos, letter, self.right.get(pos, letter)));
                }
                self.relation_gen += 1;
            }
            self.relation_gen = 0;
            self.relation_pos += 1;
        }
        None
    }

    /// All defining relations from a fresh cursor.
    pub fn relations(&mut self) -> Vec<Relation> {
        self.reset_relation_cursor();
        let mut out = Vec::new();
        while let Some(relation) = self.next_relation() {
            out.push(relation);
        }
        out
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

    /// Evaluates a word by walking the right Cayley graph from the first
    /// letter.
    fn evaluate_word(s: &Semigroup<Transformation>, word: &[usize]) -> usize {
        let mut pos = s.letter_to_pos(word[0]);
        for &letter in &word[1..] {
            pos = s.right(pos, letter);
        }
        pos
    }

    #[test]
    fn factorisation_of_one_element() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        s.set_batch_size(1024);
        let word = s.minimal_factorisation(5537).unwrap();
        assert_eq!(word, vec![1, 2, 2, 2, 3, 2, 4, 1, 2, 2, 3]);
        assert_eq!(s.current_length(5537), 11);
        assert_eq!(s.length(5537), 11);
        assert_eq!(s.current_max_word_length(), 11);
        assert_eq!(s.current_size(), 5539);
        assert_eq!(s.current_nr_rules(), 1484);

        assert_eq!(s.length(7775), 16);
        assert_eq!(s.current_max_word_length(), 16);
    }

    #[test]
    fn factorisation_of_every_element_evaluates_back() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        s.set_batch_size(1024);
        let size = s.size();
        for pos in 0..size {
            let word = s.minimal_factorisation(pos).unwrap();
            assert_eq!(evaluate_word(&s, &word), pos);
            assert_eq!(word.len(), s.current_length(pos));
        }
    }

    #[test]
    fn factorisation_of_elements_and_missing_positions() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        let x = Transformation::new(vec![5, 1, 1, 2, 3, 5]);
        let word = s.factorisation(&x).unwrap();
        assert_eq!(s.word_to_element(&word), Some(x));
        assert_eq!(s.minimal_factorisation(1_000_000), None);
        assert_eq!(s.factorisation(&Transformation::new(vec![0; 6])), None);
    }

    #[test]
    fn factorisation_is_idempotent() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        let first = s.minimal_factorisation(777).unwrap();
        let second = s.minimal_factorisation(777).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn relations_count_matches_nr_rules() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        let relations = s.relations();
        assert_eq!(relations.len(), s.nr_rules());
        assert_eq!(relations.len(), 2459);
    }

    #[test]
    fn relations_hold_and_reduce_length() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        s.size();
        for relation in s.relations() {
            match relation {
                Relation::DuplicateGenerators(a, b) => {
                    assert_eq!(s.generator(a), s.generator(b));
                }
                Relation::Product(pos, letter, product) => {
                    let lhs =
                        Transformation::product(&s[pos], s.generator(letter));
                    assert_eq!(lhs, s[product]);
                    // Length-reducing: the right side is strictly shorter.
                    assert!(s.current_length(product) <= s.current_length(pos));
                }
            }
        }
    }

    #[test]
    fn relations_come_shortest_first() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        let mut last_length = 0;
        for relation in s.relations() {
            let length = match relation {
                Relation::DuplicateGenerators(..) => 1,
                Relation::Product(pos, ..) => s.current_length(pos) + 1,
            };
            assert!(length >= last_length);
            last_length = length;
        }
    }

    #[test]
    fn relation_multiset_is_independent_of_batch_size() {
        let mut coarse = Semigroup::new(&gens_t6()).unwrap();
        let mut fine = Semigroup::new(&gens_t6()).unwrap();
        fine.set_batch_size(97);
        let mut coarse_rels = coarse.relations();
        let mut fine_rels = fine.relations();
        let key = |r: &Relation| match *r {
            Relation::DuplicateGenerators(a, b) => (0, a, b, 0),
            Relation::Product(p, l, q) => (1, p, l, q),
        };
        coarse_rels.sort_by_key(key);
        fine_rels.sort_by_key(key);
        assert_eq!(coarse_rels, fine_rels);
    }

    #[test]
    fn cursor_resets_and_duplicates_come_first() {
        let gens = vec![
            Transformation::new(vec![0, 1, 0]),
            Transformation::new(vec![0, 1, 0]),
            Transformation::new(vec![0, 1, 2]),
        ];
        let mut s = Semigroup::new(&gens).unwrap();
        let first = s.next_relation().unwrap();
        assert_eq!(first, Relation::DuplicateGenerators(0, 1));
        let _ = s.relations();
        s.reset_relation_cursor();
        assert_eq!(s.next_relation().unwrap(), first);
    }
}
