//! Idempotent scan.
//!
//! Idempotents are found once, by a bounded parallel sweep over the fully
//! enumerated element table, and cached as both a sorted position list and
//! a per-position flag vector. This is the only parallel phase of the
//! engine: workers read the element table, collect hits into thread-local
//! buffers, and merge them under one mutex.

use super::{Position, Semigroup, LIMIT_MAX};
use crate::element::Element;
use std::sync::Mutex;

impl<T: Element + Sync> Semigroup<T> {
    /// The number of idempotents; enumerates and scans on first use.
    pub fn nr_idempotents(&mut self) -> usize {
        self.find_idempotents();
        self.idempotents.len()
    }

    /// Whether the element at `pos` is an idempotent.
    ///
    /// # Panics
    /// Panics if `pos` is not a position of the semigroup.
    pub fn is_idempotent(&mut self, pos: Position) -> bool {
        self.find_idempotents();
        self.is_idempotent_flags[pos]
    }

    /// The positions of all idempotents, sorted.
    pub fn idempotents(&mut self) -> &[Position] {
        self.find_idempotents();
        &self.idempotents
    }

    /// Runs the scan if its cache is empty.
    fn find_idempotents(&mut self) {
        if self.idempotents_found {
            return;
        }
        self.enumerate(LIMIT_MAX);

        let nr = self.nr;
        let nr_threads = self.max_threads.max(1).min(nr.max(1));
        let chunk = nr.div_ceil(nr_threads);
        let elements = &self.elements;
        let id = &self.id;
        let merged: Mutex<Vec<Vec<Position>>> = Mutex::new(Vec::new());

        std::thread::scope(|scope| {
            for thread_index in 0..nr_threads {
                let begin = thread_index * chunk;
                let end = (begin + chunk).min(nr);
                let merged = &merged;
                scope.spawn(move || {
                    let mut found: Vec<Position> = Vec::new();
                    let mut tmp = id.clone();
                    for pos in begin..end {
                        tmp.multiply(&elements[pos], &elements[pos]);
                        if tmp == elements[pos] {
                            found.push(pos);
                        }
                    }
                    merged
                        .lock()
                        .expect("idempotent merge mutex poisoned")
                        .push(found);
                });
            }
        });

        let mut idempotents: Vec<Position> = merged
            .into_inner()
            .expect("idempotent merge mutex poisoned")
            .into_iter()
            .flatten()
            .collect();
        idempotents.sort_unstable();

        let mut flags = vec![false; nr];
        for &pos in &idempotents {
            flags[pos] = true;
        }
        self.idempotents = idempotents;
        self.is_idempotent_flags = flags;
        self.idempotents_found = true;
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
    fn small_semigroup_idempotents() {
        let gens = vec![
            Transformation::new(vec![0, 1, 0]),
            Transformation::new(vec![0, 1, 2]),
        ];
        let mut s = Semigroup::new(&gens).unwrap();
        assert_eq!(s.nr_idempotents(), 2);
        assert!(s.is_idempotent(0));
        assert!(s.is_idempotent(1));
        assert_eq!(s.idempotents(), &[0, 1]);
    }

    #[test]
    fn idempotent_positions_square_to_themselves() {
        let mut s = Semigroup::new(&gens_t6()).unwrap();
        assert_eq!(s.nr_idempotents(), 537);
        let idempotents = s.idempotents().to_vec();
        for &pos in &idempotents {
            let square = Transformation::product(&s[pos], &s[pos]);
            assert_eq!(square, s[pos]);
            assert_eq!(s.fast_product(pos, pos), pos);
        }
        // And nothing outside the list squares to itself.
        let size = s.size();
        let mut count = 0;
        for pos in 0..size {
            if s.is_idempotent(pos) {
                count += 1;
            } else {
                let square = Transformation::product(&s[pos], &s[pos]);
                assert_ne!(square, s[pos]);
            }
        }
        assert_eq!(count, 537);
    }

    #[test]
    fn single_thread_matches_parallel() {
        let mut serial = Semigroup::new(&gens_t6()).unwrap();
        serial.set_max_threads(1);
        let mut parallel = Semigroup::new(&gens_t6()).unwrap();
        parallel.set_max_threads(64);
        assert_eq!(serial.nr_idempotents(), parallel.nr_idempotents());
        assert_eq!(serial.idempotents(), parallel.idempotents());
    }
}
