//! Identifier allocation for newly created records

use rand::Rng;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Upper bound for the random seed used when a collection holds no numeric ids
const RANDOM_SEED_MAX: u64 = u32::MAX as u64;

/// Allocates string identifiers from a monotonically increasing counter
///
/// The counter is seeded lazily on the first allocation: one above the largest
/// numeric identifier already held by the collection, or a random value when
/// there is none. Candidates that collide with a held identifier are skipped.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: Mutex<Option<u64>>,
}

impl IdGenerator {
    /// Create a generator that seeds itself on first use
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose first candidate is `seed`
    pub fn starting_at(seed: u64) -> Self {
        Self {
            next: Mutex::new(Some(seed)),
        }
    }

    /// Allocate an identifier not present in `existing`
    pub fn next_id<'a, I>(&self, existing: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let taken: HashSet<&str> = existing.into_iter().collect();
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);

        let mut candidate = match *next {
            Some(value) => value,
            None => seed_from(&taken),
        };

        loop {
            let id = candidate.to_string();
            candidate = candidate.wrapping_add(1);
            if !taken.contains(id.as_str()) {
                *next = Some(candidate);
                return id;
            }
        }
    }
}

fn seed_from(taken: &HashSet<&str>) -> u64 {
    taken
        .iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map(|max| max.wrapping_add(1))
        .unwrap_or_else(|| rand::rng().random_range(1..=RANDOM_SEED_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_above_highest_numeric_id() {
        let generator = IdGenerator::new();
        assert_eq!(generator.next_id(["3", "17", "9"]), "18");
        assert_eq!(generator.next_id(["3", "17", "9", "18"]), "19");
    }

    #[test]
    fn test_ignores_non_numeric_ids_when_seeding() {
        let generator = IdGenerator::new();
        assert_eq!(generator.next_id(["abc", "4"]), "5");
    }

    #[test]
    fn test_random_seed_when_collection_is_empty() {
        let generator = IdGenerator::new();
        let first: u64 = generator.next_id([]).parse().expect("numeric id");
        let second: u64 = generator.next_id([]).parse().expect("numeric id");
        assert!(first >= 1);
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_skips_colliding_candidates() {
        let generator = IdGenerator::starting_at(10);
        assert_eq!(generator.next_id(["10", "11", "13"]), "12");
        assert_eq!(generator.next_id(["10", "11", "12", "13"]), "14");
    }

    #[test]
    fn test_no_reuse_after_removal() {
        let generator = IdGenerator::starting_at(1);
        assert_eq!(generator.next_id([]), "1");
        // "1" was deleted; the counter still moves forward
        assert_eq!(generator.next_id([]), "2");
    }
}
