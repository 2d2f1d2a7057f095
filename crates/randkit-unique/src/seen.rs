//! Insertion-ordered set backing the uniqueness caches.

use std::collections::HashSet;
use std::hash::Hash;

use randkit_core::RandomEngine;

/// A set that remembers insertion order.
///
/// Membership is answered by a hash set; the ordered `Vec` view is kept in
/// step with every mutation, so `values` and `pick` never rebuild it.
#[derive(Debug, Clone)]
pub struct SeenSet<T> {
    members: HashSet<T>,
    ordered: Vec<T>,
}

impl<T: Eq + Hash + Clone> SeenSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Whether `value` is held.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    /// Adds `value`, returning `false` if it was already held.
    pub fn insert(&mut self, value: T) -> bool {
        if !self.members.insert(value.clone()) {
            return false;
        }
        self.ordered.push(value);
        true
    }

    /// Removes `value`, returning `false` if it was not held.
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.members.remove(value) {
            return false;
        }
        self.ordered.retain(|held| held != value);
        true
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.members.clear();
        self.ordered.clear();
    }

    /// The held values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.ordered
    }

    /// Picks a held value uniformly using one engine draw.
    ///
    /// Returns `None` without drawing if the set is empty.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn pick(&self, engine: &mut dyn RandomEngine) -> Option<&T> {
        if self.ordered.is_empty() {
            return None;
        }
        let fraction = f64::from(engine.next()) / engine.range() as f64;
        let index = (fraction * self.ordered.len() as f64).floor() as usize;
        self.ordered.get(index.min(self.ordered.len() - 1))
    }
}

impl<T: Eq + Hash + Clone> Default for SeenSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for SeenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkit_test_support::{ConstantEngine, SequenceEngine};

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut set = SeenSet::new();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(!set.insert(3));
        assert!(set.insert(2));
        assert_eq!(set.values(), &[3, 1, 2]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(!set.contains(&4));
    }

    #[test]
    fn test_clear_empties_both_views() {
        let mut set: SeenSet<&str> = ["a", "b"].into_iter().collect();
        set.clear();
        assert!(set.is_empty());
        assert!(set.values().is_empty());
        assert!(!set.contains(&"a"));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut set: SeenSet<i64> = vec![1, 2, 3].into_iter().collect();
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert_eq!(set.values(), &[1, 3]);
        assert!(!set.contains(&2));
    }

    #[test]
    fn test_from_iter_drops_duplicates() {
        let set: SeenSet<i64> = vec![5, 5, 6].into_iter().collect();
        assert_eq!(set.values(), &[5, 6]);
    }

    #[test]
    fn test_pick_spans_every_position() {
        let set: SeenSet<char> = "wxyz".chars().collect();
        let mut engine = SequenceEngine::new(vec![0, 1, 2, 3]).with_max(3);
        let picked: Vec<char> = (0..4).map(|_| *set.pick(&mut engine).unwrap()).collect();
        assert_eq!(picked, vec!['w', 'x', 'y', 'z']);
    }

    #[test]
    fn test_pick_on_empty_set_does_not_draw() {
        let set: SeenSet<u8> = SeenSet::new();
        let mut engine = SequenceEngine::new(vec![]);
        assert!(set.pick(&mut engine).is_none());
        assert_eq!(engine.draws(), 0);
    }

    #[test]
    fn test_pick_top_draw_selects_last() {
        let set: SeenSet<u8> = (0..7).collect();
        assert_eq!(set.pick(&mut ConstantEngine(u32::MAX)), Some(&6));
    }
}
