use std::collections::BinaryHeap;
use crate::core::types::WordId;

/// Membership test against the query words
pub trait QueryProbe {
    fn contains(&self, word: WordId) -> bool;
}

/// Compares against every query word in turn
pub struct LinearProbe<'a> {
    query: &'a [WordId],
}

impl<'a> LinearProbe<'a> {
    pub fn new(query: &'a [WordId]) -> Self {
        LinearProbe { query }
    }
}

impl QueryProbe for LinearProbe<'_> {
    fn contains(&self, word: WordId) -> bool {
        self.query.contains(&word)
    }
}

/// Binary search over an ascending copy of the query
pub struct SortedProbe {
    sorted: Vec<WordId>,
}

impl SortedProbe {
    /// Sort with pattern-defeating quicksort; O(Q log Q) on average
    pub fn quick_sorted(query: &[WordId]) -> Self {
        let mut sorted = query.to_vec();
        sorted.sort_unstable();
        SortedProbe { sorted }
    }

    /// Sort through a binary heap; O(Q log Q) on every input
    pub fn heap_sorted(query: &[WordId]) -> Self {
        let heap = BinaryHeap::from(query.to_vec());
        SortedProbe {
            sorted: heap.into_sorted_vec(),
        }
    }

    pub fn sorted(&self) -> &[WordId] {
        &self.sorted
    }
}

impl QueryProbe for SortedProbe {
    fn contains(&self, word: WordId) -> bool {
        self.sorted.binary_search(&word).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sorts_agree() {
        let query = [9, 3, 3, 7, 0, 12, 1];
        let quick = SortedProbe::quick_sorted(&query);
        let heap = SortedProbe::heap_sorted(&query);
        assert_eq!(quick.sorted(), &[0, 1, 3, 3, 7, 9, 12]);
        assert_eq!(heap.sorted(), quick.sorted());
    }

    #[test]
    fn probes_find_the_same_words() {
        let query = [5, 1, 5, 8];
        let linear = LinearProbe::new(&query);
        let sorted = SortedProbe::heap_sorted(&query);
        for word in 0..10 {
            assert_eq!(linear.contains(word), sorted.contains(word), "word {}", word);
        }
    }
}
