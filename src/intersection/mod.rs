pub mod probe;
pub mod raw;

use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::core::config::IntersectionConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::IntersectionStats;
use crate::core::types::WordId;
use crate::index::guard::guard_from_config;
use crate::index::word_list::DocumentWordList;
use probe::{LinearProbe, QueryProbe, SortedProbe};

pub use raw::{PositionedWords, RawIntersection, RawWords};

/// Below this many word comparisons sorting the query does not pay off
const NESTED_LOOP_WORK_LIMIT: usize = 100_000;

/// Algorithm used to look up document words in the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntersectionApproach {
    /// Compare every document word with every query word
    TwoNestedLoops,
    /// Quicksort a copy of the query, then binary search it
    QSortAndBinarySearch,
    /// Heapsort a copy of the query, then binary search it
    HeapSortAndBinarySearch,
}

impl IntersectionApproach {
    pub const ALL: [IntersectionApproach; 3] = [
        IntersectionApproach::TwoNestedLoops,
        IntersectionApproach::QSortAndBinarySearch,
        IntersectionApproach::HeapSortAndBinarySearch,
    ];

    /// Nested loops for small inputs (a few hundred words), sorting otherwise
    pub fn recommended(total_words: usize, query_length: usize) -> Self {
        if total_words.saturating_mul(query_length) <= NESTED_LOOP_WORK_LIMIT {
            IntersectionApproach::TwoNestedLoops
        } else {
            IntersectionApproach::QSortAndBinarySearch
        }
    }
}

/// Intersection policy; only the default is defined so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum IntersectionMode {
    #[default]
    Defaults = 0,
}

impl TryFrom<u32> for IntersectionMode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(IntersectionMode::Defaults),
            other => Err(Error::new(
                ErrorKind::UnsupportedMode(other),
                format!("Invalid intersection mode ! Value {}", other),
            )),
        }
    }
}

/// Computes per-document intersections with a query
///
/// The input list and query are only borrowed; every call returns a newly
/// allocated list with the capacities and filled-slot count of the input.
/// Each result slot holds the matched words once, in the order they first
/// appear in the document.
#[derive(Debug, Clone, Default)]
pub struct IntersectionEngine {
    config: IntersectionConfig,
}

impl IntersectionEngine {
    pub fn new(config: IntersectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(IntersectionEngine { config })
    }

    pub fn config(&self) -> &IntersectionConfig {
        &self.config
    }

    pub fn intersect(
        &self,
        object: &DocumentWordList,
        data: &[WordId],
        approach: IntersectionApproach,
        mode: IntersectionMode,
    ) -> Result<DocumentWordList> {
        self.intersect_with_stats(object, data, approach, mode)
            .map(|(result, _)| result)
    }

    pub fn intersect_with_stats(
        &self,
        object: &DocumentWordList,
        data: &[WordId],
        approach: IntersectionApproach,
        mode: IntersectionMode,
    ) -> Result<(DocumentWordList, IntersectionStats)> {
        Self::check_query(object, data, mode)?;

        let mut stats = IntersectionStats::new(approach, data.len());
        let result = match approach {
            IntersectionApproach::TwoNestedLoops => {
                self.scan_documents(object, &LinearProbe::new(data), &mut stats)?
            }
            IntersectionApproach::QSortAndBinarySearch => {
                self.scan_documents(object, &SortedProbe::quick_sorted(data), &mut stats)?
            }
            IntersectionApproach::HeapSortAndBinarySearch => {
                self.scan_documents(object, &SortedProbe::heap_sorted(data), &mut stats)?
            }
        };

        debug!(
            approach = ?approach,
            documents = stats.documents_scanned,
            words_scanned = stats.words_scanned,
            words_matched = stats.words_matched,
            guard_bytes = stats.guard_bytes,
            "intersection finished"
        );

        Ok((result, stats))
    }

    fn check_query(object: &DocumentWordList, data: &[WordId], mode: IntersectionMode) -> Result<()> {
        if data.is_empty() {
            return Err(Error::invalid_argument("data length is 0 !"));
        }
        match mode {
            IntersectionMode::Defaults => {}
        }
        if data.len() > object.max_words_per_document() {
            return Err(Error::capacity_exceeded("data", data.len(), object.max_words_per_document()));
        }
        Ok(())
    }

    /// Shared per-document loop; approaches differ only in the probe
    fn scan_documents<P: QueryProbe>(
        &self,
        object: &DocumentWordList,
        probe: &P,
        stats: &mut IntersectionStats,
    ) -> Result<DocumentWordList> {
        let mut result = DocumentWordList::new_intersection_result(object)?;
        let mut guard = guard_from_config(&self.config)?;
        let mut guard_bytes = guard.memory_bytes();

        for (slot, words) in object.iter() {
            guard.reset();

            for &word in words {
                if probe.contains(word) && guard.insert(word)? {
                    result.push_word(slot, word)?;
                    stats.words_matched += 1;
                }
            }

            guard_bytes = guard_bytes.max(guard.memory_bytes());
            stats.documents_scanned += 1;
            stats.words_scanned += words.len();
        }

        stats.guard_bytes = guard_bytes;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> DocumentWordList {
        let mut list = DocumentWordList::new(2, 5).unwrap();
        list.append(&[3, 7, 3, 9]).unwrap();
        list.append(&[1, 2, 3]).unwrap();
        list
    }

    #[test]
    fn every_approach_keeps_document_order() {
        let list = sample_list();
        let engine = IntersectionEngine::default();

        for approach in IntersectionApproach::ALL {
            let result = engine
                .intersect(&list, &[3, 9, 1], approach, IntersectionMode::Defaults)
                .unwrap();
            assert_eq!(result.get(0), Some(&[3, 9][..]), "{:?}", approach);
            assert_eq!(result.get(1), Some(&[1, 3][..]), "{:?}", approach);
            assert!(result.is_intersection_result());
        }
    }

    #[test]
    fn stats_count_scanned_and_matched_words() {
        let list = sample_list();
        let (_, stats) = IntersectionEngine::default()
            .intersect_with_stats(&list, &[3, 9, 1], IntersectionApproach::TwoNestedLoops, IntersectionMode::Defaults)
            .unwrap();

        assert_eq!(stats.documents_scanned, 2);
        assert_eq!(stats.words_scanned, 7);
        assert_eq!(stats.words_matched, 4);
        assert_eq!(stats.guard_bytes, 1000);
    }

    #[test]
    fn unknown_mode_selector_is_rejected() {
        assert_eq!(IntersectionMode::try_from(0).unwrap(), IntersectionMode::Defaults);
        let err = IntersectionMode::try_from(3).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedMode(3));
    }

    #[test]
    fn recommendation_switches_to_sorting_for_large_inputs() {
        assert_eq!(IntersectionApproach::recommended(300, 300), IntersectionApproach::TwoNestedLoops);
        assert_eq!(IntersectionApproach::recommended(100_000, 500), IntersectionApproach::QSortAndBinarySearch);
    }
}
