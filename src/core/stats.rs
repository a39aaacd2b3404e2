use serde::{Serialize, Deserialize};
use crate::intersection::IntersectionApproach;

/// Counters collected during one intersection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionStats {
    pub approach: IntersectionApproach,
    pub documents_scanned: usize,
    pub words_scanned: usize,
    pub words_matched: usize,
    pub query_length: usize,
    pub guard_bytes: usize,     // Peak guard memory; encoded bitmap size for the sparse guard
}

impl IntersectionStats {
    pub fn new(approach: IntersectionApproach, query_length: usize) -> Self {
        IntersectionStats {
            approach,
            documents_scanned: 0,
            words_scanned: 0,
            words_matched: 0,
            query_length,
            guard_bytes: 0,
        }
    }

    /// Fraction of scanned words that survived into the result
    pub fn match_ratio(&self) -> f64 {
        if self.words_scanned == 0 {
            return 0.0;
        }
        self.words_matched as f64 / self.words_scanned as f64
    }
}
