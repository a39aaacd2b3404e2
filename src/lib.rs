pub mod core;
pub mod index;
pub mod intersection;

pub use crate::core::config::{GuardStrategy, IntersectionConfig};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::stats::IntersectionStats;
pub use crate::core::types::{TokenPosition, WordId};
pub use crate::index::word_list::DocumentWordList;
pub use crate::intersection::{IntersectionApproach, IntersectionEngine, IntersectionMode};

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                            WORDSECTX STRUCT ARCHITECTURE                                    │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── CORE LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌──────────────────────────┐  ┌──────────────────────────┐  ┌──────────────────────────┐  │
│  │ struct IntersectionConfig│  │ struct Error             │  │ struct IntersectionStats │  │
│  │ • guard_strategy         │  │ • kind: ErrorKind        │  │ • approach               │  │
│  │ • guard_initial_size     │  │ • context: String        │  │ • documents_scanned      │  │
│  │ • guard_growth_step      │  └──────────────────────────┘  │ • words_scanned          │  │
│  │ • guard_max_value        │                                │ • words_matched          │  │
│  └──────────────────────────┘  ┌──────────────────────────┐  │ • guard_bytes            │  │
│                                │ struct TokenPosition     │  └──────────────────────────┘  │
│                                │ • char/sentence/word off │                                │
│                                └──────────────────────────┘                                │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── INDEX LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────┐  ┌───────────────────────────────────────┐  │
│  │ struct DocumentWordList                    │  │ trait WordGuard                       │  │
│  │ data: Vec<Vec<WordId>>   // one per slot   │  │ • reset() / insert() / memory_bytes() │  │
│  │ arrays_lengths: Vec<usize>                 │  │                                       │  │
│  │ number_of_arrays, max_array_length         │  │ DenseGuard  (Vec<bool>, step growth)  │  │
│  │ next_free_array          // append cursor  │  │ SparseGuard (RoaringBitmap)           │  │
│  │ intersection_data        // result tag     │  └───────────────────────────────────────┘  │
│  └────────────────────────────────────────────┘                                             │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── INTERSECTION LAYER ─────────────────────────────────────┐
│                                                                                              │
│  IntersectionEngine ──scan_documents──> QueryProbe ──impl──> LinearProbe   (nested loops)   │
│          │                    │                      └─impl──> SortedProbe (qsort | heap)   │
│          │                    └──dedups_with──> WordGuard                                   │
│          │                                                                                  │
│          ├──borrows──> DocumentWordList ──returns new──> DocumentWordList (intersection)    │
│          │                                                                                  │
│          └──intersect_raw──> PositionedWords × RawWords ──> RawIntersection                 │
│                                                                                              │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
