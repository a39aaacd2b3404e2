use roaring::RoaringBitmap;
use tracing::trace;
use crate::core::config::{GuardStrategy, IntersectionConfig};
use crate::core::error::{Error, Result};
use crate::core::types::WordId;

/// Remembers which word IDs were already emitted for the current document
pub trait WordGuard {
    /// Forget every word; called at the start of each document slot
    fn reset(&mut self);

    /// Mark `word` as seen; returns `true` the first time it is seen since the last reset
    fn insert(&mut self, word: WordId) -> Result<bool>;

    /// Memory held by the guard; for bitmap guards this is the encoded size, an approximation
    fn memory_bytes(&self) -> usize;
}

/// Build the guard for a config already checked by `IntersectionConfig::validate`
pub fn guard_from_config(config: &IntersectionConfig) -> Result<Box<dyn WordGuard>> {
    match config.guard_strategy {
        GuardStrategy::Dense => Ok(Box::new(DenseGuard::new(
            config.guard_initial_size,
            config.guard_growth_step,
            config.guard_max_value,
        )?)),
        GuardStrategy::Sparse => Ok(Box::new(SparseGuard::new())),
    }
}

/// Flag table indexed by word ID
///
/// The table only grows, in whole `growth_step` increments, until the largest
/// value seen is addressable. Flags set before a growth survive it.
pub struct DenseGuard {
    flags: Vec<bool>,
    growth_step: usize,
    max_value: Option<WordId>,
}

impl DenseGuard {
    pub fn new(initial_size: usize, growth_step: usize, max_value: Option<WordId>) -> Result<Self> {
        if growth_step == 0 {
            return Err(Error::invalid_argument("Guard growth step is 0 !"));
        }
        let flags = crate::core::types::alloc_zeroed(initial_size, "the multiple guard")?;
        Ok(DenseGuard {
            flags,
            growth_step,
            max_value,
        })
    }

    /// Number of addressable word IDs
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn check_ceiling(&self, word: WordId) -> Result<()> {
        match self.max_value {
            Some(max_value) if word > max_value => Err(Error::capacity_exceeded(
                "Word ID for the multiple guard",
                word as usize,
                max_value as usize,
            )),
            _ => Ok(()),
        }
    }

    fn grow_to_fit(&mut self, word: WordId) -> Result<()> {
        let required = word as usize + 1;
        let missing = required - self.flags.len();
        let steps = missing.div_ceil(self.growth_step);
        let new_len = self.flags.len() + steps * self.growth_step;

        self.flags
            .try_reserve_exact(new_len - self.flags.len())
            .map_err(|_| Error::out_of_memory("the multiple guard", new_len))?;
        self.flags.resize(new_len, false);

        trace!(word, new_len, "grew multiple guard");
        Ok(())
    }
}

impl WordGuard for DenseGuard {
    fn reset(&mut self) {
        self.flags.fill(false);
    }

    fn insert(&mut self, word: WordId) -> Result<bool> {
        // The table may already reach past the ceiling after a whole-step growth
        self.check_ceiling(word)?;
        if word as usize >= self.flags.len() {
            self.grow_to_fit(word)?;
        }
        let flag = &mut self.flags[word as usize];
        if *flag {
            return Ok(false);
        }
        *flag = true;
        Ok(true)
    }

    fn memory_bytes(&self) -> usize {
        self.flags.len() * std::mem::size_of::<bool>()
    }
}

/// Bitmap-backed guard without an upper bound on word IDs
pub struct SparseGuard {
    seen: RoaringBitmap,
}

impl SparseGuard {
    pub fn new() -> Self {
        SparseGuard {
            seen: RoaringBitmap::new(),
        }
    }
}

impl Default for SparseGuard {
    fn default() -> Self {
        SparseGuard::new()
    }
}

impl WordGuard for SparseGuard {
    fn reset(&mut self) {
        self.seen.clear();
    }

    fn insert(&mut self, word: WordId) -> Result<bool> {
        Ok(self.seen.insert(word))
    }

    fn memory_bytes(&self) -> usize {
        self.seen.serialized_size()
    }
}
