use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};

/// Word identifier assigned by the tokenizer
pub type WordId = u32;

pub type CharOffset = u32;
pub type SentenceOffset = u32;
pub type WordOffset = u32;

/// Location of a token in its source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenPosition {
    pub char_offset: CharOffset,
    pub sentence_offset: SentenceOffset,
    pub word_offset: WordOffset,
}

impl TokenPosition {
    pub fn new(char_offset: CharOffset, sentence_offset: SentenceOffset, word_offset: WordOffset) -> Self {
        TokenPosition {
            char_offset,
            sentence_offset,
            word_offset,
        }
    }
}

/// Allocate `len` zeroed values, reporting allocation failure instead of aborting
pub(crate) fn alloc_zeroed<T: Default + Clone>(len: usize, what: &str) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::out_of_memory(what, len.saturating_mul(std::mem::size_of::<T>())))?;
    buffer.resize(len, T::default());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_zeroed_fills_with_default() {
        let buffer: Vec<WordId> = alloc_zeroed(4, "test buffer").unwrap();
        assert_eq!(buffer, vec![0, 0, 0, 0]);
        assert!(buffer.capacity() >= 4);
    }

    #[test]
    fn alloc_zeroed_reports_impossible_request() {
        let err = alloc_zeroed::<u64>(usize::MAX, "huge buffer").unwrap_err();
        assert!(matches!(err.kind, crate::core::error::ErrorKind::OutOfMemory { .. }));
    }
}
