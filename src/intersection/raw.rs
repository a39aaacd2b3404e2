use tracing::debug;
use crate::core::error::{Error, Result};
use crate::core::types::{CharOffset, SentenceOffset, TokenPosition, WordId, WordOffset};
use crate::index::guard::guard_from_config;
use crate::index::word_list::DocumentWordList;
use crate::intersection::IntersectionEngine;
use crate::intersection::probe::{LinearProbe, QueryProbe};

/// Word IDs of one source, annotated with where each token occurs
#[derive(Debug, Clone, Copy)]
pub struct PositionedWords<'a> {
    pub id: &'a str,
    pub words: &'a [WordId],
    pub char_offsets: &'a [CharOffset],
    pub sentence_offsets: &'a [SentenceOffset],
    pub word_offsets: &'a [WordOffset],
}

impl PositionedWords<'_> {
    fn position(&self, index: usize) -> TokenPosition {
        TokenPosition::new(self.char_offsets[index], self.sentence_offsets[index], self.word_offsets[index])
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::invalid_argument("ID of the first data array is empty !"));
        }
        if self.words.is_empty() {
            return Err(Error::invalid_argument("data_1 length is 0 !"));
        }
        for (name, length) in [
            ("char offsets", self.char_offsets.len()),
            ("sentence offsets", self.sentence_offsets.len()),
            ("word offsets", self.word_offsets.len()),
        ] {
            if length != self.words.len() {
                return Err(Error::invalid_argument(format!(
                    "Number of {} ({}) differs from data_1 length ({}) !",
                    name,
                    length,
                    self.words.len()
                )));
            }
        }
        Ok(())
    }
}

/// Word IDs of one source without positions
#[derive(Debug, Clone, Copy)]
pub struct RawWords<'a> {
    pub id: &'a str,
    pub words: &'a [WordId],
}

/// Matches of two raw word streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIntersection {
    pub source_ids: (String, String),
    /// Single slot with the matched words in first-source order
    pub words: DocumentWordList,
    /// Position of each matched word's first occurrence in the first source
    pub positions: Vec<TokenPosition>,
}

impl RawIntersection {
    pub fn matched_words(&self) -> &[WordId] {
        self.words.get(0).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, TokenPosition)> + '_ {
        self.matched_words().iter().copied().zip(self.positions.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl IntersectionEngine {
    /// Nested scan of two raw word streams, keeping the positions of the matches
    pub fn intersect_raw(&self, first: &PositionedWords, second: &RawWords) -> Result<RawIntersection> {
        first.validate()?;
        if second.id.is_empty() {
            return Err(Error::invalid_argument("ID of the second data array is empty !"));
        }
        if second.words.is_empty() {
            return Err(Error::invalid_argument("data_2 length is 0 !"));
        }

        let mut words = DocumentWordList::new_raw_intersection(first.words.len())?;
        let mut positions = Vec::new();
        let mut guard = guard_from_config(self.config())?;
        let probe = LinearProbe::new(second.words);

        for (index, &word) in first.words.iter().enumerate() {
            if probe.contains(word) && guard.insert(word)? {
                words.push_word(0, word)?;
                positions.push(first.position(index));
            }
        }

        debug!(
            first = first.id,
            second = second.id,
            words_matched = positions.len(),
            guard_bytes = guard.memory_bytes(),
            "raw intersection finished"
        );

        Ok(RawIntersection {
            source_ids: (first.id.to_string(), second.id.to_string()),
            words,
            positions,
        })
    }
}
