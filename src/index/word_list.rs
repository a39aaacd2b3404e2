use std::fmt;
use std::iter::{Enumerate, Zip};
use std::slice;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{alloc_zeroed, WordId};
use crate::intersection::{IntersectionEngine, IntersectionMode, IntersectionApproach};

/// Fixed-shape jagged array holding the word IDs of each document
///
/// Every slot owns `max_array_length` zeroed entries from creation on; only the
/// first `arrays_lengths[i]` are part of the document. Slots are filled in
/// document order through [`DocumentWordList::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWordList {
    data: Vec<Vec<WordId>>,
    arrays_lengths: Vec<usize>,
    number_of_arrays: usize,
    max_array_length: usize,
    next_free_array: usize,
    intersection_data: bool,
}

impl DocumentWordList {
    /// Create a list with `number_of_arrays` slots of `max_array_length` words each
    pub fn new(number_of_arrays: usize, max_array_length: usize) -> Result<Self> {
        if number_of_arrays == 0 {
            return Err(Error::invalid_argument("Number of arrays is 0 !"));
        }
        if max_array_length == 0 {
            return Err(Error::invalid_argument("Max array length is 0 !"));
        }

        // Outer dimension
        let mut data: Vec<Vec<WordId>> = Vec::new();
        data.try_reserve_exact(number_of_arrays).map_err(|_| {
            Error::out_of_memory(
                "the slot index",
                number_of_arrays.saturating_mul(std::mem::size_of::<Vec<WordId>>()),
            )
        })?;

        // Inner dimension
        for _ in 0..number_of_arrays {
            data.push(alloc_zeroed(max_array_length, "a document slot")?);
        }

        let arrays_lengths = alloc_zeroed(number_of_arrays, "the length index")?;

        Ok(DocumentWordList {
            data,
            arrays_lengths,
            number_of_arrays,
            max_array_length,
            next_free_array: 0,
            intersection_data: false,
        })
    }

    /// Empty list with the same capacities, tagged as an intersection result
    pub(crate) fn new_intersection_result(source: &DocumentWordList) -> Result<Self> {
        let mut result = DocumentWordList::new(source.number_of_arrays, source.max_array_length)?;
        result.next_free_array = source.next_free_array;
        result.intersection_data = true;
        Ok(result)
    }

    /// Single-slot result for matching two raw word streams
    pub(crate) fn new_raw_intersection(max_array_length: usize) -> Result<Self> {
        let mut result = DocumentWordList::new(1, max_array_length)?;
        result.next_free_array = 1;
        result.intersection_data = true;
        Ok(result)
    }

    /// Copy `new_data` into the next free slot
    pub fn append(&mut self, new_data: &[WordId]) -> Result<()> {
        if new_data.is_empty() {
            return Err(Error::invalid_argument("New data length is 0 !"));
        }
        if new_data.len() > self.max_array_length {
            return Err(Error::capacity_exceeded("New data", new_data.len(), self.max_array_length));
        }
        if self.next_free_array >= self.number_of_arrays {
            return Err(Error::new(
                ErrorKind::CapacityExceeded {
                    value: self.next_free_array + 1,
                    limit: self.number_of_arrays,
                },
                format!("All arrays are in use ! ({} arrays)", self.number_of_arrays),
            ));
        }

        let slot = self.next_free_array;
        self.data[slot][..new_data.len()].copy_from_slice(new_data);
        self.arrays_lengths[slot] = new_data.len();
        self.next_free_array += 1;

        Ok(())
    }

    /// Add one word to a result slot; only intersection results grow word by word
    pub(crate) fn push_word(&mut self, slot: usize, word: WordId) -> Result<()> {
        let length = self.arrays_lengths[slot];
        if length >= self.max_array_length {
            return Err(Error::new(
                ErrorKind::InvalidState,
                format!("Result slot {} overflows its capacity of {}", slot, self.max_array_length),
            ));
        }
        self.data[slot][length] = word;
        self.arrays_lengths[slot] = length + 1;
        Ok(())
    }

    /// Words of the slot, or `None` past the filled slots
    pub fn get(&self, slot: usize) -> Option<&[WordId]> {
        if slot >= self.next_free_array {
            return None;
        }
        Some(&self.data[slot][..self.arrays_lengths[slot]])
    }

    /// Read access to every filled slot as `(slot index, words)`
    pub fn iter(&self) -> WordListIter<'_> {
        WordListIter {
            slots: self.data[..self.next_free_array]
                .iter()
                .zip(self.arrays_lengths.iter())
                .enumerate(),
        }
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.next_free_array
    }

    pub fn is_empty(&self) -> bool {
        self.next_free_array == 0
    }

    pub fn is_full(&self) -> bool {
        self.next_free_array == self.number_of_arrays
    }

    pub fn remaining_capacity(&self) -> usize {
        self.number_of_arrays - self.next_free_array
    }

    pub fn lengths(&self) -> &[usize] {
        &self.arrays_lengths
    }

    pub fn total_words(&self) -> usize {
        self.arrays_lengths.iter().sum()
    }

    pub fn capacity_documents(&self) -> usize {
        self.number_of_arrays
    }

    pub fn max_words_per_document(&self) -> usize {
        self.max_array_length
    }

    pub fn is_intersection_result(&self) -> bool {
        self.intersection_data
    }

    /// Intersect every document with `data` using the nested loop approach
    pub fn intersect_with(&self, data: &[WordId], mode: IntersectionMode) -> Result<DocumentWordList> {
        IntersectionEngine::default().intersect(self, data, IntersectionApproach::TwoNestedLoops, mode)
    }

    /// Release all slots; dropping the list has the same effect
    pub fn delete(self) {
        drop(self);
    }

    pub fn attributes(&self) -> WordListAttributes {
        WordListAttributes {
            intersection_data: self.intersection_data,
            number_of_arrays: self.number_of_arrays,
            max_array_length: self.max_array_length,
        }
    }

    /// Rendered data block
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Rendered data block followed by the attribute block
    pub fn dump_with_attributes(&self) -> String {
        format!("{}{}", self, self.attributes())
    }
}

/// Iterator over the filled slots of a [`DocumentWordList`]
pub struct WordListIter<'a> {
    slots: Enumerate<Zip<slice::Iter<'a, Vec<WordId>>, slice::Iter<'a, usize>>>,
}

impl<'a> Iterator for WordListIter<'a> {
    type Item = (usize, &'a [WordId]);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .next()
            .map(|(slot, (words, &length))| (slot, &words[..length]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for WordListIter<'_> {}

impl<'a> IntoIterator for &'a DocumentWordList {
    type Item = (usize, &'a [WordId]);
    type IntoIter = WordListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DocumentWordList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "> Data <")?;
        // Unused slots are shown too, with no entries
        for (slot, words) in self.data.iter().enumerate() {
            write!(f, "{:2}: {{ ", slot + 1)?;
            let length = self.arrays_lengths[slot];
            for (i, word) in words[..length].iter().enumerate() {
                write!(f, "{:2}", word)?;
                if i + 1 < length {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, " }}")?;
        }
        Ok(())
    }
}

/// Fixed attributes of a list, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListAttributes {
    pub intersection_data: bool,
    pub number_of_arrays: usize,
    pub max_array_length: usize,
}

impl fmt::Display for WordListAttributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = count_digits(self.number_of_arrays).max(count_digits(self.max_array_length));

        writeln!(f, "> Attributes <")?;
        writeln!(f, "Intersection data: {}", if self.intersection_data { "YES" } else { "NO" })?;
        writeln!(f, "Number of arrays:  {:>width$}", self.number_of_arrays, width = width)?;
        writeln!(f, "Max. array length: {:>width$}", self.max_array_length, width = width)
    }
}

fn count_digits(mut value: usize) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}
