//! The typed document
//!
//! A [`Document`] is the ordered list of everything typed so far, struck
//! characters included. It only ever changes at the tail: new characters are
//! appended, minimal backspace pops the last record, and vintage backspace
//! strikes the unstruck record nearest to the tail.

use std::fmt;

/// A single typed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The typed symbol (`'\n'` for a new line)
    pub ch: char,
    /// Whether the character has been struck through
    pub struck: bool,
}

impl CharacterRecord {
    /// Create an unstruck record
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self { ch, struck: false }
    }

    /// Whether this record ends a line
    #[must_use]
    pub const fn is_newline(&self) -> bool {
        self.ch == '\n'
    }
}

/// Ordered sequence of typed characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    records: Vec<CharacterRecord>,
}

impl Document {
    /// Create an empty document
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append an unstruck character at the tail
    pub fn push(&mut self, ch: char) {
        self.records.push(CharacterRecord::new(ch));
    }

    /// Strike the unstruck record nearest to the tail
    ///
    /// Returns the index of the record that was struck, or `None` when every
    /// record is already struck (or the document is empty).
    pub fn strike_last(&mut self) -> Option<usize> {
        let (index, record) = self
            .records
            .iter_mut()
            .enumerate()
            .rev()
            .find(|(_, record)| !record.struck)?;
        record.struck = true;
        Some(index)
    }

    /// Remove the tail record, if any
    pub fn pop(&mut self) -> Option<CharacterRecord> {
        self.records.pop()
    }

    /// Number of records, struck ones included
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been typed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of struck records
    #[must_use]
    pub fn struck_count(&self) -> usize {
        self.records.iter().filter(|record| record.struck).count()
    }

    /// All records in typing order
    #[must_use]
    pub const fn records(&self) -> &[CharacterRecord] {
        self.records.as_slice()
    }

    /// Iterate over records in typing order
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }

    /// The text that survived correction (struck characters left out)
    #[must_use]
    pub fn text(&self) -> String {
        self.records
            .iter()
            .filter(|record| !record.struck)
            .map(|record| record.ch)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Document {
    /// Everything on the paper, struck characters included
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.records
            .iter()
            .try_for_each(|record| fmt::Write::write_char(f, record.ch))
    }
}
