//! First-letter index over a source word list

use crate::core::Word;
use rustc_hash::FxHashMap;

/// A source word list grouped by first letter
///
/// Built once per batch of games and shared read-only between them. Groups keep the
/// order in which their letter first appears in the source list, and words keep source
/// order within a group.
#[derive(Debug, Clone)]
pub struct Dictionary<'v> {
    source: &'v [Word],
    groups: Vec<(u8, Vec<&'v Word>)>,
}

impl<'v> Dictionary<'v> {
    #[must_use]
    pub fn new(source: &'v [Word]) -> Self {
        let mut slots: FxHashMap<u8, usize> = FxHashMap::default();
        let mut groups: Vec<(u8, Vec<&'v Word>)> = Vec::new();

        for word in source {
            let letter = word.first_letter();
            let slot = *slots.entry(letter).or_insert_with(|| {
                groups.push((letter, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(word);
        }

        Self { source, groups }
    }

    /// The ungrouped list, in its original order
    #[must_use]
    pub const fn source(&self) -> &'v [Word] {
        self.source
    }

    #[must_use]
    pub fn groups(&self) -> &[(u8, Vec<&'v Word>)] {
        &self.groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
