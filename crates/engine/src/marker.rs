//! Presence marker: one flag per value of the bounded range.
//!
//! Flags are packed into `u64` words. Bits past [`range::SIZE`] in the last
//! word are never set, so iteration and counting need no masking.

use crate::range;

const WORDS: usize = range::SIZE.div_ceil(64);

/// Fixed-size set of observed values, indexed by `value - MIN`.
///
/// Iterating yields the observed values in ascending order; the linear scan
/// over the domain is what sorts the output.
#[derive(Clone, PartialEq, Eq)]
pub struct PresenceMarker {
    words: [u64; WORDS],
}

impl PresenceMarker {
    /// Creates a marker with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Number of flags, always equal to the range size.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        range::SIZE
    }

    /// Clears every flag.
    pub fn reset(&mut self) {
        self.words.fill(0);
        debug_assert!(self.is_empty());
    }

    /// Marks `value` as seen. Returns `false` if the value is out of range.
    ///
    /// Marking the same value again is a no-op.
    #[inline]
    pub fn mark(&mut self, value: i32) -> bool {
        let Some(idx) = range::value_to_index(value) else {
            return false;
        };
        self.words[idx / 64] |= 1u64 << (idx % 64);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        range::value_to_index(value)
            .is_some_and(|idx| self.words[idx / 64] & (1u64 << (idx % 64)) != 0)
    }

    /// Number of distinct values marked.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Observed values in ascending order.
    #[must_use]
    pub const fn iter(&self) -> Values<'_> {
        Values {
            words: &self.words,
            word_idx: 0,
            current: self.words[0],
        }
    }
}

impl Default for PresenceMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PresenceMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a PresenceMarker {
    type Item = i32;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the values of a [`PresenceMarker`].
pub struct Values<'a> {
    words: &'a [u64; WORDS],
    word_idx: usize,
    current: u64,
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                // Clear the lowest set bit.
                self.current &= self.current.wrapping_sub(1);
                return Some(range::index_to_value(self.word_idx * 64 + bit));
            }
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current = self.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{MAX, MIN};

    #[test]
    fn new_marker_is_empty() {
        let marker = PresenceMarker::new();
        assert!(marker.is_empty());
        assert_eq!(marker.count(), 0);
        assert_eq!(marker.len(), range::SIZE);
        assert_eq!(marker.iter().next(), None);
    }

    #[test]
    fn marking_is_idempotent() {
        let mut marker = PresenceMarker::new();
        assert!(marker.mark(5));
        assert!(marker.mark(5));
        assert_eq!(marker.count(), 1);
        assert!(marker.contains(5));
        assert!(!marker.contains(6));
    }

    #[test]
    fn rejects_out_of_range() {
        let mut marker = PresenceMarker::new();
        assert!(!marker.mark(MAX + 1));
        assert!(!marker.mark(MIN - 1));
        assert!(marker.is_empty());
    }

    #[test]
    fn iterates_in_ascending_order() {
        let mut marker = PresenceMarker::new();
        for v in [MAX, 64, -1, MIN, 0, 63, -960] {
            marker.mark(v);
        }
        let values: Vec<_> = marker.iter().collect();
        assert_eq!(values, vec![MIN, -960, -1, 0, 63, 64, MAX]);
    }

    #[test]
    fn full_marker_yields_every_value() {
        let mut marker = PresenceMarker::new();
        for v in MIN..=MAX {
            marker.mark(v);
        }
        assert_eq!(marker.count(), range::SIZE);
        assert!(marker.iter().eq(MIN..=MAX));
    }

    #[test]
    fn reset_clears_flags() {
        let mut marker = PresenceMarker::new();
        marker.mark(1);
        marker.mark(MAX);
        marker.reset();
        assert!(marker.is_empty());
        assert_eq!(marker, PresenceMarker::default());
    }
}
