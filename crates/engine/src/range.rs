//! The closed integer interval recognised by the engine.
//!
//! Every accepted value maps to a dense index in `[0, SIZE)` so the presence
//! marker can be a flat array instead of a general set.

/// Smallest accepted value.
pub const MIN: i32 = -1023;

/// Largest accepted value.
pub const MAX: i32 = 1023;

/// Number of representable values (`MAX - MIN + 1`).
#[allow(clippy::cast_sign_loss)]
pub const SIZE: usize = (MAX - MIN + 1) as usize;

/// Returns `true` when `value` lies in `[MIN, MAX]`.
#[inline]
#[must_use]
pub const fn contains(value: i64) -> bool {
    value >= MIN as i64 && value <= MAX as i64
}

/// Maps an in-range value to its marker index.
///
/// Returns `None` for values outside the range.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn value_to_index(value: i32) -> Option<usize> {
    if contains(value as i64) {
        Some((value - MIN) as usize)
    } else {
        None
    }
}

/// Maps a marker index back to its value.
///
/// # Panics
/// Panics if `index >= SIZE`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn index_to_value(index: usize) -> i32 {
    assert!(index < SIZE, "marker index out of range");
    index as i32 + MIN
}
