use crate::range;
use std::borrow::Cow;

/// Parse one input line into an in-range integer.
///
/// A line is accepted only when, after trimming, it consists of exactly one
/// whitespace-separated token that is a base-10 integer within the range.
/// Single underscores between digits are accepted as group separators.
/// Everything else yields `None`: blank lines, lines with several tokens (even
/// if one of them is a valid number), non-numeric tokens and out-of-range
/// values.
#[must_use]
pub fn parse_line(line: &str) -> Option<i32> {
    let mut tokens = line.split_whitespace();
    let token = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    // Parse wider than the range so that overflow and out-of-range share one path.
    let value: i64 = strip_separators(token)?.parse().ok()?;
    if !range::contains(value) {
        return None;
    }
    i32::try_from(value).ok()
}

/// Remove `_` group separators, each of which must sit between two digits.
fn strip_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }
    let bytes = token.as_bytes();
    let mut digits = String::with_capacity(token.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
            let before_digit = bytes.get(i + 1).is_some_and(|c| c.is_ascii_digit());
            if !(after_digit && before_digit) {
                return None;
            }
        } else {
            digits.push(char::from(b));
        }
    }
    Some(Cow::Owned(digits))
}
