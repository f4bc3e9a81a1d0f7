//! Fixed-size, 1-based page slicing.

use std::num::IntErrorKind;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the items at offset `(page-1)*10 .. (page-1)*10+10`.
///
/// Pages below 1 and pages past the end yield an empty slice; whether that is an
/// error is up to the caller.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = match usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Lenient `?page=` parsing: missing or non-integer values mean page 1.
///
/// Integers too large for `i64` saturate, so they still land past the end (or
/// below 1) instead of falling back to the first page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };
    match raw.trim().parse::<i64>() {
        Ok(page) => page,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 1,
        },
    }
}
