//! Numeric-aware ordering of tag names
//!
//! Tags are compared run by run: maximal runs of ASCII digits compare by
//! numeric value, everything else compares byte-wise. This puts `rc10` after
//! `rc2`, which plain string ordering gets wrong.

use std::cmp::Ordering;

/// A maximal run of either digits or non-digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Run<'a> {
    fn as_str(&self) -> &'a str {
        match *self {
            Run::Digits(s) | Run::Text(s) => s,
        }
    }
}

/// Iterator over the digit / non-digit runs of a string
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Run::Digits(run)
        } else {
            Run::Text(run)
        })
    }
}

fn runs(s: &str) -> Runs<'_> {
    Runs { rest: s }
}

/// Compare two digit runs by value without parsing, so any length works
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_runs(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => compare_numeric(x, y),
        _ => a.as_str().cmp(b.as_str()),
    }
}

/// Numeric-aware total order over strings
///
/// Strings whose runs all compare equal (e.g. `rc01` and `rc1`) fall back to
/// byte-wise order, so distinct strings never compare `Equal`.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_runs(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

/// Returns the greatest tag under [`compare_natural`], or `None` for no tags
///
/// # Example
/// ```
/// use rc_gate::domain::highest_of;
///
/// let tags = ["5.5.0-rc1", "5.5.0-rc2", "5.5.0-rc10"];
/// assert_eq!(highest_of(tags), Some("5.5.0-rc10".to_string()));
/// assert_eq!(highest_of(Vec::<String>::new()), None);
/// ```
pub fn highest_of<I, S>(tags: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .max_by(|a, b| compare_natural(a.as_ref(), b.as_ref()))
        .map(|tag| tag.as_ref().to_string())
}
