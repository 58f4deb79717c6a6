//! Sequence utilities.
//!
//! The centrepiece is [`compare`]/[`compare_by`], a lexicographic comparison
//! that treats `T::default()` as the end of a sequence. The remaining helpers
//! are small conveniences over iterators.
//!
//! ## The default-value sentinel
//!
//! Both sequences are read position by position; past its end a sequence
//! reads as `T::default()`. Once both sides read as the default the sequences
//! compare equal, so a default-valued element in the middle of a sequence is
//! indistinguishable from its end:
//!
//! ```rust
//! use csvline::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare([1, 2, 3], [1, 2, 3]), Ordering::Equal);
//! assert_eq!(compare([1, 2, 3, 4], [1, 2, 3, 4, 5]), Ordering::Less);
//! assert_eq!(compare([2, 2, 3, 4, 5], [1, 2, 3, 4, 5]), Ordering::Greater);
//!
//! // everything after a shared zero is ignored
//! assert_eq!(compare([1, 0, 9], [1, 0, 7]), Ordering::Equal);
//! ```
//!
//! Comparing two infinite sequences that never reach a default pair and
//! never differ does not terminate.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use crate::{Error, Result};

/// Compares two sequences element by element using `Ord`.
///
/// See the [module docs](self) for how `T::default()` ends a sequence.
#[must_use]
pub fn compare<S, C, T>(source: S, compare_to: C) -> Ordering
where
    S: IntoIterator<Item = T>,
    C: IntoIterator<Item = T>,
    T: Ord + Default,
{
    compare_by(source, compare_to, Ord::cmp)
}

/// Compares two sequences element by element with a custom comparer.
///
/// `element_comparer` is called once per position at which neither element
/// equals `T::default()`; the first non-equal result is returned.
///
/// # Examples
///
/// ```rust
/// use csvline::compare_by;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(compare_by(["aa", "b"], ["xy", "z"], by_len), Ordering::Equal);
/// assert_eq!(compare_by(["aa"], ["xyz"], by_len), Ordering::Less);
/// ```
pub fn compare_by<S, C, T, F>(source: S, compare_to: C, mut element_comparer: F) -> Ordering
where
    S: IntoIterator<Item = T>,
    C: IntoIterator<Item = T>,
    T: PartialEq + Default,
    F: FnMut(&T, &T) -> Ordering,
{
    let sentinel = T::default();
    let mut source = source.into_iter().fuse();
    let mut compare_to = compare_to.into_iter().fuse();

    loop {
        let a = source.next().unwrap_or_default();
        let b = compare_to.next().unwrap_or_default();

        match (a == sentinel, b == sentinel) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        match element_comparer(&a, &b) {
            Ordering::Equal => {}
            outcome => return outcome,
        }
    }
}

/// [`compare`] for possibly-absent sequences.
///
/// # Errors
///
/// Returns [`Error::NullSource`] if `source` is `None`, otherwise
/// [`Error::NullCompareTo`] if `compare_to` is `None`.
pub fn compare_opt<S, C, T>(source: Option<S>, compare_to: Option<C>) -> Result<Ordering>
where
    S: IntoIterator<Item = T>,
    C: IntoIterator<Item = T>,
    T: Ord + Default,
{
    let source = source.ok_or(Error::NullSource)?;
    let compare_to = compare_to.ok_or(Error::NullCompareTo)?;
    Ok(compare(source, compare_to))
}

/// Returns the element at `index`, or `T::default()` past the end.
///
/// # Examples
///
/// ```rust
/// use csvline::seq::element_at_or_default;
///
/// assert_eq!(element_at_or_default([4, 5], 1), 5);
/// assert_eq!(element_at_or_default([4, 5], 9), 0);
/// ```
pub fn element_at_or_default<I, T>(source: I, index: usize) -> T
where
    I: IntoIterator<Item = T>,
    T: Default,
{
    source.into_iter().nth(index).unwrap_or_default()
}

/// Yields the distinct elements of `source` other than `item`, in order of
/// first appearance.
///
/// # Examples
///
/// ```rust
/// use csvline::seq::except;
///
/// let rest: Vec<_> = except(vec![1, 2, 1, 3, 2], &1).collect();
/// assert_eq!(rest, vec![2, 3]);
/// ```
pub fn except<'a, I, T>(source: I, item: &'a T) -> impl Iterator<Item = T> + 'a
where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
    T: Eq + Hash + Clone + 'a,
{
    let mut seen = HashSet::new();
    source
        .into_iter()
        .filter(move |element| element != item && seen.insert(element.clone()))
}

/// Drops the last `count` elements; more than the length leaves nothing.
///
/// # Examples
///
/// ```rust
/// use csvline::seq::remove_from_end;
///
/// assert_eq!(remove_from_end([1, 2, 3, 4], 1), vec![1, 2, 3]);
/// assert!(remove_from_end([1, 2], 150).is_empty());
/// ```
pub fn remove_from_end<I, T>(source: I, count: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut elements: Vec<T> = source.into_iter().collect();
    elements.truncate(elements.len().saturating_sub(count));
    elements
}

/// Returns true if `source` yields no elements.
pub fn is_empty<I>(source: I) -> bool
where
    I: IntoIterator,
{
    source.into_iter().next().is_none()
}

/// Returns true if `source` is `None` or yields no elements.
pub fn is_none_or_empty<I>(source: Option<I>) -> bool
where
    I: IntoIterator,
{
    source.map_or(true, is_empty)
}

/// Runs `action` on every element of `source`, in order.
pub fn for_each<I, F>(source: I, action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    source.into_iter().for_each(action);
}
