//! Capping the number of results.
//!
//! [`limit`] wraps any iterator so that it yields at most `n` items. A cap
//! of `None` or `Some(0)` means "no limit". Once the cap is reached the
//! upstream iterator is not polled again.

/// Iterator adapter yielding at most a fixed number of items.
///
/// Created by [`limit`] or [`LimitExt::limit`].
#[derive(Debug, Clone)]
pub struct Limit<I> {
    inner: I,
    remaining: Option<usize>,
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            None => self.inner.next(),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                self.inner.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(n) => (
                lower.min(n),
                Some(upper.map_or(n, |upper| upper.min(n))),
            ),
        }
    }
}

/// Limits an iterator to its first `n` items.
///
/// `None` and `Some(0)` leave the sequence unlimited.
///
/// # Example
///
/// ```
/// use neo_seeker::limit;
///
/// let first: Vec<u32> = limit(1.., Some(3)).collect();
/// assert_eq!(first, vec![1, 2, 3]);
///
/// let all: Vec<u32> = limit(vec![1, 2], Some(0)).collect();
/// assert_eq!(all, vec![1, 2]);
/// ```
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        inner: iter.into_iter(),
        remaining: n.filter(|&n| n > 0),
    }
}

/// Extension trait adding [`limit`] as an iterator method.
pub trait LimitExt: Iterator + Sized {
    /// See [`limit`].
    fn limit(self, n: Option<usize>) -> Limit<Self> {
        limit(self, n)
    }
}

impl<I: Iterator> LimitExt for I {}
