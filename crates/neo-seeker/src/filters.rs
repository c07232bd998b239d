//! Criterion lists.
//!
//! [`Filters`] is the conjunction of criteria for one query. A record matches
//! when every criterion is satisfied; an empty list matches every record.

use crate::criterion::Criterion;
use crate::error::Result;
use crate::field::Field;
use crate::op::Op;
use crate::traits::Approachable;
use crate::value::Value;

/// An ordered list of criteria combined with logical AND.
///
/// Order has no effect on which records match. It is kept as given so that
/// lists built from the same options compare equal and print the same way.
///
/// # Example
///
/// ```
/// use neo_seeker::{Field, Filters};
///
/// let filters = Filters::new()
///     .at_most(Field::Distance, 0.05)
///     .equals(Field::Hazardous, true);
///
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    criteria: Vec<Criterion>,
}

impl Filters {
    /// Creates an empty list, which matches every record.
    pub fn new() -> Self {
        Filters::default()
    }

    /// Adds a criterion.
    pub fn and(mut self, field: Field, op: Op, value: impl Into<Value>) -> Self {
        self.criteria.push(Criterion::new(op, value, field));
        self
    }

    /// Adds an at-least criterion.
    pub fn at_least(self, field: Field, value: impl Into<Value>) -> Self {
        self.and(field, Op::AtLeast, value)
    }

    /// Adds an at-most criterion.
    pub fn at_most(self, field: Field, value: impl Into<Value>) -> Self {
        self.and(field, Op::AtMost, value)
    }

    /// Adds an equality criterion.
    pub fn equals(self, field: Field, value: impl Into<Value>) -> Self {
        self.and(field, Op::Equals, value)
    }

    /// Appends an already-built criterion.
    pub fn push(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    /// Returns the criteria in insertion order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns an iterator over the criteria.
    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `true` if there are no criteria (matches everything).
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Verifies that every criterion is bound to a field.
    pub fn check(&self) -> Result<()> {
        self.criteria.iter().try_for_each(|c| c.field().map(|_| ()))
    }

    /// Tests if a single record satisfies every criterion.
    ///
    /// Criteria are evaluated in order and evaluation stops at the first
    /// one that fails or errors.
    pub fn matches<R: Approachable + ?Sized>(&self, record: &R) -> Result<bool> {
        for criterion in &self.criteria {
            if !criterion.evaluate(record)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Lazily filters a sequence of records.
    ///
    /// The list is checked once up front, so the returned iterator never
    /// fails. Records are pulled from `records` only as the caller asks
    /// for matches.
    pub fn filter<I>(&self, records: I) -> Result<Matching<'_, I::IntoIter>>
    where
        I: IntoIterator,
        I::Item: Approachable,
    {
        self.check()?;
        Ok(Matching {
            filters: self,
            records: records.into_iter(),
        })
    }

    /// Counts the matching records.
    pub fn count<I>(&self, records: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Approachable,
    {
        Ok(self.filter(records)?.count())
    }

    /// Finds the first matching record.
    pub fn find<I>(&self, records: I) -> Result<Option<I::Item>>
    where
        I: IntoIterator,
        I::Item: Approachable,
    {
        Ok(self.filter(records)?.next())
    }

    fn matches_bound<R: Approachable + ?Sized>(&self, record: &R) -> bool {
        self.criteria.iter().all(|c| c.matches_bound(record))
    }
}

impl std::fmt::Display for Filters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.criteria.is_empty() {
            return write!(f, "<all>");
        }
        for (i, criterion) in self.criteria.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{criterion}")?;
        }
        Ok(())
    }
}

impl From<Vec<Criterion>> for Filters {
    fn from(criteria: Vec<Criterion>) -> Self {
        Filters { criteria }
    }
}

impl FromIterator<Criterion> for Filters {
    fn from_iter<T: IntoIterator<Item = Criterion>>(iter: T) -> Self {
        Filters {
            criteria: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Filters {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

/// Lazy iterator over the records that satisfy a [`Filters`] list.
///
/// Created by [`Filters::filter`].
#[derive(Debug, Clone)]
pub struct Matching<'f, I> {
    filters: &'f Filters,
    records: I,
}

impl<I> Iterator for Matching<'_, I>
where
    I: Iterator,
    I::Item: Approachable,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let filters = self.filters;
        self.records.find(|record| filters.matches_bound(record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}
