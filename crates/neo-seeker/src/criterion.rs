//! Criterion predicates.
//!
//! A [`Criterion`] is a single filter predicate: a comparison operator, a
//! reference value, and the field it reads from each record.

use crate::error::{Result, SeekerError};
use crate::field::Field;
use crate::op::Op;
use crate::traits::Approachable;
use crate::value::Value;

/// A single filter predicate over close-approach records.
///
/// Evaluating a criterion computes `field(record) OP value`, with the
/// record's field value on the left-hand side.
///
/// The reference value is not checked against the field's type when the
/// criterion is built. A mismatched pair (say, a date compared with the
/// distance field) is simply never satisfied.
///
/// # Example
///
/// ```
/// use neo_seeker::{Criterion, Field, Op};
///
/// let close = Criterion::new(Op::AtMost, 0.05, Field::Distance);
/// assert_eq!(close.op(), Op::AtMost);
/// assert_eq!(close.field(), Ok(Field::Distance));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    op: Op,
    value: Value,
    field: Option<Field>,
}

impl Criterion {
    /// Creates a criterion comparing `field` against `value`.
    pub fn new(op: Op, value: impl Into<Value>, field: Field) -> Self {
        Criterion {
            op,
            value: value.into(),
            field: Some(field),
        }
    }

    /// Creates a criterion with no field.
    ///
    /// The result stands in for a predicate that has not been bound to an
    /// attribute yet. Evaluating it fails with
    /// [`SeekerError::UnsupportedCriterion`].
    pub fn base(op: Op, value: impl Into<Value>) -> Self {
        Criterion {
            op,
            value: value.into(),
            field: None,
        }
    }

    /// Shorthand for `Criterion::new(Op::AtLeast, value, field)`.
    pub fn at_least(field: Field, value: impl Into<Value>) -> Self {
        Criterion::new(Op::AtLeast, value, field)
    }

    /// Shorthand for `Criterion::new(Op::AtMost, value, field)`.
    pub fn at_most(field: Field, value: impl Into<Value>) -> Self {
        Criterion::new(Op::AtMost, value, field)
    }

    /// Shorthand for `Criterion::new(Op::Equals, value, field)`.
    pub fn equals(field: Field, value: impl Into<Value>) -> Self {
        Criterion::new(Op::Equals, value, field)
    }

    /// Returns the comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Returns the reference value.
    pub fn value(&self) -> Value {
        self.value
    }

    /// Returns the field this criterion reads.
    ///
    /// Fails for a [`base`](Criterion::base) criterion.
    pub fn field(&self) -> Result<Field> {
        self.field
            .ok_or_else(|| SeekerError::unsupported(format!("<base> {} {}", self.op, self.value)))
    }

    /// Evaluates this criterion against a record.
    pub fn evaluate<R: Approachable + ?Sized>(&self, record: &R) -> Result<bool> {
        let field = self.field()?;
        Ok(self.compare(field, record))
    }

    /// Evaluates a criterion already known to carry a field.
    pub(crate) fn matches_bound<R: Approachable + ?Sized>(&self, record: &R) -> bool {
        match self.field {
            Some(field) => self.compare(field, record),
            None => false,
        }
    }

    fn compare<R: Approachable + ?Sized>(&self, field: Field, record: &R) -> bool {
        let ordering = field.get(record).compare(&self.value);
        self.op.eval_ordering(ordering)
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field {
            Some(field) => write!(f, "{} {} {}", field, self.op.symbol(), self.value),
            None => write!(f, "<base> {} {}", self.op.symbol(), self.value),
        }
    }
}
