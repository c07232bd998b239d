//! Scalar values compared by criteria.
//!
//! A [`Value`] is either read out of a record by a [`Field`](crate::Field)
//! or stored in a [`Criterion`](crate::Criterion) as its reference value.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// A comparable scalar: a calendar date, a number, or a boolean.
///
/// Numbers are `f64`; an unknown measurement is carried as `NaN` and compares
/// unordered against everything, itself included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Calendar date (no time of day).
    Date(NaiveDate),
    /// Numeric measurement.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
}

impl Value {
    /// Returns `true` if this is a `Date` value.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Extracts the date, if present.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the name of this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Date(_) => "date",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
        }
    }

    /// Compares two values of the same type.
    ///
    /// Returns `None` for mismatched types and for any comparison involving
    /// `NaN`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn value_type_checks() {
        assert!(Value::Date(date(2020, 1, 1)).is_date());
        assert!(Value::Number(1.5).is_number());
        assert!(Value::Bool(true).is_bool());
        assert!(!Value::Bool(true).is_number());
    }

    #[test]
    fn value_extractors() {
        assert_eq!(Value::Date(date(2020, 1, 1)).as_date(), Some(date(2020, 1, 1)));
        assert_eq!(Value::Number(0.5).as_number(), Some(0.5));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));

        // Wrong type returns None
        assert_eq!(Value::Number(0.5).as_bool(), None);
        assert_eq!(Value::Bool(true).as_date(), None);
    }

    #[test]
    fn compare_same_type() {
        assert_eq!(
            Value::Date(date(2019, 12, 31)).compare(&Value::Date(date(2020, 1, 1))),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Number(2.0).compare(&Value::Number(1.0)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Bool(true).compare(&Value::Bool(true)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn compare_nan_is_unordered() {
        assert_eq!(Value::Number(f64::NAN).compare(&Value::Number(0.0)), None);
        assert_eq!(Value::Number(0.0).compare(&Value::Number(f64::NAN)), None);
        assert_eq!(
            Value::Number(f64::NAN).compare(&Value::Number(f64::NAN)),
            None
        );
    }

    #[test]
    fn compare_mismatched_types_is_unordered() {
        assert_eq!(Value::Number(1.0).compare(&Value::Bool(true)), None);
        assert_eq!(
            Value::Date(date(2020, 1, 1)).compare(&Value::Number(1.0)),
            None
        );
    }

    #[test]
    fn display() {
        assert_eq!(Value::Date(date(2020, 1, 5)).to_string(), "2020-01-05");
        assert_eq!(Value::Number(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
