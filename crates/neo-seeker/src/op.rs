//! Comparison operators for criteria.
//!
//! The [`Op`] enum is the closed set of comparators a criterion can apply.
//! Each one compares the record's field value (left-hand side) against the
//! criterion's reference value (right-hand side).

use std::cmp::Ordering;

/// Comparison operator for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Field value is greater than or equal to the reference value.
    AtLeast,
    /// Field value is less than or equal to the reference value.
    AtMost,
    /// Field value equals the reference value.
    Equals,
}

impl Op {
    /// Evaluates this operator given the ordering of the field value
    /// relative to the reference value.
    ///
    /// `None` means the two values are unordered (a NaN was involved, or the
    /// types differ) and never satisfies any operator.
    pub fn eval_ordering(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (Op::AtLeast, Some(ord)) => ord != Ordering::Less,
            (Op::AtMost, Some(ord)) => ord != Ordering::Greater,
            (Op::Equals, Some(ord)) => ord == Ordering::Equal,
        }
    }

    /// Returns the short name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::AtLeast => "ge",
            Op::AtMost => "le",
            Op::Equals => "eq",
        }
    }

    /// Returns the infix symbol of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::AtLeast => ">=",
            Op::AtMost => "<=",
            Op::Equals => "==",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_eval_ordering() {
        assert!(Op::AtLeast.eval_ordering(Some(Ordering::Equal)));
        assert!(Op::AtLeast.eval_ordering(Some(Ordering::Greater)));
        assert!(!Op::AtLeast.eval_ordering(Some(Ordering::Less)));

        assert!(Op::AtMost.eval_ordering(Some(Ordering::Equal)));
        assert!(Op::AtMost.eval_ordering(Some(Ordering::Less)));
        assert!(!Op::AtMost.eval_ordering(Some(Ordering::Greater)));

        assert!(Op::Equals.eval_ordering(Some(Ordering::Equal)));
        assert!(!Op::Equals.eval_ordering(Some(Ordering::Less)));
        assert!(!Op::Equals.eval_ordering(Some(Ordering::Greater)));
    }

    #[test]
    fn unordered_never_matches() {
        assert!(!Op::AtLeast.eval_ordering(None));
        assert!(!Op::AtMost.eval_ordering(None));
        assert!(!Op::Equals.eval_ordering(None));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::AtLeast.to_string(), "ge");
        assert_eq!(Op::AtMost.to_string(), "le");
        assert_eq!(Op::Equals.to_string(), "eq");
        assert_eq!(Op::AtMost.symbol(), "<=");
    }
}
