//! Attribute accessors.
//!
//! A [`Field`] names one scalar attribute of a close approach and knows how
//! to read it from any [`Approachable`] record. The set is closed: looking up
//! a name outside the table fails with
//! [`SeekerError::UnsupportedCriterion`].

use std::str::FromStr;

use crate::error::{Result, SeekerError};
use crate::traits::Approachable;
use crate::value::Value;

/// A filterable attribute of a close approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Calendar date of the approach; time of day is discarded.
    Date,
    /// Nominal approach distance (au).
    Distance,
    /// Relative approach velocity (km/s).
    Velocity,
    /// Diameter of the body (km), possibly unknown.
    Diameter,
    /// Whether the body is potentially hazardous.
    Hazardous,
}

impl Field {
    /// Every field, in table order.
    pub const ALL: [Field; 5] = [
        Field::Date,
        Field::Distance,
        Field::Velocity,
        Field::Diameter,
        Field::Hazardous,
    ];

    /// Reads this field's value from a record.
    pub fn get<R: Approachable + ?Sized>(self, record: &R) -> Value {
        match self {
            Field::Date => Value::Date(record.time().date()),
            Field::Distance => Value::Number(record.distance()),
            Field::Velocity => Value::Number(record.velocity()),
            Field::Diameter => Value::Number(record.diameter()),
            Field::Hazardous => Value::Bool(record.hazardous()),
        }
    }

    /// Returns the table name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Distance => "distance",
            Field::Velocity => "velocity",
            Field::Diameter => "diameter",
            Field::Hazardous => "hazardous",
        }
    }

    /// Looks a field up by its table name.
    pub fn from_name(name: &str) -> Result<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| SeekerError::unsupported(name))
    }
}

impl FromStr for Field {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Field::from_name(s)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
