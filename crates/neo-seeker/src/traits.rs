//! The read-only view criteria take of a close-approach record.

use chrono::NaiveDateTime;

/// Trait for records that criteria can be evaluated against.
///
/// A record is one close approach: a timestamp, a distance and a velocity,
/// plus the diameter and hazard flag of the body making the approach.
/// Implementations only hand out copies of scalar fields; evaluating a
/// criterion never mutates the record.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use neo_seeker::Approachable;
///
/// struct Flyby {
///     when: NaiveDateTime,
///     au: f64,
///     km_s: f64,
/// }
///
/// impl Approachable for Flyby {
///     fn time(&self) -> NaiveDateTime { self.when }
///     fn distance(&self) -> f64 { self.au }
///     fn velocity(&self) -> f64 { self.km_s }
///     fn diameter(&self) -> f64 { f64::NAN }
///     fn hazardous(&self) -> bool { false }
/// }
/// ```
pub trait Approachable {
    /// Time of closest approach (UTC, naive).
    fn time(&self) -> NaiveDateTime;

    /// Nominal approach distance, in astronomical units.
    fn distance(&self) -> f64;

    /// Velocity relative to Earth, in km/s.
    fn velocity(&self) -> f64;

    /// Diameter of the approaching body, in km. `NaN` when unknown.
    fn diameter(&self) -> f64;

    /// Whether the approaching body is potentially hazardous.
    fn hazardous(&self) -> bool;
}

impl<T: Approachable + ?Sized> Approachable for &T {
    fn time(&self) -> NaiveDateTime {
        (**self).time()
    }

    fn distance(&self) -> f64 {
        (**self).distance()
    }

    fn velocity(&self) -> f64 {
        (**self).velocity()
    }

    fn diameter(&self) -> f64 {
        (**self).diameter()
    }

    fn hazardous(&self) -> bool {
        (**self).hazardous()
    }
}
