//! Near-Earth objects and their close approaches.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use neo_seeker::Approachable;

use crate::helpers::datetime_to_str;

/// A near-Earth object (NEO): an asteroid or comet whose orbit brings it
/// close to Earth.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    /// Primary designation, unique per object (for example `433`).
    pub designation: String,
    /// IAU name, if the object has one (for example `Eros`).
    pub name: Option<String>,
    /// Diameter in km; `NaN` when unknown.
    pub diameter: f64,
    /// Whether NASA lists the object as potentially hazardous.
    pub hazardous: bool,
}

impl NearEarthObject {
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        NearEarthObject {
            designation: designation.into(),
            name,
            diameter,
            hazardous,
        }
    }

    /// Designation and name together, as in `433 (Eros)`.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        if self.diameter.is_nan() {
            write!(f, " has an unknown diameter")?;
        } else {
            write!(f, " has a diameter of {:.3} km", self.diameter)?;
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}

/// One close approach of a NEO to Earth.
///
/// Freshly loaded approaches are unlinked (`neo` is `None`); the
/// [`NeoDatabase`](crate::NeoDatabase) links each one to its object.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    /// Designation of the approaching object.
    pub designation: String,
    /// Time of closest approach (UTC).
    pub time: NaiveDateTime,
    /// Nominal approach distance, in au.
    pub distance: f64,
    /// Velocity relative to Earth, in km/s.
    pub velocity: f64,
    /// The approaching object, once linked.
    pub neo: Option<Arc<NearEarthObject>>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        CloseApproach {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Approach time as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }
}

impl Approachable for CloseApproach {
    fn time(&self) -> NaiveDateTime {
        self.time
    }

    fn distance(&self) -> f64 {
        self.distance
    }

    fn velocity(&self) -> f64 {
        self.velocity
    }

    fn diameter(&self) -> f64 {
        self.neo.as_ref().map_or(f64::NAN, |neo| neo.diameter)
    }

    fn hazardous(&self) -> bool {
        self.neo.as_ref().is_some_and(|neo| neo.hazardous)
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match &self.neo {
            Some(neo) => neo.fullname(),
            None => self.designation.clone(),
        };
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            who,
            self.distance,
            self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::cd_to_datetime;

    fn eros() -> NearEarthObject {
        NearEarthObject::new("433", Some("Eros".to_string()), 16.84, false)
    }

    #[test]
    fn fullname() {
        assert_eq!(eros().fullname(), "433 (Eros)");
        let unnamed = NearEarthObject::new("2020 AB", None, f64::NAN, true);
        assert_eq!(unnamed.fullname(), "2020 AB");
    }

    #[test]
    fn neo_display() {
        assert_eq!(
            eros().to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );
        let unnamed = NearEarthObject::new("2020 AB", None, f64::NAN, true);
        assert_eq!(
            unnamed.to_string(),
            "NEO 2020 AB has an unknown diameter and is potentially hazardous."
        );
    }

    #[test]
    fn unlinked_approach_has_unknown_body() {
        let ca = CloseApproach::new("433", cd_to_datetime("1900-Jan-01 00:11").unwrap(), 0.3, 3.8);
        assert!(Approachable::diameter(&ca).is_nan());
        assert!(!Approachable::hazardous(&ca));
    }

    #[test]
    fn linked_approach_reads_body() {
        let mut ca = CloseApproach::new("433", cd_to_datetime("1900-Jan-01 00:11").unwrap(), 0.3, 3.8);
        ca.neo = Some(Arc::new(eros()));
        assert_eq!(Approachable::diameter(&ca), 16.84);
        assert_eq!(ca.time_str(), "1900-01-01 00:11");
        assert_eq!(
            ca.to_string(),
            "On 1900-01-01 00:11, '433 (Eros)' approaches Earth at a distance of 0.30 au and a velocity of 3.80 km/s."
        );
    }
}
