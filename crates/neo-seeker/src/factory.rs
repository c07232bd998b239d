//! Building criteria from named filter options.
//!
//! Callers describe a query as up to ten optional settings, one per
//! supported (field, direction) pair. Each option's name encodes both parts:
//!
//! | marker in name | operator |
//! |---|---|
//! | `min`, `start` | [`Op::AtLeast`] |
//! | `max`, `end` | [`Op::AtMost`] |
//! | none | [`Op::Equals`] |
//!
//! Lower-bound markers are checked first. Stripping the affixes `start_`,
//! `end_`, `_max` and `_min` from the name leaves the [`Field`] table name.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::criterion::Criterion;
use crate::error::Result;
use crate::field::Field;
use crate::filters::Filters;
use crate::op::Op;
use crate::value::Value;

const LOWER_BOUND_MARKERS: [&str; 2] = ["min", "start"];
const UPPER_BOUND_MARKERS: [&str; 2] = ["max", "end"];
const DIRECTION_AFFIXES: [&str; 4] = ["start_", "end_", "_max", "_min"];

/// The optional filter settings for one query.
///
/// Every field is independent; `None` means "no constraint". For
/// `hazardous`, `Some(false)` asks for bodies that are *not* potentially
/// hazardous and is a different request from `None`.
///
/// Options deserialize from a map keyed by option name, with missing keys
/// left unset:
///
/// ```
/// use neo_seeker::FilterOptions;
///
/// let options: FilterOptions =
///     serde_json::from_str(r#"{"start_date": "2020-01-01", "hazardous": false}"#).unwrap();
/// assert_eq!(options.hazardous, Some(false));
/// assert_eq!(options.present().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    /// Approach happened on exactly this date.
    pub date: Option<NaiveDate>,
    /// Approach happened on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Approach happened on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Minimum nominal approach distance (au).
    pub distance_min: Option<f64>,
    /// Maximum nominal approach distance (au).
    pub distance_max: Option<f64>,
    /// Minimum relative velocity (km/s).
    pub velocity_min: Option<f64>,
    /// Maximum relative velocity (km/s).
    pub velocity_max: Option<f64>,
    /// Minimum body diameter (km).
    pub diameter_min: Option<f64>,
    /// Maximum body diameter (km).
    pub diameter_max: Option<f64>,
    /// Whether the body is potentially hazardous.
    pub hazardous: Option<bool>,
}

impl FilterOptions {
    /// Option names, in declaration order.
    pub const NAMES: [&'static str; 10] = [
        "date",
        "start_date",
        "end_date",
        "distance_min",
        "distance_max",
        "velocity_min",
        "velocity_max",
        "diameter_min",
        "diameter_max",
        "hazardous",
    ];

    /// Creates an empty set of options (no constraints).
    pub fn new() -> Self {
        FilterOptions::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn distance_min(mut self, au: f64) -> Self {
        self.distance_min = Some(au);
        self
    }

    pub fn distance_max(mut self, au: f64) -> Self {
        self.distance_max = Some(au);
        self
    }

    pub fn velocity_min(mut self, km_s: f64) -> Self {
        self.velocity_min = Some(km_s);
        self
    }

    pub fn velocity_max(mut self, km_s: f64) -> Self {
        self.velocity_max = Some(km_s);
        self
    }

    pub fn diameter_min(mut self, km: f64) -> Self {
        self.diameter_min = Some(km);
        self
    }

    pub fn diameter_max(mut self, km: f64) -> Self {
        self.diameter_max = Some(km);
        self
    }

    pub fn hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// Returns every option paired with its value, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Option<Value>)> {
        let values = [
            self.date.map(Value::from),
            self.start_date.map(Value::from),
            self.end_date.map(Value::from),
            self.distance_min.map(Value::from),
            self.distance_max.map(Value::from),
            self.velocity_min.map(Value::from),
            self.velocity_max.map(Value::from),
            self.diameter_min.map(Value::from),
            self.diameter_max.map(Value::from),
            self.hazardous.map(Value::from),
        ];
        FilterOptions::NAMES.into_iter().zip(values)
    }

    /// Returns the options that are set, in declaration order.
    pub fn present(&self) -> Vec<(&'static str, Value)> {
        self.entries()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        self.entries().all(|(_, value)| value.is_none())
    }
}

/// Picks the operator encoded in an option name.
///
/// ```
/// use neo_seeker::{identify_op, Op};
///
/// assert_eq!(identify_op("distance_min"), Op::AtLeast);
/// assert_eq!(identify_op("end_date"), Op::AtMost);
/// assert_eq!(identify_op("hazardous"), Op::Equals);
/// ```
pub fn identify_op(name: &str) -> Op {
    if LOWER_BOUND_MARKERS.iter().any(|m| name.contains(m)) {
        Op::AtLeast
    } else if UPPER_BOUND_MARKERS.iter().any(|m| name.contains(m)) {
        Op::AtMost
    } else {
        Op::Equals
    }
}

/// Removes the direction affixes from an option name, leaving the field name.
///
/// ```
/// use neo_seeker::strip_to_root;
///
/// assert_eq!(strip_to_root("start_date"), "date");
/// assert_eq!(strip_to_root("velocity_max"), "velocity");
/// ```
pub fn strip_to_root(name: &str) -> String {
    DIRECTION_AFFIXES
        .iter()
        .fold(name.to_string(), |root, affix| root.replace(affix, ""))
}

/// Builds the criterion for a single named option.
///
/// Fails with [`SeekerError::UnsupportedCriterion`](crate::SeekerError) if the
/// name's root is not a known field.
pub fn criterion_for(name: &str, value: impl Into<Value>) -> Result<Criterion> {
    let field = Field::from_name(&strip_to_root(name))?;
    Ok(Criterion::new(identify_op(name), value, field))
}

/// Creates one criterion per option that is set, in declaration order.
///
/// With no options set the result is empty and matches every record.
///
/// # Example
///
/// ```
/// use neo_seeker::{create_filters, Criterion, Field, FilterOptions};
///
/// let filters = create_filters(&FilterOptions::new().distance_max(0.05).hazardous(true)).unwrap();
/// assert_eq!(
///     filters.criteria(),
///     &[
///         Criterion::at_most(Field::Distance, 0.05),
///         Criterion::equals(Field::Hazardous, true),
///     ]
/// );
/// ```
pub fn create_filters(options: &FilterOptions) -> Result<Filters> {
    options
        .present()
        .into_iter()
        .map(|(name, value)| criterion_for(name, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeekerError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn all_options() -> FilterOptions {
        FilterOptions::new()
            .date(date(2020, 1, 1))
            .start_date(date(2019, 1, 1))
            .end_date(date(2021, 1, 1))
            .distance_min(0.01)
            .distance_max(0.5)
            .velocity_min(1.0)
            .velocity_max(30.0)
            .diameter_min(0.1)
            .diameter_max(10.0)
            .hazardous(false)
    }

    #[test]
    fn identify_op_table() {
        assert_eq!(identify_op("date"), Op::Equals);
        assert_eq!(identify_op("start_date"), Op::AtLeast);
        assert_eq!(identify_op("end_date"), Op::AtMost);
        assert_eq!(identify_op("distance_min"), Op::AtLeast);
        assert_eq!(identify_op("distance_max"), Op::AtMost);
        assert_eq!(identify_op("diameter_max"), Op::AtMost);
        assert_eq!(identify_op("hazardous"), Op::Equals);
    }

    #[test]
    fn lower_bound_marker_wins() {
        assert_eq!(identify_op("start_max"), Op::AtLeast);
        assert_eq!(identify_op("end_min"), Op::AtLeast);
    }

    #[test]
    fn strip_to_root_table() {
        for name in FilterOptions::NAMES {
            let root = strip_to_root(name);
            assert!(Field::from_name(&root).is_ok(), "{name} -> {root}");
        }
        assert_eq!(strip_to_root("diameter_min"), "diameter");
        assert_eq!(strip_to_root("end_date"), "date");
        assert_eq!(strip_to_root("hazardous"), "hazardous");
    }

    #[test]
    fn criterion_for_resolves_field_and_op() {
        assert_eq!(
            criterion_for("distance_min", 0.2),
            Ok(Criterion::at_least(Field::Distance, 0.2))
        );
        assert_eq!(
            criterion_for("diameter_max", 1.5),
            Ok(Criterion::at_most(Field::Diameter, 1.5))
        );
        assert_eq!(
            criterion_for("hazardous", true),
            Ok(Criterion::equals(Field::Hazardous, true))
        );
        assert_eq!(
            criterion_for("date", date(2020, 1, 1)),
            Ok(Criterion::equals(Field::Date, date(2020, 1, 1)))
        );
    }

    #[test]
    fn unknown_root_fails_loudly() {
        assert_eq!(
            criterion_for("magnitude_max", 20.0),
            Err(SeekerError::UnsupportedCriterion {
                name: "magnitude".to_string()
            })
        );
    }

    #[test]
    fn no_options_no_criteria() {
        let options = FilterOptions::new();
        assert!(options.is_empty());
        assert!(create_filters(&options).unwrap().is_empty());
    }

    #[test]
    fn one_criterion_per_option_in_declaration_order() {
        let filters = create_filters(&all_options()).unwrap();
        assert_eq!(filters.len(), 10);

        let fields: Vec<Field> = filters.iter().map(|c| c.field().unwrap()).collect();
        assert_eq!(
            fields,
            vec![
                Field::Date,
                Field::Date,
                Field::Date,
                Field::Distance,
                Field::Distance,
                Field::Velocity,
                Field::Velocity,
                Field::Diameter,
                Field::Diameter,
                Field::Hazardous,
            ]
        );
        let ops: Vec<Op> = filters.iter().map(|c| c.op()).collect();
        assert_eq!(
            ops,
            vec![
                Op::Equals,
                Op::AtLeast,
                Op::AtMost,
                Op::AtLeast,
                Op::AtMost,
                Op::AtLeast,
                Op::AtMost,
                Op::AtLeast,
                Op::AtMost,
                Op::Equals,
            ]
        );
    }

    #[test]
    fn hazardous_false_is_present() {
        let options = FilterOptions::new().hazardous(false);
        assert_eq!(options.present(), vec![("hazardous", Value::Bool(false))]);
        assert_eq!(
            create_filters(&options).unwrap().criteria(),
            &[Criterion::equals(Field::Hazardous, false)]
        );
    }

    #[test]
    fn deserialize_from_json() {
        let options: FilterOptions = serde_json::from_str(
            r#"{"date": "2020-01-01", "velocity_max": 12.5, "hazardous": true}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            FilterOptions::new()
                .date(date(2020, 1, 1))
                .velocity_max(12.5)
                .hazardous(true)
        );
    }

    #[test]
    fn deserialize_rejects_unknown_option() {
        let result: std::result::Result<FilterOptions, _> =
            serde_json::from_str(r#"{"magnitude_max": 20.0}"#);
        assert!(result.is_err());
    }
}
