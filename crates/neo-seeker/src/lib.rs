//! Seeker - filter criteria for near-Earth close-approach records.
//!
//! This crate turns a caller's optional search settings into a list of
//! predicates over close approaches, evaluates those predicates, and caps
//! how many matches are produced. It provides:
//!
//! - [`Field`]: the closed set of attributes a criterion can read
//! - [`Criterion`]: one `field OP value` predicate
//! - [`create_filters`]: builds a [`Filters`] list from [`FilterOptions`]
//! - [`limit`]: a lazy cap on the number of results
//!
//! Records are seen only through the read-only [`Approachable`] trait, so the
//! crate has no opinion on how they are stored.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveDateTime};
//! use neo_seeker::{create_filters, limit, Approachable, FilterOptions};
//!
//! struct Flyby {
//!     time: NaiveDateTime,
//!     distance: f64,
//!     hazardous: bool,
//! }
//!
//! impl Approachable for Flyby {
//!     fn time(&self) -> NaiveDateTime { self.time }
//!     fn distance(&self) -> f64 { self.distance }
//!     fn velocity(&self) -> f64 { 10.0 }
//!     fn diameter(&self) -> f64 { f64::NAN }
//!     fn hazardous(&self) -> bool { self.hazardous }
//! }
//!
//! let noon = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let flybys = vec![
//!     Flyby { time: noon, distance: 0.03, hazardous: true },
//!     Flyby { time: noon, distance: 0.10, hazardous: true },
//!     Flyby { time: noon, distance: 0.02, hazardous: false },
//! ];
//!
//! let options = FilterOptions::new().distance_max(0.05).hazardous(true);
//! let filters = create_filters(&options).unwrap();
//!
//! let matches: Vec<&Flyby> = limit(filters.filter(&flybys).unwrap(), Some(10)).collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].distance, 0.03);
//! ```
//!
//! # Option Names
//!
//! | option | criterion |
//! |--------|-----------|
//! | `date` | date == value |
//! | `start_date` / `end_date` | date >= / <= value |
//! | `distance_min` / `distance_max` | distance >= / <= value |
//! | `velocity_min` / `velocity_max` | velocity >= / <= value |
//! | `diameter_min` / `diameter_max` | diameter >= / <= value |
//! | `hazardous` | hazardous == value |
//!
//! An unknown diameter is stored as `NaN` and never satisfies a diameter
//! criterion.

mod criterion;
mod error;
mod factory;
mod field;
mod filters;
mod limit;
mod op;
mod traits;
mod value;

// Re-export public API
pub use criterion::Criterion;
pub use error::{Result, SeekerError};
pub use factory::{create_filters, criterion_for, identify_op, strip_to_root, FilterOptions};
pub use field::Field;
pub use filters::{Filters, Matching};
pub use limit::{limit, Limit, LimitExt};
pub use op::Op;
pub use traits::Approachable;
pub use value::Value;
