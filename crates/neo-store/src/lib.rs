//! In-memory store for near-Earth objects and their close approaches.
//!
//! `neo-store` is the data side of the NEO toolkit. It loads NASA's data
//! files, links each close approach to its object, runs
//! [`neo_seeker::Filters`] over the approaches, and writes results back out.
//!
//! # Example
//!
//! ```rust,no_run
//! use neo_seeker::{create_filters, limit, FilterOptions};
//! use neo_store::{write_results, NeoDatabase};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = NeoDatabase::load("data/neos.csv", "data/cad.json")?;
//!
//! let filters = create_filters(&FilterOptions::new().distance_max(0.05).hazardous(true))?;
//! let results = limit(db.query(&filters)?, Some(10));
//!
//! write_results(results, "close_and_hazardous.csv")?;
//! # Ok(())
//! # }
//! ```

mod database;
mod error;
mod extract;
mod helpers;
mod models;
mod write;

pub use database::NeoDatabase;
pub use error::{Result, StoreError};
pub use extract::{load_approaches, load_neos, read_approaches, read_neos};
pub use helpers::{
    cd_to_datetime, datetime_to_str, float_to_str, hazard_flag, optional_float, optional_string,
};
pub use models::{CloseApproach, NearEarthObject};
pub use write::{
    csv_to_writer, json_to_writer, write_results, write_to_csv, write_to_json, OutputFormat,
    CSV_HEADER,
};
