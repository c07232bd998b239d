//! Command handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use neo_seeker::{create_filters, limit, FilterOptions};
use neo_store::{write_results, NeoDatabase};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Primary designation of the NEO
    #[arg(long, required_unless_present = "name", conflicts_with = "name")]
    pub pdes: Option<String>,

    /// IAU name of the NEO
    #[arg(long)]
    pub name: Option<String>,

    /// Also list the NEO's close approaches
    #[arg(long)]
    pub approaches: bool,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum approach velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum approach velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Save results to this .csv or .json file instead of printing them
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Translates command-line flags into filter options.
    pub fn options(&self) -> FilterOptions {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        FilterOptions {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

pub fn load_database(neofile: &Path, cadfile: &Path) -> anyhow::Result<NeoDatabase> {
    let db = NeoDatabase::load(neofile, cadfile).with_context(|| {
        format!(
            "failed to load data from {} and {}",
            neofile.display(),
            cadfile.display()
        )
    })?;
    info!(
        neos = db.neos().count(),
        approaches = db.approaches().len(),
        "database ready"
    );
    Ok(db)
}

pub fn inspect(db: &NeoDatabase, args: &InspectArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };

    let Some(neo) = neo else {
        writeln!(out, "No matching NEOs exist in the database.")?;
        return Ok(());
    };

    writeln!(out, "{neo}")?;
    if args.approaches {
        for approach in db.approaches_for(&neo.designation) {
            writeln!(out, "- {approach}")?;
        }
    }
    Ok(())
}

pub fn query(db: &NeoDatabase, args: &QueryArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let filters = create_filters(&args.options()).context("failed to build filters")?;
    debug!(%filters, limit = args.limit, "running query");

    let results = limit(db.query(&filters)?, Some(args.limit));

    match &args.outfile {
        Some(path) => {
            let rows = write_results(results, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(rows, path = %path.display(), "saved results");
        }
        None => {
            let mut printed = 0usize;
            for approach in results {
                writeln!(out, "{approach}")?;
                printed += 1;
            }
            if printed == 0 {
                writeln!(out, "No matching close approaches.")?;
            }
        }
    }
    Ok(())
}
