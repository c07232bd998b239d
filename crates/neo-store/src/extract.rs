//! Loading NEOs and close approaches from NASA's data files.
//!
//! - NEOs come from a CSV export of the small-body database with a header
//!   row; only the `pdes`, `name`, `diameter` and `pha` columns are read.
//! - Close approaches come from the close-approach API's JSON payload, a
//!   `fields` array naming the columns and a `data` array of rows.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::helpers::{cd_to_datetime, hazard_flag, optional_float, optional_string};
use crate::models::{CloseApproach, NearEarthObject};

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    diameter: Option<String>,
    #[serde(default)]
    pha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CadPayload {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
}

/// Column positions of the values we need inside a `data` row.
struct CadColumns {
    des: usize,
    cd: usize,
    dist: usize,
    v_rel: usize,
}

impl CadColumns {
    fn locate(fields: &[String]) -> Result<Self> {
        let find = |name: &'static str| {
            fields
                .iter()
                .position(|f| f == name)
                .ok_or(StoreError::MissingColumn(name))
        };
        Ok(CadColumns {
            des: find("des")?,
            cd: find("cd")?,
            dist: find("dist")?,
            v_rel: find("v_rel")?,
        })
    }
}

/// Reads NEOs from a CSV file.
pub fn load_neos(path: impl AsRef<Path>) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let neos = read_neos(BufReader::new(file))?;
    debug!(path = %path.display(), count = neos.len(), "loaded NEOs");
    Ok(neos)
}

/// Reads NEOs from CSV data.
pub fn read_neos<R: Read>(reader: R) -> Result<Vec<NearEarthObject>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut neos = Vec::new();
    for (index, row) in rdr.deserialize::<NeoRow>().enumerate() {
        let row = row?;
        let hazardous =
            hazard_flag(row.pha.as_deref()).map_err(|reason| StoreError::malformed(index, reason))?;
        neos.push(NearEarthObject::new(
            row.pdes.trim(),
            optional_string(row.name.as_deref()),
            optional_float(row.diameter.as_deref()),
            hazardous,
        ));
    }
    Ok(neos)
}

/// Reads close approaches from a JSON file.
pub fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let approaches = read_approaches(BufReader::new(file))?;
    debug!(path = %path.display(), count = approaches.len(), "loaded close approaches");
    Ok(approaches)
}

/// Reads close approaches from JSON data.
pub fn read_approaches<R: Read>(reader: R) -> Result<Vec<CloseApproach>> {
    let payload: CadPayload = serde_json::from_reader(reader)?;
    let columns = CadColumns::locate(&payload.fields)?;

    payload
        .data
        .iter()
        .enumerate()
        .map(|(index, row)| parse_approach(index, row, &columns))
        .collect()
}

fn parse_approach(index: usize, row: &[Option<String>], columns: &CadColumns) -> Result<CloseApproach> {
    let cell = |column: usize, name: &str| {
        row.get(column)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| StoreError::malformed(index, format!("missing '{name}'")))
    };
    let number = |column: usize, name: &str| -> Result<f64> {
        let raw = cell(column, name)?;
        raw.trim()
            .parse()
            .map_err(|_| StoreError::malformed(index, format!("'{name}' is not a number: '{raw}'")))
    };

    Ok(CloseApproach::new(
        cell(columns.des, "des")?.trim(),
        cd_to_datetime(cell(columns.cd, "cd")?)?,
        number(columns.dist, "dist")?,
        number(columns.v_rel, "v_rel")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEOS: &str = "\
id,pdes,name,pha,diameter,albedo
a0000433,433,Eros,N,16.84,0.25
a0099942,99942,Apophis,Y,0.37,
bK20A00B,2020 AB,,Y,,
";

    const CAD: &str = r#"{
        "signature": {"version": "1.1", "source": "NASA/JPL SBDB Close Approach Data API"},
        "count": "2",
        "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
        "data": [
            ["433", "659", "2415020.507669306", "1900-Jan-01 00:11", "0.314", "0.313", "0.315", "3.7", "3.68", "< 00:01", "10.4"],
            ["99942", "200", "2462240.407", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", "5.84", "< 00:01", "19.7"]
        ]
    }"#;

    #[test]
    fn reads_neo_rows() {
        let neos = read_neos(NEOS.as_bytes()).unwrap();
        assert_eq!(neos.len(), 3);

        assert_eq!(neos[0].designation, "433");
        assert_eq!(neos[0].name.as_deref(), Some("Eros"));
        assert_eq!(neos[0].diameter, 16.84);
        assert!(!neos[0].hazardous);

        assert!(neos[1].hazardous);

        assert_eq!(neos[2].name, None);
        assert!(neos[2].diameter.is_nan());
    }

    #[test]
    fn rejects_unknown_hazard_flag() {
        let data = "pdes,name,pha,diameter\n433,Eros,Q,16.84\n";
        let err = read_neos(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn reads_approach_rows() {
        let approaches = read_approaches(CAD.as_bytes()).unwrap();
        assert_eq!(approaches.len(), 2);

        assert_eq!(approaches[0].designation, "433");
        assert_eq!(approaches[0].time_str(), "1900-01-01 00:11");
        assert_eq!(approaches[0].distance, 0.314);
        assert_eq!(approaches[0].velocity, 3.7);
        assert!(approaches[0].neo.is_none());

        assert_eq!(approaches[1].time_str(), "2029-04-13 21:46");
    }

    #[test]
    fn missing_column_is_reported() {
        let data = r#"{"fields": ["des", "cd", "dist"], "data": []}"#;
        let err = read_approaches(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MissingColumn("v_rel")));
    }

    #[test]
    fn malformed_number_is_reported() {
        let data = r#"{"fields": ["des", "cd", "dist", "v_rel"],
                       "data": [["433", "1900-Jan-01 00:11", "far", "3.7"]]}"#;
        let err = read_approaches(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn null_cell_is_reported() {
        let data = r#"{"fields": ["des", "cd", "dist", "v_rel"],
                       "data": [["433", null, "0.3", "3.7"]]}"#;
        assert!(read_approaches(data.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_neos("/nonexistent/neos.csv").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
