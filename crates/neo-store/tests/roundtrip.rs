//! Loading files, querying, limiting and writing, against real files on disk.

use std::fs;

use neo_seeker::{create_filters, limit, FilterOptions};
use neo_store::{write_results, NeoDatabase, StoreError};
use tempfile::TempDir;

const NEOS: &str = "\
pdes,name,pha,diameter
433,Eros,N,16.84
99942,Apophis,Y,0.37
2020 AB,,Y,
";

const CAD: &str = r#"{
    "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
    "data": [
        ["433", "659", "2415020.5", "1900-Jan-01 00:11", "0.314", "0.313", "0.315", "3.7", "3.6", "< 00:01", "10.4"],
        ["2020 AB", "3", "2458850.6", "2019-Dec-31 14:00", "0.03", "0.03", "0.03", "11.2", "11.1", "00:02", "25.1"],
        ["99942", "200", "2458850.7", "2020-Jan-01 09:30", "0.10", "0.10", "0.10", "7.4", "5.8", "< 00:01", "19.7"],
        ["2020 AB", "3", "2458851.2", "2020-Jan-01 18:00", "0.02", "0.02", "0.02", "12.0", "11.9", "00:02", "25.1"],
        ["unknown", "1", "2458851.3", "2020-Jan-02 00:00", "0.01", "0.01", "0.01", "5.0", "4.9", "00:02", "28.0"]
    ]
}"#;

fn fixture() -> (TempDir, NeoDatabase) {
    let dir = TempDir::new().unwrap();
    let neo_path = dir.path().join("neos.csv");
    let cad_path = dir.path().join("cad.json");
    fs::write(&neo_path, NEOS).unwrap();
    fs::write(&cad_path, CAD).unwrap();
    let db = NeoDatabase::load(&neo_path, &cad_path).unwrap();
    (dir, db)
}

#[test]
fn load_links_everything_but_orphans() {
    let (_dir, db) = fixture();
    assert_eq!(db.neos().count(), 3);
    assert_eq!(db.approaches().len(), 4);
    assert_eq!(db.approaches_for("2020 AB").count(), 2);
}

#[test]
fn start_date_query_to_csv() {
    let (dir, db) = fixture();
    let filters = create_filters(&FilterOptions::new().start_date(
        chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ))
    .unwrap();

    let out = dir.path().join("out.csv");
    let rows = write_results(db.query(&filters).unwrap(), &out).unwrap();
    assert_eq!(rows, 2);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2020-01-01 09:30,0.1,7.4,99942,Apophis,0.37,True"));
    assert!(lines[2].starts_with("2020-01-01 18:00,0.02,12.0,2020 AB,,nan,True"));
}

#[test]
fn limited_query_to_json() {
    let (dir, db) = fixture();
    let filters = create_filters(&FilterOptions::new().hazardous(true)).unwrap();

    let out = dir.path().join("out.json");
    let rows = write_results(limit(db.query(&filters).unwrap(), Some(1)), &out).unwrap();
    assert_eq!(rows, 1);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["datetime_utc"], "2019-12-31 14:00");
    assert_eq!(items[0]["neo"]["designation"], "2020 AB");
    assert!(items[0]["neo"]["diameter_km"].is_null());
}

#[test]
fn unsupported_extension_is_rejected() {
    let (dir, db) = fixture();
    let filters = create_filters(&FilterOptions::new()).unwrap();

    let err = write_results(db.query(&filters).unwrap(), dir.path().join("out.txt")).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedFormat(_)));
}
