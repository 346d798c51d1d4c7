//! Reads a city's trip CSV into memory and applies the month/day filters.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::filters::{City, Selection};

/// Timestamp layouts accepted for `Start Time` / `End Time`, tried in order.
static TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// A row as it appears in the CSV. Columns absent from a dataset
/// (e.g. `Gender` for Washington) deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// One trip with its derived month and weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based position of the row in the source file.
    pub index: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    // derived from start_time
    pub month: Month,
    pub day: Weekday,
}

impl TripRecord {
    fn from_raw(index: usize, raw: RawTrip) -> Result<Self> {
        let start_time = parse_timestamp(&raw.start_time)?;
        let end_time = raw.end_time.as_deref().map(parse_timestamp).transpose()?;
        let month = Month::try_from(start_time.month() as u8)
            .ok()
            .with_context(|| format!("month out of range in {}", start_time))?;

        Ok(TripRecord {
            index,
            start_time,
            end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year,
            month,
            day: start_time.weekday(),
        })
    }
}

/// Parses a trip timestamp in any of the accepted layouts.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    bail!("unrecognised timestamp '{}'", value)
}

/// The trips under analysis for one session iteration.
#[derive(Debug, Clone)]
pub struct TripTable {
    city: City,
    rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, rows: Vec<TripRecord>) -> Self {
        Self { city, rows }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Deserializes every trip from CSV data with a header row.
///
/// # Errors
///
/// Returns an error naming the offending row if a record cannot be
/// deserialized or its timestamps cannot be parsed.
pub fn read_trips<R: Read>(reader: R) -> Result<Vec<TripRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let raw: RawTrip =
            result.with_context(|| format!("malformed trip record at row {}", index + 1))?;
        let record = TripRecord::from_raw(index, raw)
            .with_context(|| format!("invalid trip record at row {}", index + 1))?;
        rows.push(record);
    }

    Ok(rows)
}

/// Keeps only the trips matching the month and day filters. `None` keeps
/// every value.
pub fn apply_filters(
    mut rows: Vec<TripRecord>,
    month: Option<Month>,
    day: Option<Weekday>,
) -> Vec<TripRecord> {
    if let Some(month) = month {
        rows.retain(|r| r.month == month);
    }
    if let Some(day) = day {
        rows.retain(|r| r.day == day);
    }
    rows
}

/// Loads the selected city's dataset from `data_dir` and filters it.
#[tracing::instrument(skip(data_dir, selection), fields(selection = %selection))]
pub fn load_data(data_dir: &Path, selection: &Selection) -> Result<TripTable> {
    let path = data_dir.join(selection.city.file_name());
    debug!(path = %path.display(), "Opening dataset");

    let file = File::open(&path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    let rows = read_trips(file).with_context(|| format!("failed to read {}", path.display()))?;

    let total = rows.len();
    let rows = apply_filters(rows, selection.month, selection.day);
    info!(total, kept = rows.len(), "Dataset loaded");

    Ok(TripTable::new(selection.city, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    #[test]
    fn test_read_trips_parses_every_row() {
        let rows = read_trips(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);

        let first = &rows[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.month, Month::June);
        assert_eq!(first.day, Weekday::Fri);
        assert_eq!(first.trip_duration, Some(321.0));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992.0));
    }

    #[test]
    fn test_empty_fields_become_none() {
        let rows = read_trips(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows[2].gender, None);
        assert_eq!(rows[2].birth_year, None);
    }

    #[test]
    fn test_missing_demographic_columns() {
        let data = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";
        let rows = read_trips(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gender, None);
        assert_eq!(rows[0].trip_duration, Some(489.066));
    }

    #[test]
    fn test_bad_timestamp_names_row() {
        let data = "Start Time,Trip Duration\n2017-01-01 00:00:00,1\nyesterday,2\n";
        let err = read_trips(data.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("row 2"));
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        assert!(parse_timestamp("2017-03-01 07:01:00").is_ok());
        assert!(parse_timestamp("2017-03-01 07:01:00.250").is_ok());
        assert!(parse_timestamp("2017-03-01T07:01:00").is_ok());
        assert!(parse_timestamp("3/1/2017 07:01").is_ok());
        assert!(parse_timestamp("not a time").is_err());
    }

    #[test]
    fn test_apply_filters_all_is_identity() {
        let rows = read_trips(SAMPLE.as_bytes()).unwrap();
        let filtered = apply_filters(rows.clone(), None, None);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_apply_filters_month_and_day() {
        let rows = read_trips(SAMPLE.as_bytes()).unwrap();

        let june = apply_filters(rows.clone(), Some(Month::June), None);
        assert_eq!(june.len(), 1);
        assert!(june.iter().all(|r| r.month == Month::June));

        let wednesdays = apply_filters(rows.clone(), None, Some(Weekday::Wed));
        assert_eq!(wednesdays.len(), 1);
        assert_eq!(wednesdays[0].index, 2);

        let none = apply_filters(rows, Some(Month::June), Some(Weekday::Mon));
        assert!(none.is_empty());
    }

    #[test]
    fn test_load_data_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let selection = Selection {
            city: City::Chicago,
            month: None,
            day: None,
        };
        let err = load_data(dir.path(), &selection).unwrap_err();
        assert!(err.to_string().contains("chicago.csv"));
    }
}
