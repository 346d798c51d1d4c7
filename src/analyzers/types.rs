//! Report types produced by the reporters.
//!
//! A `None` field means the filtered table held no usable values for it.

use serde::Serialize;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub most_common_month: Option<&'static str>,
    pub most_common_day: Option<&'static str>,
    pub most_common_hour: Option<u32>,
}

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_trip: Option<(String, String)>,
}

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: Option<f64>,
    pub mean_seconds: Option<f64>,
}

impl DurationStats {
    pub fn total_hours(&self) -> Option<f64> {
        self.total_seconds.map(|s| s / 3600.0)
    }
}

/// Gender and birth-year breakdown, only for datasets that carry them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub gender_counts: Vec<(String, usize)>,
    pub earliest_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_type_counts: Vec<(String, usize)>,
    pub demographics: Option<Demographics>,
}
