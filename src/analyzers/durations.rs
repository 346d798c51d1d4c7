use crate::analyzers::types::DurationStats;
use crate::analyzers::utility::mean;
use crate::loader::TripTable;

/// Total and mean trip duration. Missing durations are skipped; other
/// values (including negative ones) are used as-is.
pub fn trip_duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|r| r.trip_duration)
        .collect();

    DurationStats {
        total_seconds: (!durations.is_empty()).then(|| durations.iter().sum()),
        mean_seconds: mean(&durations),
    }
}
