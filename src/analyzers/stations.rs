use crate::analyzers::types::StationStats;
use crate::analyzers::utility::most_common;
use crate::loader::TripTable;

/// Most used start station, end station, and start/end combination.
/// Rows missing a station are left out of the counts that need it.
pub fn station_stats(table: &TripTable) -> StationStats {
    let rows = table.rows();

    let starts = rows.iter().filter_map(|r| r.start_station.as_deref());
    let ends = rows.iter().filter_map(|r| r.end_station.as_deref());
    let trips = rows.iter().filter_map(|r| {
        Some((r.start_station.as_deref()?, r.end_station.as_deref()?))
    });

    StationStats {
        most_common_start: most_common(starts).map(str::to_string),
        most_common_end: most_common(ends).map(str::to_string),
        most_common_trip: most_common(trips).map(|(s, e)| (s.to_string(), e.to_string())),
    }
}
