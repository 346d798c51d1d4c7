//! Console rendering for reports and raw trip rows.
//!
//! Reports are also logged as JSON at debug level so a session's figures
//! end up in the structured log file.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::analyzers::types::{DurationStats, StationStats, TimeStats, UserStats};
use crate::loader::TripRecord;

const NO_DATA: &str = "No data available";

fn or_no_data<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

/// Logs a report as pretty-printed JSON.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Heading printed before a reporter runs.
pub fn write_heading<W: Write>(w: &mut W, heading: &str) -> Result<()> {
    writeln!(w, "\n{}\n", heading)?;
    Ok(())
}

/// Timing line and separator printed after a reporter runs.
pub fn write_footer<W: Write>(w: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(w, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(w, "{}", "-".repeat(40))?;
    Ok(())
}

pub fn write_time_stats<W: Write>(w: &mut W, stats: &TimeStats) -> Result<()> {
    writeln!(w, "Most Common Month: {}", or_no_data(stats.most_common_month))?;
    writeln!(w, "Most Common Weekday: {}", or_no_data(stats.most_common_day))?;
    writeln!(w, "Most Common Start Hour: {}", or_no_data(stats.most_common_hour))?;
    Ok(())
}

pub fn write_station_stats<W: Write>(w: &mut W, stats: &StationStats) -> Result<()> {
    writeln!(
        w,
        "Most Common Start Station: {}",
        or_no_data(stats.most_common_start.as_deref())
    )?;
    writeln!(
        w,
        "Most Common End Station: {}",
        or_no_data(stats.most_common_end.as_deref())
    )?;
    let trip = stats
        .most_common_trip
        .as_ref()
        .map(|(start, end)| format!("{} - {}", start, end));
    writeln!(w, "Most Common Start & End: {}", or_no_data(trip))?;
    Ok(())
}

pub fn write_duration_stats<W: Write>(w: &mut W, stats: &DurationStats) -> Result<()> {
    match stats.total_hours() {
        Some(hours) => writeln!(w, "Total Travel Time: {} hours", hours)?,
        None => writeln!(w, "Total Travel Time: {}", NO_DATA)?,
    }
    match stats.mean_seconds {
        Some(secs) => writeln!(w, "Average Travel Time: {} seconds", secs)?,
        None => writeln!(w, "Average Travel Time: {}", NO_DATA)?,
    }
    Ok(())
}

fn write_counts<W: Write>(w: &mut W, title: &str, counts: &[(String, usize)]) -> Result<()> {
    writeln!(w, "{}", title)?;
    writeln!(w, "{}", "-".repeat(25))?;
    if counts.is_empty() {
        writeln!(w, "{}", NO_DATA)?;
        return Ok(());
    }

    let label_width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    let count_width = counts.iter().map(|(_, n)| n.to_string().len()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(w, "{:<label_width$}    {:>count_width$}", value, count)?;
    }
    Ok(())
}

pub fn write_user_stats<W: Write>(w: &mut W, stats: &UserStats) -> Result<()> {
    write_counts(w, "User Type Count:", &stats.user_type_counts)?;

    if let Some(demo) = &stats.demographics {
        writeln!(w)?;
        write_counts(w, "Gender Count:", &demo.gender_counts)?;

        writeln!(w, "\nEarliest Year of Birth: {}", or_no_data(demo.earliest_birth_year))?;
        writeln!(w, "Most Recent Year: {}", or_no_data(demo.most_recent_birth_year))?;
        writeln!(w, "Most Common Year: {}", or_no_data(demo.most_common_birth_year))?;
    }
    Ok(())
}

/// Writes trip rows as a left-aligned table, one column per field.
/// Gender and birth year columns are only included when `demographics`.
pub fn write_rows<W: Write>(w: &mut W, rows: &[TripRecord], demographics: bool) -> Result<()> {
    let fmt_time = |t: &chrono::NaiveDateTime| t.format("%Y-%m-%d %H:%M:%S").to_string();
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    header.extend(["Month", "Day"]);

    let mut table: Vec<Vec<String>> = vec![header.iter().map(|h| h.to_string()).collect()];
    for r in rows {
        let mut cells = vec![
            r.index.to_string(),
            fmt_time(&r.start_time),
            r.end_time.as_ref().map(fmt_time).unwrap_or_default(),
            number(r.trip_duration),
            text(&r.start_station),
            text(&r.end_station),
            text(&r.user_type),
        ];
        if demographics {
            cells.push(text(&r.gender));
            cells.push(number(r.birth_year));
        }
        cells.push(r.month.name().to_string());
        cells.push(crate::filters::day_name(r.day).to_string());
        table.push(cells);
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|col| table.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
        .collect();

    for row in &table {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        writeln!(w, "{}", line.join("  ").trim_end())?;
    }
    Ok(())
}
