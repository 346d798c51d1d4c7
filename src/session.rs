//! The interactive loop: select, load, report, page, restart.

use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::analyzers::{durations, stations, travel_times, users};
use crate::console::Console;
use crate::filters::get_filters;
use crate::loader::{TripTable, load_data};
use crate::output;
use crate::pager::display_raw_data;

/// Settings for a run of the explorer.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the city CSV files.
    pub data_dir: PathBuf,
    /// Offer the final page even when it has fewer than five rows.
    pub show_remainder: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            show_remainder: false,
        }
    }
}

/// Times one reporter: prints its heading, computes and renders the
/// report, then the elapsed time.
fn run_reporter<R, W, T>(
    console: &mut Console<R, W>,
    heading: &str,
    compute: impl FnOnce() -> T,
    render: fn(&mut W, &T) -> Result<()>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: Serialize,
{
    let started = Instant::now();
    output::write_heading(console.writer(), heading)?;

    let report = compute();
    output::print_json(&report)?;
    render(console.writer(), &report)?;

    output::write_footer(console.writer(), started.elapsed())?;
    Ok(report)
}

/// Prints the four statistic groups for a loaded table, in order.
pub fn report_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    let city = table.city();

    run_reporter(
        console,
        "Calculating The Most Frequent Times of Travel...",
        || travel_times::time_stats(table),
        output::write_time_stats,
    )?;
    run_reporter(
        console,
        "Calculating The Most Popular Stations and Trip...",
        || stations::station_stats(table),
        output::write_station_stats,
    )?;
    run_reporter(
        console,
        "Calculating Trip Duration...",
        || durations::trip_duration_stats(table),
        output::write_duration_stats,
    )?;
    run_reporter(
        console,
        "Calculating User Stats...",
        || users::user_stats(table, city),
        output::write_user_stats,
    )?;
    Ok(())
}

/// Runs analysis passes until the user declines to restart or input ends.
/// Returns the number of completed passes.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &SessionConfig) -> Result<usize> {
    let mut passes = 0;

    loop {
        let Some(selection) = get_filters(console)? else {
            break;
        };

        let table = load_data(&config.data_dir, &selection)?;
        report_all(console, &table)?;
        display_raw_data(console, &table, config.show_remainder)?;
        passes += 1;

        let restart = console.ask("\nWould you like to restart? Enter yes or no.\n")?;
        if !restart.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")) {
            break;
        }
        info!(passes, "Restarting session");
    }

    info!(passes, "Session finished");
    Ok(passes)
}
