//! Shows the raw trip rows a page at a time on request.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::Console;
use crate::loader::TripTable;
use crate::output::write_rows;

pub const PAGE_SIZE: usize = 5;

/// Offers the table's rows in pages of [`PAGE_SIZE`] until the user
/// answers `no` or the rows run out.
///
/// Without `show_remainder`, a trailing page shorter than [`PAGE_SIZE`]
/// is never offered. Returns the number of pages shown.
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    show_remainder: bool,
) -> Result<usize> {
    console.say("Displaying Raw Data ...")?;

    let rows = table.rows();
    let demographics = table.city().has_demographics();
    let has_next_page = |cursor: usize| {
        if show_remainder {
            cursor < rows.len()
        } else {
            cursor + PAGE_SIZE <= rows.len()
        }
    };

    let mut cursor = 0;
    let mut pages = 0;
    while has_next_page(cursor) {
        let prompt = if cursor == 0 {
            "Do you want to see the first five rows of data? Enter yes or no\n"
        } else {
            "Do you want to see another five rows of data? Enter yes or no\n"
        };

        match console.confirm(prompt)? {
            Some(true) => {
                let end = (cursor + PAGE_SIZE).min(rows.len());
                write_rows(console.writer(), &rows[cursor..end], demographics)?;
                console.say(&"-".repeat(80))?;
                cursor = end;
                pages += 1;
            }
            Some(false) | None => break,
        }
    }

    debug!(pages, cursor, total = rows.len(), "Pager finished");
    Ok(pages)
}
