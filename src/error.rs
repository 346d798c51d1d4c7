//! Typed rejections raised while collecting the filter selection.

use thiserror::Error;

/// Reasons a filter line is rejected. All variants are recoverable: the
/// collector prints the message and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// One of the values is not in the city/month/day vocabulary.
    #[error(
        "Invalid Input. Correct input: city [chicago/new york/washington], month: [january through june / all], day: [sunday through saturday / all]."
    )]
    UnknownValue,

    /// A value contains something other than letters and spaces.
    #[error("Make sure you've typed the city/month/day correctly")]
    NotAlphabetic,

    /// The line did not split into exactly three comma-separated fields.
    #[error("Expected 3 comma separated values (city, month, day) but found {found}")]
    Shape { found: usize },
}
