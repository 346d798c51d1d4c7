//! Descriptive statistics over a filtered [`TripTable`](crate::loader::TripTable).
//!
//! Each reporter borrows the table read-only and returns a serializable
//! report; rendering lives in [`crate::output`]. "Most common" values
//! break ties in favour of the value seen first in file order.

pub mod durations;
pub mod stations;
pub mod travel_times;
pub mod types;
pub mod users;
pub mod utility;
