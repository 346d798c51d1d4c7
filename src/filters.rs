//! City/month/day selection: vocabulary, validation and the prompt loop.

use anyhow::Result;
use chrono::{Month, Weekday};
use regex::Regex;
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::console::Console;
use crate::error::FilterError;

/// Sentinel accepted for month and day meaning "no restriction".
pub const ALL: &str = "all";

static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("regex is valid"));

static MONTHS: &[(&str, Month)] = &[
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
];

static DAYS: &[(&str, Weekday)] = &[
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
];

/// The three cities with a bundled trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Key the user types to select the city.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        }
    }

    /// Dataset file name, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the dataset carries `Gender` and `Birth Year` columns.
    pub fn has_demographics(self) -> bool {
        matches!(self, City::Chicago | City::NewYork)
    }

    pub fn from_key(key: &str) -> Option<City> {
        City::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Full English weekday name, e.g. `Monday`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A validated filter triple. `None` for month or day means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.map_or(ALL, |m| m.name());
        let day = self.day.map_or(ALL, day_name);
        write!(f, "{}, {}, {}", self.city, month, day)
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], value: &str) -> Option<Option<T>> {
    if value == ALL {
        return Some(None);
    }
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, v)| Some(*v))
}

/// Checks a `[city, month, day]` triple against the vocabularies and the
/// letters-and-spaces pattern.
///
/// Values are matched exactly; callers lowercase and trim first.
///
/// # Errors
///
/// [`FilterError::UnknownValue`] when any value falls outside its
/// vocabulary, [`FilterError::NotAlphabetic`] when any value has a
/// character other than a letter or space.
pub fn validate_input(inputs: [&str; 3]) -> Result<Selection, FilterError> {
    let [city, month, day] = inputs;

    let (Some(city), Some(month), Some(day)) = (
        City::from_key(city),
        lookup(MONTHS, month),
        lookup(DAYS, day),
    ) else {
        return Err(FilterError::UnknownValue);
    };

    if inputs.iter().any(|v| !ALPHABETIC.is_match(v)) {
        return Err(FilterError::NotAlphabetic);
    }

    Ok(Selection { city, month, day })
}

/// Splits a `city, month, day` line into trimmed, lowercased tokens and
/// validates them.
pub fn parse_filter_line(line: &str) -> Result<Selection, FilterError> {
    let tokens: Vec<String> = line.split(',').map(|t| t.trim().to_lowercase()).collect();

    let [city, month, day] = tokens.as_slice() else {
        return Err(FilterError::Shape {
            found: tokens.len(),
        });
    };

    validate_input([city.as_str(), month.as_str(), day.as_str()])
}

/// Prompts until a valid selection is entered. Returns `None` if the
/// input ends first.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Selection>> {
    console.say("Hello! Let's explore some US bikeshare data!\n")?;

    loop {
        console.say("To ignore month and day filters: input 'all' in their respective fields")?;
        let Some(line) = console.ask("Enter city, month, day (comma separated): ")? else {
            return Ok(None);
        };

        match parse_filter_line(&line) {
            Ok(selection) => {
                info!(%selection, "Filters selected");
                console.say(&"-".repeat(40))?;
                return Ok(Some(selection));
            }
            Err(e) => {
                warn!(input = %line, error = %e, "Rejected filter input");
                console.say(&e.to_string())?;
            }
        }
    }
}
