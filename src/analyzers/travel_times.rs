use chrono::Timelike;

use crate::analyzers::types::TimeStats;
use crate::analyzers::utility::most_common;
use crate::filters::day_name;
use crate::loader::TripTable;

/// Most frequent month, weekday and start hour across the table.
pub fn time_stats(table: &TripTable) -> TimeStats {
    let rows = table.rows();

    TimeStats {
        most_common_month: most_common(rows.iter().map(|r| r.month)).map(|m| m.name()),
        most_common_day: most_common(rows.iter().map(|r| r.day)).map(day_name),
        most_common_hour: most_common(rows.iter().map(|r| r.start_time.hour())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::loader::read_trips;

    fn table(csv: &str) -> TripTable {
        TripTable::new(City::Chicago, read_trips(csv.as_bytes()).unwrap())
    }

    #[test]
    fn test_time_stats() {
        let t = table(
            "\
Start Time,Trip Duration
2017-03-06 08:10:00,60
2017-03-07 17:30:00,60
2017-04-06 17:05:00,60
2017-03-13 09:00:00,60
",
        );
        let stats = time_stats(&t);
        assert_eq!(stats.most_common_month, Some("March"));
        assert_eq!(stats.most_common_day, Some("Monday"));
        assert_eq!(stats.most_common_hour, Some(17));
    }

    #[test]
    fn test_time_stats_tie_prefers_earliest_row() {
        let t = table(
            "\
Start Time
2017-05-02 10:00:00
2017-02-02 11:00:00
2017-02-03 11:00:00
2017-05-03 10:00:00
",
        );
        let stats = time_stats(&t);
        assert_eq!(stats.most_common_month, Some("May"));
        assert_eq!(stats.most_common_hour, Some(10));
    }

    #[test]
    fn test_time_stats_empty_table() {
        let stats = time_stats(&TripTable::new(City::Chicago, vec![]));
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }
}
