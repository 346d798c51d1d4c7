use crate::analyzers::types::{Demographics, UserStats};
use crate::analyzers::utility::{most_common, value_counts};
use crate::filters::City;
use crate::loader::TripTable;

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

/// User-type counts, plus gender and birth-year figures when `city` is
/// one whose dataset records them.
///
/// `city` is the selected city rather than `table.city()` so callers
/// decide which section applies.
pub fn user_stats(table: &TripTable, city: City) -> UserStats {
    let rows = table.rows();

    let user_type_counts = owned_counts(rows.iter().filter_map(|r| r.user_type.as_deref()));

    let demographics = city.has_demographics().then(|| {
        let years: Vec<i32> = rows
            .iter()
            .filter_map(|r| r.birth_year)
            .filter(|y| y.is_finite())
            .map(|y| y.trunc() as i32)
            .collect();

        Demographics {
            gender_counts: owned_counts(rows.iter().filter_map(|r| r.gender.as_deref())),
            earliest_birth_year: years.iter().copied().min(),
            most_recent_birth_year: years.iter().copied().max(),
            most_common_birth_year: most_common(years.iter().copied()),
        }
    });

    UserStats {
        user_type_counts,
        demographics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_trips;

    const RIDERS: &str = "\
Start Time,User Type,Gender,Birth Year
2017-01-01 09:00:00,Subscriber,Male,1985.0
2017-01-01 09:00:00,Customer,,
2017-01-01 09:00:00,Subscriber,Female,1992.0
2017-01-01 09:00:00,Subscriber,Male,1992.0
2017-01-01 09:00:00,,Female,1940.0
";

    fn table(city: City) -> TripTable {
        TripTable::new(city, read_trips(RIDERS.as_bytes()).unwrap())
    }

    #[test]
    fn test_user_type_counts() {
        let stats = user_stats(&table(City::Chicago), City::Chicago);
        assert_eq!(
            stats.user_type_counts,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn test_demographics_for_chicago() {
        let stats = user_stats(&table(City::Chicago), City::Chicago);
        let demo = stats.demographics.unwrap();

        assert_eq!(
            demo.gender_counts,
            vec![("Male".to_string(), 2), ("Female".to_string(), 2)]
        );
        assert_eq!(demo.earliest_birth_year, Some(1940));
        assert_eq!(demo.most_recent_birth_year, Some(1992));
        assert_eq!(demo.most_common_birth_year, Some(1992));
    }

    #[test]
    fn test_no_demographics_for_washington() {
        let stats = user_stats(&table(City::Washington), City::Washington);
        assert!(stats.demographics.is_none());
        assert_eq!(stats.user_type_counts.len(), 2);
    }

    #[test]
    fn test_city_argument_decides_section() {
        let stats = user_stats(&table(City::Washington), City::NewYork);
        assert!(stats.demographics.is_some());
    }

    #[test]
    fn test_demographics_empty_table() {
        let stats = user_stats(&TripTable::new(City::NewYork, vec![]), City::NewYork);
        assert!(stats.user_type_counts.is_empty());

        let demo = stats.demographics.unwrap();
        assert!(demo.gender_counts.is_empty());
        assert_eq!(demo.earliest_birth_year, None);
        assert_eq!(demo.most_common_birth_year, None);
    }
}
