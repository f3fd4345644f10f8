use chrono::{Datelike, Duration, NaiveDate};

/// A month rendered as Monday-first weeks. Slots outside the month are None.
pub(crate) type Week = [Option<NaiveDate>; 7];

/// Canonical zero-padded `YYYY-MM-DD` key identifying a calendar day.
pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date key back into a date. Keys are stored as opaque text, so a
/// key that never came from [`date_key`] may fail here.
pub(crate) fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub(crate) fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    (first_of_month(next_year, next_month) - Duration::days(1)).day()
}

pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub(crate) fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Derive the week-major grid for a month. The first row begins on the Monday
/// on or before the 1st, the last row ends on the Sunday on or after the last
/// day. Pure function of (year, month).
pub(crate) fn month_grid(year: i32, month: u32) -> Vec<Week> {
    let first = first_of_month(year, month);
    let last_day = days_in_month(year, month) as i64;

    // Monday is 0
    let first_weekday = first.weekday().num_days_from_monday() as i64;

    let mut weeks = vec![];
    let mut day_counter: i64 = 1 - first_weekday;
    while day_counter <= last_day {
        let mut week: Week = [None; 7];
        for slot in week.iter_mut() {
            if day_counter >= 1 && day_counter <= last_day {
                *slot = NaiveDate::from_ymd_opt(year, month, day_counter as u32);
            }
            day_counter += 1;
        }
        weeks.push(week);
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_grid_leading_empty_slots() {
        // Feb 2023 starts on a Wednesday, 28 days: 2 leading empty slots and 5 rows
        let weeks = month_grid(2023, 2);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], None);
        assert_eq!(weeks[0][2], NaiveDate::from_ymd_opt(2023, 2, 1));
        assert_eq!(weeks[4][1], NaiveDate::from_ymd_opt(2023, 2, 28));
        assert_eq!(weeks[4][2], None);
    }

    #[test]
    fn test_month_grid_exact_fit() {
        // Feb 2021 starts on a Monday, 28 days: exactly 4 full rows
        let weeks = month_grid(2021, 2);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], NaiveDate::from_ymd_opt(2021, 2, 1));
        assert_eq!(weeks[3][6], NaiveDate::from_ymd_opt(2021, 2, 28));
    }

    #[test]
    fn test_month_grid_trailing_empty_slots() {
        // Dec 2023 starts on a Friday, 31 days
        let weeks = month_grid(2023, 12);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][4], NaiveDate::from_ymd_opt(2023, 12, 1));
        assert_eq!(weeks[4][6], NaiveDate::from_ymd_opt(2023, 12, 31));
    }

    #[test]
    fn test_month_arithmetic() {
        assert_eq!(next_month(2023, 12), (2024, 1));
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
    }
}
