use chrono::{Datelike, NaiveDate};

// Sunday=0 indexing from the legacy rate sheet: days 0, 5 and 6
// (Sunday, Friday, Saturday) carry the surcharge.
const PEAK_DAYS: [u32; 3] = [0, 5, 6];

pub fn is_peak_time(date: NaiveDate) -> bool {
    PEAK_DAYS.contains(&date.weekday().num_days_from_sunday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_week_classification() {
        // 2025-06-02 is a Monday.
        let expected = [false, false, false, false, true, true, true];

        for (offset, peak) in expected.iter().enumerate() {
            let day = date(2025, 6, 2 + offset as u32);
            assert_eq!(is_peak_time(day), *peak, "day {}", day);
        }
    }

    #[test]
    fn weekday_convention_is_sunday_zero() {
        // A Sunday must classify as peak under the legacy indexing.
        assert!(is_peak_time(date(2025, 6, 1)));
        // The following Thursday must not.
        assert!(!is_peak_time(date(2025, 6, 5)));
    }
}
