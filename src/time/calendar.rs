//! Julian Day Number of a proleptic Gregorian date
//!
//! The integer building block behind [`super::to_julian_day`].

/// Convert (year, month, day) to the Julian Day Number
///
/// The integer day number names the Julian day that begins at noon UTC on the
/// given civil date. Every division floors, so the formula holds for any year
/// chrono can represent, including years before -4800.
pub fn compute_julian_day(year: i32, month: u32, day: u32) -> i32 {
    let month = month as i32;
    let day = day as i32;
    // January and February count as months 13 and 14 of the previous year
    let shift = if month < 3 { 1 } else { 0 };

    (1461 * (year + 4800 - shift)).div_euclid(4)
        + (367 * (month - 2 + 12 * shift)).div_euclid(12)
        - (3 * (year + 4900 - shift).div_euclid(100)).div_euclid(4)
        - 32075
        + day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use rstest::rstest;

    #[rstest]
    #[case(2000, 1, 1, 2_451_545)]
    #[case(2020, 1, 1, 2_458_850)]
    #[case(1969, 7, 20, 2_440_423)]
    #[case(1900, 1, 1, 2_415_021)]
    #[case(2024, 2, 29, 2_460_370)]
    #[case(-4713, 11, 24, 0)]
    #[case(-4801, 1, 1, -32_469)]
    #[case(-9000, 3, 1, -1_566_063)]
    fn test_known_day_numbers(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: i32,
    ) {
        assert_eq!(compute_julian_day(year, month, day), expected);
    }

    #[test]
    fn test_consecutive_dates_across_all_eras() {
        // Every civil day, including leap days and century years before
        // year 0, must advance the day number by exactly one.
        for start_year in [-262_000, -6_000, -4_801, -101, 1_582, 262_000] {
            let mut date = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap();
            let mut previous = compute_julian_day(date.year(), date.month(), date.day());
            for _ in 0..(3 * 366 + 400) {
                date = date.succ_opt().unwrap();
                let current = compute_julian_day(date.year(), date.month(), date.day());
                assert_eq!(current, previous + 1, "at {}", date);
                previous = current;
            }
        }
    }

    #[test]
    fn test_matches_chrono_day_count() {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for year in (-262_000..=262_000).step_by(9_973) {
            for (month, day) in [(1, 1), (2, 28), (3, 1), (12, 31)] {
                let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
                let expected = 2_451_545 + (date - epoch).num_days();
                assert_eq!(compute_julian_day(year, month, day) as i64, expected, "at {}", date);
            }
        }
    }
}
