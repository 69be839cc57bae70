//! Month layout helpers.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{HolicalError, HolicalResult};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One calendar week, Monday first. `None` for days outside the month.
pub type Week = [Option<u32>; 7];

/// The weeks of a month as rendered on a wall calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> HolicalResult<Self> {
        let first = first_of_month(year, month)?;
        let days = days_in_month(first)?;

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        let mut col = first.weekday().num_days_from_monday() as usize;

        for day in 1..=days {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }

        Ok(MonthGrid { year, month, weeks })
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month).unwrap_or("?"), self.year)
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

fn first_of_month(year: i32, month: u32) -> HolicalResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| HolicalError::InvalidDate(format!("{year}-{month:02} is not a valid month")))
}

fn days_in_month(first: NaiveDate) -> HolicalResult<u32> {
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| HolicalError::InvalidDate(format!("{first} is out of range")))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_february() {
        let grid = MonthGrid::new(2024, 2).unwrap();

        assert_eq!(grid.weeks.len(), 5);
        // 1 Feb 2024 is a Thursday
        assert_eq!(
            grid.weeks[0],
            [None, None, None, Some(1), Some(2), Some(3), Some(4)]
        );
        assert_eq!(
            grid.weeks[4],
            [Some(26), Some(27), Some(28), Some(29), None, None, None]
        );
    }

    #[test]
    fn test_month_starting_monday() {
        // 1 Jan 2024 is a Monday
        let grid = MonthGrid::new(2024, 1).unwrap();

        assert_eq!(grid.weeks[0][0], Some(1));
        assert_eq!(grid.weeks.last().unwrap()[2], Some(31));
    }

    #[test]
    fn test_february_fitting_four_weeks() {
        // Feb 2021: Monday 1st through Sunday 28th
        let grid = MonthGrid::new(2021, 2).unwrap();

        assert_eq!(grid.weeks.len(), 4);
        assert_eq!(grid.weeks[3][6], Some(28));
    }

    #[test]
    fn test_six_week_month() {
        // Sep 2024 starts on a Sunday
        let grid = MonthGrid::new(2024, 9).unwrap();

        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.weeks[0][6], Some(1));
        assert_eq!(grid.weeks[5][0], Some(30));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let grid = MonthGrid::new(2023, 12).unwrap();
        let days: Vec<u32> = grid.weeks.iter().flatten().flatten().copied().collect();

        assert_eq!(days.len(), 31);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            MonthGrid::new(2024, 0),
            Err(HolicalError::InvalidDate(_))
        ));
        assert!(matches!(
            MonthGrid::new(2024, 13),
            Err(HolicalError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_title_and_names() {
        assert_eq!(MonthGrid::new(2024, 2).unwrap().title(), "February 2024");
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
    }
}
