//! Calendar domain logic for the shift planner.
//!
//! Produces the ordered day descriptors the schedule grid is rendered
//! against, plus month arithmetic for navigation. Months are 0-indexed
//! (0 = January) throughout, matching the schedule document format.

use chrono::{Datelike, NaiveDate};
use shared::DayInfo;

/// Fixed weekday label table, Sunday first (index 0) through Saturday.
pub const WEEKDAY_LABELS: [&str; 7] = ["DIM.", "LUN.", "MAR.", "MER.", "JEU.", "VEN.", "SAM."];

/// Display names for months 0..11.
pub const MONTH_NAMES: [&str; 12] = [
    "JANVIER",
    "FEVRIER",
    "MARS",
    "AVRIL",
    "MAI",
    "JUIN",
    "JUILLET",
    "AOUT",
    "SEPTEMBRE",
    "OCTOBRE",
    "NOVEMBRE",
    "DECEMBRE",
];

/// Calendar service that handles all calendar-related business logic
#[derive(Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// One descriptor per calendar day of the given month, in ascending date
    /// order. Weekday labels come from the fixed table; weekends are Sunday
    /// and Saturday. Pure and deterministic.
    pub fn days_in_month(&self, year: i32, month: u32) -> Vec<DayInfo> {
        let count = self.day_count(year, month);
        let first_weekday = self.first_weekday_of_month(year, month);

        (1..=count)
            .map(|date| {
                let weekday = (first_weekday + date - 1) % 7;
                DayInfo {
                    date,
                    day_name: WEEKDAY_LABELS[weekday as usize].to_string(),
                    is_weekend: weekday == 0 || weekday == 6,
                }
            })
            .collect()
    }

    /// Number of days in the given month (0-indexed).
    pub fn day_count(&self, year: i32, month: u32) -> u32 {
        match month {
            1 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the first day of the month (0 = Sunday .. 6 = Saturday).
    pub fn first_weekday_of_month(&self, year: i32, month: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month + 1, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            // Invalid date, fallback to Sunday
            0
        }
    }

    /// Display name for a month (0-indexed).
    pub fn month_name(&self, month: u32) -> &'static str {
        MONTH_NAMES.get(month as usize).copied().unwrap_or("?")
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, month: u32, year: i32) -> (u32, i32) {
        if month == 0 {
            (11, year - 1)
        } else {
            (month - 1, year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, month: u32, year: i32) -> (u32, i32) {
        if month == 11 {
            (0, year + 1)
        } else {
            (month + 1, year)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_count() {
        let service = CalendarService::new();

        assert_eq!(service.day_count(2025, 0), 31); // January
        assert_eq!(service.day_count(2025, 3), 30); // April
        assert_eq!(service.day_count(2025, 1), 28); // February (non-leap)
        assert_eq!(service.day_count(2024, 1), 29); // February (leap year)
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900)); // divisible by 100 but not 400
        assert!(service.is_leap_year(2000)); // divisible by 400
    }

    #[test]
    fn test_days_in_month_labels_and_weekends() {
        let service = CalendarService::new();

        // January 2024 starts on a Monday
        let days = service.days_in_month(2024, 0);
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].date, 1);
        assert_eq!(days[0].day_name, "LUN.");
        assert!(!days[0].is_weekend);

        // January 6th 2024 is a Saturday, the 7th a Sunday
        assert_eq!(days[5].day_name, "SAM.");
        assert!(days[5].is_weekend);
        assert_eq!(days[6].day_name, "DIM.");
        assert!(days[6].is_weekend);
        assert!(!days[7].is_weekend);
    }

    #[test]
    fn test_days_are_in_ascending_order() {
        let service = CalendarService::new();
        let days = service.days_in_month(2024, 1);
        let dates: Vec<u32> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, (1..=29).collect::<Vec<u32>>());
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(0), "JANVIER");
        assert_eq!(service.month_name(5), "JUIN");
        assert_eq!(service.month_name(11), "DECEMBRE");
        assert_eq!(service.month_name(12), "?");
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(5, 2025), (4, 2025));
        assert_eq!(service.previous_month(0, 2025), (11, 2024));

        assert_eq!(service.next_month(5, 2025), (6, 2025));
        assert_eq!(service.next_month(11, 2025), (0, 2026));
    }
}
