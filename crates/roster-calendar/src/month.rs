//! Calendar month references and day-name tables.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::Serialize;

/// A reference to one calendar month.
///
/// Months are one-based (1 = January); invalid year/month pairs are
/// rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing today, in the local timezone.
    ///
    /// Date keys are local-calendar dates by design; no timezone
    /// normalization happens anywhere in the system.
    pub fn current_local() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parse a `YYYY-MM` string.
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, rolling over the year boundary.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling over the year boundary.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of days in this month (28-31, leap years included).
    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        // Day before the first of the following month; both dates are
        // valid by construction.
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// A specific day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Human-readable month title, e.g. "March 2024".
    pub fn title(&self) -> String {
        match self.day(1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for MonthRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Fixed 7-element day-of-week name table, Sunday first.
///
/// The table is localization data: the default is English, and a
/// translated table can be supplied from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNames {
    names: [String; 7],
}

impl DayNames {
    /// Build a table from exactly 7 names, Sunday first.
    pub fn from_table(names: Vec<String>) -> Option<Self> {
        let names: [String; 7] = names.try_into().ok()?;
        Some(Self { names })
    }

    /// Name for the given weekday.
    pub fn name(&self, weekday: Weekday) -> &str {
        &self.names[weekday.num_days_from_sunday() as usize]
    }
}

impl Default for DayNames {
    fn default() -> Self {
        Self {
            names: [
                "Sunday".to_string(),
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Thursday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
            ],
        }
    }
}
