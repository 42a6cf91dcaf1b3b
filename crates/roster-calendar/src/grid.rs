//! Month grid construction.

use std::collections::HashMap;

use chrono::Datelike;
use serde::Serialize;

use crate::month::{DayNames, MonthRef};

/// One rendered calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    /// Day of month, 1-based.
    pub day: u32,
    /// Canonical YYYY-MM-DD key for this day's entry.
    pub date_key: String,
    /// Day-of-week name from the configured table.
    pub day_name: String,
    /// True for Saturday and Sunday.
    pub weekend: bool,
    /// Stored content for this day, empty if none.
    pub content: String,
}

/// A full month of day rows, in ascending day order.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub month: MonthRef,
    pub rows: Vec<DayRow>,
}

impl MonthGrid {
    /// Build the grid for a month, merging in fetched content per day.
    ///
    /// Days with no entry get an empty content string, so the grid always
    /// renders completely even when the fetch produced nothing.
    pub fn build(month: MonthRef, names: &DayNames, entries: &HashMap<String, String>) -> Self {
        let rows = (1..=month.days_in_month())
            .filter_map(|day| month.day(day))
            .map(|date| {
                let weekday = date.weekday();
                let dow = weekday.num_days_from_sunday();
                let date_key = date.format("%Y-%m-%d").to_string();
                DayRow {
                    day: date.day(),
                    day_name: names.name(weekday).to_string(),
                    weekend: dow == 0 || dow == 6,
                    content: entries.get(&date_key).cloned().unwrap_or_default(),
                    date_key,
                }
            })
            .collect();

        Self { month, rows }
    }

    /// Row for a specific day of the month, if present.
    pub fn row(&self, day: u32) -> Option<&DayRow> {
        self.rows.iter().find(|r| r.day == day)
    }
}
