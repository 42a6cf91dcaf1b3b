pub mod get;
pub mod set;
pub mod show;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use roster_calendar::DayNames;
use roster_core::{Config, ConfigError};
use roster_sync::SheetClient;

/// Load validated configuration and build what every command needs.
pub(crate) fn session() -> Result<(DayNames, SheetClient)> {
    let (config, _validation) = Config::load_validated()?;

    let day_names = DayNames::from_table(config.calendar.day_names.clone()).ok_or_else(|| {
        ConfigError::Invalid("calendar.day_names must have exactly 7 entries".to_string())
    })?;
    let client =
        SheetClient::with_config(&config.endpoint.url, config.endpoint.allow_invalid_certs)?;

    Ok((day_names, client))
}

/// Parse a YYYY-MM-DD argument into a calendar day.
pub(crate) fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))
}
