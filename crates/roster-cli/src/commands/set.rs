use anyhow::{Context, Result};
use chrono::Datelike;
use roster_calendar::{render_table, MonthGrid, MonthRef};
use roster_sync::{EntryCache, ScheduleEntry};

pub async fn run(date: &str, content: &str) -> Result<()> {
    let (day_names, client) = super::session()?;

    let day = super::parse_date(date)?;
    let entry = ScheduleEntry {
        date_key: day.format("%Y-%m-%d").to_string(),
        content: content.trim().to_string(),
        day_name: day_names.name(day.weekday()).to_string(),
    };
    let month =
        MonthRef::new(day.year(), day.month()).context("Date does not name a valid month")?;

    // Seed the cache with the current dataset so the re-render below
    // shows the rest of the month, not just the edited day.
    let mut cache = EntryCache::new();
    match client.fetch_all().await {
        Ok(entries) => cache.replace_all(entries),
        Err(e) => {
            tracing::warn!("Failed to load schedule before saving: {}", e);
            eprintln!("{}", e.user_message());
        }
    }

    match client.upsert(&entry).await {
        Ok(outcome) => {
            // Patch optimistically; the next render needs no fresh fetch
            cache.patch(&entry.date_key, &entry.content);
            println!(
                "Saved {} ({}): {}",
                entry.date_key,
                entry.day_name,
                outcome.action.as_deref().unwrap_or("saved")
            );
        }
        Err(e) => {
            // The edit stays on screen but the cache keeps the old value
            tracing::error!("Failed to save entry for {}: {}", entry.date_key, e);
            eprintln!("{}", e.user_message());
        }
    }

    let grid = MonthGrid::build(month, &day_names, cache.entries());
    println!("{}", render_table(&grid));

    Ok(())
}
