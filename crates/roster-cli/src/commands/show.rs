use anyhow::{Context, Result};
use roster_calendar::{render_table, MonthGrid, MonthRef};
use roster_sync::EntryCache;

pub async fn run(month: Option<&str>, prev: bool, next: bool) -> Result<()> {
    let (day_names, client) = super::session()?;

    let mut target = match month {
        Some(s) => MonthRef::parse(s)
            .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?,
        None => MonthRef::current_local(),
    };
    if prev {
        target = target.prev();
    }
    if next {
        target = target.next();
    }

    let mut cache = EntryCache::new();
    match client.fetch_all().await {
        Ok(entries) => cache.replace_all(entries),
        Err(e) => {
            // Content unavailable is not fatal; the grid still renders empty
            tracing::error!("Failed to load schedule: {}", e);
            eprintln!("{}", e.user_message());
        }
    }

    let grid = MonthGrid::build(target, &day_names, cache.entries());
    println!("{}", render_table(&grid));

    Ok(())
}
