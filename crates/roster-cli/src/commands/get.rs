use anyhow::Result;

pub async fn run(date: &str) -> Result<()> {
    let (_day_names, client) = super::session()?;

    let day = super::parse_date(date)?;
    let date_key = day.format("%Y-%m-%d").to_string();

    match client.fetch_all().await {
        Ok(entries) => {
            println!("{}", entries.get(&date_key).map(String::as_str).unwrap_or(""));
        }
        Err(e) => {
            tracing::error!("Failed to load schedule: {}", e);
            eprintln!("{}", e.user_message());
        }
    }

    Ok(())
}
