use anyhow::Result;
use holical_core::HolicalConfig;
use holical_core::month::month_name;
use owo_colors::OwoColorize;

use super::Target;

pub async fn run(config: &HolicalConfig, target: Target, json: bool) -> Result<()> {
    let holidays = super::fetch_holidays(config, &target).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
        return Ok(());
    }

    let title = format!(
        "{} {} ({})",
        month_name(target.month).unwrap_or("?"),
        target.year,
        target.country_code
    );
    println!("{}", title.bold());

    if holidays.is_empty() {
        println!("  {}", "No holidays".dimmed());
        return Ok(());
    }

    for holiday in &holidays {
        println!("  {} {}", holiday.date.red(), holiday.description);
    }

    Ok(())
}
