use std::path::Path;

use anyhow::Result;
use holical_core::{CalendarSheet, HolicalConfig};
use owo_colors::OwoColorize;

use super::Target;

pub async fn run(config: &HolicalConfig, target: Target, output_dir: &Path) -> Result<()> {
    let holidays = super::fetch_holidays(config, &target).await?;
    let sheet = CalendarSheet::new(target.year, target.month, holidays)?;

    let path = sheet.save(output_dir)?;

    let count = sheet.holidays().len();
    println!("{} {}", "Saved".green(), path.display().bold());
    println!(
        "  {} {} in {}",
        count,
        if count == 1 { "holiday" } else { "holidays" },
        target.country_code
    );

    Ok(())
}
