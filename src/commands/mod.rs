pub mod config;
pub mod list;
pub mod render;

use holical_core::{HolicalConfig, Holiday, HolidaySource, NagerSource, month_from_yearly};

/// The month and country a command operates on.
pub struct Target {
    pub year: i32,
    pub month: u32,
    pub country_code: String,
}

/// Fetch the target month's holidays. Fetch failures are logged and come
/// back as an empty list.
pub async fn fetch_holidays(
    config: &HolicalConfig,
    target: &Target,
) -> anyhow::Result<Vec<Holiday>> {
    let source = NagerSource::from_config(config)?;
    tracing::debug!(
        endpoint = %source.endpoint(&target.country_code, target.year),
        month = target.month,
        "Fetching holidays"
    );

    let spinner = crate::utils::tui::create_spinner(format!(
        "Fetching {} holidays for {}...",
        target.country_code, target.year
    ));
    let yearly = source.yearly(&target.country_code, target.year).await;
    // Clear the spinner before anything below logs to stderr
    spinner.finish_and_clear();

    let holidays = month_from_yearly(yearly, &target.country_code, target.year, target.month);

    Ok(holidays)
}
