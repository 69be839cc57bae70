//! Month holiday filtering.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{HolicalError, HolicalResult};
use crate::source::{HolidaySource, RawHoliday};

/// A holiday reshaped into explicit date parts for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub description: String,
}

impl Holiday {
    pub fn from_raw(raw: &RawHoliday) -> HolicalResult<Self> {
        let parsed = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").map_err(|_| {
            HolicalError::InvalidDate(format!(
                "'{}' for '{}'. Expected YYYY-MM-DD",
                raw.date, raw.local_name
            ))
        })?;

        Ok(Holiday {
            date: raw.date.clone(),
            year: parsed.year(),
            month: parsed.month(),
            day: parsed.day(),
            description: raw.local_name.clone(),
        })
    }
}

/// Normalize `records` and keep those falling in `month`, in source order.
///
/// Records with unparseable dates are skipped.
pub fn select_month(records: &[RawHoliday], month: u32) -> Vec<Holiday> {
    records
        .iter()
        .filter_map(|raw| match Holiday::from_raw(raw) {
            Ok(holiday) => Some(holiday),
            Err(e) => {
                tracing::warn!("Skipping holiday record: {e}");
                None
            }
        })
        .filter(|holiday| holiday.month == month)
        .collect()
}

/// Holidays of `country_code` in `month` of `year`.
///
/// Never fails: a source error is logged and yields no holidays, so the
/// calendar can still be rendered.
pub async fn holidays_in_month<S: HolidaySource>(
    source: &S,
    country_code: &str,
    year: i32,
    month: u32,
) -> Vec<Holiday> {
    let yearly = source.yearly(country_code, year).await;
    month_from_yearly(yearly, country_code, year, month)
}

/// The non-async half of [`holidays_in_month`]: turns the outcome of a
/// yearly fetch into the month's holidays, logging instead of failing.
pub fn month_from_yearly(
    yearly: HolicalResult<Vec<RawHoliday>>,
    country_code: &str,
    year: i32,
    month: u32,
) -> Vec<Holiday> {
    let records = match yearly {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(country_code, year, "Could not fetch holidays: {e}");
            return Vec::new();
        }
    };

    if records.is_empty() {
        tracing::info!(country_code, year, "No holidays returned");
        return Vec::new();
    }

    select_month(&records, month)
}
