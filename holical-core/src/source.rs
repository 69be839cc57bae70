//! Yearly holiday sources.

use serde::Deserialize;

use crate::config::HolicalConfig;
use crate::error::{HolicalError, HolicalResult};
use crate::http;

/// One record as returned by the public holiday API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHoliday {
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub local_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub global: Option<bool>,
}

impl RawHoliday {
    #[cfg(test)]
    pub(crate) fn new(date: impl Into<String>, local_name: impl Into<String>) -> Self {
        RawHoliday {
            date: date.into(),
            local_name: local_name.into(),
            name: None,
            country_code: None,
            global: None,
        }
    }
}

/// Something that can list every holiday of a country for one year.
#[allow(async_fn_in_trait)]
pub trait HolidaySource {
    async fn yearly(&self, country_code: &str, year: i32) -> HolicalResult<Vec<RawHoliday>>;
}

/// Nager.Date style API: `GET {base_url}/{year}/{country_code}`.
pub struct NagerSource {
    http: reqwest::Client,
    base_url: String,
}

impl NagerSource {
    pub fn new(base_url: impl Into<String>) -> HolicalResult<Self> {
        Ok(NagerSource {
            http: http::http_client()?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &HolicalConfig) -> HolicalResult<Self> {
        Self::new(config.base_url.clone())
    }

    pub fn endpoint(&self, country_code: &str, year: i32) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            year,
            country_code
        )
    }
}

impl HolidaySource for NagerSource {
    async fn yearly(&self, country_code: &str, year: i32) -> HolicalResult<Vec<RawHoliday>> {
        let endpoint = self.endpoint(country_code, year);
        let value = http::get_json(&self.http, &endpoint).await?;

        if value.is_null() {
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|e| {
            HolicalError::Parse(format!("Unexpected holiday data from {endpoint}: {e}"))
        })
    }
}
