//! Core library for holical.
//!
//! This crate provides everything behind the `holical` binary:
//! - `http` and `source` for fetching a country's holidays for a year
//! - `holidays` for narrowing them down to one month
//! - `month` and `sheet` for rendering the month as an xlsx calendar

pub mod config;
pub mod error;
pub mod holidays;
pub mod http;
pub mod month;
pub mod sheet;
pub mod source;

pub use config::HolicalConfig;
pub use error::{HolicalError, HolicalResult};
pub use holidays::{Holiday, holidays_in_month, month_from_yearly, select_month};
pub use sheet::CalendarSheet;
pub use source::{HolidaySource, NagerSource, RawHoliday};
