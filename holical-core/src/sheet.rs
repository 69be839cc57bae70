//! Month calendar spreadsheet.
//!
//! Layout of the single worksheet:
//!
//! ```text
//! | February 2024                        |   <- merged title row
//! | Mon | Tue | Wed | Thu | Fri | Sat | Sun |
//! |     |     |     |  1  |  2  |  3  |  4  |
//! |  5  | ... |     |     |     |     |     |
//! ...
//!
//! | Holidays                             |
//! | 2024-02-14 | Valentine's Day          |
//! ```
//!
//! Holiday days are filled light red.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::error::HolicalResult;
use crate::holidays::Holiday;
use crate::month::{MonthGrid, WEEKDAY_LABELS};

const TITLE_ROW: u32 = 0;
const WEEKDAY_ROW: u32 = 1;
const FIRST_WEEK_ROW: u32 = 2;
const DAY_COLUMN_WIDTH: f64 = 12.0;
const DAY_ROW_HEIGHT: f64 = 30.0;

/// `calendar_<year>_<month>.xlsx`, month not zero-padded.
pub fn file_name(year: i32, month: u32) -> String {
    format!("calendar_{year}_{month}.xlsx")
}

/// A day number placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub row: u32,
    pub col: u16,
    pub day: u32,
    pub is_holiday: bool,
}

struct Formats {
    title: Format,
    weekday: Format,
    day: Format,
    holiday: Format,
    list_header: Format,
    text: Format,
}

impl Formats {
    fn new() -> Self {
        let day = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        Formats {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center),
            weekday: Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
                .set_background_color(Color::RGB(0xD9E1F2)),
            holiday: day
                .clone()
                .set_bold()
                .set_font_color(Color::RGB(0x9C0006))
                .set_background_color(Color::RGB(0xFFC7CE)),
            day,
            list_header: Format::new().set_bold(),
            text: Format::new(),
        }
    }
}

pub struct CalendarSheet {
    grid: MonthGrid,
    holidays: Vec<Holiday>,
}

impl CalendarSheet {
    /// Holidays outside `year`/`month` are ignored.
    pub fn new(year: i32, month: u32, holidays: Vec<Holiday>) -> HolicalResult<Self> {
        let grid = MonthGrid::new(year, month)?;
        let holidays = holidays
            .into_iter()
            .filter(|h| h.year == year && h.month == month)
            .collect();

        Ok(CalendarSheet { grid, holidays })
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn file_name(&self) -> String {
        file_name(self.grid.year, self.grid.month)
    }

    pub fn day_cells(&self) -> Vec<DayCell> {
        let holiday_days: HashSet<u32> = self.holidays.iter().map(|h| h.day).collect();

        self.grid
            .weeks
            .iter()
            .enumerate()
            .flat_map(|(week_idx, week)| {
                let holiday_days = &holiday_days;
                week.iter().enumerate().filter_map(move |(col, day)| {
                    day.map(|day| DayCell {
                        row: FIRST_WEEK_ROW + week_idx as u32,
                        col: col as u16,
                        day,
                        is_holiday: holiday_days.contains(&day),
                    })
                })
            })
            .collect()
    }

    pub fn to_workbook(&self) -> HolicalResult<Workbook> {
        let mut workbook = Workbook::new();
        let formats = Formats::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name(self.grid.title())?;

        self.write_grid(sheet, &formats)?;
        self.write_holiday_list(sheet, &formats)?;

        Ok(workbook)
    }

    pub fn save_to_buffer(&self) -> HolicalResult<Vec<u8>> {
        Ok(self.to_workbook()?.save_to_buffer()?)
    }

    /// Write the workbook into `dir` and return the file path.
    pub fn save(&self, dir: &Path) -> HolicalResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());

        self.to_workbook()?.save(&path)?;
        tracing::debug!(path = %path.display(), "Saved calendar");

        Ok(path)
    }

    fn write_grid(&self, sheet: &mut Worksheet, formats: &Formats) -> HolicalResult<()> {
        sheet.merge_range(
            TITLE_ROW,
            0,
            TITLE_ROW,
            6,
            &self.grid.title(),
            &formats.title,
        )?;

        for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
            sheet.write_with_format(WEEKDAY_ROW, col as u16, *label, &formats.weekday)?;
            sheet.set_column_width(col as u16, DAY_COLUMN_WIDTH)?;
        }

        // Blank bordered cells first so days outside the month still form a grid
        for week_idx in 0..self.grid.weeks.len() as u32 {
            let row = FIRST_WEEK_ROW + week_idx;
            sheet.set_row_height(row, DAY_ROW_HEIGHT)?;
            for col in 0..7u16 {
                sheet.write_blank(row, col, &formats.day)?;
            }
        }

        for cell in self.day_cells() {
            let format = if cell.is_holiday {
                &formats.holiday
            } else {
                &formats.day
            };
            sheet.write_with_format(cell.row, cell.col, cell.day, format)?;
        }

        Ok(())
    }

    fn write_holiday_list(&self, sheet: &mut Worksheet, formats: &Formats) -> HolicalResult<()> {
        if self.holidays.is_empty() {
            return Ok(());
        }

        let mut row = FIRST_WEEK_ROW + self.grid.weeks.len() as u32 + 1;
        sheet.write_with_format(row, 0, "Holidays", &formats.list_header)?;

        for holiday in &self.holidays {
            row += 1;
            sheet.write_with_format(row, 0, holiday.date.as_str(), &formats.text)?;
            sheet.merge_range(row, 1, row, 6, holiday.description.as_str(), &formats.text)?;
        }

        Ok(())
    }
}
