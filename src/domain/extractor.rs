//! Turns one month's observation table into [`WeatherRecord`]s.
//!
//! The table has two header rows, then one row per day. The site pads the end of
//! a month (or the not-yet-observed days of the current month) with rows that have
//! no day number, no readings or no wind direction; the first such row ends the page.

use crate::domain::direction::bearing_for;
use crate::domain::model::{PageKey, RawTable, RawTableRow, WeatherRecord};
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;

/// Group label rows at the top of `table.data2_s`.
pub const HEADER_ROWS: usize = 2;

/// Leading columns that may carry a " )" footnote mark.
pub const FOOTNOTE_COLUMNS: usize = 15;

/// Highest column index read from a data row is 16 (日照時間).
const MIN_DATA_CELLS: usize = 17;

const COL_DAY: usize = 0;
const COL_LOCAL_PRESSURE: usize = 1;
const COL_SEA_LEVEL_PRESSURE: usize = 2;
const COL_PRECIPITATION: usize = 3;
const COL_MEAN_TEMPERATURE: usize = 6;
const COL_MAX_TEMPERATURE: usize = 7;
const COL_MIN_TEMPERATURE: usize = 8;
const COL_HUMIDITY: usize = 9;
const COL_MEAN_WIND_SPEED: usize = 11;
const COL_MAX_WIND_SPEED: usize = 12;
const COL_MAX_WIND_DIRECTION: usize = 13;
const COL_SUNSHINE: usize = 16;

/// Why extraction of a page stopped. `row` is the index into `RawTable::rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEnd {
    /// Every row was consumed.
    TableExhausted,
    /// The day-of-month cell was empty.
    EmptyDay { row: usize },
    /// The local pressure cell was empty.
    MissingObservations { row: usize },
    /// The wind direction was not one of the sixteen compass labels.
    UnmappedDirection { row: usize, label: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageExtraction {
    pub records: Vec<WeatherRecord>,
    pub end: PageEnd,
}

enum RowOutcome {
    Record(WeatherRecord),
    End(PageEnd),
}

/// Drops a trailing footnote mark: when `text` ends with `)` the last two characters go.
pub fn strip_footnote(text: &str) -> &str {
    if !text.ends_with(')') {
        return text;
    }
    match text.char_indices().rev().nth(1) {
        Some((idx, _)) => &text[..idx],
        None => "",
    }
}

pub fn extract_page(key: PageKey, table: &RawTable) -> Result<PageExtraction> {
    let mut records = Vec::new();

    for (index, row) in table.rows.iter().enumerate().skip(HEADER_ROWS) {
        if row.is_empty() {
            continue;
        }
        match extract_row(key, index, row)? {
            RowOutcome::Record(record) => records.push(record),
            RowOutcome::End(end) => return Ok(PageExtraction { records, end }),
        }
    }

    Ok(PageExtraction {
        records,
        end: PageEnd::TableExhausted,
    })
}

fn extract_row(key: PageKey, index: usize, row: &RawTableRow) -> Result<RowOutcome> {
    if row.cell(COL_DAY).is_none() {
        return Ok(RowOutcome::End(PageEnd::EmptyDay { row: index }));
    }
    if row.len() < MIN_DATA_CELLS {
        return Err(EtlError::page_structure(
            key.year,
            key.month,
            format!(
                "row {} has {} cells, expected at least {}",
                index,
                row.len(),
                MIN_DATA_CELLS
            ),
        ));
    }
    if row.cell(COL_LOCAL_PRESSURE).is_none() {
        return Ok(RowOutcome::End(PageEnd::MissingObservations { row: index }));
    }

    let cells: Vec<Option<&str>> = row
        .cells
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            let text = cell.as_deref();
            if col < FOOTNOTE_COLUMNS {
                text.map(strip_footnote)
            } else {
                text
            }
        })
        .collect();
    let text = |col: usize| cells[col].unwrap_or_default().to_string();

    let date = record_date(key, index, cells[COL_DAY].unwrap_or_default())?;

    let label = cells[COL_MAX_WIND_DIRECTION];
    let Some(direction) = label.and_then(bearing_for) else {
        return Ok(RowOutcome::End(PageEnd::UnmappedDirection {
            row: index,
            label: label.map(str::to_string),
        }));
    };

    Ok(RowOutcome::Record(WeatherRecord {
        date,
        local_pressure: text(COL_LOCAL_PRESSURE),
        sea_level_pressure: text(COL_SEA_LEVEL_PRESSURE),
        precipitation: text(COL_PRECIPITATION),
        mean_temperature: text(COL_MEAN_TEMPERATURE),
        max_temperature: text(COL_MAX_TEMPERATURE),
        min_temperature: text(COL_MIN_TEMPERATURE),
        humidity: text(COL_HUMIDITY),
        mean_wind_speed: text(COL_MEAN_WIND_SPEED),
        max_wind_speed: text(COL_MAX_WIND_SPEED),
        max_wind_direction: direction,
        sunshine_duration: text(COL_SUNSHINE),
    }))
}

fn record_date(key: PageKey, index: usize, day_text: &str) -> Result<NaiveDate> {
    let day: u32 = day_text.trim().parse().map_err(|_| {
        EtlError::page_structure(
            key.year,
            key.month,
            format!("row {} has a non-numeric day '{}'", index, day_text),
        )
    })?;
    NaiveDate::from_ymd_opt(key.year, key.month, day).ok_or_else(|| {
        EtlError::page_structure(
            key.year,
            key.month,
            format!("row {} has day {} which is not in the month", index, day),
        )
    })
}
