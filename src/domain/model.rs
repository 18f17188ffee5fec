use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

/// Column names written as the first line of the CSV output.
pub const CSV_HEADER: [&str; 12] = [
    "日時",
    "現地気圧",
    "海面気圧",
    "降水量",
    "平均気温",
    "最高気温",
    "最低気温",
    "湿度",
    "平均風速",
    "最大風速",
    "最大風向",
    "日照時間",
];

/// Inclusive start / exclusive end of the months to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

}

/// One month after `date`, clamped to the last day of a short month.
///
/// Stepping again from a clamped date keeps the clamped day, so 01-31 goes to 02-29
/// and then to 03-29.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(1))
}

/// One month page on the observation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageKey {
    pub year: i32,
    pub month: u32,
}

impl PageKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl From<NaiveDate> for PageKey {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// A `<tr>` as cell texts; `None` is a cell without any text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTableRow {
    pub cells: Vec<Option<String>>,
}

impl RawTableRow {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = texts
            .into_iter()
            .map(|t| {
                let t = t.into();
                if t.is_empty() {
                    None
                } else {
                    Some(t)
                }
            })
            .collect();
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// All rows of the daily observation table from one page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<RawTableRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawTableRow>) -> Self {
        Self { rows }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub local_pressure: String,
    pub sea_level_pressure: String,
    pub precipitation: String,
    pub mean_temperature: String,
    pub max_temperature: String,
    pub min_temperature: String,
    pub humidity: String,
    pub mean_wind_speed: String,
    pub max_wind_speed: String,
    pub max_wind_direction: f64,
    pub sunshine_duration: String,
}

impl WeatherRecord {
    /// Fields in `CSV_HEADER` order.
    pub fn to_fields(&self) -> [String; 12] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.local_pressure.clone(),
            self.sea_level_pressure.clone(),
            self.precipitation.clone(),
            self.mean_temperature.clone(),
            self.max_temperature.clone(),
            self.min_temperature.clone(),
            self.humidity.clone(),
            self.mean_wind_speed.clone(),
            self.max_wind_speed.clone(),
            self.max_wind_direction.to_string(),
            self.sunshine_duration.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<WeatherRecord>,
    pub csv_output: Vec<u8>,
}
