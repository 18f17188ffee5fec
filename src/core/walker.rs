use crate::domain::extractor::{extract_page, PageEnd};
use crate::domain::model::{next_month, DateRange, PageKey, WeatherRecord};
use crate::domain::ports::PageFetcher;
use crate::utils::error::{EtlError, Result};

/// Months to fetch for `range`, oldest first.
///
/// The start month is always included. The walk then steps one month at a time from
/// the previous date and stops at the first date on or after `range.end`.
pub fn month_keys(range: &DateRange) -> Result<Vec<PageKey>> {
    let mut keys = Vec::new();
    let mut current = range.start;

    loop {
        keys.push(PageKey::from(current));

        current = next_month(current).ok_or_else(|| EtlError::ProcessingError {
            message: format!("one month after {} is out of range", current),
        })?;
        if current >= range.end {
            break;
        }
    }

    Ok(keys)
}

/// Fetches every month of `range` in order and collects the extracted records.
/// The first fetch or page error aborts the walk.
pub async fn walk_months<F>(fetcher: &F, range: &DateRange) -> Result<Vec<WeatherRecord>>
where
    F: PageFetcher + ?Sized,
{
    let keys = month_keys(range)?;
    tracing::info!(
        "Walking {} month(s) from {} to {}",
        keys.len(),
        range.start,
        range.end
    );

    let mut records = Vec::new();
    for key in keys {
        let table = fetcher.fetch_page(key).await?;
        let page = extract_page(key, &table)?;

        match &page.end {
            PageEnd::TableExhausted => {}
            PageEnd::EmptyDay { row } => {
                tracing::debug!("{}: page ended at row {} (no day number)", key, row)
            }
            PageEnd::MissingObservations { row } => {
                tracing::debug!("{}: page ended at row {} (no readings)", key, row)
            }
            PageEnd::UnmappedDirection { row, label } => tracing::debug!(
                "{}: page ended at row {} (wind direction {:?})",
                key,
                row,
                label
            ),
        }
        tracing::info!("{}: extracted {} record(s)", key, page.records.len());

        records.extend(page.records);
    }

    Ok(records)
}
