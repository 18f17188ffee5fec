use crate::domain::model::{PageKey, RawTable, RawTableRow};
use crate::utils::error::{EtlError, Result};
use scraper::{ElementRef, Html, Selector};

/// Daily observation table on `daily_s1.php`.
pub const TABLE_SELECTOR: &str = "table.data2_s";

fn selector(key: PageKey, css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| EtlError::page_structure(key.year, key.month, format!("{}: {:?}", css, e)))
}

/// Text of a cell: all descendant text nodes joined, `None` when that is empty.
fn cell_text(cell: ElementRef<'_>) -> Option<String> {
    let text: String = cell.text().collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parses the first `table.data2_s` of a month page into rows of `<td>` texts.
/// Header rows built only from `<th>` come back with no cells.
pub fn parse_table(key: PageKey, html: &str) -> Result<RawTable> {
    let table_sel = selector(key, TABLE_SELECTOR)?;
    let row_sel = selector(key, "tr")?;
    let cell_sel = selector(key, "td")?;

    let document = Html::parse_document(html);
    let table = document.select(&table_sel).next().ok_or_else(|| {
        EtlError::page_structure(key.year, key.month, format!("{} not found", TABLE_SELECTOR))
    })?;

    let rows = table
        .select(&row_sel)
        .map(|tr| RawTableRow::new(tr.select(&cell_sel).map(cell_text).collect()))
        .collect();

    Ok(RawTable::new(rows))
}
