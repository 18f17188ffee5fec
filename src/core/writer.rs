use crate::domain::model::{WeatherRecord, CSV_HEADER};
use crate::utils::error::Result;
use std::io::Write;

/// Writes the header and one line per record, `\n`-terminated, quoting only when needed.
pub fn write_csv<W: Write>(out: W, records: &[WeatherRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(record.to_fields())?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_bytes(records: &[WeatherRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, direction: f64) -> WeatherRecord {
        WeatherRecord {
            date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            local_pressure: "1010.1".to_string(),
            sea_level_pressure: "1015.0".to_string(),
            precipitation: "--".to_string(),
            mean_temperature: "6.3".to_string(),
            max_temperature: "10.2".to_string(),
            min_temperature: "2.9".to_string(),
            humidity: "48".to_string(),
            mean_wind_speed: "2.8".to_string(),
            max_wind_speed: "6.1".to_string(),
            max_wind_direction: direction,
            sunshine_duration: "8.7".to_string(),
        }
    }

    #[test]
    fn test_header_only_for_no_records() {
        let bytes = to_csv_bytes(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "日時,現地気圧,海面気圧,降水量,平均気温,最高気温,最低気温,湿度,平均風速,最大風速,最大風向,日照時間\n"
        );
    }

    #[test]
    fn test_rows_follow_header() {
        let bytes = to_csv_bytes(&[record(1, 0.0), record(2, 22.5)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2020-01-01,1010.1,1015.0,--,6.3,10.2,2.9,48,2.8,6.1,0,8.7");
        assert_eq!(lines[2], "2020-01-02,1010.1,1015.0,--,6.3,10.2,2.9,48,2.8,6.1,22.5,8.7");
        assert!(text.ends_with("8.7\n"));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut r = record(3, 90.0);
        r.precipitation = "1,0".to_string();
        let text = String::from_utf8(to_csv_bytes(&[r]).unwrap()).unwrap();
        assert!(text.contains(",\"1,0\","));
    }
}
