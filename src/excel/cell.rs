use calamine::Data;
use chrono::{NaiveDate, TimeDelta};

// Serial number of 9999-12-31, the last date Excel can display
const MAX_EXCEL_DATE: f64 = 2_958_465.0;

/// Text shown for a decoded cell. Empty cells become `""`.
pub fn data_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if *f == (*f as i64) as f64 && f.abs() < 1e10 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => {
            let serial = serial_in_1900_system(dt.as_f64(), dt.is_1904());
            excel_date_to_iso_string(serial).unwrap_or_else(|| serial.to_string())
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

// Day 0 of the 1904 date system is serial 1462 in the 1900 system
const DAYS_1900_TO_1904: f64 = 1462.0;

/// Rebase a serial from a workbook using the 1904 date system (older Mac
/// files) onto the 1900 date system.
pub fn serial_in_1900_system(serial: f64, is_1904: bool) -> f64 {
    if is_1904 {
        serial + DAYS_1900_TO_1904
    } else {
        serial
    }
}

/// Convert an Excel serial date (1900 date system) to an ISO 8601 string.
///
/// Day 1 is 1900-01-01 and serials after 59 skip the phantom 1900-02-29.
/// Serials with a time part format as `YYYY-MM-DDTHH:MM:SS`.
pub fn excel_date_to_iso_string(excel_date: f64) -> Option<String> {
    if !(0.0..=MAX_EXCEL_DATE).contains(&excel_date) {
        return None;
    }

    let days = if excel_date > 59.0 {
        excel_date - 1.0
    } else {
        excel_date
    };

    let base_date = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    let whole_days = days.trunc() as i64;
    let fractional_day = days.fract();

    let date = base_date.checked_add_signed(TimeDelta::days(whole_days - 1))?;

    if fractional_day > 0.0 {
        let seconds = (fractional_day * 86_400.0).round() as i64;
        let datetime = date.and_hms_opt(0, 0, 0)? + TimeDelta::seconds(seconds);
        Some(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else {
        Some(date.format("%Y-%m-%d").to_string())
    }
}
