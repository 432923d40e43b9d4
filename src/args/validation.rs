use chrono::NaiveDate;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if any file in the semicolon-separated list is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a YYYY-MM-DD date
pub fn check_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("'{value}' is not a valid YYYY-MM-DD date: {e}"))
}
