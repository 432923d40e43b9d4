use sql_middleware::SqlMiddlewareDbError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(String),
    Parse(String),
    NotFound(String),
    /// No matchup matrix exists for this season shape.
    NoScheduleTemplate { weeks: i64, team_count: usize },
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Parse(e) => write!(f, "Parse error: {e}"),
            AppError::NotFound(what) => write!(f, "Not found: {what}"),
            AppError::NoScheduleTemplate { weeks, team_count } => write!(
                f,
                "No schedule template for {weeks} week(s) and {team_count} team(s)"
            ),
            AppError::Other(e) => write!(f, "Error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SqlMiddlewareDbError> for AppError {
    fn from(e: SqlMiddlewareDbError) -> Self {
        AppError::Db(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(e: chrono::ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        AppError::Other(e)
    }
}

impl From<&str> for AppError {
    fn from(e: &str) -> Self {
        AppError::Other(e.to_string())
    }
}
