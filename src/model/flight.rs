use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{MiddlewarePoolConnection, RowValues};

use crate::model::database::{execute_query, execute_write, row_i64};

#[derive(Clone, Copy, Debug)]
pub struct Flight {
    pub flight_id: i64,
    pub year: i64,
    pub weeks: i64,
    pub course_id: i64,
}

pub async fn get_flight(
    conn: &MiddlewarePoolConnection,
    flight_id: i64,
) -> Result<Option<Flight>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT flight_id, year, weeks, course_id FROM flight WHERE flight_id = ?1",
        vec![RowValues::Int(flight_id)],
    )
    .await?;

    res.results
        .iter()
        .map(|row| {
            Ok(Flight {
                flight_id: row_i64(row, "flight_id")?,
                year: row_i64(row, "year")?,
                weeks: row_i64(row, "weeks")?,
                course_id: row_i64(row, "course_id")?,
            })
        })
        .next()
        .transpose()
}

/// Team ids for a flight in link-table order; slot positions in the matchup
/// matrices index into this list.
pub async fn get_flight_team_ids(
    conn: &MiddlewarePoolConnection,
    flight_id: i64,
) -> Result<Vec<i64>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT team_id FROM flight_team WHERE flight_id = ?1 ORDER BY seq, flight_team_id",
        vec![RowValues::Int(flight_id)],
    )
    .await?;

    res.results.iter().map(|row| row_i64(row, "team_id")).collect()
}

/// Uniqueness is checked under the unordered team pair: (A,B) in a week is
/// the same match as (B,A).
pub async fn match_exists(
    conn: &MiddlewarePoolConnection,
    flight_id: i64,
    week: i64,
    team_a: i64,
    team_b: i64,
) -> Result<bool, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT COUNT(*) AS cnt
         FROM flight_match
         WHERE flight_id = ?1
           AND week = ?2
           AND ((home_team_id = ?3 AND away_team_id = ?4)
             OR (home_team_id = ?4 AND away_team_id = ?3))",
        vec![
            RowValues::Int(flight_id),
            RowValues::Int(week),
            RowValues::Int(team_a),
            RowValues::Int(team_b),
        ],
    )
    .await?;

    let count = res
        .results
        .first()
        .map(|row| row_i64(row, "cnt"))
        .transpose()?
        .unwrap_or(0);
    Ok(count > 0)
}

pub async fn insert_match(
    conn: &MiddlewarePoolConnection,
    flight_id: i64,
    week: i64,
    home_team_id: i64,
    away_team_id: i64,
) -> Result<(), SqlMiddlewareDbError> {
    execute_write(
        conn,
        "INSERT INTO flight_match (flight_id, week, home_team_id, away_team_id)
         VALUES (?1, ?2, ?3, ?4)",
        vec![
            RowValues::Int(flight_id),
            RowValues::Int(week),
            RowValues::Int(home_team_id),
            RowValues::Int(away_team_id),
        ],
    )
    .await?;
    Ok(())
}
