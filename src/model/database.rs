use chrono::NaiveDate;
use sql_middleware::middleware::{
    ConversionMode, CustomDbRow, MiddlewarePoolConnection, ResultSet,
};
use sql_middleware::middleware::{QueryAndParams as QueryAndParams2, RowValues as RowValues2};
use sql_middleware::{SqlMiddlewareDbError, SqliteParamsQuery, convert_sql_params};

pub async fn execute_query(
    conn: &MiddlewarePoolConnection,
    query: &str,
    params: Vec<RowValues2>,
) -> Result<ResultSet, SqlMiddlewareDbError> {
    let query_and_params = QueryAndParams2 {
        query: query.to_string(),
        params,
    };

    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            let result = sqlite_conn
                .interact(move |db_conn| {
                    let converted_params = convert_sql_params::<SqliteParamsQuery>(
                        &query_and_params.params,
                        ConversionMode::Query,
                    )?;
                    let tx = db_conn.transaction()?;

                    let result_set = {
                        let mut stmt = tx.prepare(&query_and_params.query)?;

                        sql_middleware::sqlite_build_result_set(&mut stmt, &converted_params.0)?
                    };
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(result_set)
                })
                .await??;

            Ok(result)
        }
        _ => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}

/// Runs a single statement in its own transaction and commits it immediately.
pub async fn execute_write(
    conn: &MiddlewarePoolConnection,
    query: &str,
    params: Vec<RowValues2>,
) -> Result<usize, SqlMiddlewareDbError> {
    let query_and_params = QueryAndParams2 {
        query: query.to_string(),
        params,
    };

    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            let rows = sqlite_conn
                .interact(move |db_conn| {
                    let converted_params =
                        sql_middleware::sqlite_convert_params_for_execute(query_and_params.params)?;
                    let tx = db_conn.transaction()?;
                    let rows = tx.execute(&query_and_params.query, converted_params)?;
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(rows)
                })
                .await??;

            Ok(rows)
        }
        _ => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}

pub fn row_i64(row: &CustomDbRow, field: &str) -> Result<i64, SqlMiddlewareDbError> {
    row.get(field)
        .and_then(|v| v.as_int())
        .copied()
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("{field} not found")))
}

pub fn row_f64(row: &CustomDbRow, field: &str) -> Result<f64, SqlMiddlewareDbError> {
    row.get(field)
        .and_then(|v| v.as_float())
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("{field} not found")))
}

pub fn row_opt_f64(row: &CustomDbRow, field: &str) -> Option<f64> {
    row.get(field).and_then(|v| v.as_float())
}

pub fn row_text(row: &CustomDbRow, field: &str) -> Result<String, SqlMiddlewareDbError> {
    row.get(field)
        .and_then(|v| v.as_text())
        .map(|v| v.to_string())
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("{field} not found")))
}

pub fn row_date(row: &CustomDbRow, field: &str) -> Result<NaiveDate, SqlMiddlewareDbError> {
    let text = row_text(row, field)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .map_err(|e| SqlMiddlewareDbError::Other(format!("{field} is not a date: {e}")))
}

/// Inlines a round-id list into an `IN (...)` clause. The ids come straight
/// out of the database, so string interpolation is safe here.
pub fn id_list(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
