use chrono::NaiveDateTime;
use sql_middleware::middleware::{MiddlewarePoolConnection, RowValues};
use sql_middleware::{SqlMiddlewareDbError, sqlite_convert_params_for_execute};

use crate::model::database::{execute_query, row_i64, row_opt_f64, row_text};

#[derive(Clone, Debug)]
pub struct Golfer {
    pub golfer_id: i64,
    pub name: String,
    pub handicap_index: Option<f64>,
    pub handicap_index_updated: Option<NaiveDateTime>,
}

/// A staged write to one golfer's stored index. `handicap_index = None`
/// clears the column; an empty scoring record is a valid outcome.
#[derive(Clone, Debug)]
pub struct HandicapIndexUpdate {
    pub golfer_id: i64,
    pub handicap_index: Option<f64>,
    pub updated: NaiveDateTime,
}

pub async fn get_golfers(
    conn: &MiddlewarePoolConnection,
) -> Result<Vec<Golfer>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT golfer_id, name, handicap_index, handicap_index_updated
         FROM golfer
         ORDER BY golfer_id",
        vec![],
    )
    .await?;

    res.results
        .iter()
        .map(|row| {
            Ok(Golfer {
                golfer_id: row_i64(row, "golfer_id")?,
                name: row_text(row, "name")?,
                handicap_index: row_opt_f64(row, "handicap_index"),
                handicap_index_updated: row
                    .get("handicap_index_updated")
                    .and_then(|v| v.as_text())
                    .and_then(|v| {
                        NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S").ok()
                    }),
            })
        })
        .collect()
}

/// Applies every staged update inside one transaction with a single commit,
/// so an error mid-pass leaves all golfers untouched.
pub async fn apply_handicap_index_updates(
    conn: &MiddlewarePoolConnection,
    updates: Vec<HandicapIndexUpdate>,
) -> Result<(), SqlMiddlewareDbError> {
    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            sqlite_conn
                .interact(move |db_conn| {
                    let tx = db_conn.transaction()?;
                    for update in updates {
                        let updated = update.updated.format("%Y-%m-%d %H:%M:%S").to_string();
                        match update.handicap_index {
                            Some(index) => {
                                let converted = sqlite_convert_params_for_execute(vec![
                                    RowValues::Float(index),
                                    RowValues::Text(updated),
                                    RowValues::Int(update.golfer_id),
                                ])?;
                                tx.execute(
                                    "UPDATE golfer
                                     SET handicap_index = ?1, handicap_index_updated = ?2
                                     WHERE golfer_id = ?3",
                                    converted,
                                )?;
                            }
                            None => {
                                let converted = sqlite_convert_params_for_execute(vec![
                                    RowValues::Text(updated),
                                    RowValues::Int(update.golfer_id),
                                ])?;
                                tx.execute(
                                    "UPDATE golfer
                                     SET handicap_index = NULL, handicap_index_updated = ?1
                                     WHERE golfer_id = ?2",
                                    converted,
                                )?;
                            }
                        }
                    }
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await??;
            Ok(())
        }
        _ => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}
