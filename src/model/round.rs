use chrono::{NaiveDate, NaiveDateTime};
use sql_middleware::middleware::{MiddlewarePoolConnection, RowValues};
use sql_middleware::{SqlMiddlewareDbError, sqlite_convert_params_for_execute};
use std::collections::HashMap;

use crate::model::database::{
    execute_query, id_list, row_date, row_f64, row_i64, row_text,
};
use crate::model::types::{RoundSummary, RoundType, ScoringType};

fn date_param(date: NaiveDate) -> RowValues {
    RowValues::Text(date.format("%Y-%m-%d").to_string())
}

/// Round ids eligible for a scoring record: individually-scored rounds for
/// the golfer inside the date window, most recent first, capped at `limit`.
pub async fn get_scoring_round_ids(
    conn: &MiddlewarePoolConnection,
    golfer_id: i64,
    min_date: NaiveDate,
    max_date: NaiveDate,
    limit: usize,
) -> Result<Vec<i64>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT r.round_id
         FROM round r
         JOIN round_golfer rg ON rg.round_id = r.round_id
         WHERE rg.golfer_id = ?1
           AND r.scoring_type = ?2
           AND r.date_played >= ?3
           AND r.date_played <= ?4
         ORDER BY r.date_played DESC, r.round_id DESC
         LIMIT ?5",
        vec![
            RowValues::Int(golfer_id),
            RowValues::Text(ScoringType::Individual.to_string()),
            date_param(min_date),
            date_param(max_date),
            RowValues::Int(limit as i64),
        ],
    )
    .await?;

    res.results.iter().map(|row| row_i64(row, "round_id")).collect()
}

/// Joined round/golfer/course/track/tee shells for the given rounds, most
/// recent first. Score totals and the differential are filled in later from
/// the hole results.
pub async fn get_round_summaries(
    conn: &MiddlewarePoolConnection,
    golfer_id: i64,
    round_ids: &[i64],
) -> Result<Vec<RoundSummary>, SqlMiddlewareDbError> {
    if round_ids.is_empty() {
        return Ok(Vec::new());
    }

    let query = format!(
        "SELECT r.round_id, r.date_played, r.round_type,
                rg.golfer_id, rg.playing_handicap, g.name AS golfer_name,
                c.name AS course_name, t.name AS track_name,
                te.color AS tee_color, te.gender AS tee_gender,
                te.par AS tee_par, te.rating, te.slope
         FROM round r
         JOIN round_golfer rg ON rg.round_id = r.round_id AND rg.golfer_id = ?1
         JOIN golfer g ON g.golfer_id = rg.golfer_id
         JOIN tee te ON te.tee_id = r.tee_id
         JOIN track t ON t.track_id = te.track_id
         JOIN course c ON c.course_id = t.course_id
         WHERE r.round_id IN ({})
         ORDER BY r.date_played DESC, r.round_id DESC",
        id_list(round_ids)
    );
    let res = execute_query(conn, &query, vec![RowValues::Int(golfer_id)]).await?;

    res.results
        .iter()
        .map(|row| {
            let round_type: RoundType = row_text(row, "round_type")?
                .parse()
                .map_err(SqlMiddlewareDbError::Other)?;
            Ok(RoundSummary {
                round_id: Some(row_i64(row, "round_id")?),
                qualifying_score_id: None,
                golfer_id: row_i64(row, "golfer_id")?,
                golfer_name: row_text(row, "golfer_name")?,
                date_played: row_date(row, "date_played")?,
                round_type,
                playing_handicap: row_i64(row, "playing_handicap")?,
                course_name: row_text(row, "course_name")?,
                track_name: row_text(row, "track_name")?,
                tee_color: row_text(row, "tee_color")?,
                tee_gender: row_text(row, "tee_gender")?,
                tee_par: row_i64(row, "tee_par")?,
                rating: row_f64(row, "rating")?,
                slope: row_i64(row, "slope")?,
                gross_score: 0,
                adjusted_gross_score: 0,
                net_score: 0,
                score_differential: 0.0,
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct HoleResultTotals {
    pub hole_count: i64,
    /// How many holes the round's tee actually has; a `hole_count` short of
    /// this means the round was only partially recorded.
    pub tee_hole_count: i64,
    pub par_total: i64,
    pub gross_score: i64,
    pub adjusted_gross_score: i64,
    pub net_score: i64,
}

/// Batched per-round totals over the hole results of all selected rounds,
/// alongside the hole count the round's tee expects.
pub async fn get_hole_result_totals(
    conn: &MiddlewarePoolConnection,
    round_ids: &[i64],
) -> Result<HashMap<i64, HoleResultTotals>, SqlMiddlewareDbError> {
    if round_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "SELECT hr.round_id,
                COUNT(*) AS hole_count,
                (SELECT COUNT(*) FROM hole h2 WHERE h2.tee_id = r.tee_id) AS tee_hole_count,
                SUM(h.par) AS par_total,
                SUM(hr.gross_score) AS gross_score,
                SUM(hr.adjusted_gross_score) AS adjusted_gross_score,
                SUM(hr.net_score) AS net_score
         FROM hole_result hr
         JOIN hole h ON h.hole_id = hr.hole_id
         JOIN round r ON r.round_id = hr.round_id
         WHERE hr.round_id IN ({})
         GROUP BY hr.round_id",
        id_list(round_ids)
    );
    let res = execute_query(conn, &query, vec![]).await?;

    let mut totals = HashMap::new();
    for row in &res.results {
        totals.insert(
            row_i64(row, "round_id")?,
            HoleResultTotals {
                hole_count: row_i64(row, "hole_count")?,
                tee_hole_count: row_i64(row, "tee_hole_count")?,
                par_total: row_i64(row, "par_total")?,
                gross_score: row_i64(row, "gross_score")?,
                adjusted_gross_score: row_i64(row, "adjusted_gross_score")?,
                net_score: row_i64(row, "net_score")?,
            },
        );
    }
    Ok(totals)
}

/// Qualifying scores inside the window, converted into the scoring-record
/// shape. The differential was computed when the score was recorded and is
/// copied as-is.
pub async fn get_qualifying_summaries(
    conn: &MiddlewarePoolConnection,
    golfer_id: i64,
    min_date: NaiveDate,
    max_date: NaiveDate,
) -> Result<Vec<RoundSummary>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT qs.qualifying_score_id, qs.golfer_id, g.name AS golfer_name,
                qs.date_played, qs.tee_par, qs.rating, qs.slope,
                qs.gross_score, qs.adjusted_gross_score, qs.net_score,
                qs.score_differential
         FROM qualifying_score qs
         JOIN golfer g ON g.golfer_id = qs.golfer_id
         WHERE qs.golfer_id = ?1
           AND qs.date_played >= ?2
           AND qs.date_played <= ?3
         ORDER BY qs.date_played DESC",
        vec![
            RowValues::Int(golfer_id),
            date_param(min_date),
            date_param(max_date),
        ],
    )
    .await?;

    res.results
        .iter()
        .map(|row| {
            Ok(RoundSummary {
                round_id: None,
                qualifying_score_id: Some(row_i64(row, "qualifying_score_id")?),
                golfer_id: row_i64(row, "golfer_id")?,
                golfer_name: row_text(row, "golfer_name")?,
                date_played: row_date(row, "date_played")?,
                round_type: RoundType::Qualifying,
                playing_handicap: 0,
                course_name: String::new(),
                track_name: String::new(),
                tee_color: String::new(),
                tee_gender: String::new(),
                tee_par: row_i64(row, "tee_par")?,
                rating: row_f64(row, "rating")?,
                slope: row_i64(row, "slope")?,
                gross_score: row_i64(row, "gross_score")?,
                adjusted_gross_score: row_i64(row, "adjusted_gross_score")?,
                net_score: row_i64(row, "net_score")?,
                score_differential: row_f64(row, "score_differential")?,
            })
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct RoundForRecalc {
    pub round_id: i64,
    pub golfer_id: i64,
    pub date_played: NaiveDate,
    pub playing_handicap: i64,
}

/// Every round played on or after `start_date`, with the playing handicap
/// the golfer carried that day.
pub async fn get_rounds_for_recalc(
    conn: &MiddlewarePoolConnection,
    start_date: NaiveDate,
) -> Result<Vec<RoundForRecalc>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT r.round_id, rg.golfer_id, r.date_played, rg.playing_handicap
         FROM round r
         JOIN round_golfer rg ON rg.round_id = r.round_id
         WHERE r.date_played >= ?1
         ORDER BY r.round_id",
        vec![date_param(start_date)],
    )
    .await?;

    res.results
        .iter()
        .map(|row| {
            Ok(RoundForRecalc {
                round_id: row_i64(row, "round_id")?,
                golfer_id: row_i64(row, "golfer_id")?,
                date_played: row_date(row, "date_played")?,
                playing_handicap: row_i64(row, "playing_handicap")?,
            })
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct RoundHoleRow {
    pub hole_result_id: i64,
    pub hole_number: i64,
    pub par: i64,
    pub stroke_index: i64,
    pub gross_score: i64,
    pub handicap_strokes: i64,
    pub adjusted_gross_score: i64,
    pub net_score: i64,
}

pub async fn get_round_hole_rows(
    conn: &MiddlewarePoolConnection,
    round_id: i64,
) -> Result<Vec<RoundHoleRow>, SqlMiddlewareDbError> {
    let res = execute_query(
        conn,
        "SELECT hr.hole_result_id, h.number AS hole_number, h.par, h.stroke_index,
                hr.gross_score, hr.handicap_strokes, hr.adjusted_gross_score, hr.net_score
         FROM hole_result hr
         JOIN hole h ON h.hole_id = hr.hole_id
         WHERE hr.round_id = ?1
         ORDER BY h.number",
        vec![RowValues::Int(round_id)],
    )
    .await?;

    res.results
        .iter()
        .map(|row| {
            Ok(RoundHoleRow {
                hole_result_id: row_i64(row, "hole_result_id")?,
                hole_number: row_i64(row, "hole_number")?,
                par: row_i64(row, "par")?,
                stroke_index: row_i64(row, "stroke_index")?,
                gross_score: row_i64(row, "gross_score")?,
                handicap_strokes: row_i64(row, "handicap_strokes")?,
                adjusted_gross_score: row_i64(row, "adjusted_gross_score")?,
                net_score: row_i64(row, "net_score")?,
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct HoleResultCorrection {
    pub hole_result_id: i64,
    pub handicap_strokes: i64,
    pub adjusted_gross_score: i64,
    pub net_score: i64,
}

/// Writes one round's corrections and bumps the round's `date_updated`, all
/// in one transaction committed immediately. Each correction is independent,
/// so persisting eagerly is safe.
pub async fn apply_hole_result_corrections(
    conn: &MiddlewarePoolConnection,
    round_id: i64,
    corrections: Vec<HoleResultCorrection>,
    now: NaiveDateTime,
) -> Result<(), SqlMiddlewareDbError> {
    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            sqlite_conn
                .interact(move |db_conn| {
                    let tx = db_conn.transaction()?;
                    for correction in corrections {
                        let converted = sqlite_convert_params_for_execute(vec![
                            RowValues::Int(correction.handicap_strokes),
                            RowValues::Int(correction.adjusted_gross_score),
                            RowValues::Int(correction.net_score),
                            RowValues::Int(correction.hole_result_id),
                        ])?;
                        tx.execute(
                            "UPDATE hole_result
                             SET handicap_strokes = ?1,
                                 adjusted_gross_score = ?2,
                                 net_score = ?3
                             WHERE hole_result_id = ?4",
                            converted,
                        )?;
                    }
                    let converted = sqlite_convert_params_for_execute(vec![
                        RowValues::Text(now.format("%Y-%m-%d %H:%M:%S").to_string()),
                        RowValues::Int(round_id),
                    ])?;
                    tx.execute(
                        "UPDATE round SET date_updated = ?1 WHERE round_id = ?2",
                        converted,
                    )?;
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
