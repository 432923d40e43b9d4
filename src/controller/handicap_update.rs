//! Weekly handicap reconciliation: recompute each golfer's active index
//! against the new cutoff date and rewrite the stored value when it has
//! drifted or when a pending round has been promoted into the active window.

use chrono::{Datelike, Local, NaiveDate};
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, MiddlewarePool};

use crate::error::AppError;
use crate::handicap::record::get_handicap_index_data;
use crate::model::golfer::{HandicapIndexUpdate, apply_handicap_index_updates, get_golfers};
use crate::model::types::{HandicapIndexData, RoundSummary};

/// Scoring-record cap used during the weekly update pass.
const UPDATE_RECORD_LIMIT: usize = 10;

/// Stored indexes carry more precision than is ever displayed; anything
/// closer than this is the same index.
const INDEX_EPSILON: f64 = 1e-6;

/// Recomputes every golfer's index and stages the required writes, issuing
/// one commit at the end of the pass. Returns the number of golfers updated.
pub async fn update_golfer_handicaps(
    config_and_pool: &ConfigAndPool,
    old_max_date: NaiveDate,
    new_max_date: NaiveDate,
) -> Result<usize, AppError> {
    let pool = config_and_pool
        .pool
        .get()
        .await
        .map_err(SqlMiddlewareDbError::from)?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let min_date = NaiveDate::from_ymd_opt(Local::now().year() - 2, 1, 1)
        .ok_or_else(|| AppError::Other("could not build scoring-record floor date".to_string()))?;

    let golfers = get_golfers(&conn).await?;
    let mut updates: Vec<HandicapIndexUpdate> = Vec::new();

    for golfer in &golfers {
        let old_data = get_handicap_index_data(
            &conn,
            golfer.golfer_id,
            min_date,
            old_max_date,
            UPDATE_RECORD_LIMIT,
            true,
            false,
        )
        .await?;
        let new_data = get_handicap_index_data(
            &conn,
            golfer.golfer_id,
            min_date,
            new_max_date,
            UPDATE_RECORD_LIMIT,
            true,
            false,
        )
        .await?;

        let mut reasons: Vec<&str> = Vec::new();
        if !index_matches(new_data.active_handicap_index, golfer.handicap_index) {
            reasons.push("index mismatch");
        } else if pending_round_promoted(&old_data, &new_data) {
            reasons.push("pending promotion");
        }

        if reasons.is_empty() {
            continue;
        }

        println!(
            "golfer {} ({}): {} -> {} [{}]",
            golfer.golfer_id,
            golfer.name,
            fmt_index(golfer.handicap_index),
            fmt_index(new_data.active_handicap_index),
            reasons.join(", ")
        );
        updates.push(HandicapIndexUpdate {
            golfer_id: golfer.golfer_id,
            handicap_index: new_data.active_handicap_index,
            updated: new_data.active_date,
        });
    }

    let updated = updates.len();
    if !updates.is_empty() {
        apply_handicap_index_updates(&conn, updates).await?;
    }
    println!("{updated} of {} golfer handicap(s) updated", golfers.len());
    Ok(updated)
}

fn fmt_index(index: Option<f64>) -> String {
    match index {
        Some(v) => format!("{v:.1}"),
        None => "none".to_string(),
    }
}

fn index_matches(computed: Option<f64>, stored: Option<f64>) -> bool {
    match (computed, stored) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() < INDEX_EPSILON,
        _ => false,
    }
}

/// True when a round that was pending at the old cutoff now sits inside the
/// new active window.
fn pending_round_promoted(old: &HandicapIndexData, new: &HandicapIndexData) -> bool {
    let (Some(old_pending), Some(new_active)) = (&old.pending_rounds, &new.active_rounds) else {
        return false;
    };
    old_pending
        .iter()
        .filter_map(|r| r.round_id)
        .any(|round_id| contains_round(new_active, round_id))
}

fn contains_round(rounds: &[RoundSummary], round_id: i64) -> bool {
    rounds.iter().any(|r| r.round_id == Some(round_id))
}
