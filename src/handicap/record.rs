//! Scoring-record assembly: turns a golfer's recent rounds (and, when there
//! are too few, qualifying scores) into the ordered differential record the
//! handicap system consumes.

use chrono::{Duration, Local, NaiveDate, Timelike};
use sql_middleware::middleware::MiddlewarePoolConnection;

use crate::error::AppError;
use crate::handicap::system::HandicapSystem;
use crate::model::round::{
    get_hole_result_totals, get_qualifying_summaries, get_round_summaries, get_scoring_round_ids,
};
use crate::model::types::{HandicapIndexData, RoundSummary};

pub const DEFAULT_SCORING_RECORD_LIMIT: usize = 20;

/// Rounds below this count trigger the qualifying-score fallback.
const QUALIFYING_FALLBACK_THRESHOLD: usize = 2;

/// Assembles a golfer's scoring record for `[min_date, max_date]`, most
/// recent first. At most `limit` rounds are considered; qualifying scores
/// appended by the fallback are additive and not counted against the limit.
/// A golfer with no eligible rounds and no qualifying scores yields an empty
/// record, not an error.
pub async fn get_rounds_in_scoring_record(
    conn: &MiddlewarePoolConnection,
    golfer_id: i64,
    min_date: NaiveDate,
    max_date: NaiveDate,
    limit: usize,
    use_legacy: bool,
) -> Result<Vec<RoundSummary>, AppError> {
    let system = HandicapSystem::from_legacy_flag(use_legacy);

    let round_ids = get_scoring_round_ids(conn, golfer_id, min_date, max_date, limit).await?;
    let shells = get_round_summaries(conn, golfer_id, &round_ids).await?;
    let totals = get_hole_result_totals(conn, &round_ids).await?;

    let mut summaries: Vec<RoundSummary> = Vec::with_capacity(shells.len());
    for mut summary in shells {
        let Some(round_id) = summary.round_id else {
            eprintln!("scoring-record entry without a round id for golfer {golfer_id}, skipping");
            continue;
        };
        let Some(t) = totals.get(&round_id) else {
            // Data-integrity anomaly: a selected round with no hole results.
            eprintln!(
                "round {round_id} for golfer {golfer_id} has no hole results, skipping"
            );
            continue;
        };
        if t.hole_count != t.tee_hole_count {
            // Same anomaly, partially recorded: summing a fraction of the
            // holes would fabricate a differential.
            eprintln!(
                "round {round_id} for golfer {golfer_id} has {} of {} hole results, skipping",
                t.hole_count, t.tee_hole_count
            );
            continue;
        }
        summary.tee_par = t.par_total;
        summary.gross_score = t.gross_score;
        summary.adjusted_gross_score = t.adjusted_gross_score;
        summary.net_score = t.net_score;
        summary.score_differential =
            system.score_differential(summary.rating, summary.slope, summary.adjusted_gross_score);
        summaries.push(summary);
    }

    if summaries.len() < QUALIFYING_FALLBACK_THRESHOLD {
        let qualifying = get_qualifying_summaries(conn, golfer_id, min_date, max_date).await?;
        summaries.extend(qualifying);
        summaries.sort_by(|a, b| b.date_played.cmp(&a.date_played));
    }

    Ok(summaries)
}

/// The active/pending index view for one golfer. The active window runs to
/// `max_date`; the pending window covers everything after it, through
/// tomorrow, and shows what the index becomes once the league's weekly
/// cutover advances.
pub async fn get_handicap_index_data(
    conn: &MiddlewarePoolConnection,
    golfer_id: i64,
    min_date: NaiveDate,
    max_date: NaiveDate,
    limit: usize,
    include_rounds: bool,
    use_legacy: bool,
) -> Result<HandicapIndexData, AppError> {
    let system = HandicapSystem::from_legacy_flag(use_legacy);

    let active_rounds =
        get_rounds_in_scoring_record(conn, golfer_id, min_date, max_date, limit, use_legacy)
            .await?;
    let active_differentials: Vec<f64> =
        active_rounds.iter().map(|r| r.score_differential).collect();
    let active_handicap_index = system.handicap_index(&active_differentials);

    let today = Local::now().date_naive();
    let pending_rounds = get_rounds_in_scoring_record(
        conn,
        golfer_id,
        max_date + Duration::days(1),
        today + Duration::days(1),
        limit,
        use_legacy,
    )
    .await?;

    let pending_handicap_index = if pending_rounds.is_empty() {
        None
    } else {
        // Pending rounds are newer than everything active, so the pending
        // record is pending differentials followed by active ones, trimmed
        // back down to the limit.
        let mut record: Vec<f64> = pending_rounds.iter().map(|r| r.score_differential).collect();
        record.extend(active_differentials.iter().copied());
        record.truncate(limit);
        system.handicap_index(&record)
    };

    let active_date = Local::now()
        .naive_local()
        .with_nanosecond(0)
        .unwrap_or_else(|| Local::now().naive_local());

    Ok(HandicapIndexData {
        active_date,
        active_handicap_index,
        pending_handicap_index,
        active_rounds: include_rounds.then_some(active_rounds),
        pending_rounds: include_rounds.then_some(pending_rounds),
    })
}
