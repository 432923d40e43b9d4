//! Re-derives handicap strokes, adjusted gross, and net score for every hole
//! result in a year's rounds, writing back only the rows that disagree with
//! the stored values.

use chrono::{Local, NaiveDate};
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, MiddlewarePool};

use crate::error::AppError;
use crate::handicap::system::HandicapSystem;
use crate::model::round::{
    HoleResultCorrection, apply_hole_result_corrections, get_round_hole_rows,
    get_rounds_for_recalc,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct RecalcReport {
    pub rounds_checked: usize,
    pub rounds_corrected: usize,
    pub holes_corrected: usize,
    pub rounds_skipped: usize,
}

/// Checks all rounds played on or after Jan 1 of `year`. Each corrected
/// round is committed on its own; a failure partway leaves earlier
/// corrections in place, which is safe because they are independent.
pub async fn recalculate_hole_results(
    config_and_pool: &ConfigAndPool,
    year: i32,
) -> Result<RecalcReport, AppError> {
    let pool = config_and_pool
        .pool
        .get()
        .await
        .map_err(SqlMiddlewareDbError::from)?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let start_date = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AppError::Other(format!("invalid year {year}")))?;

    let system = HandicapSystem::Current;
    let rounds = get_rounds_for_recalc(&conn, start_date).await?;
    let mut report = RecalcReport::default();

    for round in &rounds {
        report.rounds_checked += 1;
        let holes = get_round_hole_rows(&conn, round.round_id).await?;
        if holes.is_empty() {
            eprintln!(
                "round {} ({}): no hole results, skipping",
                round.round_id, round.date_played
            );
            report.rounds_skipped += 1;
            continue;
        }

        let course_handicap = round.playing_handicap;
        let mut corrections: Vec<HoleResultCorrection> = Vec::new();
        for hole in &holes {
            let handicap_strokes = system.hole_handicap_strokes(hole.stroke_index, course_handicap);
            let adjusted_gross_score = system.hole_adjusted_gross_score(
                hole.par,
                hole.stroke_index,
                hole.gross_score,
                course_handicap,
            );
            let net_score = hole.gross_score - handicap_strokes;

            if handicap_strokes == hole.handicap_strokes
                && adjusted_gross_score == hole.adjusted_gross_score
                && net_score == hole.net_score
            {
                continue;
            }

            println!(
                "round {} hole {}: strokes {} -> {}, adjusted {} -> {}, net {} -> {}",
                round.round_id,
                hole.hole_number,
                hole.handicap_strokes,
                handicap_strokes,
                hole.adjusted_gross_score,
                adjusted_gross_score,
                hole.net_score,
                net_score
            );
            corrections.push(HoleResultCorrection {
                hole_result_id: hole.hole_result_id,
                handicap_strokes,
                adjusted_gross_score,
                net_score,
            });
        }

        if corrections.is_empty() {
            continue;
        }
        report.rounds_corrected += 1;
        report.holes_corrected += corrections.len();
        apply_hole_result_corrections(
            &conn,
            round.round_id,
            corrections,
            Local::now().naive_local(),
        )
        .await?;
    }

    println!(
        "{} round(s) checked, {} corrected ({} hole result(s)), {} skipped",
        report.rounds_checked, report.rounds_corrected, report.holes_corrected,
        report.rounds_skipped
    );
    Ok(report)
}
