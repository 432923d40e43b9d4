//! Flight schedule generation: materializes the missing `flight_match` rows
//! for a flight from the canonical matchup-matrix catalog.

pub mod catalog;

use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, MiddlewarePool};
use std::collections::HashSet;

use crate::error::AppError;
use crate::model::flight::{get_flight, get_flight_team_ids, insert_match, match_exists};

#[derive(Clone, Copy, Debug, Default)]
pub struct ScheduleReport {
    pub matches_created: usize,
    pub matches_existing: usize,
}

/// Walks the flight's matchup matrix week by week and inserts any match not
/// already present under the unordered team-pair key. Existing matches are
/// never modified; each insert commits on its own. With `dry_run` the
/// would-be inserts are logged and nothing is written.
pub async fn generate_flight_schedule(
    config_and_pool: &ConfigAndPool,
    flight_id: i64,
    dry_run: bool,
) -> Result<ScheduleReport, AppError> {
    let pool = config_and_pool
        .pool
        .get()
        .await
        .map_err(SqlMiddlewareDbError::from)?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let flight = get_flight(&conn, flight_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("flight {flight_id}")))?;
    let team_ids = get_flight_team_ids(&conn, flight_id).await?;

    let matrix = catalog::matchup_matrix(flight.weeks, team_ids.len()).ok_or(
        AppError::NoScheduleTemplate {
            weeks: flight.weeks,
            team_count: team_ids.len(),
        },
    )?;

    let prefix = if dry_run { "[dry-run] " } else { "" };
    let mut report = ScheduleReport::default();
    // Symmetric matrix cells name each pairing twice; this tracks what this
    // run has already placed so the second cell is a no-op even in dry runs.
    let mut placed: HashSet<(i64, i64, i64)> = HashSet::new();

    for (week_idx, row) in matrix.iter().enumerate() {
        let week = (week_idx + 1) as i64;
        for (slot, cell) in row.iter().enumerate() {
            let Some(opponent_slot) = *cell else {
                continue; // bye
            };
            let home_team_id = team_ids[slot];
            let away_team_id = team_ids[(opponent_slot - 1) as usize];

            let key = (
                week,
                home_team_id.min(away_team_id),
                home_team_id.max(away_team_id),
            );
            if !placed.insert(key) {
                continue;
            }
            if match_exists(&conn, flight_id, week, home_team_id, away_team_id).await? {
                report.matches_existing += 1;
                continue;
            }

            println!(
                "{prefix}flight {flight_id} week {week}: team {home_team_id} vs team {away_team_id}"
            );
            if !dry_run {
                insert_match(&conn, flight_id, week, home_team_id, away_team_id).await?;
            }
            report.matches_created += 1;
        }
    }

    println!(
        "{prefix}flight {flight_id}: {} match(es) created, {} already present",
        report.matches_created, report.matches_existing
    );
    Ok(report)
}
