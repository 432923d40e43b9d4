mod common;

use chrono::{Duration, Local, NaiveDate};
use league_golf::{get_handicap_index_data, get_rounds_in_scoring_record};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day(offset_from_today: i64) -> String {
    (Local::now().date_naive() + Duration::days(offset_from_today))
        .format("%Y-%m-%d")
        .to_string()
}

// gross scores on tee 1 (rating 35.1, slope 126) with no strokes:
// differential = (gross - 35.1) * 113 / 126
const GROSS_38: [i64; 9] = [5, 5, 4, 4, 4, 4, 4, 4, 4];
const GROSS_40: [i64; 9] = [5, 5, 5, 5, 4, 4, 4, 4, 4];
const GROSS_42: [i64; 9] = [5, 5, 5, 5, 5, 5, 4, 4, 4];
const GROSS_44: [i64; 9] = [5, 5, 5, 5, 5, 5, 5, 5, 4];
const DIFF_38: f64 = (38.0 - 35.1) * 113.0 / 126.0;
const DIFF_40: f64 = (40.0 - 35.1) * 113.0 / 126.0;
const DIFF_42: f64 = (42.0 - 35.1) * 113.0 / 126.0;

#[tokio::test]
async fn test1_scoring_record_assembly() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_assembly").await;

    for (round_id, day) in [(1, "2025-05-01"), (2, "2025-05-08"), (3, "2025-05-15")] {
        common::insert_nine_hole_round(&config_and_pool, round_id, 1, day, 0, &GROSS_42).await;
    }

    let conn = common::get_conn(&config_and_pool).await;
    let record = get_rounds_in_scoring_record(
        &conn,
        1,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
    )
    .await?;

    assert_eq!(record.len(), 3);
    // most recent first
    assert_eq!(record[0].date_played, date("2025-05-15"));
    assert_eq!(record[2].date_played, date("2025-05-01"));

    let first = &record[0];
    assert_eq!(first.round_id, Some(3));
    assert_eq!(first.golfer_name, "Alice Merton");
    assert_eq!(first.course_name, "Maplewood Golf Club");
    assert_eq!(first.track_name, "Front");
    assert_eq!(first.tee_color, "White");
    assert_eq!(first.tee_par, 36);
    assert_eq!(first.gross_score, 42);
    assert_eq!(first.adjusted_gross_score, 42);
    assert_eq!(first.net_score, 42);
    assert!((first.score_differential - DIFF_42).abs() < 1e-6);

    Ok(())
}

#[tokio::test]
async fn test1_limit_and_window() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_limit").await;

    let days = ["2025-06-01", "2025-06-08", "2025-06-15", "2025-06-22", "2025-06-29"];
    for (i, day) in days.iter().enumerate() {
        common::insert_nine_hole_round(&config_and_pool, (i + 1) as i64, 1, day, 0, &GROSS_42)
            .await;
    }
    // outside the window entirely
    common::insert_nine_hole_round(&config_and_pool, 6, 1, "2023-06-01", 0, &GROSS_42).await;

    let conn = common::get_conn(&config_and_pool).await;
    let min_date = date("2025-01-01");
    let max_date = date("2025-12-31");

    let record = get_rounds_in_scoring_record(&conn, 1, min_date, max_date, 3, false).await?;
    assert_eq!(record.len(), 3);
    for summary in &record {
        assert!(summary.date_played >= min_date && summary.date_played <= max_date);
    }
    // the three most recent survive the cap
    assert_eq!(record[0].round_id, Some(5));
    assert_eq!(record[1].round_id, Some(4));
    assert_eq!(record[2].round_id, Some(3));

    Ok(())
}

#[tokio::test]
async fn test1_qualifying_score_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_qualifying").await;

    common::insert_nine_hole_round(&config_and_pool, 1, 2, "2025-07-01", 0, &GROSS_42).await;
    common::exec_batch(
        &config_and_pool,
        "INSERT INTO qualifying_score (qualifying_score_id, golfer_id, date_played, tee_par, \
         rating, slope, gross_score, adjusted_gross_score, net_score, score_differential) \
         VALUES (1, 2, '2025-06-10', 36, 35.1, 126, 45, 44, 45, 7.982);\n\
         INSERT INTO qualifying_score (qualifying_score_id, golfer_id, date_played, tee_par, \
         rating, slope, gross_score, adjusted_gross_score, net_score, score_differential) \
         VALUES (2, 2, '2025-06-17', 36, 35.1, 126, 41, 41, 41, 5.288);",
    )
    .await;

    let conn = common::get_conn(&config_and_pool).await;
    let record = get_rounds_in_scoring_record(
        &conn,
        2,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
    )
    .await?;

    // one real round plus both qualifying scores, still most recent first
    assert_eq!(record.len(), 3);
    assert_eq!(record[0].round_id, Some(1));
    assert_eq!(record[1].qualifying_score_id, Some(2));
    assert_eq!(record[2].qualifying_score_id, Some(1));
    // the pre-computed differential is copied, not recomputed
    assert!((record[1].score_differential - 5.288).abs() < 1e-9);

    // a second real round switches the fallback off
    common::insert_nine_hole_round(&config_and_pool, 2, 2, "2025-07-08", 0, &GROSS_42).await;
    let record = get_rounds_in_scoring_record(
        &conn,
        2,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
    )
    .await?;
    assert_eq!(record.len(), 2);
    assert!(record.iter().all(|r| r.qualifying_score_id.is_none()));

    Ok(())
}

#[tokio::test]
async fn test1_round_without_hole_results_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_missing_holes").await;

    // a round with no hole_result rows at all
    common::exec_batch(
        &config_and_pool,
        "INSERT INTO round (round_id, tee_id, date_played, round_type, scoring_type) \
         VALUES (1, 1, '2025-05-01', 'FLIGHT', 'INDIVIDUAL');\n\
         INSERT INTO round_golfer (round_id, golfer_id, playing_handicap) VALUES (1, 3, 0);",
    )
    .await;

    let conn = common::get_conn(&config_and_pool).await;
    let record = get_rounds_in_scoring_record(
        &conn,
        3,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
    )
    .await?;

    // skipped, no qualifying scores to fall back on, empty is not an error
    assert!(record.is_empty());

    Ok(())
}

#[tokio::test]
async fn test1_partial_hole_results_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_partial_holes").await;

    // only three of the nine holes ever got entered
    common::exec_batch(
        &config_and_pool,
        "INSERT INTO round (round_id, tee_id, date_played, round_type, scoring_type) \
         VALUES (1, 1, '2025-05-01', 'FLIGHT', 'INDIVIDUAL');\n\
         INSERT INTO round_golfer (round_id, golfer_id, playing_handicap) VALUES (1, 3, 0);\n\
         INSERT INTO hole_result (round_id, hole_id, gross_score, handicap_strokes, \
         adjusted_gross_score, net_score) VALUES (1, 1, 5, 0, 5, 5);\n\
         INSERT INTO hole_result (round_id, hole_id, gross_score, handicap_strokes, \
         adjusted_gross_score, net_score) VALUES (1, 2, 5, 0, 5, 5);\n\
         INSERT INTO hole_result (round_id, hole_id, gross_score, handicap_strokes, \
         adjusted_gross_score, net_score) VALUES (1, 3, 5, 0, 5, 5);",
    )
    .await;

    let conn = common::get_conn(&config_and_pool).await;
    let record = get_rounds_in_scoring_record(
        &conn,
        3,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
    )
    .await?;
    // a three-hole fragment must never be summed as a complete round
    assert!(record.is_empty());

    // a fully-recorded round comes through; the fragment stays out
    common::insert_nine_hole_round(&config_and_pool, 2, 3, "2025-05-08", 0, &GROSS_42).await;
    let record = get_rounds_in_scoring_record(
        &conn,
        3,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
    )
    .await?;
    assert_eq!(record.len(), 1);
    assert_eq!(record[0].round_id, Some(2));
    assert!((record[0].score_differential - DIFF_42).abs() < 1e-6);

    Ok(())
}

#[tokio::test]
async fn test1_pending_record_composition() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_pending").await;
    let today = Local::now().date_naive();
    let min_date = today - Duration::days(60);
    let max_date = today - Duration::days(7);

    // active record, most recent first once assembled: 42, 42, 38
    common::insert_nine_hole_round(&config_and_pool, 1, 1, &day(-30), 0, &GROSS_38).await;
    common::insert_nine_hole_round(&config_and_pool, 2, 1, &day(-25), 0, &GROSS_42).await;
    common::insert_nine_hole_round(&config_and_pool, 3, 1, &day(-20), 0, &GROSS_42).await;
    // played after the cutoff: 40 then 44
    common::insert_nine_hole_round(&config_and_pool, 4, 1, &day(-2), 0, &GROSS_40).await;
    common::insert_nine_hole_round(&config_and_pool, 5, 1, &day(-1), 0, &GROSS_44).await;

    let conn = common::get_conn(&config_and_pool).await;
    let data = get_handicap_index_data(&conn, 1, min_date, max_date, 3, true, false).await?;

    // active record [42, 42, 38]: the 38 is the low score
    let active = data.active_handicap_index.unwrap();
    assert!((active - DIFF_38 * 0.96).abs() < 1e-6, "got {active}");
    assert_eq!(data.active_rounds.as_ref().map(Vec::len), Some(3));

    // pending record is pending-then-active trimmed to the limit:
    // [44, 40, 42]. The 38 falls off the end, so the 40 becomes the low
    // score and the pending index moves up.
    let pending = data.pending_handicap_index.unwrap();
    assert!((pending - DIFF_40 * 0.96).abs() < 1e-6, "got {pending}");
    assert_eq!(data.pending_rounds.as_ref().map(Vec::len), Some(2));

    Ok(())
}

#[tokio::test]
async fn test1_handicap_index_data_view() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_db("test1_index_data").await;

    for (round_id, day) in [(1, "2025-04-03"), (2, "2025-04-10"), (3, "2025-04-17")] {
        common::insert_nine_hole_round(&config_and_pool, round_id, 1, day, 0, &GROSS_42).await;
    }

    let conn = common::get_conn(&config_and_pool).await;
    let data = get_handicap_index_data(
        &conn,
        1,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        true,
        false,
    )
    .await?;

    // three identical differentials, lowest one times 0.96
    let expected = DIFF_42 * 0.96;
    let active = data.active_handicap_index.unwrap();
    assert!((active - expected).abs() < 1e-6, "got {active}");
    assert_eq!(data.active_rounds.as_ref().map(Vec::len), Some(3));
    // nothing played after the window
    assert!(data.pending_handicap_index.is_none());
    assert_eq!(data.pending_rounds.as_ref().map(Vec::len), Some(0));

    // include_rounds = false leaves the lists out
    let data = get_handicap_index_data(
        &conn,
        1,
        date("2025-01-01"),
        date("2025-12-31"),
        20,
        false,
        false,
    )
    .await?;
    assert!(data.active_rounds.is_none());
    assert!(data.pending_rounds.is_none());

    Ok(())
}
