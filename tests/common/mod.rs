use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, MiddlewarePool, MiddlewarePoolConnection};

/// Fresh in-memory sqlite database with the league schema applied. Each test
/// passes its own `name` so parallel tests never share a connection cache.
pub async fn setup_db(name: &str) -> ConfigAndPool {
    let config_and_pool =
        ConfigAndPool::new_sqlite(format!("file:{name}?mode=memory&cache=shared"))
            .await
            .unwrap();

    let ddl = [
        include_str!("../../src/sql/schema/sqlite/00_table_drop.sql"),
        include_str!("../../src/sql/schema/sqlite/01_course.sql"),
        include_str!("../../src/sql/schema/sqlite/02_golfer.sql"),
        include_str!("../../src/sql/schema/sqlite/03_round.sql"),
        include_str!("../../src/sql/schema/sqlite/04_flight.sql"),
    ]
    .join("\n");
    exec_batch(&config_and_pool, &ddl).await;
    exec_batch(&config_and_pool, include_str!("seed.sql")).await;

    config_and_pool
}

pub async fn get_conn(config_and_pool: &ConfigAndPool) -> MiddlewarePoolConnection {
    let pool = config_and_pool.pool.get().await.unwrap();
    MiddlewarePool::get_connection(pool).await.unwrap()
}

pub async fn exec_batch(config_and_pool: &ConfigAndPool, sql: &str) {
    let pool = config_and_pool.pool.get().await.unwrap();
    let conn = MiddlewarePool::get_connection(pool).await.unwrap();
    let sql = sql.to_string();

    match &conn {
        MiddlewarePoolConnection::Sqlite(sconn) => {
            sconn
                .with_connection(move |conn| {
                    let tx = conn.transaction()?;
                    tx.execute_batch(&sql)?;
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await
                .unwrap();
        }
        _ => panic!("Only sqlite is supported "),
    }
}

/// Inserts an individually-scored nine-hole round on tee 1 (holes 1..9,
/// all par 4) with derived per-hole fields computed the way round entry
/// computes them from the playing handicap.
pub async fn insert_nine_hole_round(
    config_and_pool: &ConfigAndPool,
    round_id: i64,
    golfer_id: i64,
    date_played: &str,
    playing_handicap: i64,
    gross: &[i64; 9],
) {
    let mut sql = format!(
        "INSERT INTO round (round_id, tee_id, date_played, round_type, scoring_type) \
         VALUES ({round_id}, 1, '{date_played}', 'FLIGHT', 'INDIVIDUAL');\n\
         INSERT INTO round_golfer (round_id, golfer_id, playing_handicap) \
         VALUES ({round_id}, {golfer_id}, {playing_handicap});\n"
    );
    for (i, g) in gross.iter().enumerate() {
        let stroke_index = (i + 1) as i64;
        let par = 4i64;
        let strokes = if playing_handicap <= 0 {
            0
        } else {
            playing_handicap / 18 + i64::from(stroke_index <= playing_handicap % 18)
        };
        let adjusted = (*g).min(par + strokes + 2);
        let net = g - strokes;
        // hole_id matches stroke_index for tee 1 in seed.sql
        sql.push_str(&format!(
            "INSERT INTO hole_result (round_id, hole_id, gross_score, handicap_strokes, \
             adjusted_gross_score, net_score) \
             VALUES ({round_id}, {stroke_index}, {g}, {strokes}, {adjusted}, {net});\n"
        ));
    }
    exec_batch(config_and_pool, &sql).await;
}
