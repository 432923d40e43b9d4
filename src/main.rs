use deadpool_postgres::{ManagerConfig, RecyclingMethod};
use league_golf::args::{self, Command};
use league_golf::controller::handicap_update::update_golfer_handicaps;
use league_golf::controller::hole_results::recalculate_hole_results;
use league_golf::controller::schedule::generate_flight_schedule;
use league_golf::get_handicap_index_data;
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{
    ConfigAndPool, DatabaseType, MiddlewarePool, MiddlewarePoolConnection, QueryAndParams,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let cfg = deadpool_postgres::Config::new();
    let config_and_pool: ConfigAndPool;
    if args.db_type == DatabaseType::Postgres {
        let mut postgres_config = cfg;
        postgres_config.dbname = Some(args.db_name.clone());
        postgres_config.host = args.db_host.clone();
        postgres_config.port = args.db_port;
        postgres_config.user = args.db_user.clone();
        postgres_config.password = args.db_password.clone();
        postgres_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        config_and_pool = ConfigAndPool::new_postgres(postgres_config).await?;
    } else {
        let a = ConfigAndPool::new_sqlite(args.db_name.clone()).await;
        match a {
            Ok(a) => {
                config_and_pool = a;
            }
            Err(e) => {
                eprintln!(
                    "Error: {}\nBacktrace: {:?}",
                    e,
                    std::backtrace::Backtrace::capture()
                );
                std::process::exit(1);
            }
        }
    }

    if let Some(script_files) = &args.db_startup_script {
        let mut combined = String::new();
        for file in script_files.split(';') {
            combined.push_str(&std::fs::read_to_string(file)?);
            combined.push('\n');
        }
        let query_and_params = QueryAndParams {
            query: combined,
            params: vec![],
        };

        let pool = config_and_pool.pool.get().await?;
        let sconn = MiddlewarePool::get_connection(pool).await?;
        (match sconn {
            MiddlewarePoolConnection::Postgres(mut xx) => {
                let tx = xx.transaction().await?;

                tx.batch_execute(&query_and_params.query).await?;
                tx.commit().await?;
                Ok::<_, SqlMiddlewareDbError>(())
            }
            MiddlewarePoolConnection::Sqlite(xx) => {
                xx.interact(move |xxx| {
                    let tx = xxx.transaction()?;
                    tx.execute_batch(&query_and_params.query)?;

                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await?
            }
        })?;
    }

    match args.command {
        Command::UpdateHandicaps {
            old_max_date,
            new_max_date,
        } => {
            update_golfer_handicaps(&config_and_pool, old_max_date, new_max_date).await?;
        }
        Command::RecalcHoleResults { year } => {
            recalculate_hole_results(&config_and_pool, year).await?;
        }
        Command::HandicapData {
            golfer_id,
            min_date,
            max_date,
            limit,
            include_rounds,
            use_legacy,
        } => {
            let pool = config_and_pool.pool.get().await?;
            let conn = MiddlewarePool::get_connection(pool).await?;
            let data = get_handicap_index_data(
                &conn,
                golfer_id,
                min_date,
                max_date,
                limit,
                include_rounds,
                use_legacy,
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Command::Schedule { flight_id, dry_run } => {
            generate_flight_schedule(&config_and_pool, flight_id, dry_run).await?;
        }
    }

    Ok(())
}
