use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sql_middleware::middleware::DatabaseType;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Database type: sqlite or postgres
    #[arg(
        short = 'd',
        long,
        value_name = "DATABASE_TYPE",
        default_value = "Sqlite",
        value_parser = clap::value_parser!(DatabaseType)
    )]
    pub db_type: DatabaseType,
    // Only necessary for postgres.
    #[arg(long, value_name = "DATABASE_HOST", default_value = "localhost")]
    pub db_host: Option<String>,
    #[arg(
        short = 'p',
        long,
        value_name = "DATABASE_PORT",
        default_value = "5432"
    )]
    pub db_port: Option<u16>,
    #[arg(
        short = 'u',
        long,
        value_name = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub db_user: Option<String>,
    #[arg(short = 'w', long, value_name = "DATABASE_PASSWORD")]
    pub db_password: Option<String>,

    /// For postgres, the name of the database. For sqlite, the filename.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Semicolon-separated
    /// list of files, run in order. Be careful with the SQL you run here.
    #[arg(
        long,
        value_name = "DATABASE_STARTUP_SCRIPT",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub db_startup_script: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Recompute each golfer's handicap index, reconciling the stored value
    /// against the new cutoff date. One commit at the end of the pass.
    UpdateHandicaps {
        /// Cutoff date the stored indexes were last computed against (YYYY-MM-DD).
        #[arg(long, value_parser = crate::args::validation::check_date)]
        old_max_date: NaiveDate,
        /// New cutoff date (YYYY-MM-DD).
        #[arg(long, value_parser = crate::args::validation::check_date)]
        new_max_date: NaiveDate,
    },
    /// Re-derive handicap strokes, adjusted gross, and net score for every
    /// hole result in rounds played on or after Jan 1 of the given year.
    RecalcHoleResults {
        #[arg(long)]
        year: i32,
    },
    /// Print a golfer's handicap index data (active/pending) as JSON.
    HandicapData {
        #[arg(long)]
        golfer_id: i64,
        #[arg(long, value_parser = crate::args::validation::check_date)]
        min_date: NaiveDate,
        #[arg(long, value_parser = crate::args::validation::check_date)]
        max_date: NaiveDate,
        #[arg(long, default_value_t = crate::handicap::record::DEFAULT_SCORING_RECORD_LIMIT)]
        limit: usize,
        #[arg(long)]
        include_rounds: bool,
        #[arg(long)]
        use_legacy: bool,
    },
    /// Insert any missing matches for a flight from the matchup matrix catalog.
    Schedule {
        #[arg(long)]
        flight_id: i64,
        /// Log the matches that would be created without writing anything.
        #[arg(long)]
        dry_run: bool,
    },
}
