mod config;

use std::process::ExitCode;

use config::Config;
use ssb_engine::database::Database;
use ssb_engine::observability::{JsonPhaseLog, PhaseLog, PlainPhaseLog};
use ssb_engine::queries;

fn run(cfg: Config) -> ssb_engine::Result<()> {
    let threads = cfg.threads.unwrap_or_else(num_cpus::get);
    tracing::info!(threads, "sizing rayon global pool");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| ssb_engine::DbError::Config { message: e.to_string() })?;

    let db = Database::load(&cfg.data_dir)?;

    let log: Box<dyn PhaseLog> = if cfg.json_logs { Box::new(JsonPhaseLog) } else { Box::new(PlainPhaseLog) };

    queries::run_all(&db, log.as_ref());

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = match Config::parse(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    match run(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
