//! CLI configuration (C8/ambient). Three knobs, no config file: the
//! engine is a one-shot batch job, not a long-running service.

use ssb_engine::error::{ConfigSnafu, DbError};

pub struct Config {
    pub data_dir: String,
    pub json_logs: bool,
    pub threads: Option<usize>,
}

impl Config {
    /// Parses `USAGE: ssb-engine DATA_DIR [--json-logs] [--threads N]`.
    pub fn parse(args: &[String]) -> Result<Self, DbError> {
        let mut data_dir = None;
        let mut json_logs = false;
        let mut threads = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json-logs" => json_logs = true,
                "--threads" => {
                    let n = iter.next().ok_or_else(|| {
                        ConfigSnafu { message: "--threads requires a value" }.build()
                    })?;
                    threads = Some(n.parse::<usize>().map_err(|_| {
                        ConfigSnafu { message: format!("invalid thread count: {n}") }.build()
                    })?);
                }
                other if data_dir.is_none() => data_dir = Some(other.to_string()),
                other => {
                    return Err(ConfigSnafu { message: format!("unexpected argument: {other}") }
                        .build())
                }
            }
        }

        let data_dir = data_dir.ok_or_else(|| {
            ConfigSnafu { message: "USAGE: ssb-engine DATA_DIR [--json-logs] [--threads N]" }
                .build()
        })?;

        Ok(Self { data_dir, json_logs, threads })
    }
}
