extern crate config;

use std::error::Error;
use super::super::constants;
use super::{Context, Data, ErrorPolicy, System};

pub fn runtime_context(cfg_file: &String) -> Result<Context, Box<dyn Error>>  {

	let mut settings = config::Config::default();
	settings
		.set_default("data.has_headers", false)?
		.set_default("sys.threads", constants::DEFAULT_THREADS as i64)?
		.set_default("binning.error_policy", constants::DEFAULT_ERROR_POLICY)?;
	settings
		.merge(config::File::with_name(cfg_file.as_str()))?
		.merge(config::Environment::with_prefix(constants::ENV_PREFIX).separator(constants::ENV_SEPARATOR))?;

	/* data settings */
	let points: String = settings.get_str("data.points")?;
	let arity: String = settings.get_str("data.arity")?;
	let splits: String = settings.get_str("data.splits")?;
	let output: String = settings.get_str("data.output")?;
	let has_headers: bool = settings.get_bool("data.has_headers")?;
	let report: Option<String> = match settings.get_str("data.report") {
		Ok(path) => Some(path),
		Err(config::ConfigError::NotFound(_)) => None,
		Err(e) => return Err(e.into()),
	};
	/* system settings */
	let threads: i64 = settings.get_int("sys.threads")?;
	/* binning settings */
	let policy: String = settings.get_str("binning.error_policy")?;

	let sys = System { threads: parse_thread_settings(threads)? };
	let data = Data { points, arity, splits, output, report, has_headers };
	let policy = policy.parse::<ErrorPolicy>()?;

	Ok(Context { sys, data, policy })
}

fn parse_thread_settings(threads: i64) -> Result<usize, Box<dyn Error>> {

	if threads < 0 {
		return Err( format!("sys.threads must be non-negative, got {}", threads).into() );
	}

	Ok(threads as usize)
}
