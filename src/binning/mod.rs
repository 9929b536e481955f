use std::error::Error;
use std::fmt;
use tracing::{debug, info, warn};
use crate::{constants, io, util};

pub mod bin;
pub mod dataset;
pub mod error;
pub mod init;
pub mod metadata;
pub mod point;
pub mod split;
pub mod thresholds;

pub use self::bin::find_bin;
pub use self::dataset::{convert_dataset, convert_dataset_collect_errors, convert_dataset_with_policy, ErrorPolicy};
pub use self::error::BinningError;
pub use self::metadata::FeatureArity;
pub use self::point::{convert_point, BinnedPoint, RawPoint};
pub use self::split::{group_by_feature, ContinuousSplit, Threshold};
pub use self::thresholds::{build_threshold_table, ThresholdTable};

/* Runtime settings for one binning run, read from the cfg file */
#[derive(Debug, Clone)]
pub struct Context {
	pub sys: System,
	pub data: Data,
	pub policy: ErrorPolicy,
}

#[derive(Debug, Clone)]
pub struct System {
	/* 0 lets rayon pick */
	pub threads: usize,
}

#[derive(Debug, Clone)]
pub struct Data {
	pub points: String,
	pub arity: String,
	pub splits: String,
	pub output: String,
	pub report: Option<String>,
	pub has_headers: bool,
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "sys.threads.........: {}", self.sys.threads)?;
		writeln!(f, "data.points.........: {}", self.data.points)?;
		writeln!(f, "data.arity..........: {}", self.data.arity)?;
		writeln!(f, "data.splits.........: {}", self.data.splits)?;
		writeln!(f, "data.output.........: {}", self.data.output)?;
		writeln!(f, "data.report.........: {}", self.data.report.as_deref().unwrap_or("-"))?;
		writeln!(f, "data.has_headers....: {}", self.data.has_headers)?;
		write!(f, "binning.error_policy: {:?}", self.policy)
	}
}

pub fn run( cfg_file : String ) -> Result<(), Box<dyn Error>> {

	let ctx = init::runtime_context( &cfg_file )?;

	info!("runtime context initialized");
	debug!("\n{}", &ctx);

	let arity = FeatureArity::new( io::single_col_csv_to_usize_vec(&ctx.data.arity)? );
	let splits = group_by_feature( arity.len(), io::json_to_splits(&ctx.data.splits)? )?;
	let table = build_threshold_table( &arity, &splits )?;

	info!(
		n_features = arity.len(),
		n_categorical = arity.num_categorical(),
		max_bins = table.max_num_bins(&arity),
		"threshold table built"
	);

	let points = io::labeled_csv_to_points(&ctx.data.points, ctx.data.has_headers)?;
	info!(n_points = points.len(), "points loaded");

	let pool = util::thread_pool( ctx.sys.threads )?;
	let result = pool.install(|| convert_dataset_with_policy(&points, &table, &arity, ctx.policy));

	let errors = match result {
		Ok(binned) => {
			io::binned_points_to_csv(&ctx.data.output, &binned)?;
			info!(n_points = binned.len(), path = %ctx.data.output, "binned points written");
			return Ok(())
		},
		Err(errors) => errors,
	};

	for err in errors.iter().take(constants::MAX_LOGGED_ERRORS) {
		warn!("{}", util::error_chain(err));
	}

	if let Some(report) = &ctx.data.report {
		io::errors_to_json(report, &errors)?;
		info!(n_errors = errors.len(), path = %report, "error report written");
	}

	Err( format!("{} of {} points failed to bin; first: {}",
		errors.len(), points.len(), util::error_chain(&errors[0])).into() )
}
