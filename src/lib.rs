extern crate itertools;
use std::error::Error;

pub mod binning;
pub mod constants;
pub mod init;
pub mod io;
pub mod util;

pub use binning::{
	build_threshold_table, convert_dataset, convert_dataset_collect_errors, convert_point, find_bin,
	BinnedPoint, BinningError, ContinuousSplit, ErrorPolicy, FeatureArity, RawPoint, ThresholdTable,
};

pub fn run( args: init::Args ) -> Result<(), Box<dyn Error>> {

	binning::run( args.cfg_file )?;

	Ok(())
}
