extern crate treepoint;

use std::error::Error;
use std::env;

fn main() -> Result<(), Box<dyn Error>> {

	let args = treepoint::init::argparse( env::args().collect() )?;

	let filter = if args.verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	treepoint::run( args )?;

    Ok(())
}
