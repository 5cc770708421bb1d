use clap::Parser;
use lettercase_core::error::Result;
use lettercase_core::pipeline::{Outcome, Pipeline};
use log::{debug, info};
use std::io::{self, BufReader};
use std::process::ExitCode;

use crate::cli_args::Args;

mod cli_args;

fn execute() -> Result<Outcome> {
    let args = Args::parse();

    let pipeline = Pipeline::new(args.pipeline_config());
    debug!("Pipeline config: {:?}", pipeline.config());

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let outcome = pipeline.run(BufReader::new(io::stdin()), &mut stdout, &mut stderr)?;
    info!("Finished with {:?}", outcome);

    Ok(outcome)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
