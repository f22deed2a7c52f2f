use crate::cli::UnrollArgs;
use crate::config::builder::load_input;
use crate::error::{CliError, Result};
use polyarch::core::io::json::JsonFile;
use polyarch::core::io::traits::TopologyFile;
use tracing::info;

pub fn run(args: UnrollArgs) -> Result<()> {
    let topology = load_input(&args.input)?.topology;
    let unrolled = topology.fully_enumerate()?;

    info!("Writing unrolled topology to {:?}", &args.output);
    JsonFile::write_to_path(&unrolled, &args.output).map_err(|e| CliError::FileWriting {
        path: args.output.clone(),
        source: e.into(),
    })?;
    println!(
        "Unrolled {} arm(s) into {} arm(s), written to: {}",
        topology.n_arms(),
        unrolled.n_arms(),
        args.output.display()
    );
    Ok(())
}
