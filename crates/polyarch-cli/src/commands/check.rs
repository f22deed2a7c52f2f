use crate::cli::CheckArgs;
use crate::config::builder::load_input;
use crate::error::Result;
use polyarch::engine::error::EngineError;
use tracing::{info, warn};

pub fn run(args: CheckArgs) -> Result<()> {
    let topology = load_input(&args.input)?.topology;

    println!(
        "{}: {} arm(s), {} graft edge(s), {} chain type(s)",
        args.input.display(),
        topology.n_arms(),
        topology.n_grafts(),
        topology.chain_types().len()
    );
    for chain in topology.chain_types() {
        println!("  chain '{}' rooted at {}", chain.name, chain.root);
    }
    for warning in topology.warnings() {
        println!("  warning: {}", warning);
    }

    match topology.find_cycle() {
        Some(cycle) => {
            warn!("Topology is invalid.");
            Err(EngineError::CyclicTopology { cycle }.into())
        }
        None => {
            info!("Topology is valid.");
            println!("Topology is valid.");
            Ok(())
        }
    }
}
