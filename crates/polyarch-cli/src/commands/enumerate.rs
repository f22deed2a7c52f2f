use crate::cli::EnumerateArgs;
use crate::config::builder::load_input;
use crate::error::Result;
use polyarch::engine::error::EngineError;
use tracing::info;

pub fn run(args: EnumerateArgs) -> Result<()> {
    let topology = load_input(&args.input)?.topology;
    let root = topology
        .chain_root(&args.chain)
        .ok_or_else(|| EngineError::UnknownChain(args.chain.clone()))?;

    let grafts = topology.get_grafts(root)?;
    info!(
        "Chain '{}' has {} top-level graft occurrence(s).",
        args.chain,
        grafts.len()
    );
    println!("{}", serde_json::to_string_pretty(&grafts)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::tempdir;

    const COMB: &str = r#"
        [[arm]]
        name = "backbone"
        blocks = [["A", 10]]

        [[arm]]
        name = "side"
        blocks = [["B", 3]]

        [[graft]]
        base = "backbone"
        graft = "side"
        attach-positions = [1, 4]

        [[chain]]
        name = "Comb"
        arm = "backbone"
    "#;

    #[test]
    fn known_chain_is_enumerated() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("comb.toml");
        fs::write(&input, COMB).unwrap();
        assert!(
            run(EnumerateArgs {
                input,
                chain: "Comb".into()
            })
            .is_ok()
        );
    }

    #[test]
    fn unknown_chain_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("comb.toml");
        fs::write(&input, COMB).unwrap();
        let result = run(EnumerateArgs {
            input,
            chain: "Star".into(),
        });
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::UnknownChain(name))) if name == "Star"
        ));
    }
}
