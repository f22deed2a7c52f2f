use crate::cli::ExpandArgs;
use crate::config::builder::{build_config, load_input};
use crate::error::{CliError, Result};
use polyarch::workflows;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: ExpandArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    info!("Merging expansion settings from file and CLI arguments...");
    let app_config = build_config(&args, input.expansion.as_ref())?;

    let result = workflows::build::run(&input.topology, &app_config.core_config)?;

    info!("Writing bead graphs to {:?}", &app_config.output_path);
    let write = || -> Result<()> {
        let mut writer = BufWriter::new(File::create(&app_config.output_path)?);
        serde_json::to_writer_pretty(&mut writer, &result.chains)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    };
    write().map_err(|e| CliError::FileWriting {
        path: app_config.output_path.clone(),
        source: e.into(),
    })?;

    for chain in &result.chains {
        println!(
            "  chain '{}': {} bead(s), {} bond(s)",
            chain.name,
            chain.beads.n_beads(),
            chain.beads.n_bonds()
        );
    }
    println!(
        "Expanded {} chain type(s), written to: {}",
        result.chains.len(),
        app_config.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::UnrollMode;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const COMB: &str = r#"
        [expansion]
        unroll = true

        [[arm]]
        name = "backbone"
        blocks = [["A", 10]]

        [[arm]]
        name = "side"
        blocks = [["B", 3], ["C", 2]]

        [[graft]]
        base = "backbone"
        graft = "side"
        attach-positions = [1, 2, 4, 8]
        multiplicity = 2

        [[chain]]
        name = "Comb"
        arm = "backbone"
    "#;

    #[test]
    fn writes_bead_graphs_as_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("comb.toml");
        fs::write(&input, COMB).unwrap();
        let output = dir.path().join("beads.json");

        run(ExpandArgs {
            input,
            output: output.clone(),
            unroll: UnrollMode::default(),
            chains: vec!["Comb".into()],
        })
        .unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let chains = written.as_array().unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0]["name"], "Comb");
        assert_eq!(chains[0]["beads"]["nodes"].as_array().unwrap().len(), 50);
        assert_eq!(chains[0]["beads"]["bonds"].as_array().unwrap().len(), 49);
        assert_eq!(chains[0]["beads"]["bonds"][0], serde_json::json!([0, 1]));
    }

    #[test]
    fn unknown_chain_is_an_engine_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("comb.toml");
        fs::write(&input, COMB).unwrap();

        let result = run(ExpandArgs {
            input,
            output: dir.path().join("beads.json"),
            unroll: UnrollMode::default(),
            chains: vec!["Star".into()],
        });
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
