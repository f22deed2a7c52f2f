use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileExpansionConfig};
use super::models::{AppConfig, LoadedInput};
use crate::cli::ExpandArgs;
use crate::error::{CliError, Result};
use polyarch::core::io::json::JsonFile;
use polyarch::core::io::traits::TopologyFile;
use polyarch::engine::config::{ChainSelection, ExpansionConfigBuilder};
use std::path::Path;
use tracing::{debug, info};

/// Loads an input topology. `.json` files are topology records; anything
/// else is read as a TOML architecture file.
pub fn load_input(path: &Path) -> Result<LoadedInput> {
    let is_record = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_record {
        info!("Loading topology record from {:?}", path);
        let topology = JsonFile::read_from_path(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        return Ok(LoadedInput {
            topology,
            expansion: None,
        });
    }

    info!("Loading architecture file from {:?}", path);
    let (expansion, architecture) = FileConfig::from_file(path)?.into_parts();
    let topology = architecture.build()?;
    Ok(LoadedInput {
        topology,
        expansion,
    })
}

/// Merges command-line flags over the file's `[expansion]` table over the
/// built-in defaults.
pub fn build_config(args: &ExpandArgs, file: Option<&FileExpansionConfig>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let file = file.cloned().unwrap_or_default();

    let unroll = args
        .unroll
        .requested()
        .or(file.unroll)
        .unwrap_or(defaults.unroll);

    let chains = if !args.chains.is_empty() {
        ChainSelection::Named(args.chains.clone())
    } else if let Some(names) = file.chains {
        ChainSelection::Named(names)
    } else {
        defaults.chains
    };

    let core_config = ExpansionConfigBuilder::new()
        .unroll(unroll)
        .chains(chains)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Resolved expansion configuration: {:?}", core_config);

    Ok(AppConfig {
        output_path: args.output.clone(),
        core_config,
    })
}
