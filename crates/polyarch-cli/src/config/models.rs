use polyarch::core::topology::graph::TopologyGraph;
use polyarch::engine::config::ExpansionConfig;
use std::path::PathBuf;

/// A loaded input topology together with any expansion settings it carried.
pub struct LoadedInput {
    pub topology: TopologyGraph,
    pub expansion: Option<super::file::FileExpansionConfig>,
}

pub struct AppConfig {
    pub output_path: PathBuf,
    pub core_config: ExpansionConfig,
}
