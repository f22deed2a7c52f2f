use polyarch::engine::config::ChainSelection;

pub struct DefaultsConfig {
    pub unroll: bool,
    pub chains: ChainSelection,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            unroll: false,
            chains: ChainSelection::All,
        }
    }
}
