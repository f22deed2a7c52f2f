use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Chain selection must name at least one chain type")]
    EmptyChainSelection,
    #[error("Chain type '{0}' is selected more than once")]
    DuplicateChain(String),
}

/// Which chain types an expansion covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChainSelection {
    #[default]
    All,
    Named(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Fully enumerate the topology before expanding it.
    pub unroll: bool,
    pub chains: ChainSelection,
}

#[derive(Default)]
pub struct ExpansionConfigBuilder {
    unroll: Option<bool>,
    chains: Option<ChainSelection>,
}

impl ExpansionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unroll(mut self, unroll: bool) -> Self {
        self.unroll = Some(unroll);
        self
    }
    pub fn chains(mut self, chains: ChainSelection) -> Self {
        self.chains = Some(chains);
        self
    }

    pub fn build(self) -> Result<ExpansionConfig, ConfigError> {
        let chains = self
            .chains
            .ok_or(ConfigError::MissingParameter("chains"))?;
        if let ChainSelection::Named(names) = &chains {
            if names.is_empty() {
                return Err(ConfigError::EmptyChainSelection);
            }
            let mut seen = HashSet::new();
            if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
                return Err(ConfigError::DuplicateChain(dup.clone()));
            }
        }
        Ok(ExpansionConfig {
            unroll: self
                .unroll
                .ok_or(ConfigError::MissingParameter("unroll"))?,
            chains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_every_parameter() {
        assert_eq!(
            ExpansionConfigBuilder::new().unroll(true).build(),
            Err(ConfigError::MissingParameter("chains"))
        );
        assert_eq!(
            ExpansionConfigBuilder::new()
                .chains(ChainSelection::All)
                .build(),
            Err(ConfigError::MissingParameter("unroll"))
        );
    }

    #[test]
    fn builder_produces_config() {
        let config = ExpansionConfigBuilder::new()
            .unroll(false)
            .chains(ChainSelection::Named(vec!["Comb".into(), "Star".into()]))
            .build()
            .unwrap();
        assert!(!config.unroll);
        assert_eq!(
            config.chains,
            ChainSelection::Named(vec!["Comb".into(), "Star".into()])
        );
    }

    #[test]
    fn named_selection_must_be_non_empty_and_distinct() {
        let empty = ExpansionConfigBuilder::new()
            .unroll(false)
            .chains(ChainSelection::Named(vec![]))
            .build();
        assert_eq!(empty, Err(ConfigError::EmptyChainSelection));

        let dup = ExpansionConfigBuilder::new()
            .unroll(false)
            .chains(ChainSelection::Named(vec!["A".into(), "B".into(), "A".into()]))
            .build();
        assert_eq!(dup, Err(ConfigError::DuplicateChain("A".into())));
    }
}
