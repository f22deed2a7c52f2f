use super::record::TopologyRecord;
use super::traits::TopologyFile;
use crate::core::topology::error::TopologyError;
use crate::core::topology::graph::TopologyGraph;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid topology record: {0}")]
    Topology(#[from] TopologyError),
}

/// Topology records stored as pretty-printed JSON.
pub struct JsonFile;

impl TopologyFile for JsonFile {
    type Error = JsonFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<TopologyGraph, Self::Error> {
        let record: TopologyRecord = serde_json::from_reader(reader)?;
        Ok(TopologyGraph::from_record(&record)?)
    }

    fn write_to(topology: &TopologyGraph, writer: &mut impl Write) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut *writer, &topology.to_record())?;
        writeln!(writer)?;
        Ok(())
    }
}
