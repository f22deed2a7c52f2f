use crate::core::topology::graph::TopologyGraph;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing persisted topologies.
///
/// Implementors handle one on-disk encoding of the
/// [`TopologyRecord`](super::record::TopologyRecord) layout.
pub trait TopologyFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a topology from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or the decoded record does not
    /// describe a constructible topology.
    fn read_from(reader: &mut impl BufRead) -> Result<TopologyGraph, Self::Error>;

    /// Writes a topology to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write_to(topology: &TopologyGraph, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a topology from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<TopologyGraph, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a topology to a file path, creating or truncating the file.
    fn write_to_path<P: AsRef<Path>>(topology: &TopologyGraph, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(topology, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
