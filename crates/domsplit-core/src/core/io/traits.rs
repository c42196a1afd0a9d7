use crate::core::models::trace::CaTrace;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading an ordered CA trace from a structure format.
///
/// Implementors carry their own selection (chain, atom name) and handle the
/// format-specific parsing. The scan only ever sees the resulting [`CaTrace`].
pub trait CoordinateSource {
    /// Format-specific information recovered alongside the trace.
    type Metadata;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a trace from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the underlying reader fails.
    fn read_from(
        &self,
        reader: &mut impl BufRead,
    ) -> Result<(CaTrace, Self::Metadata), Self::Error>;

    /// Reads a trace from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(CaTrace, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
