use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::app::MapResult;
use crate::domain::{SequenceId, TaxonomyId};
use crate::error::MapError;

/// Tab-separated `sequence_id<TAB>taxonomy_id` sink.
///
/// An existing file at the path is truncated. Records written before an
/// error stay in the file.
pub struct MapWriter {
    path: Utf8PathBuf,
    writer: BufWriter<File>,
    records: u64,
}

impl MapWriter {
    pub fn create(path: &Utf8Path) -> Result<Self, MapError> {
        let file = File::create(path).map_err(|source| MapError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            records: 0,
        })
    }

    pub fn write_record(
        &mut self,
        sequence_id: &SequenceId,
        taxonomy_id: &TaxonomyId,
    ) -> Result<(), MapError> {
        writeln!(self.writer, "{sequence_id}\t{taxonomy_id}").map_err(|source| {
            MapError::OutputWrite {
                path: self.path.clone(),
                source,
            }
        })?;
        self.records += 1;
        Ok(())
    }

    pub fn records(&self) -> u64 {
        self.records
    }

    /// Flushes buffered records and returns the number written.
    pub fn finish(mut self) -> Result<u64, MapError> {
        self.writer.flush().map_err(|source| MapError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.records)
    }
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_result(result: &MapResult) -> io::Result<()> {
        Self::print_json(result)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl crate::app::ProgressSink for JsonOutput {
    fn event(&self, _event: crate::app::ProgressEvent) {}
}
