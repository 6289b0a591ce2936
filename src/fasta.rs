use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use flate2::read::MultiGzDecoder;

use crate::domain::SequenceId;
use crate::error::MapError;

/// Returns the sequence id of a FASTA header line, or `None` for any other line.
///
/// The id runs from just after the leading `>` to the first whitespace
/// character. A header with nothing before the first whitespace yields `""`.
pub fn header_sequence_id(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Header ids of one gzip-compressed FASTA file, in file order.
///
/// A zero-length file is read as an empty stream rather than a truncated
/// gzip member.
pub struct FastaHeaders {
    path: Utf8PathBuf,
    reader: Option<BufReader<MultiGzDecoder<File>>>,
    buf: String,
}

impl FastaHeaders {
    pub fn open(path: &Utf8Path) -> Result<Self, MapError> {
        let open_err = |source| MapError::GenomeOpen {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        let len = file.metadata().map_err(open_err)?.len();
        let reader = (len > 0).then(|| BufReader::new(MultiGzDecoder::new(file)));
        Ok(Self {
            path: path.to_path_buf(),
            reader,
            buf: String::new(),
        })
    }
}

impl Iterator for FastaHeaders {
    type Item = Result<SequenceId, MapError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        loop {
            self.buf.clear();
            match reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(id) = header_sequence_id(&self.buf) {
                        return Some(Ok(SequenceId::new(id)));
                    }
                }
                Err(source) => {
                    return Some(Err(MapError::GenomeDecode {
                        path: self.path.clone(),
                        source,
                    }));
                }
            }
        }
    }
}
