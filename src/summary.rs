use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::AssemblyRow;
use crate::error::MapError;

/// Streaming reader over an NCBI `assembly_summary.txt` table.
///
/// Rows beginning with `#` are skipped. Every other line must carry at
/// least 20 tab-separated columns.
pub struct AssemblySummary {
    path: Utf8PathBuf,
    lines: Lines<BufReader<File>>,
    line: usize,
}

impl AssemblySummary {
    pub fn open(path: &Utf8Path) -> Result<Self, MapError> {
        let file = File::open(path).map_err(|source| MapError::SummaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line: 0,
        })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Iterator for AssemblySummary {
    type Item = Result<AssemblyRow, MapError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(source) => {
                    return Some(Err(MapError::SummaryRead {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            self.line += 1;
            if AssemblyRow::is_comment(&text) {
                continue;
            }
            return Some(AssemblyRow::parse(self.line, &text));
        }
    }
}
