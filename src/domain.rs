use std::fmt;

use crate::error::MapError;

pub const TAXID_COLUMN: usize = 5;
pub const FTP_PATH_COLUMN: usize = 19;
pub const MIN_COLUMNS: usize = FTP_PATH_COLUMN + 1;

/// Taxonomy identifier copied verbatim from the summary table.
///
/// No validation is applied; non-numeric values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxonomyId(String);

impl TaxonomyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxonomyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First whitespace-delimited token of a FASTA header, without the `>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceId(String);

impl SequenceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyRow {
    pub line: usize,
    pub taxonomy_id: TaxonomyId,
    pub ftp_path: String,
}

impl AssemblyRow {
    pub fn is_comment(text: &str) -> bool {
        text.starts_with('#')
    }

    /// Parses one data row. `line` is the 1-based line number in the summary table.
    pub fn parse(line: usize, text: &str) -> Result<Self, MapError> {
        let text = text.trim_end_matches(['\n', '\r']);
        let fields = text.split('\t').collect::<Vec<_>>();
        if fields.len() < MIN_COLUMNS {
            return Err(MapError::MissingColumns {
                line,
                found: fields.len(),
            });
        }
        Ok(Self {
            line,
            taxonomy_id: TaxonomyId::new(fields[TAXID_COLUMN]),
            ftp_path: fields[FTP_PATH_COLUMN].to_string(),
        })
    }

    /// File name part of the FTP path; empty when the path ends in `/`.
    pub fn basename(&self) -> &str {
        basename(&self.ftp_path)
    }
}

/// Final `/`-separated segment of a path or URL.
pub fn basename(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, name)) => name,
        None => path,
    }
}
