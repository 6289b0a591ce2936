use std::io;

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MapError {
    #[error("failed to read assembly summary {path}")]
    #[diagnostic(code(seqid2tax::summary_read))]
    SummaryRead {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("assembly summary line {line} has {found} columns, expected at least 20")]
    #[diagnostic(
        code(seqid2tax::missing_columns),
        help("taxonomy id is read from column 6 and the FTP path from column 20")
    )]
    MissingColumns { line: usize, found: usize },

    #[error("failed to open genome file {path}")]
    #[diagnostic(
        code(seqid2tax::genome_open),
        help("every non-comment summary row needs a matching file in the genome folder")
    )]
    GenomeOpen {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode genome file {path}")]
    #[diagnostic(
        code(seqid2tax::genome_decode),
        help("genome files must be gzip-compressed UTF-8 FASTA")
    )]
    GenomeDecode {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write map file {path}")]
    #[diagnostic(code(seqid2tax::output_write))]
    OutputWrite {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
