use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::AssemblyRow;

pub const DEFAULT_GENOME_SUFFIX: &str = "_genomic.fna.gz";

/// Folder of downloaded genomes, one `<assembly><suffix>` file per summary row.
#[derive(Debug, Clone)]
pub struct GenomeStore {
    root: Utf8PathBuf,
    suffix: String,
}

impl GenomeStore {
    pub fn new(root: Utf8PathBuf, suffix: impl Into<String>) -> Self {
        Self {
            root,
            suffix: suffix.into(),
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn fasta_path(&self, row: &AssemblyRow) -> Utf8PathBuf {
        self.root.join(format!("{}{}", row.basename(), self.suffix))
    }
}
