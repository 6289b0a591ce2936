use camino::Utf8PathBuf;

use crate::store::{DEFAULT_GENOME_SUFFIX, GenomeStore};

/// Inputs of a single map-building run.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub summary: Utf8PathBuf,
    pub genome_dir: Utf8PathBuf,
    pub output: Utf8PathBuf,
    pub suffix: String,
}

impl MapConfig {
    pub fn new(summary: Utf8PathBuf, genome_dir: Utf8PathBuf, output: Utf8PathBuf) -> Self {
        Self {
            summary,
            genome_dir,
            output,
            suffix: DEFAULT_GENOME_SUFFIX.to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        if let Some(suffix) = suffix {
            self.suffix = suffix;
        }
        self
    }

    pub fn genome_store(&self) -> GenomeStore {
        GenomeStore::new(self.genome_dir.clone(), self.suffix.clone())
    }
}
