use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::MapConfig;
use crate::error::MapError;
use crate::fasta::FastaHeaders;
use crate::output::MapWriter;
use crate::summary::AssemblySummary;

#[derive(Debug, Clone, Serialize)]
pub struct MapResult {
    pub assemblies: u64,
    pub records: u64,
    pub empty_ids: u64,
    pub output: String,
    pub generated_at: String,
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
    pub elapsed: Option<Duration>,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

/// Forwards progress events to `tracing` at info level.
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn event(&self, event: ProgressEvent) {
        match event.elapsed {
            Some(elapsed) => info!("{} ({:.2?})", event.message, elapsed),
            None => info!("{}", event.message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct App {
    config: MapConfig,
}

impl App {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    /// Writes one `sequence_id<TAB>taxonomy_id` line per FASTA header of every
    /// assembly listed in the summary table, in summary then header order.
    ///
    /// Stops at the first error; records already written are left in place.
    pub fn build_map(&self, sink: &dyn ProgressSink) -> Result<MapResult, MapError> {
        let started = Instant::now();
        let store = self.config.genome_store();
        let summary = AssemblySummary::open(&self.config.summary)?;
        let mut writer = MapWriter::create(&self.config.output)?;

        sink.event(ProgressEvent {
            message: format!(
                "phase=Resolve; summary={} genomes={}",
                summary.path(),
                store.root()
            ),
            elapsed: None,
        });

        let mut assemblies = 0u64;
        let mut empty_ids = 0u64;
        for row in summary {
            let row = row?;
            let fasta_path = store.fasta_path(&row);
            let before = writer.records();
            for sequence_id in FastaHeaders::open(&fasta_path)? {
                let sequence_id = sequence_id?;
                if sequence_id.is_empty() {
                    warn!(path = %fasta_path, "FASTA header without sequence id");
                    empty_ids += 1;
                }
                writer.write_record(&sequence_id, &row.taxonomy_id)?;
            }
            assemblies += 1;
            let headers = writer.records() - before;
            debug!(
                line = row.line,
                taxid = %row.taxonomy_id,
                path = %fasta_path,
                headers,
                "mapped assembly"
            );
            sink.event(ProgressEvent {
                message: format!(
                    "phase=Map; {} headers from {} (taxid {})",
                    headers, fasta_path, row.taxonomy_id
                ),
                elapsed: Some(started.elapsed()),
            });
        }

        let records = writer.finish()?;
        info!(
            assemblies,
            records,
            output = %self.config.output,
            "wrote sequence id to taxonomy id map"
        );
        sink.event(ProgressEvent {
            message: format!("phase=Done; {records} records from {assemblies} assemblies"),
            elapsed: Some(started.elapsed()),
        });

        Ok(MapResult {
            assemblies,
            records,
            empty_ids,
            output: self.config.output.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}
