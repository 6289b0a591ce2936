use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use clap::error::ErrorKind;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use seqid2tax::app::{App, ProgressSink, TracingSink};
use seqid2tax::config::MapConfig;
use seqid2tax::error::MapError;
use seqid2tax::output::JsonOutput;

#[derive(Parser)]
#[command(name = "seqid2tax")]
#[command(about = "Map FASTA sequence ids to NCBI taxonomy ids using an assembly summary table")]
#[command(version)]
#[command(
    after_help = "Exit status: 0 on success, 1 on usage or output errors, 2 when an input file is missing or unreadable, 3 on malformed input."
)]
struct Cli {
    /// NCBI assembly_summary.txt
    assembly_summary: Utf8PathBuf,

    /// Folder holding one <assembly>_genomic.fna.gz per summary row
    genome_folder: Utf8PathBuf,

    /// Output map, overwritten if present
    output_map: Utf8PathBuf,

    /// Genome filename suffix appended to the FTP path basename
    #[arg(long)]
    suffix: Option<String>,

    /// Print a JSON run summary to stdout
    #[arg(long)]
    json: bool,

    /// Ignored arguments after the output map
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", usage());
            return ExitCode::from(1);
        }
        Err(err) => err.exit(),
    };

    if let Err(report) = run(cli) {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<MapError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn usage() -> String {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "seqid2tax".to_string());
    format!("Usage: {program} assembly_summary.txt folder seqid2tax.map")
}

fn map_exit_code(error: &MapError) -> u8 {
    match error {
        MapError::SummaryRead { .. } | MapError::GenomeOpen { .. } => 2,
        MapError::MissingColumns { .. } | MapError::GenomeDecode { .. } => 3,
        MapError::OutputWrite { .. } => 1,
    }
}

fn run(cli: Cli) -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = MapConfig::new(cli.assembly_summary, cli.genome_folder, cli.output_map)
        .with_suffix(cli.suffix);
    let app = App::new(config);

    let sink: &dyn ProgressSink = if cli.json { &JsonOutput } else { &TracingSink };
    let result = app.build_map(sink)?;

    if cli.json {
        JsonOutput::print_result(&result).into_diagnostic()?;
    }
    Ok(())
}
