use std::fs;
use std::io::Write;

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use predicates::prelude::*;

fn seqid2tax() -> Command {
    Command::cargo_bin("seqid2tax").unwrap()
}

fn write_example(dir: &std::path::Path) {
    let mut fields = vec!["na"; 23];
    fields[0] = "GCF_000001.1";
    fields[5] = "9606";
    fields[19] = "ftp://host/dir/GCF_000001.1";
    fs::write(
        dir.join("assembly_summary.txt"),
        format!("# assembly_accession\n{}\n", fields.join("\t")),
    )
    .unwrap();

    fs::create_dir_all(dir.join("genomes")).unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(
            b">NC_000001.1 Homo sapiens chromosome 1\nACGT\n>NC_000002.1 Homo sapiens chromosome 2\nACGT\n",
        )
        .unwrap();
    fs::write(
        dir.join("genomes").join("GCF_000001.1_genomic.fna.gz"),
        encoder.finish().unwrap(),
    )
    .unwrap();
}

#[test]
fn too_few_arguments_prints_usage_and_exits_1() {
    let temp = tempfile::tempdir().unwrap();

    seqid2tax()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    seqid2tax()
        .arg(temp.path().join("assembly_summary.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    seqid2tax()
        .arg(temp.path().join("assembly_summary.txt"))
        .arg(temp.path().join("genomes"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn writes_map_for_example_assembly() {
    let temp = tempfile::tempdir().unwrap();
    write_example(temp.path());
    let output = temp.path().join("seqid2taxid.map");
    fs::write(&output, "stale contents\n").unwrap();

    seqid2tax()
        .arg(temp.path().join("assembly_summary.txt"))
        .arg(temp.path().join("genomes"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "NC_000001.1\t9606\nNC_000002.1\t9606\n"
    );
}

#[test]
fn json_flag_prints_run_summary() {
    let temp = tempfile::tempdir().unwrap();
    write_example(temp.path());

    seqid2tax()
        .arg("--json")
        .arg(temp.path().join("assembly_summary.txt"))
        .arg(temp.path().join("genomes"))
        .arg(temp.path().join("seqid2taxid.map"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"records\": 2"))
        .stdout(predicate::str::contains("\"assemblies\": 1"));
}

#[test]
fn missing_genome_exits_with_input_error() {
    let temp = tempfile::tempdir().unwrap();
    write_example(temp.path());
    fs::remove_file(temp.path().join("genomes").join("GCF_000001.1_genomic.fna.gz")).unwrap();

    seqid2tax()
        .arg(temp.path().join("assembly_summary.txt"))
        .arg(temp.path().join("genomes"))
        .arg(temp.path().join("seqid2taxid.map"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("genome_open"));
}

#[test]
fn arguments_after_output_map_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    write_example(temp.path());
    let output = temp.path().join("seqid2taxid.map");

    seqid2tax()
        .arg(temp.path().join("assembly_summary.txt"))
        .arg(temp.path().join("genomes"))
        .arg(&output)
        .arg("extra")
        .arg("more")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "NC_000001.1\t9606\nNC_000002.1\t9606\n"
    );
}

#[test]
fn help_lists_exit_statuses() {
    seqid2tax()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit status"));
}
