use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::tempdir;

use snpscan_core::models::Verdict;
use snpscan_io::read_summary_json;

#[fixture]
fn path_to_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/data")
}

fn snpscan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snpscan"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[rstest]
#[case("genome.txt")]
#[case("sample.vcf")]
fn test_scan_spondyloarthritis(path_to_data: PathBuf, #[case] genotypes: &str) {
    let out = tempdir().unwrap();
    let tsv = out.path().join("results.tsv");
    let json = out.path().join("results.json");

    let output = snpscan(&[
        "scan",
        path_str(&path_to_data.join(genotypes)),
        "--db",
        path_str(&path_to_data.join("snpdb_sa.csv")),
        "--output",
        path_str(&tsv),
        "--json",
        path_str(&json),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your Diagnostic insights: Small increase in risk"));
    assert!(stdout.contains(
        "Your TNF inhibitor treatment insights: High opportunity for positive clinical response"
    ));

    let results = std::fs::read_to_string(&tsv).unwrap();
    let mut lines = results.lines();
    assert_eq!(
        lines.next(),
        Some("SNP\tGene/locus\tGenotype\tRisk allele\tProtective allele\tAssociation\tReference")
    );
    assert_eq!(lines.count(), 4);

    let summary = read_summary_json(&json).unwrap();
    assert_eq!(summary.condition, "Spondyloarthritis");
    assert_eq!(summary.data.len(), 4);
    assert!(summary.faults.is_empty());

    let verdicts: Vec<Verdict> = summary.scores.iter().map(|s| s.verdict).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::SmallIncrease,
            Verdict::HighOpportunity,
            Verdict::HighOpportunity
        ]
    );
    assert_eq!(summary.scores[0].relative_risk, Some(0.25));
}

#[rstest]
fn test_scan_from_config(path_to_data: PathBuf) {
    let out = tempdir().unwrap();
    let config = out.path().join("scan.yaml");
    let json = out.path().join("mthfr.json");

    std::fs::write(
        &config,
        format!(
            "condition: mthfr\ndatabase: {}\ngenotypes: {}\nformat: tsv\noutput: {}\njson: {}\n",
            path_str(&path_to_data.join("snpdb_mthfr.csv")),
            path_str(&path_to_data.join("genome.txt")),
            path_str(&out.path().join("mthfr.tsv")),
            path_str(&json),
        ),
    )
    .unwrap();

    let output = snpscan(&["scan", "--config", path_str(&config)]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let summary = read_summary_json(&json).unwrap();
    assert_eq!(summary.condition, "MTHFR");
    assert_eq!(summary.scores.len(), 1);
    assert_eq!(summary.scores[0].verdict, Verdict::SmallIncrease);
    assert!(out.path().join("mthfr.tsv").exists());
}

#[rstest]
fn test_missing_database_writes_nothing(path_to_data: PathBuf) {
    let out = tempdir().unwrap();
    let tsv = out.path().join("results.tsv");

    let output = snpscan(&[
        "scan",
        path_str(&path_to_data.join("genome.txt")),
        "--db",
        "no/such/snpdb.csv",
        "--output",
        path_str(&tsv),
        "--json",
        path_str(&out.path().join("results.json")),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no/such/snpdb.csv"));
    assert!(!tsv.exists());
}

#[rstest]
fn test_unwritable_summary_writes_nothing(path_to_data: PathBuf) {
    let out = tempdir().unwrap();
    let tsv = out.path().join("results.tsv");
    let blocker = out.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let output = snpscan(&[
        "scan",
        path_str(&path_to_data.join("genome.txt")),
        "--db",
        path_str(&path_to_data.join("snpdb_sa.csv")),
        "--output",
        path_str(&tsv),
        "--json",
        path_str(&blocker.join("results.json")),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("blocker"));
    assert!(!tsv.exists());
}

#[rstest]
fn test_missing_default_database_points_to_db_flag(path_to_data: PathBuf) {
    let out = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_snpscan"))
        .current_dir(out.path())
        .args([
            "scan",
            path_str(&path_to_data.join("genome.txt")),
            "--condition",
            "mthfr",
        ])
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("db/snpdb_mthfr.csv"));
    assert!(stderr.contains("--db"));
    assert!(!out.path().join("results.tsv").exists());
}

#[rstest]
fn test_unknown_condition() {
    let output = snpscan(&["scan", "genome.txt", "--condition", "asthma"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Available conditions"));
}

#[rstest]
fn test_list_conditions() {
    let output = snpscan(&["conditions"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let keys: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(keys, vec!["mthfr", "neuropsych", "spondyloarthritis"]);
}
