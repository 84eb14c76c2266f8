//! Print xUnit `[InlineData("...")]` lines for the test resources in a directory.
//!
//! Run it from a resource directory (e.g. `Resources/v1.5`) or pass the
//! directory as an argument. Files are grouped into XML, JSON and protobuf
//! text format sections; everything else is ignored.

mod core;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Print [InlineData] lines for test resource files"
)]
struct Cli {
    /// Directory to list (defaults to `.`).
    #[arg(default_value = ".")]
    path: PathBuf,
}

// ───────────────────────────────────────── run ───────────────

/// List `dir`, group its resource files and write the report to `out`.
///
/// The report is fully rendered before anything is written, so a listing
/// failure leaves `out` untouched.
fn run(dir: &Path, out: &mut impl Write) -> Result<()> {
    let entries = core::fs::list_entries(dir)?;
    tracing::debug!(dir = %dir.display(), count = entries.len(), "listed");

    let buckets = core::grouping::group_entries(entries);
    let report = core::report::render(&buckets);

    out.write_all(report.as_bytes()).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    run(&cli.path, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    fn report_for(dir: &Path) -> String {
        let mut out = Vec::new();
        run(dir, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn mixed_directory() {
        let dir = tempdir().unwrap();
        for name in ["b.xml", "a.xml", "x.json", "readme.md", "data.textproto"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let report = report_for(dir.path());

        assert_eq!(
            report,
            "\nXML Entries\n\n\
             [InlineData(\"a.xml\")]\n\
             [InlineData(\"b.xml\")]\n\
             \nJSON Entries\n\n\
             [InlineData(\"x.json\")]\n\
             \nProtobuf Entries\n\n\
             [InlineData(\"data.textproto\")]\n"
        );
        assert!(!report.contains("readme.md"));
    }

    #[test]
    fn empty_directory_prints_headers_only() {
        let dir = tempdir().unwrap();
        assert_eq!(
            report_for(dir.path()),
            "\nXML Entries\n\n\n\nJSON Entries\n\n\n\nProtobuf Entries\n\n\n"
        );
    }

    #[test]
    fn subdirectories_never_appear() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("v1.4.xml")).unwrap();
        fs::create_dir(dir.path().join("snapshots.json")).unwrap();
        fs::write(dir.path().join("v1.4.xml.txt"), "").unwrap();

        let report = report_for(dir.path());
        assert!(!report.contains("InlineData"));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dir = tempdir().unwrap();
        for name in ["valid-bom-1.5.json", "valid-bom-1.5.xml", "valid-bom-1.5.textproto"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        assert_eq!(report_for(dir.path()), report_for(dir.path()));
    }

    #[test]
    fn missing_directory_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();

        let err = run(&dir.path().join("gone"), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(err.downcast_ref::<crate::core::fs::ListError>().is_some());
    }

    #[test]
    fn cli_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["inline-data"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));

        let cli = Cli::try_parse_from(["inline-data", "Resources/v1.5"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("Resources/v1.5"));
    }
}
