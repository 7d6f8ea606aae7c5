//! Command-line interface for titv.
//!
//! ## Usage
//!
//! ```text
//! # Count ti/tv over one file
//! titv --file calls.vcf.gz
//!
//! # Several files, first 10000 records of each
//! titv --file chr1.vcf --file chr2.vcf --nlimit 10000
//!
//! # JSON Lines output for scripting
//! titv --file calls.vcf --format json
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::core::variant::AltSelection;
use crate::counting::engine::{CountingConfig, CountingEngine, DEFAULT_PROGRESS_INTERVAL};
use crate::counting::report::{JsonReporter, Reporter, TextReporter, TsvReporter};
use crate::parsing::input::STDIN_PATH;

#[derive(Parser)]
#[command(name = "titv")]
#[command(version)]
#[command(about = "Count the transition/transversion ratio of SNPs in VCF files")]
#[command(
    long_about = "titv classifies every single-nucleotide substitution in one or more VCF files as a transition (A<->G, C<->T) or a transversion and reports the running ti/tv ratio.\n\nFiles are processed in the order given. Records that are not simple SNPs (indels, MNPs, symbolic alleles, ambiguous bases) are counted in the total but not in either class."
)]
pub struct Cli {
    /// VCF file to process (plain or gzip/BGZF, '-' for stdin); repeat for several files
    #[arg(long = "file", value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum number of records to process from each file
    #[arg(long, value_name = "N")]
    pub nlimit: Option<u64>,

    /// Report progress every N records across all files (0 disables)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Which alternate allele(s) of a multi-allelic record are classified
    #[arg(long, value_enum, default_value = "first")]
    pub alt_selection: AltSelection,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

impl Cli {
    #[must_use]
    pub fn counting_config(&self) -> CountingConfig {
        CountingConfig {
            nlimit: self.nlimit,
            progress_interval: self.progress_interval,
            alt_selection: self.alt_selection,
        }
    }
}

/// Process all input files and write reports to stdout
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed, or if output
/// cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    check_inputs(&cli.files)?;

    let stdout = io::stdout().lock();

    match cli.format {
        OutputFormat::Text => run_with(cli, &mut TextReporter::new(stdout)),
        OutputFormat::Json => run_with(cli, &mut JsonReporter::new(stdout)),
        OutputFormat::Tsv => run_with(cli, &mut TsvReporter::new(stdout)),
    }
}

/// Stdin can only be read once, so `-` may appear at most once
fn check_inputs(files: &[PathBuf]) -> anyhow::Result<()> {
    let stdin_count = files
        .iter()
        .filter(|path| path.as_os_str() == STDIN_PATH)
        .count();

    anyhow::ensure!(
        stdin_count <= 1,
        "'{STDIN_PATH}' (stdin) was given {stdin_count} times; it can only be read once"
    );
    Ok(())
}

fn run_with<P: Reporter>(cli: &Cli, reporter: &mut P) -> anyhow::Result<()> {
    let config = cli.counting_config();
    tracing::debug!(?config, files = cli.files.len(), "Starting run");

    let mut engine = CountingEngine::new(config);
    let snapshot = engine
        .process_files(&cli.files, reporter)
        .context("Failed to count transitions/transversions")?;

    if snapshot.ratio.value().is_none() {
        tracing::warn!("No transversions observed; ti/tv ratio is undefined");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_repeated_files() {
        let cli = Cli::try_parse_from([
            "titv", "--file", "a.vcf", "--file", "b.vcf", "--nlimit", "10",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.vcf"), PathBuf::from("b.vcf")]);
        let config = cli.counting_config();
        assert_eq!(config.nlimit, Some(10));
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
        assert_eq!(config.alt_selection, AltSelection::First);
    }

    #[test]
    fn test_file_required() {
        assert!(Cli::try_parse_from(["titv"]).is_err());
        assert!(Cli::try_parse_from(["titv", "--nlimit", "5"]).is_err());
    }

    #[test]
    fn test_alt_selection_flag() {
        let cli = Cli::try_parse_from([
            "titv",
            "--file",
            "a.vcf",
            "--alt-selection",
            "biallelic-only",
        ])
        .unwrap();
        assert_eq!(cli.alt_selection, AltSelection::BiallelicOnly);
    }

    #[test]
    fn test_stdin_given_once() {
        let files = vec![PathBuf::from("a.vcf"), PathBuf::from("-")];
        assert!(check_inputs(&files).is_ok());
    }

    #[test]
    fn test_stdin_given_twice_rejected() {
        let files = vec![PathBuf::from("-"), PathBuf::from("a.vcf"), PathBuf::from("-")];
        let err = check_inputs(&files).unwrap_err();
        assert!(err.to_string().contains("can only be read once"));
    }

    #[test]
    fn test_negative_nlimit_rejected() {
        assert!(Cli::try_parse_from(["titv", "--file", "a.vcf", "--nlimit", "-1"]).is_err());
    }
}
