//! CLI entry point for mining frequent itemsets from a transaction file

use apriori::{load, report, MiningConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line arguments of the miner
#[derive(Parser)]
#[command(name = "apriori")]
#[command(version, about = "Find frequent itemsets with the Apriori algorithm")]
struct Cli {
    /// Consider items as integers instead of strings
    #[arg(short = 'n')]
    numeric: bool,

    /// Read SUPPORT as the share of transactions an itemset must occur in
    #[arg(short = 'p')]
    percentage: bool,

    /// Write the itemsets to this file instead of stdout
    #[arg(short = 'o', value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Only search itemsets up to this length
    #[arg(long, value_name = "N")]
    max_len: Option<usize>,

    /// Count candidates on all cores
    #[arg(long)]
    parallel: bool,

    /// Minimum support
    #[arg(value_name = "SUPPORT", allow_negative_numbers = true)]
    support: f64,

    /// Transaction file, one transaction per line; stdin when omitted
    #[arg(value_name = "FILE")]
    filename: Option<PathBuf>,
}

/// Mine `FILE` (or `input` when no file is given) and report to `-o` (or `output`).
fn run<R: BufRead, W: Write>(cli: Cli, input: R, output: W) -> apriori::Result<()> {
    let transactions = match &cli.filename {
        Some(path) => load::read_transactions(path, cli.numeric)?,
        None => load::parse_transactions(input, cli.numeric)?,
    };

    let mut config = MiningConfig::new(cli.support, cli.percentage).parallel(cli.parallel);
    if let Some(max_len) = cli.max_len {
        config = config.max_len(max_len);
    }

    let frequent_itemsets = apriori::mine_with(&transactions, &config)?;

    match &cli.output {
        Some(path) => report::write_report(BufWriter::new(File::create(path)?), &frequent_itemsets),
        None => report::write_report(output, &frequent_itemsets),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse(), io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("apriori: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apriori::AprioriError;
    use std::io::Cursor;

    const BASKETS: &str = "bread, milk\nbread, beer\nmilk, bread\n";

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("apriori").chain(args.iter().copied())).unwrap()
    }

    fn run_on_stdin(args: &[&str], input: &str) -> apriori::Result<String> {
        let mut out = Vec::new();
        run(cli(args), Cursor::new(input), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn reads_stdin_and_writes_stdout() {
        let out = run_on_stdin(&["2"], BASKETS).unwrap();
        assert_eq!(out, "{bread} : 3\n{milk} : 2\n{bread, milk} : 2\n");
    }

    #[test]
    fn percentage_and_numeric_flags() {
        let out = run_on_stdin(&["-n", "-p", "0.5"], "1 2\n2 3\n").unwrap();
        assert_eq!(
            out,
            "{1} : 0.5\n{2} : 1\n{3} : 0.5\n{1, 2} : 0.5\n{2, 3} : 0.5\n"
        );
    }

    #[test]
    fn max_len_flag() {
        let out = run_on_stdin(&["--max-len", "1", "2"], BASKETS).unwrap();
        assert_eq!(out, "{bread} : 3\n{milk} : 2\n");
    }

    #[test]
    fn reads_file_and_writes_output_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, "{}", BASKETS).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("frequent.txt");

        let mut stdout = Vec::new();
        run(
            cli(&[
                "-o",
                output.to_str().unwrap(),
                "3",
                input.path().to_str().unwrap(),
            ]),
            Cursor::new(""),
            &mut stdout,
        )
        .unwrap();

        assert!(stdout.is_empty());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "{bread} : 3\n");
    }

    #[test]
    fn errors_are_returned() {
        let err = run_on_stdin(&["-n", "2"], "1 x\n").unwrap_err();
        assert!(matches!(err, AprioriError::Parse { line: 1, .. }));

        let err = run_on_stdin(&["--", "-1"], BASKETS).unwrap_err();
        assert!(matches!(err, AprioriError::InvalidSupport { .. }));

        let err = run_on_stdin(&["-p", "0.5"], "").unwrap_err();
        assert!(matches!(err, AprioriError::EmptyInput));
    }

    #[test]
    fn missing_input_file() {
        let err = run(cli(&["1", "/nonexistent/baskets.txt"]), Cursor::new(""), Vec::new())
            .unwrap_err();
        assert!(matches!(err, AprioriError::Io(_)));
    }
}
