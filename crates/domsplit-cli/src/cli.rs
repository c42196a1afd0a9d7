use clap::{Args, Parser, Subcommand};
use domsplit::engine::config::ScanStrategy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "DomSplit Developers",
    version,
    about = "DomSplit CLI - Locate structural domain boundaries in a protein chain by scoring every single-cut split of its CA contact map.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every interior cut position of a chain and report the split curve.
    Scan(ScanArgs),
    /// Build the contact map of a chain and write it as a 0/1 matrix.
    Contacts(ContactsArgs),
}

/// Input selection and contact settings shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the input structure file in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Chain identifier to analyse (default: A).
    #[arg(short, long, value_name = "CHAR")]
    pub chain: Option<char>,

    /// Atom name representing each residue (default: CA).
    #[arg(long, value_name = "NAME")]
    pub atom_name: Option<String>,

    /// Contact distance cutoff in Ångströms (default: 8.0).
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Path to an optional configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S contacts.cutoff=7.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Aggregation strategy for the per-cut counts: 'direct' or 'incremental'.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<ScanStrategy>,

    /// Path for the text report. Written to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append to the text report instead of overwriting it.
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Additionally write the score curve as CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Render the score curve as an SVG line chart at this path.
    #[arg(long, value_name = "PATH")]
    pub plot: Option<PathBuf>,
}

/// Arguments for the `contacts` subcommand.
#[derive(Args, Debug)]
pub struct ContactsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path for the matrix output. Written to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scan_arguments_parse() {
        let cli = Cli::try_parse_from([
            "domsplit",
            "-vv",
            "scan",
            "-i",
            "1gpz.pdb",
            "-c",
            "B",
            "--cutoff",
            "7.5",
            "--strategy",
            "direct",
            "-o",
            "out.txt",
            "--append",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.input.input, PathBuf::from("1gpz.pdb"));
        assert_eq!(args.input.chain, Some('B'));
        assert_eq!(args.input.cutoff, Some(7.5));
        assert_eq!(args.strategy, Some(ScanStrategy::Direct));
        assert!(args.append);
        assert!(args.plot.is_none());
    }

    #[test]
    fn plot_path_parses() {
        let cli = Cli::try_parse_from([
            "domsplit", "scan", "-i", "1gpz.pdb", "--plot", "curve.svg",
        ])
        .unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.plot, Some(PathBuf::from("curve.svg")));
    }

    #[test]
    fn append_requires_output() {
        let result = Cli::try_parse_from(["domsplit", "scan", "-i", "x.pdb", "--append"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let result =
            Cli::try_parse_from(["domsplit", "scan", "-i", "x.pdb", "--strategy", "fastest"]);
        assert!(result.is_err());
    }
}
