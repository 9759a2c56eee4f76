use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Plint Developers",
    version,
    about = "plint - detect non-covalent protein-ligand interactions (hydrogen bonds, hydrophobic contacts, pi-stacking, salt bridges, metal coordination) from pre-parsed atom sets.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the protein atom set (JSON array of atom records).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub protein: PathBuf,

    /// Path to the ligand atom set (JSON array of atom records).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub ligand: PathBuf,

    /// Detection thresholds (JSON object; omitted fields use defaults).
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Write the analysis result to this path instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
