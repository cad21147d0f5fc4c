use clap::{ArgAction, Parser};
use grep_fas::{Config, ConfigRequest, GrepFasError, LineReader, RecordFilter};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Like grep, but for fasta/fastq sequences.
///
/// Reads records from stdin and prints those whose description line matches.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Print description lines (`-d=false` to hide them).
    #[arg(
        short = 'd',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    descriptions: bool,

    /// Print sequence lines (`-s=false` to hide them).
    #[arg(
        short = 's',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    sequences: bool,

    /// Match the first sequence only.
    #[arg(short = '1')]
    first: bool,

    /// Match the numbered sequences (zero-based, separated by commas) instead of a pattern.
    #[arg(short = 'n')]
    numbered: bool,

    /// File with one pattern per line; a record matches if any of them does.
    /// Takes precedence over PATTERN.
    #[arg(short = 'l', value_name = "PATH")]
    gene_list: Option<PathBuf>,

    /// Regular expression, or record numbers with -n.
    pattern: Option<String>,
}

impl From<Args> for ConfigRequest {
    fn from(args: Args) -> Self {
        Self {
            pattern: args.pattern,
            numbered: args.numbered,
            gene_list: args.gene_list,
            print_description: args.descriptions,
            print_sequence: args.sequences,
            first_only: args.first,
        }
    }
}

fn run(args: Args) -> Result<(), GrepFasError> {
    let config = Config::resolve(args.into())?;
    let mut input = LineReader::stdin()?;
    // line-buffered, so matches reach the pipe as they are found
    let mut out = io::stdout().lock();
    RecordFilter::new(config).run(&mut input, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            log::debug!("output closed early: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("grep-fas: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
