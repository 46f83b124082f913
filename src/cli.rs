use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, error::ErrorKind};
use tracing::{error, info};

use crate::config::{NormalizerConfig, resolve_dataset_dir, resolve_seed};
use crate::constants::dataset::DATASET_TAG;
use crate::metrics::CorpusStats;
use crate::pipeline::Normalizer;
use crate::relations::StancePolicy;
use crate::splits::SplitLabel;
use crate::verify::verify_file;

#[derive(Debug, Parser)]
#[command(
    name = "argcorpus",
    version,
    disable_help_subcommand = true,
    about = "Normalize argument-mining splits into a position/premise JSON-lines graph",
    after_help = "The dataset directory and seed are resolved in order by explicit arg, environment variables (ARGCORPUS_DATASET_DIR, ARGCORPUS_SEED), then project defaults."
)]
struct ArgcorpusCli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read the three split files and write the normalized corpus
    Normalize(NormalizeArgs),
    /// Check graph invariants of an existing corpus file
    Verify(VerifyArgs),
}

#[derive(Debug, Args)]
struct NormalizeArgs {
    #[arg(
        long = "dataset-dir",
        value_name = "DIR",
        help = "Directory holding the split files"
    )]
    dataset_dir: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Output path (defaults to touche23.jsonl inside the dataset directory)"
    )]
    output: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "Training split file name override")]
    train_file: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "Validation split file name override")]
    validation_file: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "Test split file name override")]
    test_file: Option<PathBuf>,
    #[arg(long, help = "Seed for content ids")]
    seed: Option<u64>,
    #[arg(
        long = "dataset-tag",
        default_value = DATASET_TAG,
        help = "Tag written on every node"
    )]
    dataset_tag: String,
    #[arg(
        long = "strict-stance",
        help = "Fail on stances other than 'against' and 'in favor of'"
    )]
    strict_stance: bool,
    #[arg(long, help = "Print corpus statistics as JSON after writing")]
    stats: bool,
}

#[derive(Debug, Args)]
struct VerifyArgs {
    #[arg(value_name = "PATH", help = "JSON-lines corpus to verify")]
    path: PathBuf,
}

impl NormalizeArgs {
    fn into_config(self) -> Result<NormalizerConfig, Box<dyn Error>> {
        let seed = resolve_seed(self.seed)?;
        let mut config = NormalizerConfig::new(resolve_dataset_dir(self.dataset_dir))
            .with_seed(seed)
            .with_dataset_tag(self.dataset_tag)
            .with_stance_policy(if self.strict_stance {
                StancePolicy::Strict
            } else {
                StancePolicy::Lenient
            });
        if let Some(output) = self.output {
            config = config.with_output(output);
        }
        for (split, file) in [
            (SplitLabel::Train, self.train_file),
            (SplitLabel::Validation, self.validation_file),
            (SplitLabel::Test, self.test_file),
        ] {
            if let Some(file) = file {
                config = config.with_split_file(split, file);
            }
        }
        Ok(config)
    }
}

/// Parse `args` (without the program name) and run the selected command.
pub fn run<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) =
        parse_cli::<ArgcorpusCli, _>(std::iter::once("argcorpus".to_string()).chain(args))?
    else {
        return Ok(());
    };

    match cli.command {
        Command::Normalize(args) => run_normalize(args),
        Command::Verify(args) => run_verify(args),
    }
}

/// Log a failed run once and map it to a process exit code.
pub fn exit_code(result: Result<(), Box<dyn Error>>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("[argcorpus:cli] {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_normalize(args: NormalizeArgs) -> Result<(), Box<dyn Error>> {
    let print_stats = args.stats;
    let normalizer = Normalizer::new(args.into_config()?)?;
    let report = normalizer.run()?;

    println!(
        "wrote {} lines ({} positions, {} premises from {} rows) to {}",
        report.lines_written,
        report.stats.positions,
        report.stats.premises,
        report.input_rows,
        report.output.display()
    );
    if print_stats {
        print_stats_json(&report.stats)?;
    }
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), Box<dyn Error>> {
    let summary = verify_file(&args.path)?;
    info!("[argcorpus:verify] {} is consistent", args.path.display());
    println!(
        "ok: {} positions, {} premises, dataset={}",
        summary.stats.positions,
        summary.stats.premises,
        summary.dataset_tag.as_deref().unwrap_or("-")
    );
    print_stats_json(&summary.stats)
}

fn print_stats_json(stats: &CorpusStats) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
