use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use trimerge::areas::comparer::Comparer;
use trimerge::artifacts::core::PagerWriter;
use trimerge::artifacts::merge::resolution::{DefaultActionThreeWay, DefaultActionTwoWay};

#[derive(Parser)]
#[command(
    name = "trimerge",
    version = "0.1.0",
    about = "A line-based diff and three-way merge tool",
    long_about = "Compares text files line by line and merges concurrent changes \
    against a common base version, marking genuine conflicts with the usual \
    <<<<<<< / ||||||| / ======= / >>>>>>> markers.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Print a normal diff between two files",
        long_about = "This command compares a local and a remote file line by line \
        and prints the differences in the normal diff format."
    )]
    Diff {
        #[arg(index = 1, help = "The local file")]
        local: PathBuf,
        #[arg(index = 2, help = "The remote file")]
        remote: PathBuf,
    },
    #[command(
        name = "diff3",
        about = "Print a three-way diff against a common base",
        long_about = "This command compares a local and a remote file against their \
        common base version and prints the combined differences in the diff3 \
        normal format, marking each hunk with the sides that changed."
    )]
    Diff3 {
        #[arg(index = 1, help = "The local file")]
        local: PathBuf,
        #[arg(index = 2, help = "The base file")]
        base: PathBuf,
        #[arg(index = 3, help = "The remote file")]
        remote: PathBuf,
    },
    #[command(
        name = "merge",
        about = "Merge two files, marking every difference as a conflict",
        long_about = "This command merges a local and a remote file. Without a base \
        version every differing region is a conflict; the default action decides \
        whether it is written with conflict markers or resolved to one side."
    )]
    Merge {
        #[arg(index = 1, help = "The local file")]
        local: PathBuf,
        #[arg(index = 2, help = "The remote file")]
        remote: PathBuf,
        #[arg(short = 'o', long, help = "Write the result into this directory instead of in place")]
        output_dir: Option<PathBuf>,
        #[arg(
            long,
            value_enum,
            default_value = "write-conflicts",
            help = "How to resolve differing regions"
        )]
        default_action: DefaultActionTwoWay,
    },
    #[command(
        name = "merge3",
        about = "Merge local and remote changes against a common base",
        long_about = "This command merges concurrent local and remote changes against \
        their common base version. Regions changed on one side only merge cleanly; \
        the default action decides what happens to genuinely conflicting regions."
    )]
    Merge3 {
        #[arg(index = 1, help = "The local file")]
        local: PathBuf,
        #[arg(index = 2, help = "The base file")]
        base: PathBuf,
        #[arg(index = 3, help = "The remote file")]
        remote: PathBuf,
        #[arg(short = 'o', long, help = "Write the result into this directory instead of over the base file")]
        output_dir: Option<PathBuf>,
        #[arg(
            long,
            value_enum,
            default_value = "write-conflicts",
            help = "How to resolve conflicting regions"
        )]
        default_action: DefaultActionThreeWay,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Diff { local, remote } => {
            paged_report(|comparer| comparer.diff(local, remote))?
        }
        Commands::Diff3 {
            local,
            base,
            remote,
        } => paged_report(|comparer| comparer.diff3(local, base, remote))?,
        Commands::Merge {
            local,
            remote,
            output_dir,
            default_action,
        } => {
            let comparer = stdout_comparer()?;
            comparer.merge(local, remote, output_dir.as_deref(), *default_action)?
        }
        Commands::Merge3 {
            local,
            base,
            remote,
            output_dir,
            default_action,
        } => {
            let comparer = stdout_comparer()?;
            comparer.merge3(local, base, remote, output_dir.as_deref(), *default_action)?
        }
    }

    Ok(())
}

fn stdout_comparer() -> Result<Comparer> {
    let pwd = std::env::current_dir()?;

    Comparer::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}

/// Diff reports can be long, so they go through the pager when stdout is a
/// terminal and straight to stdout otherwise.
fn paged_report<F>(print: F) -> Result<()>
where
    F: FnOnce(&Comparer) -> Result<()>,
{
    if std::io::stdout().is_terminal() {
        let pwd = std::env::current_dir()?;
        let pager = Pager::new();
        let comparer = Comparer::new(
            &pwd.to_string_lossy(),
            Box::new(PagerWriter::new(pager.clone())),
        )?;

        print(&comparer)?;
        minus::page_all(pager)?;
    } else {
        print(&stdout_comparer()?)?;
    }

    Ok(())
}
