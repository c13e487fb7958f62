use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tracing::info;

use crate::{generate::GenerateSubcommands, plan::PlanArgs};

mod file_utils;
mod generate;
mod map;
mod parsers;
mod plan;
mod report;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build delivery trips for an input file or every input in a folder
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Plan { args }) => plan::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => info!("Nothing to do, run with --help to list the commands"),
    }

    Ok(())
}
