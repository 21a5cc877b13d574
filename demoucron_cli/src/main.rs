use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, solve::SolveArgs, solve_dataset::SolveDatasetArgs};

mod file_utils;
mod generate;
mod render;
mod solve;
mod solve_dataset;

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
    /// Solve a single request file
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Solve every request file in a folder
    SolveDataset {
        #[command(flatten)]
        args: SolveDatasetArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Solve { args }) => solve::run(args)?,
        Some(Commands::SolveDataset { args }) => solve_dataset::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
