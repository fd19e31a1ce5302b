pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "skincircuit",
    about = "SkinCircuit skincare advisor CLI",
    long_about = "Resolve product links, ask the advisor, build routines, and inspect runtime readiness.",
    after_help = "Examples:\n  skincircuit recommend --skin-type oily --category toner --category serum\n  skincircuit ask how often should I exfoliate\n  skincircuit routine --skin-type dry --concern Dullness\n  skincircuit doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Resolve product links for one or more categories")]
    Recommend {
        #[arg(long, help = "Skin type key, e.g. oily, dry, combination")]
        skin_type: String,
        #[arg(long = "category", help = "Product category; repeat for several")]
        categories: Vec<String>,
    },
    #[command(about = "Ask the advisor a free-text skincare question")]
    Ask {
        #[arg(trailing_var_arg = true, help = "Question text")]
        words: Vec<String>,
    },
    #[command(about = "Build the fixed five-step routine for a skin type")]
    Routine {
        #[arg(long, help = "Skin type label")]
        skin_type: String,
        #[arg(long = "concern", help = "Skin concern; the first one is the routine focus")]
        concerns: Vec<String>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, catalog, rule table, and frontend directory")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend { skin_type, categories } => {
            commands::recommend::run(&skin_type, &categories)
        }
        Command::Ask { words } => commands::ask::run(&words),
        Command::Routine { skin_type, concerns } => commands::routine::run(&skin_type, &concerns),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
