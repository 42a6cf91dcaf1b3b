mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Edit a monthly duty schedule stored in a sheet web app")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the schedule grid for a month
    Show {
        /// Month to show, e.g. "2024-03" (defaults to the current month)
        month: Option<String>,

        /// Show the month before the selected one
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after the selected one
        #[arg(long, conflicts_with = "prev")]
        next: bool,
    },
    /// Set the entry for one day
    Set {
        /// Day to edit, e.g. "2024-03-05"
        date: String,

        /// Entry content; surrounding whitespace is trimmed
        #[arg(trailing_var_arg = true)]
        content: Vec<String>,
    },
    /// Print the stored entry for one day
    Get {
        /// Day to look up, e.g. "2024-03-05"
        date: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    roster_core::init()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Show { month, prev, next } => {
            commands::show::run(month.as_deref(), prev, next).await
        }
        Commands::Set { date, content } => commands::set::run(&date, &content.join(" ")).await,
        Commands::Get { date } => commands::get::run(&date).await,
    }
}
