use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "fynd")]
#[command(about = "Fynd CLI - drive the match feed against a local seed file", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/fynd/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates for a seeded user and swipe through them
    Feed {
        /// JSON seed file: {"users": {"<id>": {...}}}
        #[arg(long)]
        seed: PathBuf,
        /// Id of the user whose feed is shown
        #[arg(long)]
        user: String,
        /// Number of cards to swipe (alternating right and left)
        #[arg(long, default_value_t = 0)]
        swipes: usize,
    },
    /// Print the age for a d/m/yyyy date of birth
    Age {
        dob: String,
        /// Reference date (d/m/yyyy); defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    fynd_infrastructure::init_tracing("info");
    let cli = Cli::parse();

    match cli.command {
        Commands::Feed { seed, user, swipes } => {
            commands::feed::run(cli.config.as_deref(), &seed, &user, swipes).await?
        }
        Commands::Age { dob, today } => commands::age::run(&dob, today.as_deref())?,
        Commands::Config => commands::config::show(cli.config.as_deref())?,
    }

    Ok(())
}
