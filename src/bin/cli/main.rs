mod app;
mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "woodshed-cli", about = "Drum practice scheduler CLI", version)]
struct Cli {
    /// Practitioner name (default: "default")
    #[arg(long, global = true)]
    practitioner: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a drill to the practice rotation
    Add {
        /// Drill name (e.g. "Single paradiddle")
        name: String,
        /// Drill kind: rudiment, groove, fill, or song
        #[arg(long)]
        kind: Option<String>,
        /// Short description
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Target tempo in BPM
        #[arg(long)]
        tempo: Option<i32>,
    },

    /// List all drills with their scheduling state
    List,

    /// Show today's practice sheet (overdue first, then due today)
    Due,

    /// Record a review outcome for a drill
    Review {
        /// Drill name (case-insensitive prefix match)
        drill: String,
        /// Recall grade, 0 (blackout) to 5 (perfect)
        grade: i32,
    },

    /// Show practice statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.practitioner.as_deref())?;

    match cli.command {
        Command::Add {
            name,
            kind,
            description,
            tags,
            tempo,
        } => {
            commands::add::run(
                &app,
                &name,
                kind.as_deref(),
                description,
                tags.as_deref(),
                tempo,
                &cli.format,
            )?;
        }
        Command::List => {
            commands::list::run(&app, &cli.format)?;
        }
        Command::Due => {
            commands::due::run(&app, &cli.format)?;
        }
        Command::Review { drill, grade } => {
            commands::review::run(&app, &drill, grade, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
