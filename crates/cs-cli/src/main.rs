//! CLI frontend for the Cloudsect kubectl cultivation game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use cs_save::DEFAULT_SAVE_NAME;

#[derive(Parser)]
#[command(
    name = "cloudsect",
    about = "Cloudsect: cultivate your kubectl skills through a wuxia story",
    version,
    propagate_version = true
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new player and save it
    New {
        /// Player name
        name: String,

        /// Sect to join: azure, mystic, purgatory or carefree
        #[arg(short = 'S', long, default_value = "mystic")]
        sect: String,

        /// Save file name
        #[arg(short, long, default_value = DEFAULT_SAVE_NAME)]
        save: String,

        /// Overwrite an existing save
        #[arg(short, long)]
        force: bool,

        /// Save directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Play interactively, reading commands from stdin
    Play {
        /// Save file name
        #[arg(short, long, default_value = DEFAULT_SAVE_NAME)]
        save: String,

        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Only save when asked to
        #[arg(long)]
        no_autosave: bool,

        /// Save directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List the saves in a directory
    Saves {
        /// Save directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Rename a save
    Rename {
        /// Current save name
        from: String,

        /// New save name
        to: String,

        /// Save directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Delete a save
    Delete {
        /// Save name
        name: String,

        /// Save directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a player's progress
    Progress {
        /// Save file name
        #[arg(short, long, default_value = DEFAULT_SAVE_NAME)]
        save: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Save directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Browse the kubectl command catalog
    Commands {
        /// Only show one category (e.g. basic, network)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show one difficulty (1-5)
        #[arg(short = 'D', long)]
        difficulty: Option<u8>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::New {
            name,
            sect,
            save,
            force,
            dir,
        } => commands::new::run(&dir, &name, &sect, &save, force),
        Commands::Play {
            save,
            seed,
            no_autosave,
            dir,
        } => commands::play::run(&dir, &save, seed, !no_autosave),
        Commands::Saves { dir } => commands::saves::run(&dir),
        Commands::Rename { from, to, dir } => commands::rename::run(&dir, &from, &to),
        Commands::Delete { name, dir } => commands::delete::run(&dir, &name),
        Commands::Progress { save, json, dir } => commands::progress::run(&dir, &save, json),
        Commands::Commands {
            category,
            difficulty,
        } => commands::catalog::run(category.as_deref(), difficulty),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
