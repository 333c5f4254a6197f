use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "herodex")]
#[command(about = "A terminal-based hero registry", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the hero data file, one JSON record per line
    /// (or set HERODEX_FILE)
    #[arg(value_name = "FILE", env = "HERODEX_FILE")]
    pub file: Option<PathBuf>,

    /// Keep records in memory only, seeded with sample heroes
    #[arg(long, conflicts_with_all = ["file", "sqlite"])]
    pub memory: bool,

    /// Use a SQLite database at the given path (requires a build with
    /// the sqlite feature)
    #[arg(long, value_name = "DB", env = "HERODEX_DB")]
    pub sqlite: Option<PathBuf>,

    /// Rows displayed per page (must be at least 1)
    #[arg(long, env = "HERODEX_ROWS_PER_PAGE")]
    pub rows_per_page: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
