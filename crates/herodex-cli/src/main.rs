mod cli;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use herodex_core::AppConfig;
use herodex_domain::Hero;
use herodex_persistence::{JsonlStore, MemoryStore, RecordStore};
use herodex_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Raw-mode terminals eat stderr; debugging goes to a file instead.
    if let Ok(log_path) = std::env::var("HERODEX_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "herodex", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let rows_per_page = cli
        .rows_per_page
        .unwrap_or_else(|| config.effective_rows_per_page(10));
    if rows_per_page < 1 {
        anyhow::bail!("--rows-per-page must be at least 1");
    }

    let store = build_store(&cli, &config).await?;
    let mut app = App::new(store, rows_per_page)?;
    app.run().await?;

    Ok(())
}

async fn build_store(cli: &Cli, config: &AppConfig) -> anyhow::Result<Box<dyn RecordStore>> {
    if cli.memory {
        return Ok(Box::new(seeded_memory_store()));
    }

    if let Some(db_path) = &cli.sqlite {
        #[cfg(feature = "sqlite")]
        {
            let store = herodex_persistence::SqliteStore::open(db_path)
                .await
                .with_context(|| format!("opening sqlite database {}", db_path.display()))?;
            return Ok(Box::new(store));
        }
        #[cfg(not(feature = "sqlite"))]
        {
            anyhow::bail!(
                "{} requested, but this build has no sqlite support (enable the `sqlite` feature)",
                db_path.display()
            );
        }
    }

    let path = match cli.file.clone().or_else(|| config.data_file.clone()) {
        Some(path) => path,
        None => std::env::current_dir()
            .context("resolving current directory")?
            .join("herodex.jsonl"),
    };
    let store = JsonlStore::open(&path)
        .await
        .with_context(|| format!("opening data file {}", path.display()))?;
    Ok(Box::new(store))
}

fn seeded_memory_store() -> MemoryStore {
    let seed = [
        ("Superman", (1938, 6, 1), "Clark", "Kent"),
        ("Batman", (1939, 5, 1), "Bruce", "Wayne"),
        ("Wonder Woman", (1941, 10, 1), "Diana", "Prince"),
        ("Flash", (1940, 1, 1), "Jay", "Garrick"),
        ("Green Lantern", (1940, 7, 1), "Alan", "Scott"),
    ];
    let heroes = seed
        .into_iter()
        .filter_map(|(alias, (y, m, d), first, last)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|debut| {
                Hero::new(alias.to_string(), debut, first.to_string(), last.to_string())
            })
        })
        .collect();
    MemoryStore::with_heroes(heroes)
}
