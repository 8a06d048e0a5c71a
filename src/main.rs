//! Console front end for the check-in register.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkin::{
    config::{CheckinConfig, StorageMode},
    enrollment::{Enrollment, EnrollmentDraft},
    types::DEFAULT_DATA_PATH,
};

/// Attendee check-in register
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backing file for enrollments
    #[arg(long, value_name = "FILE", env = "CHECKIN_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Keep records in memory only; nothing is read or written
    #[arg(long)]
    in_memory: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER", default_value = "info")]
    log: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an attendee
    Register {
        /// Attendee name (defaults to a placeholder)
        #[arg(long)]
        name: Option<String>,
        /// Identity document
        #[arg(long)]
        document: Option<String>,
        /// Course (defaults to "Prog 1")
        #[arg(long)]
        course: Option<String>,
    },

    /// List every enrollment in registration order
    List {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Search by name or document, ignoring case
    Search {
        /// Text to look for; empty matches everything
        query: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show totals per course
    Summary {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Register the three demo attendees
    Demo,
}

impl Cli {
    fn config(&self) -> CheckinConfig {
        let storage = if self.in_memory {
            StorageMode::InMemory
        } else {
            StorageMode::File(self.data.clone())
        };
        CheckinConfig {
            storage,
            log_filter: self.log.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut store = config.open_store().context("Failed to load enrollments")?;

    match cli.command {
        Commands::Register {
            name,
            document,
            course,
        } => {
            let rec = store.register(EnrollmentDraft {
                name,
                document,
                course,
            });
            println!("Registered: {}", render(rec));
        }
        Commands::List { json } => {
            print_records(store.list().iter(), json)?;
        }
        Commands::Search { query, json } => {
            print_records(store.search(&query).into_iter(), json)?;
        }
        Commands::Summary { json } => {
            let summary = store.summarize();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }
        }
        Commands::Demo => {
            store.load_demo_data();
            println!("Demo data loaded ({} enrollments total)", store.len());
        }
    }

    Ok(())
}

fn print_records<'a>(records: impl Iterator<Item = &'a Enrollment>, json: bool) -> Result<()> {
    if json {
        let records: Vec<&Enrollment> = records.collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut count = 0usize;
    for rec in records {
        println!("{}", render(rec));
        count += 1;
    }
    if count == 0 {
        println!("(no enrollments)");
    }
    Ok(())
}

fn render(rec: &Enrollment) -> String {
    format!(
        "{}  {}  [{}]  {}",
        rec.timestamp().format("%Y-%m-%d %H:%M:%S"),
        rec.name(),
        rec.document(),
        rec.course()
    )
}
