//! SGIR CLI - regional security intelligence console
//!
//! Authenticates a directory identity, then runs one catalog query and
//! prints the visible results. Everything the user sees has already
//! passed the regional access policy; the CLI itself makes no
//! visibility decisions.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter (overridden by `--debug`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sgir_auth::{Directory, LogoutReason, RegionalPolicy, Session};
use sgir_catalog::{Catalog, SearchHit};
use sgir_types::Regional;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// SGIR - regional security intelligence console
#[derive(Parser, Debug)]
#[command(name = "sgir")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory identity to authenticate as
    #[arg(short, long)]
    user: String,

    /// Credential for the identity (omit to skip the check)
    #[arg(short, long)]
    credential: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the authenticated identity
    Whoami,
    /// List visible intelligence documents
    Documents {
        /// Case-insensitive text filter
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List visible tasks
    Tasks {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List visible background checks
    Checks {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List visible occurrences
    Occurrences {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List visible OSINT news
    News {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Search documents, checks, and tasks (top 5 hits)
    Search {
        /// Query text (minimum 2 characters)
        query: String,
    },
    /// Show the weather snapshot for a region
    Weather {
        /// Region code: SP, MS, BA, SP-Porto, or Global
        regional: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Terminal filter: --debug > RUST_LOG env > default "warn"
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let directory = Arc::new(Directory::builtin().context("loading identity directory")?);
    let catalog = Catalog::builtin().context("loading catalog seed")?;
    let mut session = Session::new(directory);
    let policy = RegionalPolicy;

    session
        .authenticate(&args.user, args.credential.as_deref())
        .with_context(|| format!("authenticating {:?}", args.user))?;
    debug!(user = %args.user, "authenticated");

    run(&args.command, &session, &policy, &catalog)?;

    session.logout(LogoutReason::UserLogout);
    Ok(())
}

fn run(
    command: &Command,
    session: &Session,
    policy: &RegionalPolicy,
    catalog: &Catalog,
) -> Result<()> {
    match command {
        Command::Whoami => {
            let identity = session.current().context("session expired")?;
            println!("{} — {} ({})", identity.name, identity.role, identity.regional);
            for permission in &identity.permissions {
                println!("  permission: {permission}");
            }
        }
        Command::Documents { filter } => {
            for doc in catalog.documents(session, policy, filter.as_deref()) {
                println!(
                    "[{}] {} — {} ({}, {:?})",
                    doc.id, doc.title, doc.author, doc.regional, doc.status
                );
            }
        }
        Command::Tasks { filter } => {
            for task in catalog.tasks(session, policy, filter.as_deref()) {
                println!(
                    "#{} {} — {} ({}, {:?}, due {})",
                    task.id, task.title, task.assigned_to, task.regional, task.status, task.due_date
                );
            }
        }
        Command::Checks { filter } => {
            for check in catalog.checks(session, policy, filter.as_deref()) {
                println!(
                    "#{} {} @ {} — {:?}, risk {:?} ({})",
                    check.id, check.name, check.company, check.status, check.risk_level,
                    check.regional
                );
            }
        }
        Command::Occurrences { filter } => {
            for occurrence in catalog.occurrences(session, policy, filter.as_deref()) {
                println!(
                    "#{} {:?} ({}) — {}",
                    occurrence.id, occurrence.kind, occurrence.regional, occurrence.description
                );
            }
        }
        Command::News { filter } => {
            for item in catalog.news(session, policy, filter.as_deref()) {
                println!("{} — {} ({})", item.title, item.source, item.regional);
            }
        }
        Command::Search { query } => {
            let hits = catalog.search(session, policy, query);
            if hits.is_empty() {
                println!("no results");
            }
            for hit in hits {
                match hit {
                    SearchHit::Document(doc) => println!("document: [{}] {}", doc.id, doc.title),
                    SearchHit::Check(check) => {
                        println!("check: #{} {} @ {}", check.id, check.name, check.company);
                    }
                    SearchHit::Task(task) => println!("task: #{} {}", task.id, task.title),
                }
            }
        }
        Command::Weather { regional } => {
            let regional = Regional::from_str(regional)
                .with_context(|| format!("unknown region {regional:?}"))?;
            let report = catalog
                .weather(regional)
                .with_context(|| format!("no weather data for {regional}"))?;
            match (report.temp, report.humidity, report.wind) {
                (Some(temp), Some(humidity), Some(wind)) => {
                    println!("{regional}: {temp}°C, humidity {humidity}%, wind {wind} km/h");
                }
                _ => println!("{regional}: no measurements"),
            }
            println!("fire risk: {}", report.risk);
            println!("{}", report.forecast);
        }
    }
    Ok(())
}
