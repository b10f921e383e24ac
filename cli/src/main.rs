//! Tally CLI - binary entry point.
//!
//! ```text
//! tally calc [--registers] [KEYS]...      one-shot evaluation, or a session on stdin
//! tally loan --rate R --years N (--amount A | --keys K)
//! tally contacts [--db PATH] <list|add|update|delete|seed>
//! tally config
//! ```
//!
//! Logs go to `~/.tally/logs/tally.log`, never to the terminal. The filter is
//! `RUST_LOG`, else `[log] filter` from the config file, else `info`.

mod contacts;
mod session;

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tally_config::TallyConfig;
use tally_contacts::{ContactStore, sample_contacts};
use tally_core::Accumulator;
use tally_core::loan::{LoanTerms, format_payment, monthly_payment};

use crate::contacts::ContactsCommand;

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Four-function register calculator, loan payments and a contacts book"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a key sequence, or read key lines from stdin when none is given
    Calc {
        /// Also print the Y and operator registers
        #[arg(long)]
        registers: bool,
        /// Keys such as `3 + 12 =` or `3+12=`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Monthly payment of a fixed-rate loan
    Loan(LoanArgs),
    /// Manage the contacts database
    Contacts {
        /// Database file (overrides TALLY_CONTACTS_DB and the config file)
        #[arg(long)]
        db: Option<PathBuf>,
        #[command(subcommand)]
        command: ContactsCommand,
    },
    /// Show the config file location and the effective settings
    Config,
}

#[derive(Debug, Args)]
struct LoanArgs {
    /// Principal amount
    #[arg(long, required_unless_present = "keys")]
    amount: Option<String>,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: String,
    /// Term in years
    #[arg(long)]
    years: String,
    /// Calculator keys whose result is used as the amount
    #[arg(long, conflicts_with = "amount", allow_hyphen_values = true)]
    keys: Option<String>,
}

const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` wins over `[log] filter` in the config file.
fn init_tracing(config: &TallyConfig) {
    let mut init_warnings = Vec::new();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        configured_filter(config.log.filter.as_deref(), &mut init_warnings)
    });

    let (log_file, file_warnings) = open_log_file();
    init_warnings.extend(file_warnings);

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: drop events rather than mixing them into command output.
    tracing_subscriber::registry().with(env_filter).init();
}

/// Filter from `[log] filter`; a blank or invalid value falls back to `info`.
fn configured_filter(directives: Option<&str>, warnings: &mut Vec<String>) -> EnvFilter {
    if let Some(directives) = directives.map(str::trim).filter(|d| !d.is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => warnings.push(format!("Ignoring [log] filter {directives:?}: {e}")),
        }
    }
    EnvFilter::new(DEFAULT_LOG_FILTER)
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.tally/logs/tally.log
    if let Some(config_path) = TallyConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("tally.log"));
    }

    // Fallback: ./.tally/logs/tally.log
    candidates.push(PathBuf::from(".tally").join("logs").join("tally.log"));

    candidates
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config before tracing: `[log] filter` feeds the subscriber.
    let (config, config_error) = match TallyConfig::load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (TallyConfig::default(), Some(err)),
    };
    init_tracing(&config);
    if let Some(err) = config_error {
        tracing::warn!(path = %err.path().display(), "using default settings: {err}");
        eprintln!("warning: {err}; using default settings");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Calc { registers, keys } => {
            let show_registers = registers || config.calculator.show_registers;
            if keys.is_empty() {
                session::run_session(io::stdin().lock(), out, show_registers)
                    .context("calculator session failed")?;
            } else {
                let display = run_calc(&keys.join(" "), show_registers)?;
                writeln!(out, "{display}")?;
            }
        }
        Command::Loan(args) => {
            writeln!(out, "{}", run_loan(args)?)?;
        }
        Command::Contacts { db, command } => {
            let path = config.contacts_db_path(db.as_deref());
            let mut store = ContactStore::open(&path).with_context(|| {
                format!("failed to open contacts database {}", path.display())
            })?;
            if config.contacts.seed_sample_data {
                store.seed_sample_data(&sample_contacts())?;
            }
            contacts::run(&mut store, command, &mut out)?;
        }
        Command::Config => {
            match TallyConfig::path() {
                Some(path) => writeln!(out, "config file: {}", path.display())?,
                None => writeln!(out, "config file: (no home directory)")?,
            }
            writeln!(out, "contacts db: {}", config.contacts_db_path(None).display())?;
            writeln!(out)?;
            write!(
                out,
                "{}",
                toml::to_string_pretty(&config).context("failed to render settings")?
            )?;
        }
    }

    Ok(())
}

/// Evaluate one key sequence on a fresh calculator.
fn run_calc(keys: &str, show_registers: bool) -> Result<String> {
    let mut acc = Accumulator::new();
    let state = session::evaluate_line(&mut acc, keys)?;
    Ok(session::render(&state, show_registers))
}

fn run_loan(args: LoanArgs) -> Result<String> {
    let amount = match (args.amount, args.keys) {
        (Some(amount), _) => amount,
        (None, Some(keys)) => {
            let mut acc = Accumulator::new();
            let state = session::evaluate_line(&mut acc, &keys)
                .context("failed to evaluate --keys")?;
            // X itself, not the display: an unfinished sequence leaves X empty.
            state.x().to_string()
        }
        (None, None) => anyhow::bail!("either --amount or --keys is required"),
    };

    let terms = LoanTerms::parse(&amount, &args.rate, &args.years)?;
    let payment = monthly_payment(&terms)?;
    tracing::info!(payment, "loan payment computed");
    Ok(format_payment(payment))
}
