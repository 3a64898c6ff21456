use anyhow::{Context, Result};
use clap::Parser;
use log::{error, warn};

use handle_matcher::cli::{Cli, Command};
use handle_matcher::matching::compare_email_name;
use handle_matcher::normalize::collapsed_handle;
use handle_matcher::orchestrator::run_batch;
use handle_matcher::util::envfile::{
    load_dotenv_if_present, load_explicit_env_file, write_env_template,
};

fn main() {
    // env files must be loaded before clap reads its env fallbacks
    let raw_args: Vec<String> = std::env::args().collect();
    let missing_env_file = match preload_env(&raw_args) {
        Ok(missing) => missing,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(2);
        }
    };
    let cli = Cli::parse_from(raw_args);
    handle_matcher::logging::init();
    // the logger did not exist yet while preloading
    if let Some(path) = missing_env_file {
        warn!("env file {} not found; continuing without it", path);
    }

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Load `--env-file PATH` (or `--env-file=PATH`) first, then `.env`; earlier values win.
/// Returns the explicit path when that file does not exist.
fn preload_env(args: &[String]) -> Result<Option<String>> {
    let explicit = args.iter().enumerate().find_map(|(i, a)| {
        if a == "--env-file" {
            args.get(i + 1).cloned()
        } else {
            a.strip_prefix("--env-file=").map(str::to_string)
        }
    });
    let mut missing = None;
    if let Some(path) = explicit {
        let loaded = load_explicit_env_file(&path)
            .with_context(|| format!("Failed to load env file {}", path))?;
        if loaded.is_none() {
            missing = Some(path);
        }
    }
    load_dotenv_if_present().context("Failed to load .env")?;
    Ok(missing)
}

fn run(cli: Cli) -> Result<()> {
    if let Some(ref path) = cli.env_file {
        log::debug!("environment preloaded from {}", path);
    }
    match cli.command {
        Command::Check(args) => {
            let handle = collapsed_handle(Some(&args.email));
            let matched = compare_email_name(
                Some(&args.email),
                Some(&args.first_name),
                Some(&args.last_name),
            );
            println!(
                "{}\thandle={}",
                if matched { "match" } else { "no match" },
                handle
            );
        }
        Command::Batch(args) => {
            let cfg = args.to_app_config()?;
            let summary = run_batch(&cfg)?;
            println!(
                "{} of {} rows matched; results in {}",
                summary.matched, summary.total, cfg.batch.out_path
            );
        }
        Command::EnvTemplate { path } => {
            write_env_template(&path)?;
            println!("Wrote {}. Copy to .env and edit values as needed.", path);
        }
    }
    Ok(())
}
