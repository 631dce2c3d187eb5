use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process};

use crate::config::Config;
use survey_core::usecases;
use survey_db_sqlite::Connections;

#[derive(Parser)]
#[command(version, about = "Patient satisfaction survey")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an identifier without accessing the database
    Check {
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
    },
}

pub async fn run(args: Args) -> Result<()> {
    let Args {
        config_file,
        db_url,
        enable_cors,
        command,
    } = args;

    if let Some(Command::Check { identifier }) = command {
        check_identifier(&identifier);
        return Ok(());
    }

    let mut cfg = Config::try_load_from_file_or_default(config_file)?;
    if let Some(db_url) = db_url {
        cfg.db.url = db_url;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    if cfg.db.is_in_memory() {
        log::warn!(
            "Running in demo mode: Survey responses will be lost on shutdown \
             and all requests are served by a single database connection"
        );
    }
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.url,
        cfg.db.pool_size
    );
    let connections = Connections::init(&cfg.db)?;

    survey_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}

fn check_identifier(identifier: &str) {
    let check = usecases::check_identifier(identifier);
    if check.is_valid() {
        println!("{}: {}", check.identifier, check.message());
    } else {
        eprintln!("{}: {}", check.identifier, check.message());
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_server_args() {
        let args =
            Args::try_parse_from(["survey", "--db-url", ":memory:", "--enable-cors"]).unwrap();
        assert_eq!(Some(":memory:"), args.db_url.as_deref());
        assert!(args.enable_cors);
        assert!(args.command.is_none());
    }

    #[test]
    fn parse_check_subcommand() {
        let args = Args::try_parse_from(["survey", "check", "V-12345678"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Check { identifier }) if identifier == "V-12345678"
        ));
    }

    #[test]
    fn require_identifier_for_check() {
        assert!(Args::try_parse_from(["survey", "check"]).is_err());
    }
}
