//! Frisquet CLI - query Frisquet Connect sites from the terminal.
//!
//! Credentials come from `FRISQUET_EMAIL` / `FRISQUET_PASSWORD` (a `.env`
//! file is honoured), falling back to the saved email and a password prompt.

use std::io;

use anyhow::{bail, Context, Result};
use frisquet_core::auth::credentials::PASSWORD_ENV;
use frisquet_core::{ApiClient, Config, Credentials};
use futures::future::try_join_all;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "\
Usage: frisquet <command>

Commands:
  token            Print a fresh API token
  sites            List boiler IDs and site names
  site <id>        Dump the data of one site as JSON
  conso <id>       Dump heating and hot water consumption as JSON
  all              Dump the data of every site as JSON

Environment:
  FRISQUET_EMAIL, FRISQUET_PASSWORD, FRISQUET_API_URL, RUST_LOG";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Token,
    Sites,
    Site(String),
    Consumption(String),
    All,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let site_arg = || {
            args.get(1)
                .cloned()
                .with_context(|| format!("Missing site ID\n\n{}", USAGE))
        };
        let expected_args = match args.first().map(String::as_str) {
            Some("site" | "conso") => 2,
            _ => 1,
        };
        if args.len() > expected_args {
            bail!("Unexpected argument '{}'\n\n{}", args[expected_args], USAGE);
        }

        match args.first().map(String::as_str) {
            Some("token") => Ok(Command::Token),
            Some("sites") => Ok(Command::Sites),
            Some("site") => Ok(Command::Site(site_arg()?)),
            Some("conso") => Ok(Command::Consumption(site_arg()?)),
            Some("all") => Ok(Command::All),
            Some(other) => bail!("Unknown command '{}'\n\n{}", other, USAGE),
            None => bail!("{}", USAGE),
        }
    }
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn resolve_credentials(config: &Config) -> Result<Credentials> {
    let email = config
        .email
        .clone()
        .context("No email configured. Set FRISQUET_EMAIL or add it to the config file")?;

    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => rpassword::prompt_password(format!("Password for {}: ", email))
            .context("Failed to read password")?,
    };

    Ok(Credentials::new(email, password))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let saved = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });
    let config = saved.clone().with_env_overrides();
    let credentials = resolve_credentials(&config)?;
    let client = ApiClient::from_credentials(credentials, config.api_url())?;

    match command {
        Command::Token => {
            println!("{}", client.token().await?);
        }
        Command::Sites => {
            let mut sites: Vec<_> = client.sites().await?.into_iter().collect();
            sites.sort();
            for (id, name) in sites {
                println!("{}\t{}", id, name);
            }
        }
        Command::Site(id) => print_json(&client.get_site_data(&id).await?)?,
        Command::Consumption(id) => print_json(&client.get_consumption(&id).await?)?,
        Command::All => {
            let sites = client.sites().await?;
            let fetches = sites.keys().map(|id| {
                let client = client.clone();
                async move {
                    let data = client
                        .get_site_data(id)
                        .await
                        .with_context(|| format!("Failed to fetch site {}", id))?;
                    Ok::<_, anyhow::Error>((id.clone(), Value::Object(data)))
                }
            });

            let all: serde_json::Map<String, Value> =
                try_join_all(fetches).await?.into_iter().collect();
            print_json(&all)?;
        }
    }

    // Remember the email for next time; the password is never stored
    if saved.email.as_deref() != Some(client.email()) {
        let updated = Config {
            email: Some(client.email().to_string()),
            ..saved
        };
        match updated.save() {
            Ok(()) => info!("Saved email to config"),
            Err(e) => warn!(error = %e, "Failed to save config"),
        }
    }

    Ok(())
}
