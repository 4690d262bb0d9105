use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io;

use rosterguard::access::{AccessChecker, Action, Entity};
use rosterguard::config::Config;
use rosterguard::profile::Profile;
use rosterguard::values::{self, Value};

#[derive(Parser)]
#[command(name = "rosterguard")]
#[command(about = "Check what roster members are allowed to do")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "rosterguard.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a user may perform an action on an entity
    Check {
        username: String,
        /// create, update or delete
        action: Action,
        /// user or post
        entity: Entity,
    },
    /// List roster members and their privilege
    Roster,
    /// Write a default configuration file
    Init,
    /// Validate a profile and print it as JSON
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        single: Option<bool>,
    },
    /// Print the distinct numbers among the given values
    Dedupe {
        values: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // `init` must be able to overwrite a file that no longer parses.
    let loaded = match cli.command {
        Commands::Init => None,
        _ => Config::load_if_present(&cli.config).await?,
    };
    let logging = loaded.as_ref().map(|c| c.logging.clone()).unwrap_or_default();
    let rust_log = std::env::var("RUST_LOG").ok();
    env_logger::Builder::new()
        .parse_filters(&logging.filter(cli.verbose, rust_log.as_deref()))
        .init();

    debug!("rosterguard v{} using {}", env!("CARGO_PKG_VERSION"), cli.config);

    let config = match (&cli.command, loaded) {
        (Commands::Init, _) => Config::default(),
        (_, Some(config)) => config,
        (_, None) => {
            debug!("Config file {} not found, using defaults", cli.config);
            Config::default()
        }
    };

    match cli.command {
        Commands::Check { username, action, entity } => {
            let checker = AccessChecker::new(config.build_roster()?);
            checker.run(&username, action, entity, &mut io::stdout(), &mut io::stderr())?;
        }
        Commands::Roster => {
            let roster = config.build_roster()?;
            for record in roster.records() {
                println!("{}\t{}", record.name(), record.privilege().role_name());
            }
        }
        Commands::Profile { name, age, phone, single } => {
            let profile = Profile::new(name, age, phone)
                .map_err(|e| anyhow!("Invalid profile: {}", e))?;
            let profile = match single {
                Some(s) => profile.with_single(s),
                None => profile,
            };
            println!("{}", serde_json::to_string(&profile)?);
        }
        Commands::Dedupe { values: raw } => {
            let parsed: Vec<Value> = raw.iter().map(|s| Value::parse(s)).collect();
            for n in values::dedup_numbers(&parsed) {
                println!("{}", n);
            }
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}
