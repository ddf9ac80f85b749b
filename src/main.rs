//! OMS list pagination CLI
//!
//! Prints one page of a backend list as the JSON the HTTP endpoints serve.
//!
//! ```sh
//! # Orders of group 3, second page
//! oms-pagination orders --group-id 3 --page 2
//!
//! # Pending queue only
//! oms-pagination orders --group-id 3 --pending
//!
//! # Validate config without connecting
//! oms-pagination --check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use oms_pagination::api::ListResponse;
use oms_pagination::config::AppConfig;
use oms_pagination::shared::{parse_page, AppError};
use oms_pagination::{init_database, init_tracing, DatabaseConfig, Listing, OrderFilter};

#[derive(Parser, Debug)]
#[command(
    name = "oms-pagination",
    version,
    about = "Print one page of an OMS list as JSON",
    long_about = "Runs a group, order or member list of the ordering backend \
                  through the pagination engine and prints the \
                  {list, pagination} envelope.\n\n\
                  Default config: ~/.config/oms-pagination/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "OMS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file, print it and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Groups a user has joined
    Groups {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        page: Option<String>,
    },
    /// Groups a user can still sign up for
    OpenGroups {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        page: Option<String>,
    },
    /// Orders of a group
    Orders {
        #[arg(long)]
        group_id: i64,
        /// Only orders waiting in the queue
        #[arg(long)]
        pending: bool,
        #[arg(long)]
        page: Option<String>,
    },
    /// Members of a group
    Members {
        #[arg(long)]
        group_id: i64,
        #[arg(long)]
        page: Option<String>,
    },
}

impl Command {
    fn listing(&self) -> (Listing, Option<&str>) {
        match self {
            Self::Groups { user_id, page } => {
                (Listing::JoinedGroups { user_id: *user_id }, page.as_deref())
            }
            Self::OpenGroups { user_id, page } => {
                (Listing::OpenGroups { user_id: *user_id }, page.as_deref())
            }
            Self::Orders {
                group_id,
                pending,
                page,
            } => {
                let filter = if *pending {
                    OrderFilter::PendingOnly
                } else {
                    OrderFilter::All
                };
                (
                    Listing::GroupOrders {
                        group_id: *group_id,
                        filter,
                    },
                    page.as_deref(),
                )
            }
            Self::Members { group_id, page } => {
                (Listing::GroupMembers { group_id: *group_id }, page.as_deref())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(oms_pagination::default_config_path);

    let loaded = AppConfig::load(&config_path)
        .and_then(|cfg| cfg.with_overrides(cli.database_url.clone(), cli.log_level.clone()));

    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("Invalid configuration {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
        Err(e) => {
            // Fallback tracing init
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .with_writer(std::io::stderr)
                .init();
            error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    if cli.check {
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    init_tracing(&config.logging);
    info!("Configuration loaded from {}", config_path.display());

    let Some(command) = &cli.command else {
        warn!("No list selected; see --help");
        return Ok(());
    };

    run(&config, command).await?;
    Ok(())
}

async fn run(config: &AppConfig, command: &Command) -> Result<(), AppError> {
    let (listing, page) = command.listing();
    let request = config.pagination.request(parse_page(page));

    let db = init_database(&DatabaseConfig::from(&config.database)).await?;

    let result = listing.fetch(&db, &request).await;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }

    let result = result?;
    info!(
        listing = listing.name(),
        page = result.window.current_page,
        total_pages = result.window.total_pages,
        rows = result.items.len(),
        "Page fetched"
    );

    let body = serde_json::to_string_pretty(&ListResponse::from(result))?;
    println!("{}", body);
    Ok(())
}
