//! Aerofast application binary - composition root.
//!
//! 1. Parse the command line
//! 2. Load configuration from TOML
//! 3. Initialise tracing
//! 4. Run the requested command: serve the API (default), search the
//!    catalog, or ask the concierge

mod cli;

use clap::Parser;

use aerofast_api::routes;
use aerofast_api::state::AppState;
use aerofast_catalog::{CatalogQueryEngine, SortState};
use aerofast_concierge::ConciergeResponder;
use aerofast_core::config::AerofastConfig;
use aerofast_core::types::{ProductCategory, SortDirection, SortField};

use cli::{CliArgs, Command};

/// Print catalog rows as a fixed-width table.
fn print_rows(rows: &[&ProductCategory]) {
    println!("{:<10} {:<10} {:<16} {:<6} DESCRIPTION", "ID", "NAME", "STANDARD", "STOCK");
    for row in rows {
        println!(
            "{:<10} {:<10} {:<16} {:<6} {}",
            row.id,
            row.name,
            row.standard,
            row.stock_level.label(),
            row.description
        );
    }
    println!("{} result(s)", rows.len());
}

fn search(
    config: &AerofastConfig,
    query: &str,
    sort: Option<&str>,
    desc: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let field = match sort {
        Some(s) => s.parse::<SortField>()?,
        None => config.catalog.default_sort_field,
    };
    let direction = if desc {
        SortDirection::Desc
    } else if sort.is_some() {
        SortDirection::Asc
    } else {
        config.catalog.default_sort_direction
    };

    let engine = CatalogQueryEngine::default();
    let rows = engine.query(query, SortState::new(field, direction));
    tracing::debug!(query, results = rows.len(), "Catalog searched");

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_rows(&rows);
    }
    Ok(())
}

fn ask(text: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let resolution = ConciergeResponder::standard().resolve(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }
    println!("{}", resolution.reply.text);
    if let Some(action) = &resolution.reply.action {
        println!("  -> {} ({})", action.label, action.target_anchor);
    }
    Ok(())
}

async fn serve(config: AerofastConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting Aerofast v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        catalog_size = CatalogQueryEngine::default().catalog().len(),
        reply_delay_ms = config.concierge.reply_delay_ms,
        max_visits = config.server.max_visits,
        "Site services ready"
    );

    let state = AppState::new(config.clone());
    routes::start_server(&config, state).await?;

    tracing::info!("Aerofast stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = AerofastConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);
    config.server.bind_address = args.resolve_bind(&config.server.bind_address);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::debug!(
        path = %config_file.display(),
        found = config_file.exists(),
        "Configuration resolved"
    );

    match args.command() {
        Command::Serve => serve(config).await,
        Command::Search { query, sort, desc } => {
            search(&config, &query, sort.as_deref(), desc, args.json)
        }
        Command::Ask { text } => ask(&text, args.json),
    }
}
