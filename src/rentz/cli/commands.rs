//! # CLI Layer
//!
//! This module is **one possible UI client** for rentz, not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Initialize `AppContext` with API and configuration
//! 3. **API Dispatch**: Call the appropriate `RentzApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//! 5. **Error Handling**: Convert errors to user-friendly messages and exit codes
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output
//! - `print.rs`: Output formatting functions
//! - `session.rs`: The interactive `browse` loop

use super::print::{
    print_cursor, print_details, print_facets, print_featured, print_listings, print_messages,
    print_reviews,
};
use super::session;
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, CatalogCommands, Cli,
    Commands, ListingCommands, MiscCommands, SessionCommands,
};
use clap::Parser;
use directories::ProjectDirs;
use rentz::api::RentzApi;
use rentz::catalog;
use rentz::config::RentzConfig;
use rentz::error::Result;
use rentz::query::Filters;
use rentz::state::PageCursor;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: RentzApi,
    config: RentzConfig,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Handle help flag - at top level use grouped help, for subcommands use clap's default
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Catalog(cmd)) => match cmd {
            CatalogCommands::List {
                country,
                price,
                available,
                sort,
                page,
                per_page,
            } => handle_list(&mut ctx, country, price, available, sort, page, per_page),
            CatalogCommands::Search {
                term,
                page,
                per_page,
            } => handle_search(&mut ctx, term, page, per_page),
            CatalogCommands::Facets => handle_facets(&mut ctx),
        },
        Some(Commands::Listing(cmd)) => match cmd {
            ListingCommands::Show { index } => handle_show(&mut ctx, index),
            ListingCommands::Featured => handle_featured(&ctx),
            ListingCommands::Reviews => handle_reviews(&mut ctx),
        },
        Some(Commands::Session(cmd)) => match cmd {
            SessionCommands::Browse { per_page } => handle_browse(&mut ctx, per_page),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Info => handle_info(&mut ctx),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&mut ctx, None, None, false, None, 1, None),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir();
    let config = RentzConfig::load(&config_dir).unwrap_or_default();

    if !config.color {
        colored::control::set_override(false);
    }

    let api = RentzApi::new(catalog::sample(), config.effective_items_per_page());

    Ok(AppContext {
        api,
        config,
        json: cli.json,
    })
}

fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("RENTZ_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "rentz", "rentz").expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

/// 1-based ordinal of the first entry on the page, so listing lines
/// keep their position in the view across pages.
fn start_ordinal(cursor: Option<&PageCursor>) -> usize {
    cursor.map_or(1, |c| (c.current_page - 1) * c.items_per_page + 1)
}

fn handle_list(
    ctx: &mut AppContext,
    country: Option<String>,
    price: Option<u32>,
    available: bool,
    sort: Option<String>,
    page: usize,
    per_page: Option<usize>,
) -> Result<()> {
    let filters = Filters {
        country,
        price,
        available_only: available,
    };
    let sort = sort.as_deref().and_then(|key| key.parse().ok());
    let per_page = per_page.unwrap_or_else(|| ctx.config.effective_items_per_page());

    let result = ctx.api.list(&filters, sort, page, per_page)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.listed)?);
        return Ok(());
    }
    print_listings(&result.listed, start_ordinal(result.cursor.as_ref()));
    print_cursor(result.cursor.as_ref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    term: Vec<String>,
    page: usize,
    per_page: Option<usize>,
) -> Result<()> {
    let term = term.join(" ");
    let per_page = per_page.unwrap_or_else(|| ctx.config.effective_items_per_page());

    let result = ctx.api.search_page(&term, page, per_page)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.listed)?);
        return Ok(());
    }
    print_listings(&result.listed, start_ordinal(result.cursor.as_ref()));
    print_cursor(result.cursor.as_ref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_facets(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.facets()?;
    if let Some(facets) = &result.facets {
        if ctx.json {
            println!("{}", serde_json::to_string_pretty(facets)?);
            return Ok(());
        }
        print_facets(facets);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.show(index)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.listed)?);
        return Ok(());
    }
    if let Some(property) = result.listed.first() {
        print_details(property);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_featured(ctx: &AppContext) -> Result<()> {
    let featured = ctx.api.featured();
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(featured)?);
        return Ok(());
    }
    print_featured(featured);
    Ok(())
}

fn handle_reviews(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reviews()?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.reviews)?);
        return Ok(());
    }
    print_messages(&result.messages);
    print_reviews(&result.reviews);
    Ok(())
}

fn handle_info(ctx: &mut AppContext) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&ctx.api.info_summary())?);
        return Ok(());
    }
    let result = ctx.api.info()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_browse(ctx: &mut AppContext, per_page: Option<usize>) -> Result<()> {
    // A session-only page size; zero falls back to the configured one
    if let Some(per_page) = per_page.filter(|&n| n > 0) {
        ctx.api = RentzApi::new(catalog::sample(), per_page);
    }
    session::run(&mut ctx.api)
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
