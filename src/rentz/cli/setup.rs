use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "rentz",
    bin_name = "rentz",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(
    about = "Browse, filter, and search rental listings from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Listing,
    Session,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Listing => "Per-Listing Commands:",
            CommandGroup::Session => "Session Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "facets" => Some(CommandGroup::Catalog),
            "show" | "featured" | "reviews" => Some(CommandGroup::Listing),
            "browse" => Some(CommandGroup::Session),
            "info" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Catalog,
            CommandGroup::Listing,
            CommandGroup::Session,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("rentz {version}\n"));
    output.push_str("Browse, filter, and search rental listings from the terminal\n");
    output.push('\n');
    output.push_str("Usage: rentz [OPTIONS] [COMMAND]\n");

    // Collect subcommands into groups
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --json       Print machine-readable JSON\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

/// Generates the custom grouped help output
pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let subcommand_name = match command {
        Some(Commands::Catalog(c)) => match c {
            CatalogCommands::List { .. } => "list",
            CatalogCommands::Search { .. } => "search",
            CatalogCommands::Facets => "facets",
        },
        Some(Commands::Listing(c)) => match c {
            ListingCommands::Show { .. } => "show",
            ListingCommands::Featured => "featured",
            ListingCommands::Reviews => "reviews",
        },
        Some(Commands::Session(c)) => match c {
            SessionCommands::Browse { .. } => "browse",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Info => "info",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(subcommand_name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    // Find and print help for the subcommand
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    // Fallback to grouped help if subcommand not found
    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Listing(ListingCommands),

    #[command(flatten)]
    Session(SessionCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List properties, filtered and sorted
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Keep only properties in this country (exact match)
        #[arg(long)]
        country: Option<String>,

        /// Keep only properties at this nightly price (exact match)
        #[arg(long)]
        price: Option<u32>,

        /// Keep only available properties
        #[arg(long)]
        available: bool,

        /// Sort order: price-asc, price-desc, name-asc, name-desc
        #[arg(short, long)]
        sort: Option<String>,

        /// Page to display
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Listings per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Search titles, cities, and countries
    #[command(display_order = 2)]
    Search {
        /// Search term words (joined with spaces; empty lists everything)
        #[arg(num_args = 0..)]
        term: Vec<String>,

        /// Page to display
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Listings per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Show the distinct countries and prices for filtering
    #[command(display_order = 3)]
    Facets,
}

#[derive(Subcommand, Debug)]
pub enum ListingCommands {
    /// Show full details for one listing
    #[command(alias = "v", display_order = 10)]
    Show {
        /// Position of the listing (1-based, as printed by list)
        index: usize,
    },

    /// Show the featured property
    #[command(display_order = 11)]
    Featured,

    /// Show the guest review roundup
    #[command(display_order = 12)]
    Reviews,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Browse the catalog interactively
    #[command(alias = "b", display_order = 20)]
    Browse {
        /// Listings per page for this session (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show who is signed in and the local conditions
    #[command(display_order = 30)]
    Info,

    /// Print help for rentz or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
