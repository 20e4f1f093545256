//! # CLI Behavior
//!
//! This is **one possible UI client** for rentz, not the application
//! itself. The CLI is the only place that knows about terminal I/O,
//! exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in
//! [`rentz`].
//!
//! ## Naked Execution (`rentz`)
//!
//! Running `rentz` with no arguments defaults to `rentz list`: the
//! first page of the catalog is 90% of usage and should be the path of
//! least resistance.
//!
//! ## One-Shot vs. Session
//!
//! Every catalog operation is available as a one-shot subcommand
//! (`list`, `search`, `facets`, `show`, ...) that computes, prints,
//! and exits. `rentz browse` instead opens an interactive session
//! where filters, the page cursor, and the details view persist
//! between commands, the way they do in a windowed client.
//!
//! ## Lenient Inputs
//!
//! Filter and sort inputs never fail: an unknown `--sort` key leaves
//! the catalog order untouched and a page past the end prints a
//! warning with an empty page. Only a bad `show` index is an error.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and format output
//! - `print`: Output formatting (listing lines, cards, messages)
//! - `session`: The interactive `browse` read-eval-print loop
//! - `setup`: Argument parsing via clap, grouped help text

mod commands;
mod print;
mod session;
pub mod setup;

pub use commands::run;
