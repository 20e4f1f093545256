//! # Rentz Architecture
//!
//! Rentz is a **UI-agnostic rental-catalog library**. This is not a CLI application that happens
//! to have some library code—it's a library that happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders listings, owns terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and the state container        │
//! │  - Resolves view positions → listings                       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (query.rs + state.rs)                         │
//! │  - Pure filter/search/sort/paginate pipeline (query.rs)     │
//! │  - One state container owning the visible view (state.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The View and Its Positions
//!
//! Listings are addressed by their 1-based position in the **current
//! view**: whatever filtering, searching, and sorting last produced.
//! The engine never mutates the source sequence, so positions stay
//! stable until the next view change rewinds the cursor to page 1.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, query, state), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any other UI.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Engine** (`query.rs`, `state.rs`): Thorough unit tests of pipeline laws
//!    (composition order, permissive inputs, cursor clamping). This is where the
//!    lion's share of testing lives.
//!
//! 2. **Commands** (`commands/*.rs`): Unit tests of per-command behavior over
//!    the embedded catalog.
//!
//! 3. **API** (`api.rs`): Tests verifying intents mutate the container correctly.
//!
//! 4. **CLI** (`cli/` + thin `main.rs`): End-to-end tests driving the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: The filter/search/sort/paginate pipeline
//! - [`state`]: The state container (view, page cursor, selection)
//! - [`model`]: Core data types (`Property`, `Review`, `SortOption`, ...)
//! - [`catalog`]: The embedded sample catalog
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod state;
