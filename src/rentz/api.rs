//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the
//! state container. It is the single entry point for all rentz
//! operations, regardless of the UI driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** one-shot operations to the command functions
//! - **Routes intents** (filter, search, page, select) through the
//!   state container so the view stays consistent
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `query.rs`
//! - **I/O operations**: no stdout, stderr, or file access
//! - **Presentation concerns**: returns data structures, not strings

use tracing::debug;

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::{FeaturedProperty, SortOption};
use crate::query::{self, Filters};
use crate::state::AppState;

/// The main API facade for rentz operations.
///
/// Owns the catalog and one state container. One-shot helpers compute
/// straight off the catalog; intent methods mutate the container the
/// way an interactive client expects.
pub struct RentzApi {
    catalog: Catalog,
    state: AppState,
}

impl RentzApi {
    pub fn new(catalog: Catalog, items_per_page: usize) -> Self {
        let state = AppState::new(&catalog.properties, items_per_page);
        Self { catalog, state }
    }

    // --- One-shot dispatch ---

    pub fn list(
        &self,
        filters: &Filters,
        sort: Option<SortOption>,
        page: usize,
        per_page: usize,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog.properties, filters, sort, page, per_page)
    }

    pub fn search_page(
        &self,
        term: &str,
        page: usize,
        per_page: usize,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog.properties, term, page, per_page)
    }

    pub fn facets(&self) -> Result<commands::CmdResult> {
        commands::facets::run(&self.catalog.properties)
    }

    /// Details for the listing at `index` (1-based) in the current
    /// view. On a fresh facade the view is the whole catalog.
    pub fn show(&self, index: usize) -> Result<commands::CmdResult> {
        commands::show::run(self.state.view(), index)
    }

    pub fn reviews(&self) -> Result<commands::CmdResult> {
        commands::reviews::run(&self.catalog.reviews)
    }

    pub fn info(&self) -> Result<commands::CmdResult> {
        commands::info::run(&self.catalog)
    }

    pub fn info_summary(&self) -> commands::info::InfoSummary {
        commands::info::summary(&self.catalog)
    }

    pub fn featured(&self) -> &FeaturedProperty {
        &self.catalog.featured
    }

    // --- Stateful intents ---

    /// Replace the view with a freshly filtered and sorted sequence.
    /// Rewinds to page 1.
    pub fn apply_filters(&mut self, filters: &Filters, sort: Option<SortOption>) {
        debug!("applying filters {:?} with sort {:?}", filters, sort);
        let view = query::sort(&query::filter(self.state.source(), filters), sort);
        self.state.apply_view(view);
    }

    /// Replace the view with the search match set. A blank term resets
    /// to the full catalog instead.
    pub fn search(&mut self, term: &str) {
        if term.trim().is_empty() {
            debug!("blank search term, resetting filters");
            self.reset_filters();
            return;
        }
        debug!("searching for {:?}", term);
        let view = query::search(self.state.source(), term);
        self.state.apply_view(view);
    }

    pub fn reset_filters(&mut self) {
        debug!("resetting view to the full catalog");
        self.state.reset();
    }

    /// Move one page forward. Returns whether the cursor moved.
    pub fn next_page(&mut self) -> bool {
        self.state.go_to_page(1)
    }

    /// Move one page back. Returns whether the cursor moved.
    pub fn previous_page(&mut self) -> bool {
        self.state.go_to_page(-1)
    }

    /// Open details for the listing at `index` (1-based) in the
    /// current view.
    pub fn select_listing(&mut self, index: usize) -> Result<()> {
        let mut result = commands::show::run(self.state.view(), index)?;
        if let Some(property) = result.listed.pop() {
            debug!("selected listing {:?}", property.title);
            self.state.select(property);
        }
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.state.close_details();
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

pub use commands::info::InfoSummary;
pub use commands::{CmdMessage, CmdResult, FacetSet, MessageLevel, NO_MATCH_MESSAGE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::error::RentzError;

    fn api() -> RentzApi {
        RentzApi::new(catalog::sample(), 2)
    }

    #[test]
    fn apply_filters_rewinds_to_page_one() {
        let mut api = api();
        assert!(api.next_page());
        api.apply_filters(
            &Filters {
                available_only: true,
                ..Filters::default()
            },
            None,
        );
        assert_eq!(api.state().cursor().current_page, 1);
        assert_eq!(api.state().view().len(), 2);
    }

    #[test]
    fn blank_search_resets_the_view() {
        let mut api = api();
        api.search("shack");
        assert_eq!(api.state().view().len(), 1);
        api.search("   ");
        assert_eq!(api.state().view().len(), 4);
    }

    #[test]
    fn page_intents_respect_bounds() {
        let mut api = api();
        assert!(!api.previous_page());
        assert!(api.next_page());
        assert!(!api.next_page());
        assert_eq!(api.state().cursor().current_page, 2);
    }

    #[test]
    fn select_listing_opens_details_from_the_view() {
        let mut api = api();
        api.apply_filters(&Filters::default(), Some(SortOption::PriceAsc));
        api.select_listing(1).unwrap();
        assert!(api.state().details_open());
        assert_eq!(api.state().selected().unwrap().title, "London Flat");
    }

    #[test]
    fn select_listing_rejects_bad_indexes() {
        let mut api = api();
        assert!(matches!(
            api.select_listing(9),
            Err(RentzError::ListingNotFound(9))
        ));
        assert!(!api.state().details_open());
    }

    #[test]
    fn one_shot_show_reads_the_whole_catalog() {
        let api = api();
        let result = api.show(4).unwrap();
        assert_eq!(result.listed[0].title, "Malia Hotel");
    }
}
