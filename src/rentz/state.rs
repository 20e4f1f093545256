//! # Application State
//!
//! `AppState` is the single source of truth for "what is currently
//! displayed": the immutable source catalog, the derived view, the
//! pagination cursor, and the transient details selection. Fields are
//! private so the cursor invariant (`1 <= current_page <=
//! max(total_pages, 1)`, `total_pages == ceil(view len / per page)`)
//! can only be upheld, never bypassed.
//!
//! Nothing here performs I/O. The view and cursor are replaced
//! wholesale on every transition, never patched in place.

use crate::model::Property;
use crate::query;
use serde::Serialize;

/// Pagination position for a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    pub items_per_page: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageCursor {
    pub fn new(items_per_page: usize, item_count: usize) -> Self {
        Self {
            items_per_page,
            current_page: 1,
            total_pages: total_pages_for(item_count, items_per_page),
        }
    }
}

/// `ceil(count / per_page)`; an empty view has zero pages while the
/// cursor stays pinned at page 1.
pub fn total_pages_for(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        0
    } else {
        item_count.div_ceil(items_per_page)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    current_properties: Vec<Property>,
    filtered_properties: Vec<Property>,
    cursor: PageCursor,
    details_open: bool,
    selected_property: Option<Property>,
}

impl AppState {
    /// Seeds the container with independent copies of the source list;
    /// replacing the view later must never touch the source.
    pub fn new(source: &[Property], items_per_page: usize) -> Self {
        Self {
            current_properties: source.to_vec(),
            filtered_properties: source.to_vec(),
            cursor: PageCursor::new(items_per_page, source.len()),
            details_open: false,
            selected_property: None,
        }
    }

    /// Replaces the view wholesale and rewinds the cursor to page 1.
    /// The only mutation path after a filter/search/sort composition.
    pub fn apply_view(&mut self, view: Vec<Property>) {
        self.cursor = PageCursor::new(self.cursor.items_per_page, view.len());
        self.filtered_properties = view;
    }

    /// Back to a fresh copy of the full source, page 1.
    pub fn reset(&mut self) {
        let full = self.current_properties.clone();
        self.apply_view(full);
    }

    /// Steps the cursor by `delta` pages if the result stays within
    /// `[1, total_pages]`; otherwise leaves it alone. Returns whether
    /// the cursor moved. Out-of-range requests are not errors.
    pub fn go_to_page(&mut self, delta: i64) -> bool {
        let target = self.cursor.current_page as i64 + delta;
        if target >= 1 && target <= self.cursor.total_pages as i64 {
            self.cursor.current_page = target as usize;
            true
        } else {
            false
        }
    }

    pub fn select(&mut self, property: Property) {
        self.selected_property = Some(property);
        self.details_open = true;
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
        self.selected_property = None;
    }

    pub fn source(&self) -> &[Property] {
        &self.current_properties
    }

    pub fn view(&self) -> &[Property] {
        &self.filtered_properties
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// The slice of the view that belongs on the current page.
    pub fn page_items(&self) -> &[Property] {
        query::paginate(
            &self.filtered_properties,
            self.cursor.current_page,
            self.cursor.items_per_page,
        )
    }

    pub fn selected(&self) -> Option<&Property> {
        self.selected_property.as_ref()
    }

    pub fn details_open(&self) -> bool {
        self.details_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::SortOption;

    #[test]
    fn new_state_starts_on_page_one_with_full_view() {
        let state = AppState::new(&catalog::sample_properties(), 4);
        assert_eq!(state.view().len(), 4);
        assert_eq!(state.cursor().current_page, 1);
        assert_eq!(state.cursor().total_pages, 1);
        assert_eq!(state.page_items().len(), 4);
    }

    #[test]
    fn total_pages_follow_items_per_page() {
        let all = catalog::sample_properties();
        assert_eq!(AppState::new(&all, 2).cursor().total_pages, 2);
        assert_eq!(AppState::new(&all, 3).cursor().total_pages, 2);
        assert_eq!(AppState::new(&all, 1).cursor().total_pages, 4);
        assert_eq!(AppState::new(&[], 4).cursor().total_pages, 0);
    }

    #[test]
    fn view_and_source_do_not_alias() {
        let mut state = AppState::new(&catalog::sample_properties(), 4);
        state.apply_view(Vec::new());
        assert!(state.view().is_empty());
        assert_eq!(state.source().len(), 4);
    }

    #[test]
    fn apply_view_rewinds_the_cursor() {
        let all = catalog::sample_properties();
        let mut state = AppState::new(&all, 2);
        assert!(state.go_to_page(1));
        assert_eq!(state.cursor().current_page, 2);

        state.apply_view(query::sort(&all, Some(SortOption::PriceAsc)));
        assert_eq!(state.cursor().current_page, 1);
        assert_eq!(state.cursor().total_pages, 2);
        assert_eq!(state.page_items()[0].title, "London Flat");
    }

    #[test]
    fn reset_restores_the_full_source_view() {
        let all = catalog::sample_properties();
        let mut state = AppState::new(&all, 2);
        state.apply_view(vec![all[1].clone()]);
        assert_eq!(state.view().len(), 1);

        state.reset();
        assert_eq!(state.view(), state.source());
        assert_eq!(state.cursor().current_page, 1);
        assert_eq!(state.cursor().total_pages, 2);
    }

    #[test]
    fn go_to_page_clamps_at_both_ends() {
        let mut state = AppState::new(&catalog::sample_properties(), 2);

        assert!(!state.go_to_page(-1));
        assert_eq!(state.cursor().current_page, 1);

        assert!(state.go_to_page(1));
        assert_eq!(state.cursor().current_page, 2);

        assert!(!state.go_to_page(1));
        assert_eq!(state.cursor().current_page, 2);

        assert!(state.go_to_page(-1));
        assert_eq!(state.cursor().current_page, 1);
    }

    #[test]
    fn empty_view_refuses_every_page_move() {
        let mut state = AppState::new(&catalog::sample_properties(), 2);
        state.apply_view(Vec::new());

        assert_eq!(state.cursor().total_pages, 0);
        assert_eq!(state.cursor().current_page, 1);
        assert!(!state.go_to_page(1));
        assert!(!state.go_to_page(-1));
        assert_eq!(state.cursor().current_page, 1);
        assert!(state.page_items().is_empty());
    }

    #[test]
    fn page_items_track_the_cursor() {
        let all = catalog::sample_properties();
        let mut state = AppState::new(&all, 3);
        assert_eq!(state.page_items().len(), 3);

        state.go_to_page(1);
        assert_eq!(state.page_items().len(), 1);
        assert_eq!(state.page_items()[0].title, "Malia Hotel");
    }

    #[test]
    fn select_and_close_details() {
        let all = catalog::sample_properties();
        let mut state = AppState::new(&all, 4);
        assert!(!state.details_open());
        assert!(state.selected().is_none());

        state.select(all[2].clone());
        assert!(state.details_open());
        assert_eq!(state.selected().map(|p| p.title.as_str()), Some("London Flat"));

        state.close_details();
        assert!(!state.details_open());
        assert!(state.selected().is_none());
    }
}
