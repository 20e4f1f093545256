//! Small formatting and selection helpers shared by the command modules.

use crate::commands::{CmdMessage, CmdResult, NO_MATCH_MESSAGE};
use crate::model::{LoyaltyTier, Property, Review, UserProfile};
use crate::query;
use crate::state::PageCursor;

/// Pluralization suffix for counted nouns ("1 review", "2 reviews").
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// One-line review summary. The star icon marks a gold-tier most
/// recent reviewer; catalogs keep reviews newest-first, so that is
/// the first entry. Returns `None` when there are no reviews.
pub fn review_summary(reviews: &[Review]) -> Option<String> {
    let latest = reviews.first()?;
    let icon = if latest.loyalty == LoyaltyTier::Gold {
        " \u{2b50}"
    } else {
        ""
    };
    Some(format!(
        "{} review{} | last reviewed by {}{}",
        reviews.len(),
        plural_suffix(reviews.len()),
        latest.name,
        icon
    ))
}

/// The `n` highest-rated reviews, best first. Ties keep their
/// original order.
pub fn top_reviews(reviews: &[Review], n: usize) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted.truncate(n);
    sorted
}

/// Greeting line for the session banner and `info` output. Greets by
/// first name and acknowledges returning guests.
pub fn greeting(user: &UserProfile) -> String {
    if user.is_returning {
        format!("Welcome back, {}", user.first_name)
    } else {
        format!("Welcome, {}", user.first_name)
    }
}

/// Slice a computed view down to one page and wrap it as a result.
/// An empty view carries the no-match notice; a page past the end of
/// a non-empty view carries a warning, never an error. The cursor is
/// attached only when the page actually holds listings.
pub fn paged_result(view: Vec<Property>, page: usize, per_page: usize) -> CmdResult {
    let listed = query::paginate(&view, page, per_page).to_vec();
    let mut cursor = PageCursor::new(per_page, view.len());
    cursor.current_page = page;

    let mut result = CmdResult::default();
    if view.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCH_MESSAGE));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range ({} page{})",
            page,
            cursor.total_pages,
            plural_suffix(cursor.total_pages)
        )));
    } else {
        result = result.with_cursor(cursor);
    }
    result.with_listed(listed)
}
