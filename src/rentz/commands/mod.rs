use crate::model::{Property, Review};
use crate::state::PageCursor;
use serde::Serialize;

pub mod facets;
pub mod helpers;
pub mod info;
pub mod list;
pub mod reviews;
pub mod search;
pub mod show;

/// Shown when a filter or search leaves nothing to list.
pub const NO_MATCH_MESSAGE: &str = "No properties match your search criteria";

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Distinct-value lists for populating filter controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacetSet {
    pub countries: Vec<String>,
    pub prices: Vec<u32>,
}

/// What a command hands back to whichever UI asked. Listings and
/// reviews render as cards, the cursor as a page line, messages as
/// level-colored text; empty fields simply don't render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Property>,
    pub reviews: Vec<Review>,
    pub facets: Option<FacetSet>,
    pub cursor: Option<PageCursor>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<Property>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_facets(mut self, facets: FacetSet) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_cursor(mut self, cursor: PageCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
