use serde::Serialize;

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{LocalInfo, UserProfile};

use super::helpers::{greeting, plural_suffix};

/// Serializable form of the `info` output.
#[derive(Debug, Clone, Serialize)]
pub struct InfoSummary {
    pub user: UserProfile,
    pub local: LocalInfo,
    pub property_count: usize,
    pub review_count: usize,
}

pub fn summary(catalog: &Catalog) -> InfoSummary {
    InfoSummary {
        user: catalog.user.clone(),
        local: catalog.local.clone(),
        property_count: catalog.properties.len(),
        review_count: catalog.reviews.len(),
    }
}

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(greeting(&catalog.user)));
    result.add_message(CmdMessage::info(format!(
        "Current location: {}",
        catalog.local.city
    )));
    result.add_message(CmdMessage::info(format!(
        "Time: {} | Temperature: {}\u{b0}C",
        catalog.local.time, catalog.local.temperature
    )));
    result.add_message(CmdMessage::info(format!(
        "{} listing{} | {} review{}",
        catalog.properties.len(),
        plural_suffix(catalog.properties.len()),
        catalog.reviews.len(),
        plural_suffix(catalog.reviews.len())
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn greets_and_reports_conditions() {
        let result = run(&catalog::sample()).unwrap();
        let lines: Vec<&str> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Welcome back, Bobby",
                "Current location: London",
                "Time: 11.03 | Temperature: 17\u{b0}C",
                "4 listings | 3 reviews",
            ]
        );
    }

    #[test]
    fn summary_counts_the_catalog() {
        let summary = summary(&catalog::sample());
        assert_eq!(summary.property_count, 4);
        assert_eq!(summary.review_count, 3);
        assert_eq!(summary.user.first_name, "Bobby");
        assert_eq!(summary.local.city, "London");
    }
}
