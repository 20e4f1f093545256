use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Property, SortOption};
use crate::query::{self, Filters};

use super::helpers::paged_result;

pub fn run(
    properties: &[Property],
    filters: &Filters,
    sort: Option<SortOption>,
    page: usize,
    per_page: usize,
) -> Result<CmdResult> {
    let view = query::sort(&query::filter(properties, filters), sort);
    Ok(paged_result(view, page, per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::commands::MessageLevel;

    #[test]
    fn lists_first_page_of_the_catalog() {
        let properties = catalog::sample_properties();
        let result = run(&properties, &Filters::default(), None, 1, 4).unwrap();
        assert_eq!(result.listed.len(), 4);
        assert_eq!(result.listed[0].title, "Colombian Shack");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_country() {
        let properties = catalog::sample_properties();
        let filters = Filters {
            country: Some("Poland".to_string()),
            ..Filters::default()
        };
        let result = run(&properties, &filters, None, 1, 4).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "Polish Cottage");
    }

    #[test]
    fn sorts_before_slicing() {
        let properties = catalog::sample_properties();
        let result = run(
            &properties,
            &Filters::default(),
            Some(SortOption::PriceAsc),
            1,
            2,
        )
        .unwrap();
        assert_eq!(result.listed[0].title, "London Flat");
        assert_eq!(result.listed[1].title, "Polish Cottage");

        let second = run(
            &properties,
            &Filters::default(),
            Some(SortOption::PriceAsc),
            2,
            2,
        )
        .unwrap();
        assert_eq!(second.listed[0].title, "Malia Hotel");
        assert_eq!(second.listed[1].title, "Colombian Shack");
    }

    #[test]
    fn notes_when_nothing_matches() {
        let properties = catalog::sample_properties();
        let filters = Filters {
            price: Some(999),
            ..Filters::default()
        };
        let result = run(&properties, &filters, None, 1, 4).unwrap();
        assert!(result.listed.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
    }

    #[test]
    fn warns_on_a_page_past_the_end() {
        let properties = catalog::sample_properties();
        let result = run(&properties, &Filters::default(), None, 5, 4).unwrap();
        assert!(result.listed.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }
}
