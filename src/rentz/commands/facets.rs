use crate::commands::{CmdResult, FacetSet};
use crate::error::Result;
use crate::model::Property;
use crate::query;

pub fn run(properties: &[Property]) -> Result<CmdResult> {
    let facets = FacetSet {
        countries: query::unique_countries(properties),
        prices: query::unique_prices(properties),
    };
    Ok(CmdResult::default().with_facets(facets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn countries_keep_catalog_order() {
        let properties = catalog::sample_properties();
        let result = run(&properties).unwrap();
        let facets = result.facets.unwrap();
        assert_eq!(
            facets.countries,
            vec!["Colombia", "Poland", "United Kingdom", "Malaysia"]
        );
    }

    #[test]
    fn prices_come_back_ascending() {
        let properties = catalog::sample_properties();
        let result = run(&properties).unwrap();
        let facets = result.facets.unwrap();
        assert_eq!(facets.prices, vec![25, 30, 35, 45]);
    }
}
