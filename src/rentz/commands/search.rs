use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Property;
use crate::query;

use super::helpers::paged_result;

pub fn run(
    properties: &[Property],
    term: &str,
    page: usize,
    per_page: usize,
) -> Result<CmdResult> {
    let view = query::search(properties, term);
    Ok(paged_result(view, page, per_page))
}
