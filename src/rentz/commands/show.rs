use crate::commands::CmdResult;
use crate::error::{RentzError, Result};
use crate::model::Property;

/// Look up one listing by its 1-based position in the current view.
pub fn run(view: &[Property], index: usize) -> Result<CmdResult> {
    let property = index
        .checked_sub(1)
        .and_then(|i| view.get(i))
        .ok_or(RentzError::ListingNotFound(index))?;
    Ok(CmdResult::default().with_listed(vec![property.clone()]))
}
