use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Review;

use super::helpers::{review_summary, top_reviews};

/// Review roundup: a one-line summary plus the two highest-rated
/// reviews as cards.
pub fn run(reviews: &[Review]) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_reviews(top_reviews(reviews, 2));
    if let Some(summary) = review_summary(reviews) {
        result.add_message(CmdMessage::info(summary));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn keeps_only_the_top_two() {
        let result = run(&catalog::sample().reviews).unwrap();
        assert_eq!(result.reviews.len(), 2);
        assert_eq!(result.reviews[0].name, "Sheila");
        assert_eq!(result.reviews[1].name, "Omar");
    }

    #[test]
    fn summarizes_the_full_set() {
        let result = run(&catalog::sample().reviews).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "3 reviews | last reviewed by Sheila \u{2b50}"
        );
    }

    #[test]
    fn stays_quiet_with_no_reviews() {
        let result = run(&[]).unwrap();
        assert!(result.reviews.is_empty());
        assert!(result.messages.is_empty());
    }
}
