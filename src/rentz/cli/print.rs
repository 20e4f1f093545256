use colored::Colorize;
use rentz::api::{CmdMessage, FacetSet, MessageLevel};
use rentz::model::{FeaturedProperty, LoyaltyTier, Property, Review};
use rentz::state::PageCursor;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 12;
const BADGE_WIDTH: usize = 9;
const RULE: &str = "--------------------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per listing: ordinal, title with its place, then price and
/// availability columns. `start` is the 1-based ordinal of the first
/// entry so page slices keep their position in the view.
pub(super) fn print_listings(properties: &[Property], start: usize) {
    for (i, property) in properties.iter().enumerate() {
        let left_prefix = "    ";
        let idx_str = format!("{}. ", start + i);

        let title_place = format!(
            "{}  {}, {}",
            property.title, property.location.city, property.location.country
        );

        let price_str = format!("${}/night", property.price);
        let badge_str = if property.is_available {
            "Available"
        } else {
            "Booked"
        };

        let fixed_width = left_prefix.width() + idx_str.width() + PRICE_WIDTH + 2 + BADGE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_place, available);
        let padding = available.saturating_sub(title_display.width());

        let price_col = format!("{:>width$}", price_str, width = PRICE_WIDTH);
        let badge_col = format!("{:>width$}", badge_str, width = BADGE_WIDTH);
        let badge_colored = if property.is_available {
            badge_col.green()
        } else {
            badge_col.red()
        };

        println!(
            "{}{}{}{}{}  {}",
            left_prefix,
            idx_str,
            title_display,
            " ".repeat(padding),
            price_col.dimmed(),
            badge_colored
        );
    }
}

/// Page line, omitted when everything fits on one page.
pub(super) fn print_cursor(cursor: Option<&PageCursor>) {
    if let Some(cursor) = cursor {
        if cursor.total_pages > 1 {
            println!(
                "{}",
                format!("Page {} of {}", cursor.current_page, cursor.total_pages).dimmed()
            );
        }
    }
}

/// Full details card, the modal view of a listing.
pub(super) fn print_details(property: &Property) {
    println!("{}", property.title.bold());
    println!("{}", RULE);
    println!("{}", property.image.dimmed());
    println!("{} ${}/night", "Price:".bold(), property.price);
    println!("{}", "Location:".bold());
    println!("  {}", property.location.first_line);
    println!("  {}, {}", property.location.city, property.location.code);
    println!("  {}", property.location.country);
    println!("{}", "Contact:".bold());
    println!("  {}", property.contact.0);
    println!("  {}", property.contact.1);
    let status = if property.is_available {
        "Available".green()
    } else {
        "Booked".red()
    };
    println!("{} {}", "Status:".bold(), status);
}

/// Review cards: star row, reviewer (gold members get a star badge),
/// date.
pub(super) fn print_reviews(reviews: &[Review]) {
    for review in reviews {
        let filled = usize::from(review.stars.min(5));
        let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
        let badge = if review.loyalty == LoyaltyTier::Gold {
            " ★"
        } else {
            ""
        };
        println!(
            "  {}  {}{}  {}",
            stars.yellow(),
            review.name,
            badge.yellow(),
            review.date.dimmed()
        );
    }
}

pub(super) fn print_featured(featured: &FeaturedProperty) {
    println!("{}", featured.title.bold());
    println!("{}", RULE);
    println!("{}", featured.image.dimmed());
    print_reviews(&featured.reviews);
}

pub(super) fn print_facets(facets: &FacetSet) {
    println!("{}", "Countries:".bold());
    for country in &facets.countries {
        println!("  {}", country);
    }
    println!("{}", "Prices:".bold());
    for price in &facets.prices {
        println!("  ${}", price);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
