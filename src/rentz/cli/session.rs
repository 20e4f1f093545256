//! Interactive browsing session: a read-eval-print loop over the live
//! state container. The terminal stands in for the filter form, the
//! pagination buttons, and the details modal.
//!
//! Filter edits (`country`, `price`, `available`, `sort`) accumulate in
//! a pending form and take effect as one `apply`, the way the original
//! filter controls sit idle until their apply button is pressed.
//! Search fires immediately.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use rentz::api::{RentzApi, NO_MATCH_MESSAGE};
use rentz::error::{RentzError, Result};
use rentz::model::SortOption;
use rentz::query::Filters;

use super::print;

/// Form state carried between commands. Filters persist the way the
/// filter controls keep their values between applications; `apply`
/// always submits the whole form.
#[derive(Debug, Default)]
struct SessionForm {
    filters: Filters,
    sort: Option<SortOption>,
}

#[derive(Debug, PartialEq)]
enum SessionCmd {
    Country(String),
    Price(String),
    Available(Option<bool>),
    Sort(String),
    Apply,
    Search(String),
    Reset,
    Next,
    Prev,
    Show(usize),
    Back,
    List,
    Facets,
    Reviews,
    Featured,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub(super) fn run(api: &mut RentzApi) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(RentzError::Terminal(
            "browse needs an interactive terminal (stdin and stdout must be TTYs)".to_string(),
        ));
    }

    let info = api.info()?;
    print::print_messages(&info.messages);
    println!("Featured: {}", api.featured().title.bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());

    let mut form = SessionForm::default();
    let mut input = String::new();
    render(api);
    loop {
        print!("rentz> ");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match parse_line(&input) {
            SessionCmd::Empty => {}
            SessionCmd::Quit => break,
            SessionCmd::Help => print_session_help(),
            SessionCmd::Country(value) => {
                form.filters.country = if value.is_empty() { None } else { Some(value) };
                print_form(&form);
            }
            SessionCmd::Price(value) => {
                if value.is_empty() {
                    form.filters.price = None;
                } else if let Ok(price) = value.parse() {
                    form.filters.price = Some(price);
                } else {
                    println!("{}", format!("Not a price: {}", value).yellow());
                    continue;
                }
                print_form(&form);
            }
            SessionCmd::Available(setting) => {
                form.filters.available_only = setting.unwrap_or(!form.filters.available_only);
                print_form(&form);
            }
            SessionCmd::Sort(key) => {
                if key.is_empty() {
                    form.sort = None;
                } else if let Ok(option) = key.parse() {
                    form.sort = Some(option);
                }
                // unrecognized keys leave the order as it is
                print_form(&form);
            }
            SessionCmd::Apply => {
                api.apply_filters(&form.filters, form.sort);
                render(api);
            }
            SessionCmd::Search(term) => {
                // a cleared search box means reset, form included
                if term.trim().is_empty() {
                    form = SessionForm::default();
                }
                api.search(&term);
                render(api);
            }
            SessionCmd::Reset => {
                form = SessionForm::default();
                api.reset_filters();
                render(api);
            }
            SessionCmd::Next => {
                api.next_page();
                render(api);
            }
            SessionCmd::Prev => {
                api.previous_page();
                render(api);
            }
            SessionCmd::Show(index) => match api.select_listing(index) {
                Ok(()) => render(api),
                Err(e) => println!("{}", e.to_string().red()),
            },
            SessionCmd::Back | SessionCmd::List => {
                api.close_details();
                render(api);
            }
            SessionCmd::Facets => {
                let result = api.facets()?;
                if let Some(facets) = &result.facets {
                    print::print_facets(facets);
                }
            }
            SessionCmd::Reviews => {
                let result = api.reviews()?;
                print::print_messages(&result.messages);
                print::print_reviews(&result.reviews);
            }
            SessionCmd::Featured => print::print_featured(api.featured()),
            SessionCmd::Unknown(cmd) => {
                println!(
                    "{}",
                    format!("Unknown command: {} (try 'help')", cmd).yellow()
                );
            }
        }
    }

    Ok(())
}

/// Redraw from state: the details card when one is open, otherwise the
/// current page of the view.
fn render(api: &RentzApi) {
    let state = api.state();
    println!();
    if state.details_open() {
        if let Some(property) = state.selected() {
            print::print_details(property);
        }
        println!("{}", "('back' returns to the list)".dimmed());
        return;
    }
    if state.view().is_empty() {
        println!("{}", NO_MATCH_MESSAGE.dimmed());
        return;
    }
    let cursor = state.cursor();
    let start = (cursor.current_page - 1) * cursor.items_per_page + 1;
    print::print_listings(state.page_items(), start);
    print::print_cursor(Some(cursor));
}

/// Echo the pending form so the user can see what `apply` will submit.
fn print_form(form: &SessionForm) {
    let mut parts: Vec<String> = Vec::new();
    if let Some(country) = &form.filters.country {
        parts.push(format!("country={}", country));
    }
    if let Some(price) = form.filters.price {
        parts.push(format!("price={}", price));
    }
    if form.filters.available_only {
        parts.push("available".to_string());
    }
    if let Some(sort) = form.sort {
        parts.push(format!("sort={}", sort));
    }
    let summary = if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(" ")
    };
    println!("{}", format!("filters: {} ('apply' to use them)", summary).dimmed());
}

fn parse_line(line: &str) -> SessionCmd {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SessionCmd::Empty;
    }
    if let Ok(index) = trimmed.parse() {
        return SessionCmd::Show(index);
    }

    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (trimmed, ""),
    };

    match cmd {
        "country" => SessionCmd::Country(rest.to_string()),
        "price" => SessionCmd::Price(rest.to_string()),
        "available" => match rest {
            "" => SessionCmd::Available(None),
            "on" => SessionCmd::Available(Some(true)),
            "off" => SessionCmd::Available(Some(false)),
            _ => SessionCmd::Unknown(trimmed.to_string()),
        },
        "sort" => SessionCmd::Sort(rest.to_string()),
        "apply" => SessionCmd::Apply,
        "search" => SessionCmd::Search(rest.to_string()),
        "reset" | "clear" => SessionCmd::Reset,
        "next" | "n" => SessionCmd::Next,
        "prev" | "p" => SessionCmd::Prev,
        "show" | "v" => rest
            .parse()
            .map(SessionCmd::Show)
            .unwrap_or_else(|_| SessionCmd::Unknown(trimmed.to_string())),
        "back" | "close" => SessionCmd::Back,
        "list" | "ls" => SessionCmd::List,
        "facets" => SessionCmd::Facets,
        "reviews" => SessionCmd::Reviews,
        "featured" => SessionCmd::Featured,
        "help" | "?" => SessionCmd::Help,
        "quit" | "q" | "exit" => SessionCmd::Quit,
        _ => SessionCmd::Unknown(cmd.to_string()),
    }
}

fn print_session_help() {
    println!("Session commands:");
    println!("  country [NAME]      set the country filter (no value clears it)");
    println!("  price [AMOUNT]      set the exact nightly price filter (no value clears it)");
    println!("  available [on|off]  set the availability filter (no value toggles it)");
    println!("  sort [KEY]          price-asc, price-desc, name-asc, name-desc");
    println!("  apply               run the filter form against the catalog");
    println!("  reset               clear the form and show the full catalog");
    println!("  search TERM         search titles, cities, and countries (immediate)");
    println!("  next, prev          page through the current view");
    println!("  show N (or just N)  open the details for listing N");
    println!("  back, list          close the details view / redraw the listings");
    println!("  facets              countries and prices available for filtering");
    println!("  reviews, featured   guest review roundup / featured property");
    println!("  quit                leave the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_open_details() {
        assert_eq!(parse_line("3\n"), SessionCmd::Show(3));
        assert_eq!(parse_line("show 3"), SessionCmd::Show(3));
        assert_eq!(parse_line("v 1"), SessionCmd::Show(1));
    }

    #[test]
    fn form_commands_carry_their_values() {
        assert_eq!(
            parse_line("country United Kingdom"),
            SessionCmd::Country("United Kingdom".to_string())
        );
        assert_eq!(parse_line("country"), SessionCmd::Country(String::new()));
        assert_eq!(parse_line("price 30"), SessionCmd::Price("30".to_string()));
        assert_eq!(
            parse_line("sort price-asc"),
            SessionCmd::Sort("price-asc".to_string())
        );
        assert_eq!(
            parse_line("search polish cottage"),
            SessionCmd::Search("polish cottage".to_string())
        );
    }

    #[test]
    fn available_takes_on_off_or_nothing() {
        assert_eq!(parse_line("available"), SessionCmd::Available(None));
        assert_eq!(parse_line("available on"), SessionCmd::Available(Some(true)));
        assert_eq!(
            parse_line("available off"),
            SessionCmd::Available(Some(false))
        );
        assert_eq!(
            parse_line("available maybe"),
            SessionCmd::Unknown("available maybe".to_string())
        );
    }

    #[test]
    fn aliases_and_blanks() {
        assert_eq!(parse_line(""), SessionCmd::Empty);
        assert_eq!(parse_line("   \n"), SessionCmd::Empty);
        assert_eq!(parse_line("apply"), SessionCmd::Apply);
        assert_eq!(parse_line("ls"), SessionCmd::List);
        assert_eq!(parse_line("facets"), SessionCmd::Facets);
        assert_eq!(parse_line("n"), SessionCmd::Next);
        assert_eq!(parse_line("p"), SessionCmd::Prev);
        assert_eq!(parse_line("q"), SessionCmd::Quit);
        assert_eq!(parse_line("?"), SessionCmd::Help);
    }

    #[test]
    fn unknown_input_is_reported_not_fatal() {
        assert_eq!(
            parse_line("frobnicate"),
            SessionCmd::Unknown("frobnicate".to_string())
        );
        assert_eq!(
            parse_line("show nine"),
            SessionCmd::Unknown("show nine".to_string())
        );
    }
}
