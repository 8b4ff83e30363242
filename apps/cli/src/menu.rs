//! # Menu Rendering & Input Parsing
//!
//! Everything the user sees on the main screen, and the translation of
//! their raw input into typed values. Malformed input is handled here;
//! the core only ever receives validated parameters.

use pizzeria_core::PizzaKind;

/// Width of the decorative banner around the main menu.
const BANNER_WIDTH: usize = 50;

// =============================================================================
// Menu Action
// =============================================================================

/// One of the six actions on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowOrder,
    AddPizza,
    RemovePizza,
    ConfirmOrder,
    ClearOrder,
    Exit,
}

impl MenuAction {
    /// Parses a raw menu choice ("1".."6"). `None` for anything else.
    pub fn parse(input: &str) -> Option<MenuAction> {
        match input.trim() {
            "1" => Some(MenuAction::ShowOrder),
            "2" => Some(MenuAction::AddPizza),
            "3" => Some(MenuAction::RemovePizza),
            "4" => Some(MenuAction::ConfirmOrder),
            "5" => Some(MenuAction::ClearOrder),
            "6" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// Input Parsing
// =============================================================================

/// Parses a pizza selection ("1".."3") into a catalog entry.
pub fn parse_pizza_choice(input: &str) -> Option<PizzaKind> {
    let n: usize = input.trim().parse().ok()?;
    (1..=PizzaKind::ALL.len()).contains(&n).then(|| PizzaKind::ALL[n - 1])
}

/// Parses the 1-based pizza number the user typed into the core's
/// 0-based position.
///
/// Non-numeric input is `None` (the session re-prompts). A numeric but
/// out-of-range value, "0" included, becomes an out-of-range position
/// that the core rejects uniformly.
pub fn parse_removal_position(input: &str) -> Option<i64> {
    let n: i64 = input.trim().parse().ok()?;
    Some(n - 1)
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the main menu screen.
pub fn main_menu() -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    format!(
        "{banner}\n\
         PIZZERIA - MENU\n\
         {banner}\n\
         1. View order\n\
         2. Add pizza\n\
         3. Remove pizza\n\
         4. Confirm order\n\
         5. Clear order\n\
         6. Exit\n\
         {banner}"
    )
}

/// Renders the numbered catalog listing shown before a pizza is chosen.
pub fn pizza_list() -> String {
    let mut out = String::from("Available pizzas:");
    for (i, kind) in PizzaKind::ALL.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({}) - {}, {} sauce, {} crust",
            i + 1,
            kind.name(),
            kind.cost(),
            kind.topping(),
            kind.sauce(),
            kind.crust()
        ));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_action() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::ShowOrder));
        assert_eq!(MenuAction::parse("4"), Some(MenuAction::ConfirmOrder));
        assert_eq!(MenuAction::parse(" 6 "), Some(MenuAction::Exit));

        assert_eq!(MenuAction::parse("0"), None);
        assert_eq!(MenuAction::parse("7"), None);
        assert_eq!(MenuAction::parse(""), None);
        assert_eq!(MenuAction::parse("pizza"), None);
    }

    #[test]
    fn test_parse_pizza_choice() {
        assert_eq!(parse_pizza_choice("1"), Some(PizzaKind::Bbq));
        assert_eq!(parse_pizza_choice("2"), Some(PizzaKind::Pepperoni));
        assert_eq!(parse_pizza_choice("3"), Some(PizzaKind::Seafood));

        assert_eq!(parse_pizza_choice("0"), None);
        assert_eq!(parse_pizza_choice("4"), None);
        assert_eq!(parse_pizza_choice("bbq"), None);
    }

    #[test]
    fn test_parse_removal_position() {
        // On-screen numbers are 1-based, the core is 0-based
        assert_eq!(parse_removal_position("1"), Some(0));
        assert_eq!(parse_removal_position(" 3 "), Some(2));

        // "0" maps to -1, which the core rejects as out of range
        assert_eq!(parse_removal_position("0"), Some(-1));

        assert_eq!(parse_removal_position("abc"), None);
        assert_eq!(parse_removal_position(""), None);
    }

    #[test]
    fn test_main_menu_lists_all_actions() {
        let screen = main_menu();
        assert!(screen.contains("PIZZERIA - MENU"));
        for entry in [
            "1. View order",
            "2. Add pizza",
            "3. Remove pizza",
            "4. Confirm order",
            "5. Clear order",
            "6. Exit",
        ] {
            assert!(screen.contains(entry), "menu is missing {entry:?}");
        }
    }

    #[test]
    fn test_pizza_list_matches_catalog() {
        let listing = pizza_list();
        assert!(listing.contains("1. BBQ Pizza (450 rub.)"));
        assert!(listing.contains("2. Pepperoni (500 rub.)"));
        assert!(listing.contains("3. Seafood (650 rub.)"));
        assert!(listing.contains("barbecue sauce"));
        assert!(listing.contains("thick crust"));
    }
}
