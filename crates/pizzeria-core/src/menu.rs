//! # Pizza Catalog
//!
//! The fixed menu of orderable pizzas.
//!
//! ## Why an Enum, Not a Trait Hierarchy?
//! There are exactly three pizzas, they never change at runtime, and
//! the only "behavior" is rendering fixed data. A closed enum with
//! `const fn` data accessors models that directly: no virtual dispatch
//! for what is really static data selection, and `match` guarantees we
//! never forget a variant.
//!
//! ## Catalog Data
//! ```text
//! ┌───────────┬───────────────┬───────────────────┬──────────┬───────┬──────┐
//! │ variant   │ name          │ topping           │ sauce    │ crust │ cost │
//! ├───────────┼───────────────┼───────────────────┼──────────┼───────┼──────┤
//! │ Bbq       │ BBQ Pizza     │ chicken           │ barbecue │ thick │  450 │
//! │ Pepperoni │ Pepperoni     │ pepperoni         │ tomato   │ thin  │  500 │
//! │ Seafood   │ Seafood       │ shrimp, seafood   │ cream    │ thin  │  650 │
//! └───────────┴───────────────┴───────────────────┴──────────┴───────┴──────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Pizza Kind
// =============================================================================

/// One of the three fixed pizza variants on the menu.
///
/// Variants are stateless and reusable: an order line only records
/// which kind was selected, it never copies or mutates catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaKind {
    Bbq,
    Pepperoni,
    Seafood,
}

impl PizzaKind {
    /// The full menu, in the order it is shown to the customer.
    pub const ALL: [PizzaKind; 3] = [PizzaKind::Bbq, PizzaKind::Pepperoni, PizzaKind::Seafood];

    /// Display name, unique per variant.
    pub const fn name(&self) -> &'static str {
        match self {
            PizzaKind::Bbq => "BBQ Pizza",
            PizzaKind::Pepperoni => "Pepperoni",
            PizzaKind::Seafood => "Seafood",
        }
    }

    /// Topping description.
    pub const fn topping(&self) -> &'static str {
        match self {
            PizzaKind::Bbq => "chicken",
            PizzaKind::Pepperoni => "pepperoni",
            PizzaKind::Seafood => "shrimp, seafood",
        }
    }

    /// Sauce description.
    pub const fn sauce(&self) -> &'static str {
        match self {
            PizzaKind::Bbq => "barbecue",
            PizzaKind::Pepperoni => "tomato",
            PizzaKind::Seafood => "cream",
        }
    }

    /// Crust description.
    pub const fn crust(&self) -> &'static str {
        match self {
            PizzaKind::Bbq => "thick",
            PizzaKind::Pepperoni => "thin",
            PizzaKind::Seafood => "thin",
        }
    }

    /// Fixed price. Always positive.
    pub const fn cost(&self) -> Money {
        match self {
            PizzaKind::Bbq => Money::from_units(450),
            PizzaKind::Pepperoni => Money::from_units(500),
            PizzaKind::Seafood => Money::from_units(650),
        }
    }

    /// The wording used in the preparation message. Differs slightly
    /// from `name()` per variant ("BBQ pizza", not "BBQ Pizza").
    const fn prepare_label(&self) -> &'static str {
        match self {
            PizzaKind::Bbq => "BBQ pizza",
            PizzaKind::Pepperoni => "Pepperoni",
            PizzaKind::Seafood => "Seafood pizza",
        }
    }

    /// Returns the single-line menu/summary rendering.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::PizzaKind;
    ///
    /// assert_eq!(
    ///     PizzaKind::Bbq.describe(),
    ///     "BBQ Pizza: thick crust, barbecue sauce, topping: chicken - 450 rub."
    /// );
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Returns the variant-specific preparation message.
    ///
    /// This is a fixed lookup, not a computed algorithm: one template
    /// plus the per-variant label and ingredients.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::PizzaKind;
    ///
    /// assert_eq!(
    ///     PizzaKind::Pepperoni.prepare(),
    ///     "Preparing Pepperoni: thin crust, tomato sauce, pepperoni topping"
    /// );
    /// ```
    pub fn prepare(&self) -> String {
        format!(
            "Preparing {}: {} crust, {} sauce, {} topping",
            self.prepare_label(),
            self.crust(),
            self.sauce(),
            self.topping()
        )
    }
}

/// The same composite line `describe()` returns, so a `PizzaKind`
/// drops straight into `format!` in summaries and menus.
impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} crust, {} sauce, topping: {} - {}",
            self.name(),
            self.crust(),
            self.sauce(),
            self.topping(),
            self.cost()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_data() {
        assert_eq!(PizzaKind::Bbq.name(), "BBQ Pizza");
        assert_eq!(PizzaKind::Bbq.topping(), "chicken");
        assert_eq!(PizzaKind::Bbq.sauce(), "barbecue");
        assert_eq!(PizzaKind::Bbq.crust(), "thick");
        assert_eq!(PizzaKind::Bbq.cost(), Money::from_units(450));

        assert_eq!(PizzaKind::Pepperoni.name(), "Pepperoni");
        assert_eq!(PizzaKind::Pepperoni.topping(), "pepperoni");
        assert_eq!(PizzaKind::Pepperoni.sauce(), "tomato");
        assert_eq!(PizzaKind::Pepperoni.crust(), "thin");
        assert_eq!(PizzaKind::Pepperoni.cost(), Money::from_units(500));

        assert_eq!(PizzaKind::Seafood.name(), "Seafood");
        assert_eq!(PizzaKind::Seafood.topping(), "shrimp, seafood");
        assert_eq!(PizzaKind::Seafood.sauce(), "cream");
        assert_eq!(PizzaKind::Seafood.crust(), "thin");
        assert_eq!(PizzaKind::Seafood.cost(), Money::from_units(650));
    }

    #[test]
    fn test_all_costs_positive() {
        for kind in PizzaKind::ALL {
            assert!(kind.cost().is_positive(), "{} has non-positive cost", kind.name());
        }
    }

    #[test]
    fn test_names_unique() {
        let names: Vec<_> = PizzaKind::ALL.iter().map(|k| k.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn test_describe() {
        let line = PizzaKind::Bbq.describe();
        assert!(line.contains("BBQ Pizza"));
        assert!(line.contains("thick"));
        assert!(line.contains("barbecue"));
        assert!(line.contains("chicken"));
        assert!(line.contains("450"));

        // Display and describe render the same composite
        assert_eq!(line, PizzaKind::Bbq.to_string());
    }

    #[test]
    fn test_prepare_messages() {
        assert!(PizzaKind::Bbq.prepare().contains("Preparing BBQ pizza"));
        assert!(PizzaKind::Bbq.prepare().contains("chicken"));

        assert!(PizzaKind::Pepperoni.prepare().contains("Preparing Pepperoni"));
        assert!(PizzaKind::Pepperoni.prepare().contains("pepperoni"));

        assert!(PizzaKind::Seafood.prepare().contains("Preparing Seafood pizza"));
        assert!(PizzaKind::Seafood.prepare().contains("shrimp"));
    }

    #[test]
    fn test_describe_deterministic() {
        // Pure data lookup: repeated calls render byte-identical output
        assert_eq!(PizzaKind::Seafood.describe(), PizzaKind::Seafood.describe());
        assert_eq!(PizzaKind::Seafood.prepare(), PizzaKind::Seafood.prepare());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&PizzaKind::Bbq).unwrap();
        assert_eq!(json, "\"bbq\"");
        let back: PizzaKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PizzaKind::Bbq);
    }
}
