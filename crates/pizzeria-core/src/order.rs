//! # Order Aggregate
//!
//! Manages the mutable list of selected pizzas and computes derived totals.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Order State Operations                          │
//! │                                                                     │
//! │  Menu Action              Core Operation         State Change       │
//! │  ───────────              ──────────────         ────────────       │
//! │                                                                     │
//! │  Pick a pizza ──────────► add(kind) ───────────► lines.push(line)   │
//! │                                                                     │
//! │  Remove by number ──────► remove(position) ────► lines.remove(i)    │
//! │                                                                     │
//! │  View order ────────────► render_summary() ────► (read only)        │
//! │                                                                     │
//! │  Confirm ───────────────► confirm() ───────────► (read only)        │
//! │                                                                     │
//! │  Clear ─────────────────► clear() ─────────────► lines.clear()      │
//! │                                                                     │
//! │  NOTE: Every operation here is pure computation or an in-memory     │
//! │        mutation. Printing and pausing belong to the CLI.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two States, One Switch
//! The order is either Empty or NonEmpty, determined solely by the
//! number of lines. Only `confirm()` behaves differently between the
//! two (reject vs. process-all); everything else is uniform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{OrderError, OrderResult};
use crate::menu::PizzaKind;
use crate::money::Money;

/// Width of the decorative banner in summaries.
const BANNER_WIDTH: usize = 50;

/// Sentinel summary for an order with no lines.
const EMPTY_ORDER: &str = "Order is empty";

/// Terminal message of a successful confirmation.
const ORDER_READY: &str = "ORDER IS READY! ENJOY YOUR MEAL!";

// =============================================================================
// Order Line
// =============================================================================

/// One selected pizza occupying a position in the order.
///
/// ## Design Notes
/// - `kind`: which catalog entry was selected; the catalog data itself
///   is immutable, so the line only needs the selector, never a copy
/// - `added_at`: when the line entered the order
///
/// Lines have no identity beyond their position: removal is positional,
/// and the same kind may appear any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Which pizza was selected.
    pub kind: PizzaKind,

    /// When this line was added to the order.
    pub added_at: DateTime<Utc>,
}

impl OrderLine {
    fn new(kind: PizzaKind) -> Self {
        OrderLine {
            kind,
            added_at: Utc::now(),
        }
    }

    /// Display name of the selected pizza.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Price of the selected pizza.
    #[inline]
    pub fn cost(&self) -> Money {
        self.kind.cost()
    }

    /// Single-line summary rendering of the selected pizza.
    #[inline]
    pub fn describe(&self) -> String {
        self.kind.describe()
    }

    /// Preparation message of the selected pizza.
    #[inline]
    pub fn prepare(&self) -> String {
        self.kind.prepare()
    }
}

// =============================================================================
// Order
// =============================================================================

/// The customer's order: an ordered, mutable list of selected pizzas.
///
/// ## Invariants
/// - Insertion order is preserved; duplicates are allowed
/// - The total is recomputed on demand, never cached
/// - Lives in memory for the session only; no persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Lines in the order.
    lines: Vec<OrderLine>,

    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a pizza to the order. Always succeeds.
    ///
    /// Returns the appended line so the caller can render its own
    /// "added" notification; the core itself never prints.
    pub fn add(&mut self, kind: PizzaKind) -> &OrderLine {
        self.lines.push(OrderLine::new(kind));
        // Just pushed, so the vec is non-empty
        self.lines.last().expect("line was just pushed")
    }

    /// Removes and returns the line at `position` (zero-based).
    ///
    /// ## Behavior
    /// - Valid position: removes exactly that line, the relative order
    ///   of the remaining lines is preserved (stable removal)
    /// - Out of range, negative included: `InvalidPosition`, and the
    ///   order is left unchanged
    ///
    /// The position is `i64` rather than `usize` so that a negative
    /// number coming out of the presentation layer's "1-based minus
    /// one" arithmetic is rejected here like any other bad position,
    /// instead of wrapping or panicking.
    pub fn remove(&mut self, position: i64) -> OrderResult<OrderLine> {
        if position < 0 || position as usize >= self.lines.len() {
            return Err(OrderError::InvalidPosition {
                position,
                len: self.lines.len(),
            });
        }

        Ok(self.lines.remove(position as usize))
    }

    /// Empties the order unconditionally. No error conditions.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of the cost of every line; zero for an empty order.
    ///
    /// Pure and recomputed on demand: the lines are immutable once
    /// added, and removal keeps the sum honest without any cache.
    pub fn total_cost(&self) -> Money {
        self.lines.iter().map(|line| line.cost()).sum()
    }

    /// Builds the order summary as a single string.
    ///
    /// ## Behavior
    /// - Empty order: returns the `"Order is empty"` sentinel, not a
    ///   numbered list
    /// - Otherwise: a banner, every line's `describe()` output numbered
    ///   from 1, and the total cost
    ///
    /// Pure; the CLI decides when (and whether) to print the result.
    ///
    /// ## Example Output
    /// ```text
    /// ==================================================
    /// YOUR ORDER:
    /// ==================================================
    /// 1. BBQ Pizza: thick crust, barbecue sauce, topping: chicken - 450 rub.
    /// 2. Pepperoni: thin crust, tomato sauce, topping: pepperoni - 500 rub.
    ///
    /// Total cost: 950 rub.
    /// ==================================================
    /// ```
    pub fn render_summary(&self) -> String {
        if self.lines.is_empty() {
            return EMPTY_ORDER.to_string();
        }

        let banner = "=".repeat(BANNER_WIDTH);
        let mut out = String::new();
        out.push_str(&banner);
        out.push_str("\nYOUR ORDER:\n");
        out.push_str(&banner);
        out.push('\n');

        for (i, line) in self.lines.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, line.describe()));
        }

        out.push_str(&format!("\nTotal cost: {}\n", self.total_cost()));
        out.push_str(&banner);
        out
    }

    /// Produces the confirmation sequence: a start message, one
    /// numbered preparation message per line in insertion order, and
    /// the fixed ready message.
    ///
    /// ## Behavior
    /// - Empty order: rejected with `EmptyOrder` - this is an error,
    ///   not a no-op success
    /// - Otherwise: the full message sequence, strictly in insertion
    ///   order
    ///
    /// The simulated per-pizza cooking pause is the caller's concern:
    /// this keeps the sequence itself testable without any timing, and
    /// the pause can never reorder or skip a step.
    pub fn confirm(&self) -> OrderResult<Vec<String>> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let mut steps = Vec::with_capacity(self.lines.len() + 2);
        steps.push("Starting order preparation...".to_string());
        for (i, line) in self.lines.iter().enumerate() {
            steps.push(format!("{}. {}", i + 1, line.prepare()));
        }
        steps.push(ORDER_READY.to_string());

        Ok(steps)
    }

    /// The current lines, in insertion order.
    #[inline]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Number of lines in the order.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the order has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
