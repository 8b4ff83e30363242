//! # pizzeria-core: Pure Business Logic for the Pizzeria
//!
//! This crate is the **heart** of the pizzeria console application. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Pizzeria Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   apps/cli (console loop)                     │  │
//! │  │   Main menu ──► Add/Remove prompts ──► Confirm printing       │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ pizzeria-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐   │  │
//! │  │   │   menu    │  │   order   │  │   money   │  │  error   │   │  │
//! │  │   │ PizzaKind │  │   Order   │  │   Money   │  │ OrderErr │   │  │
//! │  │   │  catalog  │  │ OrderLine │  │  rubles   │  │  typed   │   │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └──────────┘   │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO PRINTING • NO SLEEPING • PURE FUNCTIONS         │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - The fixed pizza catalog ([`PizzaKind`])
//! - [`order`] - The mutable order aggregate ([`Order`], [`OrderLine`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Printing, prompting and sleeping are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rubles (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{Money, Order, PizzaKind};
//!
//! let mut order = Order::new();
//! order.add(PizzaKind::Bbq);
//! order.add(PizzaKind::Pepperoni);
//!
//! assert_eq!(order.total_cost(), Money::from_units(950));
//!
//! // The confirmation is a plain sequence of strings; the caller decides
//! // when to print each one (and how long to pause between them).
//! let steps = order.confirm().unwrap();
//! assert!(steps.last().unwrap().contains("ORDER IS READY"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pizzeria_core::Order` instead of
// `use pizzeria_core::order::Order`

pub use error::{OrderError, OrderResult};
pub use menu::PizzaKind;
pub use money::Money;
pub use order::{Order, OrderLine};
