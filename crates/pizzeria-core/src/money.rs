//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Units                                        │
//! │    The whole menu is priced in whole rubles, so a plain i64         │
//! │    carries every value in the system exactly.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! let price = Money::from_units(450);
//! let total = price + Money::from_units(500);
//! assert_eq!(total.units(), 950);
//! assert_eq!(total.to_string(), "950 rub.");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole currency units (rubles).
///
/// ## Design Decisions
/// - **i64 (signed)**: Sums of catalog prices never overflow, and
///   subtraction stays well-defined for future refund-style math
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for order snapshots
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_units(450);
    /// assert_eq!(price.units(), 450);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way every menu line and
/// order total renders it: `"450 rub."`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rub.", self.0)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (order totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(450);
        assert_eq!(money.units(), 450);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(450)), "450 rub.");
        assert_eq!(format!("{}", Money::from_units(0)), "0 rub.");
        assert_eq!(format!("{}", Money::from_units(1600)), "1600 rub.");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(450);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 950);
        assert_eq!((b - a).units(), 50);
        assert_eq!((a * 3).units(), 1350);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.units(), 950);
    }

    #[test]
    fn test_sum() {
        let prices = [
            Money::from_units(450),
            Money::from_units(500),
            Money::from_units(650),
        ];
        let total: Money = prices.into_iter().sum();
        assert_eq!(total.units(), 1600);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_units(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());

        assert_eq!(Money::default(), Money::zero());
    }
}
