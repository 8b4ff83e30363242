//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (position, order length)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Order domain errors.
///
/// The taxonomy is deliberately narrow: every edge case in the order
/// aggregate has a defined, non-panicking result. The CLI translates
/// these into the messages the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// `remove()` was called with an out-of-range position.
    ///
    /// ## When This Occurs
    /// - Negative position (the user typed 0 or the order shrank)
    /// - Position >= number of lines
    ///
    /// Both are rejected identically; the order is left unchanged.
    #[error("no pizza at position {position} (order has {len} items)")]
    InvalidPosition { position: i64, len: usize },

    /// An operation that requires a non-empty order was called on an
    /// empty one. Confirming an empty order is a rejected operation,
    /// not a no-op success.
    #[error("order is empty")]
    EmptyOrder,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OrderError::InvalidPosition {
            position: 5,
            len: 2,
        };
        assert_eq!(err.to_string(), "no pizza at position 5 (order has 2 items)");

        let err = OrderError::InvalidPosition {
            position: -1,
            len: 0,
        };
        assert_eq!(err.to_string(), "no pizza at position -1 (order has 0 items)");

        assert_eq!(OrderError::EmptyOrder.to_string(), "order is empty");
    }
}
