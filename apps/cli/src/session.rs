//! # Interactive Session
//!
//! The console loop that owns the [`Order`] for its whole lifetime and
//! drives it from user input.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Session Lifecycle                              │
//! │                                                                     │
//! │  ┌─────────┐  add   ┌──────────┐  confirm  ┌────────────────────┐   │
//! │  │  Empty  │ ─────► │ NonEmpty │ ────────► │ Preparation steps  │   │
//! │  │  Order  │ ◄───── │  Order   │           │ printed one by one │   │
//! │  └─────────┘ clear/ └──────────┘           │ with a pause each  │   │
//! │       │      remove                        └────────────────────┘   │
//! │       │                                                             │
//! │       └── confirm on an empty order is rejected, not a no-op        │
//! │                                                                     │
//! │  Exit: menu choice 6, or stdin closing (Ctrl-D)                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Preparation Pause
//! The pause between preparation steps simulates kitchen timing, and
//! nothing else: the step sequence comes fully formed from the core, so
//! the pause can never reorder or skip a step. Tests construct sessions
//! with a zero pause.

use std::io::Write as _;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::time::sleep;
use tracing::debug;

use pizzeria_core::Order;

use crate::menu::{self, MenuAction};

/// Simulated cooking time per pizza during confirmation.
const PREPARATION_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Session
// =============================================================================

/// An interactive ordering session.
///
/// Owns the order exclusively: no sharing, no locking. All state is
/// discarded when the session ends.
pub struct Session {
    order: Order,
    preparation_delay: Duration,
}

impl Session {
    /// Creates a session with the default preparation pause.
    pub fn new() -> Self {
        Session::with_delay(PREPARATION_DELAY)
    }

    /// Creates a session with a custom preparation pause.
    /// Tests use `Duration::ZERO`.
    pub fn with_delay(preparation_delay: Duration) -> Self {
        Session {
            order: Order::new(),
            preparation_delay,
        }
    }

    /// Runs the main menu loop until the user exits or stdin closes.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            println!("\n{}", menu::main_menu());

            let Some(choice) = prompt(&mut lines, "Choose an action (1-6): ").await? else {
                break; // stdin closed
            };

            match MenuAction::parse(&choice) {
                Some(MenuAction::ShowOrder) => self.show_order(),
                Some(MenuAction::AddPizza) => self.add_pizza(&mut lines).await?,
                Some(MenuAction::RemovePizza) => self.remove_pizza(&mut lines).await?,
                Some(MenuAction::ConfirmOrder) => self.confirm_order().await,
                Some(MenuAction::ClearOrder) => self.clear_order(&mut lines).await?,
                Some(MenuAction::Exit) => {
                    println!("Thank you for your order! Goodbye!");
                    break;
                }
                None => println!("Invalid choice! Enter a number from 1 to 6."),
            }
        }

        Ok(())
    }

    /// Prints the current order summary (or the empty-order sentinel).
    fn show_order(&self) {
        debug!("show order");
        println!("\n{}", self.order.render_summary());
    }

    /// Lists the catalog, reads a selection, and appends it.
    async fn add_pizza<R>(&mut self, lines: &mut Lines<R>) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        println!("\n{}", menu::pizza_list());

        let Some(input) = prompt(lines, "Choose a pizza (1-3): ").await? else {
            return Ok(());
        };

        match menu::parse_pizza_choice(&input) {
            Some(kind) => {
                let name = self.order.add(kind).name();
                debug!(pizza = name, total = self.order.len(), "pizza added");
                println!("Pizza '{}' added to the order!", name);
            }
            None => println!("Invalid pizza choice!"),
        }

        Ok(())
    }

    /// Shows the order, reads a 1-based number, and removes that line.
    async fn remove_pizza<R>(&mut self, lines: &mut Lines<R>) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        if self.order.is_empty() {
            println!("Order is empty! Nothing to remove.");
            return Ok(());
        }

        self.show_order();

        let Some(input) = prompt(lines, "Enter the pizza number to remove: ").await? else {
            return Ok(());
        };

        let Some(position) = menu::parse_removal_position(&input) else {
            println!("Enter a valid number!");
            return Ok(());
        };

        match self.order.remove(position) {
            Ok(line) => {
                debug!(pizza = line.name(), position, "pizza removed");
                println!("Pizza '{}' removed from the order!", line.name());
            }
            Err(err) => {
                debug!(%err, "removal rejected");
                println!("Invalid pizza number!");
            }
        }

        Ok(())
    }

    /// Prints the confirmation sequence, pausing between pizzas.
    async fn confirm_order(&self) {
        match self.order.confirm() {
            Ok(steps) => {
                debug!(pizzas = self.order.len(), "order confirmed");
                let last = steps.len() - 1;
                for (i, step) in steps.iter().enumerate() {
                    println!("{step}");
                    // Pause after each preparation step, but not after
                    // the start or ready messages
                    if i > 0 && i < last {
                        sleep(self.preparation_delay).await;
                    }
                }
            }
            Err(err) => {
                debug!(%err, "confirmation rejected");
                println!("Order is empty! Add some pizzas.");
            }
        }
    }

    /// Clears the order after a yes/no confirmation.
    async fn clear_order<R>(&mut self, lines: &mut Lines<R>) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        if self.order.is_empty() {
            println!("Order is already empty!");
            return Ok(());
        }

        let Some(answer) = prompt(lines, "Are you sure you want to clear the order? (yes/no): ").await?
        else {
            return Ok(());
        };

        if answer.eq_ignore_ascii_case("yes") {
            self.order.clear();
            debug!("order cleared");
            println!("Order cleared!");
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

// =============================================================================
// Prompt Helper
// =============================================================================

/// Prints a prompt and reads one trimmed line.
/// Returns `None` when stdin has closed.
async fn prompt<R>(lines: &mut Lines<R>, text: &str) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{text}");
    std::io::stdout().flush()?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_core::PizzaKind;

    #[test]
    fn test_new_session_starts_empty() {
        let session = Session::new();
        assert!(session.order.is_empty());
        assert_eq!(session.preparation_delay, PREPARATION_DELAY);
    }

    #[test]
    fn test_with_delay_overrides_pause() {
        let session = Session::with_delay(Duration::ZERO);
        assert_eq!(session.preparation_delay, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_confirm_with_zero_delay_completes() {
        // The pause is realism only; correctness never depends on it
        let mut session = Session::with_delay(Duration::ZERO);
        session.order.add(PizzaKind::Bbq);
        session.order.add(PizzaKind::Pepperoni);

        session.confirm_order().await;

        // Confirmation does not consume the order
        assert_eq!(session.order.len(), 2);
    }

    #[tokio::test]
    async fn test_prompt_reads_trimmed_line() {
        let input = b"  2  \n" as &[u8];
        let mut lines = BufReader::new(input).lines();

        let answer = prompt(&mut lines, "").await.unwrap();
        assert_eq!(answer.as_deref(), Some("2"));

        // Input exhausted: prompt reports a closed stream
        let eof = prompt(&mut lines, "").await.unwrap();
        assert_eq!(eof, None);
    }
}
