//! # Pizzeria CLI Library
//!
//! Core library for the pizzeria console application.
//!
//! ## Module Organization
//! ```text
//! pizzeria_cli/
//! ├── lib.rs          ◄─── You are here (run + tracing setup)
//! ├── menu.rs         ◄─── Main-menu rendering and input parsing
//! └── session.rs      ◄─── Interactive loop driving the Order
//! ```
//!
//! ## Division of Labor
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  User types "2"                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  menu::MenuAction::parse ──► Session::add_pizza                     │
//! │       │                           │                                 │
//! │       │                           ▼                                 │
//! │       │                    Order::add(kind)      (pizzeria-core)    │
//! │       │                           │                                 │
//! │       ▼                           ▼                                 │
//! │  malformed input stays      println! of the returned line           │
//! │  in this crate              happens back in this crate              │
//! │                                                                     │
//! │  The core never sees raw user input and never prints.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod menu;
pub mod session;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use session::Session;

/// Runs the pizzeria console application.
///
/// Initializes logging, then hands control to the interactive session
/// until the user chooses to exit (or stdin closes).
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    info!("Starting pizzeria console application");

    Session::new().run().await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pizzeria=trace` - Show trace for pizzeria crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pizzeria=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
