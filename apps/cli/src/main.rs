//! # Pizzeria Console Application Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create an empty order session
//! 3. Run the main menu loop until the user exits

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    pizzeria_cli::run().await
}
