//! # Showroom Admin Entry Point
//!
//! Loads config, seeds the session, and prints the inventory overview.
//! The actual setup is in lib.rs so it can be tested.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    showroom_admin::run()
}
