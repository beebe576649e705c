//! # Showroom Admin Library
//!
//! Composition root for the dealership admin: owns the session's state,
//! loads configuration, sets up logging, and exposes the commands the
//! render surface calls.
//!
//! ## Module Organization
//! ```text
//! showroom_admin/
//! ├── lib.rs          ◄─── You are here (session setup & run)
//! ├── config.rs       ◄─── AdminConfig: defaults, TOML, env overrides
//! ├── notify.rs       ◄─── Notifier trait and toast texts
//! ├── state/
//! │   ├── inventory.rs ◄── Store + dialog behind one Mutex
//! │   ├── settings.rs  ◄── Profile + roster
//! │   ├── dashboard.rs ◄── Read-only metrics snapshot
//! │   └── config.rs    ◄── Read-only config for commands
//! ├── commands/
//! │   ├── inventory.rs ◄── list/search/stats/remove
//! │   ├── dialog.rs    ◄── add/edit dialog
//! │   ├── settings.rs  ◄── profile and team
//! │   ├── dashboard.rs ◄── metrics overview
//! │   └── config.rs    ◄── get_config
//! └── error.rs        ◄─── ApiError and ConfigError
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;

use std::env;
use std::fmt::Write as _;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AdminConfig;
use error::ConfigError;
use notify::{Notifier, TracingNotifier};
use state::{ConfigState, DashboardState, InventoryState, SettingsState};

/// Everything one running admin session owns.
///
/// There is exactly one of these per process. Nothing in it outlives the
/// process; a restart reseeds from config.
pub struct AdminSession {
    pub config: ConfigState,
    pub inventory: InventoryState,
    pub settings: SettingsState,
    pub dashboard: DashboardState,
    pub notifier: Box<dyn Notifier>,
}

impl AdminSession {
    /// Seeds a session from loaded config, logging toasts via tracing.
    pub fn from_config(config: &AdminConfig) -> Result<Self, ConfigError> {
        Self::with_notifier(config, Box::new(TracingNotifier))
    }

    pub fn with_notifier(
        config: &AdminConfig,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, ConfigError> {
        let store = config.load_inventory()?;
        info!(vehicles = store.len(), "Inventory seeded");

        Ok(AdminSession {
            config: ConfigState::from(config),
            inventory: InventoryState::new(store),
            settings: SettingsState::demo()?,
            dashboard: DashboardState::default(),
            notifier,
        })
    }

    /// Text rendering of the inventory screen for one search term.
    pub fn overview(&self, term: &str) -> String {
        let view = commands::inventory::search_vehicles(&self.inventory, term);
        let mut out = String::new();

        // Writing to a String never fails
        let _ = writeln!(out, "{}", self.config.dealership_name);
        let _ = writeln!(out, "{}", "=".repeat(self.config.dealership_name.chars().count()));
        let _ = writeln!(
            out,
            "Total: {}  Available: {}  Sold: {}  Avg. Price: {}",
            view.stats.total, view.stats.available_count, view.stats.sold_count, view.stats.average_price
        );
        let _ = writeln!(out);

        if let Some(message) = &view.empty_message {
            let _ = writeln!(out, "No vehicles found");
            let _ = writeln!(out, "{}", message);
            return out;
        }

        for vehicle in &view.vehicles {
            let _ = writeln!(
                out,
                "{:<28} {:>10}  {:>14}  {:<20} {}",
                vehicle.title(),
                vehicle.price.to_string(),
                vehicle.mileage_display(),
                vehicle.condition.label(),
                vehicle.status.label(),
            );
        }
        out
    }

    /// Text rendering of the metrics overview screen.
    pub fn dashboard_text(&self) -> String {
        let view = commands::dashboard::dashboard_overview(&self.dashboard);
        let mut out = String::new();

        let _ = writeln!(out, "Dealership Dashboard");
        let _ = writeln!(out);
        for card in &view.cards {
            let _ = writeln!(
                out,
                "{:<16} {:>8}  {:>7}  {}",
                card.title,
                card.value,
                card.trend.to_string(),
                card.description
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Most Viewed Vehicles");
        for (rank, vehicle) in view.most_viewed.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {:<24} {:>4} views  {:>8}  {}",
                rank + 1,
                vehicle.name,
                vehicle.views,
                vehicle.price.to_string(),
                vehicle.status.label()
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Recent Activity");
        for line in &view.recent_activity {
            let _ = writeln!(out, "{} ({})", line.summary, line.when);
        }
        out
    }
}

/// Runs the admin binary: load config, seed, print the inventory overview
/// (or the metrics overview with `--dashboard`).
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Admin Startup                                     │
/// │                                                                         │
/// │  1. Parse Arguments ──────────────────────────────────────────────────► │
/// │     • --config <PATH>, --search <TERM>, --dashboard, --help             │
/// │                                                                         │
/// │  2. Load Config ──────────────────────────────────────────────────────► │
/// │     • defaults → config.toml → SHOWROOM_* env                           │
/// │                                                                         │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else [logging] filter                                   │
/// │                                                                         │
/// │  4. Seed Session ─────────────────────────────────────────────────────► │
/// │     • seed_file or built-in demo lot                                    │
/// │                                                                         │
/// │  5. Print Overview ───────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut term = String::new();
    let mut show_dashboard = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--search" | "-s" => {
                if i + 1 < args.len() {
                    term = args[i + 1].clone();
                    i += 1;
                }
            }
            "--dashboard" | "-d" => show_dashboard = true,
            "--help" | "-h" => {
                println!("Showroom Admin");
                println!();
                println!("Usage: showroom-admin [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>   Config file (default: platform config dir)");
                println!("  -s, --search <TERM>   Filter by make, model, or year");
                println!("  -d, --dashboard       Show the metrics overview instead");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // An explicit --config must load; the default location may be absent
    // or broken.
    let config = match config_path {
        Some(path) => AdminConfig::load(Some(path))?,
        None => AdminConfig::load_or_default(None),
    };

    init_tracing(&config.logging.filter);
    info!(dealership = %config.dealership.name, "Starting Showroom Admin");

    let session = AdminSession::from_config(&config)?;
    if show_dashboard {
        print!("{}", session.dashboard_text());
    } else {
        print!("{}", session.overview(&term));
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=showroom_core=trace` - Trace the domain crate only
/// - Default: `default_filter`, from `[logging] filter`
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries the overview
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{dialog, inventory};
    use crate::notify::RecordingNotifier;

    fn session() -> AdminSession {
        AdminSession::with_notifier(&AdminConfig::default(), Box::new(RecordingNotifier::new()))
            .unwrap()
    }

    #[test]
    fn test_overview_lists_demo_lot() {
        let text = session().overview("");
        assert!(text.starts_with("Premium Auto Sales\n"));
        assert!(text.contains("Avg. Price: $30,250"));
        assert!(text.contains("2023 Toyota Camry"));
        assert!(text.contains("15,000 miles"));
        assert!(text.contains("Certified Pre-Owned"));
    }

    #[test]
    fn test_overview_filtered_to_nothing() {
        let text = session().overview("tesla");
        assert!(text.contains("No vehicles match your search criteria."));
        assert!(!text.contains("Camry"));
    }

    #[test]
    fn test_dashboard_text() {
        let text = session().dashboard_text();
        assert!(text.starts_with("Dealership Dashboard\n"));
        assert!(text.contains("2,847"));
        assert!(text.contains("4m 32s"));
        assert!(text.contains("-2.3%"));
        assert!(text.contains("1. 2024 Honda CR-V"));
        assert!(text.contains("Customer viewed 2024 Tesla Model 3 (2 hours ago)"));
    }

    #[test]
    fn test_session_commands_share_state() {
        let session = session();

        dialog::open_edit_dialog(&session.inventory, "2").unwrap();
        dialog::edit_draft(&session.inventory, "status", "sold").unwrap();
        dialog::commit_draft(&session.inventory, session.notifier.as_ref()).unwrap();

        let stats = inventory::inventory_stats(&session.inventory);
        assert_eq!(stats.sold_count, 1);
        assert_eq!(stats.available_count, 1);
    }
}
