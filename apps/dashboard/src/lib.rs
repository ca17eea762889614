//! # Kirana Dashboard Library
//!
//! Application layer of the Kirana POS dashboard: managed state, command
//! functions and the console front end.
//!
//! ## Module Organization
//! ```text
//! kirana_dashboard/
//! ├── lib.rs          ◄─── You are here (App bundle, tracing, clock)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Store + sales history wrapper
//! │   ├── cart.rs     ◄─── Billing cart state
//! │   ├── inventory.rs◄─── Inventory filter state
//! │   ├── scan.rs     ◄─── Camera, poller task, scan dialog
//! │   ├── chat.rs     ◄─── Assistant window and reply timer
//! │   └── config.rs   ◄─── Configuration and persisted language
//! ├── commands/
//! │   ├── product.rs  ◄─── Inventory listing, filters, add product
//! │   ├── cart.rs     ◄─── Billing cart and checkout
//! │   ├── scan.rs     ◄─── Scan dialog
//! │   ├── chat.rs     ◄─── Assistant
//! │   ├── config.rs   ◄─── Config, language, translations
//! │   └── report.rs   ◄─── Dashboard and reports
//! ├── console.rs      ◄─── Line-oriented front end
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            App                                          │
//! │                                                                         │
//! │  ┌──────────┐ ┌───────────┐ ┌────────────────┐ ┌─────────────┐         │
//! │  │ DbState  │ │ CartState │ │ InventoryState │ │ ScanSession │         │
//! │  └──────────┘ └───────────┘ └────────────────┘ └─────────────┘         │
//! │  ┌────────────┐ ┌─────────────┐ ┌───────────────┐                       │
//! │  │ ChatWindow │ │ ConfigState │ │ SettingsState │                       │
//! │  └────────────┘ └─────────────┘ └───────────────┘                       │
//! │                                                                         │
//! │  Each command takes only the pieces it needs, so the App bundle is     │
//! │  just a convenient owner for the console.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use state::{
    Camera, CartState, ChatWindow, ConfigState, DbState, InventoryState, ScanSession, SettingsState,
};

/// The local calendar date, used by expiry buckets and the sales series.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the console's JSON output on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kirana=trace` - Show trace for kirana crates only
/// - Default: INFO, DEBUG for kirana crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    subscriber(filter).init();
}

/// Directive used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,kirana=debug";

/// The fmt subscriber writing to stderr, gated only by `filter`.
fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

/// Every piece of managed state, owned together.
pub struct App {
    pub db: DbState,
    pub cart: CartState,
    pub inventory: InventoryState,
    pub scan: ScanSession,
    pub chat: ChatWindow,
    pub config: ConfigState,
    pub settings: SettingsState,
}

impl App {
    /// Builds the app around a freshly seeded store.
    ///
    /// ## Startup Sequence
    /// ```text
    /// 1. Seed the mock catalog, bills and users
    /// 2. Generate the 31-day sales history ending today
    /// 3. Create empty cart / filter / chat state
    /// 4. Wire the scan session to the camera and the store
    /// ```
    pub fn new(config: ConfigState, settings: SettingsState, camera: Arc<dyn Camera>) -> Self {
        let mut rng = StdRng::from_entropy();
        let db = DbState::seeded(Utc::now(), today(), &mut rng);
        let scan = ScanSession::new(camera, db.store(), &config);
        Self::from_parts(config, settings, db, scan)
    }

    /// Builds the app from an existing store and scan session.
    pub fn from_parts(
        config: ConfigState,
        settings: SettingsState,
        db: DbState,
        scan: ScanSession,
    ) -> Self {
        info!(
            store = %config.store_name,
            language = %settings.language(),
            "Dashboard state initialized"
        );

        App {
            cart: CartState::new(),
            inventory: InventoryState::with_threshold(config.low_stock_threshold),
            chat: ChatWindow::new(config.chat_reply_delay()),
            db,
            scan,
            config,
            settings,
        }
    }
}
