//! # State Module
//!
//! Application state for the dashboard, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   DbState    │  │  CartState   │  │  InventoryState  │              │
//! │  │              │  │              │  │                  │              │
//! │  │  MemoryStore │  │  Arc<Mutex<  │  │  Arc<Mutex<      │              │
//! │  │  + sales     │  │  BillingCart │  │  InventoryFilter │              │
//! │  │    history   │  │  >>          │  │  >>              │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ ScanSession  │  │  ChatWindow  │  │ ConfigState      │              │
//! │  │              │  │              │  │ SettingsState    │              │
//! │  │  camera +    │  │  log + reply │  │ (language is     │              │
//! │  │  poller task │  │  tasks       │  │  persisted)      │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: tokio RwLock inside each repository                        │
//! │  • Cart/Inventory/Scan/Chat: std Mutex, never held across .await       │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod chat;
mod config;
mod db;
mod inventory;
mod scan;

pub use cart::{CartResponse, CartState};
pub use chat::ChatWindow;
pub use config::{ConfigError, ConfigState, Settings, SettingsState};
pub use db::DbState;
pub use inventory::InventoryState;
pub use scan::{
    Camera, CameraConstraints, CameraStream, FacingMode, ScanSession, ScanSnapshot, SimulatedCamera,
};
