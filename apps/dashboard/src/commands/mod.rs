//! # Commands Module
//!
//! All commands exposed to the front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Inventory listing, filters, add product
//! ├── cart.rs     ◄─── Billing cart, barcode-to-bill, checkout
//! ├── scan.rs     ◄─── Scan dialog: camera, manual entry, review
//! ├── chat.rs     ◄─── Assistant messages
//! ├── config.rs   ◄─── Configuration, language, translations
//! └── report.rs   ◄─── Dashboard figures and reports
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Console line                                                           │
//! │  ────────────                                                           │
//! │  > add 8901234567890                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::scan_to_bill(                                          │
//! │      &app.db,      ◄── only the state this command needs               │
//! │      &app.cart,                                                         │
//! │      &app.config,                                                       │
//! │      "8901234567890",                                                   │
//! │  ) -> Result<CartMutation, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  { "cart": {...}, "notification": { "title": "Added to bill", ... } }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! async fn get_product(db: &DbState, id: &str)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState, config: &ConfigState)
//!
//! // Needs both
//! async fn add_to_cart(db: &DbState, cart: &CartState, config: &ConfigState, id: &str)
//! ```

pub mod cart;
pub mod chat;
pub mod config;
pub mod product;
pub mod report;
pub mod scan;
