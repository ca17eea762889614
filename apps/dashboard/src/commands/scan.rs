//! # Scan Commands
//!
//! Commands behind the inventory screen's "Scan Barcode" dialog.
//!
//! ## Dialog Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scan Dialog                                          │
//! │                                                                         │
//! │  start_scan ──► camera ok ──► polling ──► hit ──► review form          │
//! │      │              │                                 │                 │
//! │      │              └─ denied ──► Error               │ update_review   │
//! │      │                              │                 ▼                 │
//! │      └──────── enter_manual ◄───────┘           commit_review           │
//! │                    │                                  │                 │
//! │                    ▼                                  ▼                 │
//! │              submit_manual ──► review form     scanned items list       │
//! │                                                       │                 │
//! │                                                       ▼                 │
//! │                                          add_scanned_to_inventory       │
//! │                                          (upsert, dialog closes)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use chrono::Utc;
use kirana_core::scan::{self, ReviewForm};
use kirana_core::{Notification, Product};
use kirana_db::{DbError, ProductRepository};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DbState, ScanSession, ScanSnapshot};

/// Result of "Add N items".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedItemsAdded {
    /// Catalog entries as stored after the merge.
    pub products: Vec<Product>,
    pub notification: Notification,
}

// =============================================================================
// Camera
// =============================================================================

/// Opens the dialog and starts the camera.
///
/// A refused camera leaves the dialog in `Error` and returns
/// `CAMERA_UNAVAILABLE`; manual entry is still open.
pub async fn start_scan(scan: &ScanSession) -> Result<ScanSnapshot, ApiError> {
    debug!("start_scan command");
    scan.start_camera().await?;
    Ok(scan.snapshot())
}

/// "Restart scanning" from the review form or the error panel.
pub async fn restart_scan(scan: &ScanSession) -> Result<ScanSnapshot, ApiError> {
    debug!("restart_scan command");
    scan.restart().await?;
    Ok(scan.snapshot())
}

/// Waits up to `timeout` for the poller to find a barcode.
pub async fn await_detection(scan: &ScanSession, timeout: Duration) -> ScanSnapshot {
    debug!(timeout_ms = timeout.as_millis() as u64, "await_detection command");
    scan.wait_for_detection(timeout).await
}

pub fn scan_status(scan: &ScanSession) -> ScanSnapshot {
    scan.snapshot()
}

/// The "Continuous scanning" switch.
pub fn set_continuous_scan(scan: &ScanSession, continuous: bool) -> ScanSnapshot {
    debug!(continuous, "set_continuous_scan command");
    scan.set_continuous(continuous);
    scan.snapshot()
}

/// Closes the dialog. Scanned items stay for the next time it opens.
pub fn close_scan(scan: &ScanSession) -> ScanSnapshot {
    debug!("close_scan command");
    scan.close();
    scan.snapshot()
}

// =============================================================================
// Manual Entry
// =============================================================================

pub fn enter_manual(scan: &ScanSession) -> Result<ScanSnapshot, ApiError> {
    debug!("enter_manual command");
    scan.enter_manual()?;
    Ok(scan.snapshot())
}

/// Looks a typed barcode up and opens the review form.
///
/// ## Errors
/// - `VALIDATION_ERROR` for fewer than 8 characters; the input is kept and
///   the dialog stays in manual entry
pub async fn submit_manual(
    db: &DbState,
    scan: &ScanSession,
    input: &str,
) -> Result<ReviewForm, ApiError> {
    debug!(input = %input, "submit_manual command");
    let catalog = db.inner().products().list().await?;
    Ok(scan.submit_manual(input, &catalog)?)
}

pub fn cancel_manual(scan: &ScanSession) -> Result<ScanSnapshot, ApiError> {
    debug!("cancel_manual command");
    scan.cancel_manual()?;
    Ok(scan.snapshot())
}

// =============================================================================
// Review
// =============================================================================

/// Edits the review form. Values are kept as typed and validated on
/// commit.
pub fn update_review(
    scan: &ScanSession,
    category: Option<&str>,
    quantity: Option<&str>,
) -> Result<ScanSnapshot, ApiError> {
    debug!(?category, ?quantity, "update_review command");
    scan.update_review(category, quantity)?;
    Ok(scan.snapshot())
}

/// "Add to list": validates the review form and appends the product to
/// the scanned items.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an empty category or a quantity that is not a
///   whole number of at least 1; the form stays open
pub async fn commit_review(scan: &ScanSession) -> Result<Product, ApiError> {
    debug!("commit_review command");
    let product = scan.commit().await?;
    info!(product_id = %product.id, barcode = %product.barcode, quantity = product.quantity, "Scanned item listed");
    Ok(product)
}

// =============================================================================
// Scanned Items
// =============================================================================

/// Removes one scanned item by product id.
pub fn remove_scanned(scan: &ScanSession, product_id: &str) -> Result<ScanSnapshot, ApiError> {
    debug!(product_id = %product_id, "remove_scanned command");
    if !scan.remove_scanned(product_id) {
        return Err(ApiError::not_found("Scanned item", product_id));
    }
    Ok(scan.snapshot())
}

pub fn clear_scanned(scan: &ScanSession) -> ScanSnapshot {
    debug!("clear_scanned command");
    scan.clear_scanned();
    scan.snapshot()
}

/// "Add N items": writes every scanned item into the catalog and closes
/// the dialog.
///
/// ## Merge Rules
/// ```text
/// scanned item ──► catalog has same id?       ──► quantity += scanned qty
///              └─► catalog has same barcode?  ──► quantity += scanned qty
///              └─► neither                    ──► inserted at the head
/// ```
///
/// ## Errors
/// - `VALIDATION_ERROR` when the list is empty; the dialog stays open
pub async fn add_scanned_to_inventory(
    db: &DbState,
    scan: &ScanSession,
) -> Result<ScannedItemsAdded, ApiError> {
    if scan.snapshot().scanned.is_empty() {
        return Err(ApiError::validation("No scanned items to add"));
    }

    let items = scan.flush();
    debug!(count = items.len(), "add_scanned_to_inventory command");

    let products = db.inner().products();
    let mut stored = Vec::with_capacity(items.len());
    for item in items {
        let existing = match products.get(&item.id).await {
            Ok(product) => Some(product),
            Err(DbError::NotFound { .. }) => match products.get_by_barcode(&item.barcode).await {
                Ok(product) => Some(product),
                Err(DbError::NotFound { .. }) => None,
                Err(e) => return Err(e.into()),
            },
            Err(e) => return Err(e.into()),
        };

        let merged = match existing {
            Some(mut product) => {
                product.quantity = product.quantity.saturating_add(item.quantity);
                product.updated_at = Utc::now();
                debug!(product_id = %product.id, quantity = product.quantity, "Restocked from scan");
                product
            }
            None => item,
        };
        stored.push(products.upsert(merged).await?);
    }

    info!(count = stored.len(), "Scanned items added to inventory");
    Ok(ScannedItemsAdded {
        notification: scan::items_added(stored.len()),
        products: stored,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
