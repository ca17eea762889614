//! # Scan Workflow
//!
//! State machine behind the "Scan Barcode" dialog on the inventory screen.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scan Workflow                                    │
//! │                                                                         │
//! │          open                camera_ready           poll (hit)          │
//! │  Idle ─────────► Acquiring ──────────────► Scanning ───────────┐        │
//! │   ▲  │              │   │                    ▲                 ▼        │
//! │   │  │ manual       │   │ camera_failed      │            Detected      │
//! │   │  ▼              │   ▼                    │         (Found|NotFound) │
//! │   │ ManualEntry ◄───┘  Error ──► restart ────┤                 │        │
//! │   │  │  ▲              │                     │          review │        │
//! │   │  │  └──── manual ──┘                     │                 ▼        │
//! │   │  └──── submit_manual ──► Detected        │            Reviewing     │
//! │   │                                          │                 │        │
//! │   │                                 continuous│          commit │        │
//! │   │                                          │                 ▼        │
//! │   └───────────────── resume (single) ────────┴──────────── Committed    │
//! │                                                                         │
//! │  close() returns to Idle from anywhere. flush() hands the scanned      │
//! │  items to the caller and closes the dialog.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Detection
//! The [`Detector`] trait is the seam where a real decoder plugs in. The
//! shipped [`SimulatedDetector`] ignores pixel data and fires with a
//! probability that grows with each attempt.
//!
//! Nothing here owns a timer, a clock or a random source. The app layer
//! drives `poll` from its interval task and passes "today"/"now" and RNGs in.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Notification, Product, ScannedProductInfo};
use crate::validation;
use crate::MAX_SCAN_ATTEMPTS;

// =============================================================================
// Frames & Detectors
// =============================================================================

/// One captured video frame. The simulated detector never looks at pixels,
/// so only the frame geometry and sequence number are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub sequence: u64,
}

/// Turns frames into barcodes.
pub trait Detector {
    /// Evaluates a frame. `attempt` counts frames since scanning (re)started.
    fn detect(&mut self, frame: &Frame, attempt: u32) -> Option<String>;
}

/// Stand-in detector driven by chance.
///
/// ```text
/// attempt:      0     5     10    15    20+
/// probability:  10%   20%   30%   40%   50% (cap)
/// ```
#[derive(Debug)]
pub struct SimulatedDetector<R> {
    rng: R,
}

impl<R: Rng> SimulatedDetector<R> {
    pub fn new(rng: R) -> Self {
        SimulatedDetector { rng }
    }

    /// Hit probability for a given attempt: `min(0.10 + attempt × 0.02, 0.50)`.
    pub fn probability(attempt: u32) -> f64 {
        (0.10 + attempt as f64 * 0.02).min(0.50)
    }
}

impl<R: Rng> Detector for SimulatedDetector<R> {
    fn detect(&mut self, _frame: &Frame, attempt: u32) -> Option<String> {
        if self.rng.gen_bool(Self::probability(attempt)) {
            Some(random_barcode(&mut self.rng))
        } else {
            None
        }
    }
}

/// Random 12-digit barcode, zero padded.
pub fn random_barcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:012}", rng.gen_range(0..1_000_000_000_000u64))
}

// =============================================================================
// Placeholder Products
// =============================================================================

/// Synthesises details for barcodes the catalog does not know.
pub struct PlaceholderFactory;

impl PlaceholderFactory {
    /// Placeholder name, price and expiry for an unknown barcode.
    ///
    /// ## Rules
    /// - name: `Product <first four characters of the barcode>`
    /// - price: whole rupees in ₹10..=₹500
    /// - expiry: 30..=365 days after today
    pub fn create<R: Rng + ?Sized>(barcode: &str, today: NaiveDate, rng: &mut R) -> ScannedProductInfo {
        let prefix: String = barcode.chars().take(4).collect();
        let price = Money::from_rupees(rng.gen_range(10..=500));
        let expiry = today + Duration::days(rng.gen_range(30..=365));

        ScannedProductInfo {
            barcode: barcode.to_string(),
            name: format!("Product {}", prefix),
            price,
            expiry_date: Some(expiry),
        }
    }
}

// =============================================================================
// States
// =============================================================================

/// Why the camera could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraError {
    pub reason: String,
}

impl CameraError {
    /// Notification shown when camera access fails.
    pub fn notification(&self) -> Notification {
        Notification::new(
            "Camera access failed",
            "Could not access camera. Please check camera permissions or enter the barcode manually.",
        )
    }
}

/// Result of looking a detected barcode up in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Detection {
    /// The catalog has a product with this barcode.
    Found {
        product_id: String,
        category: String,
        info: ScannedProductInfo,
    },
    /// Unknown barcode; `info` is a synthesised placeholder.
    NotFound { info: ScannedProductInfo },
}

impl Detection {
    /// Looks the barcode up, synthesising a placeholder on a miss.
    pub fn resolve<R: Rng + ?Sized>(
        barcode: &str,
        catalog: &[Product],
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        match catalog.iter().find(|p| p.barcode == barcode) {
            Some(product) => Detection::Found {
                product_id: product.id.clone(),
                category: product.category.clone(),
                info: ScannedProductInfo::from(product),
            },
            None => Detection::NotFound {
                info: PlaceholderFactory::create(barcode, today, rng),
            },
        }
    }

    pub fn info(&self) -> &ScannedProductInfo {
        match self {
            Detection::Found { info, .. } | Detection::NotFound { info } => info,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Detection::Found { .. })
    }
}

/// The review form shown after a detection.
///
/// Category and quantity are kept as typed so an invalid entry can be
/// corrected in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    pub detection: Detection,
    pub category: String,
    pub quantity: String,
}

impl ReviewForm {
    /// Catalog hits start with the catalog category; quantity always
    /// starts empty and must be supplied.
    fn from_detection(detection: Detection) -> Self {
        let category = match &detection {
            Detection::Found { category, .. } => category.clone(),
            Detection::NotFound { .. } => String::new(),
        };
        ReviewForm {
            detection,
            category,
            quantity: String::new(),
        }
    }

    /// Validates the form and builds the product it describes.
    pub fn to_product(&self, now: DateTime<Utc>) -> Result<Product, ValidationError> {
        validation::validate_category(&self.category)?;
        let quantity = validation::parse_quantity(&self.quantity)?;

        let info = self.detection.info();
        let id = match &self.detection {
            Detection::Found { product_id, .. } => product_id.clone(),
            Detection::NotFound { .. } => Uuid::new_v4().to_string(),
        };

        Ok(Product {
            id,
            name: info.name.clone(),
            barcode: info.barcode.clone(),
            category: self.category.trim().to_string(),
            price: info.price,
            quantity,
            expiry_date: info.expiry_date,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Current state of the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ScanState {
    Idle,
    Acquiring,
    Scanning { attempts: u32 },
    Detected { detection: Detection },
    Reviewing { form: ReviewForm },
    Committed { product_id: String },
    ManualEntry { input: String },
    Error { error: CameraError },
}

impl ScanState {
    pub fn label(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Acquiring => "acquiring",
            ScanState::Scanning { .. } => "scanning",
            ScanState::Detected { .. } => "detected",
            ScanState::Reviewing { .. } => "reviewing",
            ScanState::Committed { .. } => "committed",
            ScanState::ManualEntry { .. } => "manual entry",
            ScanState::Error { .. } => "error",
        }
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Workflow
// =============================================================================

/// The scan dialog: current state, the accumulated scanned items and the
/// continuous-scan switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWorkflow {
    state: ScanState,
    scanned: Vec<Product>,
    continuous: bool,
    max_attempts: u32,
}

impl Default for ScanWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanWorkflow {
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_SCAN_ATTEMPTS)
    }

    /// Workflow whose detector is consulted at most `max_attempts` times
    /// per scanning run.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        ScanWorkflow {
            state: ScanState::Idle,
            scanned: Vec::new(),
            continuous: false,
            max_attempts,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn scanned(&self) -> &[Product] {
        &self.scanned
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning { .. })
    }

    fn transition(&mut self, next: ScanState) {
        debug!(from = self.state.label(), to = next.label(), "Scan state transition");
        self.state = next;
    }

    fn reject<T>(&self, action: &str) -> CoreResult<T> {
        Err(CoreError::invalid_transition(self.state.label(), action))
    }

    // -------------------------------------------------------------------------
    // Camera
    // -------------------------------------------------------------------------

    /// Starts camera acquisition. Allowed from `Idle` and `Error`.
    pub fn open(&mut self) -> CoreResult<()> {
        match self.state {
            ScanState::Idle | ScanState::Error { .. } => {
                self.transition(ScanState::Acquiring);
                Ok(())
            }
            _ => self.reject("start the camera"),
        }
    }

    /// Camera granted: `Acquiring → Scanning`.
    pub fn camera_ready(&mut self) -> CoreResult<()> {
        match self.state {
            ScanState::Acquiring => {
                self.transition(ScanState::Scanning { attempts: 0 });
                Ok(())
            }
            _ => self.reject("start scanning"),
        }
    }

    /// Camera denied or broken: `Acquiring → Error`.
    pub fn camera_failed(&mut self, reason: impl Into<String>) -> CoreResult<Notification> {
        match self.state {
            ScanState::Acquiring => {
                let error = CameraError { reason: reason.into() };
                info!(reason = %error.reason, "Camera unavailable");
                let note = error.notification();
                self.transition(ScanState::Error { error });
                Ok(note)
            }
            _ => self.reject("report a camera failure"),
        }
    }

    /// Abandons whatever is in progress and acquires the camera again.
    /// Not allowed mid-acquisition.
    pub fn restart(&mut self) -> CoreResult<()> {
        match self.state {
            ScanState::Acquiring => self.reject("restart"),
            _ => {
                self.transition(ScanState::Acquiring);
                Ok(())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Scanning
    // -------------------------------------------------------------------------

    /// Feeds one frame to the detector while scanning.
    ///
    /// ## Returns
    /// - `Ok(Some(barcode))` on a hit; attempts reset to zero
    /// - `Ok(None)` on a miss, or once `max_attempts` frames have been
    ///   evaluated (the detector is no longer consulted)
    pub fn poll(&mut self, frame: &Frame, detector: &mut dyn Detector) -> CoreResult<Option<String>> {
        let attempts = match self.state {
            ScanState::Scanning { attempts } => attempts,
            _ => return self.reject("evaluate a frame"),
        };

        if attempts >= self.max_attempts {
            return Ok(None);
        }

        match detector.detect(frame, attempts) {
            Some(barcode) => {
                debug!(attempts, %barcode, "Barcode detected");
                self.state = ScanState::Scanning { attempts: 0 };
                Ok(Some(barcode))
            }
            None => {
                self.state = ScanState::Scanning { attempts: attempts + 1 };
                Ok(None)
            }
        }
    }

    /// Whether the detector has given up for this scanning run.
    pub fn attempts_exhausted(&self) -> bool {
        matches!(self.state, ScanState::Scanning { attempts } if attempts >= self.max_attempts)
    }

    /// Resolves a detected barcode against the catalog: `Scanning → Detected`.
    pub fn barcode_detected<R: Rng + ?Sized>(
        &mut self,
        barcode: &str,
        catalog: &[Product],
        today: NaiveDate,
        rng: &mut R,
    ) -> CoreResult<&Detection> {
        match self.state {
            ScanState::Scanning { .. } | ScanState::ManualEntry { .. } => {}
            _ => return self.reject("accept a barcode"),
        }

        let detection = Detection::resolve(barcode, catalog, today, rng);
        info!(barcode, found = detection.is_found(), "Resolved scanned barcode");
        self.transition(ScanState::Detected { detection });

        match &self.state {
            ScanState::Detected { detection } => Ok(detection),
            _ => self.reject("accept a barcode"),
        }
    }

    /// Opens the review form: `Detected → Reviewing`.
    pub fn review(&mut self) -> CoreResult<&ReviewForm> {
        let detection = match &self.state {
            ScanState::Detected { detection } => detection.clone(),
            _ => return self.reject("review"),
        };

        self.transition(ScanState::Reviewing {
            form: ReviewForm::from_detection(detection),
        });

        match &self.state {
            ScanState::Reviewing { form } => Ok(form),
            _ => self.reject("review"),
        }
    }

    // -------------------------------------------------------------------------
    // Review
    // -------------------------------------------------------------------------

    /// Updates the review form fields. `None` leaves a field as it is.
    pub fn update_form(&mut self, category: Option<&str>, quantity: Option<&str>) -> CoreResult<()> {
        match &mut self.state {
            ScanState::Reviewing { form } => {
                if let Some(category) = category {
                    form.category = category.to_string();
                }
                if let Some(quantity) = quantity {
                    form.quantity = quantity.to_string();
                }
                Ok(())
            }
            _ => self.reject("edit the review form"),
        }
    }

    /// Commits the reviewed product: `Reviewing → Committed`.
    ///
    /// ## Errors
    /// - `Validation` for a blank category or a quantity below 1; the form
    ///   stays open with its input
    pub fn commit(&mut self, now: DateTime<Utc>) -> CoreResult<Product> {
        let product = match &self.state {
            ScanState::Reviewing { form } => form.to_product(now)?,
            _ => return self.reject("commit"),
        };

        info!(product_id = %product.id, quantity = product.quantity, "Scanned item committed");
        self.scanned.push(product.clone());
        self.transition(ScanState::Committed {
            product_id: product.id.clone(),
        });
        Ok(product)
    }

    /// Leaves `Committed`: back to `Scanning` in continuous mode, else `Idle`.
    pub fn resume(&mut self) -> CoreResult<()> {
        match self.state {
            ScanState::Committed { .. } => {
                let next = if self.continuous {
                    ScanState::Scanning { attempts: 0 }
                } else {
                    ScanState::Idle
                };
                self.transition(next);
                Ok(())
            }
            _ => self.reject("resume"),
        }
    }

    // -------------------------------------------------------------------------
    // Manual Entry
    // -------------------------------------------------------------------------

    /// Switches to manual entry from `Idle`, `Acquiring` or `Error`.
    pub fn enter_manual(&mut self) -> CoreResult<()> {
        match self.state {
            ScanState::Idle | ScanState::Acquiring | ScanState::Error { .. } => {
                self.transition(ScanState::ManualEntry { input: String::new() });
                Ok(())
            }
            _ => self.reject("enter a barcode manually"),
        }
    }

    /// Submits a typed barcode.
    ///
    /// A barcode shorter than 8 characters is rejected and kept in the
    /// input for correction; otherwise it is resolved like a scan.
    pub fn submit_manual<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        catalog: &[Product],
        today: NaiveDate,
        rng: &mut R,
    ) -> CoreResult<&Detection> {
        match &mut self.state {
            ScanState::ManualEntry { input: retained } => {
                *retained = input.to_string();
            }
            _ => return self.reject("submit a manual barcode"),
        }

        let barcode = validation::validate_barcode(input)?;
        self.barcode_detected(&barcode, catalog, today, rng)
    }

    /// Leaves manual entry without submitting.
    pub fn cancel_manual(&mut self) -> CoreResult<()> {
        match self.state {
            ScanState::ManualEntry { .. } => {
                self.transition(ScanState::Idle);
                Ok(())
            }
            _ => self.reject("cancel manual entry"),
        }
    }

    // -------------------------------------------------------------------------
    // Scanned Items
    // -------------------------------------------------------------------------

    /// Removes one scanned item by product id.
    pub fn remove_scanned(&mut self, product_id: &str) -> bool {
        let before = self.scanned.len();
        self.scanned.retain(|p| p.id != product_id);
        self.scanned.len() != before
    }

    pub fn clear_scanned(&mut self) {
        self.scanned.clear();
    }

    /// Hands every scanned item to the caller, empties the list and closes
    /// the dialog.
    pub fn flush(&mut self) -> Vec<Product> {
        let items = std::mem::take(&mut self.scanned);
        info!(count = items.len(), "Flushing scanned items");
        self.transition(ScanState::Idle);
        items
    }

    /// Closes the dialog. Scanned items are kept.
    pub fn close(&mut self) {
        if self.state != ScanState::Idle {
            self.transition(ScanState::Idle);
        }
    }
}

/// Notification shown after a batch of scanned items is added.
pub fn items_added(count: usize) -> Notification {
    Notification::new(
        "Products added to inventory",
        format!("{} products have been added successfully.", count),
    )
}

/// Notification shown when a manual barcode is too short.
pub fn invalid_barcode() -> Notification {
    Notification::new(
        "Invalid barcode",
        "Please enter a valid barcode number (at least 8 digits)",
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Detector that replays a fixed script of results.
    struct Scripted(VecDeque<Option<String>>);

    impl Scripted {
        fn new(script: Vec<Option<&str>>) -> Self {
            Scripted(script.into_iter().map(|s| s.map(str::to_string)).collect())
        }
    }

    impl Detector for Scripted {
        fn detect(&mut self, _frame: &Frame, _attempt: u32) -> Option<String> {
            self.0.pop_front().flatten()
        }
    }

    const FRAME: Frame = Frame { width: 1280, height: 720, sequence: 0 };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: "1".to_string(),
            name: "Tata Salt".to_string(),
            barcode: "8901234567890".to_string(),
            category: "Grocery".to_string(),
            price: Money::from_rupees(20),
            quantity: 50,
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }]
    }

    fn scanning() -> ScanWorkflow {
        let mut wf = ScanWorkflow::new();
        wf.open().unwrap();
        wf.camera_ready().unwrap();
        wf
    }

    #[test]
    fn test_probability_floor_and_cap() {
        type D = SimulatedDetector<StdRng>;
        assert!((D::probability(0) - 0.10).abs() < 1e-9);
        assert!((D::probability(10) - 0.30).abs() < 1e-9);
        assert!((D::probability(20) - 0.50).abs() < 1e-9);
        assert!((D::probability(29) - 0.50).abs() < 1e-9);
    }

    #[test]
    fn test_simulated_detector_produces_twelve_digits() {
        let mut detector = SimulatedDetector::new(StdRng::seed_from_u64(7));
        let hit = (0..200).find_map(|_| detector.detect(&FRAME, 20)).unwrap();
        assert_eq!(hit.len(), 12);
        assert!(hit.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_camera_grant_and_denial() {
        let mut wf = ScanWorkflow::new();
        wf.open().unwrap();
        assert_eq!(wf.state(), &ScanState::Acquiring);

        let note = wf.camera_failed("permission denied").unwrap();
        assert_eq!(note.title, "Camera access failed");
        assert!(matches!(wf.state(), ScanState::Error { .. }));

        // Recoverable: retry.
        wf.open().unwrap();
        wf.camera_ready().unwrap();
        assert_eq!(wf.state(), &ScanState::Scanning { attempts: 0 });
    }

    #[test]
    fn test_open_twice_is_rejected() {
        let mut wf = ScanWorkflow::new();
        wf.open().unwrap();
        assert!(matches!(wf.open(), Err(CoreError::InvalidScanTransition { .. })));
        assert!(wf.restart().is_err());
    }

    #[test]
    fn test_poll_counts_attempts_and_resets_on_hit() {
        let mut wf = scanning();
        let mut detector = Scripted::new(vec![None, None, Some("8901234567890")]);

        assert_eq!(wf.poll(&FRAME, &mut detector).unwrap(), None);
        assert_eq!(wf.poll(&FRAME, &mut detector).unwrap(), None);
        assert_eq!(wf.state(), &ScanState::Scanning { attempts: 2 });

        let hit = wf.poll(&FRAME, &mut detector).unwrap();
        assert_eq!(hit.as_deref(), Some("8901234567890"));
        assert_eq!(wf.state(), &ScanState::Scanning { attempts: 0 });
    }

    #[test]
    fn test_poll_stops_consulting_after_max_attempts() {
        let mut wf = ScanWorkflow::with_max_attempts(2);
        wf.open().unwrap();
        wf.camera_ready().unwrap();
        let mut detector = Scripted::new(vec![None, None, Some("8901234567890")]);

        wf.poll(&FRAME, &mut detector).unwrap();
        wf.poll(&FRAME, &mut detector).unwrap();
        assert!(wf.attempts_exhausted());
        assert_eq!(wf.poll(&FRAME, &mut detector).unwrap(), None);
        // The scripted hit was never consumed.
        assert_eq!(detector.0.len(), 1);
    }

    #[test]
    fn test_poll_outside_scanning_is_rejected() {
        let mut wf = ScanWorkflow::new();
        let mut detector = Scripted::new(vec![]);
        assert!(wf.poll(&FRAME, &mut detector).is_err());
    }

    #[test]
    fn test_known_barcode_prefills_from_catalog() {
        let mut wf = scanning();
        let mut rng = StdRng::seed_from_u64(1);

        let detection = wf
            .barcode_detected("8901234567890", &catalog(), today(), &mut rng)
            .unwrap();
        assert!(detection.is_found());

        let form = wf.review().unwrap();
        assert_eq!(form.detection.info().price, Money::from_rupees(20));
        assert_eq!(form.detection.info().name, "Tata Salt");
        assert_eq!(form.category, "Grocery");
        assert_eq!(form.quantity, "");
    }

    #[test]
    fn test_unknown_barcode_gets_placeholder() {
        let mut wf = scanning();
        let mut rng = StdRng::seed_from_u64(1);

        wf.barcode_detected("000000000000", &catalog(), today(), &mut rng)
            .unwrap();
        let form = wf.review().unwrap().clone();

        let info = form.detection.info();
        assert!(!form.detection.is_found());
        assert_eq!(info.name, "Product 0000");
        assert!(info.price >= Money::from_rupees(10) && info.price <= Money::from_rupees(500));
        let expiry = info.expiry_date.unwrap();
        assert!(expiry >= today() + Duration::days(30));
        assert!(expiry <= today() + Duration::days(365));

        // Quantity has to be supplied before commit.
        assert!(matches!(
            wf.commit(Utc::now()),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(matches!(wf.state(), ScanState::Reviewing { .. }));
    }

    #[test]
    fn test_commit_requires_category_and_positive_quantity() {
        let mut wf = scanning();
        let mut rng = StdRng::seed_from_u64(3);
        wf.barcode_detected("000000000000", &catalog(), today(), &mut rng)
            .unwrap();
        wf.review().unwrap();

        wf.update_form(None, Some("2")).unwrap();
        assert!(wf.commit(Utc::now()).is_err());

        wf.update_form(Some("Snacks"), Some("0")).unwrap();
        assert!(wf.commit(Utc::now()).is_err());

        wf.update_form(None, Some("2")).unwrap();
        let product = wf.commit(Utc::now()).unwrap();
        assert_eq!(product.category, "Snacks");
        assert_eq!(product.quantity, 2);
        assert_eq!(product.barcode, "000000000000");
        assert_eq!(wf.scanned().len(), 1);
        assert!(matches!(wf.state(), ScanState::Committed { .. }));
    }

    #[test]
    fn test_commit_keeps_catalog_identity() {
        let mut wf = scanning();
        let mut rng = StdRng::seed_from_u64(3);
        wf.barcode_detected("8901234567890", &catalog(), today(), &mut rng)
            .unwrap();
        wf.review().unwrap();
        wf.update_form(None, Some("4")).unwrap();

        let product = wf.commit(Utc::now()).unwrap();
        assert_eq!(product.id, "1");
        assert_eq!(product.price, Money::from_rupees(20));
    }

    fn commit_one(wf: &mut ScanWorkflow) {
        let mut rng = StdRng::seed_from_u64(9);
        wf.barcode_detected("8901234567890", &catalog(), today(), &mut rng)
            .unwrap();
        wf.review().unwrap();
        wf.update_form(None, Some("1")).unwrap();
        wf.commit(Utc::now()).unwrap();
        wf.resume().unwrap();
    }

    #[test]
    fn test_resume_single_and_continuous() {
        let mut wf = scanning();
        commit_one(&mut wf);
        assert_eq!(wf.state(), &ScanState::Idle);

        let mut wf = scanning();
        wf.set_continuous(true);
        commit_one(&mut wf);
        assert_eq!(wf.state(), &ScanState::Scanning { attempts: 0 });
        commit_one(&mut wf);
        assert_eq!(wf.scanned().len(), 2);
    }

    #[test]
    fn test_manual_entry_validates_length() {
        let mut wf = ScanWorkflow::new();
        let mut rng = StdRng::seed_from_u64(5);
        wf.enter_manual().unwrap();

        let err = wf.submit_manual("1234", &catalog(), today(), &mut rng);
        assert!(matches!(
            err,
            Err(CoreError::Validation(ValidationError::TooShort { .. }))
        ));
        assert_eq!(
            wf.state(),
            &ScanState::ManualEntry { input: "1234".to_string() }
        );

        let detection = wf
            .submit_manual(" 8901234567890 ", &catalog(), today(), &mut rng)
            .unwrap();
        assert!(detection.is_found());
    }

    #[test]
    fn test_manual_entry_reachability() {
        let mut wf = ScanWorkflow::new();
        wf.open().unwrap();
        wf.enter_manual().unwrap();
        wf.cancel_manual().unwrap();

        let mut wf = scanning();
        assert!(wf.enter_manual().is_err());

        let mut wf = ScanWorkflow::new();
        wf.open().unwrap();
        wf.camera_failed("no device").unwrap();
        assert!(wf.enter_manual().is_ok());
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let mut wf = scanning();
        assert!(wf.commit(Utc::now()).is_err());
        assert!(wf.review().is_err());
        assert!(wf.resume().is_err());
        assert!(wf.camera_ready().is_err());
        assert_eq!(wf.state(), &ScanState::Scanning { attempts: 0 });
    }

    #[test]
    fn test_restart_from_review_discards_form() {
        let mut wf = scanning();
        let mut rng = StdRng::seed_from_u64(2);
        wf.barcode_detected("000000000000", &catalog(), today(), &mut rng)
            .unwrap();
        wf.review().unwrap();

        wf.restart().unwrap();
        assert_eq!(wf.state(), &ScanState::Acquiring);
    }

    #[test]
    fn test_scanned_list_operations_and_flush() {
        let mut wf = scanning();
        wf.set_continuous(true);
        commit_one(&mut wf);
        commit_one(&mut wf);
        assert_eq!(wf.scanned().len(), 2);

        assert!(wf.remove_scanned("1"));
        assert!(wf.scanned().is_empty());
        assert!(!wf.remove_scanned("1"));

        commit_one(&mut wf);
        let items = wf.flush();
        assert_eq!(items.len(), 1);
        assert!(wf.scanned().is_empty());
        assert_eq!(wf.state(), &ScanState::Idle);

        assert_eq!(
            items_added(items.len()).description,
            "1 products have been added successfully."
        );
    }

    #[test]
    fn test_close_keeps_scanned_items() {
        let mut wf = scanning();
        wf.set_continuous(true);
        commit_one(&mut wf);
        wf.close();
        assert_eq!(wf.state(), &ScanState::Idle);
        assert_eq!(wf.scanned().len(), 1);
        wf.clear_scanned();
        assert!(wf.scanned().is_empty());
    }
}
