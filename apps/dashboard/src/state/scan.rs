//! # Scan Session
//!
//! Drives the pure [`ScanWorkflow`] with a camera and a polling timer.
//!
//! ## Task Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scan Session                                     │
//! │                                                                         │
//! │  start_camera() ──► Camera::acquire(rear, no audio)                    │
//! │       │                 │ Ok(stream)            │ Err(reason)          │
//! │       │                 ▼                       ▼                       │
//! │       │            Scanning + poller        Error (CAMERA_UNAVAILABLE) │
//! │       │                 │                                               │
//! │       │                 ▼                                               │
//! │       │   ┌──────────────────────────────────────────────┐             │
//! │       │   │  poller task (tokio::spawn)                  │             │
//! │       │   │  loop {                                      │             │
//! │       │   │    select! {                                 │             │
//! │       │   │      interval.tick() => poll one frame       │             │
//! │       │   │      shutdown_rx     => break                │             │
//! │       │   │    }                                         │             │
//! │       │   │  }                                           │             │
//! │       │   └──────────────────────────────────────────────┘             │
//! │       │                 │ hit                                           │
//! │       │                 ▼                                               │
//! │       │      Detected → Reviewing, poller exits                        │
//! │                                                                         │
//! │  Poller stops on: detection · attempts exhausted · close() ·           │
//! │                   restart() · flush() · drop                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every spawned poller carries a generation number. Stopping the poller
//! bumps the generation, so a task that was mid-lookup when it was stopped
//! cannot write its detection into a newer scanning run.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use kirana_core::scan::{CameraError, Detector, Frame, ReviewForm, ScanState, ScanWorkflow, SimulatedDetector};
use kirana_core::{CoreError, CoreResult, Product};
use kirana_db::{MemoryStore, ProductRepository};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use super::ConfigState;

// =============================================================================
// Camera
// =============================================================================

/// Which way the camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FacingMode {
    /// Rear camera.
    Environment,
    /// Front camera.
    User,
}

/// What the session asks the camera for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConstraints {
    pub facing_mode: FacingMode,
    pub audio: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConstraints {
    fn default() -> Self {
        CameraConstraints {
            facing_mode: FacingMode::Environment,
            audio: false,
            width: 1280,
            height: 720,
        }
    }
}

/// An open video stream.
#[derive(Debug)]
pub struct CameraStream {
    width: u32,
    height: u32,
    next_sequence: u64,
}

impl CameraStream {
    pub fn new(width: u32, height: u32) -> Self {
        CameraStream {
            width,
            height,
            next_sequence: 0,
        }
    }

    /// Grabs the next frame.
    pub fn next_frame(&mut self) -> Frame {
        let frame = Frame {
            width: self.width,
            height: self.height,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        frame
    }
}

/// Video source behind the scan dialog.
#[async_trait]
pub trait Camera: Send + Sync {
    async fn acquire(&self, constraints: &CameraConstraints) -> Result<CameraStream, CameraError>;
}

/// Camera that always grants (or always refuses) access after a delay.
#[derive(Debug, Clone)]
pub struct SimulatedCamera {
    denied: Option<String>,
    latency: Duration,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        SimulatedCamera {
            denied: None,
            latency: Duration::ZERO,
        }
    }

    /// A camera that refuses with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        SimulatedCamera {
            denied: Some(reason.into()),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Camera for SimulatedCamera {
    async fn acquire(&self, constraints: &CameraConstraints) -> Result<CameraStream, CameraError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.denied {
            Some(reason) => Err(CameraError {
                reason: reason.clone(),
            }),
            None => {
                debug!(?constraints, "Simulated camera granted");
                Ok(CameraStream::new(constraints.width, constraints.height))
            }
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Read-only view of the scan dialog for the front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSnapshot {
    pub state: ScanState,
    pub scanned: Vec<Product>,
    pub continuous: bool,
    pub initializing: bool,
    pub polling: bool,
}

struct Poller {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

struct ScanInner {
    workflow: ScanWorkflow,
    initializing: bool,
    stream: Option<CameraStream>,
    poller: Option<Poller>,
    generation: u64,
    detector: Box<dyn Detector + Send>,
    rng: StdRng,
}

impl ScanInner {
    fn stop_poller(&mut self) {
        self.generation += 1;
        if let Some(poller) = self.poller.take() {
            debug!(generation = self.generation, "Stopping scan polling");
            let _ = poller.shutdown_tx.try_send(());
        }
    }

    fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| !p.task.is_finished())
    }

    /// Scanning with attempts left, so a poller report is still to come.
    fn awaiting_detection(&self) -> bool {
        self.workflow.is_scanning() && !self.workflow.attempts_exhausted()
    }

    /// `Scanning/ManualEntry → Detected → Reviewing`.
    fn resolve(&mut self, barcode: &str, catalog: &[Product]) -> CoreResult<ReviewForm> {
        self.workflow
            .barcode_detected(barcode, catalog, crate::today(), &mut self.rng)?;
        Ok(self.workflow.review()?.clone())
    }
}

enum Tick {
    Miss,
    Hit(String),
    Exhausted,
    Stale,
}

/// Managed scan dialog.
pub struct ScanSession {
    inner: Arc<Mutex<ScanInner>>,
    camera: Arc<dyn Camera>,
    store: Arc<MemoryStore>,
    constraints: CameraConstraints,
    interval: Duration,
    detected: Arc<watch::Sender<u64>>,
}

impl ScanSession {
    /// Session with the random detector.
    pub fn new(camera: Arc<dyn Camera>, store: Arc<MemoryStore>, config: &ConfigState) -> Self {
        let detector = SimulatedDetector::new(StdRng::from_entropy());
        Self::with_detector(camera, store, config, Box::new(detector), StdRng::from_entropy())
    }

    /// Session with a caller-supplied detector and placeholder RNG.
    pub fn with_detector(
        camera: Arc<dyn Camera>,
        store: Arc<MemoryStore>,
        config: &ConfigState,
        detector: Box<dyn Detector + Send>,
        rng: StdRng,
    ) -> Self {
        let inner = ScanInner {
            workflow: ScanWorkflow::with_max_attempts(config.max_scan_attempts),
            initializing: false,
            stream: None,
            poller: None,
            generation: 0,
            detector,
            rng,
        };

        ScanSession {
            inner: Arc::new(Mutex::new(inner)),
            camera,
            store,
            constraints: CameraConstraints::default(),
            interval: config.scan_interval(),
            detected: Arc::new(watch::channel(0).0),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScanInner> {
        self.inner.lock().expect("scan session mutex poisoned")
    }

    pub fn snapshot(&self) -> ScanSnapshot {
        let inner = self.lock();
        ScanSnapshot {
            state: inner.workflow.state().clone(),
            scanned: inner.workflow.scanned().to_vec(),
            continuous: inner.workflow.is_continuous(),
            initializing: inner.initializing,
            polling: inner.is_polling(),
        }
    }

    pub fn is_polling(&self) -> bool {
        self.lock().is_polling()
    }

    pub fn set_continuous(&self, continuous: bool) {
        self.lock().workflow.set_continuous(continuous);
    }

    // -------------------------------------------------------------------------
    // Camera
    // -------------------------------------------------------------------------

    /// Opens the dialog and acquires the camera.
    ///
    /// ## Errors
    /// - `InvalidScanTransition` while an acquisition is already in flight
    ///   or the dialog is busy
    /// - `CameraUnavailable` when access is refused; the dialog moves to
    ///   `Error` and manual entry stays available
    pub async fn start_camera(&self) -> CoreResult<()> {
        {
            let mut inner = self.lock();
            if inner.initializing {
                debug!("Camera acquisition already in flight");
                return Err(CoreError::invalid_transition("acquiring", "start the camera"));
            }
            inner.workflow.open()?;
            inner.initializing = true;
        }
        self.acquire().await
    }

    /// Stops scanning and acquires the camera again.
    pub async fn restart(&self) -> CoreResult<()> {
        {
            let mut inner = self.lock();
            if inner.initializing {
                return Err(CoreError::invalid_transition("acquiring", "restart"));
            }
            inner.workflow.restart()?;
            inner.stop_poller();
            inner.stream = None;
            inner.initializing = true;
        }
        info!("Restarting scan");
        self.acquire().await
    }

    async fn acquire(&self) -> CoreResult<()> {
        let result = self.camera.acquire(&self.constraints).await;

        let mut guard = self.lock();
        let inner = &mut *guard;
        inner.initializing = false;

        let still_acquiring = matches!(inner.workflow.state(), ScanState::Acquiring);
        match result {
            Ok(stream) if still_acquiring => {
                inner.workflow.camera_ready()?;
                inner.stream = Some(stream);
                self.spawn_poller(inner);
                Ok(())
            }
            Err(error) if still_acquiring => {
                let note = inner.workflow.camera_failed(error.reason.clone())?;
                warn!(reason = %error.reason, title = %note.title, "Camera access failed");
                Err(CoreError::CameraUnavailable {
                    reason: error.reason,
                })
            }
            _ => {
                debug!(state = inner.workflow.state().label(), "Dialog moved on during acquisition");
                Ok(())
            }
        }
    }

    fn spawn_poller(&self, inner: &mut ScanInner) {
        inner.stop_poller();
        let generation = inner.generation;
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let task = tokio::spawn(run_poller(
            Arc::clone(&self.inner),
            Arc::clone(&self.store),
            Arc::clone(&self.detected),
            self.interval,
            generation,
            shutdown_rx,
        ));
        inner.poller = Some(Poller { shutdown_tx, task });
    }

    /// Waits until the poller reports a detection or gives up, or until
    /// `timeout` passes. Returns at once when no scan run is waiting on the
    /// detector.
    pub async fn wait_for_detection(&self, timeout: Duration) -> ScanSnapshot {
        // Subscribe before checking the state so a report in between is seen.
        let mut reports = self.detected.subscribe();
        let awaiting = self.lock().awaiting_detection();

        if awaiting && tokio::time::timeout(timeout, reports.changed()).await.is_err() {
            debug!("No detection before timeout");
        }
        self.snapshot()
    }

    // -------------------------------------------------------------------------
    // Manual Entry
    // -------------------------------------------------------------------------

    pub fn enter_manual(&self) -> CoreResult<()> {
        let mut inner = self.lock();
        inner.workflow.enter_manual()?;
        inner.stop_poller();
        inner.stream = None;
        Ok(())
    }

    /// Resolves a typed barcode against `catalog` and opens the review form.
    pub fn submit_manual(&self, input: &str, catalog: &[Product]) -> CoreResult<ReviewForm> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        inner
            .workflow
            .submit_manual(input, catalog, crate::today(), &mut inner.rng)?;
        Ok(inner.workflow.review()?.clone())
    }

    pub fn cancel_manual(&self) -> CoreResult<()> {
        self.lock().workflow.cancel_manual()
    }

    // -------------------------------------------------------------------------
    // Review
    // -------------------------------------------------------------------------

    pub fn update_review(&self, category: Option<&str>, quantity: Option<&str>) -> CoreResult<()> {
        self.lock().workflow.update_form(category, quantity)
    }

    /// Commits the review form and moves on.
    ///
    /// In continuous mode scanning resumes; when the camera was never
    /// opened (manual entry) it is acquired first.
    pub async fn commit(&self) -> CoreResult<Product> {
        let (product, needs_camera) = {
            let mut guard = self.lock();
            let inner = &mut *guard;
            let product = inner.workflow.commit(Utc::now())?;
            inner.workflow.resume()?;

            let needs_camera = if inner.workflow.is_scanning() {
                if inner.stream.is_some() {
                    self.spawn_poller(inner);
                    false
                } else {
                    inner.workflow.restart()?;
                    inner.initializing = true;
                    true
                }
            } else {
                false
            };
            (product, needs_camera)
        };

        if needs_camera {
            if let Err(e) = self.acquire().await {
                warn!(error = %e, "Could not resume scanning");
            }
        }
        Ok(product)
    }

    // -------------------------------------------------------------------------
    // Scanned Items
    // -------------------------------------------------------------------------

    pub fn remove_scanned(&self, product_id: &str) -> bool {
        self.lock().workflow.remove_scanned(product_id)
    }

    pub fn clear_scanned(&self) {
        self.lock().workflow.clear_scanned();
    }

    /// Takes every scanned item and closes the dialog.
    pub fn flush(&self) -> Vec<Product> {
        let mut inner = self.lock();
        inner.stop_poller();
        inner.stream = None;
        inner.workflow.flush()
    }

    /// Closes the dialog, keeping the scanned items.
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.stop_poller();
        inner.stream = None;
        inner.workflow.close();
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.stop_poller();
        }
    }
}

// =============================================================================
// Poller
// =============================================================================

fn tick(inner: &Mutex<ScanInner>, generation: u64) -> Tick {
    let mut guard = inner.lock().expect("scan session mutex poisoned");
    let inner = &mut *guard;

    if inner.generation != generation || !inner.workflow.is_scanning() {
        return Tick::Stale;
    }
    if inner.workflow.attempts_exhausted() {
        return Tick::Exhausted;
    }
    let frame = match inner.stream.as_mut() {
        Some(stream) => stream.next_frame(),
        None => return Tick::Stale,
    };

    match inner.workflow.poll(&frame, inner.detector.as_mut()) {
        Ok(Some(barcode)) => Tick::Hit(barcode),
        Ok(None) => Tick::Miss,
        Err(e) => {
            debug!(error = %e, "Poll rejected");
            Tick::Stale
        }
    }
}

fn apply_detection(inner: &Mutex<ScanInner>, generation: u64, barcode: &str, catalog: &[Product]) {
    let mut inner = inner.lock().expect("scan session mutex poisoned");
    if inner.generation != generation {
        debug!(%barcode, "Dropping detection from a stopped scan run");
        return;
    }

    match inner.resolve(barcode, catalog) {
        Ok(form) => info!(%barcode, found = form.detection.is_found(), "Review form opened"),
        Err(e) => warn!(error = %e, "Could not open review form"),
    }
    inner.poller = None;
}

async fn run_poller(
    inner: Arc<Mutex<ScanInner>>,
    store: Arc<MemoryStore>,
    detected: Arc<watch::Sender<u64>>,
    period: Duration,
    generation: u64,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    info!(generation, period_ms = period.as_millis() as u64, "Scan polling started");

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match tick(&inner, generation) {
                    Tick::Miss => {}
                    Tick::Stale => break,
                    Tick::Exhausted => {
                        info!("Scan attempts exhausted, detector idle until restart");
                        detected.send_modify(|reports| *reports += 1);
                        break;
                    }
                    Tick::Hit(barcode) => {
                        match store.products().list().await {
                            Ok(catalog) => apply_detection(&inner, generation, &barcode, &catalog),
                            Err(e) => error!(error = %e, "Catalog lookup failed"),
                        }
                        detected.send_modify(|reports| *reports += 1);
                        break;
                    }
                }
            }

            _ = shutdown_rx.recv() => {
                debug!(generation, "Scan polling shutting down");
                break;
            }
        }
    }

    info!(generation, "Scan polling stopped");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use kirana_core::scan::Detection;

    /// Hits on one given attempt, counting every call.
    struct Scripted {
        hit_at: Option<u32>,
        barcode: String,
        calls: Arc<AtomicU32>,
    }

    impl Detector for Scripted {
        fn detect(&mut self, _frame: &Frame, attempt: u32) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (Some(attempt) == self.hit_at).then(|| self.barcode.clone())
        }
    }

    fn session_with(camera: SimulatedCamera, hit_at: Option<u32>, barcode: &str) -> (ScanSession, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let detector = Scripted {
            hit_at,
            barcode: barcode.to_string(),
            calls: Arc::clone(&calls),
        };
        let session = ScanSession::with_detector(
            Arc::new(camera),
            Arc::new(MemoryStore::seeded(Utc::now())),
            &ConfigState::default(),
            Box::new(detector),
            StdRng::seed_from_u64(7),
        );
        (session, calls)
    }

    fn catalog() -> Vec<Product> {
        kirana_db::seed::mock_products(Utc::now())
    }

    #[tokio::test(start_paused = true)]
    async fn test_detection_opens_review_and_stops_polling() {
        let (session, calls) = session_with(SimulatedCamera::new(), Some(2), "8901234567890");

        session.start_camera().await.unwrap();
        assert!(session.is_polling());

        let snapshot = session.wait_for_detection(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;

        match snapshot.state {
            ScanState::Reviewing { form } => {
                assert!(matches!(form.detection, Detection::Found { ref product_id, .. } if product_id == "1"));
                assert_eq!(form.category, "Grocery");
            }
            other => panic!("expected review form, got {}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(!session.is_polling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_barcode_gets_placeholder() {
        let (session, _) = session_with(SimulatedCamera::new(), Some(0), "123456789012");
        session.start_camera().await.unwrap();
        let snapshot = session.wait_for_detection(Duration::from_secs(5)).await;

        match snapshot.state {
            ScanState::Reviewing { form } => {
                assert!(!form.detection.is_found());
                assert_eq!(form.detection.info().name, "Product 1234");
                assert_eq!(form.category, "");
            }
            other => panic!("expected review form, got {}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_denied_moves_to_error() {
        let (session, _) = session_with(SimulatedCamera::unavailable("Permission denied"), None, "");

        let err = session.start_camera().await.unwrap_err();
        assert!(matches!(err, CoreError::CameraUnavailable { ref reason } if reason == "Permission denied"));
        assert!(matches!(session.snapshot().state, ScanState::Error { .. }));
        assert!(!session.is_polling());

        // Manual entry is still reachable from the error state.
        session.enter_manual().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_refused_while_initializing() {
        let camera = SimulatedCamera::new().with_latency(Duration::from_millis(500));
        let (session, _) = session_with(camera, None, "");
        let session = Arc::new(session);

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.start_camera().await })
        };
        tokio::task::yield_now().await;

        assert!(session.snapshot().initializing);
        let err = session.start_camera().await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidScanTransition { .. }));

        first.await.unwrap().unwrap();
        assert!(matches!(session.snapshot().state, ScanState::Scanning { .. }));
        session.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_stops_polling_and_keeps_items() {
        let (session, calls) = session_with(SimulatedCamera::new(), None, "");
        session.start_camera().await.unwrap();
        tokio::time::sleep(Duration::from_millis(450)).await;
        let before = calls.load(Ordering::SeqCst);
        assert!(before >= 2);

        session.close();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), before);
        assert!(!session.is_polling());
        assert_eq!(session.snapshot().state, ScanState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempts_exhausted_stops_consulting_detector() {
        let (session, calls) = session_with(SimulatedCamera::new(), None, "");
        session.start_camera().await.unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 30);
        assert!(!session.is_polling());
        assert_eq!(session.snapshot().state, ScanState::Scanning { attempts: 30 });

        session.restart().await.unwrap();
        assert!(session.is_polling());
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(calls.load(Ordering::SeqCst) > 30);
        session.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_from_review_scans_again() {
        let (session, _) = session_with(SimulatedCamera::new(), Some(0), "8901234567890");
        session.start_camera().await.unwrap();
        session.wait_for_detection(Duration::from_secs(5)).await;
        assert!(matches!(session.snapshot().state, ScanState::Reviewing { .. }));

        session.restart().await.unwrap();
        assert_eq!(session.snapshot().state, ScanState::Scanning { attempts: 0 });
        assert!(session.is_polling());
        session.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unobserved_detection_does_not_satisfy_next_wait() {
        let (session, calls) = session_with(SimulatedCamera::new(), Some(0), "8901234567890");
        session.start_camera().await.unwrap();

        // First run detects with nobody waiting.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(matches!(session.snapshot().state, ScanState::Reviewing { .. }));
        let first_run = calls.load(Ordering::SeqCst);

        session.restart().await.unwrap();
        let snapshot = session.wait_for_detection(Duration::from_secs(5)).await;
        assert!(matches!(snapshot.state, ScanState::Reviewing { .. }));
        assert!(calls.load(Ordering::SeqCst) > first_run);

        // Nothing left to wait for: returns without sleeping out the timeout.
        let before = tokio::time::Instant::now();
        session.wait_for_detection(Duration::from_secs(5)).await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_polling() {
        let (session, calls) = session_with(SimulatedCamera::new(), None, "");
        session.start_camera().await.unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;

        drop(session);
        tokio::time::sleep(Duration::from_millis(50)).await;
        let after_drop = calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), after_drop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_entry_review_commit_flush() {
        let (session, _) = session_with(SimulatedCamera::new(), None, "");
        let catalog = catalog();

        session.enter_manual().unwrap();
        let err = session.submit_manual("1234", &catalog).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(
            session.snapshot().state,
            ScanState::ManualEntry {
                input: "1234".to_string()
            }
        );

        let form = session.submit_manual("  8907890123456 ", &catalog).unwrap();
        assert!(form.detection.is_found());

        assert!(session.commit().await.is_err());
        session.update_review(None, Some("4")).unwrap();
        let product = session.commit().await.unwrap();
        assert_eq!(product.id, "7");
        assert_eq!(product.quantity, 4);
        assert_eq!(session.snapshot().state, ScanState::Idle);

        let items = session.flush();
        assert_eq!(items.len(), 1);
        assert!(session.snapshot().scanned.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_continuous_commit_resumes_polling() {
        let (session, _) = session_with(SimulatedCamera::new(), Some(0), "8901234567890");
        session.set_continuous(true);
        session.start_camera().await.unwrap();
        session.wait_for_detection(Duration::from_secs(5)).await;

        session.update_review(None, Some("2")).unwrap();
        session.commit().await.unwrap();
        assert!(session.is_polling());
        assert_eq!(session.snapshot().scanned.len(), 1);
        session.close();
        assert_eq!(session.snapshot().scanned.len(), 1);
    }
}
