//! # Console Front End
//!
//! A line-oriented stand-in for the browser UI. Each line is parsed with
//! clap, dispatched to a command, and answered with JSON or plain text.
//!
//! ## Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin ──► tokenize (double quotes group words)                        │
//! │              │                                                          │
//! │              ▼                                                          │
//! │        ConsoleCommand::try_parse_from(tokens)                           │
//! │              │ ok                          │ err                        │
//! │              ▼                             ▼                            │
//! │        commands::*  ──► Result<T, ApiError>   usage text               │
//! │              │                                                          │
//! │              ▼                                                          │
//! │        stdout: JSON / receipt / notification                           │
//! │        (an ApiError prints as {"code": ..., "message": ...})           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use kirana_core::i18n;
use kirana_core::reports::SalesPeriod;
use kirana_core::scan::invalid_barcode;
use kirana_core::validation::parse_price;
use kirana_core::{NewProduct, Notification, MIN_BARCODE_LENGTH};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::commands::product::FilterUpdate;
use crate::commands::{cart, chat, config, product, report, scan};
use crate::error::{ApiError, ErrorCode};
use crate::App;

/// How long `scan` waits for the poller before reporting back.
const SCAN_WAIT: Duration = Duration::from_secs(10);

// =============================================================================
// Grammar
// =============================================================================

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: ConsoleCommand,
}

#[derive(Debug, Subcommand)]
enum ConsoleCommand {
    /// List inventory; a term sets the search, none clears it
    Products { term: Vec<String> },
    /// Toggle the low-stock filter
    Lowstock,
    /// Filter panel
    Filter {
        #[command(subcommand)]
        action: FilterAction,
    },
    /// Toggle A-Z / Z-A
    Sort,
    /// Clear all filters except the search term
    Clear,
    /// Add a product: `new <name> <category> <barcode> <price> <qty> [expiry]`
    New {
        name: String,
        category: String,
        barcode: String,
        price: String,
        quantity: i64,
        expiry: Option<chrono::NaiveDate>,
    },
    /// Add to the bill by barcode or product id
    Add { code: String },
    /// Set a bill line's quantity
    Qty { id: String, quantity: i64 },
    /// Remove a bill line
    Remove { id: String },
    /// Show the bill
    Cart,
    /// Generate the bill
    Checkout {
        name: Option<String>,
        phone: Option<String>,
    },
    /// Open the scan dialog and wait for a barcode
    Scan,
    /// Continuous scanning on or off
    Continuous { switch: Switch },
    /// Type a barcode into the scan dialog
    Manual { barcode: String },
    /// Fill in and commit the review form: `review [category...] <qty>`
    Review {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Add every scanned item to inventory
    Done,
    /// Close the scan dialog
    Close,
    /// Ask the assistant
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Show the assistant conversation
    Chat,
    /// Show or switch the display language
    Lang { code: Option<String> },
    /// Dashboard, sales and stock reports
    Report { period: Option<String> },
    /// System users
    Users,
    /// Show configuration
    Config,
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Subcommand)]
enum FilterAction {
    /// Open the panel (sliders span the catalog)
    Open,
    Price { min: String, max: String },
    Qty { min: i64, max: i64 },
    /// Category label, or `all`
    Category { name: Vec<String> },
    /// expired | thisMonth | nextMonth | none
    Expiry { bucket: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Switch {
    On,
    Off,
}

/// What a line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Splits a line on whitespace, keeping `"double quoted"` runs together.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        tokens.push(current);
    }
    tokens
}

fn json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::internal(e.to_string()))
}

fn note(notification: &Notification) -> String {
    format!("{}: {}", notification.title, notification.description)
}

// =============================================================================
// Console
// =============================================================================

/// Executes console lines against an [`App`].
pub struct Console {
    app: App,
}

impl Console {
    pub fn new(app: App) -> Self {
        Console { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Runs one line. Usage mistakes come back as `Output` with the usage
    /// text; command failures as `Err`.
    pub async fn execute(&self, line: &str) -> Result<Outcome, ApiError> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(Outcome::Output(String::new()));
        }

        let command = match Line::try_parse_from(&tokens) {
            Ok(line) => line.command,
            Err(e) => return Ok(Outcome::Output(e.to_string())),
        };
        debug!(?command, "Console command");

        self.dispatch(command).await
    }

    async fn dispatch(&self, command: ConsoleCommand) -> Result<Outcome, ApiError> {
        let app = &self.app;
        let out = match command {
            ConsoleCommand::Products { term } => json(
                &product::search_products(&app.db, &app.inventory, &term.join(" ")).await?,
            )?,
            ConsoleCommand::Lowstock => {
                let notification = product::toggle_low_stock(&app.inventory);
                let products = product::list_products(&app.db, &app.inventory).await?;
                format!("{}\n{}", note(&notification), json(&products)?)
            }
            ConsoleCommand::Filter { action } => self.filter(action).await?,
            ConsoleCommand::Sort => {
                let notification = product::toggle_sort_order(&app.inventory);
                let products = product::list_products(&app.db, &app.inventory).await?;
                format!("{}\n{}", note(&notification), json(&products)?)
            }
            ConsoleCommand::Clear => note(&product::clear_filters(&app.inventory)),
            ConsoleCommand::New {
                name,
                category,
                barcode,
                price,
                quantity,
                expiry,
            } => {
                let form = NewProduct {
                    name,
                    category,
                    barcode,
                    price: parse_price(&price)?,
                    quantity,
                    expiry_date: expiry,
                };
                let created = product::add_product(&app.db, form).await?;
                format!("{}\n{}", note(&created.notification), json(&created.product)?)
            }
            ConsoleCommand::Add { code } => {
                let result = if code.trim().chars().count() >= MIN_BARCODE_LENGTH {
                    cart::scan_to_bill(&app.db, &app.cart, &app.config, &code).await?
                } else {
                    cart::add_to_cart(&app.db, &app.cart, &app.config, &code).await?
                };
                format!("{}\n{}", note(&result.notification), json(&result.cart)?)
            }
            ConsoleCommand::Qty { id, quantity } => {
                json(&cart::update_cart_item(&app.cart, &app.config, &id, quantity)?)?
            }
            ConsoleCommand::Remove { id } => {
                let result = cart::remove_from_cart(&app.cart, &app.config, &id)?;
                format!("{}\n{}", note(&result.notification), json(&result.cart)?)
            }
            ConsoleCommand::Cart => json(&cart::get_cart(&app.cart, &app.config))?,
            ConsoleCommand::Checkout { name, phone } => {
                if name.is_some() || phone.is_some() {
                    cart::set_customer(&app.cart, &app.config, name, phone);
                }
                let result = cart::checkout(&app.db, &app.cart, &app.config).await?;
                format!(
                    "{}\n{}",
                    note(&result.notification),
                    cart::render_receipt(&result.bill, &app.config)
                )
            }
            ConsoleCommand::Scan => {
                scan::start_scan(&app.scan).await?;
                json(&scan::await_detection(&app.scan, SCAN_WAIT).await)?
            }
            ConsoleCommand::Continuous { switch } => json(&scan::set_continuous_scan(
                &app.scan,
                matches!(switch, Switch::On),
            ))?,
            ConsoleCommand::Manual { barcode } => self.manual(&barcode).await?,
            ConsoleCommand::Review { mut words } => {
                let quantity = words.pop().unwrap_or_default();
                let category = (!words.is_empty()).then(|| words.join(" "));
                scan::update_review(&app.scan, category.as_deref(), Some(&quantity))?;
                let product = scan::commit_review(&app.scan).await?;
                format!(
                    "Listed {} x{}\n{}",
                    product.name,
                    product.quantity,
                    json(&scan::scan_status(&app.scan))?
                )
            }
            ConsoleCommand::Done => {
                let added = scan::add_scanned_to_inventory(&app.db, &app.scan).await?;
                format!("{}\n{}", note(&added.notification), json(&added.products)?)
            }
            ConsoleCommand::Close => json(&scan::close_scan(&app.scan))?,
            ConsoleCommand::Ask { text } => match chat::send_message(&app.chat, &text.join(" ")) {
                Some(message) => format!(
                    "You: {}\n(the assistant answers in {} ms; type `chat` to read it)",
                    message.text, app.config.chat_reply_delay_ms
                ),
                None => String::new(),
            },
            ConsoleCommand::Chat => chat::get_messages(&app.chat)
                .iter()
                .map(|m| format!("{}: {}", if m.is_bot { "Assistant" } else { "You" }, m.text))
                .collect::<Vec<_>>()
                .join("\n"),
            ConsoleCommand::Lang { code: Some(code) } => {
                note(&config::set_language(&app.settings, &code)?)
            }
            ConsoleCommand::Lang { code: None } => {
                let current = config::get_language(&app.settings);
                let label = config::translate(&app.settings, "currentLanguage");
                format!("{}: {}\n{}", label, current.display_name, json(&config::list_languages())?)
            }
            ConsoleCommand::Report { period } => self.report(period.as_deref()).await?,
            ConsoleCommand::Users => json(&report::list_users(&app.db).await?)?,
            ConsoleCommand::Config => json(&config::get_config(&app.config))?,
            ConsoleCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(out))
    }

    async fn filter(&self, action: FilterAction) -> Result<String, ApiError> {
        let app = &self.app;
        let update = match action {
            FilterAction::Open => {
                return json(&product::open_filter_panel(&app.db, &app.inventory).await?);
            }
            FilterAction::Price { min, max } => FilterUpdate {
                price_range: Some((parse_price(&min)?, parse_price(&max)?)),
                ..FilterUpdate::default()
            },
            FilterAction::Qty { min, max } => FilterUpdate {
                quantity_range: Some((min, max)),
                ..FilterUpdate::default()
            },
            FilterAction::Category { name } => {
                let name = name.join(" ");
                FilterUpdate {
                    category: Some(if name.eq_ignore_ascii_case("all") {
                        String::new()
                    } else {
                        name
                    }),
                    ..FilterUpdate::default()
                }
            }
            FilterAction::Expiry { bucket } => {
                let expiry = if bucket.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(bucket.parse().map_err(ApiError::validation)?)
                };
                FilterUpdate {
                    expiry: Some(expiry),
                    ..FilterUpdate::default()
                }
            }
        };

        product::apply_filter_panel(&app.inventory, update);
        json(&product::list_products(&app.db, &app.inventory).await?)
    }

    async fn manual(&self, barcode: &str) -> Result<String, ApiError> {
        let app = &self.app;
        let snapshot = scan::scan_status(&app.scan);
        if !matches!(snapshot.state, kirana_core::scan::ScanState::ManualEntry { .. }) {
            scan::enter_manual(&app.scan)?;
        }

        match scan::submit_manual(&app.db, &app.scan, barcode).await {
            Ok(form) => json(&form),
            Err(e) if e.code == ErrorCode::ValidationError => Ok(note(&invalid_barcode())),
            Err(e) => Err(e),
        }
    }

    async fn report(&self, period: Option<&str>) -> Result<String, ApiError> {
        let app = &self.app;
        let period: SalesPeriod = match period {
            Some(p) => p.parse().map_err(ApiError::validation)?,
            None => SalesPeriod::default(),
        };
        let language = app.settings.language();

        let dashboard = report::dashboard(&app.db, &app.config).await?;
        let sales = report::sales_report(&app.db, period);
        let stock = report::inventory_report(&app.db).await?;

        Ok(format!(
            "== {} ==\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n== {} ==\n{}\n== {} ==\n{}",
            i18n::translate(language, "dashboard"),
            i18n::translate(language, "todaysSales"),
            app.config.format_money(dashboard.summary.todays_sales),
            i18n::translate(language, "totalProducts"),
            dashboard.summary.total_products,
            i18n::translate(language, "totalTransactions"),
            dashboard.summary.todays_transactions,
            i18n::translate(language, "lowStockItems"),
            dashboard.summary.low_stock_items,
            i18n::translate(language, "salesOverview"),
            json(&sales)?,
            i18n::translate(language, "inventory"),
            json(&stock)?,
        ))
    }
}

/// Reads lines from stdin until `quit` or end of input.
pub async fn run(console: Console) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let greeting = format!(
        "{} POS console. Type `help` for commands.\n",
        console.app().config.store_name
    );
    stdout.write_all(greeting.as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let text = match console.execute(&line).await {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) => text,
            Err(e) => json(&e).unwrap_or_else(|_| e.to_string()),
        };
        if !text.is_empty() {
            stdout.write_all(text.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
    }

    info!("Console closed");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ConfigState, DbState, ScanSession, Settings, SettingsState, SimulatedCamera};
    use chrono::Utc;
    use kirana_db::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn console(camera: SimulatedCamera) -> Console {
        let config = ConfigState::default();
        let db = DbState::new(MemoryStore::seeded(Utc::now()), Vec::new());
        let scan = ScanSession::with_detector(
            Arc::new(camera),
            db.store(),
            &config,
            Box::new(kirana_core::scan::SimulatedDetector::new(StdRng::seed_from_u64(1))),
            StdRng::seed_from_u64(2),
        );
        let settings = SettingsState::new(Settings::default(), None);
        Console::new(App::from_parts(config, settings, db, scan))
    }

    async fn output(console: &Console, line: &str) -> String {
        match console.execute(line).await {
            Ok(Outcome::Output(text)) => text,
            other => panic!("unexpected result for {:?}: {:?}", line, other),
        }
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(tokenize("  add   42 "), vec!["add", "42"]);
        assert_eq!(
            tokenize(r#"review "Personal Care" 3"#),
            vec!["review", "Personal Care", "3"]
        );
        assert_eq!(tokenize(r#"ask """#), vec!["ask", ""]);
        assert!(tokenize("   ").is_empty());
    }

    #[tokio::test]
    async fn test_billing_session() {
        let console = console(SimulatedCamera::new());

        let text = output(&console, "add 8901234567890").await;
        assert!(text.starts_with("Added to bill"));
        output(&console, "add 1").await;
        output(&console, "add 3").await;

        let text = output(&console, "add 12345678").await;
        assert!(text.starts_with("Product not found: No product found with barcode 12345678"));

        let text = output(&console, "checkout \"Rahul Kumar\" 9876543210").await;
        assert!(text.starts_with("Bill Generated: Successfully created bill for 2 items."));
        assert!(text.contains("Customer: Rahul Kumar"));
        assert!(text.ends_with("₹95.00"));

        let err = console.execute("checkout").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[tokio::test]
    async fn test_out_of_range_input_keeps_session_alive() {
        let console = console(SimulatedCamera::new());
        output(&console, "add 1").await;

        let err = console.execute("qty 1 9223372036854775807").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        let text = output(&console, "qty 1 0").await;
        assert!(text.contains("\"totalQuantity\": 1"));
        assert!(output(&console, "cart").await.contains("Tata Salt"));

        let err = console
            .execute("new Huge Snacks 8904063200099 100000000000000000 1")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        let err = console.execute("filter price 0 100000000000000000").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_inventory_session() {
        let console = console(SimulatedCamera::new());

        let text = output(&console, "products personal").await;
        assert!(text.contains("Colgate Toothpaste"));
        assert!(!text.contains("Tata Salt"));

        output(&console, "products").await;
        let text = output(&console, "lowstock").await;
        assert!(text.starts_with("Low stock filter on"));
        assert!(text.contains("Kissan Ketchup"));

        let text = output(&console, "clear").await;
        assert_eq!(text, "Filters cleared: Showing all inventory items.");

        let text = output(&console, "filter category Personal Care").await;
        assert!(text.contains("Dove Soap"));
        assert!(!text.contains("Tata Salt"));

        let text = output(&console, "filter category all").await;
        assert!(text.contains("Tata Salt"));

        let text =
            output(&console, r#"new "Haldiram Bhujia" Snacks 8904063200011 55 12"#).await;
        assert!(text.starts_with("Product added"));
        assert!(output(&console, "products bhujia").await.contains("8904063200011"));
    }

    #[tokio::test]
    async fn test_manual_scan_session() {
        let console = console(SimulatedCamera::unavailable("Permission denied"));

        let err = console.execute("scan").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CameraUnavailable);

        let text = output(&console, "manual 123").await;
        assert!(text.starts_with("Invalid barcode"));

        let text = output(&console, "manual 8907890123456").await;
        assert!(text.contains("Red Label Tea"));

        let text = output(&console, "review 5").await;
        assert!(text.starts_with("Listed Red Label Tea x5"));

        let text = output(&console, "done").await;
        assert!(text.starts_with("Products added to inventory: 1 products"));
        assert!(text.contains("\"quantity\": 35"));
    }

    #[tokio::test]
    async fn test_language_and_usage() {
        let console = console(SimulatedCamera::new());

        let text = output(&console, "lang hindi").await;
        assert!(text.contains("Hindi"));
        assert!(output(&console, "lang").await.contains("Hindi (हिंदी)"));

        let err = console.execute("lang klingon").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let usage = output(&console, "frobnicate").await;
        assert!(!usage.is_empty());
        assert!(matches!(console.execute("quit").await, Ok(Outcome::Quit)));
    }

    #[tokio::test]
    async fn test_report_and_users() {
        let console = console(SimulatedCamera::new());
        let text = output(&console, "report month").await;
        assert!(text.starts_with("== Dashboard =="));
        assert!(text.contains("Total Products: 10"));

        let err = console.execute("report year").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(output(&console, "users").await.contains("\"admin\""));
    }
}
