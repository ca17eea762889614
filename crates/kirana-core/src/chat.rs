//! # Chat Assistant
//!
//! Rule-based help for the floating "POS Assistant" window. Plain
//! substring matching over a fixed table, no learning.
//!
//! ## Matching Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input.to_lowercase()                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Keyword table, in declared order (first substring hit wins)        │
//! │     feature phrases → navigation words → general help                  │
//! │       │ no hit                                                          │
//! │       ▼                                                                 │
//! │  2. Compound rules ("product" + "add", "barcode" | "scan", ...)        │
//! │       │ no hit                                                          │
//! │       ▼                                                                 │
//! │  3. Fallback with the support phone number                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SUPPORT_PHONE;

/// First message in every conversation.
pub const GREETING: &str = "Hello! I'm here to help you navigate the POS system. You can ask me about inventory management, billing, reports, or any other features.";

const ADD_PRODUCT: &str = "To add a new product: Go to Inventory → Click 'Add Product' button → Fill in product details like name, price, category, and stock quantity → Save.";
const SCAN_BARCODE: &str = "To scan barcodes: Go to Inventory → Click 'Scan Barcode' button → Use your device camera to scan or enter barcode manually → Add product details.";
const CREATE_INVOICE: &str = "To create an invoice: Go to Billing → Select products from the grid → Add to cart → Enter customer details → Process payment → Generate receipt.";
const VIEW_SALES: &str = "To view sales data: Go to Reports → Check the sales charts and recent transactions → Filter by date range for specific periods.";
const LOW_STOCK: &str = "Low stock alerts appear on the Dashboard. You can also check inventory levels in the Inventory section and filter by stock status.";

/// Keyword → canned answer, checked in this order.
const KEYWORDS: [(&str, &str); 14] = [
    // Feature phrases
    ("add product", ADD_PRODUCT),
    ("scan barcode", SCAN_BARCODE),
    ("create invoice", CREATE_INVOICE),
    ("view sales", VIEW_SALES),
    ("low stock", LOW_STOCK),
    // Navigation
    ("inventory", "To access Inventory Management, click on 'Inventory' in the sidebar. Here you can view products, add new items, scan barcodes, and manage stock levels."),
    ("billing", "For Billing and POS operations, click on 'Billing' in the sidebar. You can create invoices, process payments, and manage customer transactions."),
    ("dashboard", "The Dashboard shows your business overview with sales charts, recent transactions, and low stock alerts. Click 'Dashboard' in the sidebar to access it."),
    ("reports", "To view Reports and analytics, click on 'Reports' in the sidebar. You'll find sales reports, inventory status, and business insights."),
    ("users", "User management is available in the 'Users' section in the sidebar. You can manage staff accounts and permissions."),
    ("settings", "Application settings can be found by clicking 'Settings' in the sidebar. Configure your business details, preferences, and system settings."),
    // General help
    ("help", "I can help you with navigation, inventory management, billing operations, reports, and general POS features. What would you like to know?"),
    ("how to", "I can guide you through various tasks. Try asking 'how to add product', 'how to create invoice', or 'how to view reports'."),
    ("navigation", "Use the sidebar menu to navigate between sections: Dashboard, Billing, Inventory, Reports, Users, and Settings. Each section has specific tools for different operations."),
];

// =============================================================================
// Rules
// =============================================================================

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    Keyword(&'static str),
    Compound(&'static str),
    Fallback,
}

/// The reply table.
pub struct ChatRules;

impl ChatRules {
    /// Canned answer for a user input.
    pub fn respond(input: &str) -> String {
        let input = input.to_lowercase();
        match Self::classify(&input) {
            (_, Some(text)) => text.to_string(),
            (_, None) => fallback(),
        }
    }

    /// Rule that fires for an input, for logging and tests.
    pub fn matched_rule(input: &str) -> RuleMatch {
        Self::classify(&input.to_lowercase()).0
    }

    fn classify(input: &str) -> (RuleMatch, Option<&'static str>) {
        if let Some((key, text)) = KEYWORDS.iter().find(|(key, _)| input.contains(key)) {
            return (RuleMatch::Keyword(*key), Some(*text));
        }

        let has = |word: &str| input.contains(word);
        let compound = if has("product") && has("add") {
            Some(("product+add", ADD_PRODUCT))
        } else if has("barcode") || has("scan") {
            Some(("barcode|scan", SCAN_BARCODE))
        } else if has("invoice") || has("bill") {
            Some(("invoice|bill", CREATE_INVOICE))
        } else if has("sales") || has("report") {
            Some(("sales|report", VIEW_SALES))
        } else if has("stock") && has("low") {
            Some(("stock+low", LOW_STOCK))
        } else {
            None
        };

        match compound {
            Some((rule, text)) => (RuleMatch::Compound(rule), Some(text)),
            None => (RuleMatch::Fallback, None),
        }
    }
}

fn fallback() -> String {
    format!(
        "I'm sorry, I couldn't find the answer to your question right now. For further assistance, please contact us at {}. We're here to help!",
        SUPPORT_PHONE
    )
}

// =============================================================================
// Conversation
// =============================================================================

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, is_bot: bool, now: DateTime<Utc>) -> Self {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_bot,
            timestamp: now,
        }
    }
}

/// Append-only message history, opened with the greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new(now: DateTime<Utc>) -> Self {
        ChatLog {
            messages: vec![ChatMessage::new(GREETING, true, now)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a user message. Blank input is ignored and returns `None`.
    pub fn push_user(&mut self, text: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(text, false, now));
        self.messages.last()
    }

    /// Appends a bot message.
    pub fn push_bot(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> &ChatMessage {
        self.messages.push(ChatMessage::new(text, true, now));
        &self.messages[self.messages.len() - 1]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
